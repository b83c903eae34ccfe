// src/services/boards.rs

//! Listing extractors: hot boards, board groups, board pages and search results.

use scraper::Html;

use crate::error::Result;
use crate::models::{BoardItem, BoardListing, GroupBoard, HotBoard, SearchListing};
use crate::services::fields::{BOARD_TIERS, FieldScan, HOT_BOARD_TIERS, parse_score};
use crate::utils::text::{element_text, parse_selector, skip_graphemes, trimmed_text};
use crate::utils::url::{board_from_href, group_id_from_href, page_id_from_href, post_path_from_href};

/// Pager button whose target is the page being shown (‹ 上頁 is the second of four).
const CURRENT_PAGE_BUTTON: usize = 1;

/// Parse the hot boards page.
pub fn parse_hot_boards(html: &str) -> Result<Vec<HotBoard>> {
    let document = Html::parse_document(html);
    let scan = FieldScan::new(&document, "hot boards", ".b-ent")?;

    let mut boards = scan.allocate(|id| HotBoard {
        id,
        ..HotBoard::default()
    });

    scan.fill(&mut boards, ".board-class", |b, el| b.board_class = trimmed_text(el))?;
    scan.fill(&mut boards, ".board-name", |b, el| b.board_name = trimmed_text(el))?;
    scan.fill(&mut boards, ".board-title", |b, el| {
        b.board_title = skip_graphemes(element_text(el).trim(), 1)
    })?;
    scan.fill(&mut boards, ".board-nuser", |b, el| {
        b.board_rate = trimmed_text(el).parse().unwrap_or(0);
        b.board_level = HOT_BOARD_TIERS.of(el);
    })?;
    scan.fill(&mut boards, ".b-ent > .board", |b, el| {
        b.board_href = board_from_href(el.value().attr("href").unwrap_or_default());
    })?;

    Ok(boards)
}

/// Parse a board-group (`/cls/`) page.
pub fn parse_group_boards(html: &str) -> Result<Vec<GroupBoard>> {
    let document = Html::parse_document(html);
    let scan = FieldScan::new(&document, "group boards", ".b-ent")?;

    let mut boards = scan.allocate(|id| GroupBoard {
        id,
        ..GroupBoard::default()
    });

    scan.fill(&mut boards, ".board-class", |b, el| b.board_class = trimmed_text(el))?;
    scan.fill(&mut boards, ".board-name", |b, el| b.board_name = trimmed_text(el))?;
    scan.fill(&mut boards, ".board-title", |b, el| {
        b.board_title = skip_graphemes(element_text(el).trim(), 1)
    })?;
    scan.fill(&mut boards, ".b-ent > .board", |b, el| {
        b.board_href = group_id_from_href(el.value().attr("href").unwrap_or_default());
    })?;

    Ok(boards)
}

/// Parse the post rows of a board or search page.
pub fn parse_board_items(document: &Html) -> Result<Vec<BoardItem>> {
    let scan = FieldScan::new(document, "board items", ".r-ent")?;
    let anchor = parse_selector("a")?;

    let mut items = scan.allocate(|id| BoardItem {
        id,
        ..BoardItem::default()
    });

    scan.fill(&mut items, ".title", |item, el| {
        item.title = trimmed_text(el);
        // Deleted posts keep the title cell but lose the link.
        if let Some(a) = el.select(&anchor).next() {
            if !element_text(a).is_empty() {
                item.href = post_path_from_href(a.value().attr("href").unwrap_or_default());
            }
        }
    })?;
    scan.fill(&mut items, ".author", |item, el| item.author = trimmed_text(el))?;
    scan.fill(&mut items, ".date", |item, el| item.date = trimmed_text(el))?;
    scan.fill(&mut items, ".nrec", |item, el| {
        item.rate = parse_score(&element_text(el));
        item.level = BOARD_TIERS.of(el);
    })?;

    Ok(items)
}

/// Page id the pager points at, empty when the button or its link is missing.
pub fn parse_current_page_id(document: &Html) -> Result<String> {
    let buttons = parse_selector(".btn-group-paging > .btn")?;
    Ok(document
        .select(&buttons)
        .nth(CURRENT_PAGE_BUTTON)
        .and_then(|btn| btn.value().attr("href"))
        .map(page_id_from_href)
        .unwrap_or_default())
}

/// Parse a board index page.
pub fn parse_board_listing(html: &str, board_name: &str, age_gated: bool) -> Result<BoardListing> {
    let document = Html::parse_document(html);
    let current_id = parse_current_page_id(&document)?;
    let data = parse_board_items(&document)?;

    Ok(BoardListing {
        age_gated,
        data,
        current_id,
        board_name: board_name.to_string(),
    })
}

/// Parse a board search result page; `current_id` is the requested page.
pub fn parse_search_listing(
    html: &str,
    board_name: &str,
    page: &str,
    age_gated: bool,
) -> Result<SearchListing> {
    let document = Html::parse_document(html);
    let data = parse_board_items(&document)?;

    Ok(SearchListing {
        age_gated,
        data,
        current_id: page.to_string(),
        board_name: board_name.to_string(),
    })
}
