// src/services/archive.rs

//! Archive (精華區) directory extractor.

use scraper::Html;

use crate::error::Result;
use crate::models::ArchiveEntry;
use crate::utils::text::{child_text, parse_selector};
use crate::utils::url::archive_path_from_href;

/// Parse an archive directory page of `board`.
pub fn parse_archive(html: &str, board: &str) -> Result<Vec<ArchiveEntry>> {
    let document = Html::parse_document(html);
    let entry = parse_selector(".m-ent")?;
    let title = parse_selector(".title")?;
    let link = parse_selector(".title > a")?;

    let entries: Vec<ArchiveEntry> = document
        .select(&entry)
        .map(|el| ArchiveEntry {
            content: child_text(el, &title),
            href: el
                .select(&link)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(|href| archive_path_from_href(href, board))
                .unwrap_or_default(),
        })
        .collect();

    log::debug!("Archive of {}: {} entries", board, entries.len());
    Ok(entries)
}
