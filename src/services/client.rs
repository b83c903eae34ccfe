// src/services/client.rs

//! High-level client: one method per page kind.
//!
//! Every call is a fresh fetch followed by a synchronous parse. The client
//! keeps only its configuration and HTTP connection pool between calls.

use std::sync::Arc;

use crate::error::Result;
use crate::models::{ArchiveEntry, BoardListing, Config, GroupBoard, HotBoard, Post, SearchListing};
use crate::services::archive::parse_archive;
use crate::services::boards::{
    parse_board_listing, parse_group_boards, parse_hot_boards, parse_search_listing,
};
use crate::services::fetcher::GatedFetcher;
use crate::services::posts::parse_post;
use crate::utils::http::create_async_client;
use crate::utils::url::{
    HOT_BOARDS_PATH, archive_path, board_path, group_path, post_path, search_path,
    search_url,
};

const DEFAULT_GROUP_PAGE: &str = "1";
const DEFAULT_SEARCH_PAGE: &str = "1";

/// Client for the PTT web front-end.
#[derive(Debug, Clone)]
pub struct PttClient {
    config: Arc<Config>,
    fetcher: GatedFetcher,
}

impl PttClient {
    /// Create a client with the given configuration.
    pub fn new(config: Arc<Config>) -> Result<Self> {
        config.validate()?;
        let client = create_async_client(&config.crawler)?;
        Ok(Self {
            config,
            fetcher: GatedFetcher::new(client)?,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Boards currently listed on the hot boards page.
    pub async fn hot_boards(&self) -> Result<Vec<HotBoard>> {
        let page = self.fetcher.fetch(&self.config.url(HOT_BOARDS_PATH)).await?;
        parse_hot_boards(&page.html)
    }

    /// Entries of a board group; `None` is the root group.
    pub async fn group_boards(&self, page: Option<&str>) -> Result<Vec<GroupBoard>> {
        let page = page.unwrap_or(DEFAULT_GROUP_PAGE);
        let fetched = self.fetcher.fetch(&self.config.url(&group_path(page))).await?;
        parse_group_boards(&fetched.html)
    }

    /// A page of a board; `None` is the newest page.
    pub async fn board(&self, name: &str, page_id: Option<&str>) -> Result<BoardListing> {
        let url = self.config.url(&board_path(name, page_id.unwrap_or_default()));
        let page = self.fetcher.fetch(&url).await?;
        parse_board_listing(&page.html, name, page.age_gated)
    }

    /// A single post, addressed as `Board/M.xxx.A.yyy`.
    pub async fn post(&self, path: &str) -> Result<Post> {
        let page = self.fetcher.fetch(&self.config.url(&post_path(path))).await?;
        parse_post(
            &page.html,
            path,
            page.age_gated,
            self.config.site.utc_offset_minutes,
        )
    }

    /// An archive directory of a board; `None` is its root.
    pub async fn board_archive(&self, board: &str, page: Option<&str>) -> Result<Vec<ArchiveEntry>> {
        let url = self.config.url(&archive_path(board, page.unwrap_or_default()));
        let fetched = self.fetcher.fetch(&url).await?;
        parse_archive(&fetched.html, board)
    }

    /// Search a board's titles for `keyword`.
    pub async fn search_posts(
        &self,
        board: &str,
        keyword: &str,
        page: Option<&str>,
    ) -> Result<SearchListing> {
        let page = page.unwrap_or(DEFAULT_SEARCH_PAGE);
        let url = search_url(&self.config.url(&search_path(board)), keyword, page)?;
        let fetched = self.fetcher.fetch(&url).await?;
        parse_search_listing(&fetched.html, board, page, fetched.age_gated)
    }
}
