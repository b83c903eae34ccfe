// src/models/board.rs

//! Board listing records.

use serde::{Deserialize, Serialize};

/// Score shown for posts whose push count has gone viral ("爆").
pub const VIRAL_SCORE: i32 = -1;

/// An entry of the hot boards page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HotBoard {
    /// Identifier unique within one extraction
    pub id: String,

    /// Category label (看版分類)
    pub board_class: String,

    /// Board name, e.g. `Gossiping`
    pub board_name: String,

    /// Board title with the leading decoration glyph removed
    pub board_title: String,

    /// Number of users currently on the board
    pub board_rate: i32,

    /// Popularity tier, 1 (hottest) to 5
    pub board_level: u8,

    /// Board path, usable with `PttClient::board`
    pub board_href: String,
}

/// An entry of a board-group page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroupBoard {
    pub id: String,
    pub board_class: String,
    pub board_name: String,
    pub board_title: String,

    /// Numeric group id the entry links to, empty for leaf boards
    pub board_href: String,
}

/// A post row of a board or search page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardItem {
    pub id: String,
    pub title: String,

    /// `Board/M.1700000000.A.ABC`, empty for deleted posts
    pub href: String,
    pub author: String,
    pub date: String,

    /// Push score, or [`VIRAL_SCORE`]
    pub rate: i32,

    /// Highlight tier, 1 to 4
    pub level: u8,
}

/// One page of a board (or of a board search).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BoardListing {
    /// Whether the age-restriction notice had to be acknowledged
    #[serde(rename = "need18up")]
    pub age_gated: bool,

    /// Rows in document order
    pub data: Vec<BoardItem>,

    /// Page id of the page being shown (search: the requested page)
    pub current_id: String,
    pub board_name: String,
}

/// Search results share the board listing shape.
pub type SearchListing = BoardListing;

impl BoardListing {
    /// Whether the listing holds no rows.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_serializes_like_the_site_client() {
        let listing = BoardListing {
            age_gated: true,
            data: Vec::new(),
            current_id: "39000".to_string(),
            board_name: "Gossiping".to_string(),
        };
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["need18up"], true);
        assert_eq!(json["currentId"], "39000");
        assert_eq!(json["boardName"], "Gossiping");
        assert!(listing.is_empty());
    }
}
