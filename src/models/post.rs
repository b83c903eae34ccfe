// src/models/post.rs

//! Post and comment records.

use serde::{Deserialize, Serialize};

/// A single article page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Path the post was requested with, e.g. `Gossiping/M.1700000000.A.ABC`
    pub page: String,

    #[serde(rename = "need18up")]
    pub age_gated: bool,
    pub author: String,
    pub title: String,

    /// Posting time in epoch milliseconds, `0` when unparsable
    pub time: i64,

    /// Board name from the right-hand metadata line
    pub board: String,

    /// Article body without metadata line and signature block
    pub article: String,
    pub from_ip: String,

    /// Country label following the origin IP, may be empty
    pub from_country: String,

    /// Last edit time as `MM/DD/YYYY hh:mm:ss`, may be empty
    pub edited: String,
    pub comments: Vec<Comment>,
}

/// Push tag of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushTag {
    /// 推
    Push,
    /// 噓
    Boo,
    /// →
    Arrow,
}

impl PushTag {
    /// Recognize a trimmed tag glyph.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "推" => Some(Self::Push),
            "噓" => Some(Self::Boo),
            "→" => Some(Self::Arrow),
            _ => None,
        }
    }
}

/// A push/boo/arrow line below an article.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: String,

    /// Raw tag glyph; see [`Comment::push_tag`]
    pub tag: String,
    pub user: String,
    pub content: String,
    pub time: String,
}

impl Comment {
    pub fn push_tag(&self) -> Option<PushTag> {
        PushTag::parse(&self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_tag_parse() {
        assert_eq!(PushTag::parse("推"), Some(PushTag::Push));
        assert_eq!(PushTag::parse("噓"), Some(PushTag::Boo));
        assert_eq!(PushTag::parse("→"), Some(PushTag::Arrow));
        assert_eq!(PushTag::parse("?"), None);
    }
}
