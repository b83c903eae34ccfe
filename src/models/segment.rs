// src/models/segment.rs

//! Mixed text/token sequences produced by the text transformers.

use serde::Serialize;

/// A piece of a transformed string: either untouched text or a value
/// produced for a matched URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Segment<T> {
    Text(String),
    Item(T),
}

impl<T> Segment<T> {
    /// Build a text segment.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Item(_) => None,
        }
    }

    pub fn as_item(&self) -> Option<&T> {
        match self {
            Self::Text(_) => None,
            Self::Item(item) => Some(item),
        }
    }
}

impl<T> From<&str> for Segment<T> {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}
