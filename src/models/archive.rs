// src/models/archive.rs

//! Archive (精華區) records.

use serde::{Deserialize, Serialize};

/// An entry of an archive directory page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Display text of the entry
    pub content: String,

    /// Directory path below the board, empty when the entry is not a directory
    pub href: String,
}
