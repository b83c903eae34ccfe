// src/models/mod.rs

//! Domain models for the PTT client.
//!
//! All records are plain values produced once per call and handed to the
//! caller; nothing here holds state between requests.

mod archive;
mod board;
mod config;
mod post;
mod segment;

// Re-export all public types
pub use archive::ArchiveEntry;
pub use board::{BoardItem, BoardListing, GroupBoard, HotBoard, SearchListing, VIRAL_SCORE};
pub use config::{Config, CrawlerConfig, SiteConfig};
pub use post::{Comment, Post, PushTag};
pub use segment::Segment;
