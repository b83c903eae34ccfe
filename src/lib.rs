// src/lib.rs

//! PTT bulletin board client library.
//!
//! Fetches pages of the PTT web front-end (getting past the age-restriction
//! interstitial when needed) and turns them into typed records: hot boards,
//! board groups, board pages, search results, posts with comments and archive
//! directories. The text transformers split article text around image and
//! link URLs for rendering.

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{AppError, Result};
pub use services::PttClient;
pub use utils::transform::{transform_images, transform_urls};
