// src/services/mod.rs

//! Service layer for the PTT client.
//!
//! This module contains the extraction logic:
//! - Age-gate aware fetching (`GatedFetcher`)
//! - Positional field extraction (`FieldScan`)
//! - Listing, post and archive parsers
//! - The `PttClient` facade tying them together

pub mod archive;
pub mod boards;
mod client;
pub mod fetcher;
pub mod fields;
pub mod posts;

pub use client::PttClient;
pub use fetcher::{GatedFetcher, GatedPage};
