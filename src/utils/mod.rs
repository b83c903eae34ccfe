// src/utils/mod.rs

//! Utility functions and helpers.

pub mod http;
pub mod text;
pub mod transform;
pub mod url;
