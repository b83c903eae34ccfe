// src/utils/transform.rs

//! Text transformers that cut image and link URLs out of article text.
//!
//! Both functions are pure: they only split the input around regex matches
//! and ask the callback what to put in place of each match.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::Segment;

static IMAGE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"https?://(?:[a-zA-Z0-9\-._~:/?#\[\]@!$&'()*+,;=]|%[a-fA-F0-9]{2})*\.(?:jpg|jpeg|png|gif|bmp|svg|webp)",
    )
    .expect("image URL pattern is valid")
});

static GENERIC_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("URL pattern is valid"));

/// Split `content` around image URLs, replacing each with `callback(url, ordinal)`.
///
/// The result always alternates text and item, starting and ending with text
/// (possibly empty), so `n` matches produce `2n + 1` segments.
pub fn transform_images<T, F>(content: &str, mut callback: F) -> Vec<Segment<T>>
where
    F: FnMut(&str, usize) -> T,
{
    let mut segments = Vec::new();
    let mut last = 0;

    for (ordinal, m) in IMAGE_URL.find_iter(content).enumerate() {
        segments.push(Segment::text(&content[last..m.start()]));
        segments.push(Segment::Item(callback(m.as_str(), ordinal)));
        last = m.end();
    }
    segments.push(Segment::text(&content[last..]));

    segments
}

/// Split every text segment around `http(s)://` URLs, replacing each with
/// `callback(url, ordinal)`. Item segments pass through untouched.
///
/// The ordinal restarts at zero for each text segment. A trailing empty text
/// piece after the last URL of a segment is not emitted.
pub fn transform_urls<T, I, F>(segments: I, mut callback: F) -> Vec<Segment<T>>
where
    I: IntoIterator<Item = Segment<T>>,
    F: FnMut(&str, usize) -> T,
{
    let mut processed = Vec::new();

    for segment in segments {
        let text = match segment {
            Segment::Text(text) => text,
            item => {
                processed.push(item);
                continue;
            }
        };

        if !GENERIC_URL.is_match(&text) {
            processed.push(Segment::Text(text));
            continue;
        }

        let mut last = 0;
        for (ordinal, m) in GENERIC_URL.find_iter(&text).enumerate() {
            processed.push(Segment::text(&text[last..m.start()]));
            processed.push(Segment::Item(callback(m.as_str(), ordinal)));
            last = m.end();
        }
        if last < text.len() {
            processed.push(Segment::text(&text[last..]));
        }
    }

    processed
}
