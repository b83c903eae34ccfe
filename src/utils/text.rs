// src/utils/text.rs

//! Selector and text helpers shared by the extractors.

use chrono::{FixedOffset, NaiveDateTime};
use scraper::{ElementRef, Selector};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::{AppError, Result};

/// Formats post timestamps are known to appear in.
const TIME_FORMATS: &[&str] = &["%a %b %d %H:%M:%S %Y", "%Y/%m/%d %H:%M:%S"];

/// Parse a CSS selector, mapping failures to `AppError::Selector`.
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

/// Concatenated text of an element and its descendants.
pub fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Trimmed text of an element.
pub fn trimmed_text(el: ElementRef<'_>) -> String {
    element_text(el).trim().to_string()
}

/// Text of the first descendant matching `selector`, trimmed; empty if none.
pub fn child_text(el: ElementRef<'_>, selector: &Selector) -> String {
    el.select(selector).next().map(trimmed_text).unwrap_or_default()
}

/// Drop the first `n` user-perceived characters of `s`.
pub fn skip_graphemes(s: &str, n: usize) -> String {
    s.graphemes(true).skip(n).collect()
}

/// Parse a post timestamp into epoch milliseconds.
///
/// The site prints local time without a zone, so `utc_offset_minutes` decides
/// the instant. Anything unparsable yields `0`.
pub fn parse_post_time(raw: &str, utc_offset_minutes: i32) -> i64 {
    let normalized = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return 0;
    }
    let Some(offset) = FixedOffset::east_opt(utc_offset_minutes * 60) else {
        return 0;
    };

    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
        .and_then(|naive| naive.and_local_timezone(offset).single())
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| {
            log::debug!("Unparsable post time: {:?}", raw);
            0
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_parse_selector_valid() {
        assert!(parse_selector(".b-ent > .board").is_ok());
        assert!(parse_selector("#main-content").is_ok());
    }

    #[test]
    fn test_parse_selector_invalid() {
        assert!(matches!(
            parse_selector("[[invalid"),
            Err(AppError::Selector { .. })
        ));
    }

    #[test]
    fn test_child_text() {
        let doc = Html::parse_fragment(r#"<div class="push"><span class="push-tag">推 </span></div>"#);
        let push = doc.select(&parse_selector(".push").unwrap()).next().unwrap();
        assert_eq!(child_text(push, &parse_selector(".push-tag").unwrap()), "推");
        assert_eq!(child_text(push, &parse_selector(".missing").unwrap()), "");
    }

    #[test]
    fn test_skip_graphemes() {
        assert_eq!(skip_graphemes("◎[八卦] 八卦版", 1), "[八卦] 八卦版");
        assert_eq!(skip_graphemes(": 推文", 2), "推文");
        assert_eq!(skip_graphemes("", 1), "");
    }

    #[test]
    fn test_parse_post_time_taipei() {
        // 2024-10-19T04:34:56Z
        assert_eq!(parse_post_time("Sat Oct 19 12:34:56 2024", 480), 1_729_312_496_000);
    }

    #[test]
    fn test_parse_post_time_padded_day() {
        // 2024-10-05T00:00:00Z
        assert_eq!(parse_post_time("Sat Oct  5 08:00:00 2024", 480), 1_728_086_400_000);
    }

    #[test]
    fn test_parse_post_time_invalid_is_zero() {
        assert_eq!(parse_post_time("", 480), 0);
        assert_eq!(parse_post_time("yesterday", 480), 0);
    }
}
