// src/utils/url.rs

//! Site paths and href parsing.
//!
//! Request paths are relative to `site.base_url`; the href parsers take the
//! raw `href` attribute and degrade to an empty string when it does not have
//! the expected shape.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;

pub const HOT_BOARDS_PATH: &str = "/bbs/hotboards.html";

static HOT_BOARD_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/bbs/(.+)/index\.html$").expect("hot board href pattern is valid")
});

static TRAILING_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+$").expect("digits pattern is valid"));

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digits pattern is valid"));

/// `/cls/{page}`
pub fn group_path(page: &str) -> String {
    format!("/cls/{page}")
}

/// `/bbs/{board}/index{page_id}.html`; an empty id is the newest page.
pub fn board_path(board: &str, page_id: &str) -> String {
    format!("/bbs/{board}/index{page_id}.html")
}

/// `/bbs/{path}.html`
pub fn post_path(path: &str) -> String {
    format!("/bbs/{path}.html")
}

/// `/man/{board}/{page}/index.html`, or the archive root when `page` is empty.
pub fn archive_path(board: &str, page: &str) -> String {
    let page = page.trim_matches('/');
    if page.is_empty() {
        format!("/man/{board}/index.html")
    } else {
        format!("/man/{board}/{page}/index.html")
    }
}

/// `/bbs/{board}/search`
pub fn search_path(board: &str) -> String {
    format!("/bbs/{board}/search")
}

/// Add `page` and `q` query parameters to an absolute search endpoint, keyword encoded.
pub fn search_url(endpoint: &str, keyword: &str, page: &str) -> Result<String> {
    let mut url = url::Url::parse(endpoint)?;
    url.query_pairs_mut()
        .append_pair("page", page)
        .append_pair("q", keyword);
    Ok(url.to_string())
}

/// `/bbs/Gossiping/index.html` → `Gossiping`
pub fn board_from_href(href: &str) -> String {
    HOT_BOARD_HREF
        .captures(href)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// `/cls/1234` → `1234`
pub fn group_id_from_href(href: &str) -> String {
    TRAILING_DIGITS
        .find(href)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// `/bbs/Gossiping/M.1700000000.A.ABC.html` → `Gossiping/M.1700000000.A.ABC`
pub fn post_path_from_href(href: &str) -> String {
    let parts: Vec<&str> = href.split('/').collect();
    if parts.len() < 2 {
        return String::new();
    }
    let tail = format!("{}/{}", parts[parts.len() - 2], parts[parts.len() - 1]);
    match tail.rfind(".html") {
        Some(idx) if idx > 0 => tail[..idx].to_string(),
        _ => String::new(),
    }
}

/// `/bbs/Gossiping/index39000.html` → `39000`
pub fn page_id_from_href(href: &str) -> String {
    let last = href.rsplit('/').next().unwrap_or_default();
    DIGITS
        .find(last)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// `/man/Gossiping/D8B2/DE6C/index.html` → `D8B2/DE6C` for board `Gossiping`
pub fn archive_path_from_href(href: &str, board: &str) -> String {
    let marker = format!("{board}/");
    let Some(idx) = href.find(&marker) else {
        return String::new();
    };
    href[idx + marker.len()..]
        .strip_suffix("/index.html")
        .filter(|rest| !rest.is_empty())
        .map(str::to_string)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_paths() {
        assert_eq!(group_path("1"), "/cls/1");
        assert_eq!(board_path("Gossiping", ""), "/bbs/Gossiping/index.html");
        assert_eq!(board_path("Gossiping", "39000"), "/bbs/Gossiping/index39000.html");
        assert_eq!(post_path("Gossiping/M.1.A.B"), "/bbs/Gossiping/M.1.A.B.html");
        assert_eq!(archive_path("Gossiping", ""), "/man/Gossiping/index.html");
        assert_eq!(archive_path("Gossiping", "D8B2"), "/man/Gossiping/D8B2/index.html");
    }

    #[test]
    fn test_search_url_encodes_keyword() {
        let endpoint = format!("https://www.ptt.cc{}", search_path("Gossiping"));
        let url = search_url(&endpoint, "問卦 test", "2").unwrap();
        assert_eq!(
            url,
            "https://www.ptt.cc/bbs/Gossiping/search?page=2&q=%E5%95%8F%E5%8D%A6+test"
        );
    }

    #[test]
    fn test_search_url_keeps_endpoint_path() {
        let url = search_url("http://127.0.0.1:3000/proxy/bbs/Stock/search", "x", "1").unwrap();
        assert_eq!(url, "http://127.0.0.1:3000/proxy/bbs/Stock/search?page=1&q=x");
    }

    #[test]
    fn test_board_from_href() {
        assert_eq!(board_from_href("/bbs/Gossiping/index.html"), "Gossiping");
        assert_eq!(board_from_href("/bbs/Gossiping/index2.html"), "");
        assert_eq!(board_from_href(""), "");
    }

    #[test]
    fn test_group_id_from_href() {
        assert_eq!(group_id_from_href("/cls/1234"), "1234");
        assert_eq!(group_id_from_href("/bbs/Gossiping/index.html"), "");
    }

    #[test]
    fn test_post_path_from_href() {
        assert_eq!(
            post_path_from_href("/bbs/Gossiping/M.1700000000.A.ABC.html"),
            "Gossiping/M.1700000000.A.ABC"
        );
        assert_eq!(post_path_from_href("/bbs/Gossiping/"), "");
        assert_eq!(post_path_from_href("nohtml"), "");
    }

    #[test]
    fn test_page_id_from_href() {
        assert_eq!(page_id_from_href("/bbs/Gossiping/index39000.html"), "39000");
        assert_eq!(page_id_from_href("/bbs/Gossiping/index.html"), "");
    }

    #[test]
    fn test_archive_path_from_href() {
        assert_eq!(
            archive_path_from_href("/man/Gossiping/D8B2/DE6C/index.html", "Gossiping"),
            "D8B2/DE6C"
        );
        assert_eq!(
            archive_path_from_href("/man/Gossiping/D8B2/M.1.A.B.html", "Gossiping"),
            ""
        );
        assert_eq!(archive_path_from_href("/man/Other/D1/index.html", "Gossiping"), "");
    }
}
