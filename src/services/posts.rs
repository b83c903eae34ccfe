// src/services/posts.rs

//! Post extractor: metadata, article body, signature block and comments.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use crate::error::Result;
use crate::models::{Comment, Post};
use crate::services::fields::IdSequence;
use crate::utils::text::{
    child_text, element_text, parse_post_time, parse_selector, skip_graphemes,
};

/// Line separating the article from its signature block.
pub const SIGNATURE_SEPARATOR: &str = "--";

static IP_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.[0-9]+\.[0-9]+\.[0-9]+").expect("IP pattern is valid"));

static COUNTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([\x{4E00}-\x{9FFF}]+)\)").expect("country pattern is valid")
});

static EDITED_AT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{2}/[0-9]{2}/[0-9]{4} [0-9]{2}:[0-9]{2}:[0-9]{2}").expect("edit time pattern is valid")
});

/// Origin and edit metadata found after the signature separator.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SignatureInfo {
    pub from_ip: String,
    pub from_country: String,
    pub edited: String,
}

/// Parse a post page.
pub fn parse_post(html: &str, page: &str, age_gated: bool, utc_offset_minutes: i32) -> Result<Post> {
    let document = Html::parse_document(html);
    let metaline = parse_selector(".article-metaline")?;
    let meta_value = parse_selector(".article-meta-value")?;
    let board = parse_selector(".article-metaline-right > .article-meta-value")?;
    let main_content = parse_selector("#main-content")?;

    let mut post = Post {
        page: page.to_string(),
        age_gated,
        ..Post::default()
    };

    for (index, line) in document.select(&metaline).enumerate() {
        let value = child_text(line, &meta_value);
        match index {
            0 => post.author = value,
            1 => post.title = value,
            2 => post.time = parse_post_time(&value, utc_offset_minutes),
            _ => {}
        }
    }

    post.board = document
        .select(&board)
        .map(element_text)
        .collect::<String>()
        .trim()
        .to_string();

    if let Some(content) = document.select(&main_content).next() {
        post.article = article_body(&element_text(content));

        let signature = parse_signature(&content.inner_html())?;
        post.from_ip = signature.from_ip;
        post.from_country = signature.from_country;
        post.edited = signature.edited;
    } else {
        log::debug!("No main content on post {}", page);
    }

    post.comments = parse_comments(&document)?;
    log::debug!("Post {}: {} comment(s)", page, post.comments.len());

    Ok(post)
}

/// Article body from the main content text.
///
/// Everything after the last separator is the signature; the first line is
/// the metadata header. Trailing whitespace before the separator is dropped.
pub fn article_body(text: &str) -> String {
    let segments: Vec<&str> = text.split(SIGNATURE_SEPARATOR).collect();
    let body = segments[..segments.len() - 1].join(SIGNATURE_SEPARATOR);

    body.split('\n')
        .skip(1)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}

/// Origin IP, country and edit time from the markup after the last separator.
///
/// Only the first (`※ 發信站`) and third (`※ 編輯`) `.f2` lines carry these.
pub fn parse_signature(content_html: &str) -> Result<SignatureInfo> {
    let tail = content_html
        .rsplit(SIGNATURE_SEPARATOR)
        .next()
        .unwrap_or_default();
    let fragment = Html::parse_fragment(tail);
    let lines = parse_selector(".f2")?;

    let mut info = SignatureInfo::default();
    for (index, line) in fragment.select(&lines).enumerate() {
        let text = element_text(line);
        match index {
            0 => {
                info.from_ip = IP_ADDRESS
                    .find(&text)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default();
                info.from_country = COUNTRY
                    .captures(&text)
                    .and_then(|caps| caps.get(1))
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default();
            }
            2 => {
                info.edited = EDITED_AT
                    .find(&text)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default();
            }
            _ => {}
        }
    }

    Ok(info)
}

/// Push/boo/arrow lines in document order.
pub fn parse_comments(document: &Html) -> Result<Vec<Comment>> {
    let push = parse_selector(".push")?;
    let tag = parse_selector(".push-tag")?;
    let user = parse_selector(".push-userid")?;
    let content = parse_selector(".push-content")?;
    let time = parse_selector(".push-ipdatetime")?;

    let mut ids = IdSequence::default();
    Ok(document
        .select(&push)
        .map(|el| {
            // Content starts with ": " left over from the line layout.
            let raw_content = el
                .select(&content)
                .next()
                .map(element_text)
                .unwrap_or_default();
            Comment {
                id: ids.next_id(),
                tag: child_text(el, &tag),
                user: child_text(el, &user),
                content: skip_graphemes(&raw_content, 2).trim().to_string(),
                time: child_text(el, &time),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PushTag;

    const POST_PAGE: &str = r#"<html><body>
<div id="main-content" class="bbs-screen bbs-content"><div class="article-metaline"><span class="article-meta-tag">作者</span><span class="article-meta-value">someone (某人)</span></div><div class="article-metaline-right"><span class="article-meta-tag">看板</span><span class="article-meta-value">Gossiping</span></div><div class="article-metaline"><span class="article-meta-tag">標題</span><span class="article-meta-value">[問卦] 有沒有週末的八卦</span></div><div class="article-metaline"><span class="article-meta-tag">時間</span><span class="article-meta-value">Sat Oct 19 12:34:56 2024</span></div>
第一行內文
第二行 https://i.imgur.com/a.png

--
<span class="f2">※ 發信站: 批踢踢實業坊(ptt.cc), 來自: 36.224.1.2 (臺灣)
</span><span class="f2">※ 文章網址: https://www.ptt.cc/bbs/Gossiping/M.1729312496.A.1B2.html
</span><span class="f2">※ 編輯: someone (36.224.1.2 臺灣), 10/19/2024 12:40:01
</span><div class="push"><span class="hl push-tag">推 </span><span class="f3 hl push-userid">pusher</span><span class="f3 push-content">: 好文</span><span class="push-ipdatetime"> 10/19 12:35
</span></div><div class="push"><span class="f1 hl push-tag">噓 </span><span class="f3 hl push-userid">booer</span><span class="f3 push-content">: 廢文 https://x.com</span><span class="push-ipdatetime"> 10/19 12:36
</span></div></div>
</body></html>"#;

    #[test]
    fn test_article_body_strips_header_and_signature() {
        assert_eq!(article_body("metaline\nBody text\n--\nsignature"), "Body text");
    }

    #[test]
    fn test_article_body_keeps_inner_separators() {
        assert_eq!(
            article_body("meta\na -- b\nc\n--\nsig"),
            "a -- b\nc"
        );
    }

    #[test]
    fn test_article_body_without_separator_is_empty() {
        assert_eq!(article_body("meta\nno signature here"), "");
    }

    #[test]
    fn test_parse_signature() {
        let info = parse_signature(
            "body\n--\n<span class=\"f2\">※ 發信站: 批踢踢實業坊(ptt.cc), 來自: 1.2.3.4 (臺灣)\n</span>",
        )
        .unwrap();
        assert_eq!(info.from_ip, "1.2.3.4");
        assert_eq!(info.from_country, "臺灣");
        assert_eq!(info.edited, "");
    }

    #[test]
    fn test_parse_signature_without_country() {
        let info =
            parse_signature("--\n<span class=\"f2\">※ 來自: 10.0.0.1\n</span>").unwrap();
        assert_eq!(info.from_ip, "10.0.0.1");
        assert_eq!(info.from_country, "");
    }

    #[test]
    fn test_parse_signature_ignores_full_width_digits() {
        let info = parse_signature(
            "--\n<span class=\"f2\">※ 來自: １.２.３.４ (臺灣)\n</span>\
             <span class=\"f2\">※ 文章網址: x\n</span>\
             <span class=\"f2\">※ 編輯: a, １０/１９/２０２４ １２:４０:０１\n</span>",
        )
        .unwrap();
        assert_eq!(info.from_ip, "");
        assert_eq!(info.from_country, "臺灣");
        assert_eq!(info.edited, "");
    }

    #[test]
    fn test_parse_post() {
        let post = parse_post(POST_PAGE, "Gossiping/M.1729312496.A.1B2", false, 480).unwrap();

        assert_eq!(post.page, "Gossiping/M.1729312496.A.1B2");
        assert!(!post.age_gated);
        assert_eq!(post.author, "someone (某人)");
        assert_eq!(post.title, "[問卦] 有沒有週末的八卦");
        assert_eq!(post.time, 1_729_312_496_000);
        assert_eq!(post.board, "Gossiping");
        assert_eq!(post.article, "第一行內文\n第二行 https://i.imgur.com/a.png");
        assert_eq!(post.from_ip, "36.224.1.2");
        assert_eq!(post.from_country, "臺灣");
        assert_eq!(post.edited, "10/19/2024 12:40:01");
    }

    #[test]
    fn test_parse_post_comments() {
        let post = parse_post(POST_PAGE, "Gossiping/M.1729312496.A.1B2", false, 480).unwrap();
        assert_eq!(post.comments.len(), 2);

        let first = &post.comments[0];
        assert_eq!(first.id, "0");
        assert_eq!(first.tag, "推");
        assert_eq!(first.push_tag(), Some(PushTag::Push));
        assert_eq!(first.user, "pusher");
        assert_eq!(first.content, "好文");
        assert_eq!(first.time, "10/19 12:35");

        let second = &post.comments[1];
        assert_eq!(second.id, "1");
        assert_eq!(second.push_tag(), Some(PushTag::Boo));
        assert_eq!(second.content, "廢文 https://x.com");
    }

    #[test]
    fn test_parse_post_tolerates_missing_parts() {
        let post = parse_post("<html><body>gone</body></html>", "X/M.1.A.B", true, 480).unwrap();
        assert!(post.age_gated);
        assert_eq!(post.time, 0);
        assert_eq!(post.article, "");
        assert!(post.comments.is_empty());
    }
}
