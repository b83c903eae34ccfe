// src/services/fetcher.rs

//! Gated HTTP fetcher.
//!
//! Boards flagged as adult content answer the first request with an
//! age-restriction interstitial. The fetcher detects it and repeats the same
//! request once with the consent cookie set.

use reqwest::Client;
use scraper::{Html, Selector};

use crate::error::Result;
use crate::utils::http::{fetch_text, serialize_cookie};
use crate::utils::text::{element_text, parse_selector};

/// Element that only appears on the interstitial.
pub const AGE_NOTICE_SELECTOR: &str = ".over18-notice";

/// Cookie acknowledging the age restriction.
pub const CONSENT_COOKIE: (&str, &str) = ("over18", "1");

/// Final body of a gated fetch.
#[derive(Debug, Clone)]
pub struct GatedPage {
    pub html: String,

    /// True when the interstitial was hit and the consent retry was issued
    pub age_gated: bool,
}

/// Fetches pages, getting past the age-restriction interstitial.
#[derive(Debug, Clone)]
pub struct GatedFetcher {
    client: Client,
    notice: Selector,
}

impl GatedFetcher {
    /// Create a fetcher on top of a configured client.
    pub fn new(client: Client) -> Result<Self> {
        Ok(Self {
            client,
            notice: parse_selector(AGE_NOTICE_SELECTOR)?,
        })
    }

    /// Fetch `url` with no extra cookies.
    pub async fn fetch(&self, url: &str) -> Result<GatedPage> {
        self.fetch_with_cookies(url, &[]).await
    }

    /// Fetch `url`, sending `cookies` on every attempt.
    ///
    /// At most two requests are issued. If the notice is still present after
    /// the consent retry, that page is returned as is.
    pub async fn fetch_with_cookies(&self, url: &str, cookies: &[(&str, &str)]) -> Result<GatedPage> {
        let initial_cookie = (!cookies.is_empty()).then(|| serialize_cookie(cookies));
        log::debug!("GET {}", url);
        let html = fetch_text(&self.client, url, initial_cookie.as_deref()).await?;

        if !self.has_age_notice(&html) {
            return Ok(GatedPage {
                html,
                age_gated: false,
            });
        }

        log::debug!("Age notice on {}, retrying with consent cookie", url);
        let mut retry_cookies: Vec<(&str, &str)> = cookies
            .iter()
            .copied()
            .filter(|(name, _)| *name != CONSENT_COOKIE.0)
            .collect();
        retry_cookies.push(CONSENT_COOKIE);
        let cookie = serialize_cookie(&retry_cookies);

        let html = fetch_text(&self.client, url, Some(&cookie)).await?;
        if self.has_age_notice(&html) {
            log::warn!("Age notice still present after consent on {}", url);
        }

        Ok(GatedPage {
            html,
            age_gated: true,
        })
    }

    /// Whether the document carries a non-empty age notice.
    pub fn has_age_notice(&self, html: &str) -> bool {
        let document = Html::parse_document(html);
        document
            .select(&self.notice)
            .any(|el| !element_text(el).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher() -> GatedFetcher {
        GatedFetcher::new(Client::new()).unwrap()
    }

    #[test]
    fn test_detects_age_notice() {
        let html = r#"<html><body><div class="over18-notice"><p>本網站已依網站內容分級規定處理</p></div></body></html>"#;
        assert!(fetcher().has_age_notice(html));
    }

    #[test]
    fn test_ignores_empty_notice_and_plain_pages() {
        assert!(!fetcher().has_age_notice(r#"<div class="over18-notice"></div>"#));
        assert!(!fetcher().has_age_notice("<div class=\"r-ent\">post</div>"));
    }
}
