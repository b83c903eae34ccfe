// src/models/config.rs

//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Target site settings
    #[serde(default)]
    pub site: SiteConfig,

    /// HTTP client behavior settings
    #[serde(default)]
    pub crawler: CrawlerConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        let base = url::Url::parse(&self.site.base_url)
            .map_err(|e| AppError::validation(format!("site.base_url is invalid: {e}")))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(AppError::validation("site.base_url must be http(s)"));
        }
        if self.site.utc_offset_minutes.abs() >= 24 * 60 {
            return Err(AppError::validation(
                "site.utc_offset_minutes must be within ±24h",
            ));
        }
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == Some(0) {
            return Err(AppError::validation("crawler.timeout_secs must be > 0"));
        }
        Ok(())
    }

    /// Build an absolute URL from a site-relative path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.site.base_url.trim_end_matches('/'), path)
    }
}

/// Target site settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Scheme and host every request path is appended to
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Offset applied to post timestamps, which carry no zone of their own
    #[serde(default = "defaults::utc_offset_minutes")]
    pub utc_offset_minutes: i32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            utc_offset_minutes: defaults::utc_offset_minutes(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds; unset means no client-side deadline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: None,
        }
    }
}

mod defaults {
    pub fn base_url() -> String {
        "https://www.ptt.cc".into()
    }
    pub fn utc_offset_minutes() -> i32 {
        8 * 60
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; ptt-crawler/0.1)".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.crawler.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.crawler.timeout_secs = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_http_base() {
        let mut config = Config::default();
        config.site.base_url = "ftp://www.ptt.cc".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[site]\nbase_url = \"http://localhost:8080\"\n").unwrap();
        assert_eq!(config.site.base_url, "http://localhost:8080");
        assert_eq!(config.site.utc_offset_minutes, 480);
        assert_eq!(config.crawler.timeout_secs, None);
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[crawler]\nuser_agent = \"test\"\ntimeout_secs = 5\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.crawler.user_agent, "test");
        assert_eq!(config.crawler.timeout_secs, Some(5));
    }

    #[test]
    fn load_or_default_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("missing.toml"));
        assert_eq!(config.site.base_url, "https://www.ptt.cc");
    }

    #[test]
    fn url_joins_without_double_slash() {
        let mut config = Config::default();
        config.site.base_url = "http://127.0.0.1:3000/".to_string();
        assert_eq!(config.url("/bbs/hotboards.html"), "http://127.0.0.1:3000/bbs/hotboards.html");
    }
}
