// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::COOKIE;

use crate::error::{AppError, Result};
use crate::models::CrawlerConfig;

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &CrawlerConfig) -> Result<Client> {
    let mut builder = Client::builder().user_agent(&config.user_agent);
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

/// Serialize cookie pairs into a `Cookie` header value (`a=1; b=2`).
pub fn serialize_cookie(cookies: &[(&str, &str)]) -> String {
    cookies
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("; ")
}

/// GET a page and return its body, sending a `Cookie` header when given.
///
/// Network failures and non-2xx responses both surface as `AppError::Fetch`.
pub async fn fetch_text(client: &Client, url: &str, cookie: Option<&str>) -> Result<String> {
    let mut request = client.get(url);
    if let Some(cookie) = cookie {
        request = request.header(COOKIE, cookie);
    }

    let response = request.send().await.map_err(|e| AppError::fetch(url, e))?;
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::status(url, status));
    }
    response.text().await.map_err(|e| AppError::fetch(url, e))
}
