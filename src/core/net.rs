// src/core/net.rs

// Single blocking GET. The page is served over HTTPS only, hence a real
// client instead of a raw socket.

use std::time::Duration;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::ScrapeError;

/// Fetch `url` and return the body as text. The status code is not
/// checked; only transport failure (DNS, refused, timeout) is an error.
pub fn http_get(url: &str) -> Result<String, ScrapeError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;

    let body = client.get(url).send()?.text()?;
    Ok(body)
}
