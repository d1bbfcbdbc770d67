//! Shared HTTP response helpers.
//!
//! Maps status codes onto [`BotmockError`] so the fetch code only deals with
//! request construction and decoding.

use crate::error::BotmockError;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **401/403** → [`BotmockError::Unauthorized`]
/// - **404** → [`BotmockError::NotFound`] with the request URL
/// - **429** → [`BotmockError::RateLimited`] with `Retry-After` parsing
///   (falls back to 60 s if absent or unparseable)
/// - **Other non-success** → [`BotmockError::Api`] with status and body
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, BotmockError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    match status.as_u16() {
        401 | 403 => Err(BotmockError::Unauthorized {
            status: status.as_u16(),
        }),
        404 => Err(BotmockError::NotFound {
            url: resp.url().to_string(),
        }),
        429 => Err(BotmockError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        }),
        code => Err(BotmockError::Api {
            status: code,
            message: resp.text().await.unwrap_or_default(),
        }),
    }
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
