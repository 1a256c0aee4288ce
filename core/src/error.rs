use thiserror::Error;

/// Largest response body accepted from either API.
pub const MAX_BODY_BYTES: usize = 32 * 1024;

/// Why an HTTP round-trip produced no usable body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("resource not found (HTTP 404)")]
    NotFound,
    #[error("rate limited (HTTP 429)")]
    RateLimited,
    #[error("server error occurred (HTTP {0})")]
    Server(u16),
    #[error("unexpected status code {0}")]
    UnexpectedStatus(u16),
    #[error("response too large (>{MAX_BODY_BYTES} bytes)")]
    TooLarge,
    #[error("response is not JSON")]
    NotJson,
}

impl FetchError {
    /// Classify a status line; `None` means the body can be read.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200 => None,
            404 => Some(FetchError::NotFound),
            429 => Some(FetchError::RateLimited),
            500..=599 => Some(FetchError::Server(status)),
            other => Some(FetchError::UnexpectedStatus(other)),
        }
    }
}

/// Validate a complete response body and hand it back as text.
pub fn json_text(body: Vec<u8>) -> Result<String, FetchError> {
    if body.len() > MAX_BODY_BYTES {
        return Err(FetchError::TooLarge);
    }
    let text = String::from_utf8(body).map_err(|_| FetchError::NotJson)?;
    let head = text.trim_start();
    if !(head.starts_with('{') || head.starts_with('[')) {
        return Err(FetchError::NotJson);
    }
    Ok(text)
}
