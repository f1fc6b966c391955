//! HTTP client error types.

use thiserror::Error;

/// Notification text for failures that never reached the service.
pub const NETWORK_ERROR_MESSAGE: &str = "网络错误";

/// Errors that can occur when calling the REST service.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to send the request or read the response.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP error response.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Failed to parse response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request timeout.
    #[error("Request timed out")]
    Timeout,

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(String),

    /// The service answered with a non-success envelope code.
    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },
}

impl FetchError {
    /// Short text suitable for a transient user-facing notification.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Api { message, .. } => message.clone(),
            FetchError::HttpError { status, message } if message.trim().is_empty() => {
                format!("HTTP {}", status)
            }
            FetchError::HttpError { message, .. } => message.clone(),
            FetchError::RequestError(_) | FetchError::Timeout => {
                format!("{} ({})", NETWORK_ERROR_MESSAGE, self)
            }
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::JsonError(e.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_builder() {
            FetchError::InvalidUrl(e.to_string())
        } else if e.is_decode() {
            FetchError::ParseError(e.to_string())
        } else if let Some(status) = e.status() {
            FetchError::HttpError {
                status: status.as_u16(),
                message: e.to_string(),
            }
        } else {
            FetchError::RequestError(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let api = FetchError::Api {
            code: 500,
            message: "商品不存在".to_string(),
        };
        assert_eq!(api.user_message(), "商品不存在");

        let http = FetchError::HttpError {
            status: 502,
            message: String::new(),
        };
        assert_eq!(http.user_message(), "HTTP 502");

        assert_eq!(FetchError::Timeout.user_message(), "网络错误 (Request timed out)");

        let refused = FetchError::RequestError("connection refused".to_string());
        assert_eq!(
            refused.user_message(),
            "网络错误 (Request failed: connection refused)"
        );

        let parse = FetchError::ParseError("eof".to_string());
        assert_eq!(parse.user_message(), "Failed to parse response: eof");
    }
}
