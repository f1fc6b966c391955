//! The `{code, message, data}` wrapper every REST response uses.

use crate::FetchError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope code meaning success.
pub const SUCCESS_CODE: i64 = 200;

/// Message used when a failed envelope carries none.
pub const DEFAULT_ERROR_MESSAGE: &str = "请求失败";

/// A response envelope.
///
/// `data` stays as raw JSON until the code has been checked, so a failed
/// envelope never fails on payload shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T = Value> {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Wrap a successful payload.
    pub fn ok(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            message: Some("success".to_string()),
            data: Some(data),
        }
    }

    /// Build a failed envelope.
    pub fn error(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Check the code.
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

impl Envelope<Value> {
    /// Unwrap the payload, or turn the code and message into an error.
    ///
    /// A missing `data` decodes as JSON `null`, which suits `()` and
    /// `Option<_>` payloads.
    pub fn into_result<T: DeserializeOwned>(self) -> Result<T, FetchError> {
        if !self.is_success() {
            let message = self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
            return Err(FetchError::Api {
                code: self.code,
                message,
            });
        }
        let data = self.data.unwrap_or(Value::Null);
        serde_json::from_value(data).map_err(|e| FetchError::ParseError(e.to_string()))
    }
}
