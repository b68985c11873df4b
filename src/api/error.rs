//! Typed failures returned by the manager API

use serde_json::Value;
use thiserror::Error;

use crate::error::{DfwError, DfwResult};

/// Why a manager API call did not succeed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The manager answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body, usually a JSON error document
        body: String,
    },

    /// The request never produced a usable response (connect, TLS, decode)
    #[error("transport failure: {0}")]
    Transport(String),
}

impl ApiError {
    /// HTTP status code, if the manager answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) => None,
        }
    }

    /// Extract the manager's `error_message` field from a rejected request
    ///
    /// # Errors
    ///
    /// Fails with [`DfwError::MalformedErrorBody`] when the body is not JSON or
    /// has no `error_message`, and passes transport failures through unchanged.
    pub fn error_message(&self) -> DfwResult<String> {
        let (status, body) = match self {
            Self::Status { status, body } => (*status, body),
            Self::Transport(_) => return Err(DfwError::Api(self.clone())),
        };

        let parsed: Value = serde_json::from_str(body).map_err(|e| DfwError::MalformedErrorBody {
            status,
            detail: format!("body is not JSON: {}", e),
        })?;

        match parsed.get("error_message") {
            Some(Value::String(message)) => Ok(message.clone()),
            Some(other) => Ok(other.to_string()),
            None => Err(DfwError::MalformedErrorBody {
                status,
                detail: "no error_message field".into(),
            }),
        }
    }
}
