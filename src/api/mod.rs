//! NSX Manager REST API access
//!
//! Backup and restore code talks to the manager only through the
//! [`ManagerApi`] trait. [`ManagerClient`] is the HTTPS implementation used
//! by the binary.

mod client;
mod error;

#[cfg(test)]
pub(crate) mod recording;

use std::fmt;

use serde_json::Value;

pub use client::{parse_response, ManagerClient};
pub use error::ApiError;

/// Root of the declarative policy tree; restores PATCH here
pub const INFRA_PATH: &str = "/policy/api/v1/infra";

/// HTTP methods the tool issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Patch,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Patch => write!(f, "PATCH"),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Patch => reqwest::Method::PATCH,
        }
    }
}

/// A single request against the manager
pub trait ManagerApi {
    /// Issue `method` against `path` (relative to the manager root) with an
    /// optional pre-serialized JSON body.
    ///
    /// Returns the parsed body of a 2xx response, or `None` when it was empty.
    fn call(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&str>,
    ) -> Result<Option<Value>, ApiError>;
}
