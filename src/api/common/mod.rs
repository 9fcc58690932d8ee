//
//  cloudfoundry-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Cloud Foundry v2 and v3 APIs
//!
//! This module provides the types shared by every resource client: the error
//! model, request validation, and the chunked download handle.
//!
//! # Overview
//!
//! - [`Error`] - Unified error type for all API operations
//! - [`PlatformError`] - The Cloud Foundry error envelope returned on non-2xx responses
//! - [`TransportError`] - Failures of the HTTP call itself
//! - [`Validate`] / [`ValidationResult`] - Request validation (re-exported from [`validation`])
//! - [`Download`] - Chunked byte stream for file downloads (re-exported from [`download`])
//!
//! # Error Kinds
//!
//! Every operation fails with exactly one of three disjoint kinds:
//!
//! | Variant | Cause | Network call made? |
//! |---------|-------|--------------------|
//! | `InvalidRequest` | A required field is missing or out of range | No |
//! | `Platform` | The server answered with a non-2xx status | Yes |
//! | `Transport` | The call itself failed (connection, I/O, decoding) | Attempted |
//!
//! # Example
//!
//! ```rust
//! use cloudfoundry_client::api::common::Error;
//!
//! fn describe(result: Result<(), Error>) -> String {
//!     match result {
//!         Ok(()) => "ok".to_string(),
//!         Err(Error::InvalidRequest(errors)) => format!("fix your request: {}", errors),
//!         Err(Error::Platform(e)) => format!("rejected by Cloud Foundry: {}", e.description),
//!         Err(Error::Transport(e)) => format!("could not reach Cloud Foundry: {}", e),
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod download;
pub mod validation;

pub use download::*;
pub use validation::*;

/// Result alias used by every resource operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for all Cloud Foundry API operations.
///
/// The three variants never overlap: a validation failure is never reported
/// as a platform error, and a platform error is never reinterpreted as a
/// transport failure.
///
/// # Example
///
/// ```rust
/// use cloudfoundry_client::api::common::{Error, ValidationResult};
///
/// let mut result = ValidationResult::new();
/// result.require("id", &None::<String>);
///
/// let error = result.into_result().unwrap_err();
/// assert!(matches!(error, Error::InvalidRequest(_)));
/// assert_eq!(error.to_string(), "Invalid request: id must be specified");
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The request failed local validation; no network call was made.
    ///
    /// Carries every violation found, not just the first.
    #[error("Invalid request: {0}")]
    InvalidRequest(ValidationErrors),

    /// Cloud Foundry rejected the request with a non-2xx status.
    #[error("{0}")]
    Platform(#[from] PlatformError),

    /// The HTTP call could not be completed.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

impl Error {
    /// Returns `true` if this is a local validation failure.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }

    /// Returns the platform error, if the server rejected the request.
    pub fn as_platform(&self) -> Option<&PlatformError> {
        match self {
            Self::Platform(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(TransportError::Http(e))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Transport(TransportError::Io(e))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Transport(TransportError::Decode(e))
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Self::Transport(TransportError::Url(e))
    }
}

/// Failures of the HTTP exchange itself, surfaced as-is.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection, TLS, timeout or body read failure reported by `reqwest`.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// A local file (e.g. an upload source) could not be read.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// A response body was not the JSON the operation expected.
    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API root and path did not form a valid URL.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// The standard Cloud Foundry error envelope.
///
/// Returned by the platform on any non-2xx response:
///
/// ```json
/// {"code": 10000, "description": "Unknown request", "error_code": "CF-NotFound"}
/// ```
///
/// # Fields
///
/// | Field | Description |
/// |-------|-------------|
/// | `status` | The HTTP status code of the response |
/// | `code` | Numeric platform code, kept as text |
/// | `description` | Human readable explanation |
/// | `error_code` | Symbolic name such as `CF-InvalidRelation`, when present |
///
/// # Example
///
/// ```rust
/// use cloudfoundry_client::api::common::PlatformError;
///
/// let body = r#"{"code": 10000, "description": "Unknown request", "error_code": "CF-NotFound"}"#;
/// let error = PlatformError::from_response(404, body);
///
/// assert_eq!(error.code, "10000");
/// assert_eq!(error.error_code.as_deref(), Some("CF-NotFound"));
/// assert_eq!(error.to_string(), "CF-NotFound(10000): Unknown request");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{}({}): {}", .error_code.as_deref().unwrap_or("CF-Error"), .code, .description)]
pub struct PlatformError {
    /// HTTP status code of the rejected response.
    pub status: u16,

    /// Platform error code. Cloud Foundry sends a number; it is stored as text.
    pub code: String,

    /// Human readable description of the failure.
    pub description: String,

    /// Symbolic error name, e.g. `CF-AppNotFound`.
    #[serde(default)]
    pub error_code: Option<String>,
}

impl PlatformError {
    /// Parses a non-2xx response body into a platform error.
    ///
    /// The envelope's `code` may be a number or a string. When the body is
    /// not an envelope at all (an HTML error page from a proxy, an empty
    /// body), the HTTP status becomes the code and the raw body the
    /// description.
    pub fn from_response(status: u16, body: &str) -> Self {
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
            let code = match json.get("code") {
                Some(serde_json::Value::Number(n)) => Some(n.to_string()),
                Some(serde_json::Value::String(s)) => Some(s.clone()),
                _ => None,
            };
            let description = json.get("description").and_then(|d| d.as_str());

            if let (Some(code), Some(description)) = (code, description) {
                return Self {
                    status,
                    code,
                    description: description.to_string(),
                    error_code: json
                        .get("error_code")
                        .and_then(|e| e.as_str())
                        .map(str::to_string),
                };
            }
        }

        Self {
            status,
            code: status.to_string(),
            description: body.trim().to_string(),
            error_code: None,
        }
    }
}
