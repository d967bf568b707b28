//! Error types for dapp-kit.
//!
//! # Error Hierarchy
//!
//! - [`Error`](enum@Error) — Main error type, returned by client calls
//!   - [`DefinitionError`] — Namespace collisions in a contract definition
//!   - [`BackendError`] — Failures reported by a query or signing backend
//! - [`PayloadError`] — A JSON value that is not a single-variant record,
//!   returned by `WirePayload::try_from`
//!
//! # Error Handling Examples
//!
//! ```rust,no_run
//! use dapp_kit::*;
//!
//! # async fn example(counter: &ContractClient) -> Result<(), Error> {
//! match counter.call("increment").await {
//!     Ok(output) => println!("{:?}", output),
//!     Err(Error::BackendUnavailable(kind)) => {
//!         println!("connect a {} backend first", kind);
//!     }
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;

use thiserror::Error;

/// The two kinds of contract functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
    /// Read-only call answered by the query backend.
    Query,
    /// State-mutating call executed by the signing backend.
    Message,
}

impl CallKind {
    /// Returns the lowercase name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            CallKind::Query => "query",
            CallKind::Message => "message",
        }
    }
}

impl fmt::Display for CallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error building or merging a contract definition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("Could not define contract: name collision for function {0}")]
    NameCollision(String),
}

/// Error converting a JSON value into a wire payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Wire payload must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Wire payload must have exactly one top-level key, got {0}")]
    VariantCount(usize),
}

// ============================================================================
// Backend Errors
// ============================================================================

/// Failures reported by a query or signing backend.
///
/// These are passed through to the caller untouched.
#[derive(Debug, Error)]
pub enum BackendError {
    // ─── Network/Transport ───
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Network error: {message}")]
    Network {
        message: String,
        status_code: Option<u16>,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    // ─── Node / Contract ───
    #[error("Rejected: {0}")]
    Rejected(String),
}

impl BackendError {
    /// Create a network error.
    pub fn network(message: impl Into<String>, status_code: Option<u16>) -> Self {
        BackendError::Network {
            message: message.into(),
            status_code,
        }
    }

    /// Returns the HTTP status code, if this error carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            BackendError::Network { status_code, .. } => *status_code,
            BackendError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    // ─── Definition ───
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    // ─── Dispatch ───
    #[error("No client is available to execute {0}")]
    BackendUnavailable(CallKind),

    #[error("Contract has no function named '{0}'")]
    UnknownFunction(String),

    #[error("Function '{name}' is a {actual}, not a {expected}")]
    KindMismatch {
        name: String,
        expected: CallKind,
        actual: CallKind,
    },

    // ─── Backend ───
    #[error(transparent)]
    Backend(#[from] BackendError),

    // ─── Configuration ───
    #[error("Invalid configuration: {0}")]
    Config(String),

    // ─── Serialization ───
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns true if the call never reached a backend because none was connected.
    pub fn is_backend_unavailable(&self) -> bool {
        matches!(self, Error::BackendUnavailable(_))
    }
}
