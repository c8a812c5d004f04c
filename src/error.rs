//! Unified error handling for the learnpath crate
//!
//! This module provides a unified error type that consolidates provider and
//! configuration errors into a single `Error` enum, while maintaining the
//! ability to use the provider-specific error when needed.
//!
//! # Architecture
//!
//! - [`ProviderKind`] - Identifies which external source a failure came from
//! - [`ProviderError`] - Failures talking to the video or article providers
//! - [`Error`] - Unified error enum used across module boundaries
//!
//! # Usage
//!
//! ```rust,ignore
//! use learnpath::error::{Error, Result};
//!
//! fn report(err: Error) {
//!     eprintln!("Error: {err}");
//!     std::process::exit(err.exit_code());
//! }
//! ```

use std::fmt;
use std::io;
use thiserror::Error;

/// External content source identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    YouTube,
    Medium,
}

impl ProviderKind {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::YouTube => "youtube",
            Self::Medium => "medium",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors from the external content providers
#[derive(Error, Debug)]
pub enum ProviderError {
    /// HTTP transport failure (connection refused, DNS, TLS)
    #[error("{provider} request failed: {source}")]
    Http {
        provider: ProviderKind,
        #[source]
        source: reqwest::Error,
    },

    /// Unexpected HTTP status with no more specific classification
    #[error("{provider} returned HTTP status {status}")]
    Status { provider: ProviderKind, status: u16 },

    /// Missing, invalid, or expired credentials
    #[error("{provider} rejected the credentials")]
    Auth { provider: ProviderKind },

    /// Quota or rate limit exhausted
    #[error("{provider} rate limit exceeded")]
    RateLimited { provider: ProviderKind },

    /// Request exceeded the configured timeout
    #[error("{provider} request timed out")]
    Timeout { provider: ProviderKind },

    /// Response body could not be parsed
    #[error("{provider} response could not be parsed: {detail}")]
    Malformed {
        provider: ProviderKind,
        detail: String,
    },

    /// Request URL could not be constructed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ProviderError {
    /// Provider the failure originated from, when attributable
    pub fn provider(&self) -> Option<ProviderKind> {
        match self {
            Self::Http { provider, .. }
            | Self::Status { provider, .. }
            | Self::Auth { provider }
            | Self::RateLimited { provider }
            | Self::Timeout { provider }
            | Self::Malformed { provider, .. } => Some(*provider),
            Self::InvalidUrl(_) => None,
        }
    }

    /// Check if this error is recoverable (can be retried)
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Http { .. } | Self::Timeout { .. } | Self::RateLimited { .. } => true,
            Self::Status { status, .. } => matches!(status, 500 | 502 | 503 | 504),
            Self::Auth { .. } | Self::Malformed { .. } | Self::InvalidUrl(_) => false,
        }
    }

    /// Wrap a transport error, classifying timeouts separately
    pub fn from_reqwest(provider: ProviderKind, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout { provider }
        } else {
            Self::Http {
                provider,
                source: err,
            }
        }
    }
}

/// Unified error type for the learnpath crate
///
/// This enum wraps provider errors and the other failure classes the CLI
/// can hit, providing a single error type that can be used across module
/// boundaries while preserving the detailed error information.
#[derive(Error, Debug)]
pub enum Error {
    /// Provider request or parse failures
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{context}")]
    Other {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a generic error with context
    pub fn other(context: impl Into<String>) -> Self {
        Self::Other {
            context: context.into(),
            source: None,
        }
    }

    /// Create a generic error with context and source
    pub fn with_source(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Other {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Process exit code for this error class
    ///
    /// Configuration and validation problems exit with 2, provider and
    /// runtime failures with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            _ => 1,
        }
    }
}

// Conversion from anyhow::Error
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other {
            context: err.to_string(),
            source: None,
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
