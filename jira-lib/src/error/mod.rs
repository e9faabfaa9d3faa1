//! Error types

mod api;
mod auth;
mod field;
mod jira;

pub use api::*;
pub use auth::*;
pub use field::*;
pub use jira::*;

/// Top-level error type for all client operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from the API layer (transport, status, response parsing).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Error while producing credentials.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Error while accessing a field on a field set.
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Error while building a JSON payload.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A search page made no forward progress although the server still
    /// reported unseen results.
    #[error("Search stalled at offset {start_at} with {total} results reported")]
    Stalled {
        /// Offset the empty page was fetched at.
        start_at: usize,
        /// Result total the server reported for that page.
        total: usize,
    },

    /// A lookup that must resolve to one result matched several.
    #[error("Ambiguous {what}")]
    Ambiguous { what: String },

    /// A lookup that was expected to resolve found nothing.
    #[error("No {what} found")]
    NotFound { what: String },
}

impl Error {
    /// Creates a new ambiguous lookup error.
    pub fn ambiguous(what: impl Into<String>) -> Self {
        Self::Ambiguous { what: what.into() }
    }

    /// Creates a new failed lookup error.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Returns the HTTP status code if this wraps a status mismatch.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(api) => api.status_code(),
            _ => None,
        }
    }
}
