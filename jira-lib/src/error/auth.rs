//! Authentication error types

/// Errors that can occur while producing credentials.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No credentials are available for the request.
    #[error("Missing credentials")]
    MissingCredentials,

    /// The credentials provider failed to produce credentials.
    #[error("Credentials provider failed: {0}")]
    Provider(String),

    /// A credential value cannot be encoded into a request header.
    #[error("Invalid credential value: {0}")]
    InvalidValue(String),
}
