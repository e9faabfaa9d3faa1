//! CredentialsProvider trait and Credentials

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::AuthError;

/// Credentials the client attaches to every request.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// HTTP Basic authentication with username and password.
    Basic {
        /// The account username.
        username: String,
        /// The account password or API token.
        password: String,
    },
    /// Bearer token authentication (personal access tokens).
    Bearer(String),
    /// No authentication header; only public endpoints will respond.
    Anonymous,
}

impl Credentials {
    /// Creates basic credentials.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Creates bearer token credentials.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(token.into())
    }

    /// Returns the `Authorization` header value for these credentials,
    /// or `None` for anonymous access.
    pub fn authorization_header(&self) -> Option<String> {
        match self {
            Self::Basic { username, password } => {
                let encoded = STANDARD.encode(format!("{username}:{password}"));
                Some(format!("Basic {encoded}"))
            }
            Self::Bearer(token) => Some(format!("Bearer {token}")),
            Self::Anonymous => None,
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
            Self::Bearer(_) => f.debug_tuple("Bearer").field(&"[REDACTED]").finish(),
            Self::Anonymous => write!(f, "Anonymous"),
        }
    }
}

/// Trait for providing credentials to the Jira client.
///
/// The client calls `credentials` before each API request, so
/// implementations can rotate passwords or refresh tokens without the
/// client being rebuilt. Implementations that hold fixed credentials can
/// simply clone them out; see [`StaticCredentials`].
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use jira_lib::auth::{Credentials, CredentialsProvider};
/// use jira_lib::error::AuthError;
///
/// struct VaultCredentials {
///     vault: vault::Client,
/// }
///
/// #[async_trait]
/// impl CredentialsProvider for VaultCredentials {
///     async fn credentials(&self, resource: &str) -> Result<Credentials, AuthError> {
///         let secret = self
///             .vault
///             .read(resource)
///             .await
///             .map_err(|e| AuthError::Provider(e.to_string()))?;
///         Ok(Credentials::basic(secret.username, secret.password))
///     }
/// }
/// ```
#[async_trait]
pub trait CredentialsProvider: Send + Sync {
    /// Produces credentials for the specified resource.
    ///
    /// The `resource` parameter is the Jira base URL the request targets
    /// (e.g., `https://jira.example.com`).
    async fn credentials(&self, resource: &str) -> Result<Credentials, AuthError>;
}

/// A provider that always returns the same credentials.
///
/// # Example
///
/// ```
/// use jira_lib::auth::StaticCredentials;
///
/// let provider = StaticCredentials::basic("fred", "secret");
/// ```
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Creates a provider with basic credentials.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::basic(username, password),
        }
    }

    /// Creates a provider with a bearer token.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::bearer(token),
        }
    }

    /// Creates a provider for anonymous access.
    pub fn anonymous() -> Self {
        Self {
            credentials: Credentials::Anonymous,
        }
    }

    /// Creates a provider from existing credentials.
    pub fn from_credentials(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

#[async_trait]
impl CredentialsProvider for StaticCredentials {
    async fn credentials(&self, _resource: &str) -> Result<Credentials, AuthError> {
        Ok(self.credentials.clone())
    }
}
