//! Main JiraClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::StatusCode;

use crate::auth::CredentialsProvider;
use crate::error::Error;
use crate::model::types::JiraUser;
use crate::transport::HttpTransport;
use crate::transport::Transport;
use crate::transport::WireBody;

/// The main client for interacting with the Jira REST API (v2).
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across threads safely. All configuration is fixed when `build` is called;
/// the only mutable state anywhere in the library is the cursor inside each
/// search enumerator.
///
/// # Example
///
/// ```ignore
/// use jira_lib::{JiraClient, auth::StaticCredentials};
///
/// let client = JiraClient::builder()
///     .url("https://jira.example.com")
///     .credentials(StaticCredentials::basic("fred", "secret"))
///     .build();
///
/// let me = client.connect().await?;
/// ```
#[derive(Clone)]
pub struct JiraClient {
    pub(crate) inner: Arc<JiraClientInner>,
}

pub(crate) struct JiraClientInner {
    pub(crate) base_url: String,
    pub(crate) credentials: Arc<dyn CredentialsProvider>,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) default_page_size: usize,
}

impl JiraClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> JiraClientBuilder<Missing, Missing> {
        JiraClientBuilder::new()
    }

    /// Validates connectivity and credentials.
    ///
    /// Makes a `myself` request and returns the authenticated user.
    pub async fn connect(&self) -> Result<JiraUser, Error> {
        let response = self.request(Method::GET, "myself", None, WireBody::Empty).await?;
        response.expect_status(StatusCode::OK)?;
        Ok(response.decode()?)
    }

    /// Returns the base URL of the Jira instance.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Returns the page size searches use unless told otherwise.
    pub fn default_page_size(&self) -> usize {
        self.inner.default_page_size
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`JiraClient`].
///
/// Uses the typestate pattern to ensure required fields are set at compile time.
///
/// # Required Fields
///
/// - `url` - The Jira instance URL
/// - `credentials` - A [`CredentialsProvider`] implementation
///
/// # Example
///
/// ```ignore
/// let client = JiraClient::builder()
///     .url("https://jira.example.com")
///     .credentials(StaticCredentials::basic("fred", "secret"))
///     .timeout(Duration::from_secs(30))
///     .build();
/// ```
pub struct JiraClientBuilder<Url, Provider> {
    url: Url,
    credentials: Provider,
    default_page_size: usize,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
    transport: Option<Arc<dyn Transport>>,
}

impl JiraClientBuilder<Missing, Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            credentials: Missing,
            default_page_size: 50,
            timeout: None,
            connect_timeout: None,
            http_client: None,
            transport: None,
        }
    }
}

impl Default for JiraClientBuilder<Missing, Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> JiraClientBuilder<Missing, P> {
    /// Sets the Jira instance URL.
    ///
    /// # Example
    ///
    /// ```ignore
    /// .url("https://jira.example.com")
    /// ```
    pub fn url(self, url: impl Into<String>) -> JiraClientBuilder<Set<String>, P> {
        JiraClientBuilder {
            url: Set(url.into()),
            credentials: self.credentials,
            default_page_size: self.default_page_size,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
            transport: self.transport,
        }
    }
}

impl<U> JiraClientBuilder<U, Missing> {
    /// Sets the credentials provider for authentication.
    pub fn credentials<P: CredentialsProvider + 'static>(
        self,
        provider: P,
    ) -> JiraClientBuilder<U, Set<Arc<dyn CredentialsProvider>>> {
        JiraClientBuilder {
            url: self.url,
            credentials: Set(Arc::new(provider) as Arc<dyn CredentialsProvider>),
            default_page_size: self.default_page_size,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
            transport: self.transport,
        }
    }
}

impl<U, P> JiraClientBuilder<U, P> {
    /// Sets the page size searches use unless told otherwise.
    ///
    /// Defaults to 50.
    pub fn default_page_size(mut self, page_size: usize) -> Self {
        self.default_page_size = page_size.max(1);
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom reqwest client for the default transport.
    ///
    /// Ignored when a full [`Transport`] is supplied via `transport`.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Replaces the transport entirely.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }
}

impl JiraClientBuilder<Set<String>, Set<Arc<dyn CredentialsProvider>>> {
    /// Builds the [`JiraClient`].
    ///
    /// This method is only available when both `url` and `credentials` have been set.
    pub fn build(self) -> JiraClient {
        let transport = self.transport.unwrap_or_else(|| {
            let http_client = self.http_client.unwrap_or_else(|| {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build().expect("Failed to build HTTP client")
            });
            Arc::new(HttpTransport::with_client(http_client, self.timeout))
        });

        JiraClient {
            inner: Arc::new(JiraClientInner {
                base_url: self.url.0,
                credentials: self.credentials.0,
                transport,
                default_page_size: self.default_page_size,
            }),
        }
    }
}
