//! Transport layer
//!
//! All HTTP traffic goes through the [`Transport`] trait so the wire can be
//! swapped out (tests script it with canned responses). [`HttpTransport`] is
//! the reqwest-backed implementation used by default.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::multipart;
use reqwest::Method;
use reqwest::StatusCode;

use crate::error::ApiError;

/// Body of an outgoing request.
#[derive(Debug, Clone)]
pub enum WireBody {
    /// No body.
    Empty,
    /// A JSON document, already serialized.
    Json(String),
    /// A file uploaded as a `multipart/form-data` part named `file`.
    File {
        /// File name reported to the server.
        file_name: String,
        /// Raw file content.
        bytes: Vec<u8>,
    },
}

/// One outgoing HTTP request.
#[derive(Debug)]
pub struct WireRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute request URL.
    pub url: String,
    /// Request headers, including authorization.
    pub headers: HeaderMap,
    /// Request body.
    pub body: WireBody,
}

impl WireRequest {
    /// Creates a request with no headers and an empty body.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: WireBody::Empty,
        }
    }
}

/// One incoming HTTP response, fully read.
#[derive(Debug, Clone)]
pub struct WireResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl WireResponse {
    /// Creates a response from a status code and body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Checks the response status against the one the operation requires.
    ///
    /// On mismatch the raw body is captured in the error, along with any
    /// Jira error detail it decodes to.
    pub fn expect_status(&self, expected: StatusCode) -> Result<(), ApiError> {
        if self.status == expected.as_u16() {
            Ok(())
        } else {
            Err(ApiError::status(expected.as_u16(), self.status, self.body.clone()))
        }
    }

    /// Deserializes the response body.
    pub fn decode<T: serde::de::DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body)
            .map_err(|e| ApiError::parse_with_body(e.to_string(), self.body.clone()))
    }
}

/// Trait the client sends all requests through.
///
/// Implementations perform exactly one round trip per call; retries,
/// caching, and any other policy belong to the caller, not the transport.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one request and reads the full response.
    async fn send(&self, request: WireRequest) -> Result<WireResponse, ApiError>;
}

/// The reqwest-backed transport.
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl HttpTransport {
    /// Creates a transport with a default reqwest client.
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout,
        }
    }

    /// Creates a transport from an existing reqwest client.
    pub fn with_client(client: reqwest::Client, timeout: Option<Duration>) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: WireRequest) -> Result<WireResponse, ApiError> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder = match request.body {
            WireBody::Empty => builder,
            WireBody::Json(body) => builder.body(body),
            WireBody::File { file_name, bytes } => {
                let part = multipart::Part::bytes(bytes).file_name(file_name);
                builder.multipart(multipart::Form::new().part("file", part))
            }
        };

        let response = builder.send().await.map_err(|e| match self.timeout {
            Some(timeout) if e.is_timeout() => ApiError::Timeout(timeout),
            _ => ApiError::Network(e),
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(ApiError::Network)?;
        Ok(WireResponse::new(status, body))
    }
}
