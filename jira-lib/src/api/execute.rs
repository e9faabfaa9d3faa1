//! Request plumbing shared by every operation

use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use reqwest::header::ACCEPT;
use reqwest::header::AUTHORIZATION;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::ApiError;
use crate::error::AuthError;
use crate::error::Error;
use crate::transport::WireBody;
use crate::transport::WireRequest;
use crate::transport::WireResponse;
use crate::JiraClient;

impl JiraClient {
    /// Resolves a resource path against the instance's REST API root.
    pub(crate) fn api_url(&self, path: &str) -> Result<String, ApiError> {
        let base = format!("{}/", self.inner.base_url.trim_end_matches('/'));
        let url = Url::parse(&base)
            .and_then(|base| base.join("rest/api/2/"))
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", self.inner.base_url)))?
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(format!("{path}: {e}")))?;
        Ok(url.into())
    }

    pub(crate) fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Sends one request, attaching credentials from the provider.
    ///
    /// When `headers` is `None` the JSON defaults are used; operations with
    /// special header needs (file uploads) pass their own set.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        headers: Option<HeaderMap>,
        body: WireBody,
    ) -> Result<WireResponse, Error> {
        let url = self.api_url(path)?;
        let mut headers = headers.unwrap_or_else(Self::default_headers);

        let credentials = self.inner.credentials.credentials(&self.inner.base_url).await?;
        if let Some(value) = credentials.authorization_header() {
            let value = HeaderValue::from_str(&value)
                .map_err(|e| AuthError::InvalidValue(e.to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        debug!(%method, %url, "sending request");
        let mut request = WireRequest::new(method, url);
        request.headers = headers;
        request.body = body;

        let response = self.inner.transport.send(request).await?;
        debug!(status = response.status, "received response");
        Ok(response)
    }

    /// Sends a GET, expects `200 OK` and decodes the body.
    pub(crate) async fn get_decoded<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let response = self.request(Method::GET, path, None, WireBody::Empty).await?;
        response.expect_status(StatusCode::OK)?;
        Ok(response.decode()?)
    }
}
