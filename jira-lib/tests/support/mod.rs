//! Shared test support: a scripted transport replaying canned responses.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use jira_lib::auth::StaticCredentials;
use jira_lib::error::ApiError;
use jira_lib::transport::Transport;
use jira_lib::transport::WireBody;
use jira_lib::transport::WireRequest;
use jira_lib::transport::WireResponse;
use jira_lib::JiraClient;
use serde_json::json;

pub const BASE_URL: &str = "https://jira.example.com";

/// One request as the transport saw it, reduced to comparable parts.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub json: Option<serde_json::Value>,
    pub file_name: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    fn from_wire(request: &WireRequest) -> Self {
        let (json, file_name) = match &request.body {
            WireBody::Empty => (None, None),
            WireBody::Json(text) => (serde_json::from_str(text).ok(), None),
            WireBody::File { file_name, .. } => (None, Some(file_name.clone())),
        };
        Self {
            method: request.method.to_string(),
            url: request.url.clone(),
            json,
            file_name,
            headers: request
                .headers
                .iter()
                .map(|(name, value)| {
                    (name.to_string(), value.to_str().unwrap_or_default().to_string())
                })
                .collect(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// The request URL with the test base stripped off.
    pub fn path(&self) -> &str {
        self.url.strip_prefix(BASE_URL).unwrap_or(&self.url)
    }
}

#[derive(Default)]
struct ScriptInner {
    responses: Mutex<VecDeque<WireResponse>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// A transport that answers from a queue of canned responses, in order,
/// and records every request. Clones share the same queue and log.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    inner: Arc<ScriptInner>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response; chainable for test setup.
    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.inner.responses.lock().unwrap().push_back(WireResponse::new(status, body));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.inner.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: WireRequest) -> Result<WireResponse, ApiError> {
        self.inner.requests.lock().unwrap().push(RecordedRequest::from_wire(&request));
        self.inner
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ApiError::Transport("no scripted response left".to_string()))
    }
}

/// Builds a client wired to the given script, with basic credentials.
pub fn client_with(script: &ScriptedTransport) -> JiraClient {
    JiraClient::builder()
        .url(BASE_URL)
        .credentials(StaticCredentials::basic("fred", "fred"))
        .transport(script.clone())
        .build()
}

/// Renders a search page body with one issue per key.
pub fn page_body(start_at: usize, max_results: usize, total: usize, keys: &[&str]) -> String {
    let issues: Vec<serde_json::Value> = keys
        .iter()
        .map(|key| json!({ "id": key, "key": key, "fields": { "summary": format!("issue {key}") } }))
        .collect();
    json!({
        "startAt": start_at,
        "maxResults": max_results,
        "total": total,
        "issues": issues
    })
    .to_string()
}
