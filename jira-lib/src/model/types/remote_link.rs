//! Remote link type

use serde::Deserialize;
use serde::Serialize;

/// A link from an issue to a resource outside Jira.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteLink {
    /// Remote link id, assigned by the server.
    pub id: String,
    /// Target URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Link title shown on the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Optional longer summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl RemoteLink {
    /// Creates a remote link to the given URL.
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            url: Some(url.into()),
            title: Some(title.into()),
            summary: None,
        }
    }

    /// Sets the summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

/// Wire envelope the remote link endpoints return: the link payload sits
/// under `object`, with the id beside it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RemoteLinkResult {
    pub id: serde_json::Value,
    pub object: RemoteLink,
}

impl RemoteLinkResult {
    /// Flattens the envelope into the link it carries.
    pub(crate) fn into_remote_link(self) -> RemoteLink {
        let mut link = self.object;
        link.id = match self.id {
            serde_json::Value::String(id) => id,
            serde_json::Value::Number(id) => id.to_string(),
            _ => String::new(),
        };
        link
    }
}
