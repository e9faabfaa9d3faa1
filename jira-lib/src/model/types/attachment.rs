//! Attachment type

use chrono::DateTime;
use chrono::FixedOffset;
use serde::Deserialize;
use serde::Serialize;

use super::datetime;
use super::JiraUser;

/// A file attached to an issue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Attachment {
    /// Canonical URL of this attachment resource.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// Attachment id.
    pub id: String,
    /// File name.
    pub filename: String,
    /// The user who uploaded the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<JiraUser>,
    /// Upload timestamp.
    #[serde(with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<FixedOffset>>,
    /// File size in bytes.
    pub size: u64,
    /// MIME type reported by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Download URL for the file content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Thumbnail URL, for image attachments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}
