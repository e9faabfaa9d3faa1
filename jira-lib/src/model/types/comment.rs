//! Comment type

use chrono::DateTime;
use chrono::FixedOffset;
use serde::Deserialize;
use serde::Serialize;

use super::datetime;
use super::JiraUser;

/// A comment on an issue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Comment {
    /// Canonical URL of this comment resource.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// Comment id.
    pub id: String,
    /// Comment text.
    pub body: String,
    /// The user who wrote the comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<JiraUser>,
    /// The user who last edited the comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_author: Option<JiraUser>,
    /// Creation timestamp.
    #[serde(with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<FixedOffset>>,
    /// Last update timestamp.
    #[serde(with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<FixedOffset>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_comment() {
        let comment: Comment = serde_json::from_str(
            r#"{
                "id": "10100",
                "body": "looks good",
                "author": {"name": "fred", "active": true},
                "created": "2024-01-15T10:30:00.000+0000"
            }"#,
        )
        .unwrap();
        assert_eq!(comment.id, "10100");
        assert_eq!(comment.body, "looks good");
        assert_eq!(comment.author.unwrap().name.as_deref(), Some("fred"));
        assert!(comment.created.is_some());
        assert!(comment.updated.is_none());
    }
}
