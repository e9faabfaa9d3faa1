//! Named workflow entities: status, priority, resolution, issue type

use serde::Deserialize;
use serde::Serialize;

/// A workflow status (e.g. "Open", "In Progress").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Status {
    /// Canonical URL of this status resource.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// Status id.
    pub id: String,
    /// Status name.
    pub name: String,
    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Icon URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// An issue priority (e.g. "Blocker", "Minor").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Priority {
    /// Canonical URL of this priority resource.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// Priority id.
    pub id: String,
    /// Priority name.
    pub name: String,
    /// Icon URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

/// An issue resolution (e.g. "Fixed", "Won't Fix").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resolution {
    /// Canonical URL of this resolution resource.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// Resolution id.
    pub id: String,
    /// Resolution name.
    pub name: String,
    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An issue type (e.g. "Bug", "Task").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IssueType {
    /// Canonical URL of this issue type resource.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// Issue type id.
    pub id: String,
    /// Issue type name.
    pub name: String,
    /// Longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Icon URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Whether this type denotes subtasks.
    pub subtask: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_status() {
        let status: Status = serde_json::from_str(
            r#"{"self":"https://jira.example.com/rest/api/2/status/1","id":"1","name":"Open","description":"Ready for work"}"#,
        )
        .unwrap();
        assert_eq!(status.id, "1");
        assert_eq!(status.name, "Open");
    }

    #[test]
    fn deserializes_issue_type_list_entry() {
        let issue_type: IssueType = serde_json::from_str(
            r#"{"id":"3","name":"Task","subtask":false,"iconUrl":"https://jira.example.com/task.png"}"#,
        )
        .unwrap();
        assert_eq!(issue_type.name, "Task");
        assert!(!issue_type.subtask);
    }
}
