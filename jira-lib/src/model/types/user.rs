//! User types

use serde::Deserialize;
use serde::Serialize;

/// A Jira user as returned by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JiraUser {
    /// Canonical URL of this user resource.
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<String>,
    /// Login name. Cloud instances may omit this in favor of account ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email address, if the server exposes it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Whether the account is active.
    pub active: bool,
    /// Avatar URLs by size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_urls: Option<AvatarUrls>,
}

/// Avatar URLs for a user, keyed by pixel size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarUrls {
    #[serde(rename = "16x16", skip_serializing_if = "Option::is_none")]
    pub size_16: Option<String>,
    #[serde(rename = "24x24", skip_serializing_if = "Option::is_none")]
    pub size_24: Option<String>,
    #[serde(rename = "32x32", skip_serializing_if = "Option::is_none")]
    pub size_32: Option<String>,
    #[serde(rename = "48x48", skip_serializing_if = "Option::is_none")]
    pub size_48: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_user() {
        let user: JiraUser = serde_json::from_str(
            r#"{
                "self": "https://jira.example.com/rest/api/2/user?username=fred",
                "name": "fred",
                "emailAddress": "fred@example.com",
                "displayName": "Fred F.",
                "active": true,
                "avatarUrls": {"16x16": "https://jira.example.com/avatar16.png"}
            }"#,
        )
        .unwrap();
        assert_eq!(user.name.as_deref(), Some("fred"));
        assert_eq!(user.email_address.as_deref(), Some("fred@example.com"));
        assert!(user.active);
        assert_eq!(
            user.avatar_urls.unwrap().size_16.as_deref(),
            Some("https://jira.example.com/avatar16.png")
        );
    }

    #[test]
    fn tolerates_sparse_user() {
        let user: JiraUser = serde_json::from_str(r#"{"displayName": "Anonymous"}"#).unwrap();
        assert!(user.name.is_none());
        assert!(!user.active);
    }
}
