//! Server info type

use chrono::DateTime;
use chrono::FixedOffset;
use serde::Deserialize;
use serde::Serialize;

use super::datetime;

/// Version and build information about the Jira instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerInfo {
    /// The configured base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Version string (e.g. "9.4.0").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Build number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_number: Option<i64>,
    /// When the build was produced.
    #[serde(with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub build_date: Option<DateTime<FixedOffset>>,
    /// Server clock at the time of the request.
    #[serde(with = "datetime::optional", skip_serializing_if = "Option::is_none")]
    pub server_time: Option<DateTime<FixedOffset>>,
    /// Source control revision the build came from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scm_info: Option<String>,
    /// Instance title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_server_info() {
        let info: ServerInfo = serde_json::from_str(
            r#"{
                "baseUrl": "https://jira.example.com",
                "version": "9.4.0",
                "buildNumber": 940000,
                "serverTime": "2024-01-15T10:30:00.000+0000",
                "serverTitle": "Example Jira"
            }"#,
        )
        .unwrap();
        assert_eq!(info.version.as_deref(), Some("9.4.0"));
        assert_eq!(info.build_number, Some(940000));
        assert!(info.server_time.is_some());
    }
}
