//! Jira timestamp handling

use chrono::DateTime;
use chrono::FixedOffset;

/// Jira's timestamp format, e.g. `2024-01-15T10:30:00.000+0000`.
///
/// Note the offset carries no colon, which keeps it outside RFC 3339.
const JIRA_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Parses a timestamp in Jira's format, accepting RFC 3339 as a fallback.
pub fn parse_datetime(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_str(value, JIRA_DATETIME_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .ok()
}

/// Formats a timestamp the way Jira renders them.
pub fn format_datetime(value: &DateTime<FixedOffset>) -> String {
    value.format(JIRA_DATETIME_FORMAT).to_string()
}

/// Serde adapter for optional Jira timestamps.
///
/// Use with `#[serde(default, with = "datetime::optional")]`.
pub(crate) mod optional {
    use chrono::DateTime;
    use chrono::FixedOffset;
    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serializer;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        match value.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => super::parse_datetime(raw)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}"))),
        }
    }

    pub fn serialize<S>(value: &Option<DateTime<FixedOffset>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(datetime) => serializer.serialize_some(&super::format_datetime(datetime)),
            None => serializer.serialize_none(),
        }
    }
}
