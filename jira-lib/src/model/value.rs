//! Field values

use chrono::DateTime;
use chrono::FixedOffset;
use serde_json::json;

use super::link::IssueLink;
use super::types::datetime;
use super::types::Attachment;
use super::types::JiraUser;
use super::types::Priority;
use super::types::Resolution;
use super::types::Status;
use super::types::Timetracking;

/// The value of one structured field.
///
/// Each variant corresponds to a [`FieldKind`](super::FieldKind) in the
/// schema; conversion to and from the wire representation lives here so
/// projection code never touches raw JSON shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free text (summary, description).
    Text(String),
    /// A list of short strings (labels).
    TextList(Vec<String>),
    /// A duration in seconds (time estimates, time spent).
    Seconds(i64),
    /// A point in time (resolution date).
    Timestamp(DateTime<FixedOffset>),
    /// Time tracking estimates.
    Time(Timetracking),
    /// A workflow status.
    Status(Status),
    /// An issue priority.
    Priority(Priority),
    /// An issue resolution.
    Resolution(Resolution),
    /// A user (reporter, assignee).
    User(JiraUser),
    /// Issue links.
    Links(Vec<IssueLink>),
    /// File attachments.
    Attachments(Vec<Attachment>),
}

/// The kind of value a schema field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextList,
    Seconds,
    Timestamp,
    Time,
    Status,
    Priority,
    Resolution,
    User,
    Links,
    Attachments,
}

impl FieldKind {
    /// Returns a human-readable name for error messages.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextList => "text list",
            Self::Seconds => "seconds",
            Self::Timestamp => "timestamp",
            Self::Time => "time tracking",
            Self::Status => "status",
            Self::Priority => "priority",
            Self::Resolution => "resolution",
            Self::User => "user",
            Self::Links => "links",
            Self::Attachments => "attachments",
        }
    }
}

impl FieldValue {
    /// Returns the kind this value satisfies.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::TextList(_) => FieldKind::TextList,
            Self::Seconds(_) => FieldKind::Seconds,
            Self::Timestamp(_) => FieldKind::Timestamp,
            Self::Time(_) => FieldKind::Time,
            Self::Status(_) => FieldKind::Status,
            Self::Priority(_) => FieldKind::Priority,
            Self::Resolution(_) => FieldKind::Resolution,
            Self::User(_) => FieldKind::User,
            Self::Links(_) => FieldKind::Links,
            Self::Attachments(_) => FieldKind::Attachments,
        }
    }

    /// Returns a human-readable name for error messages.
    pub fn type_name(&self) -> &'static str {
        self.kind().type_name()
    }

    /// Converts this value to its wire representation.
    ///
    /// Time tracking is reduced to the estimate string, which is the only
    /// part of it the server accepts on writes.
    pub fn to_wire(&self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            Self::Text(text) => Ok(json!(text)),
            Self::TextList(items) => Ok(json!(items)),
            Self::Seconds(seconds) => Ok(json!(seconds)),
            Self::Timestamp(at) => Ok(json!(datetime::format_datetime(at))),
            Self::Time(tracking) => match &tracking.original_estimate {
                Some(estimate) => Ok(json!({ "originalEstimate": estimate })),
                None => Ok(json!({})),
            },
            Self::Status(status) => serde_json::to_value(status),
            Self::Priority(priority) => serde_json::to_value(priority),
            Self::Resolution(resolution) => serde_json::to_value(resolution),
            Self::User(user) => serde_json::to_value(user),
            Self::Links(links) => serde_json::to_value(links),
            Self::Attachments(attachments) => serde_json::to_value(attachments),
        }
    }

    /// Decodes a wire value into the given kind.
    ///
    /// Returns `None` when the wire value does not fit the kind; callers
    /// decide whether that is an error or a field to skip.
    pub fn from_wire(kind: FieldKind, value: &serde_json::Value) -> Option<FieldValue> {
        if value.is_null() {
            return None;
        }
        match kind {
            FieldKind::Text => value.as_str().map(|s| Self::Text(s.to_string())),
            FieldKind::TextList => serde_json::from_value(value.clone()).ok().map(Self::TextList),
            FieldKind::Seconds => value.as_i64().map(Self::Seconds),
            FieldKind::Timestamp => value
                .as_str()
                .and_then(datetime::parse_datetime)
                .map(Self::Timestamp),
            FieldKind::Time => serde_json::from_value(value.clone()).ok().map(Self::Time),
            FieldKind::Status => serde_json::from_value(value.clone()).ok().map(Self::Status),
            FieldKind::Priority => serde_json::from_value(value.clone()).ok().map(Self::Priority),
            FieldKind::Resolution => serde_json::from_value(value.clone()).ok().map(Self::Resolution),
            FieldKind::User => serde_json::from_value(value.clone()).ok().map(Self::User),
            FieldKind::Links => serde_json::from_value(value.clone()).ok().map(Self::Links),
            FieldKind::Attachments => serde_json::from_value(value.clone()).ok().map(Self::Attachments),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::TextList(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Seconds(value)
    }
}

impl From<Timetracking> for FieldValue {
    fn from(value: Timetracking) -> Self {
        Self::Time(value)
    }
}

impl From<DateTime<FixedOffset>> for FieldValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Timestamp(value)
    }
}
