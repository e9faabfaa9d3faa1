//! Field sets

use std::collections::BTreeMap;

use chrono::DateTime;
use chrono::FixedOffset;

use crate::error::FieldError;

use super::link::IssueLink;
use super::schema::is_extension_key;
use super::schema::Direction;
use super::schema::FieldSchema;
use super::schema::FieldSpec;
use super::schema::EXTENSION_PREFIX;
use super::types::Attachment;
use super::types::Comment;
use super::types::JiraUser;
use super::types::Priority;
use super::types::Resolution;
use super::types::Status;
use super::types::Timetracking;
use super::value::FieldKind;
use super::value::FieldValue;

/// The capability an issue's field container must provide.
///
/// A field set names its structured fields in a static [`FieldSchema`] and
/// exposes them through [`get`](Self::get) and [`set`](Self::set); custom
/// fields live in a separate [`ExtensionFields`] map keyed by their wire
/// names. Projection builds payloads and decodes responses purely through
/// this trait, so issues can carry a trimmed-down field set where only a
/// few fields matter.
///
/// # Example
///
/// ```ignore
/// let mut fields = IssueFields::default();
/// fields.set("summary", FieldValue::from("Fix the login page"))?;
/// assert!(fields.get("summary").is_some());
/// assert!(fields.get("labels").is_none()); // unset fields read as None
/// ```
pub trait FieldSet: Default + Send + Sync + 'static {
    /// Returns the static schema describing this set's structured fields.
    fn schema() -> &'static FieldSchema;

    /// Returns the value of a structured field.
    ///
    /// Unset and empty fields read as `None`; payload assembly relies on
    /// this to keep default values out of create and update requests.
    fn get(&self, name: &str) -> Option<FieldValue>;

    /// Stores the value of a structured field.
    ///
    /// Fails when the name is not in the schema or the value's kind does
    /// not match the schema entry.
    fn set(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError>;

    /// Returns the custom field values.
    fn extensions(&self) -> &ExtensionFields;

    /// Returns the custom field values for modification.
    fn extensions_mut(&mut self) -> &mut ExtensionFields;
}

/// Custom field values, keyed by their `customfield_*` wire names.
///
/// Values are kept as raw JSON because custom field shapes are defined by
/// server configuration, not by this crate. Keys outside the custom field
/// namespace are refused so structured and custom fields stay disjoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtensionFields {
    values: BTreeMap<String, serde_json::Value>,
}

impl ExtensionFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a custom field value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: serde_json::Value,
    ) -> Result<(), FieldError> {
        let key = key.into();
        if !is_extension_key(&key) {
            return Err(FieldError::not_extension(key, EXTENSION_PREFIX));
        }
        self.values.insert(key, value);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.values.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.values.remove(key)
    }

    /// Iterates over the custom fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

static ISSUE_FIELD_SPECS: &[FieldSpec] = &[
    FieldSpec::new("summary", "summary", FieldKind::Text, Direction::Both),
    FieldSpec::new("description", "description", FieldKind::Text, Direction::Both),
    FieldSpec::new("labels", "labels", FieldKind::TextList, Direction::Both),
    FieldSpec::new("timetracking", "timetracking", FieldKind::Time, Direction::Both),
    FieldSpec::new("status", "status", FieldKind::Status, Direction::Read),
    FieldSpec::new("priority", "priority", FieldKind::Priority, Direction::Read),
    FieldSpec::new("resolution", "resolution", FieldKind::Resolution, Direction::Read),
    FieldSpec::new("resolution_date", "resolutiondate", FieldKind::Timestamp, Direction::Read),
    FieldSpec::new("reporter", "reporter", FieldKind::User, Direction::Read),
    FieldSpec::new("assignee", "assignee", FieldKind::User, Direction::Read),
    FieldSpec::new("time_estimate", "timeestimate", FieldKind::Seconds, Direction::Read),
    FieldSpec::new("time_original_estimate", "timeoriginalestimate", FieldKind::Seconds, Direction::Read),
    FieldSpec::new("time_spent", "timespent", FieldKind::Seconds, Direction::Read),
    FieldSpec::new("links", "issuelinks", FieldKind::Links, Direction::Read),
    FieldSpec::new("attachments", "attachment", FieldKind::Attachments, Direction::Read),
];

static ISSUE_FIELD_SCHEMA: FieldSchema = FieldSchema::new(ISSUE_FIELD_SPECS);

/// The standard issue fields.
///
/// Comments and watchers are not part of the search wire format; they are
/// filled in by the full issue load, which fetches them from their own
/// resources.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueFields {
    pub summary: Option<String>,
    pub description: Option<String>,
    pub labels: Vec<String>,
    pub timetracking: Option<Timetracking>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub resolution: Option<Resolution>,
    pub resolution_date: Option<DateTime<FixedOffset>>,
    pub reporter: Option<JiraUser>,
    pub assignee: Option<JiraUser>,
    /// Remaining estimate in seconds, wire key `timeestimate`.
    pub time_estimate: Option<i64>,
    /// Original estimate in seconds, wire key `timeoriginalestimate`.
    pub time_original_estimate: Option<i64>,
    /// Time logged in seconds, wire key `timespent`.
    pub time_spent: Option<i64>,
    /// Issue links, wire key `issuelinks`.
    pub links: Vec<IssueLink>,
    /// Attachments, wire key `attachment`.
    pub attachments: Vec<Attachment>,
    pub comments: Vec<Comment>,
    pub watchers: Vec<JiraUser>,
    pub extensions: ExtensionFields,
}

impl IssueFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a field set carrying only a summary.
    pub fn with_summary(summary: impl Into<String>) -> Self {
        Self { summary: Some(summary.into()), ..Self::default() }
    }
}

impl FieldSet for IssueFields {
    fn schema() -> &'static FieldSchema {
        &ISSUE_FIELD_SCHEMA
    }

    fn get(&self, name: &str) -> Option<FieldValue> {
        match name {
            "summary" => self.summary.clone().map(FieldValue::Text),
            "description" => self.description.clone().map(FieldValue::Text),
            "labels" => (!self.labels.is_empty()).then(|| FieldValue::TextList(self.labels.clone())),
            "timetracking" => self
                .timetracking
                .clone()
                .filter(|tracking| !tracking.is_empty())
                .map(FieldValue::Time),
            "status" => self.status.clone().map(FieldValue::Status),
            "priority" => self.priority.clone().map(FieldValue::Priority),
            "resolution" => self.resolution.clone().map(FieldValue::Resolution),
            "resolution_date" => self.resolution_date.map(FieldValue::Timestamp),
            "reporter" => self.reporter.clone().map(FieldValue::User),
            "assignee" => self.assignee.clone().map(FieldValue::User),
            "time_estimate" => self.time_estimate.map(FieldValue::Seconds),
            "time_original_estimate" => self.time_original_estimate.map(FieldValue::Seconds),
            "time_spent" => self.time_spent.map(FieldValue::Seconds),
            "links" => (!self.links.is_empty()).then(|| FieldValue::Links(self.links.clone())),
            "attachments" => {
                (!self.attachments.is_empty()).then(|| FieldValue::Attachments(self.attachments.clone()))
            }
            _ => None,
        }
    }

    fn set(&mut self, name: &str, value: FieldValue) -> Result<(), FieldError> {
        match (name, value) {
            ("summary", FieldValue::Text(v)) => self.summary = Some(v),
            ("description", FieldValue::Text(v)) => self.description = Some(v),
            ("labels", FieldValue::TextList(v)) => self.labels = v,
            ("timetracking", FieldValue::Time(v)) => self.timetracking = Some(v),
            ("status", FieldValue::Status(v)) => self.status = Some(v),
            ("priority", FieldValue::Priority(v)) => self.priority = Some(v),
            ("resolution", FieldValue::Resolution(v)) => self.resolution = Some(v),
            ("resolution_date", FieldValue::Timestamp(v)) => self.resolution_date = Some(v),
            ("reporter", FieldValue::User(v)) => self.reporter = Some(v),
            ("assignee", FieldValue::User(v)) => self.assignee = Some(v),
            ("time_estimate", FieldValue::Seconds(v)) => self.time_estimate = Some(v),
            ("time_original_estimate", FieldValue::Seconds(v)) => self.time_original_estimate = Some(v),
            ("time_spent", FieldValue::Seconds(v)) => self.time_spent = Some(v),
            ("links", FieldValue::Links(v)) => self.links = v,
            ("attachments", FieldValue::Attachments(v)) => self.attachments = v,
            (name, value) => {
                let Some(spec) = Self::schema().spec(name) else {
                    return Err(FieldError::missing(name));
                };
                return Err(FieldError::type_mismatch(
                    name,
                    spec.kind.type_name(),
                    value.type_name(),
                ));
            }
        }
        Ok(())
    }

    fn extensions(&self) -> &ExtensionFields {
        &self.extensions
    }

    fn extensions_mut(&mut self) -> &mut ExtensionFields {
        &mut self.extensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_fields_read_as_none() {
        let fields = IssueFields::default();
        assert!(fields.get("summary").is_none());
        assert!(fields.get("labels").is_none());
        assert!(fields.get("timetracking").is_none());
        assert!(fields.get("no_such_field").is_none());
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut fields = IssueFields::default();
        fields.set("summary", FieldValue::from("Fix the login page")).unwrap();
        fields
            .set("labels", FieldValue::from(vec!["ui".to_string(), "auth".to_string()]))
            .unwrap();
        assert_eq!(fields.get("summary"), Some(FieldValue::Text("Fix the login page".to_string())));
        assert_eq!(fields.summary.as_deref(), Some("Fix the login page"));
        assert_eq!(fields.labels, vec!["ui", "auth"]);
    }

    #[test]
    fn set_rejects_a_mismatched_kind() {
        let mut fields = IssueFields::default();
        let err = fields.set("summary", FieldValue::Seconds(30)).unwrap_err();
        assert!(matches!(
            err,
            FieldError::TypeMismatch { expected: "text", actual: "seconds", .. }
        ));
    }

    #[test]
    fn set_rejects_an_unknown_name() {
        let mut fields = IssueFields::default();
        let err = fields.set("votes", FieldValue::Seconds(3)).unwrap_err();
        assert!(matches!(err, FieldError::Missing { .. }));
    }

    #[test]
    fn extensions_refuse_keys_outside_their_namespace() {
        let mut extensions = ExtensionFields::new();
        extensions.insert("customfield_10024", json!("team-a")).unwrap();
        assert_eq!(extensions.get("customfield_10024"), Some(&json!("team-a")));

        let err = extensions.insert("summary", json!("sneaky")).unwrap_err();
        assert!(matches!(err, FieldError::NotExtension { .. }));
    }

    #[test]
    fn schema_and_extension_namespaces_are_disjoint() {
        assert!(IssueFields::schema().specs().all(|spec| !is_extension_key(spec.wire_key)));
    }
}
