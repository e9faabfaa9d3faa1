//! Issues

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use crate::error::FieldError;

use super::fields::FieldSet;
use super::fields::IssueFields;
use super::link;
use super::projection;
use super::value::FieldValue;

/// A lightweight reference to an issue: its numeric id and its key.
///
/// The server accepts either identifier in resource paths;
/// [`remote_identifier`](Self::remote_identifier) picks the id when it is
/// present and falls back to the key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueRef {
    pub id: String,
    pub key: String,
}

impl IssueRef {
    pub fn new(id: impl Into<String>, key: impl Into<String>) -> Self {
        Self { id: id.into(), key: key.into() }
    }

    pub fn from_id(id: impl Into<String>) -> Self {
        Self { id: id.into(), key: String::new() }
    }

    pub fn from_key(key: impl Into<String>) -> Self {
        Self { id: String::new(), key: key.into() }
    }

    /// Returns the identifier to use in resource paths.
    pub fn remote_identifier(&self) -> &str {
        if self.id.trim().is_empty() { &self.key } else { &self.id }
    }

    /// Returns true when neither id nor key is set.
    pub fn is_blank(&self) -> bool {
        self.id.is_empty() && self.key.is_empty()
    }
}

/// An issue together with its decoded fields.
///
/// The field set type is pluggable; [`IssueFields`] covers the standard
/// fields and is the default.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue<F: FieldSet = IssueFields> {
    pub id: String,
    pub key: String,
    pub self_url: Option<String>,
    pub fields: F,
}

impl<F: FieldSet> Issue<F> {
    /// Returns a reference carrying this issue's identifiers.
    pub fn issue_ref(&self) -> IssueRef {
        IssueRef::new(self.id.clone(), self.key.clone())
    }

    /// Fills omitted issue link endpoints with this issue's own identity.
    ///
    /// Applied after every decode so links read the same regardless of
    /// which side of the relationship they were fetched from.
    pub(crate) fn normalize_links(&mut self) -> Result<(), FieldError> {
        let Some(FieldValue::Links(links)) = self.fields.get("links") else {
            return Ok(());
        };
        let owner = self.issue_ref();
        let normalized = links.into_iter().map(|l| link::normalize(l, &owner)).collect();
        self.fields.set("links", FieldValue::Links(normalized))
    }
}

impl<F: FieldSet> Default for Issue<F> {
    fn default() -> Self {
        Self {
            id: String::new(),
            key: String::new(),
            self_url: None,
            fields: F::default(),
        }
    }
}

impl<'de, F: FieldSet> Deserialize<'de> for Issue<F> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Default, Deserialize)]
        #[serde(default)]
        struct WireIssue {
            id: String,
            key: String,
            #[serde(rename = "self")]
            self_url: Option<String>,
            fields: serde_json::Map<String, serde_json::Value>,
        }

        let wire = WireIssue::deserialize(deserializer)?;
        Ok(Issue {
            id: wire.id,
            key: wire.key,
            self_url: wire.self_url,
            fields: projection::fields_from_wire(&wire.fields),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_identifier_prefers_the_id() {
        assert_eq!(IssueRef::new("10000", "DEMO-1").remote_identifier(), "10000");
        assert_eq!(IssueRef::from_key("DEMO-1").remote_identifier(), "DEMO-1");
        assert_eq!(IssueRef::new("  ", "DEMO-1").remote_identifier(), "DEMO-1");
    }

    #[test]
    fn decodes_an_issue_with_fields() {
        let json = r#"{
            "id": "10000",
            "key": "DEMO-1",
            "self": "https://jira.example.com/rest/api/2/issue/10000",
            "fields": {
                "summary": "Fix the login page",
                "labels": ["ui", "auth"]
            }
        }"#;
        let issue: Issue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.key, "DEMO-1");
        assert_eq!(issue.fields.summary.as_deref(), Some("Fix the login page"));
        assert_eq!(issue.fields.labels, vec!["ui", "auth"]);
    }

    #[test]
    fn decodes_a_bare_reference() {
        let issue: Issue = serde_json::from_str(r#"{"id": "10000", "key": "DEMO-1"}"#).unwrap();
        assert_eq!(issue.issue_ref(), IssueRef::new("10000", "DEMO-1"));
        assert!(issue.fields.summary.is_none());
    }

    #[test]
    fn normalize_links_fills_the_owner_side() {
        let json = r#"{
            "id": "10000",
            "key": "DEMO-1",
            "fields": {
                "issuelinks": [
                    {
                        "id": "30000",
                        "type": { "name": "Blocks" },
                        "outwardIssue": { "id": "10001", "key": "DEMO-2" }
                    }
                ]
            }
        }"#;
        let mut issue: Issue = serde_json::from_str(json).unwrap();
        issue.normalize_links().unwrap();
        let link = &issue.fields.links[0];
        assert_eq!(link.inward, IssueRef::new("10000", "DEMO-1"));
        assert_eq!(link.outward, IssueRef::new("10001", "DEMO-2"));
    }
}
