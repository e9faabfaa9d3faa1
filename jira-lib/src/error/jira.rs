//! Jira-specific error types

use std::collections::HashMap;

use serde::Deserialize;

/// Structured error information from Jira API responses.
///
/// Jira error bodies carry a list of general messages plus a map of
/// per-field messages; either part may be empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JiraErrorDetail {
    /// General error messages.
    #[serde(default, rename = "errorMessages")]
    pub error_messages: Vec<String>,
    /// Field-specific error messages, keyed by wire field name.
    #[serde(default)]
    pub errors: HashMap<String, String>,
}

impl JiraErrorDetail {
    /// Parses error detail out of a response body, if the body carries any.
    ///
    /// Returns `None` for bodies that are not Jira error JSON or that decode
    /// to an entirely empty detail.
    pub fn from_body(body: &str) -> Option<JiraErrorDetail> {
        let detail: JiraErrorDetail = serde_json::from_str(body).ok()?;
        if detail.is_empty() { None } else { Some(detail) }
    }

    /// Returns `true` when no messages of either kind are present.
    pub fn is_empty(&self) -> bool {
        self.error_messages.is_empty() && self.errors.is_empty()
    }

    /// Checks if this detail mentions the given wire field.
    pub fn has_field_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }
}

impl std::fmt::Display for JiraErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts: Vec<String> = self.error_messages.clone();
        let mut fields: Vec<_> = self.errors.iter().collect();
        fields.sort_by_key(|(field, _)| field.as_str());
        parts.extend(fields.into_iter().map(|(field, message)| format!("{field}: {message}")));
        write!(f, "{}", parts.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_message_kinds() {
        let body = r#"{"errorMessages":["Issue does not exist"],"errors":{"summary":"Field is required"}}"#;
        let detail = JiraErrorDetail::from_body(body).unwrap();
        assert_eq!(detail.error_messages, vec!["Issue does not exist"]);
        assert_eq!(detail.errors.get("summary").unwrap(), "Field is required");
        assert!(detail.has_field_error("summary"));
        assert!(!detail.has_field_error("description"));
    }

    #[test]
    fn empty_or_foreign_bodies_yield_none() {
        assert!(JiraErrorDetail::from_body("").is_none());
        assert!(JiraErrorDetail::from_body("<html>busted proxy</html>").is_none());
        assert!(JiraErrorDetail::from_body(r#"{"errorMessages":[],"errors":{}}"#).is_none());
        assert!(JiraErrorDetail::from_body(r#"{"issues":[]}"#).is_none());
    }

    #[test]
    fn display_joins_messages() {
        let body = r#"{"errorMessages":["one","two"],"errors":{"labels":"bad"}}"#;
        let detail = JiraErrorDetail::from_body(body).unwrap();
        assert_eq!(detail.to_string(), "one; two; labels: bad");
    }
}
