//! Payload projection

use serde_json::json;
use tracing::debug;

use super::fields::FieldSet;
use super::schema::is_extension_key;
use super::value::FieldValue;

/// Builds the `fields` object of a create payload.
///
/// Only fields with a value are included; unset and empty fields are left
/// out entirely, which the server reads as "use the project default".
/// Custom field values are passed through as-is.
pub fn create_payload<F: FieldSet>(
    fields: &F,
) -> Result<serde_json::Map<String, serde_json::Value>, serde_json::Error> {
    let mut payload = serde_json::Map::new();
    for spec in F::schema().creatable() {
        if let Some(value) = fields.get(spec.name) {
            payload.insert(spec.wire_key.to_string(), value.to_wire()?);
        }
    }
    for (key, value) in fields.extensions().iter() {
        payload.insert(key.clone(), value.clone());
    }
    Ok(payload)
}

/// Builds the `update` object of an update payload.
///
/// Each included field is wrapped in the server's `[{"set": value}]`
/// operation envelope. The inclusion rule matches [`create_payload`]:
/// absence means "leave the field unchanged", so there is no way to clear
/// a field through this projection.
pub fn update_payload<F: FieldSet>(
    fields: &F,
) -> Result<serde_json::Map<String, serde_json::Value>, serde_json::Error> {
    let mut payload = serde_json::Map::new();
    for spec in F::schema().updatable() {
        if let Some(value) = fields.get(spec.name) {
            payload.insert(spec.wire_key.to_string(), json!([{ "set": value.to_wire()? }]));
        }
    }
    for (key, value) in fields.extensions().iter() {
        payload.insert(key.clone(), json!([{ "set": value }]));
    }
    Ok(payload)
}

/// Decodes a wire `fields` object into a field set.
///
/// Decoding is lenient: nulls are skipped, custom field values are kept
/// raw under their wire keys, known fields with an unexpected shape are
/// skipped with a log line, and keys the schema does not name are dropped.
pub fn fields_from_wire<F: FieldSet>(wire: &serde_json::Map<String, serde_json::Value>) -> F {
    let schema = F::schema();
    let mut fields = F::default();
    for (key, value) in wire {
        if value.is_null() {
            continue;
        }
        if let Some(spec) = schema.spec_for_wire_key(key) {
            match FieldValue::from_wire(spec.kind, value) {
                Some(decoded) => {
                    if fields.set(spec.name, decoded).is_err() {
                        debug!(field = %key, "field set refused its own schema entry");
                    }
                }
                None => {
                    debug!(field = %key, "skipping field with unexpected shape");
                }
            }
        } else if is_extension_key(key) {
            // the prefix was just checked, insert cannot refuse the key
            let _ = fields.extensions_mut().insert(key.clone(), value.clone());
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fields::IssueFields;
    use crate::model::types::Timetracking;

    fn sample_fields() -> IssueFields {
        let mut fields = IssueFields::with_summary("Fix the login page");
        fields.labels = vec!["ui".to_string(), "auth".to_string()];
        fields.timetracking = Some(Timetracking::from_estimate("2d"));
        fields.extensions.insert("customfield_10024", json!("team-a")).unwrap();
        fields
    }

    #[test]
    fn create_payload_includes_only_set_fields() {
        let payload = create_payload(&sample_fields()).unwrap();
        assert_eq!(payload.get("summary"), Some(&json!("Fix the login page")));
        assert_eq!(payload.get("labels"), Some(&json!(["ui", "auth"])));
        assert_eq!(payload.get("timetracking"), Some(&json!({ "originalEstimate": "2d" })));
        assert_eq!(payload.get("customfield_10024"), Some(&json!("team-a")));
        assert!(!payload.contains_key("description"));
    }

    #[test]
    fn create_payload_of_default_fields_is_empty() {
        let payload = create_payload(&IssueFields::default()).unwrap();
        assert!(payload.is_empty());
    }

    #[test]
    fn update_payload_wraps_values_in_set_operations() {
        let payload = update_payload(&sample_fields()).unwrap();
        assert_eq!(payload.get("summary"), Some(&json!([{ "set": "Fix the login page" }])));
        assert_eq!(payload.get("labels"), Some(&json!([{ "set": ["ui", "auth"] }])));
        assert_eq!(
            payload.get("timetracking"),
            Some(&json!([{ "set": { "originalEstimate": "2d" } }]))
        );
        assert_eq!(payload.get("customfield_10024"), Some(&json!([{ "set": "team-a" }])));
    }

    #[test]
    fn read_only_fields_never_reach_a_payload() {
        let wire = json!({ "status": { "id": "3", "name": "In Progress" } });
        let fields: IssueFields = fields_from_wire(wire.as_object().unwrap());
        assert!(fields.status.is_some());
        assert!(create_payload(&fields).unwrap().is_empty());
        assert!(update_payload(&fields).unwrap().is_empty());
    }

    #[test]
    fn wire_decoding_keeps_known_and_custom_fields() {
        let wire = json!({
            "summary": "Fix the login page",
            "timespent": 3600,
            "resolutiondate": "2024-01-15T10:30:00.000+0000",
            "customfield_10024": { "value": "team-a" },
            "votes": { "count": 3 },
            "assignee": null
        });
        let fields: IssueFields = fields_from_wire(wire.as_object().unwrap());
        assert_eq!(fields.summary.as_deref(), Some("Fix the login page"));
        assert_eq!(fields.time_spent, Some(3600));
        assert!(fields.resolution_date.is_some());
        assert_eq!(fields.extensions.get("customfield_10024"), Some(&json!({ "value": "team-a" })));
        assert!(fields.assignee.is_none());
        assert_eq!(fields.extensions.len(), 1);
    }

    #[test]
    fn malformed_known_fields_are_skipped() {
        let wire = json!({ "summary": 42, "timespent": "an hour" });
        let fields: IssueFields = fields_from_wire(wire.as_object().unwrap());
        assert!(fields.summary.is_none());
        assert!(fields.time_spent.is_none());
    }

    #[test]
    fn projection_survives_a_wire_round_trip() {
        let original = sample_fields();
        let payload = create_payload(&original).unwrap();
        let decoded: IssueFields = fields_from_wire(&payload);
        assert_eq!(decoded.summary, original.summary);
        assert_eq!(decoded.labels, original.labels);
        assert_eq!(decoded.timetracking, original.timetracking);
        assert_eq!(decoded.extensions, original.extensions);
    }
}
