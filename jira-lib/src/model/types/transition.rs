//! Workflow transition type

use serde::Deserialize;
use serde::Serialize;

use super::Status;

/// A workflow transition available to an issue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Transition {
    /// Transition id.
    pub id: String,
    /// Transition name (e.g. "Close Issue").
    pub name: String,
    /// The status the transition moves the issue to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Status>,
    /// Screen fields the transition accepts, as returned when the
    /// transition list is fetched with field expansion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<serde_json::Value>,
}

impl Transition {
    /// Creates a transition addressed by id only, for driving
    /// a state change without listing transitions first.
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}
