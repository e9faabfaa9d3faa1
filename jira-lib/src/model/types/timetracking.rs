//! Time tracking estimates

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

/// Seconds in one working day (8 hours).
const SECONDS_PER_DAY: i64 = 8 * 3600;

/// Time tracking information on an issue.
///
/// The estimate travels in two synchronized representations: the duration
/// string Jira parses (`"2d"`, `"4h 30m"`) and the equivalent second count
/// the server computes from it.
///
/// # Example
///
/// ```
/// use jira_lib::model::types::Timetracking;
/// use rust_decimal::Decimal;
///
/// let estimate = Timetracking::from_days(Decimal::new(25, 1));  // 2.5 days
/// assert_eq!(estimate.original_estimate.as_deref(), Some("2.5d"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Timetracking {
    /// Estimate as a Jira duration string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_estimate: Option<String>,
    /// Estimate in seconds, as computed by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_estimate_seconds: Option<i64>,
}

impl Timetracking {
    /// Creates time tracking from a duration string such as `"4h 30m"`.
    pub fn from_estimate(estimate: impl Into<String>) -> Self {
        Self {
            original_estimate: Some(estimate.into()),
            original_estimate_seconds: None,
        }
    }

    /// Creates time tracking from a working-day count (8h days).
    ///
    /// Fractions of a second are truncated, matching the server's own
    /// rounding.
    pub fn from_days(days: Decimal) -> Self {
        let seconds = (days * Decimal::from(SECONDS_PER_DAY)).trunc();
        Self {
            original_estimate: Some(format!("{days}d")),
            original_estimate_seconds: seconds.to_i64(),
        }
    }

    /// Returns the estimate converted to working days, if the server
    /// reported a second count.
    pub fn original_estimate_days(&self) -> Option<Decimal> {
        self.original_estimate_seconds
            .map(|seconds| Decimal::from(seconds) / Decimal::from(SECONDS_PER_DAY))
    }

    /// Returns `true` when neither representation is present.
    pub fn is_empty(&self) -> bool {
        self.original_estimate.is_none() && self.original_estimate_seconds.is_none()
    }
}
