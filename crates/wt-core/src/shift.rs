//! Per-worker shift configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Configured shift boundaries for one worker.
///
/// All fields are optional; a worker with no configuration at all falls back
/// to the literal default shift end during resolution. Supplied by the
/// data-access collaborator and treated as read-only for the whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftConfig {
    /// Shift start clock string, e.g. "8:30".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_start: Option<String>,

    /// Shift end clock string, e.g. "17:00".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_end: Option<String>,

    /// Rest period start. When set and no break row exists in the raw data,
    /// a break segment is synthesized at this time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_start: Option<String>,

    /// Rest period end.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_end: Option<String>,

    /// First day this configuration applies, inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<NaiveDate>,

    /// Last day this configuration applies, inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<NaiveDate>,
}

impl ShiftConfig {
    /// Whether this configuration is in effect on the given day.
    ///
    /// A configuration outside its validity range is treated as absent for
    /// that day, not as an error.
    pub fn applies_on(&self, day: NaiveDate) -> bool {
        if self.valid_from.is_some_and(|from| day < from) {
            return false;
        }
        if self.valid_to.is_some_and(|to| day > to) {
            return false;
        }
        true
    }
}
