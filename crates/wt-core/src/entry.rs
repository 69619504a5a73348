//! Raw task sheet rows and clock parsing.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One row of the task sheet for the target day.
///
/// All fields are plain strings as they come off the sheet; an empty string
/// means the cell was blank. Rows are supplied whole by the data-access
/// collaborator and never mutated by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    /// Worker name. Rows with a blank name cannot be attributed to any
    /// timeline and are dropped during grouping.
    #[serde(default)]
    pub worker: String,

    /// Area tag (e.g. "A-1", "sorting room").
    #[serde(default)]
    pub area: String,

    /// Production line.
    #[serde(default)]
    pub line: String,

    /// Crop variety.
    #[serde(default)]
    pub variety: String,

    /// Free-text task description.
    #[serde(default)]
    pub task: String,

    /// Free-text instruction.
    #[serde(default)]
    pub instruction: String,

    /// Start time of day, e.g. "9:00". May be blank.
    #[serde(default)]
    pub start: String,

    /// End time of day. Usually blank; inferred during resolution.
    #[serde(default)]
    pub end: String,

    /// Book (category) tag.
    #[serde(default)]
    pub book: String,
}

/// Parses a clock string like "9:00" or "17:00" onto the given day.
///
/// Returns `None` for blank or malformed values; callers decide whether
/// that is a warning or a silent fallback.
pub(crate) fn parse_clock(day: NaiveDate, value: &str) -> Option<NaiveDateTime> {
    let time = NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()?;
    Some(day.and_time(time))
}
