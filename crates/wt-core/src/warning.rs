//! Warnings accumulated while reconstructing a timeline.

use serde::Serialize;
use thiserror::Error;

/// Cause category of a [`Warning`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    UnparsableStart,
    UnparsableEnd,
    InvertedInterval,
}

/// A per-row problem found during reconstruction.
///
/// Warnings never abort the run; the offending row is dropped and
/// processing continues with the remaining rows and workers.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// The row carried a start time that did not parse.
    #[error("could not parse start time \"{value}\" for worker {worker}")]
    UnparsableStart { worker: String, value: String },

    /// The row carried an explicit end time that did not parse.
    #[error("could not parse end time \"{value}\" for worker {worker}")]
    UnparsableEnd { worker: String, value: String },

    /// The resolved interval was empty or inverted.
    #[error("start and end times for worker {worker} coincide or are inverted: {start} - {end}")]
    InvertedInterval {
        worker: String,
        start: String,
        end: String,
    },
}

impl Warning {
    /// The cause category, for grouping and assertions.
    #[must_use]
    pub const fn kind(&self) -> WarningKind {
        match self {
            Self::UnparsableStart { .. } => WarningKind::UnparsableStart,
            Self::UnparsableEnd { .. } => WarningKind::UnparsableEnd,
            Self::InvertedInterval { .. } => WarningKind::InvertedInterval,
        }
    }

    /// The worker the warning is attributed to.
    #[must_use]
    pub fn worker(&self) -> &str {
        match self {
            Self::UnparsableStart { worker, .. }
            | Self::UnparsableEnd { worker, .. }
            | Self::InvertedInterval { worker, .. } => worker,
        }
    }
}
