//! Post-resolution filtering and roster comparison.
//!
//! Filtering operates on the already-resolved segment set and never re-runs
//! reconstruction.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::timeline::ResolvedSegment;

/// Exact-match restriction on book and area tags.
///
/// `None` in either position passes everything for that tag; the two
/// restrictions are independent and combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
}

impl SegmentFilter {
    /// Whether a segment passes both restrictions.
    #[must_use]
    pub fn matches(&self, segment: &ResolvedSegment) -> bool {
        self.book.as_deref().is_none_or(|book| segment.book == book)
            && self.area.as_deref().is_none_or(|area| segment.area == area)
    }

    /// Applies the filter to an already-resolved segment set.
    #[must_use]
    pub fn apply(&self, segments: &[ResolvedSegment]) -> Vec<ResolvedSegment> {
        segments
            .iter()
            .filter(|segment| self.matches(segment))
            .cloned()
            .collect()
    }
}

/// Distinct non-empty book tags from the unfiltered set, sorted.
#[must_use]
pub fn book_options(segments: &[ResolvedSegment]) -> Vec<String> {
    distinct_tags(segments.iter().map(|segment| segment.book.as_str()))
}

/// Distinct non-empty area tags from the unfiltered set, sorted.
#[must_use]
pub fn area_options(segments: &[ResolvedSegment]) -> Vec<String> {
    distinct_tags(segments.iter().map(|segment| segment.area.as_str()))
}

fn distinct_tags<'a>(tags: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut options: Vec<String> = tags
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    options.sort();
    options
}

/// Scheduled workers with no resolved segment, in roster order.
///
/// The comparison runs against the unfiltered full-day set so that a
/// filtered view never makes a worker look unassigned.
#[must_use]
pub fn unassigned_workers(scheduled: &[String], segments: &[ResolvedSegment]) -> Vec<String> {
    let assigned: HashSet<&str> = segments
        .iter()
        .map(|segment| segment.worker.as_str())
        .collect();
    scheduled
        .iter()
        .filter(|name| !assigned.contains(name.as_str()))
        .cloned()
        .collect()
}
