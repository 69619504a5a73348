//! Data-access seam and the top-level reconstruction entry point.
//!
//! The engine never talks to a spreadsheet, file, or database itself; it
//! reads a point-in-time snapshot through [`TimelineSource`] and leaves
//! caching and staleness policy to the implementation behind the trait.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::entry::RawEntry;
use crate::filter::SegmentFilter;
use crate::shift::ShiftConfig;
use crate::timeline::{ResolvedSegment, reconstruct_day};
use crate::warning::Warning;

/// Read-only access to the raw rows backing a day's timeline.
pub trait TimelineSource {
    type Error;

    /// All task rows for the target day.
    fn fetch_raw_entries(&self, day: NaiveDate) -> Result<Vec<RawEntry>, Self::Error>;

    /// Per-worker shift configuration, keyed by worker name.
    fn fetch_shift_config(&self) -> Result<HashMap<String, ShiftConfig>, Self::Error>;

    /// Names of the workers expected to work the target day.
    fn fetch_scheduled_workers(&self, day: NaiveDate) -> Result<Vec<String>, Self::Error>;
}

/// A filtered view over one reconstructed day.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineView {
    /// Segments passing the requested filter.
    pub filtered: Vec<ResolvedSegment>,

    /// Warnings from the whole run, independent of the filter.
    pub warnings: Vec<Warning>,

    /// The unfiltered full-day set, for option lists and roster checks.
    pub unfiltered: Vec<ResolvedSegment>,
}

/// Fetches one day's rows and configuration and reconstructs the timeline.
///
/// Filtering happens after resolution, so the unfiltered set is always the
/// complete day regardless of the filter argument.
pub fn reconstruct<S: TimelineSource>(
    source: &S,
    day: NaiveDate,
    filter: &SegmentFilter,
) -> Result<TimelineView, S::Error> {
    let entries = source.fetch_raw_entries(day)?;
    let shifts = source.fetch_shift_config()?;

    let timeline = reconstruct_day(day, &entries, &shifts);
    let filtered = filter.apply(&timeline.segments);

    Ok(TimelineView {
        filtered,
        warnings: timeline.warnings,
        unfiltered: timeline.segments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource {
        entries: Vec<RawEntry>,
        shifts: HashMap<String, ShiftConfig>,
        scheduled: Vec<String>,
    }

    impl TimelineSource for FixedSource {
        type Error = std::convert::Infallible;

        fn fetch_raw_entries(&self, _day: NaiveDate) -> Result<Vec<RawEntry>, Self::Error> {
            Ok(self.entries.clone())
        }

        fn fetch_shift_config(&self) -> Result<HashMap<String, ShiftConfig>, Self::Error> {
            Ok(self.shifts.clone())
        }

        fn fetch_scheduled_workers(&self, _day: NaiveDate) -> Result<Vec<String>, Self::Error> {
            Ok(self.scheduled.clone())
        }
    }

    fn row(worker: &str, book: &str) -> RawEntry {
        RawEntry {
            worker: worker.to_string(),
            area: "A-1".to_string(),
            task: "harvest".to_string(),
            start: "9:00".to_string(),
            end: "10:00".to_string(),
            book: book.to_string(),
            ..RawEntry::default()
        }
    }

    #[test]
    fn filtered_view_keeps_the_unfiltered_set_intact() {
        let source = FixedSource {
            entries: vec![row("Sato", "field"), row("Ito", "pack")],
            shifts: HashMap::new(),
            scheduled: vec![],
        };
        let day = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let filter = SegmentFilter {
            book: Some("field".to_string()),
            ..SegmentFilter::default()
        };

        let view = reconstruct(&source, day, &filter).unwrap();

        assert_eq!(view.filtered.len(), 1);
        assert_eq!(view.filtered[0].worker, "Sato");
        assert_eq!(view.unfiltered.len(), 2);
        assert!(view.warnings.is_empty());
    }

    #[test]
    fn empty_day_is_a_valid_view() {
        let source = FixedSource {
            entries: vec![],
            shifts: HashMap::new(),
            scheduled: vec!["Sato".to_string()],
        };
        let day = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();

        let view = reconstruct(&source, day, &SegmentFilter::default()).unwrap();

        assert!(view.filtered.is_empty());
        assert!(view.unfiltered.is_empty());
        assert!(view.warnings.is_empty());
    }
}
