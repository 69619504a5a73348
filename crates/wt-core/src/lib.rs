//! Core timeline reconstruction logic for the work timeline viewer.
//!
//! This crate contains the fundamental types and logic for:
//! - Reconstruction: turning raw task sheet rows into a gap-free,
//!   non-overlapping per-worker timeline for one day
//! - Filtering: book/area views over an already-resolved day
//! - Roster comparison: finding scheduled workers with no assigned work

mod entry;
mod filter;
mod shift;
pub mod source;
mod timeline;
mod warning;

pub use entry::RawEntry;
pub use filter::{SegmentFilter, area_options, book_options, unassigned_workers};
pub use shift::ShiftConfig;
pub use source::{TimelineSource, TimelineView, reconstruct};
pub use timeline::{
    BREAK_AREA, BREAK_TASK, CONTINUATION_TASK, DEFAULT_SHIFT_END, DayTimeline, LABEL_SEPARATOR,
    ResolvedSegment, reconstruct_day,
};
pub use warning::{Warning, WarningKind};
