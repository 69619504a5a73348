//! Unassigned command: scheduled workers with no assigned work.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use wt_core::{SegmentFilter, TimelineSource, unassigned_workers};
use wt_source::SnapshotSource;

pub fn run<W: Write>(writer: &mut W, source: &SnapshotSource, day: NaiveDate) -> Result<()> {
    let scheduled = source
        .fetch_scheduled_workers(day)
        .context("failed to load roster")?;
    // Compare against the unfiltered full-day set so a filter can never
    // make a worker look unassigned.
    let view = wt_core::reconstruct(source, day, &SegmentFilter::default())
        .with_context(|| format!("failed to load snapshot from {}", source.dir().display()))?;

    let unassigned = unassigned_workers(&scheduled, &view.unfiltered);

    if unassigned.is_empty() {
        writeln!(writer, "All scheduled workers have assigned work.")?;
    } else {
        writeln!(writer, "Unassigned workers for {day}:")?;
        for name in unassigned {
            writeln!(writer, "- {name}")?;
        }
    }

    Ok(())
}
