//! Options command: book and area tags available for filtering.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use wt_core::{SegmentFilter, area_options, book_options};
use wt_source::SnapshotSource;

pub fn run<W: Write>(writer: &mut W, source: &SnapshotSource, day: NaiveDate) -> Result<()> {
    // Options always come from the unfiltered full-day set.
    let view = wt_core::reconstruct(source, day, &SegmentFilter::default())
        .with_context(|| format!("failed to load snapshot from {}", source.dir().display()))?;

    writeln!(writer, "Books:")?;
    for book in book_options(&view.unfiltered) {
        writeln!(writer, "- {book}")?;
    }
    writeln!(writer, "Areas:")?;
    for area in area_options(&view.unfiltered) {
        writeln!(writer, "- {area}")?;
    }

    Ok(())
}
