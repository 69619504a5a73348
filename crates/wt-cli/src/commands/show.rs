//! Show command: renders one day's reconstructed timeline.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};

use wt_core::{LABEL_SEPARATOR, SegmentFilter, TimelineView};
use wt_source::SnapshotSource;

pub fn run<W: Write>(
    writer: &mut W,
    source: &SnapshotSource,
    day: NaiveDate,
    filter: &SegmentFilter,
    json: bool,
) -> Result<()> {
    let view = wt_core::reconstruct(source, day, filter)
        .with_context(|| format!("failed to load snapshot from {}", source.dir().display()))?;

    if json {
        serde_json::to_writer_pretty(&mut *writer, &view)?;
        writeln!(writer)?;
        return Ok(());
    }

    render(writer, day, filter, &view)
}

/// Formats a duration as "Xh Ym" if >= 1 hour, "Xm" otherwise.
/// Negative durations are treated as 0m.
fn format_duration(duration: Duration) -> String {
    let total_minutes = duration.num_minutes().max(0);
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours >= 1 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

fn title(day: NaiveDate, filter: &SegmentFilter) -> String {
    let restrictions: Vec<String> = [
        filter.book.as_ref().map(|book| format!("book: {book}")),
        filter.area.as_ref().map(|area| format!("area: {area}")),
    ]
    .into_iter()
    .flatten()
    .collect();

    if restrictions.is_empty() {
        format!("Timeline for {day}")
    } else {
        format!("Timeline for {day} ({})", restrictions.join(", "))
    }
}

fn render<W: Write>(
    writer: &mut W,
    day: NaiveDate,
    filter: &SegmentFilter,
    view: &TimelineView,
) -> Result<()> {
    writeln!(writer, "{}", title(day, filter))?;

    if view.filtered.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "No work recorded for this day.")?;
    } else {
        let mut current: Option<&str> = None;
        for segment in &view.filtered {
            if current != Some(segment.worker.as_str()) {
                writeln!(writer)?;
                writeln!(writer, "{}", segment.worker)?;
                current = Some(segment.worker.as_str());
            }
            let heading = segment.label.split(LABEL_SEPARATOR).next().unwrap_or("");
            writeln!(
                writer,
                "  {}-{}  {}  {}",
                segment.start.format("%H:%M"),
                segment.end.format("%H:%M"),
                format_duration(segment.end - segment.start),
                heading
            )?;
        }
    }

    if !view.warnings.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "Warnings:")?;
        for warning in &view.warnings {
            writeln!(writer, "  - {warning}")?;
        }
    }

    Ok(())
}
