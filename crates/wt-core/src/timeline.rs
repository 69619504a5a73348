//! Timeline reconstruction for one day of task sheet rows.
//!
//! Four stages run in sequence for each worker: group rows by name, sort
//! them chronologically, resolve missing end times (synthesizing break and
//! continuation segments where the shift configuration calls for them), and
//! validate/label the resulting intervals.
//!
//! # End-time precedence
//!
//! 1. Explicit end time on the row; a malformed value drops the row with a
//!    warning.
//! 2. The next row's start time; falls back to `start + 1h` if that does
//!    not parse.
//! 3. Last row: the configured shift end, or "17:00" when the worker has no
//!    configuration; falls back to `start + 1h` on any parse failure.
//!
//! Fallback failures are absorbed silently: a malformed *explicit* end is a
//! likely data-entry error worth surfacing, while missing chained values
//! are expected and handled.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::entry::{RawEntry, parse_clock};
use crate::shift::ShiftConfig;
use crate::warning::Warning;

/// Task description that marks a break row in the raw data.
///
/// Detection is an exact string match: a differently-worded break row does
/// not suppress break synthesis.
pub const BREAK_TASK: &str = "break";

/// Area tag attached to synthesized break segments.
pub const BREAK_AREA: &str = "break room";

/// Task description attached to synthesized continuation segments.
pub const CONTINUATION_TASK: &str = "afternoon continuation";

/// Shift end applied when a worker has no usable configuration.
pub const DEFAULT_SHIFT_END: &str = "17:00";

/// Separator between the two label lines, understood by the chart renderer.
pub const LABEL_SEPARATOR: &str = "<br>";

/// A chartable segment of one worker's day.
///
/// `start < end` holds for every segment; intervals that fail this check
/// are dropped with a warning before a segment is ever created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSegment {
    /// Worker name.
    pub worker: String,

    /// Absolute start of the segment on the target day.
    pub start: NaiveDateTime,

    /// Absolute end of the segment on the target day.
    pub end: NaiveDateTime,

    /// Two display lines joined with [`LABEL_SEPARATOR`].
    pub label: String,

    /// Area tag, used for filtering and chart coloring.
    pub area: String,

    /// Book (category) tag, used for filtering.
    pub book: String,
}

/// Output of one reconstruction run: the full-day segment set plus every
/// warning raised along the way, both in worker-then-chronological order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DayTimeline {
    pub segments: Vec<ResolvedSegment>,
    pub warnings: Vec<Warning>,
}

impl DayTimeline {
    /// Workers that appear in the segment set, in output order.
    #[must_use]
    pub fn workers(&self) -> Vec<&str> {
        let mut workers: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if workers.last() != Some(&segment.worker.as_str()) {
                workers.push(&segment.worker);
            }
        }
        workers
    }
}

/// A row with resolved boundaries, before interval validation.
#[derive(Debug, Clone)]
struct ResolvedEntry {
    entry: RawEntry,
    start: NaiveDateTime,
    end: NaiveDateTime,
    synthesized_break: bool,
}

/// One step of the end-time fallback chain, in precedence order.
#[derive(Debug, Clone, Copy)]
enum EndFallback<'a> {
    /// The next row's start time.
    NextStart(&'a str),
    /// The worker's configured shift end, or the literal default.
    ShiftEnd(&'a str),
    /// One hour past the row's own start. Always succeeds.
    PlusOneHour,
}

/// Evaluates fallback steps in order; the first parse success wins.
///
/// Chains always terminate with [`EndFallback::PlusOneHour`], so parse
/// failures here are absorbed rather than warned about.
fn apply_fallbacks(day: NaiveDate, start: NaiveDateTime, chain: &[EndFallback<'_>]) -> NaiveDateTime {
    chain
        .iter()
        .find_map(|step| match step {
            EndFallback::NextStart(value) | EndFallback::ShiftEnd(value) => parse_clock(day, value),
            EndFallback::PlusOneHour => Some(start + Duration::hours(1)),
        })
        .unwrap_or(start + Duration::hours(1))
}

/// Partitions rows by trimmed worker name, preserving input order within
/// each group and first-seen order across groups.
///
/// Rows with a blank worker name are silently dropped: an unnamed row
/// cannot be attributed to any timeline.
fn group_by_worker(entries: &[RawEntry]) -> Vec<(String, Vec<RawEntry>)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<RawEntry>)> = Vec::new();

    for entry in entries {
        let name = entry.worker.trim();
        if name.is_empty() {
            continue;
        }
        let slot = *index.entry(name.to_string()).or_insert_with(|| {
            groups.push((name.to_string(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(entry.clone());
    }

    groups
}

/// Stable sort by parsed start time. Rows whose start is blank or
/// unparsable key as the maximum timestamp so they sort last; their
/// failure handling is deferred to resolution.
fn sort_by_start(day: NaiveDate, entries: &mut [RawEntry]) {
    entries.sort_by_key(|entry| parse_clock(day, &entry.start).unwrap_or(NaiveDateTime::MAX));
}

/// Appends a synthetic break row when the worker has a configured rest
/// start and no row already marks a break. Returns whether a row was added.
///
/// The synthetic row carries no explicit end, so it flows through the
/// normal end-time precedence like any other row.
fn synthesize_break(worker: &str, entries: &mut Vec<RawEntry>, config: Option<&ShiftConfig>) -> bool {
    let Some(rest_start) = config.and_then(|c| c.rest_start.as_deref()) else {
        return false;
    };
    if entries.iter().any(|entry| entry.task == BREAK_TASK) {
        return false;
    }

    entries.push(RawEntry {
        worker: worker.to_string(),
        area: BREAK_AREA.to_string(),
        task: BREAK_TASK.to_string(),
        start: rest_start.to_string(),
        ..RawEntry::default()
    });
    true
}

/// Appends the post-break continuation segment when the worker's day ends
/// on the synthesized break and the configured shift end leaves a positive
/// window after it.
///
/// Boundaries are computed directly rather than through the fallback
/// chain; the segment still passes through interval validation.
fn synthesize_continuation(
    day: NaiveDate,
    worker: &str,
    resolved: &mut Vec<ResolvedEntry>,
    config: Option<&ShiftConfig>,
) {
    if !resolved.last().is_some_and(|r| r.synthesized_break) {
        return;
    }
    let Some(shift_end) = config
        .and_then(|c| c.shift_end.as_deref())
        .and_then(|value| parse_clock(day, value))
    else {
        return;
    };

    // Break ends one hour after it starts (precedence rule for a trailing
    // break), so the continuation picks up exactly there.
    let candidate = resolved
        .last()
        .map(|r| r.start + Duration::hours(1))
        .unwrap_or(shift_end);
    if candidate >= shift_end {
        return;
    }

    let area = resolved
        .iter()
        .rev()
        .find(|r| !r.synthesized_break)
        .map(|r| r.entry.area.clone())
        .unwrap_or_default();

    let entry = RawEntry {
        worker: worker.to_string(),
        area,
        task: CONTINUATION_TASK.to_string(),
        start: candidate.format("%H:%M").to_string(),
        ..RawEntry::default()
    };
    resolved.push(ResolvedEntry {
        entry,
        start: candidate,
        end: shift_end,
        synthesized_break: false,
    });
}

/// Walks one worker's sorted rows and resolves an end time for each,
/// applying the precedence policy exactly once per row.
fn resolve_worker(
    day: NaiveDate,
    worker: &str,
    mut entries: Vec<RawEntry>,
    config: Option<&ShiftConfig>,
    warnings: &mut Vec<Warning>,
) -> Vec<ResolvedEntry> {
    let break_added = synthesize_break(worker, &mut entries, config);
    if break_added {
        // Re-sort so the break occupies its chronological position and
        // participates in next-start chaining.
        sort_by_start(day, &mut entries);
    }

    let mut resolved: Vec<ResolvedEntry> = Vec::with_capacity(entries.len());

    for (i, entry) in entries.iter().enumerate() {
        if entry.start.trim().is_empty() {
            // A row that never had a start time cannot chart; not an error.
            continue;
        }
        let Some(start) = parse_clock(day, &entry.start) else {
            warnings.push(Warning::UnparsableStart {
                worker: worker.to_string(),
                value: entry.start.clone(),
            });
            continue;
        };

        // Only the row appended by break synthesis counts as the break;
        // synthesis is suppressed when the raw data already has one.
        let is_break = break_added && entry.task == BREAK_TASK;

        let end = if entry.end.trim().is_empty() {
            let mut chain: Vec<EndFallback<'_>> = Vec::with_capacity(2);
            if let Some(next) = entries.get(i + 1) {
                chain.push(EndFallback::NextStart(&next.start));
            } else if !is_break {
                // A trailing synthesized break goes straight to +1h.
                let shift_end = config
                    .and_then(|c| c.shift_end.as_deref())
                    .unwrap_or(DEFAULT_SHIFT_END);
                chain.push(EndFallback::ShiftEnd(shift_end));
            }
            chain.push(EndFallback::PlusOneHour);
            apply_fallbacks(day, start, &chain)
        } else {
            match parse_clock(day, &entry.end) {
                Some(end) => end,
                None => {
                    warnings.push(Warning::UnparsableEnd {
                        worker: worker.to_string(),
                        value: entry.end.clone(),
                    });
                    continue;
                }
            }
        };

        resolved.push(ResolvedEntry {
            entry: entry.clone(),
            start,
            end,
            synthesized_break: is_break,
        });
    }

    synthesize_continuation(day, worker, &mut resolved, config);
    resolved
}

/// Composes the two-line display label for a row.
fn compose_label(entry: &RawEntry) -> String {
    let line1 = format!("{} - {} {}", entry.area, entry.line, entry.variety);
    let line2 = format!("{} {} {}", entry.start.trim(), entry.task, entry.instruction);
    format!("{}{}{}", line1.trim(), LABEL_SEPARATOR, line2.trim())
}

/// Rejects empty or inverted intervals with a warning and labels the rest.
fn validate_and_label(
    worker: &str,
    resolved: Vec<ResolvedEntry>,
    warnings: &mut Vec<Warning>,
) -> Vec<ResolvedSegment> {
    let mut segments = Vec::with_capacity(resolved.len());

    for item in resolved {
        if item.start >= item.end {
            warnings.push(Warning::InvertedInterval {
                worker: worker.to_string(),
                start: item.entry.start.trim().to_string(),
                end: item.end.format("%H:%M").to_string(),
            });
            continue;
        }
        segments.push(ResolvedSegment {
            worker: worker.to_string(),
            start: item.start,
            end: item.end,
            label: compose_label(&item.entry),
            area: item.entry.area.clone(),
            book: item.entry.book.clone(),
        });
    }

    segments
}

/// Reconstructs the full-day timeline for every worker in the input.
///
/// Shift configurations outside their validity range are ignored for the
/// day. A day with no usable rows yields an empty, valid result rather
/// than an error.
pub fn reconstruct_day(
    day: NaiveDate,
    entries: &[RawEntry],
    shifts: &HashMap<String, ShiftConfig>,
) -> DayTimeline {
    let mut segments = Vec::new();
    let mut warnings = Vec::new();

    for (worker, mut group) in group_by_worker(entries) {
        sort_by_start(day, &mut group);
        let config = shifts.get(&worker).filter(|c| c.applies_on(day));
        let resolved = resolve_worker(day, &worker, group, config, &mut warnings);
        segments.extend(validate_and_label(&worker, resolved, &mut warnings));
    }

    tracing::debug!(
        %day,
        segments = segments.len(),
        warnings = warnings.len(),
        "reconstructed timeline"
    );
    DayTimeline { segments, warnings }
}
