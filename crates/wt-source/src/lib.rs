//! Local JSON snapshot source for the work timeline viewer.
//!
//! A snapshot directory holds a point-in-time export of the task sheets:
//!
//! - `entries.json` — the full task ledger; every row carries a `date`
//!   field in `YYYY/MM/DD` form plus the sheet columns
//! - `shifts.json` — per-worker shift configuration rows
//! - `roster.json` — per-day attendance rows; only day-shift rows count
//!   as scheduled
//!
//! `entries.json` is required for a reconstruction; the other two degrade
//! to an empty configuration or roster when absent, so a partial snapshot
//! still renders.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use wt_core::{RawEntry, ShiftConfig, TimelineSource};

/// Date format used by the ledger's `date` column.
const LEDGER_DATE_FORMAT: &str = "%Y/%m/%d";

/// Roster kind that counts as scheduled attendance.
const DAY_SHIFT: &str = "day";

/// Snapshot loading errors.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One ledger row: a raw task sheet row plus the day it belongs to.
#[derive(Debug, Clone, Deserialize)]
struct LedgerRow {
    date: String,
    #[serde(flatten)]
    entry: RawEntry,
}

/// One shift configuration row.
#[derive(Debug, Clone, Deserialize)]
struct ShiftRow {
    #[serde(default)]
    worker: String,
    #[serde(flatten)]
    config: ShiftConfig,
}

/// One roster row: who is expected on which day, and for which shift kind.
#[derive(Debug, Clone, Deserialize)]
struct RosterRow {
    #[serde(default)]
    worker: String,
    date: String,
    #[serde(default)]
    kind: String,
}

/// A snapshot directory acting as the engine's data-access collaborator.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    dir: PathBuf,
}

impl SnapshotSource {
    /// Wraps a snapshot directory. Files are read lazily per fetch, so the
    /// directory may be populated or refreshed between runs.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The snapshot directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_json<T: DeserializeOwned>(&self, name: &str) -> Result<T, SourceError> {
        let file = File::open(self.dir.join(name))?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Reads an optional file, degrading to the default when it is absent.
    fn read_json_or_default<T: DeserializeOwned + Default>(
        &self,
        name: &str,
    ) -> Result<T, SourceError> {
        if !self.dir.join(name).exists() {
            tracing::warn!(file = name, dir = %self.dir.display(), "snapshot file missing, using empty data");
            return Ok(T::default());
        }
        self.read_json(name)
    }
}

impl TimelineSource for SnapshotSource {
    type Error = SourceError;

    fn fetch_raw_entries(&self, day: NaiveDate) -> Result<Vec<RawEntry>, Self::Error> {
        let ledger: Vec<LedgerRow> = self.read_json("entries.json")?;
        let target = day.format(LEDGER_DATE_FORMAT).to_string();

        let entries: Vec<RawEntry> = ledger
            .into_iter()
            .filter(|row| row.date == target)
            .map(|row| row.entry)
            .collect();
        tracing::debug!(%day, rows = entries.len(), "loaded ledger rows");
        Ok(entries)
    }

    fn fetch_shift_config(&self) -> Result<HashMap<String, ShiftConfig>, Self::Error> {
        let rows: Vec<ShiftRow> = self.read_json_or_default("shifts.json")?;

        Ok(rows
            .into_iter()
            .filter(|row| !row.worker.trim().is_empty())
            .map(|row| (row.worker, row.config))
            .collect())
    }

    fn fetch_scheduled_workers(&self, day: NaiveDate) -> Result<Vec<String>, Self::Error> {
        let rows: Vec<RosterRow> = self.read_json_or_default("roster.json")?;
        let target = day.format(LEDGER_DATE_FORMAT).to_string();

        Ok(rows
            .into_iter()
            .filter(|row| row.date == target && row.kind == DAY_SHIFT)
            .map(|row| row.worker)
            .filter(|worker| !worker.trim().is_empty())
            .collect())
    }
}
