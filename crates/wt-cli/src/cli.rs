//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Work timeline viewer.
///
/// Reconstructs a gap-free per-worker timeline for one day of task sheet
/// rows and renders it as text or JSON.
#[derive(Debug, Parser)]
#[command(name = "wt", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render the reconstructed timeline for a day.
    Show {
        /// Target day (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Restrict the view to one book tag.
        #[arg(long)]
        book: Option<String>,

        /// Restrict the view to one area tag.
        #[arg(long)]
        area: Option<String>,

        /// Emit the full view (filtered, warnings, unfiltered) as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List scheduled workers with no assigned work for a day.
    Unassigned {
        /// Target day (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List the book and area tags available for filtering a day.
    Options {
        /// Target day (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}
