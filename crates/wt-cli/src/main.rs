use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wt_cli::commands::{options, show, unassigned};
use wt_cli::{Cli, Commands, Config};
use wt_core::SegmentFilter;
use wt_source::SnapshotSource;

/// Load config and open the snapshot directory.
fn open_source(config_path: Option<&Path>) -> Result<SnapshotSource> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    Ok(SnapshotSource::open(&config.data_dir))
}

fn target_day(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();

    match &cli.command {
        Some(Commands::Show {
            date,
            book,
            area,
            json,
        }) => {
            let source = open_source(cli.config.as_deref())?;
            let filter = SegmentFilter {
                book: book.clone(),
                area: area.clone(),
            };
            show::run(&mut writer, &source, target_day(*date), &filter, *json)?;
        }
        Some(Commands::Unassigned { date }) => {
            let source = open_source(cli.config.as_deref())?;
            unassigned::run(&mut writer, &source, target_day(*date))?;
        }
        Some(Commands::Options { date }) => {
            let source = open_source(cli.config.as_deref())?;
            options::run(&mut writer, &source, target_day(*date))?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            writeln!(writer)?;
        }
    }

    Ok(())
}
