//! CLI subcommand implementations.

pub mod options;
pub mod show;
pub mod unassigned;
