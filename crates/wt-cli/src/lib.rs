//! Work timeline viewer CLI library.
//!
//! This crate provides the CLI interface for the work timeline viewer.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
