//! CLI module for the recipe catalog
//!
//! Provides command-line interface for:
//! - start: Load the recipe source and serve the HTTP API
//! - inspect: Load a recipe source and print a JSON summary

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{inspect, run, run_command, start, summarize, Config, InspectSummary};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_json, write_json_to};
