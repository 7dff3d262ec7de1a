//! CLI argument definitions using clap
//!
//! Commands:
//! - recipe-catalog start --config <path>
//! - recipe-catalog inspect --data <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Recipe catalog - paginated listing and filtered search over recipes
#[derive(Parser, Debug)]
#[command(name = "recipe-catalog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the recipe source and serve the HTTP API
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./catalog.json")]
        config: PathBuf,
    },

    /// Load a recipe source and print a summary without serving
    Inspect {
        /// Path to the recipe source JSON
        #[arg(long)]
        data: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_default_config() {
        let cli = Cli::try_parse_from(["recipe-catalog", "start"]).unwrap();
        match cli.command {
            Command::Start { config } => assert_eq!(config, PathBuf::from("./catalog.json")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_inspect_requires_data() {
        assert!(Cli::try_parse_from(["recipe-catalog", "inspect"]).is_err());

        let cli = Cli::try_parse_from(["recipe-catalog", "inspect", "--data", "r.json"]).unwrap();
        assert!(matches!(cli.command, Command::Inspect { .. }));
    }
}
