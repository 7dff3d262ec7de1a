//! recipe-catalog CLI entry point
//!
//! Parsing, loading and serving all live in `cli::run`; this only reports
//! the error and sets the exit status.

use recipe_catalog::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
