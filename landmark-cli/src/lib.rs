//! Command-line interface for the landmark tour planner.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod plan;

pub use error::CliError;

use plan::{PlanArgs, run_plan};

const ARG_DATA_DIR: &str = "data-dir";
const ARG_INTEREST: &str = "interest";
const ARG_LOAD: &str = "load";
const ARG_MAP: &str = "map";
const ARG_LANDMARKS: &str = "landmarks";
const ARG_FORMAT: &str = "format";
const ARG_STRATEGY: &str = "strategy";
const ARG_MAX_LANDMARKS: &str = "max-landmarks";

/// Run the landmark tour CLI with the current process arguments and
/// environment.
///
/// # Errors
/// Returns a [`CliError`] when argument parsing, configuration, loading,
/// solving or writing the report fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    match cli.command {
        Command::Plan(args) => {
            let mut stdout = std::io::stdout().lock();
            run_plan(args, &mut stdout)
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "landmark-tour",
    about = "Plan the most attractive closed tour over a set of landmarks",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan a tour from interest, visitor load and map files.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
