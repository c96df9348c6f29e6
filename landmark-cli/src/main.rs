//! Entry point for the `landmark-tour` command.
#![forbid(unsafe_code)]

use env_logger::{Builder, Env, Target};
use landmark_cli::CliError;

fn main() -> eyre::Result<()> {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .init();
    match landmark_cli::run() {
        Ok(()) => Ok(()),
        // Help and version requests are reported by clap itself.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => Err(eyre::Report::new(err)),
    }
}
