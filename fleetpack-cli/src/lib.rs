//! Command-line interface for the Fleetpack allocation engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod plan;

pub use error::CliError;

pub(crate) const ARG_PLAN_REQUEST: &str = "request";
pub(crate) const ARG_PLAN_OUTPUT: &str = "output";
pub(crate) const ENV_PLAN_REQUEST: &str = "FLEETPACK_CMDS_PLAN_REQUEST_PATH";

/// Run the Fleetpack CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => plan::run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "fleetpack",
    about = "Capacity-constrained delivery load planning",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Assign store demands to fleet vehicles and report fill metrics.
    Plan(plan::PlanArgs),
}

#[cfg(test)]
mod tests;
