use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use fuelroute_cli::commands::path::handle_path_command;
use fuelroute_cli::commands::plan::handle_plan_command;
use fuelroute_cli::logging::{init_tracing, LogFormat};
use fuelroute_cli::output::OutputFormat;
use fuelroute_lib::{read_problem, NodeId, Problem};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fuel-constrained hub and house delivery router")]
struct Cli {
    /// Problem file to read. Falls back to standard input when unset.
    #[arg(long, global = true, env = "FUELROUTE_INPUT")]
    input: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan the delivery route (default).
    Plan,
    /// Print the shortest distance and node path between two nodes.
    Path {
        /// Starting node id.
        #[arg(long = "from")]
        from: NodeId,
        /// Destination node id.
        #[arg(long = "to")]
        to: NodeId,
    },
}

fn main() -> Result<()> {
    init_tracing(LogFormat::from_env());
    let cli = Cli::parse();

    let problem = load_problem(cli.input.as_deref())?;
    let output = match cli.command.unwrap_or(Command::Plan) {
        Command::Plan => handle_plan_command(&problem, cli.format)?,
        Command::Path { from, to } => handle_path_command(&problem, from, to, cli.format)?,
    };
    print!("{output}");
    Ok(())
}

fn load_problem(input: Option<&Path>) -> Result<Problem> {
    match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open problem file {}", path.display()))?;
            read_problem(file)
                .with_context(|| format!("failed to parse problem from {}", path.display()))
        }
        None => read_problem(io::stdin().lock()).context("failed to parse problem from stdin"),
    }
}
