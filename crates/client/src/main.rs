//! Agent simulator binary.
//!
//! ```bash
//! agent-sim check --scenario scenarios/corner.ron
//! agent-sim run --scenario scenarios/corner.ron --ticks 50 --seed 7
//! ```

mod commands;

use agent_sim::{SimConfig, setup_logging};
use anyhow::Result;
use clap::Parser;
use commands::{Check, Run};

/// Headless simulator for the grid agent
#[derive(Parser)]
#[command(name = "agent-sim")]
#[command(about = "Run the decision engine against scenario maps", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Simulate a scenario and print a summary
    Run(Run),

    /// Validate a scenario file
    Check(Check),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for AGENT_* variables)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let env = SimConfig::from_env();

    let _guard = setup_logging(env.session_id.as_deref(), env.log_dir.as_deref())?;

    match cli.command {
        Command::Run(cmd) => cmd.execute(&env),
        Command::Check(cmd) => cmd.execute(),
    }
}
