//! Validate a scenario file without running it.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use game_content::ScenarioLoader;
use game_core::CellKind;

/// Validate a scenario and print its dimensions
#[derive(Parser)]
pub struct Check {
    /// Scenario file (RON)
    #[arg(short, long, value_name = "FILE")]
    scenario: PathBuf,
}

impl Check {
    pub fn execute(self) -> Result<()> {
        let scenario = ScenarioLoader::load(&self.scenario)?;

        println!("{}: ok", scenario.name);
        println!(
            "  size: {}x{} at {}",
            scenario.width(),
            scenario.height(),
            scenario.offset
        );
        println!(
            "  ground: {}  chests: {}  firewall: {}  blocked: {}",
            scenario.count(CellKind::Ground),
            scenario.count(CellKind::Chest),
            scenario.count(CellKind::Firewall),
            scenario.count(CellKind::Blocked)
        );
        println!(
            "  agent: {}  items: {}  hostiles: {}",
            scenario.agent.position,
            scenario.agent.inventory.len(),
            scenario.hostiles.len()
        );

        Ok(())
    }
}
