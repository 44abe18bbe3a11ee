//! Drive the decision engine against a scenario.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_content::{ConfigLoader, Scenario, ScenarioLoader};
use game_core::{AgentConfig, PcgRng, Point, RngOracle};
use runtime::{AgentRuntime, DecisionEngine, HazardPattern, RecordingSink};

use agent_sim::config::SimConfig;
use agent_sim::world::{SimStats, SimWorld};

/// Run a scenario for a number of ticks
#[derive(Parser)]
pub struct Run {
    /// Scenario file (RON)
    #[arg(short, long, value_name = "FILE")]
    scenario: PathBuf,

    /// Number of ticks to simulate
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Fixed game seed for repeatable runs
    #[arg(long)]
    seed: Option<u64>,

    /// Engine configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log a diagnostic dump every tick
    #[arg(long)]
    diagnostics: bool,
}

impl Run {
    pub fn execute(self, env: &SimConfig) -> Result<()> {
        let scenario = ScenarioLoader::load(&self.scenario)?;

        let config = match self.config.as_ref().or(env.config_path.as_ref()) {
            Some(path) => ConfigLoader::load(path)?,
            None => AgentConfig::default(),
        };

        let ticks = self
            .ticks
            .or(env.ticks)
            .or(scenario.ticks)
            .unwrap_or(SimConfig::DEFAULT_TICKS);

        tracing::info!("running '{}' for {} ticks", scenario.name, ticks);

        let report = match self.seed.or(env.seed) {
            Some(seed) => {
                let engine = DecisionEngine::with_rng(config.with_game_seed(seed), PcgRng)
                    .context("engine rejected configuration")?;
                let runtime = AgentRuntime::new(engine, RecordingSink::new());
                simulate(&scenario, runtime, ticks, self.diagnostics)?
            }
            None => {
                let runtime = AgentRuntime::from_config(config, RecordingSink::new())
                    .context("engine rejected configuration")?;
                simulate(&scenario, runtime, ticks, self.diagnostics)?
            }
        };

        println!("{}: {}", scenario.name, report.stats);
        match report.safe_direction {
            Some(safe) if report.hazard_detected => {
                println!("  firewall: {} pattern, safe point {}", report.pattern, safe)
            }
            _ => println!("  firewall: not detected"),
        }

        Ok(())
    }
}

struct Report {
    stats: SimStats,
    hazard_detected: bool,
    pattern: HazardPattern,
    safe_direction: Option<Point>,
}

fn simulate<R: RngOracle>(
    scenario: &Scenario,
    mut runtime: AgentRuntime<RecordingSink, R>,
    ticks: u64,
    diagnostics: bool,
) -> Result<Report> {
    let mut world = SimWorld::from_scenario(scenario);
    runtime.on_new_game();

    for _ in 0..ticks {
        let action = runtime.on_tick(world.snapshot(), world.oracle())?;
        if diagnostics {
            runtime.engine().log_diagnostics(world.snapshot(), world.oracle());
        }
        world.apply(action);
    }

    let session = runtime.engine().session();
    Ok(Report {
        stats: world.stats(),
        hazard_detected: session.hazard_detected(),
        pattern: session.hazard_pattern(),
        safe_direction: session.safe_direction(),
    })
}
