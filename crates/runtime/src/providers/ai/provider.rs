//! Per-tick decision engine.

use game_core::{Action, AgentConfig, CellOracle, RngOracle, WorldSnapshot, distance};

use super::tiers::Ladder;
use super::{AgentContext, AgentSession, InventoryPolicy};
use crate::api::Result;
use crate::oracle::EntropyRng;

/// Runs the priority ladder once per tick and owns the game's session.
///
/// # Design
///
/// The engine:
/// 1. Advances the session's decision counter
/// 2. Builds an [`AgentContext`] over the snapshot and oracle
/// 3. Runs the [`Ladder`]; the first tier to set an action wins
/// 4. Falls back to `Noop` if no tier acted
///
/// `decide` takes `&mut self`, so one engine cannot compute two ticks at
/// once.
pub struct DecisionEngine<R = EntropyRng> {
    config: AgentConfig,
    session: AgentSession,
    ladder: Ladder,
    rng: R,
}

impl DecisionEngine<EntropyRng> {
    /// Engine with the production random source.
    pub fn new(config: AgentConfig) -> Result<Self> {
        Self::with_rng(config, EntropyRng)
    }
}

impl<R: RngOracle> DecisionEngine<R> {
    /// # Errors
    ///
    /// Returns [`crate::RuntimeError::InvalidConfig`] if `config` does not
    /// validate.
    pub fn with_rng(config: AgentConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            session: AgentSession::new(),
            ladder: Ladder::standard(),
            rng,
        })
    }

    /// Chooses exactly one action for this tick.
    pub fn decide(&mut self, snapshot: &WorldSnapshot, oracle: &dyn CellOracle) -> Action {
        let tick = self.session.advance();
        let mut ctx = AgentContext::new(
            snapshot,
            oracle,
            &self.rng,
            &self.config,
            &mut self.session,
            tick,
        );

        let tier = self.ladder.tick(&mut ctx);
        match (tier, ctx.take_action()) {
            (Some(tier), Some(action)) => {
                tracing::debug!("tick {}: {} -> {}", snapshot.tick, tier, action);
                action
            }
            _ => {
                tracing::error!("tick {}: no tier produced an action", snapshot.tick);
                Action::Noop
            }
        }
    }

    /// Clears the session for a new game.
    pub fn new_game(&mut self) {
        self.session.reset();
    }

    pub fn session(&self) -> &AgentSession {
        &self.session
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Item the full inventory policy would use right now.
    ///
    /// The ladder itself only auto-equips buffs; this reports what the
    /// complete policy (placed structures, projectiles, explosives) picks.
    pub fn suggested_item(&self, snapshot: &WorldSnapshot) -> Option<Action> {
        InventoryPolicy::select(snapshot, &self.config)
    }

    /// Logs the agent's position, detection state, current cell and the item
    /// the full policy would use.
    pub fn log_diagnostics(&self, snapshot: &WorldSnapshot, oracle: &dyn CellOracle) {
        let position = snapshot.agent.position;
        tracing::info!("current position: {}", position);
        tracing::info!(
            "firewall detected: {}, pattern: {}",
            self.session.hazard_detected(),
            self.session.hazard_pattern()
        );

        if let Some(safe) = self.session.safe_direction() {
            tracing::info!("safe direction: {}", safe);
            tracing::info!("distance to safety: {:.2}", distance(position, safe));
        }

        match oracle.cell(snapshot.agent_cell()) {
            Ok(kind) => tracing::info!("current cell: {}", kind),
            Err(err) => tracing::info!("cannot determine current cell type: {}", err),
        }

        match self.suggested_item(snapshot) {
            Some(item) => tracing::info!("item policy: {}", item),
            None => tracing::info!("item policy: nothing usable"),
        }
    }
}
