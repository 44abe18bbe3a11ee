//! Blackboard shared by the decision tiers for one tick.
//!
//! The [`AgentContext`] gives every tier read access to the snapshot and the
//! capabilities, mutable access to the session, and a single action slot.

use game_core::{Action, AgentConfig, CellOracle, Point, Position, RngOracle, WorldSnapshot};

use super::AgentSession;

/// Context for one decision.
///
/// # Lifetime
///
/// Borrowed for the duration of a single `decide` call; nothing here outlives
/// the tick except what tiers write into `session`.
pub struct AgentContext<'a> {
    pub snapshot: &'a WorldSnapshot,
    pub oracle: &'a dyn CellOracle,
    pub rng: &'a dyn RngOracle,
    pub config: &'a AgentConfig,
    pub session: &'a mut AgentSession,

    /// Decision counter value for this tick, used to derive RNG seeds.
    pub tick: u64,

    action: Option<Action>,
}

impl<'a> AgentContext<'a> {
    pub fn new(
        snapshot: &'a WorldSnapshot,
        oracle: &'a dyn CellOracle,
        rng: &'a dyn RngOracle,
        config: &'a AgentConfig,
        session: &'a mut AgentSession,
        tick: u64,
    ) -> Self {
        Self {
            snapshot,
            oracle,
            rng,
            config,
            session,
            tick,
            action: None,
        }
    }

    /// Sets the action for this tick.
    ///
    /// # Panics
    ///
    /// Panics if an action was already set. That means two tiers claimed the
    /// same tick, which the ladder never does.
    pub fn set_action(&mut self, action: Action) {
        if let Some(existing) = self.action {
            panic!("action already set to {existing} while setting {action}");
        }
        self.action = Some(action);
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    pub fn take_action(self) -> Option<Action> {
        self.action
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.snapshot.agent.position
    }

    #[inline]
    pub fn cell(&self) -> Position {
        self.snapshot.agent_cell()
    }

    /// Seed for the `context`-th independent roll of this tick.
    pub fn seed(&self, context: u32) -> u64 {
        game_core::compute_seed(self.config.game_seed, self.tick, context)
    }
}
