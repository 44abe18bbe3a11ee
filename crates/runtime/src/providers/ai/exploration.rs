//! Never-idle exploration.
//!
//! With nothing better to do the agent heads for the nearest other ground
//! cell, or else a short random hop. A long random hop or landmark is drawn
//! only if the short hop leaves the agent in place, and a random phase only
//! if that fails too.

use game_core::{Action, CardinalDirection, Position, shuffle};

use super::movement::MovementResolver;
use super::objective::ObjectiveLocator;
use super::AgentContext;

/// Short hops of magnitude 3 to 5, straight and diagonal.
pub const PRIMARY_OFFSETS: [(i32, i32); 12] = [
    (3, 0),
    (-3, 0),
    (0, 3),
    (0, -3),
    (4, 4),
    (4, -4),
    (-4, 4),
    (-4, -4),
    (5, 0),
    (-5, 0),
    (0, 5),
    (0, -5),
];

/// Long hops of magnitude 8 to 15, straight and diagonal.
pub const AGGRESSIVE_OFFSETS: [(i32, i32); 12] = [
    (8, 0),
    (-8, 0),
    (0, 8),
    (0, -8),
    (10, 10),
    (10, -10),
    (-10, 10),
    (-10, -10),
    (15, 0),
    (-15, 0),
    (0, 15),
    (0, -15),
];

/// Absolute landmarks mixed into the aggressive pool.
pub const WAYPOINTS: [Position; 5] = [
    Position::new(0, 0),
    Position::new(10, 0),
    Position::new(-10, 0),
    Position::new(0, 10),
    Position::new(0, -10),
];

const PRIMARY_SEED: u32 = 1;
const AGGRESSIVE_SEED: u32 = 2;
const PHASE_SEED: u32 = 3;

pub struct ExplorationStrategy;

impl ExplorationStrategy {
    /// Picks this tick's exploration step. Always a move or a phase.
    ///
    /// The ground target and the primary hop are accepted as drawn; whatever
    /// the resolver makes of them (a step or a directed phase) is returned.
    /// The aggressive pool is consulted only when the primary hop resolves
    /// to staying on the current cell.
    pub fn explore(ctx: &AgentContext<'_>) -> Action {
        let position = ctx.position();
        let cell = ctx.cell();

        if let Some(ground) = ObjectiveLocator::nearest_ground(ctx) {
            tracing::debug!("exploring toward ground {}", ground);
            return MovementResolver::resolve(ctx.oracle, position, ground.into());
        }

        let primary = Self::primary_candidate(ctx);
        let action = MovementResolver::resolve(ctx.oracle, position, primary.into());
        if Self::makes_progress(action, cell) {
            tracing::debug!("exploring toward {}", primary);
            return action;
        }

        let aggressive = Self::aggressive_candidate(ctx);
        let action = MovementResolver::resolve(ctx.oracle, position, aggressive.into());
        if Self::makes_progress(action, cell) {
            tracing::debug!("aggressive exploration toward {}", aggressive);
            return action;
        }

        let direction = Self::random_phase(ctx);
        tracing::warn!("exploration exhausted at {}, phasing {}", cell, direction);
        Action::Phase(direction)
    }

    /// False only for a move onto the cell the agent already occupies.
    fn makes_progress(action: Action, cell: Position) -> bool {
        action != Action::Move(cell)
    }

    /// First of the shuffled short hops around the agent.
    pub fn primary_candidate(ctx: &AgentContext<'_>) -> Position {
        let mut pool = Self::offsets_from(ctx.cell(), &PRIMARY_OFFSETS);
        shuffle(ctx.rng, ctx.seed(PRIMARY_SEED), &mut pool);
        pool[0]
    }

    /// First of the shuffled long hops, corners and waypoints.
    pub fn aggressive_candidate(ctx: &AgentContext<'_>) -> Position {
        let mut pool = Self::aggressive_pool(ctx.cell(), ctx.config.corner_extent);
        shuffle(ctx.rng, ctx.seed(AGGRESSIVE_SEED), &mut pool);
        pool[0]
    }

    /// Uniformly random direction.
    pub fn random_phase(ctx: &AgentContext<'_>) -> CardinalDirection {
        let last = (CardinalDirection::ALL.len() - 1) as u32;
        let index = ctx.rng.range(ctx.seed(PHASE_SEED), 0, last) as usize;
        CardinalDirection::ALL[index]
    }

    /// The aggressive pool in its unshuffled order.
    pub fn aggressive_pool(from: Position, corner_extent: i32) -> Vec<Position> {
        let e = corner_extent;
        let mut pool = Self::offsets_from(from, &AGGRESSIVE_OFFSETS);
        pool.extend([
            Position::new(e, e),
            Position::new(-e, e),
            Position::new(e, -e),
            Position::new(-e, -e),
        ]);
        pool.extend(WAYPOINTS);
        pool
    }

    fn offsets_from(from: Position, offsets: &[(i32, i32)]) -> Vec<Position> {
        offsets.iter().map(|&(dx, dy)| from.offset(dx, dy)).collect()
    }
}
