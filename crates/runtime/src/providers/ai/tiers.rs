//! Priority ladder.
//!
//! Each tier reads the [`AgentContext`] blackboard and either claims the tick
//! by setting an action (`Success`) or passes (`Failure`). The [`Ladder`]
//! runs tiers in order and stops at the first success, like a behavior-tree
//! selector.

use game_core::{Action, distance};

use super::AgentContext;
use super::exploration::ExplorationStrategy;
use super::hazard::HazardDetector;
use super::inventory::InventoryPolicy;
use super::movement::MovementResolver;
use super::objective::ObjectiveLocator;

/// Result of evaluating one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The tier set the tick's action.
    Success,
    /// The tier had nothing to do.
    Failure,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }
}

/// One rung of the ladder.
pub trait Tier: Send + Sync {
    fn name(&self) -> &'static str;

    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status;
}

/// Fixed-order selector over tiers.
pub struct Ladder {
    tiers: Vec<Box<dyn Tier>>,
}

impl Ladder {
    /// # Panics
    ///
    /// Panics if `tiers` is empty.
    pub fn new(tiers: Vec<Box<dyn Tier>>) -> Self {
        assert!(!tiers.is_empty(), "Ladder must have at least one tier");
        Self { tiers }
    }

    /// Hazard escape, chest pursuit, auto-equip, hostile engagement,
    /// exploration.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(EscapeFirewall),
            Box::new(PursueChest),
            Box::new(AutoEquip),
            Box::new(EngageHostile),
            Box::new(Explore),
        ])
    }

    /// Runs tiers until one succeeds and returns its name.
    pub fn tick(&self, ctx: &mut AgentContext<'_>) -> Option<&'static str> {
        self.tiers
            .iter()
            .find(|tier| tier.tick(ctx).is_success())
            .map(|tier| tier.name())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tiers.iter().map(|tier| tier.name()).collect()
    }
}

/// Moves toward the safe direction while a firewall pattern is visible.
pub struct EscapeFirewall;

impl Tier for EscapeFirewall {
    fn name(&self) -> &'static str {
        "escape_firewall"
    }

    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        let analysis = HazardDetector::analyze(ctx);
        if !analysis.requires_escape() {
            return Status::Failure;
        }
        let Some(safe) = analysis.safe_direction else {
            return Status::Failure;
        };

        let action = MovementResolver::resolve(ctx.oracle, ctx.position(), safe);
        ctx.set_action(action);
        Status::Success
    }
}

/// Opens an adjacent chest or walks to the nearest one.
pub struct PursueChest;

impl Tier for PursueChest {
    fn name(&self) -> &'static str {
        "pursue_chest"
    }

    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        let Some(chest) = ObjectiveLocator::nearest_chest(ctx) else {
            return Status::Failure;
        };

        let position = ctx.position();
        let action = if distance(position, chest.into()) <= ctx.config.chest_reach {
            Action::OpenChest(chest)
        } else {
            MovementResolver::resolve(ctx.oracle, position, chest.into())
        };
        ctx.set_action(action);
        Status::Success
    }
}

/// Uses the first buff in the inventory.
pub struct AutoEquip;

impl Tier for AutoEquip {
    fn name(&self) -> &'static str {
        "auto_equip"
    }

    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        match InventoryPolicy::select_buff(ctx.snapshot) {
            Some(action) => {
                ctx.set_action(action);
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

/// Closes in on the nearest hostile within attack range.
pub struct EngageHostile;

impl Tier for EngageHostile {
    fn name(&self) -> &'static str {
        "engage_hostile"
    }

    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        let Some(hostile) = InventoryPolicy::nearest_attackable(ctx.snapshot, ctx.config.attack_radius)
        else {
            return Status::Failure;
        };

        let action = MovementResolver::resolve(ctx.oracle, ctx.position(), hostile);
        ctx.set_action(action);
        Status::Success
    }
}

/// Always succeeds with a move or a phase.
pub struct Explore;

impl Tier for Explore {
    fn name(&self) -> &'static str {
        "explore"
    }

    fn tick(&self, ctx: &mut AgentContext<'_>) -> Status {
        let action = ExplorationStrategy::explore(ctx);
        ctx.set_action(action);
        Status::Success
    }
}
