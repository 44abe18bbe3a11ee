//! Item usage and attack-range policy.
//!
//! Items are considered in inventory order and the first applicable one wins.
//! Placed items and projectiles aim at the *first* hostile the snapshot lists,
//! while [`InventoryPolicy::nearest_attackable`] picks the *nearest* one for
//! movement; both conventions are kept as the game behaves.

use game_core::{
    Action, AgentConfig, Hostile, ItemKind, ItemTarget, ItemUse, Point, WorldSnapshot,
    cardinal_toward, closest, distance,
};

pub struct InventoryPolicy;

impl InventoryPolicy {
    /// First usable item under the full policy.
    pub fn select(snapshot: &WorldSnapshot, config: &AgentConfig) -> Option<Action> {
        let agent = &snapshot.agent;
        let first_hostile = snapshot.hostiles.first();

        agent
            .inventory
            .iter()
            .enumerate()
            .find_map(|(slot, item)| {
                let target = match item.kind {
                    ItemKind::Buff => Some(ItemTarget::SelfOnly),
                    ItemKind::Placed(_) => first_hostile.map(|hostile| {
                        ItemTarget::Cell(agent.position.midpoint(hostile.position).truncate())
                    }),
                    ItemKind::Projectile => first_hostile.map(|hostile| {
                        ItemTarget::Direction(cardinal_toward(
                            agent.position.truncate(),
                            hostile.position.truncate(),
                        ))
                    }),
                    ItemKind::Explosive { .. } => (snapshot.hostiles.len() >= 2
                        || agent.health < config.low_health)
                        .then_some(ItemTarget::SelfOnly),
                };

                target.map(|target| {
                    tracing::debug!("item {} ({}) usable in slot {}", item.name, item.kind, slot);
                    Action::UseItem(ItemUse::new(slot, target))
                })
            })
    }

    /// First buff in the inventory, used by the auto-equip tier.
    pub fn select_buff(snapshot: &WorldSnapshot) -> Option<Action> {
        snapshot
            .agent
            .inventory
            .iter()
            .position(|item| item.kind == ItemKind::Buff)
            .map(|slot| Action::UseItem(ItemUse::new(slot, ItemTarget::SelfOnly)))
    }

    /// Hostiles within `radius` of the agent, in snapshot order.
    pub fn attackable(snapshot: &WorldSnapshot, radius: f64) -> Vec<&Hostile> {
        let position = snapshot.agent.position;
        snapshot
            .hostiles
            .iter()
            .filter(|hostile| distance(position, hostile.position) <= radius)
            .collect()
    }

    /// Position of the nearest attackable hostile.
    pub fn nearest_attackable(snapshot: &WorldSnapshot, radius: f64) -> Option<Point> {
        let in_range = Self::attackable(snapshot, radius);
        closest(
            snapshot.agent.position,
            in_range.iter().map(|hostile| hostile.position),
        )
    }
}
