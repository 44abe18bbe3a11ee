//! Minimal world that applies the engine's actions.
//!
//! Rules:
//! - `Move` succeeds into a passable cell at most one step away
//! - `Phase` moves one cell in its direction, whatever the cell, if the
//!   destination is on the map
//! - `OpenChest` turns a chest cell into ground
//! - `UseItem` consumes the slot
//!
//! Anything else is counted as rejected and leaves the world unchanged.

use std::fmt;

use game_core::{Action, CellKind, CellOracle, Point, Position, WorldSnapshot};
use game_content::Scenario;
use runtime::GridOracle;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    pub ticks: u64,
    pub moves: u64,
    pub phases: u64,
    pub chests_opened: u64,
    pub items_used: u64,
    pub idle: u64,
    pub rejected: u64,
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ticks={} moves={} phases={} chests={} items={} idle={} rejected={}",
            self.ticks,
            self.moves,
            self.phases,
            self.chests_opened,
            self.items_used,
            self.idle,
            self.rejected
        )
    }
}

pub struct SimWorld {
    grid: GridOracle,
    snapshot: WorldSnapshot,
    stats: SimStats,
}

impl SimWorld {
    pub fn from_scenario(scenario: &Scenario) -> Self {
        let grid = GridOracle::new(scenario.bounds(), scenario.cells().collect());
        Self {
            grid,
            snapshot: scenario.snapshot(),
            stats: SimStats::default(),
        }
    }

    pub fn snapshot(&self) -> &WorldSnapshot {
        &self.snapshot
    }

    pub fn oracle(&self) -> &GridOracle {
        &self.grid
    }

    pub fn stats(&self) -> SimStats {
        self.stats
    }

    /// Applies one action and advances the clock.
    pub fn apply(&mut self, action: Action) {
        let applied = match action {
            Action::Move(to) => self.step(to),
            Action::Phase(direction) => {
                let to = direction.step_from(self.snapshot.agent_cell());
                let inside = self.grid.bounds().contains(to);
                if inside {
                    self.snapshot.agent.position = Point::from(to);
                    self.stats.phases += 1;
                }
                inside
            }
            Action::OpenChest(at) => {
                let is_chest = self.grid.cell(at) == Ok(CellKind::Chest);
                if is_chest {
                    self.grid.set(at, CellKind::Ground);
                    self.stats.chests_opened += 1;
                }
                is_chest
            }
            Action::UseItem(item) => {
                let inventory = &mut self.snapshot.agent.inventory;
                let held = item.slot < inventory.len();
                if held {
                    let used = inventory.remove(item.slot);
                    tracing::debug!("used {}", used.name);
                    self.stats.items_used += 1;
                }
                held
            }
            Action::Noop => {
                self.stats.idle += 1;
                true
            }
        };

        if !applied {
            self.stats.rejected += 1;
            tracing::warn!("world rejected {}", action);
        }

        self.snapshot.tick += 1;
        self.stats.ticks += 1;
    }

    fn step(&mut self, to: Position) -> bool {
        let from = self.snapshot.agent_cell();
        let adjacent = from.x.abs_diff(to.x) <= 1 && from.y.abs_diff(to.y) <= 1;
        if !adjacent || !self.grid.is_passable(to) {
            return false;
        }
        self.snapshot.agent.position = Point::from(to);
        self.stats.moves += 1;
        true
    }
}
