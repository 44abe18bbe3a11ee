use super::{InventoryItem, Point, Position};

/// Immutable per-tick view of the world as seen by the agent.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldSnapshot {
    /// Server tick this snapshot was taken at.
    pub tick: u64,
    pub agent: AgentView,
    /// Hostiles in sensing range, in the order the server reported them.
    pub hostiles: Vec<Hostile>,
    pub projectiles: Vec<Projectile>,
    pub ground: GroundBounds,
}

impl WorldSnapshot {
    pub fn new(agent: AgentView) -> Self {
        Self {
            agent,
            ..Self::default()
        }
    }

    pub fn with_tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }

    pub fn with_hostile(mut self, hostile: Hostile) -> Self {
        self.hostiles.push(hostile);
        self
    }

    pub fn with_ground(mut self, ground: GroundBounds) -> Self {
        self.ground = ground;
        self
    }

    /// Agent position truncated to its grid cell.
    #[inline]
    pub fn agent_cell(&self) -> Position {
        self.agent.position.truncate()
    }
}

/// The controlled agent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentView {
    pub position: Point,
    pub health: u32,
    pub shield: u32,
    pub inventory: Vec<InventoryItem>,
}

impl AgentView {
    pub const FULL_HEALTH: u32 = 100;

    pub fn at(position: Point) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_health(mut self, health: u32) -> Self {
        self.health = health;
        self
    }

    pub fn with_item(mut self, item: InventoryItem) -> Self {
        self.inventory.push(item);
        self
    }
}

impl Default for AgentView {
    fn default() -> Self {
        Self {
            position: Point::ORIGIN,
            health: Self::FULL_HEALTH,
            shield: 0,
            inventory: Vec::new(),
        }
    }
}

/// Another bot visible to the agent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hostile {
    pub name: String,
    pub position: Point,
}

impl Hostile {
    pub fn new(name: impl Into<String>, position: Point) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// A projectile in flight.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projectile {
    pub position: Point,
}

/// Static extent of the visible ground, in global coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroundBounds {
    pub width: u32,
    pub height: u32,
    pub offset: Position,
}

impl GroundBounds {
    pub const fn new(width: u32, height: u32, offset: Position) -> Self {
        Self {
            width,
            height,
            offset,
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        let x = position.x - self.offset.x;
        let y = position.y - self.offset.y;
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// Centre cell of the visible ground.
    pub fn center(&self) -> Position {
        self.offset
            .offset((self.width / 2) as i32, (self.height / 2) as i32)
    }
}
