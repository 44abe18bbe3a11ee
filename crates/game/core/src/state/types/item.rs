//! Inventory item types.
//!
//! Inventories are a read-only view delivered with each snapshot. The engine
//! never mutates them; it only decides which slot to invoke.

/// An item held by the agent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryItem {
    pub name: String,
    pub kind: ItemKind,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Behavioural category of an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ItemKind {
    /// Self-applied enhancement; always usable.
    Buff,
    /// Structure dropped onto the grid.
    Placed(Structure),
    /// Fired in a cardinal direction.
    Projectile,
    /// Area damage around the agent.
    Explosive { radius: u32 },
}

/// Placement geometry of a [`ItemKind::Placed`] item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Structure {
    Trap,
    Wall { horizontal: bool },
}
