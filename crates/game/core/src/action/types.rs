use std::fmt;

use super::CardinalDirection;
use crate::state::Position;

/// The single decision emitted for a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Step into an adjacent cell.
    Move(Position),
    /// Cross an obstacle directly in the given direction.
    Phase(CardinalDirection),
    /// Invoke an inventory slot.
    UseItem(ItemUse),
    /// Open the chest at the given cell.
    OpenChest(Position),
    Noop,
}

impl Action {
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, Action::Move(_))
    }

    #[inline]
    pub fn is_noop(&self) -> bool {
        matches!(self, Action::Noop)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(to) => write!(f, "move {to}"),
            Action::Phase(direction) => write!(f, "phase {direction}"),
            Action::UseItem(item) => write!(f, "use slot {} ({})", item.slot, item.target),
            Action::OpenChest(at) => write!(f, "open chest {at}"),
            Action::Noop => write!(f, "noop"),
        }
    }
}

/// Descriptor for an inventory slot invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemUse {
    /// Index into the agent's inventory as delivered by the snapshot.
    pub slot: usize,
    pub target: ItemTarget,
}

impl ItemUse {
    pub const fn new(slot: usize, target: ItemTarget) -> Self {
        Self { slot, target }
    }
}

/// Where an item is aimed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemTarget {
    SelfOnly,
    Cell(Position),
    Direction(CardinalDirection),
}

impl fmt::Display for ItemTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemTarget::SelfOnly => write!(f, "self"),
            ItemTarget::Cell(at) => write!(f, "at {at}"),
            ItemTarget::Direction(direction) => write!(f, "toward {direction}"),
        }
    }
}
