use crate::state::Position;

/// One of the four grid axes directions used by phase and projectile actions.
///
/// `Up` points toward increasing `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CardinalDirection {
    Up,
    Down,
    Left,
    Right,
}

impl CardinalDirection {
    pub const ALL: [CardinalDirection; 4] = [
        CardinalDirection::Up,
        CardinalDirection::Down,
        CardinalDirection::Left,
        CardinalDirection::Right,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::Up => (0, 1),
            CardinalDirection::Down => (0, -1),
            CardinalDirection::Left => (-1, 0),
            CardinalDirection::Right => (1, 0),
        }
    }

    /// The neighbouring cell one step in this direction.
    pub fn step_from(self, origin: Position) -> Position {
        let (dx, dy) = self.delta();
        origin.offset(dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_increases_y() {
        assert_eq!(
            CardinalDirection::Up.step_from(Position::ORIGIN),
            Position::new(0, 1)
        );
    }

    #[test]
    fn parses_wire_labels() {
        assert_eq!("left".parse(), Ok(CardinalDirection::Left));
        assert_eq!("RIGHT".parse(), Ok(CardinalDirection::Right));
        assert_eq!(CardinalDirection::Down.to_string(), "down");
    }
}
