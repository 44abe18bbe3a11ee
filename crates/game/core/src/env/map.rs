use super::OracleError;
use crate::state::Position;

/// Cell-type lookup capability supplied by the host.
///
/// Implementations must be side-effect free; the engine may query the same
/// cell many times per tick.
pub trait CellOracle {
    fn cell(&self, position: Position) -> Result<CellKind, OracleError>;

    /// Whether an agent may step into `position`.
    ///
    /// Lookup failures count as blocked.
    fn is_passable(&self, position: Position) -> bool {
        self.cell(position).is_ok_and(CellKind::is_passable)
    }
}

impl<T: CellOracle + ?Sized> CellOracle for &T {
    fn cell(&self, position: Position) -> Result<CellKind, OracleError> {
        (**self).cell(position)
    }
}

/// Canonical cell classes.
///
/// Anything the server reports that is neither ground, chest nor firewall
/// (walls, resistances, vias, unknown labels) collapses into `Blocked`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum CellKind {
    Ground,
    Chest,
    Firewall,
    Blocked,
}

impl CellKind {
    pub fn is_passable(self) -> bool {
        matches!(self, CellKind::Ground | CellKind::Chest)
    }

    /// Maps a server cell label onto the closed set.
    pub fn from_label(label: &str) -> Self {
        match label {
            "pcb" | "ground" => CellKind::Ground,
            "chest" => CellKind::Chest,
            "firewall" => CellKind::Firewall,
            _ => CellKind::Blocked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EdgeOfWorld;

    impl CellOracle for EdgeOfWorld {
        fn cell(&self, position: Position) -> Result<CellKind, OracleError> {
            if position.x > 0 {
                Err(OracleError::OutOfBounds(position))
            } else {
                Ok(CellKind::Ground)
            }
        }
    }

    #[test]
    fn lookup_failure_is_not_passable() {
        assert!(EdgeOfWorld.is_passable(Position::new(0, 0)));
        assert!(!EdgeOfWorld.is_passable(Position::new(1, 0)));
    }

    #[test]
    fn unknown_labels_block() {
        assert_eq!(CellKind::from_label("pcb"), CellKind::Ground);
        assert_eq!(CellKind::from_label("chest"), CellKind::Chest);
        assert_eq!(CellKind::from_label("firewall"), CellKind::Firewall);
        assert_eq!(CellKind::from_label("resistance"), CellKind::Blocked);
        assert_eq!(CellKind::from_label("via"), CellKind::Blocked);
        assert!(!CellKind::Firewall.is_passable());
        assert!(CellKind::Chest.is_passable());
    }
}
