//! Scenario definitions.
//!
//! A scenario is a character map of the visible ground plus everything a
//! snapshot needs. Row `i` of `rows` covers `y = offset.y + i`; column `j`
//! covers `x = offset.x + j`.
//!
//! Legend: `.` ground, `C` chest, `F` firewall, `#` blocked, `?` no data.

use game_core::{
    AgentView, CellKind, GroundBounds, Hostile, InventoryItem, Point, Position, WorldSnapshot,
};

/// Characters a scenario map may contain.
pub const LEGEND: [char; 5] = ['.', 'C', 'F', '#', '?'];

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub name: String,
    /// Global coordinate of the first character of the first row.
    #[cfg_attr(feature = "serde", serde(default))]
    pub offset: Position,
    pub rows: Vec<String>,
    pub agent: ScenarioAgent,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hostiles: Vec<Hostile>,
    /// Suggested run length; the simulator's flag wins.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ticks: Option<u64>,
}

/// Starting state of the controlled agent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioAgent {
    pub position: Point,
    #[cfg_attr(feature = "serde", serde(default = "full_health"))]
    pub health: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub shield: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub inventory: Vec<InventoryItem>,
}

#[cfg(feature = "serde")]
fn full_health() -> u32 {
    AgentView::FULL_HEALTH
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScenarioError {
    #[error("scenario map has no rows")]
    Empty,

    #[error("row {row} is {width} wide, expected {expected}")]
    RaggedRow {
        row: usize,
        width: usize,
        expected: usize,
    },

    #[error("unknown symbol {symbol:?} at row {row}, column {column}")]
    UnknownSymbol {
        row: usize,
        column: usize,
        symbol: char,
    },

    #[error("agent cell {0} lies outside the map")]
    AgentOutside(Position),
}

impl Scenario {
    pub fn width(&self) -> u32 {
        self.rows
            .first()
            .map(|row| row.chars().count() as u32)
            .unwrap_or(0)
    }

    pub fn height(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn bounds(&self) -> GroundBounds {
        GroundBounds::new(self.width(), self.height(), self.offset)
    }

    /// Checks the map is rectangular, uses only the legend, and contains the
    /// agent.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let expected = self.width() as usize;
        if self.rows.is_empty() || expected == 0 {
            return Err(ScenarioError::Empty);
        }

        for (row, line) in self.rows.iter().enumerate() {
            let width = line.chars().count();
            if width != expected {
                return Err(ScenarioError::RaggedRow {
                    row,
                    width,
                    expected,
                });
            }
            if let Some((column, symbol)) = line
                .chars()
                .enumerate()
                .find(|(_, symbol)| !LEGEND.contains(symbol))
            {
                return Err(ScenarioError::UnknownSymbol {
                    row,
                    column,
                    symbol,
                });
            }
        }

        let cell = self.agent.position.truncate();
        if !self.bounds().contains(cell) {
            return Err(ScenarioError::AgentOutside(cell));
        }

        Ok(())
    }

    /// Every classified cell of the map. `?` cells are left out.
    pub fn cells(&self) -> impl Iterator<Item = (Position, CellKind)> + '_ {
        self.rows.iter().enumerate().flat_map(move |(dy, line)| {
            line.chars().enumerate().filter_map(move |(dx, symbol)| {
                let kind = match symbol {
                    '.' => CellKind::Ground,
                    'C' => CellKind::Chest,
                    'F' => CellKind::Firewall,
                    '?' => return None,
                    _ => CellKind::Blocked,
                };
                Some((self.offset.offset(dx as i32, dy as i32), kind))
            })
        })
    }

    /// Number of cells of `kind` on the map.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells().filter(|&(_, cell)| cell == kind).count()
    }

    /// Snapshot of the scenario's starting state.
    pub fn snapshot(&self) -> WorldSnapshot {
        let agent = AgentView {
            position: self.agent.position,
            health: self.agent.health,
            shield: self.agent.shield,
            inventory: self.agent.inventory.clone(),
        };
        WorldSnapshot {
            tick: 0,
            agent,
            hostiles: self.hostiles.clone(),
            projectiles: Vec::new(),
            ground: self.bounds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(rows: &[&str], at: Point) -> Scenario {
        Scenario {
            name: "test".into(),
            offset: Position::new(-1, -1),
            rows: rows.iter().map(|row| row.to_string()).collect(),
            agent: ScenarioAgent {
                position: at,
                health: 100,
                shield: 0,
                inventory: Vec::new(),
            },
            hostiles: Vec::new(),
            ticks: None,
        }
    }

    #[test]
    fn cells_follow_offset_and_skip_unknown() {
        let scenario = scenario(&[".C", "F?"], Point::new(-1.0, -1.0));
        let cells: Vec<_> = scenario.cells().collect();

        assert_eq!(
            cells,
            vec![
                (Position::new(-1, -1), CellKind::Ground),
                (Position::new(0, -1), CellKind::Chest),
                (Position::new(-1, 0), CellKind::Firewall),
            ]
        );
        assert_eq!(scenario.count(CellKind::Chest), 1);
    }

    #[test]
    fn rejects_ragged_rows() {
        let scenario = scenario(&["...", ".."], Point::ORIGIN);
        assert_eq!(
            scenario.validate(),
            Err(ScenarioError::RaggedRow {
                row: 1,
                width: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn rejects_unknown_symbols() {
        let scenario = scenario(&["..", ".x"], Point::ORIGIN);
        assert!(matches!(
            scenario.validate(),
            Err(ScenarioError::UnknownSymbol { symbol: 'x', .. })
        ));
    }

    #[test]
    fn rejects_agent_off_map() {
        let scenario = scenario(&["..", ".."], Point::new(4.0, 0.0));
        assert_eq!(
            scenario.validate(),
            Err(ScenarioError::AgentOutside(Position::new(4, 0)))
        );
    }

    #[test]
    fn snapshot_carries_bounds() {
        let scenario = scenario(&["...", "..."], Point::ORIGIN);
        assert_eq!(scenario.validate(), Ok(()));
        let snapshot = scenario.snapshot();
        assert_eq!(snapshot.ground, GroundBounds::new(3, 2, Position::new(-1, -1)));
        assert_eq!(snapshot.agent.health, 100);
    }
}
