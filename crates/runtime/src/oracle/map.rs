//! In-memory grid served through [`game_core::CellOracle`].
use std::collections::HashMap;

use game_core::{CellKind, CellOracle, GroundBounds, OracleError, Position};

/// CellOracle implementation backed by a cell table.
///
/// Positions outside `bounds` fail with [`OracleError::OutOfBounds`]; positions
/// inside the bounds but absent from the table fail with
/// [`OracleError::NoData`].
#[derive(Clone, Debug)]
pub struct GridOracle {
    bounds: GroundBounds,
    cells: HashMap<Position, CellKind>,
}

impl GridOracle {
    pub fn new(bounds: GroundBounds, cells: HashMap<Position, CellKind>) -> Self {
        Self { bounds, cells }
    }

    /// Creates a grid where every cell inside `bounds` has the same kind.
    pub fn filled(bounds: GroundBounds, kind: CellKind) -> Self {
        let mut cells = HashMap::with_capacity((bounds.width * bounds.height) as usize);
        for dx in 0..bounds.width as i32 {
            for dy in 0..bounds.height as i32 {
                cells.insert(bounds.offset.offset(dx, dy), kind);
            }
        }
        Self::new(bounds, cells)
    }

    /// Parses a character map.
    ///
    /// Row `i` covers `y = offset.y + i` and column `j` covers
    /// `x = offset.x + j`. Legend: `.` ground, `C` chest, `F` firewall,
    /// `#` blocked, `?` no data. Any other character is blocked.
    pub fn from_rows<S: AsRef<str>>(offset: Position, rows: &[S]) -> Self {
        let height = rows.len() as u32;
        let width = rows
            .iter()
            .map(|row| row.as_ref().chars().count() as u32)
            .max()
            .unwrap_or(0);

        let mut cells = HashMap::new();
        for (dy, row) in rows.iter().enumerate() {
            for (dx, symbol) in row.as_ref().chars().enumerate() {
                let kind = match symbol {
                    '.' => CellKind::Ground,
                    'C' => CellKind::Chest,
                    'F' => CellKind::Firewall,
                    '?' => continue,
                    _ => CellKind::Blocked,
                };
                cells.insert(offset.offset(dx as i32, dy as i32), kind);
            }
        }

        Self::new(GroundBounds::new(width, height, offset), cells)
    }

    pub fn bounds(&self) -> GroundBounds {
        self.bounds
    }

    pub fn set(&mut self, position: Position, kind: CellKind) {
        self.cells.insert(position, kind);
    }

    /// Builder-style [`GridOracle::set`].
    pub fn with_cell(mut self, position: Position, kind: CellKind) -> Self {
        self.set(position, kind);
        self
    }

    /// Number of cells of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.values().filter(|&&cell| cell == kind).count()
    }
}

impl CellOracle for GridOracle {
    fn cell(&self, position: Position) -> Result<CellKind, OracleError> {
        if !self.bounds.contains(position) {
            return Err(OracleError::OutOfBounds(position));
        }
        self.cells
            .get(&position)
            .copied()
            .ok_or(OracleError::NoData(position))
    }
}
