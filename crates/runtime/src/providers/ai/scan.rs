//! Square-area cell scans.

use game_core::{CellKind, CellOracle, Position};

/// Collects every cell of `wanted` kind in the square of half-width `radius`
/// around `center`.
///
/// Cells are visited x-major (x ascending, then y ascending), which fixes the
/// first-seen order used for tie-breaking downstream. Lookup failures are
/// skipped: they count neither as a match nor as a miss.
pub fn scan_square(
    oracle: &dyn CellOracle,
    center: Position,
    radius: i32,
    wanted: CellKind,
) -> Vec<Position> {
    let mut found = Vec::new();
    for x in center.x - radius..=center.x + radius {
        for y in center.y - radius..=center.y + radius {
            let position = Position::new(x, y);
            if oracle.cell(position) == Ok(wanted) {
                found.push(position);
            }
        }
    }

    tracing::trace!(
        "scan {} around {} (r={}): {} hits",
        wanted,
        center,
        radius,
        found.len()
    );

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::GridOracle;

    #[test]
    fn visits_x_major_and_skips_missing_cells() {
        let grid = GridOracle::from_rows(Position::ORIGIN, &["C?C", "...", "C.C"]);

        let chests = scan_square(&grid, Position::new(1, 1), 1, CellKind::Chest);

        assert_eq!(
            chests,
            vec![
                Position::new(0, 0),
                Position::new(0, 2),
                Position::new(2, 0),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let grid = GridOracle::from_rows(Position::ORIGIN, &["F"]);
        let hits = scan_square(&grid, Position::ORIGIN, 3, CellKind::Firewall);
        assert_eq!(hits, vec![Position::ORIGIN]);
    }
}
