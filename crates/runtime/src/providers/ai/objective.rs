//! Chest and fallback-ground location.

use game_core::{CellKind, CellOracle, Point, Position, closest};

use super::AgentContext;
use super::scan::scan_square;

pub struct ObjectiveLocator;

impl ObjectiveLocator {
    /// Chests within `radius` of `center`.
    pub fn chests(oracle: &dyn CellOracle, center: Position, radius: i32) -> Vec<Position> {
        scan_square(oracle, center, radius, CellKind::Chest)
    }

    /// Ground cells within `radius` of `center`, excluding `center` itself.
    pub fn ground(oracle: &dyn CellOracle, center: Position, radius: i32) -> Vec<Position> {
        let mut cells = scan_square(oracle, center, radius, CellKind::Ground);
        cells.retain(|&cell| cell != center);
        cells
    }

    /// Nearest chest to the agent, if any is in range.
    pub fn nearest_chest(ctx: &AgentContext<'_>) -> Option<Position> {
        let chests = Self::chests(ctx.oracle, ctx.cell(), ctx.config.chest_scan_radius);
        Self::closest(ctx.position(), &chests)
    }

    /// Nearest other ground cell to the agent, if any is in range.
    pub fn nearest_ground(ctx: &AgentContext<'_>) -> Option<Position> {
        let cells = Self::ground(ctx.oracle, ctx.cell(), ctx.config.ground_scan_radius);
        Self::closest(ctx.position(), &cells)
    }

    /// First-seen nearest cell by Euclidean distance.
    pub fn closest(from: Point, cells: &[Position]) -> Option<Position> {
        closest(from, cells.iter().copied().map(Point::from)).map(Point::truncate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::GridOracle;

    #[test]
    fn ground_scan_excludes_own_cell() {
        let grid = GridOracle::from_rows(Position::ORIGIN, &["...", "...", "..."]);
        let cells = ObjectiveLocator::ground(&grid, Position::new(1, 1), 1);

        assert_eq!(cells.len(), 8);
        assert!(!cells.contains(&Position::new(1, 1)));
    }

    #[test]
    fn closest_prefers_first_seen_on_ties() {
        let cells = [
            Position::new(0, 1),
            Position::new(1, 0),
            Position::new(2, 2),
        ];
        assert_eq!(
            ObjectiveLocator::closest(Point::ORIGIN, &cells),
            Some(Position::new(0, 1))
        );
    }

    #[test]
    fn closest_of_empty_set_is_none() {
        assert_eq!(ObjectiveLocator::closest(Point::ORIGIN, &[]), None);
    }

    #[test]
    fn finds_chest_in_range_only() {
        let mut grid = GridOracle::filled(
            game_core::GroundBounds::new(60, 1, Position::ORIGIN),
            CellKind::Ground,
        );
        grid.set(Position::new(25, 0), CellKind::Chest);
        grid.set(Position::new(5, 0), CellKind::Chest);

        let chests = ObjectiveLocator::chests(&grid, Position::ORIGIN, 20);

        assert_eq!(chests, vec![Position::new(5, 0)]);
    }
}
