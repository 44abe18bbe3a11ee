//! Greedy single-step movement with axis fallbacks and phasing.

use game_core::{Action, CellOracle, Point, Position, cardinal_toward, step_toward};

pub struct MovementResolver;

impl MovementResolver {
    /// Converts a target into one step.
    ///
    /// Tries the diagonal (or straight) unit step first, then, for diagonal
    /// steps only, the x-only and y-only steps, and finally asks to phase
    /// toward the target. Never returns a [`Action::Move`] into a cell the
    /// oracle reports as blocking or cannot classify, and never returns
    /// `Move` to the current cell unless the target is that cell.
    pub fn resolve(oracle: &dyn CellOracle, current: Point, target: Point) -> Action {
        let from = current.truncate();
        let to = target.truncate();
        let (sx, sy) = step_toward(from, to);

        // A straight step has no distinct axis alternatives: one would repeat
        // the direct step and the other is the current cell.
        let mut candidates = vec![from.offset(sx, sy)];
        if sx != 0 && sy != 0 {
            candidates.extend([from.offset(sx, 0), from.offset(0, sy)]);
        }

        if let Some(step) = Self::first_passable(oracle, &candidates) {
            tracing::debug!("step {} -> {} (target {})", from, step, to);
            return Action::Move(step);
        }

        let direction = cardinal_toward(from, to);
        tracing::debug!("blocked at {} toward {}, phasing {}", from, to, direction);
        Action::Phase(direction)
    }

    fn first_passable(oracle: &dyn CellOracle, candidates: &[Position]) -> Option<Position> {
        candidates
            .iter()
            .copied()
            .find(|&candidate| oracle.is_passable(candidate))
    }
}

#[cfg(test)]
mod tests {
    use game_core::{CardinalDirection, CellKind, GroundBounds};

    use super::*;
    use crate::oracle::GridOracle;

    fn open_field() -> GridOracle {
        GridOracle::filled(GroundBounds::new(21, 21, Position::new(-10, -10)), CellKind::Ground)
    }

    #[test]
    fn takes_direct_step_when_clear() {
        let grid = open_field();
        let action = MovementResolver::resolve(&grid, Point::ORIGIN, Point::new(5.0, 5.0));
        assert_eq!(action, Action::Move(Position::new(1, 1)));
    }

    #[test]
    fn falls_back_to_x_axis_first() {
        let grid = open_field().with_cell(Position::new(1, 1), CellKind::Blocked);
        let action = MovementResolver::resolve(&grid, Point::ORIGIN, Point::new(5.0, 5.0));
        assert_eq!(action, Action::Move(Position::new(1, 0)));
    }

    #[test]
    fn falls_back_to_y_axis_when_x_blocked() {
        let grid = open_field()
            .with_cell(Position::new(1, 1), CellKind::Firewall)
            .with_cell(Position::new(1, 0), CellKind::Blocked);
        let action = MovementResolver::resolve(&grid, Point::ORIGIN, Point::new(5.0, 5.0));
        assert_eq!(action, Action::Move(Position::new(0, 1)));
    }

    #[test]
    fn phases_when_every_step_is_blocked() {
        let grid = open_field()
            .with_cell(Position::new(1, 1), CellKind::Blocked)
            .with_cell(Position::new(1, 0), CellKind::Blocked)
            .with_cell(Position::new(0, 1), CellKind::Firewall);
        let action = MovementResolver::resolve(&grid, Point::ORIGIN, Point::new(5.0, 3.0));
        assert_eq!(action, Action::Phase(CardinalDirection::Right));
    }

    #[test]
    fn lookup_failure_blocks() {
        let grid = GridOracle::from_rows(Position::ORIGIN, &["."]);
        let action = MovementResolver::resolve(&grid, Point::ORIGIN, Point::new(0.0, -4.0));
        assert_eq!(action, Action::Phase(CardinalDirection::Down));
    }

    #[test]
    fn chest_is_passable() {
        let grid = open_field().with_cell(Position::new(0, 1), CellKind::Chest);
        let action = MovementResolver::resolve(&grid, Point::ORIGIN, Point::new(0.0, 4.0));
        assert_eq!(action, Action::Move(Position::new(0, 1)));
    }

    #[test]
    fn truncates_before_stepping() {
        let grid = open_field();
        let action = MovementResolver::resolve(&grid, Point::new(0.9, -0.9), Point::new(3.7, 0.2));
        assert_eq!(action, Action::Move(Position::new(1, 0)));
    }

    #[test]
    fn blocked_straight_step_phases() {
        let grid = open_field().with_cell(Position::new(-1, 0), CellKind::Blocked);
        let action = MovementResolver::resolve(&grid, Point::ORIGIN, Point::new(-8.0, 0.0));
        assert_eq!(action, Action::Phase(CardinalDirection::Left));
    }

    #[test]
    fn blocked_vertical_step_phases() {
        let grid = open_field().with_cell(Position::new(3, 4), CellKind::Firewall);
        let action = MovementResolver::resolve(&grid, Point::new(3.0, 3.0), Point::new(3.0, 9.0));
        assert_eq!(action, Action::Phase(CardinalDirection::Up));
    }

    #[test]
    fn same_cell_target_stays_put() {
        let grid = open_field();
        let action = MovementResolver::resolve(&grid, Point::new(2.0, 2.0), Point::new(2.4, 2.6));
        assert_eq!(action, Action::Move(Position::new(2, 2)));
    }
}
