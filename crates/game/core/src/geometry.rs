//! Distance and direction primitives shared by every decision component.

use crate::action::CardinalDirection;
use crate::state::{Point, Position};

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// L1 distance between two cells.
#[inline]
pub fn manhattan(a: Position, b: Position) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

/// Unit step from `from` toward `to`, each axis quantized to {-1, 0, 1}.
#[inline]
pub fn step_toward(from: Position, to: Position) -> (i32, i32) {
    ((to.x - from.x).signum(), (to.y - from.y).signum())
}

/// Dominant cardinal direction from `from` toward `to`.
///
/// Horizontal only when `|dx|` strictly exceeds `|dy|`; ties go vertical.
pub fn cardinal_toward(from: Position, to: Position) -> CardinalDirection {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    if dx.abs() > dy.abs() {
        if dx > 0 {
            CardinalDirection::Right
        } else {
            CardinalDirection::Left
        }
    } else if dy > 0 {
        CardinalDirection::Up
    } else {
        CardinalDirection::Down
    }
}

/// Returns the candidate nearest to `point`.
///
/// Strict less-than against the running minimum, so the first of several
/// equidistant candidates wins. `None` for an empty candidate set.
pub fn closest<I>(point: Point, candidates: I) -> Option<Point>
where
    I: IntoIterator<Item = Point>,
{
    let mut best: Option<(Point, f64)> = None;
    for candidate in candidates {
        let d = distance(point, candidate);
        match best {
            Some((_, min)) if d >= min => {}
            _ => best = Some((candidate, d)),
        }
    }
    best.map(|(candidate, _)| candidate)
}
