//! Firewall pattern recognition.
//!
//! The firewall either grows from the world origin, collapses in from one
//! corner or side, or closes in from every side at once. The detector tells
//! these apart from the cells it can see and derives a point to retreat to.

use game_core::{AgentConfig, CellKind, CellOracle, Point, Position, closest, distance};

use super::AgentContext;
use super::scan::scan_square;

/// Shape of the firewall as seen from the agent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum HazardPattern {
    /// No firewall cell within the scan radius.
    #[default]
    None,
    /// Firewall mass centered on the origin, growing outward.
    CenterExpansion,
    /// Concentrated firewall away from the origin.
    CornerCollapse,
    /// Widespread firewall closing from all sides.
    AllSidesClosing,
}

/// Result of one scan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HazardAnalysis {
    pub pattern: HazardPattern,
    pub safe_direction: Option<Point>,
    /// Mean position of the firewall cells.
    pub centroid: Option<Point>,
    /// Number of firewall cells seen.
    pub cells: usize,
}

impl HazardAnalysis {
    pub const CLEAR: Self = Self {
        pattern: HazardPattern::None,
        safe_direction: None,
        centroid: None,
        cells: 0,
    };

    /// Whether the escape tier should act on this scan.
    pub fn requires_escape(&self) -> bool {
        self.pattern != HazardPattern::None && self.safe_direction.is_some()
    }
}

pub struct HazardDetector;

impl HazardDetector {
    /// Scans around the agent, classifies, and records the result in the
    /// session.
    pub fn analyze(ctx: &mut AgentContext<'_>) -> HazardAnalysis {
        let cells = Self::scan(ctx.oracle, ctx.cell(), ctx.config.hazard_scan_radius);
        let analysis = Self::classify(&cells, ctx.position(), ctx.config);
        ctx.session.record(&analysis);
        analysis
    }

    /// Firewall cells around `center`.
    pub fn scan(oracle: &dyn CellOracle, center: Position, radius: i32) -> Vec<Position> {
        scan_square(oracle, center, radius, CellKind::Firewall)
    }

    /// Classifies a set of firewall cells relative to the agent.
    ///
    /// Pure: the same cells and agent position always give the same result.
    pub fn classify(cells: &[Position], agent: Point, config: &AgentConfig) -> HazardAnalysis {
        let points = cells.iter().copied().map(Point::from);
        let Some(centroid) = Point::centroid(points.clone()) else {
            return HazardAnalysis::CLEAR;
        };

        tracing::debug!("{} firewall cells, centroid {}", cells.len(), centroid);

        let (pattern, safe) = if distance(centroid, Point::ORIGIN) < config.center_threshold {
            let corners = Self::corners(config.corner_extent);
            let nearest = closest(agent, corners).unwrap_or(corners[0]);
            (HazardPattern::CenterExpansion, nearest)
        } else if Self::spread(points, centroid) < config.spread_threshold {
            // Retreat through the agent, away from the firewall mass.
            let retreat = agent - (centroid - agent).scale(2.0);
            (HazardPattern::CornerCollapse, retreat)
        } else {
            (HazardPattern::AllSidesClosing, Point::ORIGIN)
        };

        tracing::debug!("pattern {}, safe direction {}", pattern, safe);

        HazardAnalysis {
            pattern,
            safe_direction: Some(safe),
            centroid: Some(centroid),
            cells: cells.len(),
        }
    }

    /// The four far corners, in tie-break order.
    pub fn corners(extent: i32) -> [Point; 4] {
        let e = extent as f64;
        [
            Point::new(e, e),
            Point::new(-e, e),
            Point::new(e, -e),
            Point::new(-e, -e),
        ]
    }

    /// Mean distance of the points from `centroid`; zero below two points.
    fn spread<I>(points: I, centroid: Point) -> f64
    where
        I: Iterator<Item = Point>,
    {
        let (count, total) = points.fold((0usize, 0.0), |(count, total), point| {
            (count + 1, total + distance(point, centroid))
        });
        if count < 2 {
            return 0.0;
        }
        total / count as f64
    }
}
