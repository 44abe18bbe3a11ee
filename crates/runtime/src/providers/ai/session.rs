//! Cross-tick memory for one game.

use game_core::Point;

use super::hazard::{HazardAnalysis, HazardPattern};

/// State that survives between ticks of a single game.
///
/// Only the hazard detector writes the hazard fields. `hazard_detected` is
/// monotonic: a later scan without firewall cells means the firewall left
/// the sensing radius, not that it vanished, so only [`AgentSession::reset`]
/// clears it.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct AgentSession {
    hazard_detected: bool,
    hazard_pattern: HazardPattern,
    safe_direction: Option<Point>,
    ticks: u64,
}

impl AgentSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hazard_detected(&self) -> bool {
        self.hazard_detected
    }

    /// Last pattern classified in this game.
    pub fn hazard_pattern(&self) -> HazardPattern {
        self.hazard_pattern
    }

    /// Last safe direction derived in this game.
    pub fn safe_direction(&self) -> Option<Point> {
        self.safe_direction
    }

    /// Decisions taken so far in this game.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub(crate) fn advance(&mut self) -> u64 {
        let tick = self.ticks;
        self.ticks += 1;
        tick
    }

    /// Folds a scan result into the session.
    ///
    /// Scans that saw no firewall leave every field untouched.
    pub(crate) fn record(&mut self, analysis: &HazardAnalysis) {
        if analysis.pattern == HazardPattern::None {
            return;
        }

        if !self.hazard_detected {
            self.hazard_detected = true;
            tracing::warn!(
                cells = analysis.cells,
                "firewall detected, pattern {}",
                analysis.pattern
            );
        } else if self.hazard_pattern != analysis.pattern {
            tracing::info!(
                "firewall pattern changed: {} -> {}",
                self.hazard_pattern,
                analysis.pattern
            );
        }

        self.hazard_pattern = analysis.pattern;
        self.safe_direction = analysis.safe_direction;
    }

    /// Forget everything; called when a new game starts.
    pub fn reset(&mut self) {
        *self = Self::default();
        tracing::info!("detection state reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(pattern: HazardPattern, safe: Option<Point>) -> HazardAnalysis {
        HazardAnalysis {
            pattern,
            safe_direction: safe,
            centroid: safe,
            cells: if pattern == HazardPattern::None { 0 } else { 4 },
        }
    }

    #[test]
    fn detection_survives_empty_scans() {
        let mut session = AgentSession::new();
        let corner = Some(Point::new(50.0, 50.0));

        session.record(&analysis(HazardPattern::CenterExpansion, corner));
        session.record(&analysis(HazardPattern::None, None));

        assert!(session.hazard_detected());
        assert_eq!(session.hazard_pattern(), HazardPattern::CenterExpansion);
        assert_eq!(session.safe_direction(), corner);
    }

    #[test]
    fn reset_clears_detection() {
        let mut session = AgentSession::new();
        session.record(&analysis(HazardPattern::AllSidesClosing, Some(Point::ORIGIN)));
        session.advance();

        session.reset();

        assert_eq!(session, AgentSession::default());
    }

    #[test]
    fn later_pattern_overwrites_safe_direction() {
        let mut session = AgentSession::new();
        session.record(&analysis(
            HazardPattern::CenterExpansion,
            Some(Point::new(-50.0, 50.0)),
        ));
        session.record(&analysis(HazardPattern::AllSidesClosing, Some(Point::ORIGIN)));

        assert_eq!(session.hazard_pattern(), HazardPattern::AllSidesClosing);
        assert_eq!(session.safe_direction(), Some(Point::ORIGIN));
    }
}
