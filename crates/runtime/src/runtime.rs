//! Per-game driver.
//!
//! [`AgentRuntime`] owns one [`DecisionEngine`] and one [`ActionSink`]; the
//! host calls [`AgentRuntime::on_new_game`] when a game starts and
//! [`AgentRuntime::on_tick`] for every snapshot it receives.

use game_core::{Action, AgentConfig, CellOracle, RngOracle, WorldSnapshot};

use crate::api::{ActionSink, Result};
use crate::oracle::EntropyRng;
use crate::providers::DecisionEngine;

pub struct AgentRuntime<S, R = EntropyRng> {
    engine: DecisionEngine<R>,
    sink: S,
    games: u32,
}

impl<S: ActionSink> AgentRuntime<S, EntropyRng> {
    /// Runtime with the production random source.
    pub fn from_config(config: AgentConfig, sink: S) -> Result<Self> {
        Ok(Self::new(DecisionEngine::new(config)?, sink))
    }
}

impl<S: ActionSink, R: RngOracle> AgentRuntime<S, R> {
    pub fn new(engine: DecisionEngine<R>, sink: S) -> Self {
        Self {
            engine,
            sink,
            games: 0,
        }
    }

    /// Resets all per-game state.
    pub fn on_new_game(&mut self) {
        self.games += 1;
        tracing::info!("game {} started", self.games);
        self.engine.new_game();
    }

    /// Decides this tick's action and hands it to the sink.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RuntimeError::Sink`] if the sink refuses the action.
    /// The session has still advanced by one decision.
    pub fn on_tick(&mut self, snapshot: &WorldSnapshot, oracle: &dyn CellOracle) -> Result<Action> {
        let action = self.engine.decide(snapshot, oracle);
        self.sink.submit(action)?;
        Ok(action)
    }

    pub fn engine(&self) -> &DecisionEngine<R> {
        &self.engine
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Number of games started on this runtime.
    pub fn games(&self) -> u32 {
        self.games
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use game_core::{AgentView, CellKind, GroundBounds, PcgRng, Point, Position};

    use super::*;
    use crate::RuntimeError;
    use crate::api::{RecordingSink, SinkError};
    use crate::oracle::GridOracle;

    fn runtime() -> AgentRuntime<RecordingSink, PcgRng> {
        let engine = DecisionEngine::with_rng(AgentConfig::default(), PcgRng).unwrap();
        AgentRuntime::new(engine, RecordingSink::new())
    }

    fn field() -> GridOracle {
        GridOracle::filled(GroundBounds::new(11, 11, Position::new(-5, -5)), CellKind::Ground)
    }

    #[test]
    fn submits_every_decision() {
        let mut runtime = runtime();
        let grid = field();
        let snapshot = WorldSnapshot::new(AgentView::at(Point::ORIGIN));

        runtime.on_new_game();
        let first = runtime.on_tick(&snapshot, &grid).unwrap();
        let second = runtime.on_tick(&snapshot, &grid).unwrap();

        assert_eq!(runtime.sink().actions(), &[first, second]);
        assert_eq!(runtime.games(), 1);
    }

    #[test]
    fn closed_sink_surfaces_error() {
        let mut runtime = runtime();
        let grid = field();
        let snapshot = WorldSnapshot::new(AgentView::at(Point::ORIGIN));

        let mut sink = RecordingSink::new();
        sink.close();
        runtime.sink = sink;

        assert!(matches!(
            runtime.on_tick(&snapshot, &grid),
            Err(RuntimeError::Sink(SinkError::Closed))
        ));
    }

    #[test]
    fn new_game_clears_session() {
        let mut runtime = runtime();
        let grid = field().with_cell(Position::new(1, 1), CellKind::Firewall);
        let snapshot = WorldSnapshot::new(AgentView::at(Point::ORIGIN));

        runtime.on_tick(&snapshot, &grid).unwrap();
        assert!(runtime.engine().session().hazard_detected());

        runtime.on_new_game();
        assert!(!runtime.engine().session().hazard_detected());
    }
}
