//! Cross-tick properties of the engine.

use game_core::{
    Action, AgentConfig, AgentView, CellKind, CellOracle, GroundBounds, PcgRng, Point, Position,
    RngOracle, WorldSnapshot, compute_seed,
};
use runtime::providers::ai::{HazardDetector, MovementResolver};
use runtime::{AgentRuntime, DecisionEngine, GridOracle, HazardPattern, RecordingSink};

/// Grid with roughly a third of the cells blocked, repeatable per seed.
fn scattered_grid(seed: u64, half: i32) -> GridOracle {
    let side = (2 * half + 1) as u32;
    let mut grid = GridOracle::filled(
        GroundBounds::new(side, side, Position::new(-half, -half)),
        CellKind::Ground,
    );
    let rng = PcgRng;
    for x in -half..=half {
        for y in -half..=half {
            let cell_seed = compute_seed(seed, (x + half) as u64, (y + half) as u32);
            let roll = rng.range(cell_seed, 0, 9);
            let kind = match roll {
                0..=2 => CellKind::Blocked,
                3 => CellKind::Firewall,
                _ => continue,
            };
            grid.set(Position::new(x, y), kind);
        }
    }
    grid
}

#[test]
fn hazard_detection_is_monotonic() {
    let bounds = GroundBounds::new(41, 41, Position::new(-20, -20));
    let clear = GridOracle::filled(bounds, CellKind::Ground);
    let burning = clear
        .clone()
        .with_cell(Position::new(3, 3), CellKind::Firewall);
    let snapshot = WorldSnapshot::new(AgentView::at(Point::ORIGIN));
    let mut engine = DecisionEngine::with_rng(AgentConfig::default(), PcgRng).unwrap();

    engine.decide(&snapshot, &burning);
    let pattern = engine.session().hazard_pattern();
    let safe = engine.session().safe_direction();
    assert!(engine.session().hazard_detected());

    for _ in 0..10 {
        engine.decide(&snapshot, &clear);
        assert!(engine.session().hazard_detected());
        assert_eq!(engine.session().hazard_pattern(), pattern);
        assert_eq!(engine.session().safe_direction(), safe);
    }

    engine.new_game();
    assert!(!engine.session().hazard_detected());
    assert_eq!(engine.session().hazard_pattern(), HazardPattern::None);
}

#[test]
fn classification_ignores_scan_history() {
    let config = AgentConfig::default();
    let cells = vec![
        Position::new(12, -3),
        Position::new(13, -3),
        Position::new(12, -4),
        Position::new(14, -5),
    ];
    let agent = Point::new(6.0, 1.0);

    let first = HazardDetector::classify(&cells, agent, &config);
    let _ = HazardDetector::classify(&[Position::ORIGIN], Point::ORIGIN, &config);
    let second = HazardDetector::classify(&cells, agent, &config);

    assert_eq!(first, second);
}

#[test]
fn resolver_never_steps_into_blocking_cells() {
    for seed in 0..16 {
        let grid = scattered_grid(seed, 6);
        for fx in -6..=6 {
            for fy in -6..=6 {
                let from = Point::new(fx as f64, fy as f64);
                for target in [
                    Point::new(10.0, 10.0),
                    Point::new(-10.0, 3.0),
                    Point::new(0.0, -9.0),
                    Point::new(fx as f64 + 0.5, fy as f64),
                ] {
                    if let Action::Move(cell) = MovementResolver::resolve(&grid, from, target) {
                        assert!(
                            grid.is_passable(cell),
                            "moved into {cell} from {from} toward {target}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn every_tick_yields_one_non_idle_action() {
    let grid = scattered_grid(42, 12);
    let mut runtime = AgentRuntime::new(
        DecisionEngine::with_rng(AgentConfig::default().with_game_seed(3), PcgRng).unwrap(),
        RecordingSink::new(),
    );
    runtime.on_new_game();

    let mut position = Position::ORIGIN;
    for tick in 0..200 {
        let snapshot = WorldSnapshot::new(AgentView::at(position.into())).with_tick(tick);
        let action = runtime.on_tick(&snapshot, &grid).unwrap();

        assert!(!action.is_noop(), "tick {tick} idled");
        if let Action::Move(to) = action {
            assert!(grid.is_passable(to));
            position = to;
        }
    }

    assert_eq!(runtime.sink().actions().len(), 200);
    assert_eq!(runtime.engine().session().ticks(), 200);
}
