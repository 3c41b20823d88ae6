//! Integration test: round engine behaviour
//!
//! Drives `RoundEngine` through its public update contract: physics, obstacle
//! stream upkeep, collisions, scoring and the Active/Over state machine.

use flappy::round::{Obstacle, RoundEngine, RoundOverCause, RoundPhase};
use flappy::GameConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const EPS: f64 = 1e-9;

fn new_engine(high_score: u32) -> RoundEngine<ChaCha8Rng> {
    RoundEngine::with_rng(
        GameConfig::default(),
        high_score,
        ChaCha8Rng::seed_from_u64(2024),
    )
    .expect("default config is valid")
}

/// Obstacle whose trailing edge sits `offset` units right of the avatar's
/// left edge, with the gap around the avatar.
fn obstacle_just_ahead(engine: &RoundEngine<ChaCha8Rng>, offset: f64) -> Obstacle {
    let config = engine.config();
    let trailing = engine.avatar().leading_edge() + offset;
    Obstacle::with_gap(trailing - config.obstacle_width, 200.0, config)
}

/// Push the avatar into the ceiling so the next update ends the round.
fn crash(engine: &mut RoundEngine<ChaCha8Rng>) {
    engine.avatar_mut().y_position = 5.0;
    engine.update();
    assert!(engine.is_over());
}

// =============================================================================
// Physics
// =============================================================================

#[test]
fn test_velocity_grows_by_gravity_each_tick() {
    let mut engine = new_engine(0);
    let gravity = engine.config().gravity;
    let mut previous = engine.avatar().velocity;
    for _ in 0..10 {
        engine.apply_input(false);
        engine.update();
        let velocity = engine.avatar().velocity;
        assert!((velocity - previous - gravity).abs() < EPS);
        assert!(velocity > previous);
        previous = velocity;
    }
}

#[test]
fn test_free_fall_from_center() {
    let mut engine = new_engine(0);
    assert!((engine.avatar().y_position - 300.0).abs() < EPS);
    for _ in 0..10 {
        engine.update();
    }
    assert!((engine.avatar().velocity - 5.0).abs() < EPS);
    assert!((engine.avatar().y_position - 327.5).abs() < EPS);
    assert_eq!(engine.phase(), RoundPhase::Active);
}

#[test]
fn test_jump_then_update_applies_gravity_same_tick() {
    let mut engine = new_engine(0);
    for _ in 0..5 {
        engine.update();
    }
    engine.apply_input(true);
    engine.update();
    let expected = engine.config().jump_velocity + engine.config().gravity;
    assert!((engine.avatar().velocity - expected).abs() < EPS);
}

// =============================================================================
// Obstacle stream
// =============================================================================

#[test]
fn test_stream_never_empty_while_active() {
    let mut engine = new_engine(0);
    for _ in 0..3_000 {
        if engine.is_over() {
            break;
        }
        // Hover around the middle of the screen.
        let jump = engine.avatar().y_position > 320.0 && engine.avatar().velocity > 0.0;
        engine.apply_input(jump);
        engine.update();
        assert!(!engine.obstacles().is_empty());
    }
}

#[test]
fn test_obstacles_stay_in_spawn_order() {
    let mut engine = new_engine(0);
    for _ in 0..400 {
        let jump = engine.avatar().y_position > 320.0 && engine.avatar().velocity > 0.0;
        engine.apply_input(jump);
        engine.update();
        if engine.is_over() {
            break;
        }
        let xs: Vec<f64> = engine.obstacles().iter().map(|o| o.x_position).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_misordered_obstacles_are_rejected() {
    let mut engine = new_engine(0);
    let config = engine.config().clone();
    let misordered = vec![
        Obstacle::with_gap(350.0, 200.0, &config),
        Obstacle::with_gap(150.0, 200.0, &config),
    ];
    assert!(!engine.set_obstacles(misordered));

    engine.update();
    let xs: Vec<f64> = engine.obstacles().iter().map(|o| o.x_position).collect();
    assert_eq!(xs, vec![497.0]);
}

#[test]
fn test_gap_heights_are_constant() {
    let mut engine = new_engine(0);
    let gap = engine.config().gap_height;
    for _ in 0..300 {
        engine.apply_input(engine.avatar().y_position > 320.0);
        engine.update();
        for obstacle in engine.obstacles() {
            assert!((obstacle.gap_bottom_y - obstacle.gap_top_y - gap).abs() < EPS);
            assert!(obstacle.bottom_height() >= 0.0);
        }
    }
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn test_score_increments_once_per_obstacle() {
    let mut engine = new_engine(0);
    let obstacle = obstacle_just_ahead(&engine, 2.0);
    assert!(engine.set_obstacles(vec![obstacle]));
    assert_eq!(engine.state().score, 0);

    let state = engine.update();
    assert!(state.alive);
    assert_eq!(state.score, 1);
    assert!(engine.obstacles()[0].passed);

    for _ in 0..5 {
        let state = engine.update();
        assert_eq!(state.score, 1);
    }
}

#[test]
fn test_not_scored_before_trailing_edge_clears() {
    let mut engine = new_engine(0);
    // Trailing edge moves 3 per tick: 10 -> 7 -> 4 -> 1 -> -2.
    let obstacle = obstacle_just_ahead(&engine, 10.0);
    assert!(engine.set_obstacles(vec![obstacle]));

    for _ in 0..3 {
        assert_eq!(engine.update().score, 0);
    }
    assert_eq!(engine.update().score, 1);
}

#[test]
fn test_score_tracks_high_score_in_memory() {
    let mut engine = new_engine(0);
    let obstacle = obstacle_just_ahead(&engine, 2.0);
    assert!(engine.set_obstacles(vec![obstacle]));
    let state = engine.update();
    assert_eq!(state.score, 1);
    assert_eq!(state.high_score, 1);
}

#[test]
fn test_score_steps_by_at_most_one_per_tick() {
    let mut engine = new_engine(0);
    let mut previous = 0;
    for _ in 0..3_000 {
        if engine.is_over() {
            break;
        }
        let target = engine
            .obstacles()
            .iter()
            .find(|o| !o.passed)
            .map(|o| (o.gap_top_y + o.gap_bottom_y) / 2.0)
            .unwrap_or(300.0);
        let avatar = engine.avatar();
        let jump = avatar.y_position > target + 10.0 && avatar.velocity > 0.0;
        engine.apply_input(jump);
        let state = engine.update();
        assert!(state.score == previous || state.score == previous + 1);
        previous = state.score;
    }
}

// =============================================================================
// Round over
// =============================================================================

#[test]
fn test_falling_to_floor_ends_round() {
    let mut engine = new_engine(0);
    let mut ticks = 0;
    while !engine.is_over() && ticks < 1_000 {
        engine.update();
        ticks += 1;
    }
    assert!(engine.is_over());
    assert_eq!(engine.over_cause(), Some(RoundOverCause::Bounds));
    let bbox = engine.avatar().bounding_box();
    assert!(bbox.bottom() >= engine.config().viewport_height);
}

#[test]
fn test_collision_freezes_score() {
    let mut engine = new_engine(0);
    let config = engine.config().clone();
    // One obstacle about to be scored, one sitting on the avatar.
    let scored_next = obstacle_just_ahead(&engine, 2.0);
    let blocking = Obstacle::with_gap(30.0, 300.0, &config);
    assert!(engine.set_obstacles(vec![scored_next, blocking]));
    engine.avatar_mut().y_position = 150.0;

    let state = engine.update();
    assert!(!state.alive);
    assert_eq!(state.score, 0);
    assert_eq!(engine.over_cause(), Some(RoundOverCause::Obstacle));
}

#[test]
fn test_over_is_permanent_until_reset() {
    let mut engine = new_engine(0);
    crash(&mut engine);
    let ticks = engine.tick_count();
    let y = engine.avatar().y_position;

    for i in 0..100 {
        engine.apply_input(i % 2 == 0);
        let state = engine.update();
        assert!(!state.alive);
        assert_eq!(engine.phase(), RoundPhase::Over);
    }
    assert_eq!(engine.tick_count(), ticks);
    assert!((engine.avatar().y_position - y).abs() < EPS);
}

#[test]
fn test_reset_starts_fresh_round_and_keeps_high_score() {
    let mut engine = new_engine(3);
    // Trailing edges 2.0..2.4 ahead: all cleared by the next 3-unit scroll.
    let obstacles: Vec<Obstacle> = (0..5u32)
        .map(|i| obstacle_just_ahead(&engine, 2.0 + f64::from(i) * 0.1))
        .collect();
    assert!(engine.set_obstacles(obstacles));
    assert_eq!(engine.update().score, 5);
    crash(&mut engine);
    assert_eq!(engine.state().high_score, 5);

    engine.reset();
    let state = engine.state();
    assert!(state.alive);
    assert_eq!(state.score, 0);
    assert_eq!(state.high_score, 5);
    assert_eq!(engine.phase(), RoundPhase::Active);
    assert!(engine.over_cause().is_none());
    assert_eq!(engine.tick_count(), 0);
    assert_eq!(engine.obstacles().len(), 1);
    assert!((engine.avatar().y_position - 300.0).abs() < EPS);
    assert!(engine.avatar().velocity.abs() < EPS);
}

#[test]
fn test_snapshot_lists_obstacles_oldest_first() {
    let mut engine = new_engine(0);
    for _ in 0..150 {
        engine.apply_input(engine.avatar().y_position > 320.0);
        engine.update();
    }
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.obstacles.len(), engine.obstacles().len());
    for (snap, obstacle) in snapshot.obstacles.iter().zip(engine.obstacles()) {
        assert_eq!(snap.top, obstacle.top_rect());
        assert_eq!(snap.bottom, obstacle.bottom_rect());
        assert_eq!(snap.passed, obstacle.passed);
    }
    assert_eq!(snapshot.score, engine.state().score);
    assert_eq!(snapshot.alive, !engine.is_over());
}
