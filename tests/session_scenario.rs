//! End-to-end session scenarios driven through the public API.

mod common;

use approx::assert_relative_eq;
use orbital_traffic::collision::{ProximityStatus, check_proximity, closest_approach};
use orbital_traffic::input::{ControlAction, apply_action};
use orbital_traffic::session::{Difficulty, GamePhase, GameSession, TickOutcome, tick};
use orbital_traffic::types::GameSettings;

const TICK_LIMIT: usize = 100_000;

/// Tick until the run ends; returns the final outcome and tick count.
fn run_until_collision(session: &mut GameSession, settings: &GameSettings) -> (TickOutcome, usize) {
    for n in 1..=TICK_LIMIT {
        let outcome = tick(session, settings.tick_secs(), settings);
        if matches!(outcome, TickOutcome::Collided { .. }) {
            return (outcome, n);
        }
    }
    panic!("no collision within {TICK_LIMIT} ticks");
}

/// Put satellite 1 on satellite 0's orbit, gaining 1 degree per tick on it.
fn force_convergence(session: &mut GameSession) {
    let lead = session.satellites[0].clone();
    let chaser = &mut session.satellites[1];
    chaser.radius = lead.radius;
    chaser.angular_speed = lead.angular_speed + 1.0;
}

#[test]
fn test_medium_run_ends_in_collision() {
    let settings = GameSettings::default();
    let mut session = GameSession::with_best_time(0.5);
    session
        .start(Difficulty::Medium, &settings, &mut common::seeded_rng(2024))
        .unwrap();
    assert_eq!(session.satellites.len(), 5);
    force_convergence(&mut session);

    let (outcome, ticks) = run_until_collision(&mut session, &settings);

    let TickOutcome::Collided { survival_time } = outcome else {
        unreachable!()
    };
    assert!(ticks <= 400, "converging pair should meet within one lap");
    assert_eq!(session.phase, GamePhase::GameOver);
    assert_eq!(session.proximity, ProximityStatus::Collision);
    assert!(survival_time >= 0.0);
    assert_relative_eq!(survival_time, ticks as f64 * 0.02, epsilon = 1e-9);
    assert_relative_eq!(session.best_time, survival_time.max(0.5));

    let closest = closest_approach(&session.satellites).unwrap();
    assert!(closest < settings.collision_distance);
}

#[test]
fn test_short_run_keeps_previous_best() {
    let settings = GameSettings::default();
    let mut session = GameSession::with_best_time(10_000.0);
    session
        .start(Difficulty::Hard, &settings, &mut common::seeded_rng(7))
        .unwrap();
    force_convergence(&mut session);

    let (outcome, _) = run_until_collision(&mut session, &settings);

    let TickOutcome::Collided { survival_time } = outcome else {
        unreachable!()
    };
    assert!(survival_time < 10_000.0);
    assert_eq!(session.best_time, 10_000.0);
    assert_eq!(session.best_secs(), 10_000);
}

#[test]
fn test_well_separated_fleet_survives() {
    let settings = GameSettings::default();
    let mut session = GameSession::running_with(vec![
        common::satellite(100.0, 1.5, 0.0),
        common::satellite(200.0, 1.5, 90.0),
        common::satellite(300.0, 1.5, 180.0),
    ]);

    for _ in 0..5_000 {
        let outcome = tick(&mut session, settings.tick_secs(), &settings);
        assert_eq!(outcome, TickOutcome::Advanced(ProximityStatus::Clear));
    }

    assert_eq!(session.phase, GamePhase::Running);
    assert_relative_eq!(session.survival_time, 100.0, epsilon = 1e-6);
}

#[test]
fn test_player_can_dodge_by_raising_orbit() {
    let settings = GameSettings::default();
    // Same orbit, controlled satellite 40 degrees behind and closing at 1 degree per tick
    let mut session = GameSession::running_with(vec![
        common::satellite(150.0, 2.0, 0.0),
        common::satellite(150.0, 1.0, 40.0),
    ]);

    for _ in 0..10 {
        apply_action(&mut session, ControlAction::RaiseOrbit, &settings);
    }
    assert_relative_eq!(session.satellites[0].radius, 250.0);

    for _ in 0..1_000 {
        tick(&mut session, settings.tick_secs(), &settings);
    }

    assert_eq!(session.phase, GamePhase::Running);
    assert_ne!(
        check_proximity(&session.satellites, &settings),
        ProximityStatus::Collision
    );
}

#[test]
fn test_unknown_label_starts_easy_run() {
    let settings = GameSettings::default();
    let mut session = GameSession::new();
    session
        .start_with_label("Ludicrous", &settings, &mut common::seeded_rng(1))
        .unwrap();

    assert_eq!(session.satellites.len(), 3);
    assert_eq!(session.difficulty, Some(Difficulty::Easy));
}
