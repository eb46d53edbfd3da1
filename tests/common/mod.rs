//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::prelude::*;
use orbital_traffic::input::InputPlugin;
use orbital_traffic::satellite::{Satellite, SatelliteColor};
use orbital_traffic::session::{Difficulty, GameSession, SessionPlugin};
use orbital_traffic::types::GameSettings;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Deterministic RNG for fleet generation.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A satellite at `angle` degrees on an orbit of `radius`.
pub fn satellite(radius: f64, speed: f64, angle: f64) -> Satellite {
    Satellite::new(radius, speed, SatelliteColor::Cyan, angle)
}

/// A running session started at `difficulty` from a seeded fleet.
pub fn started_session(difficulty: Difficulty, seed: u64) -> GameSession {
    let mut session = GameSession::new();
    session
        .start(difficulty, &GameSettings::default(), &mut seeded_rng(seed))
        .expect("fresh session starts from the menu");
    session
}

/// Headless app with the session and input plugins.
///
/// Input resources are inserted by hand instead of through Bevy's input
/// plugin so tests control exactly when a key is "just pressed".
pub fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<ButtonInput<MouseButton>>()
        .add_plugins((SessionPlugin, InputPlugin));
    app.update();
    app
}

/// Press and release `key` across one frame.
pub fn tap(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
    app.update();

    let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keys.release(key);
    keys.clear();
}

/// Run `n` simulation ticks directly.
pub fn run_fixed_ticks(app: &mut App, n: usize) {
    for _ in 0..n {
        app.world_mut().run_schedule(FixedUpdate);
    }
}

pub fn session(app: &App) -> &GameSession {
    app.world().resource::<GameSession>()
}
