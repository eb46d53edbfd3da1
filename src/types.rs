//! Core tuning constants and shared types for the orbital traffic game.

use std::time::Duration;

use bevy::prelude::*;

/// System set for ordering the frame's systems.
///
/// Player input must land before visuals are synced so a key press is
/// reflected on the same frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSystemSet {
    /// Keyboard and mouse handling.
    Input,
    /// Copying session state onto render entities.
    Sync,
}

/// Lowest orbit a satellite may occupy (world units from Earth's center).
pub const MIN_ORBIT_RADIUS: f64 = 50.0;

/// Radius change per raise/lower key press.
pub const RADIUS_STEP: f64 = 10.0;

/// Angular speed change per speed key press (degrees per tick).
pub const SPEED_STEP: f64 = 0.1;

/// Pairs closer than this have collided.
pub const COLLISION_DISTANCE: f64 = 30.0;

/// Pairs closer than this (but not colliding) are in the warning band.
pub const WARNING_DISTANCE: f64 = 50.0;

/// Orbit radius of the first satellite in a fresh fleet.
pub const BASE_ORBIT_RADIUS: f64 = 120.0;

/// Radius gap between consecutive satellites in a fresh fleet.
pub const ORBIT_SPACING: f64 = 20.0;

/// Cosmetic Earth rotation per tick (degrees).
pub const EARTH_SPIN_PER_TICK: f64 = 0.5;

/// Wall-clock interval between simulation ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(20);

/// Tuning values for the simulation.
///
/// Every pure update function takes this by reference so tests can run
/// against non-default values.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct GameSettings {
    /// Floor for every satellite's orbit radius.
    pub min_radius: f64,
    /// Radius delta applied by raise/lower actions.
    pub radius_step: f64,
    /// Angular speed delta applied by speed actions (degrees per tick).
    pub speed_step: f64,
    /// Distance under which a pair collides.
    pub collision_distance: f64,
    /// Distance under which a pair is in the warning band.
    pub warning_distance: f64,
    /// Radius of satellite 0 in a fresh fleet.
    pub base_radius: f64,
    /// Radius gap between consecutive satellites.
    pub orbit_spacing: f64,
    /// Lower bound (inclusive) of randomized initial angular speed.
    pub min_initial_speed: f64,
    /// Upper bound (exclusive) of randomized initial angular speed.
    pub max_initial_speed: f64,
    /// Earth rotation per tick (degrees).
    pub earth_spin: f64,
    /// Fixed timestep of the simulation.
    pub tick_interval: Duration,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            min_radius: MIN_ORBIT_RADIUS,
            radius_step: RADIUS_STEP,
            speed_step: SPEED_STEP,
            collision_distance: COLLISION_DISTANCE,
            warning_distance: WARNING_DISTANCE,
            base_radius: BASE_ORBIT_RADIUS,
            orbit_spacing: ORBIT_SPACING,
            min_initial_speed: 1.0,
            max_initial_speed: 3.0,
            earth_spin: EARTH_SPIN_PER_TICK,
            tick_interval: TICK_INTERVAL,
        }
    }
}

impl GameSettings {
    /// Tick interval in seconds.
    pub fn tick_secs(&self) -> f64 {
        self.tick_interval.as_secs_f64()
    }
}
