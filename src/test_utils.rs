//! Test utilities for the orbit and session tests.
//!
//! Provides fixtures for building satellites at exact positions and
//! sessions in a known state.

use bevy::math::DVec2;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::satellite::{Satellite, SatelliteColor};
use crate::session::GameSession;

/// Fixtures for creating test satellites and sessions.
pub mod fixtures {
    use super::*;

    /// A stationary satellite whose position is exactly `(x, y)`.
    ///
    /// Radius and angle are derived from the position so the satellite
    /// stays consistent if it is later advanced.
    pub fn satellite_at(x: f64, y: f64) -> Satellite {
        let position = DVec2::new(x, y);
        Satellite {
            radius: position.length(),
            angle: y.atan2(x).to_degrees(),
            angular_speed: 0.0,
            color: SatelliteColor::White,
            position,
        }
    }

    /// Two stationary satellites exactly `distance` apart.
    pub fn pair_at_distance(distance: f64) -> Vec<Satellite> {
        vec![satellite_at(100.0, 0.0), satellite_at(100.0, distance)]
    }

    /// A satellite on an orbit of `radius` moving at `speed` degrees per tick.
    pub fn orbiting(radius: f64, speed: f64, angle: f64) -> Satellite {
        Satellite::new(radius, speed, SatelliteColor::Yellow, angle)
    }

    /// A running session over the given satellites.
    pub fn running_session(satellites: Vec<Satellite>) -> GameSession {
        GameSession::running_with(satellites)
    }

    /// Deterministic RNG for fleet generation.
    pub fn seeded_rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }
}
