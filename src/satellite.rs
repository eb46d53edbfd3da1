//! Satellite orbit model.
//!
//! Satellites follow fixed-radius circular orbits around the Earth at the
//! origin. There is no gravity here: each tick simply adds the angular speed
//! to the angle and recomputes the Cartesian position.

use bevy::math::DVec2;
use rand::Rng;

use crate::types::GameSettings;

/// Identity/color tag for a satellite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SatelliteColor {
    Red,
    Yellow,
    Green,
    White,
    Orange,
    Cyan,
    Magenta,
}

impl SatelliteColor {
    /// Palette cycled through when building a fleet.
    pub const PALETTE: [SatelliteColor; 7] = [
        SatelliteColor::Red,
        SatelliteColor::Yellow,
        SatelliteColor::Green,
        SatelliteColor::White,
        SatelliteColor::Orange,
        SatelliteColor::Cyan,
        SatelliteColor::Magenta,
    ];

    /// Palette entry for the satellite at `index` in a fleet.
    pub fn for_index(index: usize) -> Self {
        Self::PALETTE[index % Self::PALETTE.len()]
    }
}

/// A satellite on a circular orbit.
#[derive(Clone, Debug, PartialEq)]
pub struct Satellite {
    /// Distance from Earth's center. Never below the configured floor.
    pub radius: f64,
    /// Current angle in degrees. Accumulates freely.
    pub angle: f64,
    /// Degrees added to `angle` every tick. May be negative.
    pub angular_speed: f64,
    /// Identity tag.
    pub color: SatelliteColor,
    /// Cartesian position derived from `radius` and `angle`.
    pub position: DVec2,
}

impl Satellite {
    /// Create a satellite with its position already placed on the orbit.
    pub fn new(radius: f64, angular_speed: f64, color: SatelliteColor, angle: f64) -> Self {
        let mut satellite = Self {
            radius,
            angle,
            angular_speed,
            color,
            position: DVec2::ZERO,
        };
        satellite.position = satellite.compute_position();
        satellite
    }

    /// Build a fresh fleet of `count` satellites.
    ///
    /// Satellite `i` orbits at `base_radius + i * orbit_spacing`, starts at
    /// `i * (360 / count)` degrees (integer division) and gets a random
    /// angular speed from the configured range.
    pub fn fleet(count: usize, settings: &GameSettings, rng: &mut impl Rng) -> Vec<Satellite> {
        if count == 0 {
            return Vec::new();
        }

        let spacing_deg = (360 / count) as f64;

        (0..count)
            .map(|i| {
                let radius = (settings.base_radius + i as f64 * settings.orbit_spacing)
                    .max(settings.min_radius);
                let speed =
                    rng.random_range(settings.min_initial_speed..settings.max_initial_speed);
                Satellite::new(radius, speed, SatelliteColor::for_index(i), i as f64 * spacing_deg)
            })
            .collect()
    }

    /// Position implied by the current radius and angle.
    pub fn compute_position(&self) -> DVec2 {
        let theta = self.angle.to_radians();
        DVec2::new(self.radius * theta.cos(), self.radius * theta.sin())
    }

    /// Advance one tick along the orbit.
    pub fn update_position(&mut self) {
        self.angle += self.angular_speed;
        self.position = self.compute_position();
    }

    /// Move the orbit outward by `step`.
    pub fn raise_orbit(&mut self, step: f64) {
        self.radius += step;
    }

    /// Move the orbit inward by `step`, stopping at `floor`.
    pub fn lower_orbit(&mut self, step: f64, floor: f64) {
        self.radius = (self.radius - step).max(floor);
    }

    /// Distance to another satellite's current position.
    pub fn distance_to(&self, other: &Satellite) -> f64 {
        self.position.distance(other.position)
    }
}
