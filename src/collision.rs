//! Proximity and collision detection between satellites.
//!
//! Every unordered pair is checked once per tick. The frame is classified
//! by its closest pair:
//! - Collision: closer than the collision distance (ends the game)
//! - Warning: inside the warning band
//! - Clear: everything else
//!
//! With single-digit fleets the O(n²) scan is negligible.

use crate::satellite::Satellite;
use crate::types::GameSettings;

/// Classification of a frame by its closest satellite pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProximityStatus {
    /// No pair inside the warning band.
    #[default]
    Clear,
    /// Closest pair is inside the warning band but not colliding.
    Warning,
    /// At least one pair has collided.
    Collision,
}

impl ProximityStatus {
    /// Whether this status ends the game.
    pub fn is_collision(&self) -> bool {
        matches!(self, ProximityStatus::Collision)
    }
}

/// Classify a single pair distance against the configured thresholds.
pub fn classify_distance(distance: f64, settings: &GameSettings) -> ProximityStatus {
    if distance < settings.collision_distance {
        ProximityStatus::Collision
    } else if distance < settings.warning_distance {
        ProximityStatus::Warning
    } else {
        ProximityStatus::Clear
    }
}

/// Classify the whole fleet.
///
/// Pairs are visited in fleet order (i < j). The first colliding pair
/// returns immediately; otherwise the worst status seen wins, which is the
/// status of the minimum distance.
pub fn check_proximity(satellites: &[Satellite], settings: &GameSettings) -> ProximityStatus {
    let mut worst = ProximityStatus::Clear;

    for (i, a) in satellites.iter().enumerate() {
        for b in &satellites[i + 1..] {
            match classify_distance(a.distance_to(b), settings) {
                ProximityStatus::Collision => return ProximityStatus::Collision,
                status => worst = worst.max(status),
            }
        }
    }

    worst
}

/// Smallest pairwise distance in the fleet, if there is at least one pair.
pub fn closest_approach(satellites: &[Satellite]) -> Option<f64> {
    satellites
        .iter()
        .enumerate()
        .flat_map(|(i, a)| satellites[i + 1..].iter().map(move |b| a.distance_to(b)))
        .min_by(|a, b| a.total_cmp(b))
}
