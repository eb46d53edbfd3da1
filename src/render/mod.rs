//! Rendering systems for the orbital traffic game.
//!
//! Everything drawn in world space lives here: the Earth, the satellites,
//! and the glow under the controlled satellite. Text and overlays are in
//! [`crate::ui`].

pub mod bodies;
pub mod highlight;

use bevy::prelude::*;

use self::bodies::BodiesPlugin;
use self::highlight::HighlightPlugin;

pub use self::bodies::{Earth, SatelliteVisual};
pub use self::highlight::ControlGlow;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((BodiesPlugin, HighlightPlugin));
    }
}

/// Z-layer constants for rendering order.
pub mod z_layers {
    /// The Earth disc.
    pub const EARTH: f32 = 1.0;
    /// Glow under the controlled satellite.
    pub const GLOW: f32 = 2.0;
    /// Satellite discs.
    pub const SATELLITE: f32 = 3.0;
    /// Menu text and buttons.
    pub const MENU: f32 = 4.0;
}
