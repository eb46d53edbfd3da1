//! Camera setup.
//!
//! A plain 2D camera centered on the Earth: one world unit per logical
//! pixel, y pointing up. The playfield never pans or zooms.

use bevy::prelude::*;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin providing the camera.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

/// Spawn the main camera looking at the origin.
fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}
