//! Glow under the controlled satellite.

use bevy::prelude::*;

use crate::render::bodies::playfield_visible;
use crate::render::z_layers;
use crate::session::GameSession;
use crate::types::GameSystemSet;

/// Radius of the glow disc.
pub const GLOW_RADIUS: f32 = 10.0;

/// Marker for the glow entity.
#[derive(Component)]
pub struct ControlGlow;

/// Plugin providing the control highlight.
pub struct HighlightPlugin;

impl Plugin for HighlightPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_glow)
            .add_systems(Update, follow_controlled.in_set(GameSystemSet::Sync));
    }
}

/// Where the glow should sit, if it should be shown at all.
pub fn glow_target(session: &GameSession) -> Option<Vec2> {
    if !playfield_visible(session.phase) {
        return None;
    }
    session.controlled().map(|sat| sat.position.as_vec2())
}

fn spawn_glow(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn((
        Mesh2d(meshes.add(Circle::new(GLOW_RADIUS))),
        MeshMaterial2d(materials.add(Color::WHITE)),
        Transform::from_xyz(0.0, 0.0, z_layers::GLOW),
        Visibility::Hidden,
        ControlGlow,
    ));
}

fn follow_controlled(
    session: Res<GameSession>,
    mut glow: Query<(&mut Transform, &mut Visibility), With<ControlGlow>>,
) {
    let Ok((mut transform, mut visibility)) = glow.single_mut() else {
        return;
    };

    match glow_target(&session) {
        Some(pos) => {
            transform.translation.x = pos.x;
            transform.translation.y = pos.y;
            *visibility = Visibility::Inherited;
        }
        None => *visibility = Visibility::Hidden,
    }
}
