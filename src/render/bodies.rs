//! Earth and satellite rendering.
//!
//! Visual entities are thin mirrors of the session: each frame their
//! transforms are copied from [`GameSession`], never the other way round.

use bevy::prelude::*;

use crate::render::z_layers;
use crate::satellite::{Satellite, SatelliteColor};
use crate::session::{GamePhase, GameSession};
use crate::types::GameSystemSet;

/// Radius of the Earth disc.
pub const EARTH_RADIUS: f32 = 20.0;

/// Radius of a satellite disc.
pub const SATELLITE_RADIUS: f32 = 5.0;

const EARTH_COLOR: Color = Color::srgb(0.0, 0.0, 1.0);
const MERIDIAN_COLOR: Color = Color::srgb(0.6, 0.8, 1.0);

/// Marker for the Earth entity.
#[derive(Component)]
pub struct Earth;

/// Visual for the satellite at `index` in the session's fleet.
#[derive(Component)]
pub struct SatelliteVisual {
    pub index: usize,
}

/// Plugin spawning and syncing the Earth and satellites.
pub struct BodiesPlugin;

impl Plugin for BodiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_earth).add_systems(
            Update,
            (spawn_satellites, sync_earth, sync_satellites, draw_meridian)
                .chain()
                .in_set(GameSystemSet::Sync),
        );
    }
}

/// Display color for a satellite tag.
pub fn satellite_color(color: SatelliteColor) -> Color {
    match color {
        SatelliteColor::Red => Color::srgb(1.0, 0.0, 0.0),
        SatelliteColor::Yellow => Color::srgb(1.0, 1.0, 0.0),
        SatelliteColor::Green => Color::srgb(0.0, 1.0, 0.0),
        SatelliteColor::White => Color::WHITE,
        SatelliteColor::Orange => Color::srgb(1.0, 0.65, 0.0),
        SatelliteColor::Cyan => Color::srgb(0.0, 1.0, 1.0),
        SatelliteColor::Magenta => Color::srgb(1.0, 0.0, 1.0),
    }
}

/// Render-space position of a satellite.
pub fn world_position(satellite: &Satellite) -> Vec2 {
    satellite.position.as_vec2()
}

/// Earth orientation for a cosmetic spin angle in degrees.
pub fn earth_rotation(angle_deg: f64) -> Quat {
    Quat::from_rotation_z(angle_deg.to_radians() as f32)
}

/// The playfield is hidden behind the title screen.
pub fn playfield_visible(phase: GamePhase) -> bool {
    phase != GamePhase::Menu
}

fn spawn_earth(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    commands.spawn((
        Mesh2d(meshes.add(Circle::new(EARTH_RADIUS))),
        MeshMaterial2d(materials.add(EARTH_COLOR)),
        Transform::from_xyz(0.0, 0.0, z_layers::EARTH),
        Visibility::Hidden,
        Earth,
    ));
}

/// Spawn one disc per satellite the first frame a run is active.
fn spawn_satellites(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    session: Res<GameSession>,
    existing: Query<(), With<SatelliteVisual>>,
) {
    if !session.is_running() || !existing.is_empty() {
        return;
    }

    let mesh = meshes.add(Circle::new(SATELLITE_RADIUS));

    for (index, satellite) in session.satellites.iter().enumerate() {
        let pos = world_position(satellite);
        commands.spawn((
            Mesh2d(mesh.clone()),
            MeshMaterial2d(materials.add(satellite_color(satellite.color))),
            Transform::from_xyz(pos.x, pos.y, z_layers::SATELLITE),
            SatelliteVisual { index },
        ));
    }

    info!("Spawned {} satellite visuals", session.satellites.len());
}

fn sync_earth(
    session: Res<GameSession>,
    mut earth: Query<(&mut Transform, &mut Visibility), With<Earth>>,
) {
    let Ok((mut transform, mut visibility)) = earth.single_mut() else {
        return;
    };

    transform.rotation = earth_rotation(session.earth_angle);
    *visibility = if playfield_visible(session.phase) {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
}

fn sync_satellites(
    session: Res<GameSession>,
    mut visuals: Query<(&SatelliteVisual, &mut Transform)>,
) {
    for (visual, mut transform) in &mut visuals {
        let Some(satellite) = session.satellites.get(visual.index) else {
            continue;
        };
        let pos = world_position(satellite);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
    }
}

/// A meridian line so the Earth's spin is visible on a flat disc.
fn draw_meridian(mut gizmos: Gizmos, session: Res<GameSession>) {
    if !playfield_visible(session.phase) {
        return;
    }

    let tip = earth_rotation(session.earth_angle) * Vec3::X * EARTH_RADIUS;
    gizmos.line_2d(Vec2::ZERO, tip.truncate(), MERIDIAN_COLOR);
}
