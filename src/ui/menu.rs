//! Title screen: title, key help and difficulty buttons.
//!
//! The screen is drawn in world space so the button rectangles line up with
//! the hit-test in [`crate::menu`]. Labels are `Text2d` entities spawned at
//! startup and despawned as soon as a run starts; button frames are gizmos.

use bevy::math::Isometry2d;
use bevy::prelude::*;

use crate::input::{ControlAction, KeyBindings};
use crate::menu::MENU_BUTTONS;
use crate::render::z_layers;
use crate::session::{GamePhase, GameSession};

/// Window and title-screen heading.
pub const TITLE: &str = "Orbital Traffic Controller";

const TITLE_POS: Vec2 = Vec2::new(0.0, 200.0);
const INSTRUCTIONS_POS: Vec2 = Vec2::new(0.0, 100.0);

const TITLE_FONT_SIZE: f32 = 36.0;
const INSTRUCTIONS_FONT_SIZE: f32 = 18.0;
const BUTTON_FONT_SIZE: f32 = 22.0;

const BUTTON_FRAME_COLOR: Color = Color::srgb(0.7, 0.7, 0.7);

/// Marker for every title-screen text entity.
#[derive(Component)]
pub struct MenuText;

fn action_label(action: ControlAction) -> &'static str {
    match action {
        ControlAction::RaiseOrbit => "raise orbit",
        ControlAction::LowerOrbit => "lower orbit",
        ControlAction::SpeedUp => "speed up",
        ControlAction::SlowDown => "slow down",
        ControlAction::SwitchSatellite => "switch satellite",
    }
}

fn key_label(key: KeyCode) -> String {
    let name = format!("{key:?}");
    name.strip_prefix("Key").unwrap_or(&name).to_string()
}

/// One help line per binding, in table order.
pub fn instructions(bindings: &KeyBindings) -> String {
    bindings
        .iter()
        .map(|(key, action)| format!("{}: {}", key_label(*key), action_label(*action)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn spawn_menu_text(mut commands: Commands, bindings: Res<KeyBindings>) {
    let label = |text: String, pos: Vec2, size: f32| {
        (
            Text2d::new(text),
            TextFont {
                font_size: size,
                ..default()
            },
            TextColor(Color::WHITE),
            Transform::from_xyz(pos.x, pos.y, z_layers::MENU),
            MenuText,
        )
    };

    commands.spawn(label(TITLE.to_string(), TITLE_POS, TITLE_FONT_SIZE));
    commands.spawn(label(
        instructions(&bindings),
        INSTRUCTIONS_POS,
        INSTRUCTIONS_FONT_SIZE,
    ));
    for button in &MENU_BUTTONS {
        commands.spawn(label(
            button.label().to_string(),
            button.center,
            BUTTON_FONT_SIZE,
        ));
    }
}

pub fn draw_menu_buttons(mut gizmos: Gizmos, session: Res<GameSession>) {
    if session.phase != GamePhase::Menu {
        return;
    }

    for button in &MENU_BUTTONS {
        gizmos.rect_2d(
            Isometry2d::from_translation(button.center),
            Vec2::new(button.width, button.height),
            BUTTON_FRAME_COLOR,
        );
    }
}

/// Remove the title screen once the session leaves the menu.
pub fn despawn_menu_text(
    mut commands: Commands,
    session: Res<GameSession>,
    texts: Query<Entity, With<MenuText>>,
) {
    if session.phase == GamePhase::Menu {
        return;
    }

    for entity in &texts {
        commands.entity(entity).despawn();
    }
}
