//! Input handling: key bindings and menu clicks.
//!
//! Keys are looked up in a [`KeyBindings`] dispatch table and turned into
//! [`ControlAction`]s, which [`apply_action`] applies to the session.
//! Mouse clicks on the title screen are hit-tested against the menu
//! buttons and start a run.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use rand::Rng;

use crate::camera::MainCamera;
use crate::menu::button_at;
use crate::session::{Difficulty, GamePhase, GameSession};
use crate::types::{GameSettings, GameSystemSet};

/// A player command aimed at the controlled satellite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlAction {
    /// Move the orbit outward.
    RaiseOrbit,
    /// Move the orbit inward (stops at the floor).
    LowerOrbit,
    /// Increase angular speed.
    SpeedUp,
    /// Decrease angular speed.
    SlowDown,
    /// Hand control to the next satellite.
    SwitchSatellite,
}

/// Key → action dispatch table.
#[derive(Resource, Clone, Debug)]
pub struct KeyBindings {
    bindings: Vec<(KeyCode, ControlAction)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            bindings: vec![
                (KeyCode::KeyW, ControlAction::RaiseOrbit),
                (KeyCode::KeyS, ControlAction::LowerOrbit),
                (KeyCode::KeyA, ControlAction::SpeedUp),
                (KeyCode::KeyD, ControlAction::SlowDown),
                (KeyCode::Space, ControlAction::SwitchSatellite),
            ],
        }
    }
}

impl KeyBindings {
    /// Action bound to `key`, if any.
    pub fn action_for(&self, key: KeyCode) -> Option<ControlAction> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, action)| *action)
    }

    /// Bind `key` to `action`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: KeyCode, action: ControlAction) {
        self.bindings.retain(|(bound, _)| *bound != key);
        self.bindings.push((key, action));
    }

    /// All bindings in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = &(KeyCode, ControlAction)> {
        self.bindings.iter()
    }
}

/// Apply one action to the session.
///
/// Only a running session reacts; in the menu or after game over every
/// action is ignored.
pub fn apply_action(session: &mut GameSession, action: ControlAction, settings: &GameSettings) {
    if !session.is_running() {
        return;
    }

    if action == ControlAction::SwitchSatellite {
        session.switch_control();
        return;
    }

    let Some(satellite) = session.controlled_mut() else {
        return;
    };

    match action {
        ControlAction::RaiseOrbit => satellite.raise_orbit(settings.radius_step),
        ControlAction::LowerOrbit => {
            satellite.lower_orbit(settings.radius_step, settings.min_radius)
        }
        ControlAction::SpeedUp => satellite.angular_speed += settings.speed_step,
        ControlAction::SlowDown => satellite.angular_speed -= settings.speed_step,
        ControlAction::SwitchSatellite => {}
    }
}

/// Handle a click at `point` (world coordinates) on the title screen.
///
/// Returns the difficulty that was started, if the click hit a button.
pub fn handle_menu_click(
    session: &mut GameSession,
    point: Vec2,
    settings: &GameSettings,
    rng: &mut impl Rng,
) -> Option<Difficulty> {
    if session.phase != GamePhase::Menu {
        return None;
    }

    let button = button_at(point)?;
    match session.start(button.difficulty, settings, rng) {
        Ok(()) => Some(button.difficulty),
        Err(err) => {
            warn!("Ignoring menu click: {err}");
            None
        }
    }
}

/// Plugin providing keyboard controls and menu clicks.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyBindings>().add_systems(
            Update,
            (keyboard_controls, menu_click).in_set(GameSystemSet::Input),
        );
    }
}

/// Actions for this frame's presses, in binding-table order.
pub fn pressed_actions(keys: &ButtonInput<KeyCode>, bindings: &KeyBindings) -> Vec<ControlAction> {
    bindings
        .iter()
        .filter(|(key, _)| keys.just_pressed(*key))
        .map(|(_, action)| *action)
        .collect()
}

/// Dispatch this frame's presses through the binding table.
fn keyboard_controls(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    settings: Res<GameSettings>,
    mut session: ResMut<GameSession>,
) {
    if !session.is_running() {
        return;
    }

    for action in pressed_actions(&keys, &bindings) {
        apply_action(&mut session, action, &settings);
    }
}

/// Start a run when a difficulty button is clicked.
fn menu_click(
    mouse: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    settings: Res<GameSettings>,
    mut session: ResMut<GameSession>,
) {
    if session.phase != GamePhase::Menu || !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    let Ok(window) = window_query.single() else {
        return;
    };

    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };

    let Ok(world_pos) = camera.viewport_to_world_2d(camera_transform, cursor_pos) else {
        return;
    };

    let mut rng = rand::rng();
    if let Some(difficulty) = handle_menu_click(&mut session, world_pos, &settings, &mut rng) {
        info!("Menu: {} selected", difficulty);
    }
}
