//! Text and overlays.
//!
//! The title screen is world-space `Text2d`; the in-game timer and the
//! game-over screen are egui overlays.

pub mod game_over;
pub mod hud;
pub mod icons;
pub mod menu;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use game_over::GameOverSummary;
pub use menu::MenuText;

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            .add_systems(Startup, menu::spawn_menu_text)
            .add_systems(
                Update,
                (menu::draw_menu_buttons, menu::despawn_menu_text),
            )
            // Fonts must be in place before anything renders an icon
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (hud::hud_system, game_over::game_over_system)
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}
