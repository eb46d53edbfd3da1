//! Orbital Traffic Controller
//!
//! Desktop entry point: an 800x800 window with the Earth in the middle.

use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_egui::EguiPlugin;

use orbital_traffic::camera::CameraPlugin;
use orbital_traffic::input::InputPlugin;
use orbital_traffic::render::RenderPlugin;
use orbital_traffic::session::SessionPlugin;
use orbital_traffic::types::GameSettings;
use orbital_traffic::ui::UiPlugin;
use orbital_traffic::ui::menu::TITLE;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: TITLE.into(),
                        resolution: WindowResolution::new(800u32, 800u32),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: "wgpu=error,naga=warn".into(),
                    level: Level::INFO,
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin::default())
        .insert_resource(ClearColor(Color::BLACK))
        // Settings go in before SessionPlugin so it picks them up
        .insert_resource(GameSettings::default())
        .add_plugins((
            CameraPlugin,
            SessionPlugin,
            InputPlugin,
            RenderPlugin,
            UiPlugin,
        ))
        .run();
}
