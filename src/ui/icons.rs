//! Phosphor icon font for the egui overlays.
//!
//! Icons are initialized via `setup_fonts` on the first egui pass.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Whether the icon font has been installed into the egui context.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// Install the Phosphor icon font.
/// Runs in EguiPrimaryContextPass where the egui context is ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

/// Stopwatch, next to the survival timer.
pub const TIMER: &str = egui_phosphor::regular::TIMER;
/// Collision banner.
pub const WARNING: &str = egui_phosphor::regular::WARNING;
/// Best time.
pub const TROPHY: &str = egui_phosphor::regular::TROPHY;
