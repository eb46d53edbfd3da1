//! Survival timer in the top-left corner.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::session::{GamePhase, GameSession};
use crate::ui::icons;

/// Screen position of the timer, in logical pixels from the top-left.
const HUD_POS: egui::Pos2 = egui::pos2(50.0, 50.0);

const HUD_FONT_SIZE: f32 = 20.0;

/// Timer text once a run has started. The final time stays up after game over.
pub fn hud_text(session: &GameSession) -> Option<String> {
    (session.phase != GamePhase::Menu).then(|| format!("Time: {}s", session.survival_secs()))
}

pub fn hud_system(mut contexts: EguiContexts, session: Res<GameSession>) -> Result {
    let Some(text) = hud_text(&session) else {
        return Ok(());
    };

    let ctx = contexts.ctx_mut()?;

    egui::Area::new(egui::Id::new("survival_timer"))
        .fixed_pos(HUD_POS)
        .interactable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(icons::TIMER)
                        .size(HUD_FONT_SIZE)
                        .color(egui::Color32::WHITE),
                );
                ui.label(
                    egui::RichText::new(text)
                        .size(HUD_FONT_SIZE)
                        .color(egui::Color32::WHITE),
                );
            });
        });

    Ok(())
}
