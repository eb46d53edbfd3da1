//! Game-over overlay.
//!
//! Shown once a collision ends the run. The frozen playfield stays visible
//! underneath.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::session::{GamePhase, GameSession};
use crate::ui::icons;

const ALERT_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 80, 80);

/// Text shown on the overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOverSummary {
    pub headline: &'static str,
    pub subtitle: &'static str,
    pub survived: String,
    pub best: String,
}

impl GameOverSummary {
    /// Summary for a finished session, if it is finished.
    pub fn for_session(session: &GameSession) -> Option<Self> {
        if session.phase != GamePhase::GameOver {
            return None;
        }

        Some(Self {
            headline: "COLLISION DETECTED!",
            subtitle: "GAME OVER",
            survived: format!("You survived for {} sec", session.survival_secs()),
            best: format!("Best time: {} sec", session.best_secs()),
        })
    }
}

pub fn game_over_system(mut contexts: EguiContexts, session: Res<GameSession>) -> Result {
    let Some(summary) = GameOverSummary::for_session(&session) else {
        return Ok(());
    };

    let ctx = contexts.ctx_mut()?;

    egui::Window::new("game_over")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(
            egui::Frame::window(&ctx.style())
                .fill(egui::Color32::from_rgba_unmultiplied(40, 20, 20, 240))
                .stroke(egui::Stroke::new(2.0, ALERT_COLOR)),
        )
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(format!("{} {}", icons::WARNING, summary.headline))
                        .size(32.0)
                        .strong()
                        .color(ALERT_COLOR),
                );
                ui.label(
                    egui::RichText::new(summary.subtitle)
                        .size(28.0)
                        .color(ALERT_COLOR),
                );

                ui.add_space(16.0);

                ui.label(
                    egui::RichText::new(summary.survived)
                        .size(20.0)
                        .color(egui::Color32::WHITE),
                );
                ui.label(
                    egui::RichText::new(format!("{} {}", icons::TROPHY, summary.best))
                        .size(20.0)
                        .color(egui::Color32::from_rgb(255, 215, 0)),
                );
            });
        });

    Ok(())
}
