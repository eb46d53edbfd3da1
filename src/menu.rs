//! Difficulty buttons on the title screen.
//!
//! Buttons are plain rectangles in world coordinates. Drawing happens in
//! `ui::menu`; hit-testing lives here so it can be tested without a window.

use bevy::math::Vec2;

use crate::session::Difficulty;

/// Button width in world units.
pub const BUTTON_WIDTH: f32 = 160.0;

/// Button height in world units.
pub const BUTTON_HEIGHT: f32 = 40.0;

/// A clickable difficulty button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuButton {
    /// Difficulty started by this button.
    pub difficulty: Difficulty,
    /// Center of the button (label anchor).
    pub center: Vec2,
    /// Full width.
    pub width: f32,
    /// Full height.
    pub height: f32,
}

impl MenuButton {
    /// Button of the standard size centered on `center`.
    pub const fn new(difficulty: Difficulty, center: Vec2) -> Self {
        Self {
            difficulty,
            center,
            width: BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
        }
    }

    /// Text shown on the button.
    pub fn label(&self) -> &'static str {
        self.difficulty.label()
    }

    /// Whether `point` is strictly inside the button. Edges do not count.
    pub fn contains(&self, point: Vec2) -> bool {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        self.center.x - half_w < point.x
            && point.x < self.center.x + half_w
            && self.center.y - half_h < point.y
            && point.y < self.center.y + half_h
    }
}

/// The title screen's buttons, top to bottom.
pub const MENU_BUTTONS: [MenuButton; 3] = [
    MenuButton::new(Difficulty::Easy, Vec2::new(0.0, 0.0)),
    MenuButton::new(Difficulty::Medium, Vec2::new(0.0, -60.0)),
    MenuButton::new(Difficulty::Hard, Vec2::new(0.0, -120.0)),
];

/// First button (in layout order) under `point`.
pub fn button_at(point: Vec2) -> Option<&'static MenuButton> {
    MENU_BUTTONS.iter().find(|button| button.contains(point))
}
