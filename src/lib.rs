//! Orbital Traffic Controller
//!
//! A small arcade game: satellites circle the Earth and the player steers
//! one of them at a time to keep the fleet apart. The simulation core is
//! plain data plus pure functions; the Bevy plugins only feed it input and
//! draw the result.

pub mod camera;
pub mod collision;
pub mod input;
pub mod menu;
pub mod render;
pub mod satellite;
pub mod session;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
