//! Difficulty tiers selectable from the menu.

use std::fmt;
use std::str::FromStr;

use bevy::log::warn;

/// Error returned when a label names no known difficulty.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown difficulty label {0:?}")]
pub struct DifficultyParseError(pub String);

/// Difficulty tier. Only the satellite count changes between tiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers in menu order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Number of satellites launched for this tier.
    pub fn satellite_count(&self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 5,
            Difficulty::Hard => 7,
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Resolve a menu label, falling back to Easy for anything unknown.
    ///
    /// Labels must match exactly; "medium" is not "Medium".
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_else(|err: DifficultyParseError| {
            warn!("{err}, defaulting to {}", Difficulty::default().label());
            Difficulty::default()
        })
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| DifficultyParseError(s.to_string()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
