//! Game session state machine.
//!
//! A session moves through three phases:
//! - Menu: waiting for a difficulty to be picked
//! - Running: satellites advance every fixed tick
//! - GameOver: a collision happened; nothing advances any more
//!
//! All state lives in the [`GameSession`] resource and is mutated only by
//! the pure functions in this module and in [`crate::input`]. The Bevy
//! systems here just feed them the fixed timestep.

mod difficulty;
#[cfg(test)]
mod proptest_session;

use bevy::prelude::*;
use rand::Rng;

pub use difficulty::{Difficulty, DifficultyParseError};

use crate::collision::{ProximityStatus, check_proximity};
use crate::satellite::Satellite;
use crate::types::{GameSettings, GameSystemSet};

/// Current phase of the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Title screen with difficulty buttons.
    #[default]
    Menu,
    /// Satellites are orbiting.
    Running,
    /// Terminal: a collision ended the run.
    GameOver,
}

/// Errors from session transitions.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A new run can only be started from the menu.
    #[error("cannot start a session while {0:?}")]
    NotInMenu(GamePhase),
}

/// Result of a single simulation tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// Session was not running; nothing changed.
    Idle,
    /// Satellites advanced; the fleet is in the given state.
    Advanced(ProximityStatus),
    /// A collision ended the run.
    Collided {
        /// Seconds survived in the run that just ended.
        survival_time: f64,
    },
}

/// The whole mutable game state.
#[derive(Resource, Clone, Debug, Default)]
pub struct GameSession {
    /// Current phase.
    pub phase: GamePhase,
    /// Difficulty of the current (or last) run.
    pub difficulty: Option<Difficulty>,
    /// Active satellites, in fleet order.
    pub satellites: Vec<Satellite>,
    /// Index of the controlled satellite. Valid whenever `phase` is Running.
    controlled: usize,
    /// Seconds survived in the current run.
    ///
    /// Simulated time: the sum of fixed tick intervals. Bevy caps each
    /// frame's delta, so after a long window stall this lags the wall clock.
    pub survival_time: f64,
    /// Longest survival seen during this process. Never persisted.
    pub best_time: f64,
    /// Cosmetic Earth rotation (degrees).
    pub earth_angle: f64,
    /// Classification from the most recent tick.
    pub proximity: ProximityStatus,
    /// Ticks simulated in the current run.
    pub ticks: u64,
}

impl GameSession {
    /// Fresh session sitting in the menu.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh menu session that remembers an earlier best time.
    pub fn with_best_time(best_time: f64) -> Self {
        Self {
            best_time,
            ..Self::default()
        }
    }

    /// Session already running over a prepared fleet.
    ///
    /// Control starts on the first satellite.
    pub fn running_with(satellites: Vec<Satellite>) -> Self {
        Self {
            phase: GamePhase::Running,
            satellites,
            ..Self::default()
        }
    }

    /// Start a run at `difficulty` with a randomly generated fleet.
    pub fn start(
        &mut self,
        difficulty: Difficulty,
        settings: &GameSettings,
        rng: &mut impl Rng,
    ) -> Result<(), SessionError> {
        if self.phase != GamePhase::Menu {
            return Err(SessionError::NotInMenu(self.phase));
        }

        self.satellites = Satellite::fleet(difficulty.satellite_count(), settings, rng);
        self.difficulty = Some(difficulty);
        self.controlled = 0;
        self.survival_time = 0.0;
        self.ticks = 0;
        self.proximity = ProximityStatus::Clear;
        self.phase = GamePhase::Running;

        info!(
            "Session started: {} ({} satellites)",
            difficulty,
            self.satellites.len()
        );
        Ok(())
    }

    /// Start a run from a menu label; unknown labels fall back to Easy.
    pub fn start_with_label(
        &mut self,
        label: &str,
        settings: &GameSettings,
        rng: &mut impl Rng,
    ) -> Result<(), SessionError> {
        self.start(Difficulty::from_label(label), settings, rng)
    }

    /// Whether satellites are currently advancing.
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Index of the controlled satellite, if any.
    pub fn controlled_index(&self) -> Option<usize> {
        (self.controlled < self.satellites.len()).then_some(self.controlled)
    }

    /// The controlled satellite, if any.
    pub fn controlled(&self) -> Option<&Satellite> {
        self.satellites.get(self.controlled)
    }

    /// Mutable access to the controlled satellite, if any.
    pub fn controlled_mut(&mut self) -> Option<&mut Satellite> {
        self.satellites.get_mut(self.controlled)
    }

    /// Hand control to the next satellite, wrapping after the last.
    ///
    /// No-op outside of a running session or with an empty fleet.
    pub fn switch_control(&mut self) {
        if !self.is_running() || self.satellites.is_empty() {
            return;
        }
        self.controlled = (self.controlled + 1) % self.satellites.len();
        debug!("Control switched to satellite {}", self.controlled);
    }

    /// Whole seconds survived, as shown on the HUD.
    pub fn survival_secs(&self) -> u64 {
        self.survival_time as u64
    }

    /// Whole seconds of the best run, as shown on the game-over screen.
    pub fn best_secs(&self) -> u64 {
        self.best_time as u64
    }
}

/// Advance the session by one fixed tick of `dt` seconds.
///
/// Order within a tick: move every satellite, spin the Earth, accumulate
/// survival time, then run the proximity check. A collision records the
/// best time and ends the run.
pub fn tick(session: &mut GameSession, dt: f64, settings: &GameSettings) -> TickOutcome {
    if !session.is_running() {
        return TickOutcome::Idle;
    }

    for satellite in &mut session.satellites {
        satellite.update_position();
    }

    session.earth_angle += settings.earth_spin;
    session.survival_time += dt;
    session.ticks += 1;

    let status = check_proximity(&session.satellites, settings);
    if status == ProximityStatus::Warning && session.proximity != ProximityStatus::Warning {
        debug!("Proximity warning at tick {}", session.ticks);
    }
    session.proximity = status;

    if status.is_collision() {
        let survival_time = session.survival_time;
        if survival_time > session.best_time {
            info!("New best time: {:.1}s", survival_time);
        }
        session.best_time = session.best_time.max(survival_time);
        session.phase = GamePhase::GameOver;
        info!(
            "Collision detected after {:.1}s ({} ticks)",
            survival_time, session.ticks
        );
        return TickOutcome::Collided { survival_time };
    }

    TickOutcome::Advanced(status)
}

/// Plugin driving the session from Bevy's fixed timestep.
///
/// Inserts [`GameSettings`] (unless already present), a fresh
/// [`GameSession`], and configures `Time<Fixed>` to the tick interval.
pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        let settings = app
            .world()
            .get_resource::<GameSettings>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(Time::<Fixed>::from_duration(settings.tick_interval))
            .insert_resource(settings)
            .init_resource::<GameSession>()
            .configure_sets(Update, (GameSystemSet::Input, GameSystemSet::Sync).chain())
            .add_systems(FixedUpdate, advance_session);
    }
}

/// Run one simulation tick per fixed step.
fn advance_session(
    mut session: ResMut<GameSession>,
    settings: Res<GameSettings>,
    time: Res<Time<Fixed>>,
) {
    if !session.is_running() {
        return;
    }
    tick(&mut session, time.timestep().as_secs_f64(), &settings);
}
