//! Property-based tests for the session using proptest.
//!
//! These check the invariants that must hold for any fleet and any
//! sequence of player actions.

use proptest::prelude::*;

use crate::collision::{ProximityStatus, check_proximity, classify_distance};
use crate::input::{ControlAction, apply_action};
use crate::session::{GamePhase, GameSession, tick};
use crate::test_utils::fixtures;
use crate::types::GameSettings;

fn action_strategy() -> impl Strategy<Value = ControlAction> {
    prop_oneof![
        Just(ControlAction::RaiseOrbit),
        Just(ControlAction::LowerOrbit),
        Just(ControlAction::SpeedUp),
        Just(ControlAction::SlowDown),
        Just(ControlAction::SwitchSatellite),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// No sequence of actions and ticks can push an orbit under the floor.
    #[test]
    fn prop_radius_never_below_floor(
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(), 0..200),
    ) {
        let settings = GameSettings::default();
        let mut rng = fixtures::seeded_rng(seed);
        let mut session = GameSession::new();
        session.start_with_label("Hard", &settings, &mut rng).unwrap();

        for action in actions {
            apply_action(&mut session, action, &settings);
            tick(&mut session, settings.tick_secs(), &settings);
            for sat in &session.satellites {
                prop_assert!(sat.radius >= settings.min_radius);
            }
        }
    }

    /// Switching n times with n satellites returns control to the start.
    #[test]
    fn prop_switch_cycles_back(count in 1usize..10, start_offset in 0usize..10) {
        let sats = (0..count)
            .map(|i| fixtures::orbiting(100.0 + 60.0 * i as f64, 0.0, 0.0))
            .collect();
        let mut session = fixtures::running_session(sats);

        for _ in 0..start_offset {
            session.switch_control();
        }
        let before = session.controlled_index();

        for _ in 0..count {
            session.switch_control();
        }
        prop_assert_eq!(session.controlled_index(), before);
    }

    /// Detector result does not depend on fleet order.
    #[test]
    fn prop_detector_is_order_independent(
        points in prop::collection::vec((-400.0f64..400.0, -400.0f64..400.0), 2..8),
    ) {
        let settings = GameSettings::default();
        let sats: Vec<_> = points.iter().map(|&(x, y)| fixtures::satellite_at(x, y)).collect();
        let mut reversed = sats.clone();
        reversed.reverse();

        prop_assert_eq!(
            check_proximity(&sats, &settings),
            check_proximity(&reversed, &settings)
        );
    }

    /// Classification is monotone in distance.
    #[test]
    fn prop_classification_monotone(a in 0.0f64..200.0, b in 0.0f64..200.0) {
        let settings = GameSettings::default();
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify_distance(near, &settings) >= classify_distance(far, &settings));
    }

    /// A session ends only through a collision, and then stays over.
    #[test]
    fn prop_game_over_only_after_collision(seed in any::<u64>(), ticks in 1usize..2000) {
        let settings = GameSettings::default();
        let mut rng = fixtures::seeded_rng(seed);
        let mut session = GameSession::new();
        session.start_with_label("Medium", &settings, &mut rng).unwrap();

        for _ in 0..ticks {
            tick(&mut session, settings.tick_secs(), &settings);
            if session.phase == GamePhase::GameOver {
                prop_assert_eq!(session.proximity, ProximityStatus::Collision);
                prop_assert!(session.best_time >= session.survival_time);
            }
        }
    }
}
