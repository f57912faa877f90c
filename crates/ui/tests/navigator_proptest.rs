//! Property-based tests for the navigator state machine.
//! Random gesture/dismiss sequences are checked against a reference model.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]

use proptest::prelude::*;
use ui::direction::{DIR_BOTTOM, DIR_LEFT, DIR_RIGHT, DIR_TOP};
use ui::mocks::RecordingToolkit;
use ui::{Direction, NavigationMode, Navigator, NavigatorConfig, ScreenKind, UiEvent};

#[derive(Debug, Clone, Copy)]
enum Op {
    Swipe(u8),
    Dismiss,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => prop_oneof![Just(DIR_LEFT), Just(DIR_RIGHT), Just(DIR_TOP), Just(DIR_BOTTOM)]
            .prop_map(Op::Swipe),
        1 => any::<u8>().prop_map(Op::Swipe),
        2 => Just(Op::Dismiss),
    ]
}

/// Reference transition table.
fn model(state: ScreenKind, op: Op) -> ScreenKind {
    match (state, op) {
        (ScreenKind::Home, Op::Swipe(code)) => match Direction::from_code(code) {
            Ok(dir) => ScreenKind::from(dir),
            Err(_) => ScreenKind::Home,
        },
        (ScreenKind::Left | ScreenKind::Right | ScreenKind::Top | ScreenKind::Bottom, Op::Dismiss) => {
            ScreenKind::Home
        }
        (other, _) => other,
    }
}

fn apply(nav: &mut Navigator<u16>, tk: &mut RecordingToolkit, op: Op) {
    match op {
        Op::Swipe(code) => {
            tk.set_gesture_code(code);
            let screen = tk.active().unwrap();
            nav.on_event(tk, UiEvent::gesture(screen)).ok();
        }
        Op::Dismiss => {
            if let Some((control, Some(action))) = tk.active_control() {
                nav.on_event(tk, UiEvent::clicked(control, action)).unwrap();
            }
        }
    }
}

proptest! {
    /// Every step lands exactly where the transition table says.
    #[test]
    fn navigation_follows_transition_table(ops in proptest::collection::vec(op(), 0..64)) {
        let mut tk = RecordingToolkit::new();
        let mut nav = Navigator::new(NavigatorConfig::default());
        nav.start(&mut tk).unwrap();
        let mut expected = ScreenKind::Home;

        for op in ops {
            expected = model(expected, op);
            apply(&mut nav, &mut tk, op);
            prop_assert_eq!(nav.current(), expected);
            prop_assert_eq!(tk.active(), nav.active_handle());
            prop_assert_eq!(tk.live_screens(), 1);
        }
    }

    /// Each undecodable code is counted exactly once and changes nothing.
    #[test]
    fn rejected_gestures_are_counted(codes in proptest::collection::vec(any::<u8>(), 0..32)) {
        let mut tk = RecordingToolkit::new();
        let mut nav = Navigator::new(NavigatorConfig::default());
        nav.start(&mut tk).unwrap();

        let mut rejected = 0u32;
        for code in codes {
            let before = nav.current();
            let valid = Direction::from_code(code).is_ok();
            apply(&mut nav, &mut tk, Op::Swipe(code));
            if valid {
                // Leave again so the next swipe starts from home.
                apply(&mut nav, &mut tk, Op::Dismiss);
            } else {
                rejected += 1;
                prop_assert_eq!(nav.current(), before);
            }
            prop_assert_eq!(nav.rejected_gestures(), rejected);
        }
    }

    /// In log-only mode nothing ever leaves the test screen.
    #[test]
    fn log_only_mode_stays_on_test(ops in proptest::collection::vec(op(), 0..64)) {
        let mut tk = RecordingToolkit::new();
        let mut nav = Navigator::new(NavigatorConfig::new(NavigationMode::LogGesturesOnly));
        nav.start(&mut tk).unwrap();
        let test_screen = tk.active();

        for op in ops {
            apply(&mut nav, &mut tk, op);
            prop_assert_eq!(nav.current(), ScreenKind::Test);
            prop_assert_eq!(tk.active(), test_screen);
        }
    }
}
