//! Navigator scenarios driven through `on_event`, the way the firmware
//! delivers toolkit events between ticks.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use ui::direction::{DIR_BOTTOM, DIR_LEFT, DIR_RIGHT, DIR_TOP};
use ui::mocks::RecordingToolkit;
use ui::screen::{PALETTE_GREEN, PALETTE_LIGHT_BLUE};
use ui::{
    Action, NavError, NavigationMode, Navigator, NavigatorConfig, ScreenKind, Toolkit, UiEvent,
};

fn navigator(mode: NavigationMode) -> (Navigator<u16>, RecordingToolkit) {
    let mut tk = RecordingToolkit::new();
    let mut nav = Navigator::new(NavigatorConfig::new(mode));
    nav.start(&mut tk).expect("initial screen");
    (nav, tk)
}

/// Swipe on the active screen with `code` as the decoded direction.
fn swipe(
    nav: &mut Navigator<u16>,
    tk: &mut RecordingToolkit,
    code: u8,
) -> Result<Option<ScreenKind>, NavError> {
    tk.set_gesture_code(code);
    let screen = tk.active().expect("active screen");
    nav.on_event(tk, UiEvent::gesture(screen))
}

/// Click the dismiss control of the active screen.
fn dismiss(nav: &mut Navigator<u16>, tk: &mut RecordingToolkit) -> Result<Option<ScreenKind>, NavError> {
    let (control, action) = tk.active_control().expect("dismiss control");
    nav.on_event(tk, UiEvent::clicked(control, action.expect("bound action")))
}

// ---------------------------------------------------------------------------
// Scenario: HOME → swipe RIGHT → dismiss → HOME
// ---------------------------------------------------------------------------

#[test]
fn right_swipe_then_dismiss_returns_home() {
    let (mut nav, mut tk) = navigator(NavigationMode::Navigate);

    assert_eq!(swipe(&mut nav, &mut tk, DIR_RIGHT), Ok(Some(ScreenKind::Right)));
    assert_eq!(nav.current(), ScreenKind::Right);
    assert_eq!(tk.active_label(), Some("LV_DIR_RIGHT (2)"));

    let right = nav.handle(ScreenKind::Right).unwrap();
    assert_eq!(dismiss(&mut nav, &mut tk), Ok(Some(ScreenKind::Home)));
    assert_eq!(nav.current(), ScreenKind::Home);
    assert_eq!(tk.active_label(), Some("Swipe to test!"));
    assert_eq!(tk.active_background(), Some(PALETTE_GREEN));
    assert_eq!(tk.destroyed_screens(), &[right]);
    assert!(!tk.is_live(right));
}

// ---------------------------------------------------------------------------
// Scenario: HOME → gesture code 99 → still HOME, one error
// ---------------------------------------------------------------------------

#[test]
fn invalid_code_keeps_home_and_reports_once() {
    let (mut nav, mut tk) = navigator(NavigationMode::Navigate);
    let home = tk.active();

    assert_eq!(
        swipe(&mut nav, &mut tk, 99),
        Err(NavError::UnknownDirection(99))
    );
    assert_eq!(nav.current(), ScreenKind::Home);
    assert_eq!(tk.active(), home);
    assert_eq!(nav.rejected_gestures(), 1);
}

#[test]
fn every_direction_opens_its_screen() {
    let cases = [
        (DIR_LEFT, ScreenKind::Left, "LV_DIR_LEFT (1)"),
        (DIR_RIGHT, ScreenKind::Right, "LV_DIR_RIGHT (2)"),
        (DIR_TOP, ScreenKind::Top, "LV_DIR_TOP (3)"),
        (DIR_BOTTOM, ScreenKind::Bottom, "LV_DIR_BOTTOM (4)"),
    ];
    for (code, kind, label) in cases {
        let (mut nav, mut tk) = navigator(NavigationMode::Navigate);
        assert_eq!(swipe(&mut nav, &mut tk, code), Ok(Some(kind)));
        assert_eq!(tk.active_label(), Some(label));
        assert_eq!(tk.controls_on_active(), 1);
        assert_eq!(
            tk.active_control().and_then(|(_, a)| a),
            Some(Action::Dismiss(kind))
        );
    }
}

#[test]
fn gesture_waits_for_release() {
    let (mut nav, mut tk) = navigator(NavigationMode::Navigate);
    swipe(&mut nav, &mut tk, DIR_TOP).unwrap();
    assert_eq!(tk.wait_release_calls(), 1);
}

#[test]
fn invalid_gesture_still_waits_for_release() {
    let (mut nav, mut tk) = navigator(NavigationMode::Navigate);
    swipe(&mut nav, &mut tk, 0).ok();
    assert_eq!(tk.wait_release_calls(), 1);
}

#[test]
fn dismissed_handle_cannot_be_dismissed_again() {
    let (mut nav, mut tk) = navigator(NavigationMode::Navigate);
    swipe(&mut nav, &mut tk, DIR_LEFT).unwrap();
    let (control, action) = tk.active_control().unwrap();
    let action = action.unwrap();

    assert_eq!(
        nav.on_event(&mut tk, UiEvent::clicked(control, action)),
        Ok(Some(ScreenKind::Home))
    );
    let home = tk.active();
    // A late duplicate click from the destroyed control.
    assert_eq!(nav.on_event(&mut tk, UiEvent::clicked(control, action)), Ok(None));
    assert_eq!(tk.active(), home);
    assert_eq!(nav.handle(ScreenKind::Left), None);
    assert_eq!(tk.destroyed_screens().len(), 1);
}

#[test]
fn gesture_for_retired_screen_is_ignored() {
    let (mut nav, mut tk) = navigator(NavigationMode::Navigate);
    let old_home = tk.active().unwrap();
    swipe(&mut nav, &mut tk, DIR_LEFT).unwrap();
    dismiss(&mut nav, &mut tk).unwrap();

    tk.set_gesture_code(DIR_RIGHT);
    assert_eq!(nav.on_event(&mut tk, UiEvent::gesture(old_home)), Ok(None));
    assert_eq!(nav.current(), ScreenKind::Home);
}

#[test]
fn only_one_screen_is_ever_alive() {
    let (mut nav, mut tk) = navigator(NavigationMode::Navigate);
    for code in [DIR_LEFT, DIR_RIGHT, DIR_TOP, DIR_BOTTOM] {
        swipe(&mut nav, &mut tk, code).unwrap();
        assert_eq!(tk.live_screens(), 1);
        dismiss(&mut nav, &mut tk).unwrap();
        assert_eq!(tk.live_screens(), 1);
        assert_eq!(nav.handles().live(), 1);
    }
}

// ---------------------------------------------------------------------------
// Log-gestures-only mode
// ---------------------------------------------------------------------------

#[test]
fn log_only_mode_starts_on_test_screen() {
    let (nav, tk) = navigator(NavigationMode::LogGesturesOnly);
    assert_eq!(nav.current(), ScreenKind::Test);
    assert_eq!(tk.active_background(), Some(PALETTE_LIGHT_BLUE));
    assert_eq!(tk.active_label(), Some("Swipe to test!"));
}

#[test]
fn log_only_mode_never_transitions() {
    let (mut nav, mut tk) = navigator(NavigationMode::LogGesturesOnly);
    let test_screen = tk.active();
    for code in [DIR_LEFT, DIR_RIGHT, DIR_TOP, DIR_BOTTOM, DIR_LEFT] {
        assert_eq!(swipe(&mut nav, &mut tk, code), Ok(None));
    }
    assert_eq!(nav.current(), ScreenKind::Test);
    assert_eq!(tk.active(), test_screen);
    assert_eq!(tk.wait_release_calls(), 0);
}

#[test]
fn log_only_mode_still_reports_bad_codes() {
    let (mut nav, mut tk) = navigator(NavigationMode::LogGesturesOnly);
    assert_eq!(
        swipe(&mut nav, &mut tk, 0x0F),
        Err(NavError::UnknownDirection(0x0F))
    );
    assert_eq!(nav.rejected_gestures(), 1);
    assert_eq!(nav.current(), ScreenKind::Test);
}

#[test]
fn gesture_without_input_device_is_ignored() {
    let mut tk = RecordingToolkit::without_pointer();
    let mut nav = Navigator::new(NavigatorConfig::default());
    nav.start(&mut tk).unwrap();
    tk.set_gesture_code(DIR_LEFT);
    let screen = tk.active().unwrap();
    assert_eq!(nav.on_event(&mut tk, UiEvent::gesture(screen)), Ok(None));
    assert!(tk.active_input_device().is_none());
}
