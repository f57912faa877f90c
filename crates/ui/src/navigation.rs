//! Navigation state machine: which screen is active, and how events move it.
//!
//! ```text
//!            swipe L/R/T/B
//!   HOME ───────────────────▶ LEFT | RIGHT | TOP | BOTTOM
//!    ▲                                   │
//!    └────────── dismiss control ────────┘
//! ```
//!
//! In [`NavigationMode::LogGesturesOnly`] the machine starts on TEST and
//! swipes are decoded and logged without ever leaving it.
//!
//! [`NavigationMode::LogGesturesOnly`]: crate::NavigationMode::LogGesturesOnly

use crate::config::NavigatorConfig;
use crate::direction::Direction;
use crate::error::NavError;
use crate::screen::ScreenKind;
use crate::toolkit::{Action, EventKind, Toolkit, ToolkitError, UiEvent};

/// One handle slot per [`ScreenKind`].
///
/// A slot is filled when its screen is created and emptied when the screen is
/// destroyed or retired by loading another one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenHandles<H> {
    slots: [Option<H>; 6],
}

impl<H: Copy + Eq> ScreenHandles<H> {
    /// All slots empty.
    pub const fn new() -> Self {
        Self { slots: [None; 6] }
    }

    /// Handle held for `kind`.
    pub fn get(&self, kind: ScreenKind) -> Option<H> {
        self.slots.get(kind.index()).copied().flatten()
    }

    /// Store `handle` for `kind`, returning what was there.
    pub fn set(&mut self, kind: ScreenKind, handle: H) -> Option<H> {
        self.slots
            .get_mut(kind.index())
            .and_then(|slot| slot.replace(handle))
    }

    /// Empty the slot for `kind`, returning its handle.
    pub fn take(&mut self, kind: ScreenKind) -> Option<H> {
        self.slots.get_mut(kind.index()).and_then(Option::take)
    }

    /// Number of filled slots.
    pub fn live(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

impl<H: Copy + Eq> Default for ScreenHandles<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Screen navigator.
///
/// Owns the screen handles; the toolkit is passed into every call so the
/// navigator can be driven from the same loop that ticks the toolkit.
pub struct Navigator<H> {
    config: NavigatorConfig,
    current: ScreenKind,
    handles: ScreenHandles<H>,
    rejected_gestures: u32,
}

impl<H: Copy + Eq> Navigator<H> {
    /// Navigator that has not created anything yet.
    pub const fn new(config: NavigatorConfig) -> Self {
        Self {
            config,
            current: config.initial_screen(),
            handles: ScreenHandles::new(),
            rejected_gestures: 0,
        }
    }

    /// Settings this navigator was built with.
    pub const fn config(&self) -> NavigatorConfig {
        self.config
    }

    /// Screen that is (or, before [`start`](Self::start), will be) active.
    #[must_use]
    pub const fn current(&self) -> ScreenKind {
        self.current
    }

    /// Handle of the active screen, `None` before `start`.
    #[must_use]
    pub fn active_handle(&self) -> Option<H> {
        self.handles.get(self.current)
    }

    /// Handle held for `kind`.
    #[must_use]
    pub fn handle(&self, kind: ScreenKind) -> Option<H> {
        self.handles.get(kind)
    }

    /// All handle slots.
    pub const fn handles(&self) -> &ScreenHandles<H> {
        &self.handles
    }

    /// How many gestures carried a direction code that could not be decoded.
    #[must_use]
    pub const fn rejected_gestures(&self) -> u32 {
        self.rejected_gestures
    }

    /// Create the initial screen for the configured mode.
    pub fn start<T>(&mut self, tk: &mut T) -> Result<H, NavError>
    where
        T: Toolkit<Handle = H>,
    {
        #[cfg(feature = "defmt")]
        defmt::info!("Navigator starting in {} mode", self.config.mode);
        #[cfg(feature = "tracing")]
        tracing::info!("Navigator starting in {} mode", self.config.mode);
        self.create_screen(tk, self.config.initial_screen())
    }

    /// Build `kind` from its [`ScreenSpec`](crate::ScreenSpec) and make it
    /// the active screen.
    ///
    /// The screen is fully built before it is loaded. On failure the partial
    /// screen is destroyed and the previous screen stays active. Loading the
    /// new screen retires the old one inside the toolkit, and its slot is
    /// emptied.
    pub fn create_screen<T>(&mut self, tk: &mut T, kind: ScreenKind) -> Result<H, NavError>
    where
        T: Toolkit<Handle = H>,
    {
        let screen = Self::build_screen(tk, kind)?;
        if let Err(e) = tk.load_screen(screen) {
            let _ = tk.destroy_screen(screen);
            return Err(e.into());
        }
        self.commit(kind, screen);
        Ok(screen)
    }

    /// Create and style `kind` without loading it.
    fn build_screen<T>(tk: &mut T, kind: ScreenKind) -> Result<H, NavError>
    where
        T: Toolkit<Handle = H>,
    {
        #[cfg(feature = "defmt")]
        defmt::debug!("Creating {} screen", kind);
        #[cfg(feature = "tracing")]
        tracing::debug!("Creating {} screen", kind);

        let screen = tk.create_screen()?;
        if let Err(e) = Self::populate(tk, screen, kind) {
            let _ = tk.destroy_screen(screen);
            return Err(e.into());
        }
        Ok(screen)
    }

    fn populate<T>(tk: &mut T, screen: H, kind: ScreenKind) -> Result<(), ToolkitError>
    where
        T: Toolkit<Handle = H>,
    {
        let spec = kind.spec();
        tk.set_background_color(screen, spec.background)?;
        tk.set_text_color(screen, spec.text)?;

        let parent = if spec.dismissable && tk.supports_pointer() {
            let control = tk.create_dismiss_control(screen)?;
            tk.center(control)?;
            tk.bind_activation(control, Action::Dismiss(kind))?;
            control
        } else {
            screen
        };

        let label = tk.create_label(parent)?;
        tk.set_label_text(label, spec.label)?;
        tk.center(label)?;

        if spec.listens_gestures {
            tk.listen_gestures(screen)?;
        }
        Ok(())
    }

    /// Record `screen` as the loaded screen for `kind`.
    fn commit(&mut self, kind: ScreenKind, screen: H) {
        if kind != self.current {
            self.handles.take(self.current);
        }
        self.handles.set(kind, screen);
        self.current = kind;
    }

    /// Route one toolkit event.
    ///
    /// Returns the new active screen when the event caused a transition.
    ///
    /// # Errors
    ///
    /// [`NavError::UnknownDirection`] when a gesture could not be decoded
    /// (state is unchanged), [`NavError::Toolkit`] when building a screen
    /// failed.
    pub fn on_event<T>(
        &mut self,
        tk: &mut T,
        event: UiEvent<H>,
    ) -> Result<Option<ScreenKind>, NavError>
    where
        T: Toolkit<Handle = H>,
    {
        match event.kind {
            EventKind::Gesture => self.on_gesture_event(tk, event.target),
            EventKind::Clicked(Action::Dismiss(kind)) => self.on_dismiss(tk, kind),
        }
    }

    fn on_gesture_event<T>(
        &mut self,
        tk: &mut T,
        target: H,
    ) -> Result<Option<ScreenKind>, NavError>
    where
        T: Toolkit<Handle = H>,
    {
        #[cfg(feature = "defmt")]
        defmt::debug!("Gesture event detected on {} screen", self.current);
        #[cfg(feature = "tracing")]
        tracing::debug!("Gesture event detected on {} screen", self.current);
        if self.active_handle() != Some(target) || !self.current.spec().listens_gestures {
            return Ok(None);
        }
        let Some(indev) = tk.active_input_device() else {
            return Ok(None);
        };

        let code = tk.gesture_direction(indev);
        let outcome = self.on_gesture(tk, code);
        if self.config.transitions_enabled() {
            // The release that ends this swipe must not click the new screen.
            tk.wait_release(indev);
        }
        outcome
    }

    /// Apply the transition table to a raw direction code.
    ///
    /// # Errors
    ///
    /// [`NavError::UnknownDirection`] for codes outside the four directions;
    /// the error is logged and counted, the active screen is unchanged.
    pub fn on_gesture<T>(&mut self, tk: &mut T, code: u8) -> Result<Option<ScreenKind>, NavError>
    where
        T: Toolkit<Handle = H>,
    {
        let dir = match Direction::from_code(code) {
            Ok(dir) => dir,
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::error!("Not a valid gesture code: {}", code);
                #[cfg(feature = "tracing")]
                tracing::error!("Not a valid gesture code: {}", code);
                self.rejected_gestures = self.rejected_gestures.saturating_add(1);
                return Err(e);
            }
        };
        #[cfg(feature = "defmt")]
        defmt::debug!("{} gesture detected", dir);
        #[cfg(feature = "tracing")]
        tracing::debug!("{} gesture detected", dir);

        if !self.config.transitions_enabled() || self.current != ScreenKind::Home {
            return Ok(None);
        }
        let next = ScreenKind::from(dir);
        self.create_screen(tk, next)?;
        Ok(Some(next))
    }

    /// Leave `kind` through its dismiss control and rebuild home.
    ///
    /// Only the active, still-alive screen can be dismissed; a repeated or
    /// misdirected dismiss is ignored. Home is built before the dismissed
    /// screen is destroyed, so a failed build leaves `kind` active.
    pub fn on_dismiss<T>(
        &mut self,
        tk: &mut T,
        kind: ScreenKind,
    ) -> Result<Option<ScreenKind>, NavError>
    where
        T: Toolkit<Handle = H>,
    {
        #[cfg(feature = "defmt")]
        defmt::debug!("Button press {}", kind);
        #[cfg(feature = "tracing")]
        tracing::debug!("Button press {}", kind);
        if kind != self.current || !kind.spec().dismissable {
            return Ok(None);
        }
        let Some(screen) = self.handles.get(kind) else {
            return Ok(None);
        };

        let home = Self::build_screen(tk, ScreenKind::Home)?;
        if let Err(e) = tk.destroy_screen(screen) {
            let _ = tk.destroy_screen(home);
            return Err(e.into());
        }
        self.handles.take(kind);
        if let Err(e) = tk.load_screen(home) {
            let _ = tk.destroy_screen(home);
            return Err(e.into());
        }
        self.commit(ScreenKind::Home, home);
        Ok(Some(ScreenKind::Home))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::NavigationMode;
    use crate::direction::{DIR_LEFT, DIR_RIGHT, DIR_TOP};
    use crate::mocks::RecordingToolkit;

    fn started(mode: NavigationMode) -> (Navigator<u16>, RecordingToolkit) {
        let mut tk = RecordingToolkit::new();
        let mut nav = Navigator::new(NavigatorConfig::new(mode));
        nav.start(&mut tk).ok();
        (nav, tk)
    }

    #[test]
    fn test_nav_starts_at_home() {
        let (nav, tk) = started(NavigationMode::Navigate);
        assert_eq!(nav.current(), ScreenKind::Home);
        assert_eq!(tk.active(), nav.active_handle());
        assert_eq!(tk.active_label(), Some("Swipe to test!"));
    }

    #[test]
    fn test_nav_before_start_has_no_handle() {
        let nav: Navigator<u16> = Navigator::new(NavigatorConfig::default());
        assert_eq!(nav.current(), ScreenKind::Home);
        assert_eq!(nav.active_handle(), None);
    }

    #[test]
    fn test_swipe_left_opens_left_screen() {
        let (mut nav, mut tk) = started(NavigationMode::Navigate);
        assert_eq!(nav.on_gesture(&mut tk, DIR_LEFT), Ok(Some(ScreenKind::Left)));
        assert_eq!(nav.current(), ScreenKind::Left);
        assert_eq!(tk.active_label(), Some("LV_DIR_LEFT (1)"));
    }

    #[test]
    fn test_control_is_centered() {
        let (mut nav, mut tk) = started(NavigationMode::Navigate);
        nav.on_gesture(&mut tk, DIR_LEFT).ok();
        let (control, _) = tk.active_control().unwrap();
        assert!(tk.object(control).is_some_and(|o| o.centered));
    }

    #[test]
    fn test_gesture_away_from_home_is_ignored() {
        let (mut nav, mut tk) = started(NavigationMode::Navigate);
        nav.on_gesture(&mut tk, DIR_TOP).ok();
        assert_eq!(nav.on_gesture(&mut tk, DIR_RIGHT), Ok(None));
        assert_eq!(nav.current(), ScreenKind::Top);
    }

    #[test]
    fn test_home_slot_retired_when_leaving_home() {
        let (mut nav, mut tk) = started(NavigationMode::Navigate);
        let home = nav.handle(ScreenKind::Home);
        nav.on_gesture(&mut tk, DIR_RIGHT).ok();
        assert_eq!(nav.handle(ScreenKind::Home), None);
        assert!(home.is_some_and(|h| !tk.is_live(h)));
        assert_eq!(nav.handles().live(), 1);
    }

    #[test]
    fn test_dismiss_wrong_screen_is_ignored() {
        let (mut nav, mut tk) = started(NavigationMode::Navigate);
        nav.on_gesture(&mut tk, DIR_LEFT).ok();
        assert_eq!(nav.on_dismiss(&mut tk, ScreenKind::Right), Ok(None));
        assert_eq!(nav.current(), ScreenKind::Left);
    }

    #[test]
    fn test_dismiss_home_is_ignored() {
        let (mut nav, mut tk) = started(NavigationMode::Navigate);
        let before = nav.active_handle();
        assert_eq!(nav.on_dismiss(&mut tk, ScreenKind::Home), Ok(None));
        assert_eq!(nav.active_handle(), before);
    }

    #[test]
    fn test_no_pointer_means_no_dismiss_control() {
        let mut tk = RecordingToolkit::without_pointer();
        let mut nav = Navigator::new(NavigatorConfig::default());
        nav.start(&mut tk).ok();
        nav.on_gesture(&mut tk, DIR_LEFT).ok();
        assert_eq!(tk.controls_on_active(), 0);
        assert_eq!(tk.active_label(), Some("LV_DIR_LEFT (1)"));
    }

    #[test]
    fn test_toolkit_failure_is_reported() {
        let mut tk = RecordingToolkit::with_capacity(4);
        let mut nav = Navigator::new(NavigatorConfig::default());
        assert!(matches!(nav.start(&mut tk), Ok(_)));
        let home = nav.active_handle();

        // Home stays live while Left is built; its label does not fit.
        assert_eq!(
            nav.on_gesture(&mut tk, DIR_LEFT),
            Err(NavError::Toolkit(ToolkitError::OutOfObjects))
        );
        assert_eq!(nav.current(), ScreenKind::Home);
        assert_eq!(nav.active_handle(), home);
        assert_eq!(tk.active(), home);
        assert_eq!(tk.active_label(), Some("Swipe to test!"));
        assert_eq!(nav.handles().live(), 1);
        // The half-built screen was thrown away.
        assert_eq!(tk.live_screens(), 1);
        assert_eq!(tk.destroyed_screens().len(), 1);
    }

    #[test]
    fn test_failed_dismiss_keeps_screen() {
        let (mut nav, mut tk) = started(NavigationMode::Navigate);
        nav.on_gesture(&mut tk, DIR_LEFT).ok();
        let left = nav.active_handle();
        tk.set_capacity(4);

        assert_eq!(
            nav.on_dismiss(&mut tk, ScreenKind::Left),
            Err(NavError::Toolkit(ToolkitError::OutOfObjects))
        );
        assert_eq!(nav.current(), ScreenKind::Left);
        assert_eq!(nav.active_handle(), left);
        assert_eq!(tk.active(), left);
        assert_eq!(tk.active_label(), Some("LV_DIR_LEFT (1)"));
        assert_eq!(tk.controls_on_active(), 1);
        assert_eq!(tk.live_screens(), 1);

        // With room again the same dismiss goes through.
        tk.set_capacity(64);
        assert_eq!(nav.on_dismiss(&mut tk, ScreenKind::Left), Ok(Some(ScreenKind::Home)));
        assert_eq!(tk.active_label(), Some("Swipe to test!"));
    }
}
