//! Navigation mode, chosen once at startup.

use core::str::FromStr;

use crate::screen::ScreenKind;

/// How gestures are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavigationMode {
    /// Swipes on the home screen open the matching direction screen.
    #[default]
    Navigate,
    /// Start on the test screen; swipes are decoded and logged only.
    LogGesturesOnly,
}

impl NavigationMode {
    /// Name accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            NavigationMode::Navigate => "navigate",
            NavigationMode::LogGesturesOnly => "log-gestures-only",
        }
    }
}

impl FromStr for NavigationMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "navigate" => Ok(NavigationMode::Navigate),
            "log-gestures-only" | "log-only" => Ok(NavigationMode::LogGesturesOnly),
            _ => Err(UnknownMode),
        }
    }
}

impl core::fmt::Display for NavigationMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mode string did not name a [`NavigationMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror_no_std::Error)]
#[error("unknown navigation mode (expected \"navigate\" or \"log-gestures-only\")")]
pub struct UnknownMode;

/// Navigator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigatorConfig {
    /// Gesture handling mode.
    pub mode: NavigationMode,
}

impl NavigatorConfig {
    /// Config for the given mode.
    #[must_use]
    pub const fn new(mode: NavigationMode) -> Self {
        Self { mode }
    }

    /// Screen created by [`crate::Navigator::start`].
    #[must_use]
    pub const fn initial_screen(&self) -> ScreenKind {
        match self.mode {
            NavigationMode::Navigate => ScreenKind::Home,
            NavigationMode::LogGesturesOnly => ScreenKind::Test,
        }
    }

    /// Whether decoded gestures may change the active screen.
    #[must_use]
    pub const fn transitions_enabled(&self) -> bool {
        matches!(self.mode, NavigationMode::Navigate)
    }
}
