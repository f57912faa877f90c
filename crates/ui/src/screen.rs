//! Screen catalogue: every screen the navigator can create and how it looks.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

use crate::direction::Direction;

/// Caption shared by the home and test screens
pub const SWIPE_PROMPT: &str = "Swipe to test!";

/// Material palette "green", main shade
pub const PALETTE_GREEN: Rgb888 = Rgb888::new(0x4C, 0xAF, 0x50);

/// Material palette "light blue", main shade
pub const PALETTE_LIGHT_BLUE: Rgb888 = Rgb888::new(0x03, 0xA9, 0xF4);

/// Every screen variant the navigator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenKind {
    /// Landing screen, listens for swipes.
    Home,
    /// Landing screen of the gesture-logging mode.
    Test,
    /// Shown after a left swipe.
    Left,
    /// Shown after a right swipe.
    Right,
    /// Shown after an upward swipe.
    Top,
    /// Shown after a downward swipe.
    Bottom,
}

impl ScreenKind {
    /// All variants, in slot order.
    pub const ALL: [ScreenKind; 6] = [
        ScreenKind::Home,
        ScreenKind::Test,
        ScreenKind::Left,
        ScreenKind::Right,
        ScreenKind::Top,
        ScreenKind::Bottom,
    ];

    /// Stable slot index, `0..ALL.len()`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            ScreenKind::Home => 0,
            ScreenKind::Test => 1,
            ScreenKind::Left => 2,
            ScreenKind::Right => 3,
            ScreenKind::Top => 4,
            ScreenKind::Bottom => 5,
        }
    }

    /// Lower-case name for log lines.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ScreenKind::Home => "home",
            ScreenKind::Test => "test",
            ScreenKind::Left => "left",
            ScreenKind::Right => "right",
            ScreenKind::Top => "top",
            ScreenKind::Bottom => "bottom",
        }
    }

    /// How this screen is built.
    #[must_use]
    pub const fn spec(self) -> ScreenSpec {
        match self {
            ScreenKind::Home => ScreenSpec::landing(self, PALETTE_GREEN),
            ScreenKind::Test => ScreenSpec::landing(self, PALETTE_LIGHT_BLUE),
            ScreenKind::Left => ScreenSpec::direction(self, "LV_DIR_LEFT (1)"),
            ScreenKind::Right => ScreenSpec::direction(self, "LV_DIR_RIGHT (2)"),
            ScreenKind::Top => ScreenSpec::direction(self, "LV_DIR_TOP (3)"),
            ScreenKind::Bottom => ScreenSpec::direction(self, "LV_DIR_BOTTOM (4)"),
        }
    }
}

impl From<Direction> for ScreenKind {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Left => ScreenKind::Left,
            Direction::Right => ScreenKind::Right,
            Direction::Top => ScreenKind::Top,
            Direction::Bottom => ScreenKind::Bottom,
        }
    }
}

impl core::fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Static description of one screen: caption, colour pair, controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSpec {
    /// Which screen this describes.
    pub kind: ScreenKind,
    /// Centered caption.
    pub label: &'static str,
    /// Screen background.
    pub background: Rgb888,
    /// Text colour inherited by the caption.
    pub text: Rgb888,
    /// Whether the caption sits on a control that returns home.
    pub dismissable: bool,
    /// Whether swipes on this screen are reported to the navigator.
    pub listens_gestures: bool,
}

impl ScreenSpec {
    const fn landing(kind: ScreenKind, background: Rgb888) -> Self {
        Self {
            kind,
            label: SWIPE_PROMPT,
            background,
            text: Rgb888::WHITE,
            dismissable: false,
            listens_gestures: true,
        }
    }

    const fn direction(kind: ScreenKind, label: &'static str) -> Self {
        Self {
            kind,
            label,
            background: Rgb888::BLACK,
            text: Rgb888::WHITE,
            dismissable: true,
            listens_gestures: false,
        }
    }
}
