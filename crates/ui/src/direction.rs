//! Swipe direction as decoded by the toolkit's input device.
//!
//! Raw codes use the toolkit's bit encoding: one bit per direction, zero for
//! "no gesture". Anything that is not exactly one known bit is rejected.

use crate::error::NavError;

/// No gesture decoded
pub const DIR_NONE: u8 = 0x00;
/// Raw code for a left swipe
pub const DIR_LEFT: u8 = 0x01;
/// Raw code for a right swipe
pub const DIR_RIGHT: u8 = 0x02;
/// Raw code for an upward swipe
pub const DIR_TOP: u8 = 0x04;
/// Raw code for a downward swipe
pub const DIR_BOTTOM: u8 = 0x08;

/// Direction of a recognised swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Finger moved towards the left edge.
    Left,
    /// Finger moved towards the right edge.
    Right,
    /// Finger moved towards the top edge.
    Top,
    /// Finger moved towards the bottom edge.
    Bottom,
}

impl Direction {
    /// Decode a raw toolkit code.
    ///
    /// # Errors
    ///
    /// [`NavError::UnknownDirection`] for [`DIR_NONE`] and every code that is
    /// not one of the four direction bits.
    pub const fn from_code(code: u8) -> Result<Self, NavError> {
        match code {
            DIR_LEFT => Ok(Direction::Left),
            DIR_RIGHT => Ok(Direction::Right),
            DIR_TOP => Ok(Direction::Top),
            DIR_BOTTOM => Ok(Direction::Bottom),
            other => Err(NavError::UnknownDirection(other)),
        }
    }

    /// Raw toolkit code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Direction::Left => DIR_LEFT,
            Direction::Right => DIR_RIGHT,
            Direction::Top => DIR_TOP,
            Direction::Bottom => DIR_BOTTOM,
        }
    }

    /// Upper-case name, as printed in gesture logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
            Direction::Top => "TOP",
            Direction::Bottom => "BOTTOM",
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
