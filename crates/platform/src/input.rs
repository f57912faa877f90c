//! Input device abstraction

use embedded_graphics::prelude::Point;

/// Absolute X axis event code
pub const ABS_X: u16 = 0x00;

/// Absolute Y axis event code
pub const ABS_Y: u16 = 0x01;

/// Input device trait for touch panels and pointer emulation
pub trait InputDevice {
    /// Poll for event (non-blocking)
    fn poll_event(&mut self) -> Option<InputEvent>;
}

/// Contact phase of a pointer sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchPhase {
    /// Finger down / mouse button pressed
    Pressed,
    /// Contact moved while pressed
    Moved,
    /// Finger lifted / mouse button released
    Released,
}

/// Input events delivered by the input subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Decoded pointer sample
    Touch {
        /// Contact phase
        phase: TouchPhase,
        /// Position in display coordinates
        point: Point,
    },
    /// Raw absolute-axis report
    Abs {
        /// Axis code ([`ABS_X`], [`ABS_Y`], ...)
        code: u16,
        /// Axis value
        value: i32,
    },
}

impl InputEvent {
    /// Shorthand for a pressed sample
    pub const fn pressed(x: i32, y: i32) -> Self {
        Self::Touch {
            phase: TouchPhase::Pressed,
            point: Point::new(x, y),
        }
    }

    /// Shorthand for a moved sample
    pub const fn moved(x: i32, y: i32) -> Self {
        Self::Touch {
            phase: TouchPhase::Moved,
            point: Point::new(x, y),
        }
    }

    /// Shorthand for a released sample
    pub const fn released(x: i32, y: i32) -> Self {
        Self::Touch {
            phase: TouchPhase::Released,
            point: Point::new(x, y),
        }
    }

    /// Event type number as reported in raw input logs (1 = key, 3 = abs)
    pub const fn type_code(&self) -> u8 {
        match self {
            Self::Touch { .. } => 1,
            Self::Abs { .. } => 3,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for InputEvent {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Touch { phase, point } => {
                defmt::write!(f, "Touch({}, {}, {})", phase, point.x, point.y);
            }
            Self::Abs { code, value } => defmt::write!(f, "Abs({}, {})", code, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_shorthands() {
        assert_eq!(
            InputEvent::pressed(3, 4),
            InputEvent::Touch {
                phase: TouchPhase::Pressed,
                point: Point::new(3, 4)
            }
        );
        assert_eq!(
            InputEvent::released(0, 0).type_code(),
            InputEvent::moved(1, 1).type_code()
        );
    }

    #[test]
    fn test_abs_type_code() {
        let ev = InputEvent::Abs {
            code: ABS_X,
            value: 10,
        };
        assert_eq!(ev.type_code(), 3);
    }
}
