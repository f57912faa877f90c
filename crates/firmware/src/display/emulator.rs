//! Emulator Display Driver
//!
//! Wraps `embedded-graphics-simulator` for desktop development. Provides the
//! same interface as a panel driver, and turns mouse input in the window into
//! touch samples so swipes can be tried with a mouse drag.

use std::collections::VecDeque;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Pixel, RgbColor, Size};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use platform::{DisplayDriver, DisplayError, InputDevice, InputEvent, TouchPhase};

use super::display_size;

/// Emulator display wrapper
pub struct EmulatorDisplay {
    frame: SimulatorDisplay<Rgb565>,
    blank: SimulatorDisplay<Rgb565>,
    window: Window,
    blanked: bool,
    shown: bool,
}

impl EmulatorDisplay {
    /// Open a window sized to the demo panel
    #[must_use]
    pub fn new(scale: u32) -> Self {
        let settings = OutputSettingsBuilder::new().scale(scale.max(1)).build();
        let mut blank = SimulatorDisplay::new(display_size());
        blank.clear(Rgb565::BLACK).ok();

        Self {
            frame: SimulatorDisplay::new(display_size()),
            blank,
            window: Window::new(platform::config::window_title(), &settings),
            blanked: true,
            shown: false,
        }
    }

    /// Move pending window events into `input`
    ///
    /// Returns `false` once the window was closed.
    pub fn pump_events(&mut self, input: &mut EmulatorInput) -> bool {
        if !self.shown {
            return true;
        }
        for event in self.window.events() {
            match event {
                SimulatorEvent::Quit => return false,
                SimulatorEvent::MouseButtonDown { point, .. } => {
                    input.push(InputEvent::Touch {
                        phase: TouchPhase::Pressed,
                        point,
                    });
                }
                SimulatorEvent::MouseMove { point } => {
                    input.push(InputEvent::Touch {
                        phase: TouchPhase::Moved,
                        point,
                    });
                }
                SimulatorEvent::MouseButtonUp { point, .. } => {
                    input.push(InputEvent::Touch {
                        phase: TouchPhase::Released,
                        point,
                    });
                }
                _ => {}
            }
        }
        true
    }
}

impl DrawTarget for EmulatorDisplay {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.frame.draw_iter(pixels)
    }
}

impl OriginDimensions for EmulatorDisplay {
    fn size(&self) -> Size {
        self.frame.size()
    }
}

impl DisplayDriver for EmulatorDisplay {
    type DriverError = DisplayError;

    fn is_ready(&self) -> bool {
        true
    }

    fn set_blanking(&mut self, on: bool) -> Result<(), Self::DriverError> {
        tracing::debug!(on, "Emulator blanking");
        self.blanked = on;
        self.flush()
    }

    fn flush(&mut self) -> Result<(), Self::DriverError> {
        let shown = if self.blanked { &self.blank } else { &self.frame };
        self.window.update(shown);
        self.shown = true;
        Ok(())
    }
}

/// Queue of touch samples produced by the emulator window
#[derive(Default)]
pub struct EmulatorInput {
    events: VecDeque<InputEvent>,
}

impl EmulatorInput {
    /// Empty queue
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }
}

impl InputDevice for EmulatorInput {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }
}
