//! Mock implementations for testing
//!
//! This module provides mock implementations of the platform traits
//! for use in unit and integration tests.

use std::collections::VecDeque;

use crate::{DisplayDriver, DisplayError, InputDevice, InputEvent};
use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

/// Mock display implementation
pub struct MockDisplay {
    width: u32,
    height: u32,
    ready: bool,
    blanking: bool,
    unblank_count: usize,
    flush_count: usize,
    pixels: Vec<Rgb565>,
}

impl MockDisplay {
    /// Create new mock display that reports ready, with blanking on
    pub fn new(width: u32, height: u32) -> Self {
        let len = usize::try_from(width.saturating_mul(height)).unwrap_or(0);
        Self {
            width,
            height,
            ready: true,
            blanking: true,
            unblank_count: 0,
            flush_count: 0,
            pixels: vec![Rgb565::BLACK; len],
        }
    }

    /// Create a mock display that never reports ready
    pub fn not_ready(width: u32, height: u32) -> Self {
        Self {
            ready: false,
            ..Self::new(width, height)
        }
    }

    /// Whether blanking is currently on
    pub fn is_blanked(&self) -> bool {
        self.blanking
    }

    /// How many times blanking was turned off
    pub fn unblank_count(&self) -> usize {
        self.unblank_count
    }

    /// Flush count
    pub fn flush_count(&self) -> usize {
        self.flush_count
    }

    /// Colour of one pixel, `None` when out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb565> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = usize::try_from(y.saturating_mul(self.width).saturating_add(x)).ok()?;
        self.pixels.get(idx).copied()
    }

    /// Number of pixels currently holding `color`
    pub fn count_color(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }
}

impl DrawTarget for MockDisplay {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
                continue;
            };
            if x >= self.width || y >= self.height {
                continue;
            }
            let Ok(idx) = usize::try_from(y.saturating_mul(self.width).saturating_add(x)) else {
                continue;
            };
            if let Some(slot) = self.pixels.get_mut(idx) {
                *slot = color;
            }
        }
        Ok(())
    }
}

impl OriginDimensions for MockDisplay {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DisplayDriver for MockDisplay {
    type DriverError = DisplayError;

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn set_blanking(&mut self, on: bool) -> Result<(), Self::DriverError> {
        if !self.ready {
            return Err(DisplayError::NotReady);
        }
        if !on {
            self.unblank_count = self.unblank_count.saturating_add(1);
        }
        self.blanking = on;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::DriverError> {
        self.flush_count = self.flush_count.saturating_add(1);
        Ok(())
    }
}

/// Mock input device
pub struct MockInput {
    events: VecDeque<InputEvent>,
}

impl MockInput {
    /// Create new mock input
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Add event to queue
    pub fn add_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Queue a straight-line drag from `from` to `to`, press to release
    pub fn add_swipe(&mut self, from: Point, to: Point) {
        self.add_event(InputEvent::pressed(from.x, from.y));
        let mid = Point::new(
            from.x.saturating_add(to.x) / 2,
            from.y.saturating_add(to.y) / 2,
        );
        self.add_event(InputEvent::moved(mid.x, mid.y));
        self.add_event(InputEvent::moved(to.x, to.y));
        self.add_event(InputEvent::released(to.x, to.y));
    }

    /// Queue a press and release at the same point
    pub fn add_tap(&mut self, at: Point) {
        self.add_event(InputEvent::pressed(at.x, at.y));
        self.add_event(InputEvent::released(at.x, at.y));
    }

    /// Number of queued events
    pub fn pending(&self) -> usize {
        self.events.len()
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for MockInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputDevice for MockInput {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }
}
