//! Raw input-subsystem tracking.
//!
//! Besides the pointer stream the toolkit consumes, the input subsystem can
//! report raw absolute-axis events. [`AbsTracker`] pairs them into points.
//! Nothing consumes those points yet; the tracker exists so a drawing canvas
//! (or similar) can hook in without touching the input plumbing.

use embedded_graphics::prelude::Point;
use platform::{InputEvent, ABS_X, ABS_Y};

/// Axis value meaning "not reported since the last pair".
const UNSET: i32 = -1;

/// Pairs `ABS_X`/`ABS_Y` reports into points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbsTracker {
    last_x: i32,
    last_y: i32,
    points: u32,
}

impl AbsTracker {
    /// Tracker with no axis reported.
    pub const fn new() -> Self {
        Self {
            last_x: UNSET,
            last_y: UNSET,
            points: 0,
        }
    }

    /// Feed one raw event.
    ///
    /// Returns the point once both axes have been seen, then forgets them.
    /// Non-absolute events are logged and ignored.
    pub fn track(&mut self, event: &InputEvent) -> Option<Point> {
        let InputEvent::Abs { code, value } = *event else {
            return None;
        };
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "input subsys type={},code={},value={}",
            event.type_code(),
            code,
            value
        );
        #[cfg(feature = "tracing")]
        tracing::debug!(
            "input subsys type={},code={},value={}",
            event.type_code(),
            code,
            value
        );

        match code {
            ABS_X => self.last_x = value,
            ABS_Y => self.last_y = value,
            _ => {}
        }
        if self.last_x == UNSET || self.last_y == UNSET {
            return None;
        }

        let point = Point::new(self.last_x, self.last_y);
        self.last_x = UNSET;
        self.last_y = UNSET;
        self.points = self.points.saturating_add(1);
        Some(point)
    }

    /// Points completed so far.
    pub const fn points(&self) -> u32 {
        self.points
    }
}

impl Default for AbsTracker {
    fn default() -> Self {
        Self::new()
    }
}
