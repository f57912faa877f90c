//! Pointer input device: press/drag/release → gesture or click.
//!
//! A drag becomes a gesture as soon as it travels more than the gesture limit
//! away from the press point along its dominant axis. A press that ends
//! without a gesture is a click candidate. After a gesture the device can be
//! told to wait for release, which suppresses the click the lifting finger
//! would otherwise produce.

use embedded_graphics::prelude::Point;
use ui::direction::{DIR_BOTTOM, DIR_LEFT, DIR_NONE, DIR_RIGHT, DIR_TOP};

use super::ObjHandle;

/// Travel, in pixels, after which a drag is a gesture.
pub const GESTURE_LIMIT_PX: i32 = 50;

/// Identifies an input device in toolkit calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndevId(pub u8);

/// State of the single pointer device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerIndev {
    pressed: bool,
    press_point: Point,
    press_target: Option<ObjHandle>,
    gesture: u8,
    wait_release: bool,
}

impl PointerIndev {
    /// Released device, no gesture recorded.
    pub const fn new() -> Self {
        Self {
            pressed: false,
            press_point: Point::zero(),
            press_target: None,
            gesture: DIR_NONE,
            wait_release: false,
        }
    }

    /// Contact started at `point`, over `target` if it hit a clickable object.
    pub fn press(&mut self, point: Point, target: Option<ObjHandle>) {
        self.pressed = true;
        self.press_point = point;
        self.press_target = target;
        self.gesture = DIR_NONE;
    }

    /// Contact moved to `point`.
    ///
    /// Returns the direction code the first time the drag crosses the limit.
    pub fn drag(&mut self, point: Point) -> Option<u8> {
        if !self.pressed {
            return None;
        }
        if self.gesture != DIR_NONE || self.wait_release {
            return None;
        }

        let dx = point.x.saturating_sub(self.press_point.x);
        let dy = point.y.saturating_sub(self.press_point.y);
        let code = classify(dx, dy)?;
        self.gesture = code;
        Some(code)
    }

    /// Contact lifted.
    ///
    /// Returns the object pressed at the start when this release completes a
    /// click: no gesture happened and nobody asked to wait for release.
    pub fn release(&mut self) -> Option<ObjHandle> {
        if !self.pressed {
            return None;
        }
        let click = if self.gesture == DIR_NONE && !self.wait_release {
            self.press_target
        } else {
            None
        };
        self.pressed = false;
        self.wait_release = false;
        self.press_target = None;
        click
    }

    /// Ignore the current contact until it is lifted.
    ///
    /// A no-op when nothing is pressed: the release already happened.
    pub fn wait_release(&mut self) {
        if self.pressed {
            self.wait_release = true;
        }
    }

    /// Direction code of the last gesture; cleared by the next press.
    pub const fn gesture_code(&self) -> u8 {
        self.gesture
    }
}

impl Default for PointerIndev {
    fn default() -> Self {
        Self::new()
    }
}

fn classify(dx: i32, dy: i32) -> Option<u8> {
    let (ax, ay) = (dx.saturating_abs(), dy.saturating_abs());
    if ax <= GESTURE_LIMIT_PX && ay <= GESTURE_LIMIT_PX {
        return None;
    }
    Some(if ax >= ay {
        if dx < 0 {
            DIR_LEFT
        } else {
            DIR_RIGHT
        }
    } else if dy < 0 {
        DIR_TOP
    } else {
        DIR_BOTTOM
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_short_drag_is_not_a_gesture() {
        let mut p = PointerIndev::new();
        p.press(Point::new(100, 100), None);
        assert_eq!(p.drag(Point::new(140, 100)), None);
        assert_eq!(p.gesture_code(), DIR_NONE);
    }

    #[test]
    fn test_dominant_axis_decides() {
        assert_eq!(classify(-60, 10), Some(DIR_LEFT));
        assert_eq!(classify(60, -59), Some(DIR_RIGHT));
        assert_eq!(classify(10, -80), Some(DIR_TOP));
        assert_eq!(classify(-20, 51), Some(DIR_BOTTOM));
    }

    #[test]
    fn test_gesture_fires_once_per_press() {
        let mut p = PointerIndev::new();
        p.press(Point::new(200, 100), None);
        assert_eq!(p.drag(Point::new(120, 100)), Some(DIR_LEFT));
        assert_eq!(p.drag(Point::new(40, 100)), None);
        assert_eq!(p.gesture_code(), DIR_LEFT);
    }

    #[test]
    fn test_gesture_code_survives_release() {
        let mut p = PointerIndev::new();
        p.press(Point::new(100, 200), None);
        p.drag(Point::new(100, 100));
        p.release();
        assert_eq!(p.gesture_code(), DIR_TOP);
        p.press(Point::new(0, 0), None);
        assert_eq!(p.gesture_code(), DIR_NONE);
    }

    #[test]
    fn test_gesture_release_is_not_a_click() {
        let mut p = PointerIndev::new();
        let target = Some(dummy_handle());
        p.press(Point::new(120, 140), target);
        p.drag(Point::new(20, 140));
        assert_eq!(p.release(), None);
    }

    #[test]
    fn test_tap_clicks_pressed_target() {
        let mut p = PointerIndev::new();
        let target = Some(dummy_handle());
        p.press(Point::new(120, 140), target);
        assert_eq!(p.release(), target);
    }

    #[test]
    fn test_wait_release_swallows_click() {
        let mut p = PointerIndev::new();
        let target = Some(dummy_handle());
        p.press(Point::new(120, 140), target);
        p.wait_release();
        assert_eq!(p.release(), None);
        // Latch is cleared by the release.
        p.press(Point::new(120, 140), target);
        assert_eq!(p.release(), target);
    }

    #[test]
    fn test_wait_release_after_release_is_noop() {
        let mut p = PointerIndev::new();
        p.wait_release();
        let target = Some(dummy_handle());
        p.press(Point::new(1, 1), target);
        assert_eq!(p.release(), target);
    }

    fn dummy_handle() -> ObjHandle {
        let mut pool = super::super::object::ObjectPool::new();
        pool.alloc(super::super::object::Object::new(
            super::super::object::ObjKind::Button,
            None,
        ))
        .unwrap()
    }
}
