//! Retained-mode widget toolkit
//!
//! [`Gui`] owns a fixed pool of objects (screens, labels, buttons), turns
//! pointer input into gesture and click events, and redraws the active
//! screen when something changed. It implements [`ui::Toolkit`], so the
//! navigator drives it without knowing how anything is drawn.
//!
//! # Example
//!
//! ```no_run
//! use embedded_graphics::prelude::*;
//! use firmware::Gui;
//! use platform::TouchPhase;
//!
//! let mut gui = Gui::new(Size::new(240, 280));
//! gui.feed_pointer(TouchPhase::Pressed, Point::new(120, 140));
//! ```

pub mod object;
pub mod pointer;
pub mod render;

use core::mem;

use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;
use platform::TouchPhase;
use ui::direction::DIR_NONE;
use ui::{Action, Toolkit, ToolkitError, UiEvent};

pub use object::{ObjHandle, ObjKind, Object, ObjectPool, MAX_OBJECTS};
pub use pointer::{IndevId, PointerIndev, GESTURE_LIMIT_PX};

/// Events buffered between two task-handler runs.
pub const MAX_EVENTS: usize = 8;

/// Events handed out by [`Gui::task_handler`].
pub type Events = Vec<UiEvent<ObjHandle>, MAX_EVENTS>;

/// The only pointer device.
const POINTER: IndevId = IndevId(0);

/// Widget toolkit state.
pub struct Gui {
    objects: ObjectPool,
    active: Option<ObjHandle>,
    bounds: Rectangle,
    pointer: Option<PointerIndev>,
    events: Events,
    dirty: bool,
}

impl Gui {
    /// Toolkit for a panel of `size` with a pointer device.
    pub const fn new(size: Size) -> Self {
        Self {
            objects: ObjectPool::new(),
            active: None,
            bounds: Rectangle::new(Point::zero(), size),
            pointer: Some(PointerIndev::new()),
            events: Vec::new(),
            dirty: false,
        }
    }

    /// Toolkit for a panel without any pointer device.
    pub fn without_pointer(size: Size) -> Self {
        let mut gui = Self::new(size);
        gui.pointer = None;
        gui
    }

    /// Feed one pointer sample.
    ///
    /// Ignored when the toolkit has no pointer device.
    pub fn feed_pointer(&mut self, phase: TouchPhase, point: Point) {
        let Some(pointer) = self.pointer.as_mut() else {
            return;
        };
        match phase {
            TouchPhase::Pressed => {
                let target = self
                    .active
                    .and_then(|screen| render::button_at(&self.objects, screen, self.bounds, point));
                pointer.press(point, target);
            }
            TouchPhase::Moved => {
                if pointer.drag(point).is_none() {
                    return;
                }
                let Some(screen) = self.active else {
                    return;
                };
                if self.objects.get(screen).is_ok_and(|o| o.gestures) {
                    self.push_event(UiEvent::gesture(screen));
                }
            }
            TouchPhase::Released => {
                let Some(control) = pointer.release() else {
                    return;
                };
                let Some(screen) = self.active else {
                    return;
                };
                // A click needs the release to land on the pressed control.
                if render::button_at(&self.objects, screen, self.bounds, point) != Some(control) {
                    return;
                }
                if let Some(action) = self.objects.get(control).ok().and_then(|o| o.action) {
                    self.push_event(UiEvent::clicked(control, action));
                }
            }
        }
    }

    fn push_event(&mut self, event: UiEvent<ObjHandle>) {
        if self.events.push(event).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("UI event queue full, dropping event");
            #[cfg(feature = "tracing")]
            tracing::warn!("UI event queue full, dropping event");
        }
    }

    /// Redraw the active screen if needed and hand out pending events.
    pub fn task_handler<D>(&mut self, display: &mut D) -> Result<Events, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if self.dirty {
            if let Some(screen) = self.active {
                render::draw_screen(&self.objects, screen, self.bounds, display)?;
            }
            self.dirty = false;
        }
        Ok(self.take_events())
    }

    /// Hand out pending events without redrawing.
    pub fn take_events(&mut self) -> Events {
        mem::take(&mut self.events)
    }

    /// Currently loaded screen.
    pub const fn active(&self) -> Option<ObjHandle> {
        self.active
    }

    /// Whether the active screen needs a redraw.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of live objects.
    pub fn live_objects(&self) -> usize {
        self.objects.live()
    }

    /// Read-only view of the object pool.
    pub const fn objects(&self) -> &ObjectPool {
        &self.objects
    }

    /// Text of the first label on the active screen.
    pub fn active_label(&self) -> Option<&'static str> {
        let screen = self.active?;
        self.objects
            .iter()
            .find(|(h, o)| o.kind == ObjKind::Label && self.objects.root_of(*h) == Some(screen))
            .map(|(_, o)| o.text)
    }

    /// Centre of the first button on the active screen.
    pub fn active_button_center(&self) -> Option<Point> {
        let screen = self.active?;
        self.objects
            .iter()
            .find(|(h, o)| o.kind == ObjKind::Button && self.objects.root_of(*h) == Some(screen))
            .and_then(|(h, _)| render::object_area(&self.objects, h, self.bounds))
            .map(|area| area.center())
    }

    fn expect_kind(&self, obj: ObjHandle, kind: ObjKind) -> Result<(), ToolkitError> {
        if self.objects.get(obj)?.kind == kind {
            Ok(())
        } else {
            Err(ToolkitError::WrongKind)
        }
    }

    fn style(&mut self, obj: ObjHandle, f: impl FnOnce(&mut Object)) -> Result<(), ToolkitError> {
        f(self.objects.get_mut(obj)?);
        self.dirty = true;
        Ok(())
    }
}

impl Toolkit for Gui {
    type Handle = ObjHandle;
    type Indev = IndevId;

    fn create_screen(&mut self) -> Result<ObjHandle, ToolkitError> {
        self.objects.alloc(Object::new(ObjKind::Screen, None))
    }

    fn load_screen(&mut self, screen: ObjHandle) -> Result<(), ToolkitError> {
        self.expect_kind(screen, ObjKind::Screen)?;
        if let Some(previous) = self.active.filter(|&p| p != screen) {
            self.objects.free_tree(previous);
            #[cfg(feature = "defmt")]
            defmt::debug!("Retired previous screen");
            #[cfg(feature = "tracing")]
            tracing::debug!("Retired previous screen");
        }
        self.active = Some(screen);
        self.dirty = true;
        Ok(())
    }

    fn destroy_screen(&mut self, screen: ObjHandle) -> Result<(), ToolkitError> {
        self.expect_kind(screen, ObjKind::Screen)?;
        self.objects.free_tree(screen);
        if self.active == Some(screen) {
            self.active = None;
        }
        self.dirty = true;
        Ok(())
    }

    fn set_background_color(&mut self, obj: ObjHandle, color: Rgb888) -> Result<(), ToolkitError> {
        self.style(obj, |o| o.background = Some(color))
    }

    fn set_text_color(&mut self, obj: ObjHandle, color: Rgb888) -> Result<(), ToolkitError> {
        self.style(obj, |o| o.text_color = Some(color))
    }

    fn create_label(&mut self, parent: ObjHandle) -> Result<ObjHandle, ToolkitError> {
        let label = self.objects.alloc(Object::new(ObjKind::Label, Some(parent)))?;
        self.dirty = true;
        Ok(label)
    }

    fn set_label_text(&mut self, label: ObjHandle, text: &'static str) -> Result<(), ToolkitError> {
        self.expect_kind(label, ObjKind::Label)?;
        self.style(label, |o| o.text = text)
    }

    fn center(&mut self, obj: ObjHandle) -> Result<(), ToolkitError> {
        self.style(obj, |o| o.centered = true)
    }

    fn create_dismiss_control(&mut self, parent: ObjHandle) -> Result<ObjHandle, ToolkitError> {
        let button = self.objects.alloc(Object::new(ObjKind::Button, Some(parent)))?;
        self.dirty = true;
        Ok(button)
    }

    fn bind_activation(&mut self, obj: ObjHandle, action: Action) -> Result<(), ToolkitError> {
        self.expect_kind(obj, ObjKind::Button)?;
        self.objects.get_mut(obj)?.action = Some(action);
        Ok(())
    }

    fn listen_gestures(&mut self, screen: ObjHandle) -> Result<(), ToolkitError> {
        self.expect_kind(screen, ObjKind::Screen)?;
        self.objects.get_mut(screen)?.gestures = true;
        Ok(())
    }

    fn supports_pointer(&self) -> bool {
        self.pointer.is_some()
    }

    fn active_input_device(&self) -> Option<IndevId> {
        self.pointer.map(|_| POINTER)
    }

    fn gesture_direction(&self, indev: IndevId) -> u8 {
        match self.pointer {
            Some(pointer) if indev == POINTER => pointer.gesture_code(),
            _ => DIR_NONE,
        }
    }

    fn wait_release(&mut self, indev: IndevId) {
        if indev != POINTER {
            return;
        }
        if let Some(pointer) = self.pointer.as_mut() {
            pointer.wait_release();
        }
    }
}
