//! In-memory [`Toolkit`] that records every call, for navigator tests.

use embedded_graphics::pixelcolor::Rgb888;

use crate::direction::DIR_NONE;
use crate::toolkit::{Action, Toolkit, ToolkitError};

/// Kind of a recorded object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockKind {
    /// Top-level screen.
    Screen,
    /// Text label.
    Label,
    /// Clickable control.
    Control,
}

/// One object created through the toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockObject {
    /// Handle handed out for it.
    pub id: u16,
    /// Kind.
    pub kind: MockKind,
    /// Parent object, `None` for screens.
    pub parent: Option<u16>,
    /// Whether it was destroyed or retired.
    pub live: bool,
    /// Label text.
    pub text: Option<&'static str>,
    /// Background colour.
    pub background: Option<Rgb888>,
    /// Text colour.
    pub text_color: Option<Rgb888>,
    /// Centred inside its parent.
    pub centered: bool,
    /// Bound activation.
    pub action: Option<Action>,
    /// Gesture listening flag.
    pub gestures: bool,
}

/// Recording toolkit.
///
/// Handles are sequential `u16`s and are never reused, so a stale handle is
/// always detectable.
pub struct RecordingToolkit {
    objects: Vec<MockObject>,
    capacity: usize,
    active: Option<u16>,
    pointer: bool,
    gesture_code: u8,
    wait_release_calls: usize,
    destroyed_screens: Vec<u16>,
}

impl RecordingToolkit {
    /// Toolkit with a touch device and room for 64 live objects.
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Toolkit that refuses to hold more than `capacity` live objects.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            objects: Vec::new(),
            capacity,
            active: None,
            pointer: true,
            gesture_code: DIR_NONE,
            wait_release_calls: 0,
            destroyed_screens: Vec::new(),
        }
    }

    /// Toolkit without a pointer device.
    pub fn without_pointer() -> Self {
        Self {
            pointer: false,
            ..Self::new()
        }
    }

    /// Change the live-object limit from now on.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }

    /// Code returned by the next [`Toolkit::gesture_direction`] calls.
    pub fn set_gesture_code(&mut self, code: u8) {
        self.gesture_code = code;
    }

    /// Active screen.
    pub fn active(&self) -> Option<u16> {
        self.active
    }

    /// Whether `handle` refers to a live object.
    pub fn is_live(&self, handle: u16) -> bool {
        self.object(handle).is_some_and(|o| o.live)
    }

    /// Recorded object, live or not.
    pub fn object(&self, handle: u16) -> Option<&MockObject> {
        self.objects.iter().find(|o| o.id == handle)
    }

    /// Number of live screens.
    pub fn live_screens(&self) -> usize {
        self.objects
            .iter()
            .filter(|o| o.live && o.kind == MockKind::Screen)
            .count()
    }

    /// Screens destroyed through [`Toolkit::destroy_screen`], in order.
    pub fn destroyed_screens(&self) -> &[u16] {
        &self.destroyed_screens
    }

    /// How many times [`Toolkit::wait_release`] was called.
    pub fn wait_release_calls(&self) -> usize {
        self.wait_release_calls
    }

    /// Text of the first label found on the active screen.
    pub fn active_label(&self) -> Option<&'static str> {
        let screen = self.active?;
        self.objects
            .iter()
            .filter(|o| o.live && o.kind == MockKind::Label)
            .find(|o| self.root_of(o.id) == Some(screen))
            .and_then(|o| o.text)
    }

    /// Background colour of the active screen.
    pub fn active_background(&self) -> Option<Rgb888> {
        self.object(self.active?).and_then(|o| o.background)
    }

    /// Live controls on the active screen.
    pub fn controls_on_active(&self) -> usize {
        let Some(screen) = self.active else {
            return 0;
        };
        self.objects
            .iter()
            .filter(|o| o.live && o.kind == MockKind::Control && o.parent == Some(screen))
            .count()
    }

    /// First control on the active screen, with its bound action.
    pub fn active_control(&self) -> Option<(u16, Option<Action>)> {
        let screen = self.active?;
        self.objects
            .iter()
            .find(|o| o.live && o.kind == MockKind::Control && o.parent == Some(screen))
            .map(|o| (o.id, o.action))
    }

    fn root_of(&self, mut id: u16) -> Option<u16> {
        loop {
            let obj = self.object(id)?;
            match obj.parent {
                Some(parent) => id = parent,
                None => return Some(obj.id),
            }
        }
    }

    fn live_mut(&mut self, handle: u16) -> Result<&mut MockObject, ToolkitError> {
        self.objects
            .iter_mut()
            .find(|o| o.id == handle && o.live)
            .ok_or(ToolkitError::StaleHandle)
    }

    fn alloc(&mut self, kind: MockKind, parent: Option<u16>) -> Result<u16, ToolkitError> {
        if let Some(parent) = parent {
            self.live_mut(parent)?;
        }
        let live = self.objects.iter().filter(|o| o.live).count();
        if live >= self.capacity {
            return Err(ToolkitError::OutOfObjects);
        }
        let id = u16::try_from(self.objects.len()).map_err(|_| ToolkitError::OutOfObjects)?;
        self.objects.push(MockObject {
            id,
            kind,
            parent,
            live: true,
            text: None,
            background: None,
            text_color: None,
            centered: false,
            action: None,
            gestures: false,
        });
        Ok(id)
    }

    fn free_tree(&mut self, root: u16) {
        let doomed: Vec<u16> = self
            .objects
            .iter()
            .filter(|o| o.live && self.root_of(o.id) == Some(root))
            .map(|o| o.id)
            .collect();
        for obj in &mut self.objects {
            if doomed.contains(&obj.id) {
                obj.live = false;
            }
        }
        if self.active == Some(root) {
            self.active = None;
        }
    }
}

impl Default for RecordingToolkit {
    fn default() -> Self {
        Self::new()
    }
}

impl Toolkit for RecordingToolkit {
    type Handle = u16;
    type Indev = u8;

    fn create_screen(&mut self) -> Result<u16, ToolkitError> {
        self.alloc(MockKind::Screen, None)
    }

    fn load_screen(&mut self, screen: u16) -> Result<(), ToolkitError> {
        if self.live_mut(screen)?.kind != MockKind::Screen {
            return Err(ToolkitError::WrongKind);
        }
        if let Some(previous) = self.active.filter(|&p| p != screen) {
            self.free_tree(previous);
        }
        self.active = Some(screen);
        Ok(())
    }

    fn destroy_screen(&mut self, screen: u16) -> Result<(), ToolkitError> {
        if self.live_mut(screen)?.kind != MockKind::Screen {
            return Err(ToolkitError::WrongKind);
        }
        self.free_tree(screen);
        self.destroyed_screens.push(screen);
        Ok(())
    }

    fn set_background_color(&mut self, obj: u16, color: Rgb888) -> Result<(), ToolkitError> {
        self.live_mut(obj)?.background = Some(color);
        Ok(())
    }

    fn set_text_color(&mut self, obj: u16, color: Rgb888) -> Result<(), ToolkitError> {
        self.live_mut(obj)?.text_color = Some(color);
        Ok(())
    }

    fn create_label(&mut self, parent: u16) -> Result<u16, ToolkitError> {
        self.alloc(MockKind::Label, Some(parent))
    }

    fn set_label_text(&mut self, label: u16, text: &'static str) -> Result<(), ToolkitError> {
        let obj = self.live_mut(label)?;
        if obj.kind != MockKind::Label {
            return Err(ToolkitError::WrongKind);
        }
        obj.text = Some(text);
        Ok(())
    }

    fn center(&mut self, obj: u16) -> Result<(), ToolkitError> {
        self.live_mut(obj)?.centered = true;
        Ok(())
    }

    fn create_dismiss_control(&mut self, parent: u16) -> Result<u16, ToolkitError> {
        self.alloc(MockKind::Control, Some(parent))
    }

    fn bind_activation(&mut self, obj: u16, action: Action) -> Result<(), ToolkitError> {
        self.live_mut(obj)?.action = Some(action);
        Ok(())
    }

    fn listen_gestures(&mut self, screen: u16) -> Result<(), ToolkitError> {
        self.live_mut(screen)?.gestures = true;
        Ok(())
    }

    fn supports_pointer(&self) -> bool {
        self.pointer
    }

    fn active_input_device(&self) -> Option<u8> {
        self.pointer.then_some(0)
    }

    fn gesture_direction(&self, _indev: u8) -> u8 {
        self.gesture_code
    }

    fn wait_release(&mut self, _indev: u8) {
        self.wait_release_calls = self.wait_release_calls.saturating_add(1);
    }
}
