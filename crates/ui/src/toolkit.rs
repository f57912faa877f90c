//! The widget toolkit as seen by the navigator.
//!
//! The navigator never draws. It asks a [`Toolkit`] to create, style, load
//! and destroy objects, and receives [`UiEvent`]s back between ticks.
//! Activation callbacks are plain data ([`Action`]) stored on the control,
//! so no closure ever borrows the navigator.

use embedded_graphics::pixelcolor::Rgb888;

use crate::screen::ScreenKind;

/// What activating a control asks the navigator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Leave the given screen and go back home.
    Dismiss(ScreenKind),
}

/// Kind of a toolkit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventKind {
    /// A swipe was recognised on a screen that listens for gestures.
    Gesture,
    /// A control with a bound [`Action`] was clicked.
    Clicked(Action),
}

/// One event delivered by the toolkit's task handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiEvent<H> {
    /// What happened.
    pub kind: EventKind,
    /// The object it happened on (a screen for gestures, a control for clicks).
    pub target: H,
}

impl<H> UiEvent<H> {
    /// Gesture event on `screen`.
    pub const fn gesture(screen: H) -> Self {
        Self {
            kind: EventKind::Gesture,
            target: screen,
        }
    }

    /// Click on `control`, carrying its bound action.
    pub const fn clicked(control: H, action: Action) -> Self {
        Self {
            kind: EventKind::Clicked(action),
            target: control,
        }
    }
}

/// Toolkit failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror_no_std::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToolkitError {
    /// The object pool is exhausted.
    #[error("object pool exhausted")]
    OutOfObjects,
    /// The handle refers to an object that was destroyed.
    #[error("stale object handle")]
    StaleHandle,
    /// The operation does not apply to this kind of object.
    #[error("operation not supported by this object")]
    WrongKind,
}

/// Widget toolkit operations used by the navigator.
///
/// Screens, labels and controls share one handle type. Loading a screen
/// retires the previously active one: the toolkit frees it and its handle
/// goes stale, so at most one screen is ever alive and active.
pub trait Toolkit {
    /// Object handle.
    type Handle: Copy + Eq;
    /// Input device handle.
    type Indev: Copy;

    /// Create a detached screen.
    fn create_screen(&mut self) -> Result<Self::Handle, ToolkitError>;

    /// Make `screen` the active one, retiring the previous active screen.
    fn load_screen(&mut self, screen: Self::Handle) -> Result<(), ToolkitError>;

    /// Destroy `screen` and everything on it.
    fn destroy_screen(&mut self, screen: Self::Handle) -> Result<(), ToolkitError>;

    /// Background colour of an object.
    fn set_background_color(&mut self, obj: Self::Handle, color: Rgb888)
        -> Result<(), ToolkitError>;

    /// Text colour of an object, inherited by its children.
    fn set_text_color(&mut self, obj: Self::Handle, color: Rgb888) -> Result<(), ToolkitError>;

    /// Create an empty label on `parent`.
    fn create_label(&mut self, parent: Self::Handle) -> Result<Self::Handle, ToolkitError>;

    /// Set a label's text.
    fn set_label_text(&mut self, label: Self::Handle, text: &'static str)
        -> Result<(), ToolkitError>;

    /// Centre an object inside its parent. Objects start at the parent's
    /// top-left corner.
    fn center(&mut self, obj: Self::Handle) -> Result<(), ToolkitError>;

    /// Create a clickable control on `parent` that can host a label.
    fn create_dismiss_control(&mut self, parent: Self::Handle)
        -> Result<Self::Handle, ToolkitError>;

    /// Report clicks on `obj` as [`EventKind::Clicked`] carrying `action`.
    fn bind_activation(&mut self, obj: Self::Handle, action: Action) -> Result<(), ToolkitError>;

    /// Report swipes on `screen` as [`EventKind::Gesture`].
    fn listen_gestures(&mut self, screen: Self::Handle) -> Result<(), ToolkitError>;

    /// Whether a pointer/touch device is attached.
    fn supports_pointer(&self) -> bool;

    /// Input device that produced the event being handled, if any.
    fn active_input_device(&self) -> Option<Self::Indev>;

    /// Raw direction code of the last gesture on `indev`.
    fn gesture_direction(&self, indev: Self::Indev) -> u8;

    /// Ignore `indev` until it reports release.
    fn wait_release(&mut self, indev: Self::Indev);
}
