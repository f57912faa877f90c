//! Display drivers for the demo panel
//!
//! The panel itself is provided by the host; this module only fixes its
//! geometry and, on desktop, supplies the simulator-backed driver.

#[cfg(feature = "emulator")]
pub mod emulator;

#[cfg(feature = "emulator")]
pub use emulator::{EmulatorDisplay, EmulatorInput};

/// Display width in pixels
pub const DISPLAY_WIDTH: u32 = platform::config::CANVAS_WIDTH;

/// Display height in pixels
pub const DISPLAY_HEIGHT: u32 = platform::config::CANVAS_HEIGHT;

/// Display size
pub const fn display_size() -> embedded_graphics::prelude::Size {
    embedded_graphics::prelude::Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
}
