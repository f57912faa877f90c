//! Swipe Navigator demo firmware
//!
//! Shows a home screen, opens one of four direction screens on a swipe and
//! returns home when the on-screen control is pressed.
//!
//! # Architecture
//!
//! ```text
//! Application Layer (app: startup, tick loop, raw input tracking)
//!         ↓
//! Navigation (ui::Navigator)  ⇄  Widget toolkit (gui::Gui)
//!         ↓
//! Platform HAL (platform::DisplayDriver, platform::InputDevice)
//! ```
//!
//! # Features
//!
//! - `emulator` - Build the desktop emulator (embedded-graphics-simulator, tokio, tracing)
//! - `defmt` - Log through defmt on embedded targets
//! - `std` - Enable standard library (for emulator and testing)
//!
//! # Examples
//!
//! ```bash
//! cargo run -p firmware --example swipe_emulator --features emulator
//! SWIPE_NAV_MODE=log-gestures-only cargo run -p firmware --example swipe_emulator --features emulator
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![warn(clippy::dbg_macro)]
// Intentional allows for this codebase:
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod app;
pub mod display;
pub mod gui;
pub mod input;

// Re-export key types
pub use app::{App, AppConfig, AppError};
pub use display::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
pub use gui::{Gui, ObjHandle};
pub use input::AbsTracker;

#[cfg(feature = "emulator")]
pub use display::{EmulatorDisplay, EmulatorInput};
