//! Hardware Abstraction Layer for the swipe navigator demo
//!
//! This crate provides trait-based abstractions for the two collaborators the
//! demo talks to: the display device and the input subsystem. Application
//! code is written against these traits so it runs unchanged on the desktop
//! emulator and in tests.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (firmware crate: app shell, Gui toolkit)
//!         ↓
//! Navigation Layer (ui crate: Navigator state machine)
//!         ↓
//! Platform HAL (this crate - trait abstractions)
//!         ↓
//! Display panel / touch controller / desktop simulator
//! ```
//!
//! # Features
//!
//! - `std`: Enable standard library support (mocks for testing)
//! - `defmt`: Enable defmt::Format derives
//!
//! # Example
//!
//! ```no_run
//! use platform::DisplayDriver;
//!
//! fn unblank<D: DisplayDriver>(display: &mut D) {
//!     if display.is_ready() {
//!         display.set_blanking(false).ok();
//!     }
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::must_use_candidate)] // accessors; callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod display;
pub mod input;

#[cfg(any(test, feature = "std"))]
pub mod mocks;

// Re-export main high-level traits
pub use display::{DisplayDriver, DisplayError};
pub use input::{InputDevice, InputEvent, TouchPhase, ABS_X, ABS_Y};
