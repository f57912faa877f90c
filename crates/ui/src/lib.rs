//! Application UI layer: screens, gesture decoding and navigation state.
//!
//! This crate is `no_std` by default. Widgets are never touched directly:
//! everything goes through the [`toolkit::Toolkit`] trait, implemented by the
//! firmware's retained-mode `Gui` and by [`mocks::RecordingToolkit`] in tests.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod config;
pub mod direction;
pub mod error;
pub mod navigation;
pub mod screen;
pub mod toolkit;

#[cfg(any(test, feature = "std"))]
pub mod mocks;

pub use config::{NavigationMode, NavigatorConfig};
pub use direction::Direction;
pub use error::NavError;
pub use navigation::{Navigator, ScreenHandles};
pub use screen::{ScreenKind, ScreenSpec};
pub use toolkit::{Action, EventKind, Toolkit, ToolkitError, UiEvent};
