//! Application configuration and constants
//!
//! Central values shared by the navigator, the toolkit and the emulator.
//! Reference these constants rather than hardcoding values.

/// The application name
pub const APP_NAME: &str = "Swipe Navigator";

/// Application version (synchronized with Cargo.toml)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Panel width in pixels
pub const CANVAS_WIDTH: u32 = 240;

/// Panel height in pixels
pub const CANVAS_HEIGHT: u32 = 280;

/// Sleep between two task-handler ticks
pub const TICK_INTERVAL_MS: u64 = 250;

/// Window title used by the desktop emulator
pub const fn window_title() -> &'static str {
    "Swipe Navigator - Emulator"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_is_portrait() {
        assert!(CANVAS_HEIGHT > CANVAS_WIDTH);
    }

    #[test]
    fn test_version_matches_manifest() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }
}
