//! Swipe Navigator Emulator
//!
//! Drag with the mouse to swipe, click the centre control to go back home.
//! Run with: cargo run -p firmware --example swipe_emulator --features emulator
//!
//! `SWIPE_NAV_MODE=log-gestures-only` starts on the test screen and only
//! logs gestures. `RUST_LOG` filters the log output (default `debug`).

#![allow(clippy::print_stdout)]

use std::time::Duration;

use firmware::display::display_size;
use firmware::{App, AppConfig, EmulatorDisplay, EmulatorInput, Gui};
use platform::config;
use tracing_subscriber::EnvFilter;
use ui::{NavigationMode, NavigatorConfig};

/// Environment variable selecting the navigation mode.
const MODE_VAR: &str = "SWIPE_NAV_MODE";

fn navigation_mode() -> NavigationMode {
    match std::env::var(MODE_VAR) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            tracing::warn!("{}={}: {}, using navigate", MODE_VAR, raw.trim(), e);
            NavigationMode::Navigate
        }),
        Err(_) => NavigationMode::Navigate,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    println!("{} v{} - Emulator", config::APP_NAME, config::APP_VERSION);

    let app_config = AppConfig::new(NavigatorConfig::new(navigation_mode()));
    let mut display = EmulatorDisplay::new(2);
    let mut input = EmulatorInput::new();

    let mut app = App::start(&mut display, Gui::new(display_size()), app_config)
        .map_err(|e| e.to_string())?;
    println!("Close the window to exit.\n");

    let tick = Duration::from_millis(app_config.tick_interval_ms);
    loop {
        if let Some(screen) = app.tick(&mut display, &mut input).map_err(|e| e.to_string())? {
            tracing::info!("Entered {} screen", screen);
        }
        if !display.pump_events(&mut input) {
            break;
        }
        tokio::time::sleep(tick).await;
    }

    Ok(())
}
