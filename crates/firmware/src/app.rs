//! Application startup and tick loop
//!
//! [`App::start`] checks the panel, builds the first screen, pushes it out
//! and turns blanking off. [`App::tick`] is then called every
//! [`AppConfig::tick_interval_ms`]: it feeds pending input to the toolkit,
//! hands each resulting event to the navigator as soon as it is raised, and
//! redraws.

use platform::{DisplayDriver, InputDevice, InputEvent};
use ui::{NavError, Navigator, NavigatorConfig, ScreenKind};

use crate::gui::{Events, Gui, ObjHandle};
use crate::input::AbsTracker;

/// Application errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror_no_std::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppError {
    /// The panel reported not ready at startup.
    #[error("Device not ready, aborting")]
    DisplayNotReady,
    /// Drawing, flushing or blank control failed.
    #[error("display operation failed")]
    Display,
    /// The navigator could not build a screen.
    #[error("navigation failed: {0}")]
    Navigation(#[from] NavError),
}

/// Runtime configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Navigation behaviour.
    pub nav: NavigatorConfig,
    /// Period between two [`App::tick`] calls.
    pub tick_interval_ms: u64,
}

impl AppConfig {
    /// Default timing with the given navigator settings.
    pub const fn new(nav: NavigatorConfig) -> Self {
        Self {
            nav,
            tick_interval_ms: platform::config::TICK_INTERVAL_MS,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(NavigatorConfig::default())
    }
}

/// The running application.
pub struct App {
    gui: Gui,
    nav: Navigator<ObjHandle>,
    tracker: AbsTracker,
    config: AppConfig,
}

impl App {
    /// Bring the display up on the first screen.
    ///
    /// Aborts with [`AppError::DisplayNotReady`] before touching anything
    /// when the panel is not ready. Blanking is switched off once, after the
    /// first screen has been flushed.
    pub fn start<D>(display: &mut D, gui: Gui, config: AppConfig) -> Result<Self, AppError>
    where
        D: DisplayDriver,
    {
        if !display.is_ready() {
            #[cfg(feature = "defmt")]
            defmt::error!("Device not ready, aborting");
            #[cfg(feature = "tracing")]
            tracing::error!("Device not ready, aborting");
            return Err(AppError::DisplayNotReady);
        }

        let mut app = Self {
            gui,
            nav: Navigator::new(config.nav),
            tracker: AbsTracker::new(),
            config,
        };
        app.nav.start(&mut app.gui)?;
        app.render(display)?;
        display.set_blanking(false).map_err(|_| {
            #[cfg(feature = "defmt")]
            defmt::error!("Failed to turn display blanking off");
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to turn display blanking off");
            AppError::Display
        })?;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "{} v{} ready, {} mode",
            platform::config::APP_NAME,
            platform::config::APP_VERSION,
            config.nav.mode.as_str()
        );
        #[cfg(feature = "tracing")]
        tracing::info!(
            "{} v{} ready, {} mode",
            platform::config::APP_NAME,
            platform::config::APP_VERSION,
            config.nav.mode.as_str()
        );
        Ok(app)
    }

    /// Run one iteration of the UI loop.
    ///
    /// Returns the screen entered during this tick, if any. An undecodable
    /// gesture is logged and skipped; the loop keeps going.
    pub fn tick<D, I>(&mut self, display: &mut D, input: &mut I) -> Result<Option<ScreenKind>, AppError>
    where
        D: DisplayDriver,
        I: InputDevice,
    {
        // Events are handled in input order, so a gesture is read while its
        // direction is still latched in the pointer.
        let mut entered = None;
        while let Some(event) = input.poll_event() {
            match event {
                InputEvent::Touch { phase, point } => {
                    self.gui.feed_pointer(phase, point);
                    let events = self.gui.take_events();
                    if let Some(kind) = self.dispatch(events)? {
                        entered = Some(kind);
                    }
                }
                InputEvent::Abs { .. } => {
                    self.tracker.track(&event);
                }
            }
        }

        let events = self
            .gui
            .task_handler(display)
            .map_err(|_| AppError::Display)?;
        if let Some(kind) = self.dispatch(events)? {
            entered = Some(kind);
        }

        // Screens built while handling events are drawn in the same tick.
        if self.gui.is_dirty() {
            self.render(display)?;
        } else {
            display.flush().map_err(|_| AppError::Display)?;
        }
        Ok(entered)
    }

    /// Hand `events` to the navigator, returning the last screen entered.
    fn dispatch(&mut self, events: Events) -> Result<Option<ScreenKind>, AppError> {
        let mut entered = None;
        for event in events {
            match self.nav.on_event(&mut self.gui, event) {
                Ok(Some(kind)) => entered = Some(kind),
                Ok(None) | Err(NavError::UnknownDirection(_)) => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(entered)
    }

    fn render<D>(&mut self, display: &mut D) -> Result<(), AppError>
    where
        D: DisplayDriver,
    {
        // Events cannot appear here: input is only fed in `tick`.
        let _ = self.gui.task_handler(display).map_err(|_| AppError::Display)?;
        display.flush().map_err(|_| AppError::Display)
    }

    /// The navigator.
    pub const fn navigator(&self) -> &Navigator<ObjHandle> {
        &self.nav
    }

    /// The widget toolkit.
    pub const fn gui(&self) -> &Gui {
        &self.gui
    }

    /// Raw input tracker.
    pub const fn tracker(&self) -> &AbsTracker {
        &self.tracker
    }

    /// Active configuration.
    pub const fn config(&self) -> AppConfig {
        self.config
    }
}
