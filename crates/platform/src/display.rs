//! Display abstraction layer

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Display driver trait for the demo panel
///
/// The panel is handed over by the host already initialised; the application only
/// checks readiness, draws through [`DrawTarget`] and lifts blanking once the
/// first frame is in place.
pub trait DisplayDriver: DrawTarget<Color = Rgb565> + OriginDimensions {
    /// Error type for display control operations
    type DriverError: core::fmt::Debug;

    /// Whether the device finished its own initialisation
    fn is_ready(&self) -> bool;

    /// Turn panel blanking on or off
    ///
    /// Content drawn while blanking is on stays invisible.
    fn set_blanking(&mut self, on: bool) -> Result<(), Self::DriverError>;

    /// Push the drawn frame to the panel
    fn flush(&mut self) -> Result<(), Self::DriverError>;
}

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror_no_std::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Device did not report ready
    #[error("Display device not ready")]
    NotReady,
}
