//! Navigation errors.

use crate::toolkit::ToolkitError;

/// Errors raised while handling a UI event.
///
/// None of them are fatal: the caller logs and keeps ticking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror_no_std::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavError {
    /// The input device reported a direction code outside the known set.
    #[error("Not a valid gesture code: {0}")]
    UnknownDirection(u8),
    /// The toolkit refused a widget operation.
    #[error("toolkit error: {0}")]
    Toolkit(#[from] ToolkitError),
}
