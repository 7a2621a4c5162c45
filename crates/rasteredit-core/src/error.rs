//! Error types for the pixel engine and edit session.

use thiserror::Error;

/// Errors returned by the engine.
///
/// None of these are fatal: the caller can always recover, for example by
/// asking the user to pick another file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// The supplied buffer cannot be used (zero-sized, or raw data whose
    /// length does not match its dimensions).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A transform was requested before any image was loaded, or after the
    /// session was unloaded.
    #[error("No image loaded")]
    NotLoaded,

    /// A pixel coordinate fell outside the buffer.
    #[error("Pixel ({x}, {y}) is outside a {width}x{height} buffer")]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}
