//! Error types.
//!
//! Sorting itself has no recoverable failures: the variants of [`SortError`]
//! are contract violations that abort the program. User-facing "failures"
//! (pressing start while a sort is running, etc.) are silent no-ops.

use thiserror::Error;

use crate::sort::Algorithm;

/// Fatal contract violations raised by the stepping engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// `advance` was called again after the driver reported `done`.
    #[error("{algorithm} driver advanced after it already completed")]
    AlreadyComplete { algorithm: Algorithm },
    /// A driver reported a highlight outside the array.
    #[error("driver produced index {index} outside array of length {len}")]
    OutOfRangeIndex { index: usize, len: usize },
}

/// Rejected startup configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value range: min {min} is greater than max {max}")]
    InvalidValueRange { min: i32, max: i32 },
    #[error("viewport {width}x{height} leaves no room for the chart")]
    ViewportTooSmall { width: u32, height: u32 },
    #[error("steps per second must be greater than zero")]
    ZeroStepRate,
}

/// Top-level error returned by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("sdl: {0}")]
    Sdl(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Sort(#[from] SortError),
}

// SDL2 reports every failure as a plain `String`.
impl From<String> for AppError {
    fn from(value: String) -> Self {
        Self::Sdl(value)
    }
}
