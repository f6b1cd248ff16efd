//! A step-by-step sorting algorithm visualizer.
//!
//! The array is drawn as a bar chart and the selected algorithm advances one
//! observable step (a swap, shift or write) per frame. SDL2 is used only for
//! window management and display; all drawing is done on the CPU.
//!
//! # Quick Start
//!
//! ```ignore
//! use sortvis::prelude::*;
//!
//! let config = Config::default();
//! let mut vis = Visualizer::new(&config);
//! vis.handle(Command::ToggleStart);
//! while vis.playback().is_running() {
//!     vis.update()?;
//!     vis.render();
//! }
//! ```

// Public API - exposed to library consumers
pub mod array;
pub mod colors;
pub mod config;
pub mod error;
pub mod input;
pub mod playback;
pub mod sort;
pub mod step;
pub mod visualizer;
pub mod window;

// Internal modules - used within the crate only
pub(crate) mod render;

// Re-export commonly needed types at crate root for convenience
pub use config::Config;
pub use error::{AppError, ConfigError, SortError};
pub use playback::{Command, Playback, PlaybackState};
pub use sort::{Algorithm, SortDriver};
pub use step::{Direction, Driver, Step};
pub use visualizer::Visualizer;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use sortvis::prelude::*;
/// ```
pub mod prelude {
    // Configuration
    pub use crate::config::Config;

    // Stepping engine
    pub use crate::sort::{Algorithm, SortDriver};
    pub use crate::step::{Direction, Driver, Highlight, HighlightRole, Step};

    // Playback
    pub use crate::playback::{Command, Playback, PlaybackState};
    pub use crate::visualizer::Visualizer;

    // Window & Input
    pub use crate::input::Key;
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{BarChart, Frame, Renderer};
}
