//! Software rendering of the sorting state.
//!
//! - [`Renderer`]: owned ARGB8888 pixel buffer with clipped drawing primitives
//! - [`BarChart`]: composes one [`Frame`] of the array into a renderer

mod chart;
mod renderer;

pub use chart::{BarChart, Frame};
pub use renderer::Renderer;
