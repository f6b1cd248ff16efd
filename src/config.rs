//! Startup configuration.
//!
//! Parsed once from the command line and handed to the components that need
//! it. Defaults reproduce the classic 100-bar, 800x600, 120 steps/sec setup.

use clap::Parser;

use crate::array::{SIDE_PAD, TOP_PAD};
use crate::error::ConfigError;
use crate::sort::Algorithm;
use crate::step::Direction;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "sortvis", version, about = "Step-by-step sorting algorithm visualizer")]
pub struct Config {
    /// Number of bars to sort.
    #[arg(long, default_value_t = 100)]
    pub count: usize,
    /// Smallest value a bar may take.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub min_value: i32,
    /// Largest value a bar may take.
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    pub max_value: i32,
    /// Window width in pixels.
    #[arg(long, default_value_t = 800)]
    pub width: u32,
    /// Window height in pixels.
    #[arg(long, default_value_t = 600)]
    pub height: u32,
    /// Loop iterations, and therefore sort steps, per second.
    #[arg(long, default_value_t = 120)]
    pub steps_per_second: u32,
    /// Seed for list generation. Random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Algorithm selected at startup.
    #[arg(long, value_enum, default_value_t = Algorithm::Bubble)]
    pub algorithm: Algorithm,
    /// Sort direction selected at startup.
    #[arg(long, value_enum, default_value_t = Direction::Ascending)]
    pub direction: Direction,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: 100,
            min_value: 0,
            max_value: 100,
            width: 800,
            height: 600,
            steps_per_second: 120,
            seed: None,
            algorithm: Algorithm::default(),
            direction: Direction::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_value > self.max_value {
            return Err(ConfigError::InvalidValueRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        if self.width <= SIDE_PAD || self.height <= TOP_PAD {
            return Err(ConfigError::ViewportTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        if self.steps_per_second == 0 {
            return Err(ConfigError::ZeroStepRate);
        }
        Ok(())
    }

    /// Target duration of one loop iteration in milliseconds.
    pub fn frame_time_ms(&self) -> u64 {
        1000 / self.steps_per_second.max(1) as u64
    }
}
