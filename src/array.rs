//! The array being sorted, its generator, and its on-screen scale.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Horizontal padding split evenly between the left and right edges.
pub const SIDE_PAD: u32 = 100;
/// Space above the chart reserved for the header.
pub const TOP_PAD: u32 = 150;

/// Values under sort plus the bounds cached when they were generated.
///
/// Sorting only permutes `values`, so the bounds stay valid until the list is
/// replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortArray {
    values: Vec<i32>,
    min_val: i32,
    max_val: i32,
}

impl SortArray {
    pub fn new(values: Vec<i32>) -> Self {
        let min_val = values.iter().copied().min().unwrap_or(0);
        let max_val = values.iter().copied().max().unwrap_or(0);
        Self {
            values,
            min_val,
            max_val,
        }
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [i32] {
        &mut self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn min_val(&self) -> i32 {
        self.min_val
    }

    pub fn max_val(&self) -> i32 {
        self.max_val
    }
}

/// Produces fresh random lists for reset.
#[derive(Debug, Clone)]
pub struct ListGenerator {
    rng: StdRng,
    count: usize,
    min_value: i32,
    max_value: i32,
}

impl ListGenerator {
    /// A generator seeded from the OS, or from `seed` when reproducible lists
    /// are wanted.
    ///
    /// `min_value` must not exceed `max_value`.
    pub fn new(count: usize, min_value: i32, max_value: i32, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            count,
            min_value,
            max_value,
        }
    }

    /// `count` values drawn uniformly from `min_value..=max_value`.
    pub fn generate(&mut self) -> SortArray {
        let values = (0..self.count)
            .map(|_| self.rng.random_range(self.min_value..=self.max_value))
            .collect();
        SortArray::new(values)
    }
}

/// Pixel geometry of the bar chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub block_width: u32,
    /// Pixels per unit of value above `min_val`.
    pub block_height: f32,
    pub start_x: u32,
    pub width: u32,
    pub height: u32,
}

impl Layout {
    /// Derives the chart scale for `array` drawn into a `width` x `height`
    /// viewport.
    pub fn compute(array: &SortArray, width: u32, height: u32) -> Self {
        let chart_width = width.saturating_sub(SIDE_PAD);
        let chart_height = height.saturating_sub(TOP_PAD) as f32;

        let block_width = match array.len() {
            0 => 0,
            len => (chart_width as f32 / len as f32).round() as u32,
        };

        let span = array.max_val() as i64 - array.min_val() as i64;
        let block_height = if span > 0 {
            chart_height / span as f32
        } else {
            chart_height
        };

        Self {
            block_width,
            block_height,
            start_x: SIDE_PAD / 2,
            width,
            height,
        }
    }

    /// Left edge of the bar at `index`.
    pub fn bar_x(&self, index: usize) -> i32 {
        self.start_x as i32 + index as i32 * self.block_width as i32
    }

    /// Top edge of a bar for `value`. Bars run from here to the bottom edge.
    pub fn bar_top(&self, value: i32, min_val: i32) -> i32 {
        let rise = (value as i64 - min_val as i64) as f32 * self.block_height;
        self.height as i32 - rise.round() as i32
    }
}
