//! Quicksort with the call stack replaced by an explicit range stack.
//!
//! Ranges are inclusive `(low, high)` pairs. Partitioning uses the first
//! element as pivot (Lomuto scheme): elements strictly preceding the pivot
//! are swapped behind a moving boundary, then the pivot is swapped onto the
//! boundary. Left sub-ranges are popped before right ones, matching the
//! recursive pre-order traversal.

use super::Algorithm;
use crate::error::SortError;
use crate::step::{Direction, Driver, Step};

/// An in-progress partition pass over `low..=high`.
#[derive(Debug, Clone, Copy)]
struct Partition {
    low: usize,
    high: usize,
    pivot: i32,
    /// Last slot holding an element that precedes the pivot.
    boundary: usize,
    /// Next element to scan.
    scan: usize,
}

#[derive(Debug, Clone)]
pub struct QuickSort {
    ranges: Vec<(usize, usize)>,
    partition: Option<Partition>,
    done: bool,
}

impl QuickSort {
    pub fn new(n: usize) -> Self {
        let ranges = if n > 1 { vec![(0, n - 1)] } else { Vec::new() };
        Self {
            ranges,
            partition: None,
            done: false,
        }
    }

    /// Number of ranges still waiting to be partitioned.
    pub fn pending(&self) -> usize {
        self.ranges.len()
    }

    fn push_halves(&mut self, low: usize, pivot_index: usize, high: usize) {
        // Right first so the left half is popped first.
        if pivot_index < high {
            self.ranges.push((pivot_index + 1, high));
        }
        if pivot_index > low {
            self.ranges.push((low, pivot_index - 1));
        }
    }
}

impl Driver for QuickSort {
    fn advance(&mut self, values: &mut [i32], direction: Direction) -> Result<Step, SortError> {
        if self.done {
            return Err(SortError::AlreadyComplete {
                algorithm: Algorithm::Quick,
            });
        }

        loop {
            if let Some(mut p) = self.partition {
                while p.scan <= p.high {
                    let scan = p.scan;
                    p.scan += 1;
                    if direction.precedes(values[scan], p.pivot) {
                        p.boundary += 1;
                        if p.boundary != scan {
                            values.swap(p.boundary, scan);
                            self.partition = Some(p);
                            return Ok(Step::pair(p.boundary, scan));
                        }
                    }
                }

                self.partition = None;
                self.push_halves(p.low, p.boundary, p.high);
                if p.boundary != p.low {
                    values.swap(p.low, p.boundary);
                    return Ok(Step::pair(p.boundary, p.low));
                }
                continue;
            }

            let Some((low, high)) = self.ranges.pop() else {
                self.done = true;
                return Ok(Step::finished());
            };
            if low >= high {
                continue;
            }
            self.partition = Some(Partition {
                low,
                high,
                pivot: values[low],
                boundary: low,
                scan: low + 1,
            });
        }
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
