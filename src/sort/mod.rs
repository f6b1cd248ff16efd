//! Stepwise sorting drivers.
//!
//! Each algorithm is a small state machine implementing [`Driver`], so the
//! render loop can run any of them one visual step per frame:
//! - [`BubbleSort`]: nested passes, one step per swap
//! - [`InsertionSort`]: one step per single back-shift
//! - [`QuickSort`]: Lomuto partitioning driven from an explicit range stack
//! - [`MergeSort`]: post-order split/merge tasks, one step per placement

mod bubble;
mod insertion;
mod merge;
mod quick;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;

use crate::error::SortError;
use crate::step::{Direction, Driver, Step};

/// Available sorting algorithms.
///
/// Selected while the player is idle; see [`SortDriver::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Algorithm {
    #[default]
    Bubble,
    Insertion,
    Quick,
    Merge,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Quick,
        Algorithm::Merge,
    ];
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Bubble => write!(f, "Bubble Sort"),
            Algorithm::Insertion => write!(f, "Insertion Sort"),
            Algorithm::Quick => write!(f, "Quick Sort"),
            Algorithm::Merge => write!(f, "Merge Sort"),
        }
    }
}

/// Tagged union over the four drivers.
#[derive(Debug, Clone)]
pub enum SortDriver {
    Bubble(BubbleSort),
    Insertion(InsertionSort),
    Quick(QuickSort),
    Merge(MergeSort),
}

impl SortDriver {
    /// Creates a fresh driver for an array of `len` elements.
    pub fn new(algorithm: Algorithm, len: usize) -> Self {
        match algorithm {
            Algorithm::Bubble => SortDriver::Bubble(BubbleSort::new(len)),
            Algorithm::Insertion => SortDriver::Insertion(InsertionSort::new(len)),
            Algorithm::Quick => SortDriver::Quick(QuickSort::new(len)),
            Algorithm::Merge => SortDriver::Merge(MergeSort::new(len)),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            SortDriver::Bubble(_) => Algorithm::Bubble,
            SortDriver::Insertion(_) => Algorithm::Insertion,
            SortDriver::Quick(_) => Algorithm::Quick,
            SortDriver::Merge(_) => Algorithm::Merge,
        }
    }
}

impl Driver for SortDriver {
    #[inline]
    fn advance(&mut self, values: &mut [i32], direction: Direction) -> Result<Step, SortError> {
        match self {
            SortDriver::Bubble(d) => d.advance(values, direction),
            SortDriver::Insertion(d) => d.advance(values, direction),
            SortDriver::Quick(d) => d.advance(values, direction),
            SortDriver::Merge(d) => d.advance(values, direction),
        }
    }

    fn is_done(&self) -> bool {
        match self {
            SortDriver::Bubble(d) => d.is_done(),
            SortDriver::Insertion(d) => d.is_done(),
            SortDriver::Quick(d) => d.is_done(),
            SortDriver::Merge(d) => d.is_done(),
        }
    }
}

/// Drives `driver` to completion, collecting every step including the last.
///
/// Mostly useful for tests and benchmarks; the interactive loop advances one
/// step per frame instead.
pub fn run_to_completion<D: Driver>(
    driver: &mut D,
    values: &mut [i32],
    direction: Direction,
) -> Result<Vec<Step>, SortError> {
    let mut steps = Vec::new();
    loop {
        let step = driver.advance(values, direction)?;
        step.check_bounds(values.len())?;
        let done = step.is_done();
        steps.push(step);
        if done {
            return Ok(steps);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatcher_reports_its_algorithm() {
        for algorithm in Algorithm::ALL {
            assert_eq!(SortDriver::new(algorithm, 10).algorithm(), algorithm);
        }
    }

    #[test]
    fn every_algorithm_sorts_the_reference_list() {
        for algorithm in Algorithm::ALL {
            for direction in [Direction::Ascending, Direction::Descending] {
                let mut values = vec![5, 3, 4, 1, 2];
                let mut driver = SortDriver::new(algorithm, values.len());
                run_to_completion(&mut driver, &mut values, direction).unwrap();
                let expected = match direction {
                    Direction::Ascending => vec![1, 2, 3, 4, 5],
                    Direction::Descending => vec![5, 4, 3, 2, 1],
                };
                assert_eq!(values, expected, "{algorithm} {direction}");
            }
        }
    }

    #[test]
    fn advancing_a_finished_driver_fails() {
        for algorithm in Algorithm::ALL {
            let mut values = vec![2, 1];
            let mut driver = SortDriver::new(algorithm, values.len());
            run_to_completion(&mut driver, &mut values, Direction::Ascending).unwrap();
            assert!(driver.is_done());
            assert_eq!(
                driver.advance(&mut values, Direction::Ascending),
                Err(SortError::AlreadyComplete { algorithm })
            );
        }
    }

    #[test]
    fn uniform_list_is_left_untouched() {
        for algorithm in Algorithm::ALL {
            for direction in [Direction::Ascending, Direction::Descending] {
                let mut values = vec![2, 2, 2];
                let mut driver = SortDriver::new(algorithm, values.len());
                loop {
                    let step = driver.advance(&mut values, direction).unwrap();
                    assert_eq!(values, vec![2, 2, 2]);
                    if algorithm != Algorithm::Merge {
                        assert!(!step.is_highlighted(), "{algorithm} swapped equal values");
                    }
                    if step.is_done() {
                        break;
                    }
                }
            }
        }
    }
}
