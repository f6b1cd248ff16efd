//! The step protocol shared by every sorting driver.
//!
//! A driver performs the smallest unit of work its algorithm would animate
//! (a swap, a shift, a single write) and hands control back with a [`Step`]
//! describing which indices changed. The caller decides when to call again.

use crate::error::SortError;

/// Sort order. Parametrizes the single ordering predicate used by all drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Whether `a` may stay in front of `b`.
    ///
    /// Equal elements are in order under both directions, so drivers never
    /// move equal values past each other.
    #[inline]
    pub fn in_order(self, a: i32, b: i32) -> bool {
        match self {
            Direction::Ascending => a <= b,
            Direction::Descending => a >= b,
        }
    }

    /// Whether `a` must come strictly before `b`.
    #[inline]
    pub fn precedes(self, a: i32, b: i32) -> bool {
        !self.in_order(b, a)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Ascending => write!(f, "Ascending"),
            Direction::Descending => write!(f, "Descending"),
        }
    }
}

/// Visual role of a highlighted index for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightRole {
    /// Drawn green.
    Primary,
    /// Drawn red.
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub index: usize,
    pub role: HighlightRole,
}

/// Outcome of one [`Driver::advance`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step {
    highlights: Vec<Highlight>,
    done: bool,
}

impl Step {
    /// Progress was made but nothing is worth highlighting.
    pub fn quiet() -> Self {
        Self::default()
    }

    /// The terminal step. Carries no highlights.
    pub fn finished() -> Self {
        Self {
            highlights: Vec::new(),
            done: true,
        }
    }

    /// Two indices touched by a swap or shift.
    pub fn pair(primary: usize, secondary: usize) -> Self {
        Self {
            highlights: vec![
                Highlight {
                    index: primary,
                    role: HighlightRole::Primary,
                },
                Highlight {
                    index: secondary,
                    role: HighlightRole::Secondary,
                },
            ],
            done: false,
        }
    }

    /// A single written index.
    pub fn write(index: usize) -> Self {
        Self {
            highlights: vec![Highlight {
                index,
                role: HighlightRole::Secondary,
            }],
            done: false,
        }
    }

    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn is_highlighted(&self) -> bool {
        !self.highlights.is_empty()
    }

    /// Verifies every highlighted index lies within an array of `len` elements.
    pub fn check_bounds(&self, len: usize) -> Result<(), SortError> {
        match self.highlights.iter().find(|h| h.index >= len) {
            Some(h) => Err(SortError::OutOfRangeIndex {
                index: h.index,
                len,
            }),
            None => Ok(()),
        }
    }
}

/// A resumable sorting algorithm.
///
/// Implementors keep all of their progress in their own state so that
/// `advance` can return after every observable mutation and pick up where it
/// left off on the next call. Arrays of length 0 or 1 finish on the first call.
pub trait Driver {
    /// Performs one step against `values`.
    ///
    /// Returns [`SortError::AlreadyComplete`] if a previous call already
    /// returned a step with `done` set.
    fn advance(&mut self, values: &mut [i32], direction: Direction) -> Result<Step, SortError>;

    /// True once the terminal step has been returned.
    fn is_done(&self) -> bool;
}
