//! Bubble sort.
//!
//! Compares neighbours `(j, j + 1)` for `j` in `0..n - 1 - i`, over passes
//! `i` in `0..n - 1`. No early exit on a sorted pass.
//!
//! Comparisons that do not swap are skipped inside a single `advance` call,
//! so a step is returned only on a swap, at the end of a pass, or when the
//! last pass has run.

use super::Algorithm;
use crate::error::SortError;
use crate::step::{Direction, Driver, Step};

#[derive(Debug, Clone)]
pub struct BubbleSort {
    n: usize,
    i: usize,
    j: usize,
    done: bool,
}

impl BubbleSort {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            i: 0,
            j: 0,
            done: false,
        }
    }

    fn passes(&self) -> usize {
        self.n.saturating_sub(1)
    }
}

impl Driver for BubbleSort {
    fn advance(&mut self, values: &mut [i32], direction: Direction) -> Result<Step, SortError> {
        if self.done {
            return Err(SortError::AlreadyComplete {
                algorithm: Algorithm::Bubble,
            });
        }
        debug_assert_eq!(values.len(), self.n);

        while self.i < self.passes() {
            let pass_len = self.n - 1 - self.i;
            if self.j >= pass_len {
                self.i += 1;
                self.j = 0;
                if self.i < self.passes() {
                    return Ok(Step::quiet());
                }
                break;
            }

            let j = self.j;
            self.j += 1;
            if !direction.in_order(values[j], values[j + 1]) {
                values.swap(j, j + 1);
                return Ok(Step::pair(j, j + 1));
            }
        }

        self.done = true;
        Ok(Step::finished())
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
