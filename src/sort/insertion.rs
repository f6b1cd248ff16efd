//! Insertion sort, one back-shift per step.

use super::Algorithm;
use crate::error::SortError;
use crate::step::{Direction, Driver, Step};

/// An element being carried towards the front of the array.
#[derive(Debug, Clone, Copy)]
struct Carry {
    current: i32,
    /// Slot currently holding `current`.
    cursor: usize,
}

#[derive(Debug, Clone)]
pub struct InsertionSort {
    n: usize,
    /// Next outer index to pick up.
    i: usize,
    carry: Option<Carry>,
    done: bool,
}

impl InsertionSort {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            i: 1,
            carry: None,
            done: false,
        }
    }
}

impl Driver for InsertionSort {
    fn advance(&mut self, values: &mut [i32], direction: Direction) -> Result<Step, SortError> {
        if self.done {
            return Err(SortError::AlreadyComplete {
                algorithm: Algorithm::Insertion,
            });
        }
        debug_assert_eq!(values.len(), self.n);

        loop {
            let mut carry = match self.carry {
                Some(carry) => carry,
                None if self.i < self.n => {
                    let carry = Carry {
                        current: values[self.i],
                        cursor: self.i,
                    };
                    self.i += 1;
                    carry
                }
                None => {
                    self.done = true;
                    return Ok(Step::finished());
                }
            };

            let cursor = carry.cursor;
            if cursor > 0 && !direction.in_order(values[cursor - 1], carry.current) {
                values[cursor] = values[cursor - 1];
                carry.cursor -= 1;
                values[carry.cursor] = carry.current;
                self.carry = Some(carry);
                return Ok(Step::pair(cursor, carry.cursor));
            }

            // Nothing left to shift past: the element has landed.
            self.carry = None;
        }
    }

    fn is_done(&self) -> bool {
        self.done
    }
}
