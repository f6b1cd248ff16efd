//! Top-down merge sort flattened into a post-order task stack.
//!
//! A `Split` task over `low..=high` pushes its `Merge` first and then both
//! halves, so the merge only surfaces once both halves have been fully
//! processed. Every placement from the scratch buffer back into the array is
//! one step.

use super::Algorithm;
use crate::error::SortError;
use crate::step::{Direction, Driver, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Split { low: usize, high: usize },
    Merge { low: usize, mid: usize, high: usize },
}

/// A merge in progress. The scratch buffer holds `low..=mid` followed by
/// `mid + 1..=high`.
#[derive(Debug, Clone, Copy)]
struct Merging {
    low: usize,
    /// Length of the left run inside the scratch buffer.
    split: usize,
    left: usize,
    right: usize,
}

#[derive(Debug, Clone)]
pub struct MergeSort {
    tasks: Vec<Task>,
    scratch: Vec<i32>,
    merging: Option<Merging>,
    done: bool,
}

impl MergeSort {
    pub fn new(n: usize) -> Self {
        let tasks = if n > 1 {
            vec![Task::Split { low: 0, high: n - 1 }]
        } else {
            Vec::new()
        };
        Self {
            tasks,
            scratch: Vec::with_capacity(n),
            merging: None,
            done: false,
        }
    }

    /// Places the next element of the active merge, if any remain.
    fn place(&mut self, m: &mut Merging, values: &mut [i32], direction: Direction) -> Option<usize> {
        let left_len = m.split;
        let right_end = self.scratch.len();
        let take_left = if m.left < left_len && m.right < right_end {
            direction.in_order(self.scratch[m.left], self.scratch[m.right])
        } else if m.left < left_len {
            true
        } else if m.right < right_end {
            false
        } else {
            return None;
        };

        let k = m.low + m.left + (m.right - left_len);
        if take_left {
            values[k] = self.scratch[m.left];
            m.left += 1;
        } else {
            values[k] = self.scratch[m.right];
            m.right += 1;
        }
        Some(k)
    }
}

impl Driver for MergeSort {
    fn advance(&mut self, values: &mut [i32], direction: Direction) -> Result<Step, SortError> {
        if self.done {
            return Err(SortError::AlreadyComplete {
                algorithm: Algorithm::Merge,
            });
        }

        loop {
            if let Some(mut m) = self.merging {
                if let Some(k) = self.place(&mut m, values, direction) {
                    self.merging = Some(m);
                    return Ok(Step::write(k));
                }
                self.merging = None;
            }

            match self.tasks.pop() {
                None => {
                    self.done = true;
                    return Ok(Step::finished());
                }
                Some(Task::Split { low, high }) => {
                    if low >= high {
                        continue;
                    }
                    let mid = low + (high - low) / 2;
                    self.tasks.push(Task::Merge { low, mid, high });
                    self.tasks.push(Task::Split { low: mid + 1, high });
                    self.tasks.push(Task::Split { low, high: mid });
                }
                Some(Task::Merge { low, mid, high }) => {
                    self.scratch.clear();
                    self.scratch.extend_from_slice(&values[low..=high]);
                    self.merging = Some(Merging {
                        low,
                        split: mid - low + 1,
                        left: 0,
                        right: mid - low + 1,
                    });
                }
            }
        }
    }

    fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_after_both_halves() {
        let mut values = vec![2, 1, 4, 3];
        let mut sort = MergeSort::new(values.len());
        let mut written = Vec::new();
        loop {
            let step = sort.advance(&mut values, Direction::Ascending).unwrap();
            if step.is_done() {
                break;
            }
            written.push(step.highlights()[0].index);
        }
        // [0, 1] merge, [2, 3] merge, then the full-range merge.
        assert_eq!(written, vec![0, 1, 2, 3, 0, 1, 2, 3]);
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn one_write_per_step() {
        let mut values = vec![3, 1, 2];
        let mut sort = MergeSort::new(values.len());

        // Split(0, 2) -> Split(0, 1) -> Merge(0, 0, 1) places 1 first.
        let step = sort.advance(&mut values, Direction::Ascending).unwrap();
        assert_eq!(step, Step::write(0));
        assert_eq!(values, vec![1, 1, 2]);

        let step = sort.advance(&mut values, Direction::Ascending).unwrap();
        assert_eq!(step, Step::write(1));
        assert_eq!(values, vec![1, 3, 2]);
    }

    #[test]
    fn merge_is_stable_in_both_directions() {
        let mut values = vec![5, 1, 5, 3, 1];
        let mut sort = MergeSort::new(values.len());
        while !sort.advance(&mut values, Direction::Descending).unwrap().is_done() {}
        assert_eq!(values, vec![5, 5, 3, 1, 1]);
    }

    #[test]
    fn step_count_is_n_log_n() {
        let n = 64usize;
        let mut values: Vec<i32> = (0..n as i32).rev().collect();
        let mut sort = MergeSort::new(n);
        let mut writes = 0;
        while !sort.advance(&mut values, Direction::Ascending).unwrap().is_done() {
            writes += 1;
        }
        // Six levels of merging, each writing every element once.
        assert_eq!(writes, n * 6);
    }
}
