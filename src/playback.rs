//! Playback controller.
//!
//! Owns the array, the selected algorithm and direction, and the active
//! driver while a sort runs. A sort advances exactly one step per [`tick`].
//!
//! [`tick`]: Playback::tick

use tracing::{debug, info, trace};

use crate::array::{ListGenerator, SortArray};
use crate::error::SortError;
use crate::sort::{Algorithm, SortDriver};
use crate::step::{Direction, Driver, Highlight, Step};

/// Commands produced by the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Replace the list, abandoning any running sort.
    Reset,
    /// Start sorting. Ignored while a sort is running.
    ToggleStart,
    SetDirection(Direction),
    SelectAlgorithm(Algorithm),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Running,
}

pub struct Playback {
    array: SortArray,
    generator: ListGenerator,
    algorithm: Algorithm,
    direction: Direction,
    /// Present exactly while running.
    driver: Option<SortDriver>,
    highlights: Vec<Highlight>,
    steps: u64,
}

impl Playback {
    /// Starts idle with a freshly generated list.
    pub fn new(mut generator: ListGenerator, algorithm: Algorithm, direction: Direction) -> Self {
        let array = generator.generate();
        Self {
            array,
            generator,
            algorithm,
            direction,
            driver: None,
            highlights: Vec::new(),
            steps: 0,
        }
    }

    pub fn state(&self) -> PlaybackState {
        match self.driver {
            Some(_) => PlaybackState::Running,
            None => PlaybackState::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == PlaybackState::Running
    }

    pub fn array(&self) -> &SortArray {
        &self.array
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Highlights from the most recent step; cleared when a sort ends.
    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// Steps taken by the current (or last finished) sort.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Applies a command. Returns `true` if it changed anything.
    ///
    /// `Quit` is left to the caller and always returns `false` here.
    pub fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Reset => {
                self.reset();
                true
            }
            Command::Quit => false,
            _ if self.is_running() => {
                debug!(?command, "ignored while sorting");
                false
            }
            Command::ToggleStart => {
                self.start();
                true
            }
            Command::SetDirection(direction) => {
                self.direction = direction;
                true
            }
            Command::SelectAlgorithm(algorithm) => {
                self.algorithm = algorithm;
                true
            }
        }
    }

    fn start(&mut self) {
        info!(
            algorithm = %self.algorithm,
            direction = %self.direction,
            len = self.array.len(),
            "sort started"
        );
        self.driver = Some(SortDriver::new(self.algorithm, self.array.len()));
        self.highlights.clear();
        self.steps = 0;
    }

    /// Discards any running sort and generates a new list.
    pub fn reset(&mut self) {
        if let Some(driver) = self.driver.take() {
            info!(algorithm = %driver.algorithm(), steps = self.steps, "sort abandoned");
        }
        self.array = self.generator.generate();
        self.highlights.clear();
        self.steps = 0;
        info!(len = self.array.len(), "list regenerated");
    }

    /// Advances the active driver by one step.
    ///
    /// Returns `Ok(None)` when idle. Returning to idle happens on the step
    /// that reports `done`.
    pub fn tick(&mut self) -> Result<Option<Step>, SortError> {
        let Some(driver) = self.driver.as_mut() else {
            return Ok(None);
        };

        let step = driver.advance(self.array.values_mut(), self.direction)?;
        step.check_bounds(self.array.len())?;
        self.steps += 1;
        trace!(step = self.steps, highlights = ?step.highlights(), "step");

        self.highlights.clear();
        if step.is_done() {
            info!(algorithm = %driver.algorithm(), steps = self.steps, "sort finished");
            self.driver = None;
        } else {
            self.highlights.extend_from_slice(step.highlights());
        }
        Ok(Some(step))
    }
}
