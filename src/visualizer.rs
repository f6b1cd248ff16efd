//! Application façade.
//!
//! The [`Visualizer`] ties the playback controller to the chart layout and the
//! pixel buffer. The window loop drives it strictly in the order
//! input ([`handle`](Visualizer::handle)) → [`update`](Visualizer::update) →
//! [`render`](Visualizer::render), so the array is never read mid-mutation.

use tracing::info;

use crate::array::{Layout, ListGenerator};
use crate::config::Config;
use crate::error::SortError;
use crate::input::CONTROLS;
use crate::playback::{Command, Playback};
use crate::render::{BarChart, Frame, Renderer};
use crate::step::Step;

pub struct Visualizer {
    playback: Playback,
    layout: Layout,
    renderer: Renderer,
}

impl Visualizer {
    pub fn new(config: &Config) -> Self {
        let generator =
            ListGenerator::new(config.count, config.min_value, config.max_value, config.seed);
        let playback = Playback::new(generator, config.algorithm, config.direction);
        let layout = Layout::compute(playback.array(), config.width, config.height);

        Self {
            playback,
            layout,
            renderer: Renderer::new(config.width, config.height),
        }
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Applies a command, recomputing the layout when the list is replaced.
    pub fn handle(&mut self, command: Command) -> bool {
        let changed = self.playback.handle(command);
        if command == Command::Reset {
            self.relayout();
        }
        changed
    }

    /// One controller tick.
    pub fn update(&mut self) -> Result<Option<Step>, SortError> {
        self.playback.tick()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        info!(width, height, "viewport resized");
        self.renderer.resize(width, height);
        self.relayout();
    }

    fn relayout(&mut self) {
        self.layout = Layout::compute(
            self.playback.array(),
            self.renderer.width(),
            self.renderer.height(),
        );
    }

    pub fn render(&mut self) {
        let array = self.playback.array();
        let frame = Frame {
            values: array.values(),
            min_val: array.min_val(),
            max_val: array.max_val(),
            layout: &self.layout,
            highlights: self.playback.highlights(),
            algorithm: self.playback.algorithm(),
            direction: self.playback.direction(),
        };
        BarChart::draw(&mut self.renderer, &frame);
    }

    /// Caption line: algorithm, direction, run state and the controls legend.
    pub fn title(&self) -> String {
        let marker = if self.playback.is_running() {
            " [sorting]"
        } else {
            ""
        };
        format!(
            "{} - {}{}   ||   {}",
            self.playback.algorithm(),
            self.playback.direction(),
            marker,
            CONTROLS
        )
    }

    /// Returns the rendered frame as bytes (ARGB8888 format)
    pub fn frame_buffer(&self) -> &[u8] {
        self.renderer.as_bytes()
    }
}
