//! Bar chart frame composition.
//!
//! Each element becomes one vertical bar. The bar's left edge is
//! `start_x + index * block_width`, its top edge scales the value above the
//! array minimum by `block_height`, and it extends down to the bottom of the
//! viewport. Colors cycle through [`colors::GRADIENTS`] by index unless the
//! last step highlighted that index.
//!
//! Text is not rendered into the buffer. The header area instead carries two
//! small glyphs: a five-bar staircase showing the sort direction, and a row of
//! four selector blocks with the active algorithm lit.

use super::Renderer;
use crate::array::{Layout, TOP_PAD};
use crate::colors;
use crate::sort::Algorithm;
use crate::step::{Direction, Highlight, HighlightRole};

const GLYPH_MARGIN: i32 = 16;
const GLYPH_UNIT: i32 = 8;

/// Everything needed to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub values: &'a [i32],
    pub min_val: i32,
    pub max_val: i32,
    pub layout: &'a Layout,
    pub highlights: &'a [Highlight],
    pub algorithm: Algorithm,
    pub direction: Direction,
}

impl Frame<'_> {
    fn bar_color(&self, index: usize) -> u32 {
        match self.highlights.iter().find(|h| h.index == index) {
            Some(h) => match h.role {
                HighlightRole::Primary => colors::PRIMARY,
                HighlightRole::Secondary => colors::SECONDARY,
            },
            None => colors::GRADIENTS[index % colors::GRADIENTS.len()],
        }
    }
}

pub struct BarChart;

impl BarChart {
    pub fn draw(renderer: &mut Renderer, frame: &Frame) {
        renderer.clear(colors::BACKGROUND);
        Self::draw_direction(renderer, frame.direction);
        Self::draw_selector(renderer, frame.algorithm);
        Self::draw_bars(renderer, frame);
    }

    fn draw_bars(renderer: &mut Renderer, frame: &Frame) {
        let layout = frame.layout;
        let bottom = layout.height as i32;
        for (i, &value) in frame.values.iter().enumerate() {
            let x = layout.bar_x(i);
            let y = layout.bar_top(value, frame.min_val);
            renderer.draw_rect(
                x,
                y,
                layout.block_width as i32,
                bottom - y,
                frame.bar_color(i),
            );
        }
    }

    /// Five bars rising left to right when ascending, falling when descending.
    fn draw_direction(renderer: &mut Renderer, direction: Direction) {
        let base = GLYPH_MARGIN + 5 * GLYPH_UNIT;
        for step in 0..5 {
            let rank = match direction {
                Direction::Ascending => step + 1,
                Direction::Descending => 5 - step,
            };
            let height = rank * GLYPH_UNIT;
            renderer.draw_rect(
                GLYPH_MARGIN + step * GLYPH_UNIT,
                base - height,
                GLYPH_UNIT - 1,
                height,
                colors::HEADER,
            );
        }
    }

    /// One block per algorithm, in [`Algorithm::ALL`] order.
    fn draw_selector(renderer: &mut Renderer, active: Algorithm) {
        let size = 2 * GLYPH_UNIT;
        let y = (TOP_PAD as i32 - size) / 2;
        let right = renderer.width() as i32 - GLYPH_MARGIN;
        for (slot, algorithm) in Algorithm::ALL.iter().rev().enumerate() {
            let x = right - (slot as i32 + 1) * (size + GLYPH_UNIT / 2);
            let color = if *algorithm == active {
                colors::HEADER
            } else {
                colors::HEADER_DIM
            };
            renderer.draw_rect(x, y, size, size, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::SortArray;

    fn render(values: Vec<i32>, highlights: &[Highlight], direction: Direction) -> Renderer {
        let array = SortArray::new(values);
        let layout = Layout::compute(&array, 800, 600);
        let mut renderer = Renderer::new(800, 600);
        let frame = Frame {
            values: array.values(),
            min_val: array.min_val(),
            max_val: array.max_val(),
            layout: &layout,
            highlights,
            algorithm: Algorithm::Bubble,
            direction,
        };
        BarChart::draw(&mut renderer, &frame);
        renderer
    }

    #[test]
    fn bars_use_gradient_by_index() {
        let renderer = render(vec![0, 10, 10, 10], &[], Direction::Ascending);
        // Bar 1 spans x in [225, 400).
        assert_eq!(renderer.pixel(230, 599), Some(colors::GRADIENTS[1]));
        assert_eq!(renderer.pixel(410, 599), Some(colors::GRADIENTS[2]));
    }

    #[test]
    fn highlighted_bars_use_role_colors() {
        let highlights = [
            Highlight {
                index: 1,
                role: HighlightRole::Primary,
            },
            Highlight {
                index: 2,
                role: HighlightRole::Secondary,
            },
        ];
        let renderer = render(vec![0, 10, 10, 10], &highlights, Direction::Ascending);
        assert_eq!(renderer.pixel(230, 599), Some(colors::PRIMARY));
        assert_eq!(renderer.pixel(410, 599), Some(colors::SECONDARY));
    }

    #[test]
    fn tallest_bar_reaches_chart_top() {
        let renderer = render(vec![0, 10], &[], Direction::Ascending);
        // Bar 1 spans x in [400, 750).
        assert_eq!(renderer.pixel(500, TOP_PAD as i32), Some(colors::GRADIENTS[1]));
        assert_eq!(renderer.pixel(500, TOP_PAD as i32 - 1), Some(colors::BACKGROUND));
    }

    #[test]
    fn direction_glyph_flips() {
        let top_left = (GLYPH_MARGIN + 1, GLYPH_MARGIN + 1);
        let ascending = render(vec![1, 2], &[], Direction::Ascending);
        let descending = render(vec![1, 2], &[], Direction::Descending);
        assert_eq!(ascending.pixel(top_left.0, top_left.1), Some(colors::BACKGROUND));
        assert_eq!(descending.pixel(top_left.0, top_left.1), Some(colors::HEADER));
    }
}
