//! Maps keys to playback commands.

use crate::playback::Command;
use crate::sort::Algorithm;
use crate::step::Direction;

/// Keys the visualizer responds to, independent of the windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    R,
    Space,
    A,
    D,
    I,
    B,
    Q,
    M,
    Escape,
}

/// Controls legend, shown in the window title.
pub const CONTROLS: &str =
    "R - Reset | SPACE - Start | A - Ascending | D - Descending | I/B/Q/M - Insertion/Bubble/Quick/Merge";

pub fn route(key: Key) -> Command {
    match key {
        Key::R => Command::Reset,
        Key::Space => Command::ToggleStart,
        Key::A => Command::SetDirection(Direction::Ascending),
        Key::D => Command::SetDirection(Direction::Descending),
        Key::I => Command::SelectAlgorithm(Algorithm::Insertion),
        Key::B => Command::SelectAlgorithm(Algorithm::Bubble),
        Key::Q => Command::SelectAlgorithm(Algorithm::Quick),
        Key::M => Command::SelectAlgorithm(Algorithm::Merge),
        Key::Escape => Command::Quit,
    }
}
