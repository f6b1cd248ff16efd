//! Color constants in ARGB8888 format.

pub const BACKGROUND: u32 = 0xFFFFFFFF;

/// Bar colors cycled by index so neighbouring bars stay distinguishable.
pub const GRADIENTS: [u32; 3] = [0xFF808080, 0xFFA0A0A0, 0xFFC0C0C0];

pub const PRIMARY: u32 = 0xFF00FF00;
pub const SECONDARY: u32 = 0xFFFF0000;

/// Header glyphs (direction staircase, algorithm selector).
pub const HEADER: u32 = 0xFF00C000;
pub const HEADER_DIM: u32 = 0xFFD8D8D8;
