use glam::Vec4;

/// Background colors, cycled in order.
pub const PALETTE: [u32; 6] = [0x33BF4F, 0xDC4829, 0xFFD000, 0x2D94CE, 0xB7BC9B, 0x000000];

/// Entry that also dims the ambient light and turns on the spotlight.
pub const DARK_MODE_INDEX: usize = 5;

/// Converts `0xRRGGBB` into an opaque RGBA vector of normalized sRGB components.
#[must_use]
pub fn color_from_hex(hex: u32) -> Vec4 {
    let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
    Vec4::new(channel(16), channel(8), channel(0), 1.0)
}

/// The entry applied by one palette step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteEntry {
    pub index: usize,
    pub color: Vec4,
}

impl PaletteEntry {
    #[must_use]
    pub fn is_dark_mode(&self) -> bool {
        self.index == DARK_MODE_INDEX
    }
}

/// Fixed six-color palette with a wrapping cursor.
#[derive(Debug, Clone, Default)]
pub struct ColorPalette {
    index: usize,
}

impl ColorPalette {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the entry the next step will apply. Always `< 6`.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the entry at the cursor and advances it, wrapping to 0.
    pub fn step(&mut self) -> PaletteEntry {
        let entry = PaletteEntry {
            index: self.index,
            color: color_from_hex(PALETTE[self.index]),
        };
        self.index = (self.index + 1) % PALETTE.len();
        entry
    }
}
