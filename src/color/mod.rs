//! Color assignment
//! Maps a benchmark's rank among the active names to a stable style class

use crossterm::style::Color as CrosstermColor;

/// Largest palette a host can configure
pub const MAX_PALETTE_SIZE: usize = 16;

/// Palette size used when nothing else is configured
pub const DEFAULT_PALETTE_SIZE: usize = 10;

/// Name of the style used by the include-directive marker
pub const SPECIAL_CLASS_NAME: &str = "rainbow-decoration";

/// Color representation wrapping crossterm's Color enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Reset to default color
    Reset,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    /// 256-color palette (0-255)
    Ansi256(u8),
    /// RGB color (r, g, b) where each component is 0-255
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Convert to crossterm Color
    #[must_use]
    pub fn to_crossterm(self) -> CrosstermColor {
        match self {
            Color::Reset => CrosstermColor::Reset,
            Color::Red => CrosstermColor::Red,
            Color::Green => CrosstermColor::Green,
            Color::Yellow => CrosstermColor::Yellow,
            Color::Blue => CrosstermColor::Blue,
            Color::Magenta => CrosstermColor::Magenta,
            Color::Cyan => CrosstermColor::Cyan,
            Color::Ansi256(n) => CrosstermColor::AnsiValue(n),
            Color::Rgb { r, g, b } => CrosstermColor::Rgb { r, g, b },
        }
    }
}

// Ordered so that neighbouring slots contrast.
const SLOT_COLORS: [Color; MAX_PALETTE_SIZE] = [
    Color::Rgb { r: 0x1f, g: 0x77, b: 0xb4 },
    Color::Rgb { r: 0xff, g: 0x7f, b: 0x0e },
    Color::Rgb { r: 0x2c, g: 0xa0, b: 0x2c },
    Color::Rgb { r: 0xd6, g: 0x27, b: 0x28 },
    Color::Rgb { r: 0x94, g: 0x67, b: 0xbd },
    Color::Rgb { r: 0x8c, g: 0x56, b: 0x4b },
    Color::Rgb { r: 0xe3, g: 0x77, b: 0xc2 },
    Color::Rgb { r: 0x7f, g: 0x7f, b: 0x7f },
    Color::Rgb { r: 0xbc, g: 0xbd, b: 0x22 },
    Color::Rgb { r: 0x17, g: 0xbe, b: 0xcf },
    Color::Ansi256(39),
    Color::Ansi256(208),
    Color::Ansi256(70),
    Color::Ansi256(161),
    Color::Ansi256(135),
    Color::Ansi256(221),
];

/// Visual style identifier attached to every decoration range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleClass {
    /// One slot of the benchmark palette
    Palette(u8),
    /// Marker for the experimental library include
    Special,
}

impl StyleClass {
    /// Class name as understood by a stylesheet-driven renderer
    #[must_use]
    pub fn name(self) -> String {
        match self {
            StyleClass::Palette(slot) => format!("palette-{slot}"),
            StyleClass::Special => SPECIAL_CLASS_NAME.to_string(),
        }
    }

    /// Terminal color for this class
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            StyleClass::Palette(slot) => SLOT_COLORS[usize::from(slot) % MAX_PALETTE_SIZE],
            StyleClass::Special => Color::Magenta,
        }
    }
}

/// Fixed-size set of style slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    size: usize,
}

impl Palette {
    /// Create a palette with `size` slots, clamped to `1..=MAX_PALETTE_SIZE`
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size: size.clamp(1, MAX_PALETTE_SIZE),
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Pick the style for the benchmark at `rank` among `total` active names.
    ///
    /// When every name fits, ranks are spread over the whole palette so that
    /// a short list still gets well separated colors. Larger lists wrap.
    #[must_use]
    pub fn pick(&self, rank: usize, total: usize) -> StyleClass {
        let total = total.max(1);
        let slot = if total <= self.size {
            // rank < total <= 16, so the product stays tiny
            rank.min(total - 1) * self.size / total
        } else {
            rank % self.size
        };
        // size <= MAX_PALETTE_SIZE, so the slot always fits
        StyleClass::Palette((slot % self.size) as u8)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE_SIZE)
    }
}

/// Style for `rank` among `total` active names on the default palette
#[must_use]
pub fn pick_style(rank: usize, total: usize) -> StyleClass {
    Palette::default().pick(rank, total)
}
