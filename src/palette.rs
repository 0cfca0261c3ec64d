//! Color names and their platform codes.
//!
//! Every color maps to a fixed [`ColorCode`] through a static table per
//! backend. Foreground and background codes live in disjoint ranges on both
//! platforms, so a foreground and a background can share one instruction.

use std::fmt;

/// An opaque rendering instruction understood by one backend.
///
/// An SGR parameter for ANSI terminals, an attribute word for Windows consoles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorCode(u16);

impl ColorCode {
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u16 {
        self.0
    }

    /// Combine two codes into one attribute word (Windows backend).
    pub const fn with(self, other: ColorCode) -> Self {
        Self(self.0 | other.0)
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// The eight terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Grey is the same cell color as white on both backends.
    pub const GREY: Color = Color::White;

    fn index(self) -> usize {
        self as usize
    }
}

/// Which half of a cell a color applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Foreground,
    Background,
}

/// Static color table for one backend.
#[derive(Debug)]
pub struct Palette {
    foreground: [u16; 8],
    background: [u16; 8],
    fg_intensity: u16,
    bg_intensity: u16,
}

/// SGR parameters, indexed by [`Color`].
pub static ANSI: Palette = Palette {
    foreground: [30, 31, 32, 33, 34, 35, 36, 37],
    background: [40, 41, 42, 43, 44, 45, 46, 47],
    fg_intensity: 0,
    bg_intensity: 0,
};

/// Win32 console attribute bits, indexed by [`Color`].
pub static WIN32: Palette = Palette {
    foreground: [0x00, 0x04, 0x02, 0x06, 0x01, 0x05, 0x03, 0x07],
    background: [0x00, 0x40, 0x20, 0x60, 0x10, 0x50, 0x30, 0x70],
    fg_intensity: 0x08,
    bg_intensity: 0x80,
};

/// SGR parameter for bold.
pub const ANSI_BOLD: ColorCode = ColorCode(1);

impl Palette {
    /// Code for `color` on `layer`, with the layer's intensity bit set.
    pub fn code(&self, color: Color, layer: Layer) -> ColorCode {
        let value = match layer {
            Layer::Foreground => self.foreground[color.index()] | self.fg_intensity,
            Layer::Background => self.background[color.index()] | self.bg_intensity,
        };
        ColorCode(value)
    }
}
