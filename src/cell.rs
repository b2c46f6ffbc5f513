use strum_macros::{Display, EnumString};

use crate::binary::scalars::{Color, Dword};

/// Byte order of a packed 32-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PackedFormat {
    /// `0xAARRGGBB`
    Argb,
    /// `0xRRGGBBAA`
    Rgba,
}

impl PackedFormat {
    fn pack(self, color: Color) -> u32 {
        let (r, g, b) = (color.red as u32, color.green as u32, color.blue as u32);
        match self {
            PackedFormat::Argb => 0xFF << 24 | r << 16 | g << 8 | b,
            PackedFormat::Rgba => r << 24 | g << 16 | b << 8 | 0xFF,
        }
    }

    fn unpack(self, packed: u32) -> Color {
        let [a, b, c, d] = packed.to_be_bytes();
        match self {
            PackedFormat::Argb => Color::new(b, c, d),
            PackedFormat::Rgba => Color::new(a, b, c),
        }
    }

    fn alpha(self, packed: u32) -> u8 {
        let [a, _, _, d] = packed.to_be_bytes();
        match self {
            PackedFormat::Argb => a,
            PackedFormat::Rgba => d,
        }
    }
}

/// A single grid position: a glyph plus foreground and background colors.
///
/// A background of [`Color::UNDRAWN`] marks the cell as undrawn. That is only a
/// convention; nothing treats such a cell as transparent while compositing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Code page 437 index in stock REXPaint fonts
    pub glyph: Dword,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self::CLEAR
    }
}

impl Cell {
    /// Glyph 0, black foreground, undrawn background.
    pub const CLEAR: Cell = Cell {
        glyph: 0,
        fg: Color::BLACK,
        bg: Color::UNDRAWN,
    };

    pub const fn new(glyph: Dword, fg: Color, bg: Color) -> Self {
        Self { glyph, fg, bg }
    }

    pub fn clear(&mut self) {
        *self = Self::CLEAR;
    }

    pub fn is_undrawn(&self) -> bool {
        self.bg == Color::UNDRAWN
    }

    /// The glyph as a `char`, if it is a valid scalar value.
    pub fn glyph_char(&self) -> Option<char> {
        char::from_u32(self.glyph)
    }

    /// Foreground and background packed in `format`. Alpha is always 0xFF.
    pub fn pack(&self, format: PackedFormat) -> (u32, u32) {
        (format.pack(self.fg), format.pack(self.bg))
    }

    /// Sets both colors from packed values.
    ///
    /// A background alpha of 0 only marks the cell undrawn; the foreground and
    /// glyph are left alone. Any other alpha counts as fully opaque, and the
    /// foreground alpha is ignored.
    pub fn set_packed(&mut self, format: PackedFormat, fg: u32, bg: u32) {
        if format.alpha(bg) == 0 {
            self.bg = Color::UNDRAWN;
            return;
        }
        self.fg = format.unpack(fg);
        self.bg = format.unpack(bg);
    }

    pub fn argb(&self) -> (u32, u32) {
        self.pack(PackedFormat::Argb)
    }

    pub fn rgba(&self) -> (u32, u32) {
        self.pack(PackedFormat::Rgba)
    }

    pub fn set_colors_argb(&mut self, fg: u32, bg: u32) {
        self.set_packed(PackedFormat::Argb, fg, bg)
    }

    pub fn set_colors_rgba(&mut self, fg: u32, bg: u32) {
        self.set_packed(PackedFormat::Rgba, fg, bg)
    }
}
