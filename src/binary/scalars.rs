use nom::{
    combinator::map,
    number::complete::{le_i32, le_u32, le_u8},
    sequence::tuple,
};

use super::errors::ParseResult;

pub type Byte = u8;
pub type Dword = u32;
pub type Long = i32;

/// An 8-bit per channel RGB color, stored as three consecutive bytes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: Byte,
    pub green: Byte,
    pub blue: Byte,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(0xFF, 0xFF, 0xFF);
    /// REXPaint paints this background on cells nobody has drawn on.
    pub const UNDRAWN: Color = Color::new(0xFF, 0, 0xFF);

    pub const fn new(red: Byte, green: Byte, blue: Byte) -> Self {
        Self { red, green, blue }
    }
}

pub fn byte(input: &[u8]) -> ParseResult<'_, Byte> {
    le_u8(input)
}

pub fn dword(input: &[u8]) -> ParseResult<'_, Dword> {
    le_u32(input)
}

pub fn long(input: &[u8]) -> ParseResult<'_, Long> {
    le_i32(input)
}

pub fn parse_color(input: &[u8]) -> ParseResult<'_, Color> {
    map(tuple((byte, byte, byte)), |(red, green, blue)| Color {
        red,
        green,
        blue,
    })(input)
}
