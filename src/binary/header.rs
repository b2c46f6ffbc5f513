use std::io::{self, Write};

use byteorder::{LittleEndian, WriteBytesExt};

use super::{
    errors::{ParseError, ParseResult},
    scalars::{dword, long, Dword, Long},
};

/// Version written by the encoder. REXPaint stores its own version as a
/// negative number; readers do not check it.
pub const EXPORT_VERSION: Long = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub version: Long,
    pub layer_count: Dword,
}

/// The width/height pair that opens every layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerSize {
    pub width: Dword,
    pub height: Dword,
}

impl LayerSize {
    pub fn cell_count(&self) -> Result<usize, ParseError> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .ok_or(ParseError::CellCountOverflow(self.width, self.height))
    }
}

pub fn parse_header(input: &[u8]) -> ParseResult<'_, Header> {
    let (input, version) = long(input)?;
    let (input, layer_count) = dword(input)?;
    Ok((
        input,
        Header {
            version,
            layer_count,
        },
    ))
}

pub fn parse_layer_size(input: &[u8]) -> ParseResult<'_, LayerSize> {
    let (input, width) = dword(input)?;
    let (input, height) = dword(input)?;
    Ok((input, LayerSize { width, height }))
}

pub fn write_header<W: Write>(writer: &mut W, header: &Header) -> io::Result<()> {
    writer.write_i32::<LittleEndian>(header.version)?;
    writer.write_u32::<LittleEndian>(header.layer_count)?;
    Ok(())
}

pub fn write_layer_size<W: Write>(writer: &mut W, size: &LayerSize) -> io::Result<()> {
    writer.write_u32::<LittleEndian>(size.width)?;
    writer.write_u32::<LittleEndian>(size.height)?;
    Ok(())
}
