//! The fixed-size cell record.
//!
//! ```text
//! offset  size  field
//! 0       4     glyph       u32, little endian
//! 4       1     fg red
//! 5       1     fg green
//! 6       1     fg blue
//! 7       1     bg red
//! 8       1     bg green
//! 9       1     bg blue
//! ```
//!
//! There is no padding between records.

use std::io::{self, Write};

use byteorder::{LittleEndian, WriteBytesExt};

use crate::cell::Cell;

use super::{
    errors::ParseResult,
    scalars::{dword, parse_color, Color},
};

pub const CELL_RECORD_SIZE: usize = 10;

pub fn parse_cell_record(input: &[u8]) -> ParseResult<'_, Cell> {
    let (input, glyph) = dword(input)?;
    let (input, fg) = parse_color(input)?;
    let (input, bg) = parse_color(input)?;
    Ok((input, Cell { glyph, fg, bg }))
}

fn write_color<W: Write>(writer: &mut W, color: &Color) -> io::Result<()> {
    writer.write_all(&[color.red, color.green, color.blue])
}

pub fn write_cell_record<W: Write>(writer: &mut W, cell: &Cell) -> io::Result<()> {
    writer.write_u32::<LittleEndian>(cell.glyph)?;
    write_color(writer, &cell.fg)?;
    write_color(writer, &cell.bg)?;
    Ok(())
}
