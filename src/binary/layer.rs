use nom::multi::count;

use crate::cell::Cell;

use super::{
    cell_record::{parse_cell_record, CELL_RECORD_SIZE},
    errors::{ParseError, ParseResult},
    header::LayerSize,
};

/// One layer as stored in the file. Only lives for the duration of a decode.
#[derive(Debug, Clone)]
pub struct RawLayer {
    /// Size read from this layer's own header. Only the first layer's is used.
    pub size: LayerSize,
    /// Cell records in stored (column-major) order.
    pub cells: Vec<Cell>,
}

/// Parses `cell_count` records, failing up front if `input` cannot hold them.
pub fn parse_layer_cells(
    input: &[u8],
    layer: usize,
    cell_count: usize,
) -> ParseResult<'_, Vec<Cell>> {
    let needed = cell_count
        .checked_mul(CELL_RECORD_SIZE)
        .ok_or(nom::Err::Failure(ParseError::Truncated {
            layer,
            needed: usize::MAX,
            available: input.len(),
        }))?;
    if input.len() < needed {
        return Err(nom::Err::Failure(ParseError::Truncated {
            layer,
            needed,
            available: input.len(),
        }));
    }
    count(parse_cell_record, cell_count)(input)
}
