use nom::{error::ErrorKind, IResult};
use thiserror::Error;

use super::scalars::Dword;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("layer {layer} is {found_width}x{found_height}, expected {width}x{height}")]
    LayerSizeMismatch {
        layer: usize,
        width: Dword,
        height: Dword,
        found_width: Dword,
        found_height: Dword,
    },
    #[error("layer size {0}x{1} overflows the cell count")]
    CellCountOverflow(Dword, Dword),
    #[error("layer {layer} needs {needed} bytes of cell records, only {available} left")]
    Truncated {
        layer: usize,
        needed: usize,
        available: usize,
    },
    #[error("{kind:?} with {remaining} bytes left")]
    Nom { remaining: usize, kind: ErrorKind },
}

impl<'a> nom::error::ParseError<&'a [u8]> for ParseError {
    fn from_error_kind(input: &'a [u8], kind: ErrorKind) -> Self {
        ParseError::Nom {
            remaining: input.len(),
            kind,
        }
    }

    fn append(_input: &'a [u8], _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

pub type ParseResult<'a, O> = IResult<&'a [u8], O, ParseError>;
