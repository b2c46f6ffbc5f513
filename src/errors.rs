use std::io;

use thiserror::Error;

use crate::binary::errors::ParseError;

#[derive(Error, Debug)]
pub enum XpError {
    #[error("validation failed: {message}")]
    Validation { message: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed xp data: {message}")]
    Format { message: String },
    #[error("cell ({x}, {y}) is outside the {width}x{height} image")]
    Bounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

impl XpError {
    /// An error raised by the gzip decoder itself rather than by the reader
    /// underneath it: the stream is corrupt or ends early.
    pub(crate) fn from_gzip(err: io::Error) -> Self {
        XpError::Format {
            message: format!("gzip stream: {err}"),
        }
    }
}

impl From<nom::Err<ParseError>> for XpError {
    fn from(err: nom::Err<ParseError>) -> Self {
        let message = match err {
            nom::Err::Incomplete(needed) => format!("incomplete input: {needed:?}"),
            nom::Err::Error(e) | nom::Err::Failure(e) => e.to_string(),
        };
        XpError::Format { message }
    }
}
