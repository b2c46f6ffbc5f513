//! Decoder and encoder for the `.xp` images saved by REXPaint.
//!
//! An .xp file is a gzip stream holding a stack of layers of glyph cells.
//! Decoding flattens the layers into one [`XpImage`]; encoding always writes a
//! single layer.

pub mod binary;
pub mod cell;
pub mod errors;
pub mod file;
pub mod gzip;
pub mod loader;
mod make_image;
pub mod output;
pub mod wrappers;
pub mod xp_image;


pub use binary::scalars::Color;
pub use cell::{Cell, PackedFormat};
pub use errors::XpError;
pub use file::{load, save};
pub use loader::{decode, decode_with, DecodeOptions};
pub use output::{encode, encode_with, EncodeOptions};
pub use xp_image::XpImage;
