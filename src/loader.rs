use std::io::Read;

use log::{debug, trace};

use crate::{
    binary::raw_file::{parse_raw_file, RawFile},
    errors::XpError,
    gzip,
    xp_image::XpImage,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Reject files whose layers are not all the size of the first one.
    /// By default later layer sizes are read and ignored.
    pub strict_dimensions: bool,
}

/// Decodes a gzip-compressed .xp stream into a single flattened image.
pub fn decode<R: Read>(reader: R) -> Result<XpImage, XpError> {
    decode_with(reader, &DecodeOptions::default())
}

pub fn decode_with<R: Read>(reader: R, options: &DecodeOptions) -> Result<XpImage, XpError> {
    let payload = gzip::decompress(reader)?;
    debug!("decompressed {} bytes of xp payload", payload.len());
    let file = parse_payload(&payload, options)?;
    Ok(XpImage::from_raw_file(&file))
}

/// Parses an already decompressed payload, keeping the layers separate.
pub fn parse_payload(payload: &[u8], options: &DecodeOptions) -> Result<RawFile, XpError> {
    let (_, file) = parse_raw_file(payload, options)?;
    debug!(
        "xp version {}, {} layers of {}x{}",
        file.header.version, file.header.layer_count, file.canvas.width, file.canvas.height
    );
    for (index, layer) in file.layers.iter().enumerate().filter(|(_, l)| l.size != file.canvas) {
        trace!(
            "layer {index} claims {}x{}, read as {}x{}",
            layer.size.width,
            layer.size.height,
            file.canvas.width,
            file.canvas.height
        );
    }
    Ok(file)
}

impl XpImage {
    /// Load an image from the bytes of an .xp file
    pub fn from_bytes(data: &[u8]) -> Result<XpImage, XpError> {
        decode(data)
    }
}
