use std::io::Write;

use flate2::Compression;
use log::debug;

use crate::{
    binary::writer::{payload_len, write_payload},
    errors::XpError,
    gzip,
    xp_image::XpImage,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    pub compression: Compression,
}

/// Encodes `image` as a single-layer .xp stream. The gzip stream is finished
/// before returning; the writer is not flushed.
pub fn encode<W: Write>(image: &XpImage, writer: W) -> Result<W, XpError> {
    encode_with(image, writer, &EncodeOptions::default())
}

pub fn encode_with<W: Write>(
    image: &XpImage,
    writer: W,
    options: &EncodeOptions,
) -> Result<W, XpError> {
    let mut payload = Vec::with_capacity(payload_len(image));
    write_payload(&mut payload, image)?;
    debug!(
        "encoding {}x{} image, {} bytes before compression",
        image.width(),
        image.height(),
        payload.len()
    );
    gzip::compress(writer, &payload, options.compression)
}

impl XpImage {
    /// Bytes of an .xp file holding this image
    pub fn to_bytes(&self) -> Result<Vec<u8>, XpError> {
        encode(self, Vec::new())
    }
}
