//! gzip wrapping of the .xp payload.

use std::io::{self, Read, Write};

use flate2::{read::GzDecoder, write::GzEncoder, Compression};

use crate::errors::XpError;

/// Remembers whether the wrapped reader itself failed, so its errors are not
/// mistaken for a corrupt gzip stream.
struct SourceReader<R> {
    inner: R,
    failed: bool,
}

impl<R: Read> Read for SourceReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf).map_err(|err| {
            if err.kind() != io::ErrorKind::Interrupted {
                self.failed = true;
            }
            err
        })
    }
}

/// Reads `reader` to the end and returns the decompressed bytes.
pub fn decompress<R: Read>(reader: R) -> Result<Vec<u8>, XpError> {
    let mut decoder = GzDecoder::new(SourceReader {
        inner: reader,
        failed: false,
    });
    let mut payload = Vec::new();
    match decoder.read_to_end(&mut payload) {
        Ok(_) => Ok(payload),
        Err(err) if decoder.get_ref().failed => Err(XpError::Io(err)),
        Err(err) => Err(XpError::from_gzip(err)),
    }
}

/// Compresses `payload` into `writer` and finishes the gzip stream, handing the
/// writer back. The stream is only complete once this returns `Ok`.
pub fn compress<W: Write>(writer: W, payload: &[u8], level: Compression) -> Result<W, XpError> {
    let mut encoder = GzEncoder::new(writer, level);
    encoder.write_all(payload)?;
    Ok(encoder.finish()?)
}
