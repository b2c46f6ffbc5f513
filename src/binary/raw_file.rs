use crate::loader::DecodeOptions;

use super::{
    errors::{ParseError, ParseResult},
    header::{parse_header, parse_layer_size, Header, LayerSize},
    layer::{parse_layer_cells, RawLayer},
};

/// The decompressed payload of an .xp file, layers still separate.
#[derive(Debug, Clone)]
pub struct RawFile {
    pub header: Header,
    /// Size of the first layer. Present even when the layer count is 0.
    pub canvas: LayerSize,
    /// Bottom layer first
    pub layers: Vec<RawLayer>,
}

/// Parses the whole payload. Trailing bytes after the last layer are ignored.
pub fn parse_raw_file<'a>(input: &'a [u8], options: &DecodeOptions) -> ParseResult<'a, RawFile> {
    let (input, header) = parse_header(input)?;
    // the first layer size follows the header whatever the layer count
    let (mut input, canvas) = parse_layer_size(input)?;
    // every layer holds as many records as the first one
    let cell_count = canvas.cell_count().map_err(nom::Err::Failure)?;
    let mut layers = Vec::new();

    for layer in 0..header.layer_count as usize {
        let size = if layer == 0 {
            canvas
        } else {
            let (rest, size) = parse_layer_size(input)?;
            input = rest;
            if options.strict_dimensions && size != canvas {
                return Err(nom::Err::Failure(ParseError::LayerSizeMismatch {
                    layer,
                    width: canvas.width,
                    height: canvas.height,
                    found_width: size.width,
                    found_height: size.height,
                }));
            }
            size
        };

        let (rest, cells) = parse_layer_cells(input, layer, cell_count)?;
        layers.push(RawLayer { size, cells });
        input = rest;
    }

    Ok((
        input,
        RawFile {
            header,
            canvas,
            layers,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer_bytes(width: u32, height: u32, glyphs: impl IntoIterator<Item = u32>) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&width.to_le_bytes());
        out.extend_from_slice(&height.to_le_bytes());
        for glyph in glyphs {
            out.extend_from_slice(&glyph.to_le_bytes());
            out.extend_from_slice(&[0, 0, 0, 255, 0, 255]);
        }
        out
    }

    fn file_bytes(layers: &[Vec<u8>]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&(-1i32).to_le_bytes());
        out.extend_from_slice(&(layers.len() as u32).to_le_bytes());
        for layer in layers {
            out.extend_from_slice(layer);
        }
        out
    }

    #[test]
    fn test_two_layers() {
        let input = file_bytes(&[layer_bytes(2, 1, [1, 2]), layer_bytes(2, 1, [3, 4])]);
        let (rest, file) = parse_raw_file(&input, &DecodeOptions::default()).unwrap();
        assert!(rest.is_empty());
        assert_eq!(file.header.layer_count, 2);
        assert_eq!(file.canvas, LayerSize { width: 2, height: 1 });
        assert_eq!(file.layers.len(), 2);
        assert_eq!(file.layers[1].cells[0].glyph, 3);
    }

    #[test]
    fn later_layer_sizes_are_discarded() {
        // second layer claims 1x2 but still holds the first layer's 2x1 records
        let input = file_bytes(&[layer_bytes(2, 1, [1, 2]), layer_bytes(1, 2, [3, 4])]);
        let (_, file) = parse_raw_file(&input, &DecodeOptions::default()).unwrap();
        assert_eq!(file.canvas, LayerSize { width: 2, height: 1 });
        assert_eq!(file.layers[1].size, LayerSize { width: 1, height: 2 });
        assert_eq!(file.layers[1].cells.len(), 2);
    }

    #[test]
    fn strict_rejects_mismatched_layers() {
        let input = file_bytes(&[layer_bytes(2, 1, [1, 2]), layer_bytes(1, 2, [3, 4])]);
        let options = DecodeOptions {
            strict_dimensions: true,
        };
        let err = parse_raw_file(&input, &options).unwrap_err();
        assert!(matches!(
            err,
            nom::Err::Failure(ParseError::LayerSizeMismatch { layer: 1, .. })
        ));
    }

    #[test]
    fn no_layers_still_has_a_size() {
        let mut input = file_bytes(&[]);
        input.extend_from_slice(&layer_bytes(3, 2, std::iter::empty()));
        let (rest, file) = parse_raw_file(&input, &DecodeOptions::default()).unwrap();
        assert!(rest.is_empty());
        assert!(file.layers.is_empty());
        assert_eq!(file.canvas, LayerSize { width: 3, height: 2 });
    }

    #[test]
    fn header_without_layer_size_fails() {
        let input = file_bytes(&[]);
        assert!(parse_raw_file(&input, &DecodeOptions::default()).is_err());
    }

    #[test]
    fn missing_layer_fails() {
        let mut input = file_bytes(&[layer_bytes(1, 1, [7])]);
        // claim a second layer that is not there
        input[4] = 2;
        assert!(parse_raw_file(&input, &DecodeOptions::default()).is_err());
    }
}
