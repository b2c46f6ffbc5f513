use std::io::{self, Write};

use crate::xp_image::XpImage;

use super::{
    cell_record::{write_cell_record, CELL_RECORD_SIZE},
    column_major::row_major_slots,
    header::{write_header, write_layer_size, Header, LayerSize, EXPORT_VERSION},
};

/// Serializes `image` as an uncompressed single-layer payload.
pub fn write_payload<W: Write>(writer: &mut W, image: &XpImage) -> io::Result<()> {
    write_header(
        writer,
        &Header {
            version: EXPORT_VERSION,
            layer_count: 1,
        },
    )?;
    write_layer_size(
        writer,
        &LayerSize {
            width: image.width(),
            height: image.height(),
        },
    )?;

    let cells = image.cells();
    for slot in row_major_slots(image.width() as usize, image.height() as usize) {
        write_cell_record(writer, &cells[slot])?;
    }
    Ok(())
}

/// Exact size of the payload `write_payload` produces for `image`.
pub fn payload_len(image: &XpImage) -> usize {
    4 * 4 + image.cells().len() * CELL_RECORD_SIZE
}
