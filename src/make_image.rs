use crate::{
    binary::{column_major::row_major_slots, raw_file::RawFile, scalars::Color},
    cell::Cell,
    wrappers::ColorExt,
    xp_image::XpImage,
};

impl XpImage {
    /// Flattens the layers of `file` into one image, bottom layer first.
    ///
    /// Every cell of a later layer replaces the cell below it, undrawn or not.
    /// Without layers the result is a cleared image of the first layer's size.
    pub fn from_raw_file(file: &RawFile) -> Self {
        let (width, height) = (file.canvas.width, file.canvas.height);
        let slots = row_major_slots(width as usize, height as usize);
        let mut cells = vec![Cell::CLEAR; slots.len()];
        for layer in file.layers.iter() {
            for (&slot, cell) in slots.iter().zip(layer.cells.iter()) {
                cells[slot] = *cell;
            }
        }

        XpImage::from_cells(width, height, cells)
    }

    /// Foreground colors, one pixel per cell. Undrawn cells are transparent.
    pub fn foreground_image(&self) -> image::RgbaImage {
        self.plane_image(|cell| cell.fg)
    }

    /// Background colors, one pixel per cell. Undrawn cells are transparent.
    pub fn background_image(&self) -> image::RgbaImage {
        self.plane_image(|cell| cell.bg)
    }

    fn plane_image(&self, color: impl Fn(&Cell) -> Color) -> image::RgbaImage {
        let mut pixels = image::RgbaImage::new(self.width(), self.height());
        for (x, y, cell) in self.enumerate_cells() {
            if cell.is_undrawn() {
                continue;
            }
            pixels.put_pixel(x, y, color(cell).to_rgba(u8::MAX));
        }
        pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::{
        header::{Header, LayerSize, EXPORT_VERSION},
        layer::RawLayer,
    };

    fn raw_file(width: u32, height: u32, layers: Vec<Vec<Cell>>) -> RawFile {
        let size = LayerSize { width, height };
        RawFile {
            header: Header {
                version: EXPORT_VERSION,
                layer_count: layers.len() as u32,
            },
            canvas: size,
            layers: layers
                .into_iter()
                .map(|cells| RawLayer { size, cells })
                .collect(),
        }
    }

    fn glyphs(range: std::ops::Range<u32>) -> Vec<Cell> {
        range
            .map(|glyph| Cell::new(glyph, Color::WHITE, Color::BLACK))
            .collect()
    }

    #[test]
    fn test_column_major_placement() {
        let image = XpImage::from_raw_file(&raw_file(2, 3, vec![glyphs(0..6)]));
        assert_eq!(image.size(), (2, 3));
        for k in 0..6 {
            assert_eq!(image.get_cell(k / 3, k % 3).unwrap().glyph, k);
        }
    }

    #[test]
    fn upper_layer_paints_over_undrawn() {
        let top = vec![Cell::CLEAR; 4];
        let image = XpImage::from_raw_file(&raw_file(2, 2, vec![glyphs(10..14), top]));
        assert!(image.cells().iter().all(|cell| *cell == Cell::CLEAR));
    }

    #[test]
    fn layers_apply_in_order() {
        let image =
            XpImage::from_raw_file(&raw_file(1, 2, vec![glyphs(0..2), glyphs(5..7), glyphs(8..10)]));
        assert_eq!(image.get_cell(0, 0).unwrap().glyph, 8);
        assert_eq!(image.get_cell(0, 1).unwrap().glyph, 9);
    }

    #[test]
    fn no_layers_is_cleared() {
        let image = XpImage::from_raw_file(&raw_file(3, 2, vec![]));
        assert_eq!(image, XpImage::new(3, 2));
    }

    #[test]
    fn test_planes() {
        let mut xp = XpImage::new(2, 1);
        xp.set_cell(0, 0, Cell::new(1, Color::new(1, 2, 3), Color::new(4, 5, 6)))
            .unwrap();

        let fg = xp.foreground_image();
        assert_eq!(fg.dimensions(), (2, 1));
        assert_eq!(fg.get_pixel(0, 0), &image::Rgba([1, 2, 3, 255]));
        assert_eq!(fg.get_pixel(1, 0), &image::Rgba([0, 0, 0, 0]));

        let bg = xp.background_image();
        assert_eq!(bg.get_pixel(0, 0), &image::Rgba([4, 5, 6, 255]));
        assert_eq!(bg.get_pixel(1, 0), &image::Rgba([0, 0, 0, 0]));
    }
}
