use crate::binary::scalars::Color;

pub trait ColorExt {
    fn to_rgb(&self) -> image::Rgb<u8>;
    fn to_rgba(&self, alpha: u8) -> image::Rgba<u8>;
}

impl ColorExt for Color {
    fn to_rgb(&self) -> image::Rgb<u8> {
        image::Rgb([self.red, self.green, self.blue])
    }

    fn to_rgba(&self, alpha: u8) -> image::Rgba<u8> {
        image::Rgba([self.red, self.green, self.blue, alpha])
    }
}

impl From<image::Rgb<u8>> for Color {
    fn from(pixel: image::Rgb<u8>) -> Self {
        let [red, green, blue] = pixel.0;
        Color { red, green, blue }
    }
}

/// Drops the alpha channel.
impl From<image::Rgba<u8>> for Color {
    fn from(pixel: image::Rgba<u8>) -> Self {
        let [red, green, blue, _] = pixel.0;
        Color { red, green, blue }
    }
}
