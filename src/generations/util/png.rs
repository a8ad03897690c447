use std::io::Cursor;

use image::{DynamicImage, ImageFormat, ImageResult};

pub struct EncodedPng {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Decodes whatever format the provider sent back and re-encodes it as PNG.
pub fn reencode_as_png(data: &[u8]) -> ImageResult<EncodedPng> {
    let image = image::load_from_memory(data)?;
    encode_png(&image)
}

pub fn encode_png(image: &DynamicImage) -> ImageResult<EncodedPng> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;

    Ok(EncodedPng {
        bytes,
        width: image.width(),
        height: image.height(),
    })
}

#[cfg(test)]
pub(crate) fn sample_image_bytes(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let image = DynamicImage::ImageRgb8(image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    }));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), format)
        .unwrap();
    bytes
}
