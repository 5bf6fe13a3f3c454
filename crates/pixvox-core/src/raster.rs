//! Raster image sources
//!
//! [`RasterSource`] is the capability a sprite needs from an image: its
//! dimensions and a premultiplied 16-bit sample per pixel. The `image` crate
//! buffers implement it, and so does [`Sprite`] itself so one sprite can be
//! copied from another.

use crate::color::{Color, ColorSample};
use crate::sprite::Sprite;
use image::{DynamicImage, GenericImageView, ImageBuffer, Rgba, RgbaImage};

/// A 16-bit RGBA image buffer
pub type Rgba16Image = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// An image that can be sampled pixel by pixel
pub trait RasterSource {
    /// Width and height in pixels
    fn dimensions(&self) -> (usize, usize);

    /// Premultiplied `[r, g, b, a]` at a position inside the dimensions
    fn sample_at(&self, x: usize, y: usize) -> [u16; 4];
}

impl RasterSource for RgbaImage {
    fn dimensions(&self) -> (usize, usize) {
        (self.width() as usize, self.height() as usize)
    }

    fn sample_at(&self, x: usize, y: usize) -> [u16; 4] {
        self.get_pixel(x as u32, y as u32).premultiplied_rgba16()
    }
}

impl RasterSource for Rgba16Image {
    fn dimensions(&self) -> (usize, usize) {
        (self.width() as usize, self.height() as usize)
    }

    fn sample_at(&self, x: usize, y: usize) -> [u16; 4] {
        self.get_pixel(x as u32, y as u32).premultiplied_rgba16()
    }
}

impl RasterSource for DynamicImage {
    fn dimensions(&self) -> (usize, usize) {
        (self.width() as usize, self.height() as usize)
    }

    fn sample_at(&self, x: usize, y: usize) -> [u16; 4] {
        // Keep full precision for 16-bit images
        if let Some(buffer) = self.as_rgba16() {
            return buffer.sample_at(x, y);
        }
        self.get_pixel(x as u32, y as u32).premultiplied_rgba16()
    }
}

/// Samples the generated extent, so rows left short by text generation read
/// as [`Color::TRANSPARENT`] past their end. A sprite copied from a ragged
/// sprite is therefore fully populated.
impl RasterSource for Sprite {
    fn dimensions(&self) -> (usize, usize) {
        let [width, height] = self.extent();
        (width, height)
    }

    fn sample_at(&self, x: usize, y: usize) -> [u16; 4] {
        self.get_pixel(x, y)
            .unwrap_or(Color::TRANSPARENT)
            .premultiplied_rgba16()
    }
}

impl Sprite {
    /// Export the pixels as an 8-bit RGBA image
    ///
    /// Unpopulated pixels are written as fully transparent.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let [width, height] = self.extent();
        ImageBuffer::from_fn(width as u32, height as u32, |x, y| {
            let color = self
                .get_pixel(x as usize, y as usize)
                .unwrap_or(Color::TRANSPARENT);
            Rgba(color.to_array())
        })
    }
}
