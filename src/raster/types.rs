use std::collections::HashMap;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::error::{Result, RetroError};

/// A single 8-bit-per-channel RGB sample
pub type Color = [u8; 3];

/// An immutable RGB raster handed through the style pipeline
///
/// This is a thin wrapper around an RGB image buffer that guarantees
/// non-zero dimensions. Pipeline stages never modify a buffer in place;
/// every stage returns a fresh one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    buffer: RgbImage,
}

impl PixelBuffer {
    /// Wrap a decoded RGB image, rejecting empty images
    pub fn new(buffer: RgbImage) -> Result<Self> {
        check_dimensions(buffer.width(), buffer.height())?;
        Ok(Self { buffer })
    }

    /// Create a buffer with the given dimensions filled with a single color
    pub fn new_filled(width: u32, height: u32, color: Color) -> Result<Self> {
        check_dimensions(width, height)?;
        let buffer = ImageBuffer::from_pixel(width, height, Rgb(color));
        Ok(Self { buffer })
    }

    /// Create a buffer by evaluating `f` at every coordinate
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Color,
    {
        check_dimensions(width, height)?;
        let buffer = ImageBuffer::from_fn(width, height, |x, y| Rgb(f(x, y)));
        Ok(Self { buffer })
    }

    /// Create a buffer from row-major raw RGB bytes
    pub fn from_rgb_bytes(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        check_dimensions(width, height)?;
        let expected = width as usize * height as usize * 3;
        let actual = data.len();
        ImageBuffer::from_raw(width, height, data)
            .map(|buffer| Self { buffer })
            .ok_or_else(|| {
                RetroError::invalid_parameter(
                    "data",
                    format!("expected {} bytes for {}x{}, got {}", expected, width, height, actual),
                )
            })
    }

    /// Wrap an image produced by a stage from a valid buffer.
    pub(crate) fn from_stage(buffer: RgbImage) -> Self {
        debug_assert!(buffer.width() > 0 && buffer.height() > 0);
        Self { buffer }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    /// Number of pixels in the buffer
    pub fn len(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Always false; a buffer has at least one pixel
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Get the pixel at the given coordinates
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        self.buffer.get_pixel(x, y).0
    }

    /// Iterate over all pixels in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = Color> + '_ {
        self.buffer.pixels().map(|p| p.0)
    }

    /// Raw row-major RGB bytes
    pub fn as_raw(&self) -> &[u8] {
        self.buffer.as_raw()
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.buffer
    }

    pub fn into_image(self) -> RgbImage {
        self.buffer
    }

    /// Produce a new buffer by mapping every pixel through `f`
    pub fn map_pixels<F>(&self, mut f: F) -> Self
    where
        F: FnMut(Color) -> Color,
    {
        let mut out = self.buffer.clone();
        for pixel in out.pixels_mut() {
            pixel.0 = f(pixel.0);
        }
        Self { buffer: out }
    }

    /// Produce a new buffer by mapping every channel value through a lookup table
    pub fn map_channels(&self, lut: &[u8; 256]) -> Self {
        let mut out = self.buffer.clone();
        for value in out.iter_mut() {
            *value = lut[*value as usize];
        }
        Self { buffer: out }
    }

    /// Count occurrences of every distinct color, sorted by color value
    pub fn color_histogram(&self) -> Vec<(Color, u32)> {
        let mut counts: HashMap<Color, u32> = HashMap::new();
        for color in self.pixels() {
            *counts.entry(color).or_insert(0) += 1;
        }
        let mut histogram: Vec<_> = counts.into_iter().collect();
        histogram.sort_unstable_by_key(|&(color, _)| color);
        histogram
    }

    /// Number of distinct colors in the buffer
    pub fn distinct_colors(&self) -> usize {
        self.color_histogram().len()
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(RetroError::invalid_parameter(
            "dimensions",
            format!("{}x{} image has no pixels", width, height),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(PixelBuffer::new_filled(0, 4, [0, 0, 0]).is_err());
        assert!(PixelBuffer::new_filled(4, 0, [0, 0, 0]).is_err());
        assert!(PixelBuffer::new(RgbImage::new(0, 0)).is_err());
    }

    #[test]
    fn test_from_rgb_bytes_checks_length() {
        assert!(PixelBuffer::from_rgb_bytes(2, 2, vec![0; 12]).is_ok());

        let err = PixelBuffer::from_rgb_bytes(2, 2, vec![0; 11]).unwrap_err();
        assert!(matches!(err, RetroError::InvalidParameter { .. }));
    }

    #[test]
    fn test_map_pixels_leaves_source_untouched() {
        let source = PixelBuffer::new_filled(3, 2, [10, 20, 30]).unwrap();
        let inverted = source.map_pixels(|[r, g, b]| [255 - r, 255 - g, 255 - b]);

        assert_eq!(source.get_pixel(0, 0), [10, 20, 30]);
        assert_eq!(inverted.get_pixel(2, 1), [245, 235, 225]);
        assert_eq!(inverted.dimensions(), (3, 2));
    }

    #[test]
    fn test_color_histogram() {
        let buffer = PixelBuffer::from_fn(4, 1, |x, _| if x < 3 { [1, 1, 1] } else { [0, 0, 0] }).unwrap();

        assert_eq!(buffer.color_histogram(), vec![([0, 0, 0], 1), ([1, 1, 1], 3)]);
        assert_eq!(buffer.distinct_colors(), 2);
        assert_eq!(buffer.len(), 4);
    }
}
