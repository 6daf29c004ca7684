use image::imageops::{self, FilterType};
use tracing::debug;

use crate::error::{Result, RetroError};
use crate::raster::PixelBuffer;

/// Reduce the effective resolution of `image` to blocks of `block_size` pixels.
///
/// The image is shrunk to `max(1, W / block_size) x max(1, H / block_size)` by
/// area averaging, then blown back up to `W x H` with nearest-neighbor sampling
/// so the blocks keep hard edges. A block size of 1 returns the image unchanged.
pub fn pixelate(image: &PixelBuffer, block_size: u32) -> Result<PixelBuffer> {
    if block_size == 0 {
        return Err(RetroError::invalid_parameter(
            "pixel_block_size",
            "block size must be at least 1",
        ));
    }
    if block_size == 1 {
        return Ok(image.clone());
    }

    let (width, height) = image.dimensions();
    let small_width = (width / block_size).max(1);
    let small_height = (height / block_size).max(1);
    debug!(
        "Pixelating {}x{} through {}x{} (block {})",
        width, height, small_width, small_height, block_size
    );

    let small = imageops::thumbnail(image.as_image(), small_width, small_height);
    let restored = imageops::resize(&small, width, height, FilterType::Nearest);
    Ok(PixelBuffer::from_stage(restored))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(size: u32) -> PixelBuffer {
        PixelBuffer::from_fn(size, size, |x, y| {
            if (x + y) % 2 == 0 { [255, 255, 255] } else { [0, 0, 0] }
        })
        .unwrap()
    }

    #[test]
    fn test_block_size_one_is_identity() {
        let image = PixelBuffer::from_fn(7, 5, |x, y| [x as u8 * 30, y as u8 * 40, 99]).unwrap();
        assert_eq!(pixelate(&image, 1).unwrap(), image);
    }

    #[test]
    fn test_zero_block_size_rejected() {
        let image = checkerboard(4);
        assert!(matches!(pixelate(&image, 0), Err(RetroError::InvalidParameter { .. })));
    }

    #[test]
    fn test_four_corners_collapse_to_average() {
        let corners = [[255, 0, 0], [0, 255, 0], [0, 0, 255], [255, 255, 255]];
        let image = PixelBuffer::from_fn(2, 2, |x, y| corners[(y * 2 + x) as usize]).unwrap();

        let out = pixelate(&image, 2).unwrap();
        assert_eq!(out.dimensions(), (2, 2));

        let first = out.get_pixel(0, 0);
        assert!(out.pixels().all(|p| p == first));
        for channel in first {
            assert!((127..=128).contains(&channel), "channel {} is not the block mean", channel);
        }
    }

    #[test]
    fn test_uniform_image_unchanged() {
        let image = PixelBuffer::new_filled(64, 64, [128, 128, 128]).unwrap();
        assert_eq!(pixelate(&image, 8).unwrap(), image);
    }

    #[test]
    fn test_blocks_have_hard_edges() {
        let image = PixelBuffer::from_fn(8, 8, |x, _| if x < 4 { [0, 0, 0] } else { [200, 200, 200] }).unwrap();
        let out = pixelate(&image, 4).unwrap();

        for y in 0..8 {
            for x in 0..8 {
                let expected = if x < 4 { [0, 0, 0] } else { [200, 200, 200] };
                assert_eq!(out.get_pixel(x, y), expected);
            }
        }
    }

    #[test]
    fn test_block_larger_than_image_keeps_dimensions() {
        let image = checkerboard(6);
        let out = pixelate(&image, 48).unwrap();

        assert_eq!(out.dimensions(), (6, 6));
        assert_eq!(out.distinct_colors(), 1);
    }
}
