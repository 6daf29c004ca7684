//! # Palette Quantization
//!
//! Maps a full-color buffer onto a palette, either by plain nearest-color
//! lookup or with Floyd–Steinberg error diffusion.

pub mod dither;

use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::palette::{median_cut, Palette};
use crate::raster::PixelBuffer;

pub use dither::floyd_steinberg;

/// Replace every pixel with its nearest palette entry; rows are processed in parallel
pub fn map_to_palette(image: &PixelBuffer, palette: &Palette) -> PixelBuffer {
    let row_len = image.width() as usize * 3;
    let mut out = image.as_image().clone();
    let samples: &mut [u8] = &mut out;

    samples.par_chunks_mut(row_len).for_each(|row| {
        for pixel in row.chunks_exact_mut(3) {
            let nearest = palette.nearest([pixel[0], pixel[1], pixel[2]]);
            pixel.copy_from_slice(&nearest);
        }
    });

    PixelBuffer::from_stage(out)
}

/// Quantize `image` to `palette`, with or without dithering.
///
/// Either way the output contains only colors from `palette`.
pub fn quantize(image: &PixelBuffer, palette: &Palette, dither: bool) -> PixelBuffer {
    debug!("Quantizing to {} colors (dither: {})", palette.len(), dither);
    if dither {
        floyd_steinberg(image, palette)
    } else {
        map_to_palette(image, palette)
    }
}

/// Generate a `colors`-entry palette from the image itself, then quantize to it
pub fn quantize_adaptive(image: &PixelBuffer, colors: usize, dither: bool) -> Result<PixelBuffer> {
    let palette = median_cut(image, colors)?;
    Ok(quantize(image, &palette, dither))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RetroError;
    use crate::palette::builtin::PICO8;

    fn photo_like() -> PixelBuffer {
        PixelBuffer::from_fn(48, 32, |x, y| [(x * 5) as u8, (y * 7) as u8, ((x * y) % 255) as u8]).unwrap()
    }

    #[test]
    fn test_nearest_mapping_contained_in_palette() {
        let palette = Palette::from_slice(&PICO8).unwrap();
        let out = quantize(&photo_like(), &palette, false);
        assert!(out.pixels().all(|p| palette.contains(p)));
    }

    #[test]
    fn test_dithered_mapping_contained_in_palette() {
        let palette = Palette::from_slice(&PICO8).unwrap();
        let out = quantize(&photo_like(), &palette, true);
        assert!(out.pixels().all(|p| palette.contains(p)));
    }

    #[test]
    fn test_parallel_mapping_matches_per_pixel_lookup() {
        let image = photo_like();
        let palette = Palette::from_slice(&PICO8).unwrap();
        let out = map_to_palette(&image, &palette);

        for (src, dst) in image.pixels().zip(out.pixels()) {
            assert_eq!(palette.nearest(src), dst);
        }
    }

    #[test]
    fn test_adaptive_color_budget() {
        let image = photo_like();
        for dither in [false, true] {
            let out = quantize_adaptive(&image, 16, dither).unwrap();
            assert!(out.distinct_colors() <= 16);
        }
    }

    #[test]
    fn test_adaptive_rejects_oversized_palette() {
        let err = quantize_adaptive(&photo_like(), 512, false).unwrap_err();
        assert!(matches!(err, RetroError::UnsupportedPaletteSize { .. }));
    }
}
