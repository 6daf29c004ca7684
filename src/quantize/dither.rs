//! Floyd–Steinberg error diffusion.

use image::Rgb;

use crate::palette::Palette;
use crate::raster::PixelBuffer;

/// Weights (out of 16) pushed to the right, lower-left, lower and lower-right
/// neighbors.
const KERNEL: [(i64, i64, f32); 4] = [(1, 0, 7.0), (-1, 1, 3.0), (0, 1, 5.0), (1, 1, 1.0)];

/// Map `image` onto `palette`, diffusing each pixel's quantization error to
/// its unprocessed neighbors in raster order.
///
/// Accumulated values are clamped to 0..=255 before the lookup so that error
/// cannot snowball across flat regions. Every output pixel is a palette entry.
pub fn floyd_steinberg(image: &PixelBuffer, palette: &Palette) -> PixelBuffer {
    let width = image.width() as i64;
    let height = image.height() as i64;

    let mut work: Vec<[f32; 3]> = image
        .pixels()
        .map(|c| [c[0] as f32, c[1] as f32, c[2] as f32])
        .collect();
    let mut out = image.as_image().clone();

    for y in 0..height {
        for x in 0..width {
            let i = (y * width + x) as usize;
            let value = work[i].map(|v| v.clamp(0.0, 255.0));
            let chosen = palette.colors()[palette.nearest_index_f32(value)];
            out.put_pixel(x as u32, y as u32, Rgb(chosen));

            let error = [
                value[0] - chosen[0] as f32,
                value[1] - chosen[1] as f32,
                value[2] - chosen[2] as f32,
            ];
            for (dx, dy, weight) in KERNEL {
                let (nx, ny) = (x + dx, y + dy);
                if nx < 0 || nx >= width || ny >= height {
                    continue;
                }
                let neighbor = &mut work[(ny * width + nx) as usize];
                for c in 0..3 {
                    neighbor[c] += error[c] * weight / 16.0;
                }
            }
        }
    }

    PixelBuffer::from_stage(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black_and_white() -> Palette {
        Palette::new(vec![[0, 0, 0], [255, 255, 255]]).unwrap()
    }

    #[test]
    fn test_output_only_uses_palette_colors() {
        let image = PixelBuffer::from_fn(32, 16, |x, y| [(x * 8) as u8, (y * 16) as u8, 77]).unwrap();
        let palette = Palette::new(vec![[0, 0, 0], [255, 0, 0], [0, 255, 0], [0, 0, 255], [255, 255, 255]]).unwrap();

        let out = floyd_steinberg(&image, &palette);
        assert_eq!(out.dimensions(), image.dimensions());
        assert!(out.pixels().all(|p| palette.contains(p)));
    }

    #[test]
    fn test_mid_grey_becomes_a_mix() {
        let image = PixelBuffer::new_filled(16, 16, [128, 128, 128]).unwrap();
        let out = floyd_steinberg(&image, &black_and_white());

        let white = out.pixels().filter(|&p| p == [255, 255, 255]).count();
        assert!(white > 96 && white < 160, "{} white pixels", white);
    }

    #[test]
    fn test_exact_palette_colors_pass_through() {
        let image = PixelBuffer::from_fn(4, 4, |x, _| if x % 2 == 0 { [0, 0, 0] } else { [255, 255, 255] }).unwrap();
        assert_eq!(floyd_steinberg(&image, &black_and_white()), image);
    }
}
