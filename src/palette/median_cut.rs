//! Adaptive palette generation by median cut.
//!
//! The color histogram is recursively split: the box with the widest channel
//! range is cut at the pixel-weighted median of that channel until the target
//! number of boxes is reached. Each box contributes its weighted mean color.
//! Ties (equal ranges, equal channel widths) always resolve to the first
//! candidate, so the result is deterministic for a given image.

use tracing::debug;

use crate::error::{Result, RetroError};
use crate::palette::types::{Palette, MAX_PALETTE_SIZE};
use crate::raster::{Color, PixelBuffer};

#[derive(Debug, Clone)]
struct ColorBox {
    /// Distinct colors with their pixel counts
    colors: Vec<(Color, u32)>,
}

impl ColorBox {
    /// Returns (channel, range) of the widest channel; first channel wins ties.
    fn widest_channel(&self) -> (usize, u8) {
        let mut min = [u8::MAX; 3];
        let mut max = [u8::MIN; 3];
        for (color, _) in &self.colors {
            for c in 0..3 {
                min[c] = min[c].min(color[c]);
                max[c] = max[c].max(color[c]);
            }
        }

        let mut best = (0, 0);
        for c in 0..3 {
            let range = max[c] - min[c];
            if range > best.1 {
                best = (c, range);
            }
        }
        best
    }

    fn can_split(&self) -> bool {
        self.colors.len() >= 2
    }

    fn split(mut self) -> (ColorBox, ColorBox) {
        let (channel, _) = self.widest_channel();
        self.colors.sort_unstable_by_key(|&(color, _)| (color[channel], color));

        let total: u64 = self.colors.iter().map(|&(_, n)| u64::from(n)).sum();
        let mut acc = 0u64;
        let mut split_idx = 0;
        for (i, &(_, n)) in self.colors.iter().enumerate() {
            acc += u64::from(n);
            if acc * 2 >= total {
                split_idx = i;
                break;
            }
        }
        // both halves must keep at least one color
        split_idx = split_idx.min(self.colors.len() - 2);

        let right = self.colors.split_off(split_idx + 1);
        (self, ColorBox { colors: right })
    }

    fn mean_color(&self) -> Color {
        let mut sums = [0u64; 3];
        let mut total = 0u64;
        for &(color, n) in &self.colors {
            let n = u64::from(n);
            for c in 0..3 {
                sums[c] += u64::from(color[c]) * n;
            }
            total += n;
        }
        if total == 0 {
            return [0, 0, 0];
        }
        // rounded integer mean
        sums.map(|s| ((s * 2 + total) / (total * 2)) as u8)
    }
}

/// Generate an adaptive palette of at most `target` colors for `image`.
///
/// An image with no more than `target` distinct colors gets exactly those
/// colors back. `target` must be within `1..=256`.
pub fn median_cut(image: &PixelBuffer, target: usize) -> Result<Palette> {
    if target == 0 {
        return Err(RetroError::invalid_parameter("colors", "adaptive palette needs at least one color"));
    }
    if target > MAX_PALETTE_SIZE {
        return Err(RetroError::UnsupportedPaletteSize {
            requested: target,
            capacity: MAX_PALETTE_SIZE,
        });
    }

    let histogram = image.color_histogram();
    if histogram.len() <= target {
        debug!("Image has {} colors, no reduction needed for {}", histogram.len(), target);
        return Palette::new(histogram.into_iter().map(|(color, _)| color).collect());
    }

    let mut boxes = vec![ColorBox { colors: histogram }];
    while boxes.len() < target {
        let mut candidate: Option<(usize, u8)> = None;
        for (i, b) in boxes.iter().enumerate() {
            if !b.can_split() {
                continue;
            }
            let (_, range) = b.widest_channel();
            if candidate.map_or(true, |(_, best)| range > best) {
                candidate = Some((i, range));
            }
        }

        let Some((idx, _)) = candidate else {
            break;
        };
        let (left, right) = boxes.remove(idx).split();
        boxes.insert(idx, right);
        boxes.insert(idx, left);
    }

    debug!("Median cut produced {} boxes for target {}", boxes.len(), target);
    Palette::new(boxes.iter().map(ColorBox::mean_color).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::from_fn(width, height, |x, y| {
            [(x * 255 / (width - 1)) as u8, (y * 255 / (height - 1)) as u8, ((x + y) % 256) as u8]
        })
        .unwrap()
    }

    #[test]
    fn test_few_colors_returned_verbatim() {
        let image = PixelBuffer::from_fn(4, 1, |x, _| if x % 2 == 0 { [200, 0, 0] } else { [0, 0, 200] }).unwrap();
        let palette = median_cut(&image, 16).unwrap();

        assert_eq!(palette.colors(), &[[0, 0, 200], [200, 0, 0]]);
    }

    #[test]
    fn test_palette_size_reaches_target() {
        let image = gradient(64, 64);
        for target in [16, 32, 64, 256] {
            let palette = median_cut(&image, target).unwrap();
            assert_eq!(palette.len(), target);
        }
    }

    #[test]
    fn test_deterministic() {
        let image = gradient(40, 30);
        assert_eq!(median_cut(&image, 32).unwrap(), median_cut(&image, 32).unwrap());
    }

    #[test]
    fn test_two_clusters_split_apart() {
        let image = PixelBuffer::from_fn(10, 10, |x, _| {
            if x < 5 { [10 + x as u8, 10, 10] } else { [240 - x as u8, 240, 240] }
        })
        .unwrap();
        let palette = median_cut(&image, 2).unwrap();

        assert!(palette.colors()[0][1] < 20);
        assert!(palette.colors()[1][1] > 230);
    }

    #[test]
    fn test_invalid_targets() {
        let image = gradient(8, 8);
        assert!(matches!(median_cut(&image, 0), Err(RetroError::InvalidParameter { .. })));
        assert!(matches!(
            median_cut(&image, 257),
            Err(RetroError::UnsupportedPaletteSize { requested: 257, .. })
        ));
    }
}
