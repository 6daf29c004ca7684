use crate::error::{Result, RetroError};
use crate::raster::Color;

/// Maximum number of entries an indexed palette can hold
pub const MAX_PALETTE_SIZE: usize = 256;

/// An ordered set of representative colors
///
/// The order only matters for lookup identity: when two entries are equally
/// close to a color, the one with the lower index wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette, enforcing 1..=256 entries
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(RetroError::invalid_parameter("palette", "palette has no colors"));
        }
        if colors.len() > MAX_PALETTE_SIZE {
            return Err(RetroError::UnsupportedPaletteSize {
                requested: colors.len(),
                capacity: MAX_PALETTE_SIZE,
            });
        }
        Ok(Self { colors })
    }

    /// Create a palette from a constant color table
    pub fn from_slice(colors: &[Color]) -> Result<Self> {
        Self::new(colors.to_vec())
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a palette has at least one entry
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    /// Index of the entry closest to `color` by squared Euclidean RGB distance.
    /// Ties resolve to the lowest index.
    pub fn nearest_index(&self, color: Color) -> usize {
        self.nearest_index_f32([color[0] as f32, color[1] as f32, color[2] as f32])
    }

    /// Closest palette entry to `color`
    pub fn nearest(&self, color: Color) -> Color {
        self.colors[self.nearest_index(color)]
    }

    /// Nearest lookup for colors carrying accumulated dither error, which may
    /// fall outside 0..=255.
    pub fn nearest_index_f32(&self, color: [f32; 3]) -> usize {
        let mut best_index = 0;
        let mut best_distance = f32::INFINITY;
        for (index, entry) in self.colors.iter().enumerate() {
            let distance = squared_distance(color, *entry);
            if distance < best_distance {
                best_distance = distance;
                best_index = index;
            }
        }
        best_index
    }

    /// Build a new palette by mapping every entry through `f`
    pub fn map_colors<F>(&self, f: F) -> Self
    where
        F: FnMut(&Color) -> Color,
    {
        Self {
            colors: self.colors.iter().map(f).collect(),
        }
    }
}

fn squared_distance(a: [f32; 3], b: Color) -> f32 {
    let dr = a[0] - b[0] as f32;
    let dg = a[1] - b[1] as f32;
    let db = a[2] - b[2] as f32;
    dr * dr + dg * dg + db * db
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_bounds() {
        assert!(matches!(
            Palette::new(vec![]),
            Err(RetroError::InvalidParameter { .. })
        ));
        assert!(matches!(
            Palette::new(vec![[0, 0, 0]; 257]),
            Err(RetroError::UnsupportedPaletteSize { requested: 257, capacity: 256 })
        ));
        assert_eq!(Palette::new(vec![[0, 0, 0]; 256]).unwrap().len(), 256);
    }

    #[test]
    fn test_nearest_color() {
        let palette = Palette::new(vec![[0, 0, 0], [255, 255, 255], [255, 0, 0]]).unwrap();

        assert_eq!(palette.nearest([20, 10, 5]), [0, 0, 0]);
        assert_eq!(palette.nearest([200, 40, 30]), [255, 0, 0]);
        assert_eq!(palette.nearest([230, 230, 240]), [255, 255, 255]);
    }

    #[test]
    fn test_tie_breaks_to_lower_index() {
        let palette = Palette::new(vec![[100, 0, 0], [0, 0, 0], [200, 0, 0]]).unwrap();

        // 50 is equidistant from 0 and 100, 150 from 100 and 200
        assert_eq!(palette.nearest_index([50, 0, 0]), 0);
        assert_eq!(palette.nearest_index([150, 0, 0]), 0);

        let duplicates = Palette::new(vec![[9, 9, 9], [9, 9, 9]]).unwrap();
        assert_eq!(duplicates.nearest_index([9, 9, 9]), 0);
    }
}
