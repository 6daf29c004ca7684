use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::raster::types::PixelBuffer;

/// Decode an image file (PNG, JPEG, BMP, GIF) into an RGB buffer.
///
/// Alpha is discarded; the pipeline only models RGB.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<PixelBuffer> {
    let path = path.as_ref();
    let decoded = image::open(path)?.to_rgb8();
    debug!("Loaded {:?}: {}x{}", path, decoded.width(), decoded.height());
    PixelBuffer::new(decoded)
}

/// Decode an in-memory encoded image into an RGB buffer
pub fn load_image_from_memory(bytes: &[u8]) -> Result<PixelBuffer> {
    let decoded = image::load_from_memory(bytes)?.to_rgb8();
    PixelBuffer::new(decoded)
}

/// Encode a buffer to disk; the format follows the file extension
pub fn save_image<P: AsRef<Path>>(buffer: &PixelBuffer, path: P) -> Result<()> {
    let path = path.as_ref();
    buffer.as_image().save(path)?;
    debug!("Saved {}x{} image to {:?}", buffer.width(), buffer.height(), path);
    Ok(())
}

/// Turn a style's display name into a file-system safe stem, e.g.
/// `"Sega Genesis / Mega Drive (RGB333, 64 colors)"` becomes
/// `"Sega_Genesis_-_Mega_Drive_RGB333_64_colors"`.
pub fn sanitize_file_stem(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '(' | ')' | ','))
        .map(|c| match c {
            '/' => '-',
            ' ' => '_',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_png_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gradient.png");

        let original = PixelBuffer::from_fn(5, 3, |x, y| [(x * 50) as u8, (y * 80) as u8, 7]).unwrap();
        save_image(&original, &path).unwrap();
        let loaded = load_image(&path).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(load_image(dir.path().join("missing.png")).is_err());
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        assert!(load_image_from_memory(b"definitely not an image").is_err());
    }

    #[test]
    fn test_sanitize_file_stem() {
        assert_eq!(
            sanitize_file_stem("Sega Genesis / Mega Drive (RGB333, 64 colors)"),
            "Sega_Genesis_-_Mega_Drive_RGB333_64_colors"
        );
        assert_eq!(sanitize_file_stem("EGA 16"), "EGA_16");
    }
}
