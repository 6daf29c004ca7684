use crate::error::{Result, RetroError};
use crate::raster::PixelBuffer;

/// Build the per-channel lookup table for an N-bit framebuffer.
///
/// An N-bit channel has `levels = 2^N - 1` steps of `floor(255 / levels)`, so
/// the representable values are `q * step` for `q` in `0..=levels` (RGB555
/// tops out at 248, not 255). Each input value maps to the nearest
/// representable value, rounding half up, which makes the table idempotent.
pub fn bit_depth_lut(bits: u8) -> Result<[u8; 256]> {
    if !(1..=8).contains(&bits) {
        return Err(RetroError::invalid_parameter(
            "bits",
            format!("bit depth {} is outside 1..=8", bits),
        ));
    }

    let levels = (1u32 << bits) - 1;
    let step = 255 / levels;
    let mut lut = [0u8; 256];
    for (v, slot) in lut.iter_mut().enumerate() {
        let q = ((2 * v as u32 + step) / (2 * step)).min(levels);
        *slot = (q * step) as u8;
    }
    Ok(lut)
}

/// Snap every channel of `image` to the levels of a `bits`-per-channel framebuffer
pub fn snap_bits(image: &PixelBuffer, bits: u8) -> Result<PixelBuffer> {
    let lut = bit_depth_lut(bits)?;
    Ok(image.map_channels(&lut))
}

/// 9-bit color (Mega Drive)
pub fn snap_rgb333(image: &PixelBuffer) -> Result<PixelBuffer> {
    snap_bits(image, 3)
}

/// 15-bit color (GBC, GBA, PS1, N64)
pub fn snap_rgb555(image: &PixelBuffer) -> Result<PixelBuffer> {
    snap_bits(image, 5)
}

/// 18-bit color (Nintendo DS)
pub fn snap_rgb666(image: &PixelBuffer) -> Result<PixelBuffer> {
    snap_bits(image, 6)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> PixelBuffer {
        PixelBuffer::from_fn(256, 1, |x, _| [x as u8, 255 - x as u8, (x * 7 % 256) as u8]).unwrap()
    }

    #[test]
    fn test_invalid_bit_depths() {
        assert!(bit_depth_lut(0).is_err());
        assert!(bit_depth_lut(9).is_err());
    }

    #[test]
    fn test_eight_bits_is_identity() {
        let image = ramp();
        assert_eq!(snap_bits(&image, 8).unwrap(), image);
    }

    #[test]
    fn test_level_counts() {
        for bits in 1..=8u8 {
            let lut = bit_depth_lut(bits).unwrap();
            let mut values: Vec<u8> = lut.to_vec();
            values.dedup();
            assert_eq!(values.len(), 1 << bits, "bits = {}", bits);
        }
    }

    #[test]
    fn test_rgb555_levels() {
        let lut = bit_depth_lut(5).unwrap();
        assert_eq!(lut[0], 0);
        assert_eq!(lut[128], 128);
        assert_eq!(lut[255], 248);
        assert!(lut.iter().all(|v| v % 8 == 0));
    }

    #[test]
    fn test_one_bit_threshold() {
        let lut = bit_depth_lut(1).unwrap();
        assert_eq!(lut[127], 0);
        assert_eq!(lut[128], 255);
    }

    #[test]
    fn test_snap_is_idempotent() {
        let image = ramp();
        for bits in 1..=8u8 {
            let once = snap_bits(&image, bits).unwrap();
            let twice = snap_bits(&once, bits).unwrap();
            assert_eq!(once, twice, "bits = {}", bits);
        }
    }

    #[test]
    fn test_named_depths() {
        let image = ramp();
        assert_eq!(snap_rgb333(&image).unwrap(), snap_bits(&image, 3).unwrap());
        assert_eq!(snap_rgb555(&image).unwrap(), snap_bits(&image, 5).unwrap());
        assert_eq!(snap_rgb666(&image).unwrap(), snap_bits(&image, 6).unwrap());
    }
}
