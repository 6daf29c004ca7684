//! Hardware color quirks: output ramps, emphasis bits, video blur and the
//! punchy look of arcade monitors.

use image::imageops;
use tracing::debug;

use crate::error::{Result, RetroError};
use crate::palette::Palette;
use crate::raster::{Color, PixelBuffer};
use crate::styles::NesEmphasis;

/// Output levels of the Mega Drive VDP DAC
pub const GENESIS_LEVELS: [u8; 8] = [0, 52, 87, 116, 144, 172, 206, 255];

/// Attenuation applied to channels whose emphasis bit is clear
pub const NES_DIM_FACTOR: f32 = 0.85;

pub const GAMEBOY_BRIGHTNESS: f32 = 1.05;
pub const ARCADE_CONTRAST: f32 = 1.2;
pub const ARCADE_SATURATION: f32 = 1.1;

pub const PS1_BLUR_SIGMA: f32 = 0.5;
pub const PS1_MOVIE_BLUR_SIGMA: f32 = 1.2;
pub const N64_BLUR_SIGMA: f32 = 0.6;

#[inline]
fn clamp_channel(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Rec. 601 luma
#[inline]
fn luma(color: Color) -> f32 {
    0.299 * color[0] as f32 + 0.587 * color[1] as f32 + 0.114 * color[2] as f32
}

/// Lookup table mapping every value to the closest VDP level, the lower level
/// winning when two are equally close.
pub fn genesis_vdp_lut() -> [u8; 256] {
    let mut lut = [0u8; 256];
    for (v, slot) in lut.iter_mut().enumerate() {
        let v = v as i32;
        let mut best = GENESIS_LEVELS[0];
        for &level in &GENESIS_LEVELS[1..] {
            if (level as i32 - v).abs() < (best as i32 - v).abs() {
                best = level;
            }
        }
        *slot = best;
    }
    lut
}

/// Snap every channel to the Mega Drive's non-linear output ramp
pub fn apply_genesis_vdp_curve(image: &PixelBuffer) -> PixelBuffer {
    image.map_channels(&genesis_vdp_lut())
}

/// Derive the palette the NES produces with the given emphasis bits set.
///
/// Channels without emphasis are dimmed by [`NES_DIM_FACTOR`] (truncating);
/// emphasized channels keep full strength.
pub fn nes_emphasis_palette(palette: &Palette, emphasis: NesEmphasis) -> Palette {
    let factors = [
        if emphasis.red { 1.0 } else { NES_DIM_FACTOR },
        if emphasis.green { 1.0 } else { NES_DIM_FACTOR },
        if emphasis.blue { 1.0 } else { NES_DIM_FACTOR },
    ];
    palette.map_colors(|color| {
        [0, 1, 2].map(|c| (color[c] as f32 * factors[c]).clamp(0.0, 255.0) as u8)
    })
}

/// Scale every channel by `factor` (1.0 leaves the image unchanged)
pub fn adjust_brightness(image: &PixelBuffer, factor: f32) -> PixelBuffer {
    image.map_pixels(|color| color.map(|v| clamp_channel(v as f32 * factor)))
}

/// Stretch channel values away from the image's mean luma
pub fn adjust_contrast(image: &PixelBuffer, factor: f32) -> PixelBuffer {
    let total: f64 = image.pixels().map(|c| f64::from(luma(c))).sum();
    let mean = (total / image.len() as f64).round() as f32;
    image.map_pixels(|color| color.map(|v| clamp_channel(mean + factor * (v as f32 - mean))))
}

/// Push each pixel away from (or towards) its own grey value
pub fn adjust_saturation(image: &PixelBuffer, factor: f32) -> PixelBuffer {
    image.map_pixels(|color| {
        let grey = luma(color);
        color.map(|v| clamp_channel(grey + factor * (v as f32 - grey)))
    })
}

/// Contrast x1.2 followed by saturation x1.1
pub fn enhance_arcade(image: &PixelBuffer) -> PixelBuffer {
    adjust_saturation(&adjust_contrast(image, ARCADE_CONTRAST), ARCADE_SATURATION)
}

/// Gaussian blur with standard deviation `sigma`
pub fn gaussian_blur(image: &PixelBuffer, sigma: f32) -> Result<PixelBuffer> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(RetroError::invalid_parameter(
            "blur_radius",
            format!("blur radius {} must be a positive number", sigma),
        ));
    }
    debug!("Gaussian blur sigma {}", sigma);
    Ok(PixelBuffer::from_stage(imageops::blur(image.as_image(), sigma)))
}

/// Blur strength of PlayStation output; FMV playback is noticeably softer
pub fn ps1_blur_sigma(movie_mode: bool) -> f32 {
    if movie_mode {
        PS1_MOVIE_BLUR_SIGMA
    } else {
        PS1_BLUR_SIGMA
    }
}
