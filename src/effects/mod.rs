//! # Effects Module
//!
//! Pure image-to-image stages used to build the retro styles:
//!
//! - [`pixelate`] - block averaging with hard-edged upscaling
//! - [`bits`] - per-channel bit-depth snapping (RGB333, RGB555, RGB666, ...)
//! - [`curves`] - hardware quirks: Genesis VDP ramp, NES emphasis, blur, arcade boost

pub mod bits;
pub mod curves;
pub mod pixelate;

pub use bits::{snap_bits, snap_rgb333, snap_rgb555, snap_rgb666};
pub use curves::{
    adjust_brightness, adjust_contrast, adjust_saturation, apply_genesis_vdp_curve, enhance_arcade,
    gaussian_blur, nes_emphasis_palette,
};
pub use pixelate::pixelate;
