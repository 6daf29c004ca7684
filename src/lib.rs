//! # Retro-Image-Maker
//!
//! Turn still images into retro renditions that mimic the constraints of classic
//! graphics hardware: tiny fixed palettes, low bit-depth framebuffers,
//! non-linear DACs, blurry video output and chunky pixels.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use retro_image_maker::{
//!     raster::{load_image, save_image},
//!     styles::{apply_style, StyleParameters},
//! };
//!
//! # fn main() -> retro_image_maker::Result<()> {
//! let photo = load_image("photo.jpg")?;
//! let params = StyleParameters::with_block_size(8).dither(true);
//!
//! let c64 = apply_style(&photo, "Commodore 64 (16 colors)", &params)?;
//! save_image(&c64, "photo_c64.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`raster`] - the RGB pixel buffer, plus decode/encode helpers
//! - [`palette`] - hardware palettes and adaptive palette generation
//! - [`effects`] - pixelation, bit-depth snapping and hardware color curves
//! - [`quantize`] - nearest-color mapping and Floyd–Steinberg dithering
//! - [`styles`] - the style catalog and the dispatcher that runs it
//! - [`config`] - configuration management
//!
//! Every pipeline stage is a pure function from an input buffer to a new
//! buffer, so [`styles::apply_all_styles`] can render the whole catalog in
//! parallel from one shared source image.

pub mod config;
pub mod effects;
pub mod error;
pub mod palette;
pub mod quantize;
pub mod raster;
pub mod styles;

// Re-export commonly used types for convenience
pub use crate::{
    config::Config,
    error::{Result, RetroError},
    raster::PixelBuffer,
    styles::{apply, apply_all_styles, apply_style, StyleId, StyleParameters, StyleRegistry},
};
