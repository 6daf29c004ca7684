//! # Retro Style System
//!
//! A catalog of named styles, each an ordered list of [`Stage`]s run after
//! pixelation, plus the dispatcher that executes them.
//!
//! ## Built-in Styles
//!
//! - **Fixed palettes**: PICO-8, Game Boy, Commodore 64, ZX Spectrum, EGA, Apple II
//! - **Bit depth + adaptive palette**: Game Boy Color, Game Boy Advance, Nintendo DS,
//!   PlayStation, Mega Drive, NES (emphasis), Nintendo 64
//! - **Adaptive only**: Arcade
//!
//! ## Usage
//!
//! ```rust,no_run
//! use retro_image_maker::raster::PixelBuffer;
//! use retro_image_maker::styles::{apply_style, StyleParameters};
//!
//! let image = PixelBuffer::new_filled(64, 64, [128, 128, 128])?;
//! let params = StyleParameters::with_block_size(8);
//! let gameboy = apply_style(&image, "Game Boy (4 colors)", &params)?;
//! # Ok::<(), retro_image_maker::RetroError>(())
//! ```

pub mod pipeline;
pub mod registry;
pub mod traits;

pub use pipeline::{apply, apply_all_styles, apply_all_styles_with_threads, apply_style, BatchReport, StyleOutcome};
pub use registry::{BlurRadius, ColorBudget, PaletteSource, Stage, StyleDefinition, StyleId, StyleRegistry};
pub use traits::{N64TextureMode, NesEmphasis, StyleParameters};
