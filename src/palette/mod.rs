//! # Palette Module
//!
//! Fixed hardware color tables, the [`Palette`] type with nearest-color lookup,
//! and adaptive palette generation for styles without a fixed palette.

pub mod builtin;
pub mod median_cut;
pub mod types;

pub use builtin::HardwarePalette;
pub use median_cut::median_cut;
pub use types::{Palette, MAX_PALETTE_SIZE};
