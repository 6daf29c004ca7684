//! # Raster Module
//!
//! The RGB pixel buffer every pipeline stage consumes and produces, plus the
//! decode/encode helpers used by the binaries. The style pipeline itself never
//! touches [`io`].

pub mod io;
pub mod types;

pub use io::{load_image, load_image_from_memory, sanitize_file_stem, save_image};
pub use types::{Color, PixelBuffer};
