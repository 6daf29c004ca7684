use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RetroError};

/// Which NES color emphasis bits are set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct NesEmphasis {
    pub red: bool,
    pub green: bool,
    pub blue: bool,
}

/// Nintendo 64 texture format, which decides how many colors survive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum N64TextureMode {
    /// 16-bit direct color
    #[default]
    #[serde(rename = "RGBA5551")]
    Rgba5551,
    /// 8-bit color-indexed
    #[serde(rename = "CI8")]
    Ci8,
    /// 4-bit color-indexed
    #[serde(rename = "CI4")]
    Ci4,
}

impl N64TextureMode {
    pub const ALL: [N64TextureMode; 3] = [N64TextureMode::Rgba5551, N64TextureMode::Ci8, N64TextureMode::Ci4];

    /// Number of palette entries the texture format ends up with
    pub fn color_budget(self) -> usize {
        match self {
            N64TextureMode::Rgba5551 => 64,
            N64TextureMode::Ci8 => 256,
            N64TextureMode::Ci4 => 16,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            N64TextureMode::Rgba5551 => "RGBA5551",
            N64TextureMode::Ci8 => "CI8",
            N64TextureMode::Ci4 => "CI4",
        }
    }
}

impl fmt::Display for N64TextureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for N64TextureMode {
    type Err = RetroError;

    fn from_str(s: &str) -> Result<Self> {
        N64TextureMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                RetroError::invalid_parameter(
                    "n64_texture_mode",
                    format!("'{}' is not one of RGBA5551, CI8, CI4", s),
                )
            })
    }
}

/// Parameters shared by every style in one pipeline run
///
/// A single immutable record is passed by reference through the pipeline.
/// Each stage reads only the fields it cares about; the NES flags mean nothing
/// to the Game Boy style and are simply ignored there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleParameters {
    /// Edge length of the square pixel blocks (1 disables pixelation)
    pub pixel_block_size: u32,

    /// Use error-diffusion dithering when reducing to a palette
    pub dither: bool,

    /// Apply the Mega Drive non-linear DAC ramp
    pub genesis_vdp_curve: bool,

    /// PlayStation FMV look: stronger blur, no palette limit
    pub ps1_movie_mode: bool,

    /// Nintendo 64 texture format
    pub n64_texture_mode: N64TextureMode,

    /// NES emphasis bits
    pub nes_emphasis: NesEmphasis,
}

impl Default for StyleParameters {
    fn default() -> Self {
        Self {
            pixel_block_size: 12,
            dither: false,
            genesis_vdp_curve: false,
            ps1_movie_mode: false,
            n64_texture_mode: N64TextureMode::default(),
            nes_emphasis: NesEmphasis::default(),
        }
    }
}

impl StyleParameters {
    /// Parameters with the given block size and everything else at defaults
    pub fn with_block_size(pixel_block_size: u32) -> Self {
        Self {
            pixel_block_size,
            ..Self::default()
        }
    }

    pub fn dither(mut self, dither: bool) -> Self {
        self.dither = dither;
        self
    }

    pub fn nes_emphasis(mut self, emphasis: NesEmphasis) -> Self {
        self.nes_emphasis = emphasis;
        self
    }

    pub fn genesis_vdp_curve(mut self, enabled: bool) -> Self {
        self.genesis_vdp_curve = enabled;
        self
    }

    pub fn ps1_movie_mode(mut self, enabled: bool) -> Self {
        self.ps1_movie_mode = enabled;
        self
    }

    pub fn n64_texture_mode(mut self, mode: N64TextureMode) -> Self {
        self.n64_texture_mode = mode;
        self
    }

    /// Check the parameters before any stage runs
    pub fn validate(&self) -> Result<()> {
        if self.pixel_block_size == 0 {
            return Err(RetroError::invalid_parameter(
                "pixel_block_size",
                "block size must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = StyleParameters::default();
        assert_eq!(params.pixel_block_size, 12);
        assert!(!params.dither);
        assert_eq!(params.n64_texture_mode, N64TextureMode::Rgba5551);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_zero_block_size_invalid() {
        let params = StyleParameters::with_block_size(0);
        assert!(matches!(params.validate(), Err(RetroError::InvalidParameter { .. })));
    }

    #[test]
    fn test_builder_chain() {
        let params = StyleParameters::with_block_size(4)
            .dither(true)
            .genesis_vdp_curve(true)
            .ps1_movie_mode(true)
            .n64_texture_mode(N64TextureMode::Ci4)
            .nes_emphasis(NesEmphasis { red: true, ..NesEmphasis::default() });

        assert_eq!(params.pixel_block_size, 4);
        assert!(params.dither && params.genesis_vdp_curve && params.ps1_movie_mode);
        assert!(params.nes_emphasis.red && !params.nes_emphasis.blue);
        assert_eq!(params.n64_texture_mode.color_budget(), 16);
    }

    #[test]
    fn test_texture_mode_parsing() {
        assert_eq!("ci8".parse::<N64TextureMode>().unwrap(), N64TextureMode::Ci8);
        assert_eq!("RGBA5551".parse::<N64TextureMode>().unwrap(), N64TextureMode::Rgba5551);
        assert!("CI2".parse::<N64TextureMode>().is_err());
        assert_eq!(N64TextureMode::Ci4.to_string(), "CI4");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let params: StyleParameters = toml::from_str("dither = true\n[nes_emphasis]\nblue = true\n").unwrap();
        assert!(params.dither);
        assert!(params.nes_emphasis.blue);
        assert_eq!(params.pixel_block_size, 12);
    }
}
