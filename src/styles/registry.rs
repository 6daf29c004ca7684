use std::fmt;
use std::str::FromStr;

use crate::effects::curves::{GAMEBOY_BRIGHTNESS, N64_BLUR_SIGMA};
use crate::error::{Result, RetroError};
use crate::palette::HardwarePalette;

/// Identifies one entry of the style catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleId {
    Pico8,
    GameBoy,
    Commodore64,
    ZxSpectrum,
    Ega16,
    AppleII,
    GameBoyColor,
    GameBoyAdvance,
    NintendoDs,
    PlayStation,
    Genesis,
    Nes,
    Nintendo64,
    Arcade,
}

/// How large an adaptive palette a style asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBudget {
    Fixed(usize),
    /// Fixed count for sprites; no reduction at all in PS1 movie mode
    Ps1(usize),
    /// Decided by the N64 texture mode
    N64Texture,
}

/// Where a quantization stage gets its palette from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteSource {
    Hardware(HardwarePalette),
    /// The Nestopia palette adjusted for the requested emphasis bits
    NesEmphasis,
    /// Generated from the image by median cut
    Adaptive(ColorBudget),
}

/// Gaussian blur strength of a blur stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlurRadius {
    Fixed(f32),
    /// 0.5 normally, 1.2 in movie mode
    Ps1,
}

/// One step of a style's pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stage {
    Brightness(f32),
    SnapBits(u8),
    Blur(BlurRadius),
    /// Runs only when the Genesis VDP flag is set
    GenesisVdpCurve,
    ArcadeEnhance,
    Quantize(PaletteSource),
}

/// A named style: its identity and the stages run after pixelation
#[derive(Debug)]
pub struct StyleDefinition {
    pub id: StyleId,
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub stages: &'static [Stage],
}

use Stage::*;

static CATALOG: [StyleDefinition; 14] = [
    StyleDefinition {
        id: StyleId::Pico8,
        name: "PICO-8 (16 colors)",
        slug: "pico8",
        description: "Fantasy console palette of 16 fixed colors",
        stages: &[Quantize(PaletteSource::Hardware(HardwarePalette::Pico8))],
    },
    StyleDefinition {
        id: StyleId::GameBoy,
        name: "Game Boy (4 colors)",
        slug: "gameboy",
        description: "Slightly brightened and mapped onto the four DMG greens",
        stages: &[
            Brightness(GAMEBOY_BRIGHTNESS),
            Quantize(PaletteSource::Hardware(HardwarePalette::GameBoyDmg)),
        ],
    },
    StyleDefinition {
        id: StyleId::Commodore64,
        name: "Commodore 64 (16 colors)",
        slug: "c64",
        description: "The VIC-II's 16 color palette",
        stages: &[Quantize(PaletteSource::Hardware(HardwarePalette::Commodore64))],
    },
    StyleDefinition {
        id: StyleId::ZxSpectrum,
        name: "ZX Spectrum (8 colors)",
        slug: "zx-spectrum",
        description: "The eight non-bright Spectrum colors",
        stages: &[Quantize(PaletteSource::Hardware(HardwarePalette::ZxSpectrum8))],
    },
    StyleDefinition {
        id: StyleId::Ega16,
        name: "EGA 16",
        slug: "ega16",
        description: "Default 16 color EGA palette",
        stages: &[Quantize(PaletteSource::Hardware(HardwarePalette::Ega16))],
    },
    StyleDefinition {
        id: StyleId::AppleII,
        name: "Apple II (Lo-Res 16)",
        slug: "apple2",
        description: "Apple II low-resolution graphics colors",
        stages: &[Quantize(PaletteSource::Hardware(HardwarePalette::AppleIILoRes16))],
    },
    StyleDefinition {
        id: StyleId::GameBoyColor,
        name: "Game Boy Color (RGB555, 32 colors)",
        slug: "gbc",
        description: "15-bit color reduced to an adaptive 32 color palette",
        stages: &[SnapBits(5), Quantize(PaletteSource::Adaptive(ColorBudget::Fixed(32)))],
    },
    StyleDefinition {
        id: StyleId::GameBoyAdvance,
        name: "Game Boy Advance (RGB555, 64 colors)",
        slug: "gba",
        description: "15-bit color reduced to an adaptive 64 color palette",
        stages: &[SnapBits(5), Quantize(PaletteSource::Adaptive(ColorBudget::Fixed(64)))],
    },
    StyleDefinition {
        id: StyleId::NintendoDs,
        name: "Nintendo DS (RGB666, 64 colors)",
        slug: "nds",
        description: "18-bit color reduced to an adaptive 64 color palette",
        stages: &[SnapBits(6), Quantize(PaletteSource::Adaptive(ColorBudget::Fixed(64)))],
    },
    StyleDefinition {
        id: StyleId::PlayStation,
        name: "PlayStation (PS1, RGB555, 32 colors)",
        slug: "ps1",
        description: "15-bit color with soft video blur; 32 colors unless in movie mode",
        stages: &[
            SnapBits(5),
            Blur(BlurRadius::Ps1),
            Quantize(PaletteSource::Adaptive(ColorBudget::Ps1(32))),
        ],
    },
    StyleDefinition {
        id: StyleId::Genesis,
        name: "Sega Genesis / Mega Drive (RGB333, 64 colors)",
        slug: "genesis",
        description: "9-bit color, optional non-linear VDP ramp, adaptive 64 colors",
        stages: &[
            SnapBits(3),
            GenesisVdpCurve,
            Quantize(PaletteSource::Adaptive(ColorBudget::Fixed(64))),
        ],
    },
    StyleDefinition {
        id: StyleId::Nes,
        name: "NES (Nestopia 54-color)",
        slug: "nes",
        description: "Nestopia's 54 color palette with optional emphasis bits",
        stages: &[Quantize(PaletteSource::NesEmphasis)],
    },
    StyleDefinition {
        id: StyleId::Nintendo64,
        name: "Nintendo 64 (RGBA5551-like, 64 colors)",
        slug: "n64",
        description: "Texture-filtered blur, 15-bit color, palette size from the texture mode",
        stages: &[
            Blur(BlurRadius::Fixed(N64_BLUR_SIGMA)),
            SnapBits(5),
            Quantize(PaletteSource::Adaptive(ColorBudget::N64Texture)),
        ],
    },
    StyleDefinition {
        id: StyleId::Arcade,
        name: "Adaptive 32-color (Arcade-like)",
        slug: "arcade",
        description: "Boosted contrast and saturation with an adaptive 32 color palette",
        stages: &[ArcadeEnhance, Quantize(PaletteSource::Adaptive(ColorBudget::Fixed(32)))],
    },
];

impl StyleId {
    /// Every style in catalog order
    pub const ALL: [StyleId; 14] = [
        StyleId::Pico8,
        StyleId::GameBoy,
        StyleId::Commodore64,
        StyleId::ZxSpectrum,
        StyleId::Ega16,
        StyleId::AppleII,
        StyleId::GameBoyColor,
        StyleId::GameBoyAdvance,
        StyleId::NintendoDs,
        StyleId::PlayStation,
        StyleId::Genesis,
        StyleId::Nes,
        StyleId::Nintendo64,
        StyleId::Arcade,
    ];

    pub fn definition(self) -> &'static StyleDefinition {
        // CATALOG is laid out in declaration order of StyleId
        &CATALOG[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.definition().name
    }

    pub fn slug(self) -> &'static str {
        self.definition().slug
    }

    /// Resolve a display name exactly, or a slug ignoring case
    pub fn from_name(name: &str) -> Option<StyleId> {
        let trimmed = name.trim();
        CATALOG
            .iter()
            .find(|def| def.name == trimmed)
            .or_else(|| CATALOG.iter().find(|def| def.slug.eq_ignore_ascii_case(trimmed)))
            .map(|def| def.id)
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleId {
    type Err = RetroError;

    fn from_str(s: &str) -> Result<Self> {
        StyleId::from_name(s).ok_or_else(|| RetroError::unknown_style(s))
    }
}

/// Read-only view of the built-in style catalog
///
/// The catalog is process-wide constant data; the registry only provides
/// lookups over it.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleRegistry;

impl StyleRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Get a style by display name or slug
    pub fn get_style(&self, name: &str) -> Option<&'static StyleDefinition> {
        StyleId::from_name(name).map(StyleId::definition)
    }

    /// Display names of all styles in catalog order
    pub fn available_styles(&self) -> Vec<&'static str> {
        CATALOG.iter().map(|def| def.name).collect()
    }

    pub fn has_style(&self, name: &str) -> bool {
        StyleId::from_name(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static StyleDefinition> {
        CATALOG.iter()
    }

    pub fn len(&self) -> usize {
        CATALOG.len()
    }

    pub fn is_empty(&self) -> bool {
        CATALOG.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_matches_ids() {
        for (index, id) in StyleId::ALL.iter().enumerate() {
            assert_eq!(CATALOG[index].id, *id);
            assert_eq!(id.definition().id, *id);
        }
    }

    #[test]
    fn test_builtin_styles_available() {
        let registry = StyleRegistry::new();

        assert_eq!(registry.len(), 14);
        assert!(registry.has_style("Game Boy (4 colors)"));
        assert!(registry.has_style("EGA 16"));
        assert!(registry.has_style("genesis"));
        assert!(!registry.has_style("not-a-style"));
    }

    #[test]
    fn test_get_style_by_name_and_slug() {
        let registry = StyleRegistry::new();

        let by_name = registry.get_style("NES (Nestopia 54-color)").unwrap();
        let by_slug = registry.get_style("NES").unwrap();
        assert_eq!(by_name.id, StyleId::Nes);
        assert_eq!(by_slug.id, StyleId::Nes);

        assert!(registry.get_style("Amiga").is_none());
    }

    #[test]
    fn test_names_and_slugs_unique() {
        let mut names: Vec<_> = CATALOG.iter().map(|d| d.name).collect();
        let mut slugs: Vec<_> = CATALOG.iter().map(|d| d.slug).collect();
        names.sort_unstable();
        names.dedup();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(names.len(), 14);
        assert_eq!(slugs.len(), 14);
    }

    #[test]
    fn test_catalog_composition() {
        let fixed = CATALOG
            .iter()
            .filter(|d| d.stages.iter().any(|s| matches!(s, Quantize(PaletteSource::Hardware(_)))))
            .count();
        let adaptive_only = CATALOG
            .iter()
            .filter(|d| d.stages.iter().all(|s| !matches!(s, SnapBits(_))))
            .filter(|d| d.stages.iter().any(|s| matches!(s, Quantize(PaletteSource::Adaptive(_)))))
            .count();

        assert_eq!(fixed, 6);
        assert_eq!(adaptive_only, 1);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "Virtual Boy".parse::<StyleId>().unwrap_err();
        assert!(matches!(err, RetroError::UnknownStyle { .. }));
        assert_eq!("ps1".parse::<StyleId>().unwrap(), StyleId::PlayStation);
    }
}
