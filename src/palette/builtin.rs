//! Fixed color tables of classic machines.

use crate::error::Result;
use crate::palette::types::Palette;
use crate::raster::Color;

pub const PICO8: [Color; 16] = [
    [0, 0, 0], [29, 43, 83], [126, 37, 83], [0, 135, 81],
    [171, 82, 54], [95, 87, 79], [194, 195, 199], [255, 241, 232],
    [255, 0, 77], [255, 163, 0], [255, 236, 39], [0, 228, 54],
    [41, 173, 255], [131, 118, 156], [255, 119, 168], [255, 204, 170],
];

/// Original DMG green shades, darkest first
pub const GAMEBOY_DMG: [Color; 4] = [[15, 56, 15], [48, 98, 48], [139, 172, 15], [155, 188, 15]];

pub const C64: [Color; 16] = [
    [0, 0, 0], [255, 255, 255], [136, 0, 0], [170, 255, 238],
    [204, 68, 204], [0, 170, 0], [0, 0, 170], [238, 238, 119],
    [221, 136, 85], [102, 68, 0], [255, 119, 119], [51, 51, 51],
    [119, 119, 119], [170, 255, 102], [102, 136, 255], [187, 187, 187],
];

/// Non-bright half of the Spectrum palette
pub const ZX_SPECTRUM_8: [Color; 8] = [
    [0, 0, 0], [0, 0, 192], [192, 0, 0], [192, 0, 192],
    [0, 192, 0], [0, 192, 192], [192, 192, 0], [192, 192, 192],
];

pub const EGA16: [Color; 16] = [
    [0, 0, 0], [0, 0, 170], [0, 170, 0], [0, 170, 170],
    [170, 0, 0], [170, 0, 170], [170, 85, 0], [170, 170, 170],
    [85, 85, 85], [85, 85, 255], [85, 255, 85], [85, 255, 255],
    [255, 85, 85], [255, 85, 255], [255, 255, 85], [255, 255, 255],
];

/// Apple II lo-res; both greys are listed as the hardware has two identical ones
pub const APPLE2_LORES_16: [Color; 16] = [
    [0, 0, 0], [147, 11, 124], [31, 53, 211], [187, 54, 255],
    [0, 118, 12], [126, 126, 126], [7, 168, 224], [157, 172, 255],
    [98, 76, 0], [249, 86, 29], [126, 126, 126], [255, 129, 236],
    [67, 200, 0], [220, 205, 22], [93, 247, 132], [255, 255, 255],
];

/// The 54 usable entries of Nestopia's NES palette
pub const NES_NESTOPIA_54: [Color; 54] = [
    [255, 255, 255], [173, 173, 173], [99, 99, 99], [0, 0, 0],
    [189, 222, 255], [99, 173, 255], [25, 99, 214], [0, 41, 140],
    [214, 214, 255], [148, 148, 255], [66, 66, 255], [16, 16, 165],
    [247, 197, 255], [197, 115, 255], [115, 41, 255], [58, 0, 165],
    [247, 197, 255], [239, 107, 255], [156, 25, 206], [90, 0, 123],
    [255, 197, 230], [255, 107, 206], [181, 33, 123], [107, 0, 66],
    [255, 206, 197], [255, 132, 115], [181, 49, 33], [107, 8, 0],
    [247, 214, 165], [230, 156, 33], [156, 74, 0], [82, 33, 0],
    [230, 230, 148], [189, 189, 0], [107, 107, 0], [49, 49, 0],
    [206, 239, 148], [140, 214, 0], [58, 132, 0], [8, 74, 0],
    [189, 247, 173], [90, 230, 49], [16, 148, 0], [0, 82, 0],
    [181, 247, 206], [66, 222, 132], [0, 140, 49], [0, 82, 8],
    [181, 239, 239], [74, 206, 222], [0, 123, 140], [0, 66, 74],
    [181, 181, 181], [82, 82, 82],
];

/// Identifies one of the fixed hardware palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HardwarePalette {
    Pico8,
    GameBoyDmg,
    Commodore64,
    ZxSpectrum8,
    Ega16,
    AppleIILoRes16,
    NesNestopia54,
}

impl HardwarePalette {
    pub const ALL: [HardwarePalette; 7] = [
        HardwarePalette::Pico8,
        HardwarePalette::GameBoyDmg,
        HardwarePalette::Commodore64,
        HardwarePalette::ZxSpectrum8,
        HardwarePalette::Ega16,
        HardwarePalette::AppleIILoRes16,
        HardwarePalette::NesNestopia54,
    ];

    pub fn colors(self) -> &'static [Color] {
        match self {
            HardwarePalette::Pico8 => &PICO8,
            HardwarePalette::GameBoyDmg => &GAMEBOY_DMG,
            HardwarePalette::Commodore64 => &C64,
            HardwarePalette::ZxSpectrum8 => &ZX_SPECTRUM_8,
            HardwarePalette::Ega16 => &EGA16,
            HardwarePalette::AppleIILoRes16 => &APPLE2_LORES_16,
            HardwarePalette::NesNestopia54 => &NES_NESTOPIA_54,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HardwarePalette::Pico8 => "PICO-8",
            HardwarePalette::GameBoyDmg => "Game Boy DMG",
            HardwarePalette::Commodore64 => "Commodore 64",
            HardwarePalette::ZxSpectrum8 => "ZX Spectrum",
            HardwarePalette::Ega16 => "EGA",
            HardwarePalette::AppleIILoRes16 => "Apple II lo-res",
            HardwarePalette::NesNestopia54 => "NES (Nestopia)",
        }
    }

    pub fn palette(self) -> Result<Palette> {
        Palette::from_slice(self.colors())
    }
}
