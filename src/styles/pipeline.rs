//! Style dispatch: pixelate, then run the style's stages in order.
//!
//! Every function here is pure. The source buffer is only ever borrowed, so
//! any number of styles can be rendered from it concurrently.

use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::effects::{
    adjust_brightness, apply_genesis_vdp_curve, curves, enhance_arcade, gaussian_blur, nes_emphasis_palette,
    pixelate, snap_bits,
};
use crate::error::{Result, RetroError};
use crate::palette::{median_cut, HardwarePalette, Palette};
use crate::quantize::quantize;
use crate::raster::PixelBuffer;
use crate::styles::registry::{BlurRadius, ColorBudget, PaletteSource, Stage, StyleId};
use crate::styles::traits::StyleParameters;

impl ColorBudget {
    /// Number of colors to generate, or `None` when the reduction is skipped
    pub fn resolve(self, params: &StyleParameters) -> Option<usize> {
        match self {
            ColorBudget::Fixed(colors) => Some(colors),
            ColorBudget::Ps1(_) if params.ps1_movie_mode => None,
            ColorBudget::Ps1(colors) => Some(colors),
            ColorBudget::N64Texture => Some(params.n64_texture_mode.color_budget()),
        }
    }
}

impl PaletteSource {
    /// Produce the palette for a quantization stage, or `None` to skip it
    pub fn resolve(self, image: &PixelBuffer, params: &StyleParameters) -> Result<Option<Palette>> {
        match self {
            PaletteSource::Hardware(hardware) => hardware.palette().map(Some),
            PaletteSource::NesEmphasis => {
                let base = HardwarePalette::NesNestopia54.palette()?;
                Ok(Some(nes_emphasis_palette(&base, params.nes_emphasis)))
            }
            PaletteSource::Adaptive(budget) => match budget.resolve(params) {
                Some(colors) => median_cut(image, colors).map(Some),
                None => Ok(None),
            },
        }
    }
}

impl BlurRadius {
    pub fn sigma(self, params: &StyleParameters) -> f32 {
        match self {
            BlurRadius::Fixed(sigma) => sigma,
            BlurRadius::Ps1 => curves::ps1_blur_sigma(params.ps1_movie_mode),
        }
    }
}

impl Stage {
    /// Run this stage over `image`, returning a new buffer
    pub fn apply(&self, image: &PixelBuffer, params: &StyleParameters) -> Result<PixelBuffer> {
        match *self {
            Stage::Brightness(factor) => Ok(adjust_brightness(image, factor)),
            Stage::SnapBits(bits) => snap_bits(image, bits),
            Stage::Blur(radius) => gaussian_blur(image, radius.sigma(params)),
            Stage::GenesisVdpCurve if params.genesis_vdp_curve => Ok(apply_genesis_vdp_curve(image)),
            Stage::GenesisVdpCurve => Ok(image.clone()),
            Stage::ArcadeEnhance => Ok(enhance_arcade(image)),
            Stage::Quantize(source) => match source.resolve(image, params)? {
                Some(palette) => Ok(quantize(image, &palette, params.dither)),
                None => {
                    debug!("Palette reduction skipped");
                    Ok(image.clone())
                }
            },
        }
    }
}

/// Render `image` in the given style
pub fn apply(image: &PixelBuffer, style: StyleId, params: &StyleParameters) -> Result<PixelBuffer> {
    params.validate()?;
    let definition = style.definition();
    info!(
        "Applying {} to {}x{} image",
        definition.name,
        image.width(),
        image.height()
    );

    let mut work = pixelate(image, params.pixel_block_size)?;
    for stage in definition.stages {
        debug!("{}: {:?}", definition.slug, stage);
        work = stage.apply(&work, params)?;
    }
    Ok(work)
}

/// Render `image` in the style called `name` (display name or slug)
pub fn apply_style(image: &PixelBuffer, name: &str, params: &StyleParameters) -> Result<PixelBuffer> {
    let style = StyleId::from_name(name).ok_or_else(|| RetroError::unknown_style(name))?;
    apply(image, style, params)
}

/// Outcome of one style within a batch run
#[derive(Debug)]
pub struct StyleOutcome {
    pub style: StyleId,
    pub result: Result<PixelBuffer>,
}

/// Per-style results of rendering the whole catalog, in catalog order
#[derive(Debug)]
pub struct BatchReport {
    outcomes: Vec<StyleOutcome>,
}

impl BatchReport {
    pub fn iter(&self) -> impl Iterator<Item = &StyleOutcome> {
        self.outcomes.iter()
    }

    pub fn get(&self, style: StyleId) -> Option<&Result<PixelBuffer>> {
        self.outcomes.iter().find(|o| o.style == style).map(|o| &o.result)
    }

    pub fn successes(&self) -> impl Iterator<Item = (StyleId, &PixelBuffer)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|image| (o.style, image)))
    }

    pub fn failures(&self) -> impl Iterator<Item = (StyleId, &RetroError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|err| (o.style, err)))
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Results keyed by style display name
    pub fn into_map(self) -> BTreeMap<&'static str, Result<PixelBuffer>> {
        self.outcomes
            .into_iter()
            .map(|o| (o.style.name(), o.result))
            .collect()
    }
}

impl IntoIterator for BatchReport {
    type Item = StyleOutcome;
    type IntoIter = std::vec::IntoIter<StyleOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.into_iter()
    }
}

/// Render every catalog style on the global rayon pool.
///
/// A failing style is recorded in the report and never stops the others.
pub fn apply_all_styles(image: &PixelBuffer, params: &StyleParameters) -> BatchReport {
    let outcomes: Vec<StyleOutcome> = StyleId::ALL
        .par_iter()
        .map(|&style| {
            let result = apply(image, style, params);
            if let Err(e) = &result {
                warn!("{} failed: {}", style.name(), e);
            }
            StyleOutcome { style, result }
        })
        .collect();

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    info!("Rendered {} styles ({} failed)", outcomes.len(), failed);
    BatchReport { outcomes }
}

/// Like [`apply_all_styles`], but on a dedicated pool of `threads` workers
pub fn apply_all_styles_with_threads(
    image: &PixelBuffer,
    params: &StyleParameters,
    threads: usize,
) -> Result<BatchReport> {
    if threads == 0 {
        return Err(RetroError::invalid_parameter("threads", "need at least one worker thread"));
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| RetroError::invalid_parameter("threads", e.to_string()))?;
    debug!("Batch pool with {} threads", threads);
    Ok(pool.install(|| apply_all_styles(image, params)))
}
