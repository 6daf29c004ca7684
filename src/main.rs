use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use retro_image_maker::{
    config::Config,
    raster::{load_image, sanitize_file_stem, save_image},
    styles::{self, N64TextureMode, StyleId, StyleParameters, StyleRegistry},
};

#[derive(Parser)]
#[command(
    name = "retro-image-maker",
    version,
    about = "Render images in the style of classic consoles and home computers",
    long_about = "Retro-Image-Maker pixelates an image and reduces it to the palette, bit depth and color quirks of a chosen piece of retro hardware. Render one style or the whole catalog at once."
)]
struct Cli {
    /// Source image (PNG, JPEG, BMP, GIF)
    #[arg(required_unless_present = "list")]
    input: Option<PathBuf>,

    /// Output image path for a single style
    #[arg(short, long, conflicts_with = "all")]
    output: Option<PathBuf>,

    /// Style display name or slug (see --list)
    #[arg(short, long, default_value = "pico8")]
    style: String,

    /// Render every style into this directory
    #[arg(long, value_name = "DIR")]
    all: Option<PathBuf>,

    /// Pixel block size
    #[arg(short, long)]
    pixel_size: Option<u32>,

    /// Enable Floyd–Steinberg dithering
    #[arg(short, long)]
    dither: bool,

    /// NES: emphasize red
    #[arg(long)]
    nes_red: bool,

    /// NES: emphasize green
    #[arg(long)]
    nes_green: bool,

    /// NES: emphasize blue
    #[arg(long)]
    nes_blue: bool,

    /// Mega Drive: apply the non-linear VDP levels
    #[arg(long)]
    genesis_vdp: bool,

    /// PlayStation: 24-bit movie mode (stronger blur, no palette limit)
    #[arg(long)]
    ps1_movie: bool,

    /// Nintendo 64 texture mode (RGBA5551, CI8, CI4)
    #[arg(long)]
    n64_mode: Option<N64TextureMode>,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List available styles and exit
    #[arg(long)]
    list: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Layer command line flags over the configured defaults
    fn style_parameters(&self, defaults: &StyleParameters) -> StyleParameters {
        let mut params = defaults.clone();
        if let Some(size) = self.pixel_size {
            params.pixel_block_size = size;
        }
        params.dither |= self.dither;
        params.nes_emphasis.red |= self.nes_red;
        params.nes_emphasis.green |= self.nes_green;
        params.nes_emphasis.blue |= self.nes_blue;
        params.genesis_vdp_curve |= self.genesis_vdp;
        params.ps1_movie_mode |= self.ps1_movie;
        if let Some(mode) = self.n64_mode {
            params.n64_texture_mode = mode;
        }
        params
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level.as_str())),
        )
        .init();

    if cli.list {
        for style in StyleRegistry::new().iter() {
            println!("{:<12} {:<48} {}", style.slug, style.name, style.description);
        }
        return Ok(());
    }

    info!("Starting Retro-Image-Maker v{}", env!("CARGO_PKG_VERSION"));

    let config = match &cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(config_path)?
        }
        None => Config::default(),
    };
    config.validate()?;

    let params = cli.style_parameters(&config.style);
    params.validate()?;

    let Some(input) = &cli.input else {
        bail!("an input image is required");
    };
    let source = load_image(input).with_context(|| format!("loading {:?}", input))?;
    info!("Loaded {:?} ({}x{})", input, source.width(), source.height());

    if let Some(dir) = &cli.all {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {:?}", dir))?;

        let report = styles::apply_all_styles_with_threads(&source, &params, config.batch.threads)?;
        let mut saved = 0;
        let mut failed = Vec::new();
        for outcome in report {
            let name = outcome.style.name();
            let written = outcome.result.and_then(|image| {
                let path = dir.join(format!("{}{}.png", config.batch.file_prefix, sanitize_file_stem(name)));
                save_image(&image, &path)
            });
            match written {
                Ok(()) => saved += 1,
                Err(e) => {
                    error!("{}: {}", name, e.user_message());
                    failed.push(name);
                }
            }
        }

        info!("Saved {} images to {:?}", saved, dir);
        if !failed.is_empty() {
            bail!("{} styles failed: {}", failed.len(), failed.join(", "));
        }
        return Ok(());
    }

    let style: StyleId = cli
        .style
        .parse()
        .map_err(|e: retro_image_maker::RetroError| anyhow::anyhow!(e.user_message()))?;
    let output = cli.output.clone().unwrap_or_else(|| {
        let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("image");
        input.with_file_name(format!("{}_{}.png", stem, style.slug()))
    });

    info!("Using {} style", style.name());
    let rendered = styles::apply(&source, style, &params)?;
    save_image(&rendered, &output)?;

    info!("Done! Output saved to: {:?}", output);
    Ok(())
}
