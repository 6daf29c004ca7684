// Minimal smoke run: render every style for a synthetic image

use retro_image_maker::{
    raster::{save_image, PixelBuffer},
    styles::{apply_all_styles, StyleParameters, StyleRegistry},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Testing Retro-Image-Maker core functionality");

    println!("\n1. Style catalog...");
    let registry = StyleRegistry::new();
    println!("   {} styles available", registry.len());

    println!("\n2. Building a 160x144 gradient...");
    let image = PixelBuffer::from_fn(160, 144, |x, y| {
        [(x * 255 / 159) as u8, (y * 255 / 143) as u8, ((x + y) * 255 / 302) as u8]
    })?;

    println!("\n3. Rendering all styles...");
    let params = StyleParameters::with_block_size(4).dither(true);
    let report = apply_all_styles(&image, &params);

    for (style, output) in report.successes() {
        println!("   {:<48} {:>4} colors", style.name(), output.distinct_colors());
    }
    for (style, e) in report.failures() {
        println!("   {:<48} FAILED: {}", style.name(), e);
    }

    if let Some((_, gameboy)) = report.successes().find(|(style, _)| style.slug() == "gameboy") {
        match save_image(gameboy, "minimal_test_output.png") {
            Ok(()) => println!("\n   Output saved to: minimal_test_output.png"),
            Err(e) => println!("\n   Could not save file: {}", e),
        }
    }

    Ok(())
}
