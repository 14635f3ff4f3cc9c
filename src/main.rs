use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use heatsplat::rendering::bmp::BmpHeader;
use heatsplat::{sample, Canvas};

/// Regenerate the sample click heatmap as a 24-bit BMP
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Output file; the parent directory is created if missing
    #[arg(short, long, default_value = sample::OUTPUT_PATH)]
    output: PathBuf,

    /// Canvas width in pixels
    #[arg(long, default_value_t = sample::CANVAS.width)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = sample::CANVAS.height)]
    height: u32,

    /// Spot radius in pixels
    #[arg(long, default_value_t = sample::RADIUS)]
    radius: f64,

    /// Peak overlay opacity, 0..=1
    #[arg(long, default_value_t = sample::OPACITY)]
    opacity: f64,
}

fn confirmation(path: &Path) -> String {
    format!("Generated sample heatmap -> {}", path.display())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let canvas = Canvas::new(args.width, args.height);
    let config = heatsplat::HeatmapConfig {
        radius: args.radius,
        opacity: args.opacity,
        ..sample::config()
    };
    debug!("effective config: {}", serde_json::to_string(&config)?);

    let bmp = heatsplat::generate_heatmap(canvas, &sample::CLICKS, &config)
        .context("Failed to render sample heatmap")?;

    let header = BmpHeader::parse(&bmp)?;
    info!(
        "{}x{} @ {}bpp, {} bytes",
        header.width, header.height, header.bits_per_pixel, header.file_size
    );

    heatsplat::write_bitmap(&args.output, &bmp)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!("{}", confirmation(&args.output));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_reproduce_the_sample() {
        let args = Args::parse_from(["heatsplat"]);
        assert_eq!(args.output, PathBuf::from(sample::OUTPUT_PATH));
        assert_eq!(Canvas::new(args.width, args.height), sample::CANVAS);
        assert_eq!(args.radius, sample::RADIUS);
        assert_eq!(args.opacity, sample::OPACITY);
    }

    #[test]
    fn overrides_are_parsed() {
        let args = Args::parse_from(["heatsplat", "-o", "out/x.bmp", "--width", "64", "--radius", "12.5"]);
        assert_eq!(args.output, PathBuf::from("out/x.bmp"));
        assert_eq!(args.width, 64);
        assert_eq!(args.height, sample::CANVAS.height);
        assert_eq!(args.radius, 12.5);
    }

    #[test]
    fn confirmation_names_output_path() {
        assert_eq!(
            confirmation(Path::new(sample::OUTPUT_PATH)),
            "Generated sample heatmap -> artifacts/sample_heatmap.bmp"
        );
    }
}
