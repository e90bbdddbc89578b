//! fuchi: CLI for raster image color analysis.
//!
//! Runs the sampling and distribution analysis on a given image file and
//! reports its dominant colors (whole image, border band, corner wedges)
//! and whether the content likely bleeds past the image boundary.
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin fuchi -- [OPTIONS] <IMAGE_PATH>
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use fuchi_analysis::{ColorReport, PixelSample, SampleConfig};

/// Infer dominant, border, and corner colors plus edge-bleed behavior
/// of a raster image.
#[derive(Parser)]
#[command(name = "fuchi", version)]
struct Cli {
    /// Path to the input image (PNG, JPEG, BMP, WebP).
    image_path: PathBuf,

    /// Border band width in pixels for the border color query.
    #[arg(long, default_value_t = fuchi_analysis::DEFAULT_BORDER_BAND, value_parser = clap::builder::RangedU64ValueParser::<u32>::new().range(1..))]
    band: u32,

    /// Corner depth in rings for the corner color query.
    #[arg(long, default_value_t = fuchi_analysis::DEFAULT_CORNER_DEPTH, value_parser = clap::builder::RangedU64ValueParser::<u32>::new().range(1..))]
    depth: u32,

    /// Alpha threshold for the snap normalizer and keep filter (0.0-1.0).
    #[arg(long, default_value_t = SampleConfig::DEFAULT_ALPHA_THRESHOLD)]
    alpha_threshold: f32,

    /// Full sampling config as a JSON string.
    ///
    /// When provided, `--alpha-threshold` is ignored. The JSON must be
    /// a valid `SampleConfig` serialization.
    #[arg(long)]
    config_json: Option<String>,

    /// Output the report as JSON instead of a human-readable summary.
    #[arg(long)]
    json: bool,
}

/// Build a [`SampleConfig`] from CLI arguments.
///
/// If `--config-json` is provided, the JSON is parsed directly and the
/// individual threshold flag is ignored.
fn config_from_cli(cli: &Cli) -> Result<SampleConfig, String> {
    if let Some(ref json) = cli.config_json {
        return serde_json::from_str(json).map_err(|e| format!("Error parsing --config-json: {e}"));
    }
    if !(0.0..=1.0).contains(&cli.alpha_threshold) {
        return Err(format!(
            "--alpha-threshold must be within 0.0-1.0, got {}",
            cli.alpha_threshold,
        ));
    }
    Ok(SampleConfig::with_alpha_threshold(cli.alpha_threshold))
}

/// Print one ranked color list, or a placeholder when empty.
fn print_colors(heading: &str, colors: &[PixelSample]) {
    println!("{heading}");
    if colors.is_empty() {
        println!("  (none)");
        return;
    }
    for color in colors {
        println!("  {:<12} {}", color.hex(), color.rgba_string());
    }
}

/// Print the human-readable report.
fn print_report(report: &ColorReport, band: u32, depth: u32) {
    println!(
        "Dimensions: {}x{}",
        report.dimensions.width, report.dimensions.height,
    );
    println!(
        "Edge-continuing content: {}",
        if report.has_edge { "yes" } else { "no" },
    );
    print_colors("Dominant colors:", &report.colors);
    print_colors(&format!("Border colors (band {band}):"), &report.border_colors);
    print_colors(
        &format!("Corner colors (depth {depth}):"),
        &report.corner_colors,
    );
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match config_from_cli(&cli) {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let image_bytes = match std::fs::read(&cli.image_path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error reading {}: {e}", cli.image_path.display());
            return ExitCode::FAILURE;
        }
    };

    eprintln!(
        "Image: {} ({} bytes)",
        cli.image_path.display(),
        image_bytes.len(),
    );

    match fuchi_analysis::analyze_with_config(&image_bytes, config, cli.band, cli.depth) {
        Ok(report) => {
            if cli.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Error serializing report: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print_report(&report, cli.band, cli.depth);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Analysis error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("fuchi").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_match_library_constants() {
        let cli = cli(&["image.png"]);
        assert_eq!(cli.band, fuchi_analysis::DEFAULT_BORDER_BAND);
        assert_eq!(cli.depth, fuchi_analysis::DEFAULT_CORNER_DEPTH);
        let config = config_from_cli(&cli).unwrap();
        assert_eq!(config, SampleConfig::default());
    }

    #[test]
    fn alpha_threshold_flag_feeds_the_config() {
        let cli = cli(&["image.png", "--alpha-threshold", "0.5"]);
        let config = config_from_cli(&cli).unwrap();
        assert_eq!(config, SampleConfig::with_alpha_threshold(0.5));
    }

    #[test]
    fn out_of_range_alpha_threshold_is_rejected() {
        let cli = cli(&["image.png", "--alpha-threshold", "1.5"]);
        assert!(config_from_cli(&cli).is_err());
    }

    #[test]
    fn config_json_overrides_threshold_flag() {
        let json = serde_json::to_string(&SampleConfig::with_alpha_threshold(0.25)).unwrap();
        let cli = cli(&["image.png", "--alpha-threshold", "0.9", "--config-json", &json]);
        let config = config_from_cli(&cli).unwrap();
        assert_eq!(config, SampleConfig::with_alpha_threshold(0.25));
    }

    #[test]
    fn invalid_config_json_is_an_error() {
        let cli = cli(&["image.png", "--config-json", "{not json"]);
        assert!(config_from_cli(&cli).is_err());
    }
}
