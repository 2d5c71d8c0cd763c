use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quadsheet")]
#[command(version, about = "Quadrant sprite strip packer", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Split an image into quadrants and pack them clockwise into a horizontal strip
    Repack(RepackArgs),
    /// Print sheet and per-frame dimensions of an existing sprite sheet
    Inspect(InspectArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RepackArgs {
    /// Input image file
    #[arg(required_unless_present = "config")]
    pub input: Option<PathBuf>,

    /// Load settings from a JSON config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Existing output directory for the sprite strip [default: .]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Compress PNG output (0-6 or 'max'). Default level is 2 if flag is present without value.
    #[arg(long, value_name = "LEVEL", default_missing_value = "2", num_args = 0..=1)]
    pub compress: Option<CompressionLevel>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// Sprite sheet image file
    pub sheet: PathBuf,

    /// Number of frames laid out horizontally in the sheet
    #[arg(short = 'f', long = "frames", value_name = "N",
          value_parser = clap::value_parser!(u32).range(1..))]
    pub frame_count: u32,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// PNG compression level (0-6 or max)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression
    Max,
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(CompressionLevel::Max)
        } else {
            s.parse::<u8>()
                .map_err(|_e| format!("invalid compression level: {}", s))
                .and_then(CompressionLevel::from_level)
        }
    }
}

impl CompressionLevel {
    /// Validate a numeric oxipng preset
    pub fn from_level(n: u8) -> Result<Self, String> {
        if n <= 6 {
            Ok(CompressionLevel::Level(n))
        } else {
            Err(format!("compression level must be 0-6 or 'max', got {}", n))
        }
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::Level(2)
    }
}
