use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use quadsheet::cli::{CliArgs, Command, CompressionLevel, InspectArgs, RepackArgs};
use quadsheet::config::LoadedConfig;
use quadsheet::inspect::inspect_sheet;
use quadsheet::quadrant::{RepackOptions, repack_file};

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    match &cli.command {
        Command::Repack(args) => run_repack(args),
        Command::Inspect(args) => run_inspect(args),
    }
}

fn init_logging(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run_repack(args: &RepackArgs) -> Result<()> {
    let merged = merge_config_with_args(args)?;
    init_logging(merged.verbose);

    debug!("Quadsheet v{}", env!("CARGO_PKG_VERSION"));

    let options = RepackOptions {
        compress: merged.compress,
    };
    let summary = repack_file(&merged.input, &merged.output, &options)?;
    debug!(
        "{}x{} -> {}x{}",
        summary.source_width, summary.source_height, summary.sheet_width, summary.sheet_height
    );

    Ok(())
}

#[allow(clippy::print_stdout)]
fn run_inspect(args: &InspectArgs) -> Result<()> {
    init_logging(args.verbose);

    let report = inspect_sheet(&args.sheet, args.frame_count)?;
    if args.json {
        let json =
            serde_json::to_string_pretty(&report).context("failed to serialize sheet report")?;
        println!("{}", json);
    } else {
        println!("{}", report);
    }
    debug!("Inspected {}", args.sheet.display());

    Ok(())
}

/// Merged configuration from CLI args and optional config file.
struct MergedConfig {
    input: PathBuf,
    output: PathBuf,
    compress: Option<CompressionLevel>,
    verbose: bool,
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
fn merge_config_with_args(args: &RepackArgs) -> Result<MergedConfig> {
    let loaded_config = if let Some(config_path) = &args.config {
        Some(
            LoadedConfig::load(config_path)
                .with_context(|| format!("failed to load config: {}", config_path.display()))?,
        )
    } else {
        None
    };

    // Input: CLI > config
    let input = match (&args.input, &loaded_config) {
        (Some(input), _) => input.clone(),
        (None, Some(lc)) => lc
            .resolve_input()
            .context("no input image given on the command line or in the config file")?,
        // clap's required_unless_present rules this out
        (None, None) => anyhow::bail!("no input image given"),
    };

    // Output directory: CLI > config > default
    let output = args.output.clone().unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.resolve_output_dir())
            .unwrap_or_else(|| PathBuf::from("."))
    });

    // Compress: CLI option overrides config
    let compress = if args.compress.is_some() {
        args.compress
    } else if let Some(c) = loaded_config.as_ref().and_then(|lc| lc.config.compress.as_ref()) {
        Some(
            c.to_level()
                .map_err(|msg| anyhow::anyhow!("invalid compress value in config file: {}", msg))?,
        )
    } else {
        None
    };

    Ok(MergedConfig {
        input,
        output,
        compress,
        verbose: args.verbose,
    })
}
