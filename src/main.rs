//! Main entry point for the cagerank rating pipeline
//!
//! Loads bout datasets, folds them through the selected rating variant, and
//! writes the standings and history tables with proper error handling and
//! logging.

use anyhow::{Context, Result};
use cagerank::config::{validate_config, AppConfig};
use cagerank::dataset;
use cagerank::rating::{DivisionProcessor, GlobalProcessor};
use cagerank::report;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

/// Cagerank - Elo-style ratings for combat-sports bouts
#[derive(Parser)]
#[command(
    name = "cagerank",
    version,
    about = "Elo-style ratings for combat-sports bouts",
    long_about = "Cagerank folds a chronological CSV of fights into per-fighter Elo ratings, \
                 either promotion-wide (with experience- and finish-scaled K-factors) or per \
                 weight division (fixed K with cross-division priors), and writes standings \
                 and full rating-history tables."
)]
struct Args {
    /// Input bout dataset(s) in CSV form; multiple files are concatenated
    /// before sorting
    #[arg(value_name = "DATASET", required = true)]
    datasets: Vec<PathBuf>,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Rate each weight division separately
    #[arg(long, help = "Keep a separate rating per (fighter, division) pair")]
    per_division: bool,

    /// Base K-factor override
    #[arg(long, value_name = "K", help = "Override the base K-factor")]
    k_base: Option<f64>,

    /// Output directory override
    #[arg(short, long, value_name = "DIR", help = "Override the output directory")]
    output_dir: Option<PathBuf>,

    /// Console summary length override
    #[arg(long, value_name = "N", help = "Rows shown in the console summary")]
    top: Option<usize>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Dry run mode (validate config and exit)
    #[arg(
        long,
        help = "Validate configuration, print it as JSON, and exit without processing"
    )]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if let Some(k_base) = args.k_base {
        config.rating.k_base = k_base;
    }

    if let Some(output_dir) = &args.output_dir {
        config.output.directory = output_dir.display().to_string();
    }

    if let Some(top) = args.top {
        config.output.top_count = top;
    }

    validate_config(&config)?;
    Ok(config)
}

/// Display startup information
fn display_startup_banner(config: &AppConfig, args: &Args) {
    info!("Cagerank rating pipeline v{}", cagerank::VERSION);
    info!(
        "   Variant: {}",
        if args.per_division {
            "per-division"
        } else {
            "promotion-wide"
        }
    );
    info!("   K base: {}", config.rating.k_base);
    info!("   Initial rating: {}", config.rating.initial_rating);
    info!("   Output directory: {}", config.output.directory);
}

fn run(config: &AppConfig, args: &Args) -> Result<()> {
    let bouts = dataset::load_bouts(&args.datasets)?;
    info!(
        "Loaded {} bouts from {} dataset file(s)",
        bouts.len(),
        args.datasets.len()
    );

    let out_dir = PathBuf::from(&config.output.directory);
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;
    let standings_path = out_dir.join(&config.output.standings_file);
    let history_path = out_dir.join(&config.output.history_file);

    if args.per_division {
        let mut processor = DivisionProcessor::new(config.rating.clone())?;
        processor.process_all(&bouts);
        if processor.skipped() > 0 {
            warn!(
                "{} bouts had no division label and were not rated",
                processor.skipped()
            );
        }

        let (ledger, history) = processor.into_parts();
        let standings = report::build_division_standings(&ledger);

        dataset::write_table(&standings_path, &standings)?;
        dataset::write_table(&history_path, &history)?;
        info!(
            "Wrote {} standings rows to {} and {} history rows to {}",
            standings.len(),
            standings_path.display(),
            history.len(),
            history_path.display()
        );

        report::print_top_division_standings(&standings, config.output.top_count);
    } else {
        let mut processor = GlobalProcessor::new(config.rating.clone())?;
        processor.process_all(&bouts);

        let (ledger, history) = processor.into_parts();
        let standings = report::build_standings(&ledger, &bouts);

        dataset::write_table(&standings_path, &standings)?;
        dataset::write_table(&history_path, &history)?;
        info!(
            "Wrote {} standings rows to {} and {} history rows to {}",
            standings.len(),
            standings_path.display(),
            history.len(),
            history_path.display()
        );

        report::print_top_standings(&standings, config.output.top_count);
    }

    Ok(())
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    // Initialize logging early (before any other operations)
    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&config)?);
        info!("Dry run completed - exiting without processing");
        return Ok(());
    }

    display_startup_banner(&config, &args);

    run(&config, &args)
}
