//! Statistics plot processing binary.
//!
//! Fetches an order's stat files from the source host, generates the
//! merged per-sensor CSV tables and the trend plots for every tracked
//! band type, and publishes the results back to the source host with
//! per-file checksum verification.
//!
//! # Usage
//!
//! ```bash
//! scene-trends --source-host edclpdsftp --order-directory /orders/0401412
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info; `--debug` forces debug)

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use scene_trends::config::PlotStyle;
use scene_trends::render::{PlottersRenderer, Rgb};
use scene_trends::services::process_all;
use scene_trends::staging::{RemoteFileStager, ScpStager, ShellExecutor};

/// Name of the local working directory holding the fetched stat files and
/// the generated artifacts. Also the name of the results directory created
/// under the order directory on the source host.
const LOCAL_WORK_DIRECTORY: &str = "scene_statistics";

/// Generate merged statistics tables and trend plots for an order.
#[derive(Parser, Debug)]
#[command(name = "scene-trends", version)]
struct Args {
    /// Turn debug logging on
    #[arg(long)]
    debug: bool,

    /// Hostname where the order resides
    #[arg(long, default_value = "localhost")]
    source_host: String,

    /// Directory on the source host where the order resides
    #[arg(long, required = true)]
    order_directory: String,

    /// TOML file with display style overrides
    #[arg(long)]
    style_file: Option<PathBuf>,

    /// Color specification for Terra data
    #[arg(long)]
    terra_color: Option<String>,

    /// Color specification for Aqua data
    #[arg(long)]
    aqua_color: Option<String>,

    /// Color specification for LT4 data
    #[arg(long)]
    lt4_color: Option<String>,

    /// Color specification for LT5 data
    #[arg(long)]
    lt5_color: Option<String>,

    /// Color specification for LE7 data
    #[arg(long)]
    le7_color: Option<String>,

    /// Color specification for plot and legend background
    #[arg(long)]
    bg_color: Option<String>,

    /// Marker size specification for plotted points
    #[arg(long)]
    marker_size: Option<f64>,

    /// Keep the local working directory
    #[arg(long)]
    keep: bool,
}

/// Build the immutable run style: file values first, then CLI overrides,
/// validated before any work starts.
fn build_style(args: &Args) -> anyhow::Result<PlotStyle> {
    let mut style = match &args.style_file {
        Some(path) => PlotStyle::from_file(path)
            .with_context(|| format!("failed loading style from {}", path.display()))?,
        None => PlotStyle::default(),
    };

    if let Some(color) = &args.terra_color {
        style.terra_color = color.clone();
    }
    if let Some(color) = &args.aqua_color {
        style.aqua_color = color.clone();
    }
    if let Some(color) = &args.lt4_color {
        style.lt4_color = color.clone();
    }
    if let Some(color) = &args.lt5_color {
        style.lt5_color = color.clone();
    }
    if let Some(color) = &args.le7_color {
        style.le7_color = color.clone();
    }
    if let Some(color) = &args.bg_color {
        style.bg_color = color.clone();
    }
    if let Some(size) = args.marker_size {
        style.marker_size = size;
    }

    for spec in [
        &style.terra_color,
        &style.aqua_color,
        &style.lt4_color,
        &style.lt5_color,
        &style.le7_color,
        &style.bg_color,
    ] {
        Rgb::from_hex(spec).context("invalid color specification")?;
    }

    Ok(style)
}

/// Fetch, process, publish. The caller owns working-directory cleanup.
fn run(args: &Args, style: &PlotStyle) -> anyhow::Result<()> {
    let stager = ScpStager::new(args.source_host.clone(), ShellExecutor);
    let work_dir = PathBuf::from(LOCAL_WORK_DIRECTORY);

    // A stale working directory would pollute the aggregation.
    if work_dir.exists() {
        fs::remove_dir_all(&work_dir)?;
    }

    let remote_stats = format!("{}/stats", args.order_directory);
    stager
        .fetch_directory(&remote_stats, &work_dir)
        .context("failed retrieving stats from online cache")?;

    let renderer = PlottersRenderer::default();
    process_all(&work_dir, style, &renderer)?;

    let remote_results = format!("{}/{}", args.order_directory, LOCAL_WORK_DIRECTORY);
    stager
        .publish_directory(&work_dir, &remote_results)
        .context("failed publishing results to online cache")?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(if args.debug {
            Level::DEBUG
        } else {
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO)
        })
        .with_target(true)
        .init();

    let style = build_style(&args)?;
    info!("Starting statistics plot processing");

    let result = run(&args, &style);

    // The working directory only survives an explicit keep request,
    // whether the run succeeded or not.
    if !args.keep {
        let _ = fs::remove_dir_all(LOCAL_WORK_DIRECTORY);
    }

    match &result {
        Ok(()) => info!("Plot processing complete"),
        Err(e) => error!("Processing failed: {e:#}"),
    }
    result
}
