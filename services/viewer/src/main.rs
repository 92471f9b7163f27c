//! Command-line viewer for time-indexed atmospheric grid data.
//!
//! Resolves the selected (date, kind, time index) against the static JSON
//! hierarchy and prints the resulting render: status line, legend, time
//! label, and a cell summary. The real map widget consumes the same
//! pipeline through the MapSurface trait; this front end collects the
//! rectangles in memory.

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use atmomap_common::{Day, Kind};
use pipeline::{resolve_boot_date, CollectSurface, RenderPipeline, SharedSelection};
use resolver::{HttpResolver, ResourceFetcher};

#[derive(Parser, Debug)]
#[command(name = "viewer")]
#[command(about = "Render one time-indexed atmospheric grid selection")]
struct Args {
    /// Base URL of the data hierarchy (the directory holding latest.json)
    #[arg(long, env = "ATMOMAP_BASE_URL")]
    base_url: String,

    /// Date to display (YYYY-MM-DD); defaults to the latest-date pointer
    #[arg(short, long)]
    date: Option<String>,

    /// Measurement layer to display (tec or no2)
    #[arg(short, long, default_value = "tec")]
    kind: String,

    /// Time slider position within the day's available timestamps
    #[arg(short, long, default_value = "0")]
    time_index: usize,

    /// Print the committed rectangles as JSON instead of a summary line
    #[arg(long)]
    dump_cells: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let kind: Kind = args.kind.parse()?;

    let resolver = HttpResolver::new(&args.base_url)?;
    let pipeline = RenderPipeline::new(resolver);
    let selection = SharedSelection::new();

    // Boot: explicit date, else the latest-date pointer, else today (UTC).
    let date = match &args.date {
        Some(iso) => Day::from_iso(iso)?,
        None => resolve_boot_date(pipeline.fetcher()).await,
    };

    selection.with(|s| {
        s.set_date(date);
        s.set_kind(kind);
    });

    info!(date = %date, kind = %kind, time_index = args.time_index, "Rendering selection");

    let mut surface = CollectSurface::new();
    let mut report = pipeline.run(&selection, &mut surface).await;

    // The slider position only means something once the day's timestamps
    // are known; applying it is a fresh trigger, exactly like a UI drag.
    if args.time_index > 0 && selection.with(|s| !s.times().is_empty()) {
        selection.with(|s| s.set_time_index(args.time_index));
        report = pipeline.run(&selection, &mut surface).await;
    }

    println!("status: {}", report.status);
    println!("legend: {}", report.legend);
    println!("time:   {}", report.time_label);
    println!("cells:  {}", report.cells_drawn);

    if args.dump_cells {
        println!("{}", serde_json::to_string_pretty(surface.cells())?);
    }

    // Producer run history for the day, when the manifest is published.
    match pipeline.fetcher().fetch_day_manifest(date).await {
        Ok(manifest) => {
            for run in &manifest.runs {
                info!(
                    cycle = %run.cycle,
                    fetched = run.fetched_utc.as_deref().unwrap_or("unknown"),
                    "Producer run"
                );
            }
        }
        Err(e) => debug!(error = %e, "No day manifest for this date"),
    }

    Ok(())
}
