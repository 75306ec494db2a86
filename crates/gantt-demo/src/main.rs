// File: crates/gantt-demo/src/main.rs
// Summary: Demo loads tasks from CSV, prints the chart URL and optionally fetches the PNG.

mod loader;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gantt_core::{Chart, ChartClient, TransportConfig};
use tracing_subscriber::EnvFilter;

/// Build a Gantt chart from a task CSV using the Google image chart service.
#[derive(Debug, Parser)]
#[command(name = "gantt-demo", version, about)]
struct Cli {
    /// Task CSV (title,start,end,duration,depends_on,category,color)
    tasks: PathBuf,

    #[arg(long, default_value = "Gantt Chart")]
    title: String,

    #[arg(long, default_value_t = gantt_core::types::WIDTH)]
    width: u32,

    #[arg(long, default_value_t = gantt_core::types::HEIGHT)]
    height: u32,

    /// Progress marker date, YYYY-MM-DD
    #[arg(long)]
    progress: Option<String>,

    /// Transport settings (TOML)
    #[arg(long, env = "GANTT_TRANSPORT_CONFIG")]
    config: Option<PathBuf>,

    /// Fetch the PNG and save it here
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Debug-level logging (otherwise RUST_LOG, default warn)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let tasks = loader::load_tasks_csv(&cli.tasks)
        .with_context(|| format!("failed to load tasks from '{}'", cli.tasks.display()))?;
    println!("Loaded {} tasks", tasks.len());
    if tasks.is_empty() {
        anyhow::bail!("no tasks loaded; check headers/delimiter.");
    }

    let mut chart = Chart::new(cli.title).with_size(cli.width, cli.height).with_tasks(tasks);
    if let Some(p) = cli.progress.as_deref() {
        chart = chart.with_progress(p).context("invalid --progress")?;
    }
    println!(
        "Span: {} .. {} ({} days)",
        chart.start_date()?,
        chart.end_date()?,
        chart.duration()?
    );

    let config = match &cli.config {
        Some(path) => TransportConfig::load(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => TransportConfig::default(),
    };
    let client = ChartClient::new(&config)?;
    println!("{}", client.url(&chart)?);

    if let Some(out) = &cli.output {
        match client.fetch_image(&chart, Some(out))? {
            Some(img) => println!(
                "Wrote {} ({}x{}, {:?})",
                out.display(),
                img.width(),
                img.height(),
                img.format()
            ),
            None => println!("No image returned by {}", client.base_url()),
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
