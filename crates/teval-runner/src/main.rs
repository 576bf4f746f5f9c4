use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use teval_lib::{evaluate, GroundTruthIndex};
use teval_runner::{loader, renderer};
use tracing_subscriber::EnvFilter;

/// A command-line runner for the tool-selection evaluation framework.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the ground-truth YAML file (query, difficulty, tools).
    ground_truth: PathBuf,

    /// One or more run-record YAML files (typically one per agent).
    #[arg(required = true)]
    records: Vec<PathBuf>,

    /// Optional path to write the full report (YAML, or JSON for a
    /// `.json` extension).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    println!("--- Teval Evaluation Runner ---");

    // Load stage: ambiguous ground truth aborts before any scoring.
    let queries = loader::load_ground_truth(&cli.ground_truth)?;
    let index = GroundTruthIndex::from_queries(queries)
        .context("Ground truth is ambiguous; refusing to score")?;

    let mut records = Vec::new();
    for path in &cli.records {
        records.extend(loader::load_records(path)?);
    }

    let report = evaluate(&index, &records);
    print!("{}", renderer::render_report(&report));

    if let Some(output) = &cli.output {
        let serialized = if output.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(&report).context("Failed to serialize report")?
        } else {
            serde_yaml::to_string(&report).context("Failed to serialize report")?
        };
        std::fs::write(output, serialized)
            .with_context(|| format!("Failed to write report to {}", output.display()))?;
        println!("Report written to {}", output.display());
    }

    Ok(())
}
