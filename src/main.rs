//! SurveyLens - Survey CSV Scoring & Rank-Correlation CLI
//!
//! Loads a survey CSV, prints the dashboard KPI digest and correlation
//! table, and optionally writes the full snapshot as JSON for the web
//! dashboard to fetch as its static data resource.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use surveylens::data::{load_survey, DatasetSnapshot, SurveySchema, Variable};
use surveylens::stats::RankMethod;

#[derive(Parser)]
#[command(name = "surveylens")]
#[command(about = "Survey CSV scoring & rank-correlation engine", long_about = None)]
struct Cli {
    /// Survey CSV file (UTF-8, first line is a header)
    csv: PathBuf,

    /// JSON file overriding the built-in column-index schema
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Use the variant instrument (adds the raw boldness column)
    #[arg(long, conflicts_with = "schema")]
    variant: bool,

    /// Rank ties with averaged ranks instead of the legacy consecutive ranks
    #[arg(long)]
    tie_averaged: bool,

    /// Write the snapshot as JSON to this path
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print the JSON snapshot
    #[arg(long, requires = "out")]
    pretty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let schema = match &cli.schema {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read schema file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("invalid schema file {}", path.display()))?
        }
        None if cli.variant => SurveySchema::variant(),
        None => SurveySchema::default(),
    };

    let rank_method = if cli.tie_averaged {
        RankMethod::TieAveraged
    } else {
        RankMethod::Legacy
    };

    let snapshot = load_survey(&cli.csv, &schema, rank_method).await?;
    print_digest(&snapshot);

    if let Some(out) = &cli.out {
        let json = if cli.pretty {
            serde_json::to_string_pretty(&snapshot)?
        } else {
            serde_json::to_string(&snapshot)?
        };
        std::fs::write(out, json)
            .with_context(|| format!("failed to write snapshot to {}", out.display()))?;
        println!("Snapshot written to {}.", out.display());
    }

    Ok(())
}

fn print_digest(snapshot: &DatasetSnapshot) {
    let summary = &snapshot.summary;
    println!("Respondents: {}", summary.respondents);
    println!(
        "Heavy users: {} ({:.1}%)",
        summary.heavy_users,
        summary.heavy_user_share * 100.0
    );

    println!("\nComposite scores (1-5):");
    for variable in Variable::ALL {
        let stats = summary.stats(variable);
        println!(
            "- {:<10} mean {:.2}  median {:.2}  std {:.2}  range {:.2}-{:.2}",
            variable.label(),
            stats.mean,
            stats.median,
            stats.std,
            stats.min,
            stats.max
        );
    }

    println!("\nSpearman correlations (* = |rho| >= 0.25):");
    for entry in &snapshot.correlation_table {
        println!(
            "- {} vs {}: rho {:+.3}{}",
            entry.variable_a,
            entry.variable_b,
            entry.rho,
            if entry.significant { " *" } else { "" }
        );
    }
}
