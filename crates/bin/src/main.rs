//! Chiprank CLI binary.
//!
//! Provides the command-line interface for the Chiprank ranking model:
//! snapshot acquisition, scoring, and universe inspection.

use chiprank::universe::{Segment, SemiconductorUniverse};
use chiprank_data::snapshot::{SchemaMapping, read_snapshot, write_snapshot};
use chiprank_data::yahoo::{YahooFundamentalsProvider, YahooQuoteProvider};
use chiprank_factors::{ScoringConfig, score_snapshot};
use chiprank_output::chart::{ChartConfig, render_score_chart};
use chiprank_output::export::{ExportFormat, Exporter, ranking_rows};
use chiprank_output::table::format_ranking_table;
use chrono::Utc;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "chiprank")]
#[command(about = "Chiprank: 3-factor quant ranking for the semiconductor universe", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch fundamentals and YTD returns, writing a snapshot CSV
    Fetch {
        /// Output snapshot path
        #[arg(long, default_value = "semiconductor_snapshot.csv")]
        output: PathBuf,

        /// Delay between provider requests, in milliseconds
        #[arg(long, default_value = "1000")]
        rate_limit_ms: u64,
    },

    /// Score a snapshot and write the ranked table
    Score {
        /// Input snapshot path
        input: PathBuf,

        /// Ranked export path
        #[arg(long, default_value = "final_ranking.csv")]
        output: PathBuf,

        /// Export format (csv, json, or pretty-json)
        #[arg(long, default_value = "csv")]
        format: String,

        /// Also render a bar chart PNG to this path
        #[arg(long)]
        chart: Option<PathBuf>,

        /// Rows to print to the terminal
        #[arg(long, default_value = "5")]
        top: usize,
    },

    /// Inspect the fixed universe
    Universe {
        /// Filter by segment (fabless, foundry, idm, memory, equipment)
        #[arg(long)]
        segment: Option<String>,

        /// List all segments
        #[arg(long)]
        list_segments: bool,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch {
            output,
            rate_limit_ms,
        } => fetch_snapshot(&output, rate_limit_ms).await?,
        Commands::Score {
            input,
            output,
            format,
            chart,
            top,
        } => score(&input, &output, &format, chart.as_deref(), top)?,
        Commands::Universe {
            segment,
            list_segments,
        } => {
            if list_segments {
                list_all_segments();
            } else {
                print_universe(segment)?;
            }
        }
    }

    Ok(())
}

async fn fetch_snapshot(
    output: &std::path::Path,
    rate_limit_ms: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let universe = SemiconductorUniverse::new();
    let delay = std::time::Duration::from_millis(rate_limit_ms);
    let fundamentals = YahooFundamentalsProvider::with_rate_limit(delay);
    let quotes = YahooQuoteProvider::with_rate_limit(delay);
    let asof = Utc::now();

    println!(
        "Fetching fundamentals and YTD returns for {} companies...",
        universe.constituents().len()
    );

    let progress = ProgressBar::new(universe.constituents().len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut rows = Vec::new();
    for constituent in universe.constituents() {
        progress.set_message(constituent.symbol.clone());

        let mut data = match fundamentals.fetch_fundamentals(&constituent.symbol).await {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Warning: skipping {}: {}", constituent.symbol, e);
                progress.inc(1);
                continue;
            }
        };
        if data.name.is_none() {
            data.name = Some(constituent.name.clone());
        }

        let ytd = match quotes.fetch_ytd_return(&constituent.symbol, asof).await {
            Ok(ytd) => Some(ytd),
            Err(e) => {
                eprintln!("Warning: no YTD return for {}: {}", constituent.symbol, e);
                None
            }
        };

        rows.push(data.into_snapshot_row(ytd));
        progress.inc(1);
    }
    progress.finish_and_clear();

    write_snapshot(output, &rows)?;
    println!("Wrote {} rows to {}", rows.len(), output.display());
    Ok(())
}

fn score(
    input: &std::path::Path,
    output: &std::path::Path,
    format: &str,
    chart: Option<&std::path::Path>,
    top: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = parse_format(format)?;

    let snapshot = read_snapshot(input, &SchemaMapping::default_mapping())?;
    println!(
        "Loaded {} of {} rows from {}",
        snapshot.report.included,
        snapshot.report.rows_read,
        input.display()
    );
    if snapshot.report.dropped() > 0 {
        println!(
            "Dropped {} row(s): {} missing required fields, {} duplicate tickers",
            snapshot.report.dropped(),
            snapshot.report.dropped_missing,
            snapshot.report.dropped_duplicate
        );
    }

    let config = ScoringConfig::default();
    let table = score_snapshot(&snapshot.records, &config)?;

    for warning in &table.warnings {
        println!("Warning: {}", warning);
    }

    let rows = ranking_rows(&table);
    println!();
    println!("TOP {} SEMICONDUCTOR RANKING:", top.min(rows.len()));
    print!("{}", format_ranking_table(&rows, Some(top)));

    rows.export_to_file(output, format)?;
    println!();
    println!("Wrote ranked table ({} rows) to {}", rows.len(), output.display());

    if let Some(chart_path) = chart {
        render_score_chart(chart_path, &rows, &ChartConfig::default())?;
        println!("Wrote chart to {}", chart_path.display());
    }

    Ok(())
}

fn parse_format(format: &str) -> Result<ExportFormat, String> {
    match format.to_lowercase().as_str() {
        "csv" => Ok(ExportFormat::Csv),
        "json" => Ok(ExportFormat::Json),
        "pretty-json" => Ok(ExportFormat::PrettyJson),
        other => Err(format!(
            "Unknown format '{}' (expected csv, json, or pretty-json)",
            other
        )),
    }
}

fn list_all_segments() {
    println!("Segments:");
    for segment in Segment::all() {
        println!("  {}", segment);
    }
}

fn print_universe(segment: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let universe = SemiconductorUniverse::new();

    let filter = match segment {
        Some(name) => Some(name.parse::<Segment>()?),
        None => None,
    };

    for constituent in universe.constituents() {
        if let Some(filter) = filter {
            if constituent.segment != filter {
                continue;
            }
        }
        println!(
            "{:<8} {:<28} {}",
            constituent.symbol, constituent.name, constituent.segment
        );
    }
    Ok(())
}
