use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use rust_screener::models::{Config, ScreenerMode, ScreenerResult};
use rust_screener::{analysis, export, sample_data, ui};

#[derive(Parser)]
#[command(
    name = "rust-screener",
    version,
    about = "Fundamental ranking for pasted stock-screening spreadsheets"
)]
struct Cli {
    /// Tab-separated input file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Sheet schema of the pasted data
    #[arg(short, long, value_enum, default_value_t = ScreenerMode::Standard)]
    mode: ScreenerMode,

    /// Write the processed table back out as TSV
    #[arg(long)]
    export: Option<PathBuf>,

    /// Print a plain-text summary instead of opening the TUI
    #[arg(long)]
    no_tui: bool,

    /// Run on the built-in sample sheet for the selected mode
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Suppress most logs while the TUI owns the terminal
    let level = if cli.no_tui { Level::INFO } else { Level::ERROR };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("rust_screener={level}")),
    );
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_env_filter(filter)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let config = Config::from_env();

    let text = if cli.demo {
        match cli.mode {
            ScreenerMode::Standard => sample_data::SAMPLE_STANDARD_SHEET.to_string(),
            ScreenerMode::Neto => sample_data::SAMPLE_NETO_SHEET.to_string(),
        }
    } else if let Some(path) = &cli.input {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    } else {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("reading from stdin")?;
        buffer
    };

    let result = match analysis::normalize_and_rank(&text, cli.mode) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("❌ Could not process the pasted data: {err}");
            eprintln!("Expected tab-separated rows with a header line, one company per line.");
            std::process::exit(1);
        }
    };

    if let Some(path) = &cli.export {
        export::write_tsv(path, &result.headers, &result.records)?;
        println!("✅ Exported {} rows to {}", result.records.len(), path.display());
    }

    if cli.no_tui {
        print_summary(&result);
    } else {
        ui::app::run_app(result, cli.mode, &config).await?;
    }

    Ok(())
}

/// Plain-text fallback: the ten best-ranked companies.
fn print_summary(result: &ScreenerResult) {
    let mut by_rank: Vec<_> = result.records.iter().collect();
    by_rank.sort_by_key(|r| r.rank_general);

    println!(
        "📊 {} companies processed · top 10 by general rank",
        result.records.len()
    );
    println!(
        "{:<6} {:<8} {:<28} {:>6} {:>7} {:>7}",
        "Rank", "Ticker", "Company", "P/L", "DY", "Total"
    );
    for record in by_rank.iter().take(10) {
        println!(
            "{:<6} {:<8} {:<28} {:>6} {:>7} {:>7}",
            record.rank_general,
            record.ticker,
            truncate(&record.company, 28),
            record.rank_pl,
            record.rank_dividend_yield,
            record.rank_total,
        );
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        text.chars().take(max.saturating_sub(1)).collect::<String>() + "…"
    }
}
