use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use netto_core::TaxEngine;

mod format;
mod input;
mod report;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Net income calculator for the 2025 Dutch Box 1 income tax.
///
/// Takes a gross annual income, applies the 2025 bracket schedule and the
/// general and labour tax credits, and prints the resulting breakdown.
#[derive(Debug, Parser)]
#[command(name = "netto")]
struct Cli {
    /// Gross annual income in euros. Currency symbols, thousands separators
    /// and other stray characters are ignored.
    #[arg(required_unless_present = "tables")]
    income: Option<String>,

    /// Print the result as pretty-printed JSON.
    #[arg(long)]
    json: bool,

    /// Print the 2025 bracket and credit reference tables.
    #[arg(long)]
    tables: bool,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let engine = TaxEngine::nl_2025();

    if cli.tables {
        println!("{}", report::render_tables(engine.tables()));
    }

    let Some(raw) = cli.income else {
        return Ok(());
    };

    let income = input::parse_income(&raw);
    debug!(%income, "parsed income");

    let result = engine.calculate(income);
    if cli.json {
        println!("{}", report::render_json(&result)?);
    } else {
        println!("{}", report::render_summary(&result, engine.tables().tax_year));
    }

    Ok(())
}
