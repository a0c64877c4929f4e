//! Text and JSON rendering of a [`TaxResult`] and the reference tables.

use std::fmt::Write;

use netto_core::{TaxResult, TaxTables};
use rust_decimal::Decimal;

use crate::format::{format_eur, format_percent, format_rate};

const RULE_WIDTH: usize = 38;

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "─".repeat(RULE_WIDTH));
}

fn row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {label:<22}{value:>12}");
}

/// Renders the summary and breakdown for one computed result.
pub fn render_summary(result: &TaxResult, tax_year: i32) -> String {
    let mut out = String::new();

    heading(&mut out, &format!("Net income ({tax_year})"));
    row(&mut out, "Gross income", &format_eur(result.income_rounded));
    row(&mut out, "Net income", &format_eur(result.net_income));
    row(&mut out, "Monthly net", &format_eur(result.monthly_income));
    row(&mut out, "Tax paid", &format_eur(result.tax_paid()));
    row(
        &mut out,
        "Effective rate",
        &format_percent(result.effective_tax_rate),
    );
    let _ = writeln!(out);

    heading(&mut out, "Breakdown");
    row(&mut out, "Income tax", &format_eur(result.displayed_tax));
    row(
        &mut out,
        "General tax credit",
        &format_eur(result.displayed_general_credit),
    );
    row(
        &mut out,
        "Labour tax credit",
        &format_eur(result.displayed_labour_credit),
    );

    out
}

/// Renders the bracket and credit reference tables.
pub fn render_tables(tables: &TaxTables) -> String {
    let mut out = String::new();
    let year = tables.tax_year;

    heading(&mut out, &format!("Income Tax Brackets ({year})"));
    for bracket in &tables.brackets {
        let range = match bracket.high {
            Some(high) => format!("{} - {}", format_eur(bracket.low), format_eur(high)),
            None => format!("{} and above", format_eur(bracket.low)),
        };
        row(&mut out, &range, &format!("{}%", bracket.rate));
    }
    let _ = writeln!(out);

    let g = &tables.general_credit;
    heading(&mut out, &format!("General Tax Credit ({year})"));
    let _ = writeln!(
        out,
        "  up to {}: {} (maximum)",
        format_eur(g.phase_out_start),
        format_eur(g.cap),
    );
    let _ = writeln!(
        out,
        "  {} - {}: {} minus {} of income above {}",
        format_eur(g.phase_out_start),
        format_eur(g.phase_out_end),
        format_eur(g.cap),
        format_rate(g.phase_out_rate),
        format_eur(g.phase_out_start),
    );
    let _ = writeln!(out, "  {} and above: {}", format_eur(g.phase_out_end), format_eur(Decimal::ZERO));
    let _ = writeln!(out);

    let l = &tables.labour_credit;
    heading(&mut out, &format!("Labour Tax Credit ({year})"));
    let _ = writeln!(
        out,
        "  up to {}: {} of income",
        format_eur(l.t1_end),
        format_rate(l.t1_rate),
    );
    let _ = writeln!(
        out,
        "  {} - {}: build-up at {}",
        format_eur(l.t2_start),
        format_eur(l.t2_end),
        format_rate(l.t2_rate),
    );
    let _ = writeln!(
        out,
        "  {} - {}: build-up at {}",
        format_eur(l.t3_start),
        format_eur(l.t3_end),
        format_rate(l.t3_rate),
    );
    let _ = writeln!(
        out,
        "  {} - {}: {} minus {} of income above {}",
        format_eur(l.t4_start),
        format_eur(l.t4_end),
        format_eur(l.t4_cap),
        format_rate(l.t4_phase_out_rate),
        format_eur(l.t4_start),
    );
    let _ = writeln!(out, "  {} and above: {}", format_eur(l.t4_end), format_eur(Decimal::ZERO));

    out
}

/// Renders a result as pretty-printed JSON.
pub fn render_json(result: &TaxResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
