//! Currency and percentage formatting for terminal output.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Formats a euro amount: rounded to whole euros, thousands grouped with
/// commas, `€` prefix.
pub fn format_eur(value: Decimal) -> String {
    let whole = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = whole.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if whole < Decimal::ZERO {
        format!("-€{grouped}")
    } else {
        format!("€{grouped}")
    }
}

/// Formats a whole-number percentage with a `%` suffix.
pub fn format_percent(value: Decimal) -> String {
    format!("{value}%")
}

/// Formats a fractional rate (e.g. `0.08053`) as a percentage with three
/// decimals, as the reference tables print them.
pub fn format_rate(fraction: Decimal) -> String {
    format!("{:.3}%", fraction * Decimal::ONE_HUNDRED)
}
