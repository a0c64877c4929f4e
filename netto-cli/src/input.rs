//! Lenient income parsing.
//!
//! Mirrors what the form layer tolerates: the raw string may carry currency
//! symbols, thousands separators or stray characters. Everything that is not
//! an ASCII digit or a decimal point is dropped before parsing, and anything
//! that still fails to parse counts as zero. Sign characters are stripped
//! too, so the parsed income is non-negative by construction.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

/// Upper bound on accepted income; larger values are clamped.
const MAX_INCOME: i64 = 100_000_000;

/// Parses a raw income string into a clamped, non-negative euro amount.
pub fn parse_income(raw: &str) -> Decimal {
    let clean: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let income = Decimal::from_str(&clean).unwrap_or_else(|_| {
        debug!(input = %raw, "unparseable income treated as zero");
        Decimal::ZERO
    });

    income.clamp(Decimal::ZERO, Decimal::from(MAX_INCOME))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parses_plain_number() {
        assert_eq!(parse_income("45000"), dec!(45000));
    }

    #[test]
    fn parses_fractional_number() {
        assert_eq!(parse_income("45000.75"), dec!(45000.75));
    }

    #[test]
    fn strips_currency_symbol_and_separators() {
        assert_eq!(parse_income("€45,000"), dec!(45000));
        assert_eq!(parse_income(" 1 234 567 "), dec!(1234567));
    }

    #[test]
    fn garbage_is_zero() {
        assert_eq!(parse_income("abc"), dec!(0));
        assert_eq!(parse_income(""), dec!(0));
        assert_eq!(parse_income("..."), dec!(0));
    }

    #[test]
    fn second_decimal_point_is_zero() {
        assert_eq!(parse_income("12.3.4"), dec!(0));
    }

    #[test]
    fn negative_sign_is_stripped() {
        assert_eq!(parse_income("-100"), dec!(100));
    }

    #[test]
    fn clamps_to_maximum() {
        assert_eq!(parse_income("999999999999"), dec!(100000000));
    }
}
