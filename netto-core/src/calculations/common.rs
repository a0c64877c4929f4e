//! Common utility functions for tax calculations.
//!
//! This module provides shared functionality used across the calculators,
//! including rounding and other common operations.

use rust_decimal::Decimal;

/// Rounds a decimal value to whole euros using half-up rounding.
///
/// This follows standard financial rounding conventions where values at
/// exactly 0.5 are rounded up to 1 (away from zero).
///
/// # Arguments
///
/// * `value` - The decimal value to round
///
/// # Returns
///
/// The value rounded to whole euros.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use netto_core::calculations::common::round_euros;
///
/// assert_eq!(round_euros(dec!(123.4)), dec!(123));
/// assert_eq!(round_euros(dec!(123.5)), dec!(124));
/// assert_eq!(round_euros(dec!(123.6)), dec!(124));
/// assert_eq!(round_euros(dec!(-123.5)), dec!(-124)); // Away from zero
/// ```
pub fn round_euros(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use netto_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100), dec!(200)), dec!(200));
/// assert_eq!(max(dec!(-100), dec!(-200)), dec!(-100));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}
