//! Marginal (progressive) bracket tax calculation.
//!
//! Each bracket taxes only the slice of income that falls within it; the
//! traversal stops at the first bracket whose ceiling covers the income.
//! The unbounded top bracket guarantees the traversal terminates.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use netto_core::TaxBracket;
//! use netto_core::calculations::calculate_tax;
//!
//! let brackets = vec![
//!     TaxBracket { rate: dec!(10), low: dec!(0), high: Some(dec!(1000)) },
//!     TaxBracket { rate: dec!(20), low: dec!(1001), high: None },
//! ];
//!
//! // 10% over the first 1000, 20% over the 999 above the second floor.
//! assert_eq!(calculate_tax(dec!(2000), &brackets), dec!(299.8));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::TaxBracket;

/// Errors detected when validating a bracket table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BracketTableError {
    /// The table contains no brackets.
    #[error("no tax brackets provided")]
    Empty,

    /// A bracket rate is outside the 0–100 percent range.
    #[error("bracket rate {0} is outside 0-100")]
    RateOutOfRange(Decimal),

    /// A bounded bracket's ceiling is at or below its floor.
    #[error("bracket starting at {low} has ceiling {high} at or below its floor")]
    EmptyRange { low: Decimal, high: Decimal },

    /// A bracket starts below the previous bracket's ceiling.
    #[error("bracket starting at {low} overlaps the previous bracket ending at {prev_high}")]
    Overlapping { low: Decimal, prev_high: Decimal },

    /// An unbounded bracket appears before the end of the table.
    #[error("only the final bracket may be unbounded")]
    UnboundedNotLast,

    /// The final bracket has a finite ceiling.
    #[error("the final bracket must be unbounded")]
    BoundedLast,
}

/// Calculates the gross income tax over `income` using marginal brackets.
///
/// `income` is assumed to be non-negative; the engine clamps before calling.
/// The bracket table is assumed valid per [`validate_brackets`].
pub fn calculate_tax(
    income: Decimal,
    brackets: &[TaxBracket],
) -> Decimal {
    let mut tax = Decimal::ZERO;
    for bracket in brackets {
        if income > bracket.low {
            let slice_top = bracket.high.map_or(income, |high| income.min(high));
            tax += bracket.rate / Decimal::ONE_HUNDRED * (slice_top - bracket.low);
        }
        if bracket.high.is_none() || income <= bracket.high.unwrap_or(Decimal::MAX) {
            break;
        }
    }
    tax
}

/// Validates a bracket table against the schedule invariants.
///
/// # Errors
///
/// Returns [`BracketTableError`] if the table is empty, a rate is outside
/// 0–100, a bounded bracket is empty, brackets overlap or are not ascending,
/// an unbounded bracket is not last, or the final bracket is bounded.
pub fn validate_brackets(brackets: &[TaxBracket]) -> Result<(), BracketTableError> {
    if brackets.is_empty() {
        return Err(BracketTableError::Empty);
    }

    let mut prev_high: Option<Decimal> = None;
    for (i, bracket) in brackets.iter().enumerate() {
        let last = i == brackets.len() - 1;

        if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE_HUNDRED {
            return Err(BracketTableError::RateOutOfRange(bracket.rate));
        }

        if let Some(prev_high) = prev_high {
            if bracket.low < prev_high {
                return Err(BracketTableError::Overlapping {
                    low: bracket.low,
                    prev_high,
                });
            }
        }

        match bracket.high {
            Some(high) => {
                if high <= bracket.low {
                    return Err(BracketTableError::EmptyRange {
                        low: bracket.low,
                        high,
                    });
                }
                if last {
                    return Err(BracketTableError::BoundedLast);
                }
                prev_high = Some(high);
            }
            None => {
                if !last {
                    return Err(BracketTableError::UnboundedNotLast);
                }
            }
        }
    }

    Ok(())
}
