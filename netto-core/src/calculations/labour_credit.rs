//! Labour tax credit ("arbeidskorting") calculation.
//!
//! A four-tier piecewise-linear schedule. Tiers 1–3 build up the credit at
//! their own rates; tier 4 phases the accumulated credit out from a cap down
//! to zero. Each tier's base is the credit accumulated at its lower boundary,
//! which keeps the build-up continuous across boundaries.
//!
//! Boundary convention: tiers 1–3 cover their upper boundary (`<=`), the
//! phase-out uses `<`, so income exactly at `t4_end` yields zero. This
//! mirrors the bracket calculator's "stop at or before the ceiling" rule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::max;

/// Errors detected when validating a [`LabourCreditConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LabourCreditError {
    /// Two adjacent tier boundaries do not coincide.
    #[error("tier boundaries are not contiguous: {end} != {next_start}")]
    NotContiguous { end: Decimal, next_start: Decimal },

    /// A tier's upper boundary is at or below its lower boundary.
    #[error("tier from {start} to {end} is empty")]
    EmptyTier { start: Decimal, end: Decimal },

    /// A tier rate is negative.
    #[error("tier rate {0} is negative")]
    NegativeRate(Decimal),

    /// The tier-4 cap is negative.
    #[error("tier 4 cap {0} is negative")]
    NegativeCap(Decimal),
}

/// Configuration for the four-tier labour tax credit schedule.
///
/// All rates are fractions (e.g. `0.08053` for 8.053%). Tier boundaries are
/// contiguous: `t1_end == t2_start`, `t2_end == t3_start`, `t3_end ==
/// t4_start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabourCreditConfig {
    pub t1_end: Decimal,
    pub t1_rate: Decimal,
    pub t2_start: Decimal,
    pub t2_end: Decimal,
    pub t2_rate: Decimal,
    pub t3_start: Decimal,
    pub t3_end: Decimal,
    pub t3_rate: Decimal,
    pub t4_start: Decimal,
    pub t4_end: Decimal,
    pub t4_cap: Decimal,
    pub t4_phase_out_rate: Decimal,
}

impl LabourCreditConfig {
    /// Checks the schedule invariants.
    ///
    /// # Errors
    ///
    /// Returns [`LabourCreditError`] when tier boundaries are not contiguous
    /// and ascending, a tier is empty, or a rate or the cap is negative.
    pub fn validate(&self) -> Result<(), LabourCreditError> {
        for (end, next_start) in [
            (self.t1_end, self.t2_start),
            (self.t2_end, self.t3_start),
            (self.t3_end, self.t4_start),
        ] {
            if end != next_start {
                return Err(LabourCreditError::NotContiguous { end, next_start });
            }
        }

        for (start, end) in [
            (Decimal::ZERO, self.t1_end),
            (self.t2_start, self.t2_end),
            (self.t3_start, self.t3_end),
            (self.t4_start, self.t4_end),
        ] {
            if end <= start {
                return Err(LabourCreditError::EmptyTier { start, end });
            }
        }

        for rate in [
            self.t1_rate,
            self.t2_rate,
            self.t3_rate,
            self.t4_phase_out_rate,
        ] {
            if rate < Decimal::ZERO {
                return Err(LabourCreditError::NegativeRate(rate));
            }
        }

        if self.t4_cap < Decimal::ZERO {
            return Err(LabourCreditError::NegativeCap(self.t4_cap));
        }

        Ok(())
    }
}

/// Calculates the labour tax credit for `income`.
pub fn calculate_labour_credit(
    income: Decimal,
    cfg: &LabourCreditConfig,
) -> Decimal {
    if income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    // Credit accumulated at the end of tier 1.
    let base1 = cfg.t1_rate * cfg.t1_end;
    if income <= cfg.t1_end {
        return cfg.t1_rate * income;
    }
    if income <= cfg.t2_end {
        return base1 + cfg.t2_rate * (income - cfg.t2_start);
    }

    // Credit accumulated at the start of tier 3.
    let base2 = base1 + cfg.t2_rate * (cfg.t3_start - cfg.t2_start);
    if income <= cfg.t3_end {
        return base2 + cfg.t3_rate * (income - cfg.t3_start);
    }

    if income < cfg.t4_end {
        let credit = cfg.t4_cap - cfg.t4_phase_out_rate * (income - cfg.t4_start);
        return max(credit, Decimal::ZERO);
    }
    Decimal::ZERO
}
