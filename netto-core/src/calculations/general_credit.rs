//! General tax credit ("algemene heffingskorting") calculation.
//!
//! The credit is a flat cap up to a phase-out start, then falls linearly
//! until the phase-out end, where it is exactly zero. The linear formula is
//! floored at zero in case it would dip below zero before the end.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::max;

/// Errors detected when validating a [`GeneralCreditConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneralCreditError {
    /// The credit cap is negative.
    #[error("credit cap {0} is negative")]
    NegativeCap(Decimal),

    /// The phase-out rate is negative.
    #[error("phase-out rate {0} is negative")]
    NegativeRate(Decimal),

    /// The phase-out start is not below the phase-out end.
    #[error("phase-out start {start} is not below phase-out end {end}")]
    PhaseOutRange { start: Decimal, end: Decimal },
}

/// Configuration for the general tax credit schedule.
///
/// `phase_out_rate` is a fraction (e.g. `0.06337` for 6.337%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralCreditConfig {
    pub cap: Decimal,
    pub phase_out_start: Decimal,
    pub phase_out_end: Decimal,
    pub phase_out_rate: Decimal,
}

impl GeneralCreditConfig {
    /// Checks the schedule invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GeneralCreditError`] when the cap or rate is negative, or
    /// the phase-out window is empty or inverted.
    pub fn validate(&self) -> Result<(), GeneralCreditError> {
        if self.cap < Decimal::ZERO {
            return Err(GeneralCreditError::NegativeCap(self.cap));
        }
        if self.phase_out_rate < Decimal::ZERO {
            return Err(GeneralCreditError::NegativeRate(self.phase_out_rate));
        }
        if self.phase_out_start >= self.phase_out_end {
            return Err(GeneralCreditError::PhaseOutRange {
                start: self.phase_out_start,
                end: self.phase_out_end,
            });
        }
        Ok(())
    }
}

/// Calculates the general tax credit for `income`.
pub fn calculate_general_credit(
    income: Decimal,
    cfg: &GeneralCreditConfig,
) -> Decimal {
    if income <= cfg.phase_out_start {
        return cfg.cap;
    }
    if income < cfg.phase_out_end {
        let credit = cfg.cap - cfg.phase_out_rate * (income - cfg.phase_out_start);
        return max(credit, Decimal::ZERO);
    }
    Decimal::ZERO
}
