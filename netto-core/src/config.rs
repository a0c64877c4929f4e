//! Static tax tables: the bracket schedule and both credit schedules.
//!
//! The tables are process-wide constants. They are constructed once, checked
//! once with [`TaxTables::validate`], and never mutated afterwards, so they
//! can be shared across threads freely.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::bracket_tax::{validate_brackets, BracketTableError};
use crate::calculations::general_credit::{GeneralCreditConfig, GeneralCreditError};
use crate::calculations::labour_credit::{LabourCreditConfig, LabourCreditError};
use crate::models::TaxBracket;

/// Errors detected when validating a [`TaxTables`] value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxTablesError {
    #[error(transparent)]
    Brackets(#[from] BracketTableError),

    #[error(transparent)]
    GeneralCredit(#[from] GeneralCreditError),

    #[error(transparent)]
    LabourCredit(#[from] LabourCreditError),
}

/// The complete set of tables the engine computes with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTables {
    pub tax_year: i32,
    pub brackets: Vec<TaxBracket>,
    pub general_credit: GeneralCreditConfig,
    pub labour_credit: LabourCreditConfig,
}

impl TaxTables {
    /// The 2025 Dutch Box 1 schedule for taxpayers under AOW age.
    pub fn nl_2025() -> Self {
        Self {
            tax_year: 2025,
            brackets: vec![
                TaxBracket {
                    rate: dec!(35.82),
                    low: dec!(0),
                    high: Some(dec!(38441)),
                },
                TaxBracket {
                    rate: dec!(37.48),
                    low: dec!(38442),
                    high: Some(dec!(76817)),
                },
                TaxBracket {
                    rate: dec!(49.50),
                    low: dec!(76818),
                    high: None,
                },
            ],
            general_credit: GeneralCreditConfig {
                cap: dec!(3068),
                phase_out_start: dec!(28406),
                phase_out_end: dec!(76817),
                phase_out_rate: dec!(0.06337), // 6.337%
            },
            labour_credit: LabourCreditConfig {
                t1_end: dec!(12169),
                t1_rate: dec!(0.08053), // 8.053%
                t2_start: dec!(12169),
                t2_end: dec!(26288),
                t2_rate: dec!(0.30030), // 30.030%
                t3_start: dec!(26288),
                t3_end: dec!(43071),
                t3_rate: dec!(0.02258), // 2.258%
                t4_start: dec!(43071),
                t4_end: dec!(129078),
                t4_cap: dec!(5599),
                t4_phase_out_rate: dec!(0.06510), // 6.510%
            },
        }
    }

    /// Checks all schedule invariants.
    ///
    /// # Errors
    ///
    /// Returns [`TaxTablesError`] wrapping the first violated bracket or
    /// credit schedule invariant.
    pub fn validate(&self) -> Result<(), TaxTablesError> {
        validate_brackets(&self.brackets)?;
        self.general_credit.validate()?;
        self.labour_credit.validate()?;
        Ok(())
    }
}
