//! Calculation modules for the Dutch Box 1 net-income breakdown.
//!
//! The three calculators (bracket tax, general credit, labour credit) are
//! pure functions over the static tables; the engine composes them and
//! reconciles the rounded display figures.

pub mod bracket_tax;
pub mod common;
pub mod engine;
pub mod general_credit;
pub mod labour_credit;

pub use bracket_tax::{calculate_tax, validate_brackets, BracketTableError};
pub use engine::TaxEngine;
pub use general_credit::{calculate_general_credit, GeneralCreditConfig, GeneralCreditError};
pub use labour_credit::{calculate_labour_credit, LabourCreditConfig, LabourCreditError};
