//! Net-income calculation over the 2025 Dutch Box 1 income tax.
//!
//! Given a gross annual income, [`TaxEngine::calculate`] returns a
//! [`TaxResult`] with the gross tax, the general and labour tax credits as
//! applied, net and monthly income, and the effective rate, with all display
//! figures rounded to whole euros and reconciled against each other.

pub mod calculations;
pub mod config;
pub mod models;

pub use calculations::engine::TaxEngine;
pub use config::{TaxTables, TaxTablesError};
pub use models::*;
