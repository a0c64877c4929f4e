//! The result assembler: gross income in, reconciled breakdown out.
//!
//! The engine runs the three calculators on the unrounded income, rounds
//! each figure independently for display, and then reconciles the rounded
//! figures so that the published invariant
//! `displayed_general_credit + displayed_labour_credit <= displayed_tax`
//! holds unconditionally.
//!
//! # Reconciliation order
//!
//! When the theoretical credits exceed the theoretical tax, the labour
//! credit is applied first (capped at the tax) and the general credit second
//! (capped at what remains). Independent rounding can then leave the
//! displayed sum one euro off the displayed tax; up to two corrective passes
//! re-clamp the general credit first, then the labour credit, and a final
//! safety net strips any residual excess from the general credit. The order
//! is a deliberate tie-break and is observable in the output near bracket
//! and phase-out boundaries; do not reorder it.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use netto_core::TaxEngine;
//!
//! let engine = TaxEngine::nl_2025();
//! let result = engine.calculate(dec!(50000));
//!
//! assert_eq!(result.displayed_tax, dec!(18102));
//! assert_eq!(result.displayed_general_credit, dec!(1700));
//! assert_eq!(result.displayed_labour_credit, dec!(5148));
//! assert_eq!(result.net_income, dec!(38746));
//! assert_eq!(result.monthly_income, dec!(3229));
//! assert_eq!(result.effective_tax_rate, dec!(23));
//! ```

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::bracket_tax::calculate_tax;
use crate::calculations::common::{max, round_euros};
use crate::calculations::general_credit::calculate_general_credit;
use crate::calculations::labour_credit::calculate_labour_credit;
use crate::config::{TaxTables, TaxTablesError};
use crate::models::{TaxResult, TheoreticalAmounts};

/// Stateless calculator over an immutable set of [`TaxTables`].
///
/// The engine holds no mutable state; [`calculate`](Self::calculate) may be
/// invoked concurrently from any number of threads.
#[derive(Debug, Clone)]
pub struct TaxEngine {
    tables: TaxTables,
}

impl TaxEngine {
    /// Creates an engine over the given tables, validating them first.
    ///
    /// # Errors
    ///
    /// Returns [`TaxTablesError`] when the tables violate a schedule
    /// invariant.
    pub fn new(tables: TaxTables) -> Result<Self, TaxTablesError> {
        tables.validate()?;
        Ok(Self { tables })
    }

    /// Creates an engine over the built-in 2025 Dutch tables.
    pub fn nl_2025() -> Self {
        // The built-in tables are pinned valid by test.
        Self {
            tables: TaxTables::nl_2025(),
        }
    }

    /// The tables this engine computes with.
    pub fn tables(&self) -> &TaxTables {
        &self.tables
    }

    /// Computes the full breakdown for a gross annual income.
    ///
    /// Never fails: negative income is clamped to zero and takes the
    /// all-zero fast path together with income that rounds to zero.
    pub fn calculate(&self, income: Decimal) -> TaxResult {
        let income = if income < Decimal::ZERO {
            warn!(%income, "negative income clamped to zero");
            Decimal::ZERO
        } else {
            income
        };

        let income_rounded = round_euros(income);
        if income_rounded <= Decimal::ZERO {
            debug!(%income, "income rounds to zero, returning zero result");
            return TaxResult::zero();
        }

        // Theoretical figures over the unrounded income.
        let tax = calculate_tax(income, &self.tables.brackets);
        let general = calculate_general_credit(income, &self.tables.general_credit);
        let labour = calculate_labour_credit(income, &self.tables.labour_credit);

        let displayed_tax = round_euros(tax);
        let mut displayed_labour = round_euros(labour);
        let mut displayed_general = round_euros(general);

        // Credits must never net the taxpayer more than the gross tax.
        // Labour is applied first, general takes what remains.
        if general + labour > tax {
            debug!(%tax, %general, %labour, "credits exceed tax, capping applied amounts");
            let applied_labour = labour.min(tax);
            let applied_general = general.min(tax - applied_labour);

            displayed_labour = round_euros(applied_labour);
            displayed_general = round_euros(applied_general);

            // Independent rounding can leave the sum one euro off the
            // rounded tax; re-clamp general first, then labour.
            let mut sum = displayed_labour + displayed_general;
            if sum != displayed_tax {
                let general_cap = round_euros(applied_general);
                displayed_general =
                    general_cap.min(max(displayed_tax - displayed_labour, Decimal::ZERO));
                sum = displayed_labour + displayed_general;
            }
            if sum != displayed_tax {
                let labour_cap = round_euros(applied_labour);
                displayed_labour =
                    labour_cap.min(max(displayed_tax - displayed_general, Decimal::ZERO));
                let over = displayed_labour + displayed_general - displayed_tax;
                if over > Decimal::ZERO {
                    displayed_general = max(displayed_general - over, Decimal::ZERO);
                }
            }
        }

        // Safety net: rounding must not leave the credits above the rounded
        // tax. Shrink general first, matching the application order.
        if displayed_labour + displayed_general > displayed_tax {
            let over = displayed_labour + displayed_general - displayed_tax;
            displayed_general = max(displayed_general - over, Decimal::ZERO);
            if displayed_labour + displayed_general > displayed_tax {
                displayed_labour = max(displayed_tax - displayed_general, Decimal::ZERO);
            }
        }

        let net_income = income_rounded - displayed_tax + displayed_labour + displayed_general;
        let monthly_income = round_euros(net_income / Decimal::from(12));
        let effective_base = max(
            displayed_tax - (displayed_labour + displayed_general),
            Decimal::ZERO,
        );
        let effective_tax_rate =
            round_euros(effective_base / income_rounded * Decimal::ONE_HUNDRED);

        TaxResult {
            income_rounded,
            displayed_tax,
            displayed_general_credit: displayed_general,
            displayed_labour_credit: displayed_labour,
            net_income,
            monthly_income,
            effective_tax_rate,
            theoretical: TheoreticalAmounts {
                tax,
                general_credit: general,
                labour_credit: labour,
            },
        }
    }

    /// [`calculate`](Self::calculate) over an IEEE-754 double.
    ///
    /// NaN, infinities and values outside the `Decimal` range are treated as
    /// zero, making the operation total over all `f64` inputs.
    pub fn calculate_f64(&self, income: f64) -> TaxResult {
        let income = Decimal::from_f64(income).unwrap_or_else(|| {
            warn!(income, "non-finite or out-of-range income treated as zero");
            Decimal::ZERO
        });
        self.calculate(income)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::bracket_tax::BracketTableError;
    use crate::calculations::general_credit::GeneralCreditConfig;
    use crate::calculations::labour_credit::LabourCreditConfig;
    use crate::models::TaxBracket;

    fn init_test_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("debug")
            .try_init();
    }

    /// Synthetic single-bracket tables that make the reconciliation branches
    /// easy to steer: tax is `rate`% of income, the general credit is a flat
    /// cap below 1000, the labour credit is `t1_rate` times income below
    /// 1000.
    fn synthetic_tables(
        rate: Decimal,
        general_cap: Decimal,
        t1_rate: Decimal,
    ) -> TaxTables {
        TaxTables {
            tax_year: 2025,
            brackets: vec![TaxBracket {
                rate,
                low: dec!(0),
                high: None,
            }],
            general_credit: GeneralCreditConfig {
                cap: general_cap,
                phase_out_start: dec!(1000),
                phase_out_end: dec!(2000),
                phase_out_rate: dec!(0.01),
            },
            labour_credit: LabourCreditConfig {
                t1_end: dec!(1000),
                t1_rate,
                t2_start: dec!(1000),
                t2_end: dec!(2000),
                t2_rate: dec!(0),
                t3_start: dec!(2000),
                t3_end: dec!(3000),
                t3_rate: dec!(0),
                t4_start: dec!(3000),
                t4_end: dec!(4000),
                t4_cap: dec!(0),
                t4_phase_out_rate: dec!(0),
            },
        }
    }

    // =========================================================================
    // construction tests
    // =========================================================================

    #[test]
    fn new_accepts_valid_tables() {
        let engine = TaxEngine::new(TaxTables::nl_2025());

        assert!(engine.is_ok());
    }

    #[test]
    fn new_rejects_invalid_tables() {
        let mut tables = TaxTables::nl_2025();
        tables.brackets.clear();

        let result = TaxEngine::new(tables);

        assert_eq!(
            result.err(),
            Some(TaxTablesError::Brackets(BracketTableError::Empty))
        );
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<TaxEngine>();
    }

    // =========================================================================
    // zero fast path tests
    // =========================================================================

    #[test]
    fn zero_income_returns_zero_result() {
        init_test_tracing();
        let engine = TaxEngine::nl_2025();

        let result = engine.calculate(dec!(0));

        assert_eq!(result, TaxResult::zero());
    }

    #[test]
    fn negative_income_matches_zero_income() {
        init_test_tracing();
        let engine = TaxEngine::nl_2025();

        assert_eq!(engine.calculate(dec!(-100)), engine.calculate(dec!(0)));
    }

    #[test]
    fn income_rounding_to_zero_takes_fast_path() {
        let engine = TaxEngine::nl_2025();

        let result = engine.calculate(dec!(0.4));

        assert_eq!(result, TaxResult::zero());
    }

    #[test]
    fn income_rounding_to_one_euro_is_computed() {
        let engine = TaxEngine::nl_2025();

        let result = engine.calculate(dec!(0.5));

        assert_eq!(result.income_rounded, dec!(1));
        assert_eq!(result.net_income, dec!(1));
    }

    // =========================================================================
    // calculate_f64 tests
    // =========================================================================

    #[test]
    fn calculate_f64_treats_nan_as_zero() {
        init_test_tracing();
        let engine = TaxEngine::nl_2025();

        assert_eq!(engine.calculate_f64(f64::NAN), TaxResult::zero());
    }

    #[test]
    fn calculate_f64_treats_infinities_as_zero() {
        let engine = TaxEngine::nl_2025();

        assert_eq!(engine.calculate_f64(f64::INFINITY), TaxResult::zero());
        assert_eq!(engine.calculate_f64(f64::NEG_INFINITY), TaxResult::zero());
    }

    #[test]
    fn calculate_f64_matches_decimal_for_finite_input() {
        let engine = TaxEngine::nl_2025();

        assert_eq!(engine.calculate_f64(50000.0), engine.calculate(dec!(50000)));
    }

    // =========================================================================
    // reconciliation tests (synthetic tables)
    // =========================================================================

    #[test]
    fn credit_cap_keeps_displayed_sum_at_displayed_tax() {
        // tax = 35.82, general = 300 (cap), labour = 8.053: credits exceed
        // tax, so labour is applied in full and general absorbs the rest.
        let engine =
            TaxEngine::new(synthetic_tables(dec!(35.82), dec!(300), dec!(0.08053))).unwrap();

        let result = engine.calculate(dec!(100));

        assert_eq!(result.displayed_tax, dec!(36));
        assert_eq!(result.displayed_labour_credit, dec!(8));
        assert_eq!(result.displayed_general_credit, dec!(28));
        assert_eq!(result.net_income, dec!(100));
        assert_eq!(result.effective_tax_rate, dec!(0));
    }

    #[test]
    fn drift_passes_may_leave_sum_one_euro_below_tax() {
        init_test_tracing();
        // tax = 10.5 -> 11, labour = 5.2 -> 5, remaining general = 5.3 -> 5.
        // Both corrective passes run but neither can raise a credit above its
        // rounded applied amount, so the sum legitimately stays at 10.
        let engine = TaxEngine::new(synthetic_tables(dec!(10.5), dec!(6), dec!(0.052))).unwrap();

        let result = engine.calculate(dec!(100));

        assert_eq!(result.displayed_tax, dec!(11));
        assert_eq!(result.displayed_labour_credit, dec!(5));
        assert_eq!(result.displayed_general_credit, dec!(5));
        assert_eq!(result.net_income, dec!(99));
        assert_eq!(result.monthly_income, dec!(8));
        assert_eq!(result.effective_tax_rate, dec!(1));
    }

    #[test]
    fn safety_net_strips_rounding_excess_from_general() {
        // Credits do not exceed the tax (10.0 <= 10.4), so the cap branch is
        // skipped, but rounding alone pushes the displayed sum to 11 against
        // a displayed tax of 10. The safety net shrinks general from 6 to 5.
        let engine = TaxEngine::new(synthetic_tables(dec!(10.4), dec!(5.5), dec!(0.045))).unwrap();

        let result = engine.calculate(dec!(100));

        assert_eq!(result.displayed_tax, dec!(10));
        assert_eq!(result.displayed_labour_credit, dec!(5));
        assert_eq!(result.displayed_general_credit, dec!(5));
        assert_eq!(result.net_income, dec!(100));
        assert_eq!(result.effective_tax_rate, dec!(0));
    }

    #[test]
    fn theoretical_triple_is_unrounded() {
        let engine = TaxEngine::nl_2025();

        let result = engine.calculate(dec!(12169));

        assert_eq!(result.theoretical.tax, dec!(4358.9358));
        assert_eq!(result.theoretical.general_credit, dec!(3068));
        assert_eq!(result.theoretical.labour_credit, dec!(979.96957));
    }

    #[test]
    fn tax_paid_is_tax_minus_credits() {
        let engine = TaxEngine::nl_2025();

        let result = engine.calculate(dec!(50000));

        // 18102 - 1700 - 5148
        assert_eq!(result.tax_paid(), dec!(11254));
    }
}
