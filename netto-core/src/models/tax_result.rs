use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::max;

/// The unrounded calculator outputs, kept alongside the display fields for
/// diagnostics and testing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TheoreticalAmounts {
    pub tax: Decimal,
    pub general_credit: Decimal,
    pub labour_credit: Decimal,
}

/// The full breakdown produced by one [`TaxEngine::calculate`] call.
///
/// All `displayed_*` fields, `income_rounded`, `net_income` and
/// `monthly_income` are whole euros; `effective_tax_rate` is a whole
/// percentage. The display fields are reconciled so that
/// `displayed_general_credit + displayed_labour_credit <= displayed_tax`
/// always holds.
///
/// [`TaxEngine::calculate`]: crate::TaxEngine::calculate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    /// Gross annual income, rounded to whole euros.
    pub income_rounded: Decimal,

    /// Gross income tax before credits, rounded.
    pub displayed_tax: Decimal,

    /// General tax credit as applied, rounded and capped against the tax.
    pub displayed_general_credit: Decimal,

    /// Labour tax credit as applied, rounded and capped against the tax.
    pub displayed_labour_credit: Decimal,

    /// `income_rounded - displayed_tax + both displayed credits`.
    pub net_income: Decimal,

    /// `net_income / 12`, rounded.
    pub monthly_income: Decimal,

    /// Whole-percent effective rate over `income_rounded`.
    pub effective_tax_rate: Decimal,

    /// The unrounded tax and credits the display fields were derived from.
    pub theoretical: TheoreticalAmounts,
}

impl TaxResult {
    /// The all-zero result returned for incomes that round to zero or below.
    pub(crate) fn zero() -> Self {
        Self {
            income_rounded: Decimal::ZERO,
            displayed_tax: Decimal::ZERO,
            displayed_general_credit: Decimal::ZERO,
            displayed_labour_credit: Decimal::ZERO,
            net_income: Decimal::ZERO,
            monthly_income: Decimal::ZERO,
            effective_tax_rate: Decimal::ZERO,
            theoretical: TheoreticalAmounts {
                tax: Decimal::ZERO,
                general_credit: Decimal::ZERO,
                labour_credit: Decimal::ZERO,
            },
        }
    }

    /// Tax actually paid after both credits, floored at zero.
    pub fn tax_paid(&self) -> Decimal {
        max(
            self.displayed_tax - self.displayed_general_credit - self.displayed_labour_credit,
            Decimal::ZERO,
        )
    }
}
