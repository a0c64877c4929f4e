use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One bracket of the progressive income-tax schedule.
///
/// `rate` is a percentage (e.g. `35.82`), not a fraction. `high` is `None`
/// for the unbounded top bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub rate: Decimal,
    pub low: Decimal,
    pub high: Option<Decimal>,
}
