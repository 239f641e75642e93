use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Why a row was left out of the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// One of the row's numeric fields did not parse.
    Unreadable(String),
    /// The row's own arithmetic, or a running total with the row added,
    /// does not fit in a `Decimal`.
    Overflow,
}

/// The calculator's verdict on a single row, in store order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowEvaluation {
    Priced { sell_price: Decimal },
    Skipped(SkipReason),
}

impl RowEvaluation {
    pub fn sell_price(&self) -> Option<Decimal> {
        match self {
            RowEvaluation::Priced { sell_price } => Some(*sell_price),
            RowEvaluation::Skipped(_) => None,
        }
    }
}

/// The output of the `AnalyticsEngine`.
///
/// All amounts are plain, unrounded decimals. Rounding and currency suffixes
/// are applied by whoever displays the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryReport {
    /// Sum of `cost * stock` over priced rows.
    pub total_investment: Decimal,
    /// Sum of `sell price * stock` over priced rows.
    pub total_revenue: Decimal,
    /// `total_revenue - total_investment`.
    pub net_profit: Decimal,

    pub priced_rows: usize,
    pub skipped_rows: usize,

    /// One entry per input row, same order.
    pub rows: Vec<RowEvaluation>,
}

impl InventoryReport {
    /// Creates a new, zeroed-out report. This is the report of an empty store.
    pub fn new() -> Self {
        Self {
            total_investment: Decimal::ZERO,
            total_revenue: Decimal::ZERO,
            net_profit: Decimal::ZERO,
            priced_rows: 0,
            skipped_rows: 0,
            rows: Vec::new(),
        }
    }
}

impl Default for InventoryReport {
    fn default() -> Self {
        Self::new()
    }
}
