use crate::report::{InventoryReport, RowEvaluation, SkipReason};
use core_types::{InventoryRow, ProductRecord};
use rust_decimal::Decimal;

/// A stateless calculator for deriving sell prices and stock totals from the
/// rows of the inventory.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

/// What a single priced row contributes to the totals.
struct RowContribution {
    sell_price: Decimal,
    investment: Decimal,
    revenue: Decimal,
}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for calculating the inventory report.
    ///
    /// # Arguments
    ///
    /// * `rows` - The rows of the record store, in display order.
    ///
    /// # Returns
    ///
    /// The `InventoryReport`. A row that cannot be priced, or whose
    /// contribution would overflow a running total, is reported as skipped
    /// and left out of the totals.
    pub fn calculate(&self, rows: &[InventoryRow]) -> InventoryReport {
        let mut report = InventoryReport::new();

        for row in rows {
            let evaluation = match row {
                InventoryRow::Priced(record) => self.price_into(record, &mut report),
                InventoryRow::Unreadable(raw) => {
                    let reason = raw
                        .parse()
                        .err()
                        .map(|e| e.to_string())
                        .unwrap_or_else(|| "row was not validated on load".to_string());
                    RowEvaluation::Skipped(SkipReason::Unreadable(reason))
                }
            };

            match evaluation {
                RowEvaluation::Priced { .. } => report.priced_rows += 1,
                RowEvaluation::Skipped(_) => report.skipped_rows += 1,
            }
            report.rows.push(evaluation);
        }

        // Both totals lie in [0, Decimal::MAX], so the difference cannot overflow.
        report.net_profit = report.total_revenue - report.total_investment;

        tracing::debug!(
            priced = report.priced_rows,
            skipped = report.skipped_rows,
            investment = %report.total_investment,
            revenue = %report.total_revenue,
            "Inventory report calculated."
        );

        report
    }

    /// Adds one record to the running totals, or skips it if its own
    /// arithmetic or either new total overflows. Totals are only updated
    /// when both additions succeed.
    fn price_into(&self, record: &ProductRecord, report: &mut InventoryReport) -> RowEvaluation {
        let totals = self.contribution(record).and_then(|contribution| {
            let investment = report.total_investment.checked_add(contribution.investment)?;
            let revenue = report.total_revenue.checked_add(contribution.revenue)?;
            Some((contribution.sell_price, investment, revenue))
        });

        match totals {
            Some((sell_price, investment, revenue)) => {
                report.total_investment = investment;
                report.total_revenue = revenue;
                RowEvaluation::Priced { sell_price }
            }
            None => {
                tracing::warn!(name = record.name(), "Row arithmetic overflowed; skipping.");
                RowEvaluation::Skipped(SkipReason::Overflow)
            }
        }
    }

    /// Prices one record. Returns `None` if any product overflows.
    fn contribution(&self, record: &ProductRecord) -> Option<RowContribution> {
        let sell_price = record.sell_price().ok()?;
        let stock = Decimal::from(record.stock_qty());

        Some(RowContribution {
            sell_price,
            investment: record.cost_price().checked_mul(stock)?,
            revenue: sell_price.checked_mul(stock)?,
        })
    }
}
