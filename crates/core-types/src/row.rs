use crate::error::CoreError;
use crate::product::{parse_amount, parse_quantity, ProductRecord};

/// A product exactly as it was read from disk.
///
/// Numeric fields are kept as text so a row that fails to parse can still be
/// shown, removed, and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawProduct {
    pub name: String,
    pub category: String,
    pub cost_price: String,
    pub markup_pct: String,
    pub stock_qty: String,
}

impl RawProduct {
    pub fn parse(&self) -> Result<ProductRecord, CoreError> {
        let cost_price = parse_amount("cost price", &self.cost_price)?;
        let markup_pct = parse_amount("markup", &self.markup_pct)?;
        let stock_qty = parse_quantity("stock quantity", &self.stock_qty)?;
        ProductRecord::new(&self.name, &self.category, cost_price, markup_pct, stock_qty)
    }
}

impl From<&ProductRecord> for RawProduct {
    fn from(record: &ProductRecord) -> Self {
        Self {
            name: record.name().to_string(),
            category: record.category().to_string(),
            cost_price: record.cost_price().to_string(),
            markup_pct: record.markup_pct().to_string(),
            stock_qty: record.stock_qty().to_string(),
        }
    }
}

/// One row of the inventory table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryRow {
    /// Every input parsed and passed validation.
    Priced(ProductRecord),
    /// Loaded from disk, but a field did not parse. Skipped by the calculator.
    Unreadable(RawProduct),
}

impl InventoryRow {
    /// Classifies a row read from disk.
    pub fn from_raw(raw: RawProduct) -> Self {
        match raw.parse() {
            Ok(record) => InventoryRow::Priced(record),
            Err(e) => {
                tracing::warn!(name = %raw.name, error = %e, "Keeping unreadable inventory row.");
                InventoryRow::Unreadable(raw)
            }
        }
    }

    pub fn name(&self) -> &str {
        match self {
            InventoryRow::Priced(record) => record.name(),
            InventoryRow::Unreadable(raw) => &raw.name,
        }
    }

    pub fn category(&self) -> &str {
        match self {
            InventoryRow::Priced(record) => record.category(),
            InventoryRow::Unreadable(raw) => &raw.category,
        }
    }

    pub fn as_record(&self) -> Option<&ProductRecord> {
        match self {
            InventoryRow::Priced(record) => Some(record),
            InventoryRow::Unreadable(_) => None,
        }
    }

    /// The row's persisted form.
    pub fn to_raw(&self) -> RawProduct {
        match self {
            InventoryRow::Priced(record) => RawProduct::from(record),
            InventoryRow::Unreadable(raw) => raw.clone(),
        }
    }
}

impl From<ProductRecord> for InventoryRow {
    fn from(record: ProductRecord) -> Self {
        InventoryRow::Priced(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn raw(cost: &str, markup: &str, stock: &str) -> RawProduct {
        RawProduct {
            name: "Lamp".to_string(),
            category: "Electronics".to_string(),
            cost_price: cost.to_string(),
            markup_pct: markup.to_string(),
            stock_qty: stock.to_string(),
        }
    }

    #[test]
    fn well_formed_raw_row_becomes_priced() {
        let row = InventoryRow::from_raw(raw("10.0", "20.0", "5"));
        let record = row.as_record().expect("row should be priced");
        assert_eq!(record.cost_price(), dec!(10));
        assert_eq!(record.stock_qty(), 5);
    }

    #[test]
    fn bad_numeric_text_keeps_the_row_as_unreadable() {
        let original = raw("ten", "20", "5");
        let row = InventoryRow::from_raw(original.clone());
        assert_eq!(row, InventoryRow::Unreadable(original.clone()));
        assert_eq!(row.name(), "Lamp");
        assert_eq!(row.to_raw(), original);
    }

    #[test]
    fn priced_row_persists_the_inputs_it_was_built_from() {
        let row = InventoryRow::from_raw(raw("10.0", "20.0", "5"));
        assert_eq!(row.to_raw(), raw("10.0", "20.0", "5"));
    }
}
