//! The on-disk schema of the inventory file.
//!
//! The file is a JSON array with one object per row:
//!
//! ```json
//! [{"n":"Widget","c":"Other","co":"10.0","m":"20.0","s":"5"}]
//! ```
//!
//! Numeric fields are written as strings. Plain JSON numbers are accepted on
//! read. Any other key, including a stored sell price, is ignored: the sell
//! price is always recomputed from cost and markup.

use crate::error::StoreError;
use core_types::{InventoryRow, RawProduct};
use serde::{Deserialize, Serialize};

/// A single element of the inventory file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct FileRow {
    #[serde(rename = "n")]
    name: String,
    #[serde(rename = "c")]
    category: String,
    #[serde(rename = "co")]
    cost_price: NumericText,
    #[serde(rename = "m")]
    markup_pct: NumericText,
    #[serde(rename = "s")]
    stock_qty: NumericText,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum NumericText {
    Text(String),
    Number(serde_json::Number),
}

impl NumericText {
    fn into_text(self) -> String {
        match self {
            NumericText::Text(text) => text,
            NumericText::Number(number) => number.to_string(),
        }
    }
}

impl From<RawProduct> for FileRow {
    fn from(raw: RawProduct) -> Self {
        Self {
            name: raw.name,
            category: raw.category,
            cost_price: NumericText::Text(raw.cost_price),
            markup_pct: NumericText::Text(raw.markup_pct),
            stock_qty: NumericText::Text(raw.stock_qty),
        }
    }
}

impl From<FileRow> for RawProduct {
    fn from(row: FileRow) -> Self {
        Self {
            name: row.name,
            category: row.category,
            cost_price: row.cost_price.into_text(),
            markup_pct: row.markup_pct.into_text(),
            stock_qty: row.stock_qty.into_text(),
        }
    }
}

/// Encodes rows in the inventory file format.
pub fn serialize(rows: &[InventoryRow]) -> Result<Vec<u8>, StoreError> {
    let file_rows: Vec<FileRow> = rows.iter().map(|row| FileRow::from(row.to_raw())).collect();
    Ok(serde_json::to_vec(&file_rows)?)
}

/// Decodes a prior serialization.
///
/// Fails only when the document itself is unusable (not JSON, not an array,
/// or an element missing a key). A row whose numbers do not parse comes back
/// as `InventoryRow::Unreadable`.
pub fn deserialize(bytes: &[u8]) -> Result<Vec<InventoryRow>, StoreError> {
    let file_rows: Vec<FileRow> = serde_json::from_slice(bytes)?;
    Ok(file_rows
        .into_iter()
        .map(|row| InventoryRow::from_raw(RawProduct::from(row)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::ProductRecord;
    use rust_decimal_macros::dec;

    #[test]
    fn writes_short_keys_and_string_numbers() {
        let rows = vec![InventoryRow::from(
            ProductRecord::new("Widget", "Other", dec!(10.0), dec!(20.0), 5).unwrap(),
        )];
        let json = String::from_utf8(serialize(&rows).unwrap()).unwrap();
        assert_eq!(
            json,
            r#"[{"n":"Widget","c":"Other","co":"10.0","m":"20.0","s":"5"}]"#
        );
    }

    #[test]
    fn reads_numbers_as_well_as_strings() {
        let rows = deserialize(br#"[{"n":"Tea","c":"Food","co":2.5,"m":"40","s":12}]"#).unwrap();
        let record = rows[0].as_record().expect("row should be priced");
        assert_eq!(record.cost_price(), dec!(2.5));
        assert_eq!(record.markup_pct(), dec!(40));
        assert_eq!(record.stock_qty(), 12);
    }

    #[test]
    fn stored_sell_price_is_ignored() {
        let rows = deserialize(
            br#"[{"n":"Tea","c":"Food","co":"2","m":"50","sp":"999.00","sellPrice":1,"s":"1"}]"#,
        )
        .unwrap();
        let record = rows[0].as_record().unwrap();
        assert_eq!(record.sell_price().unwrap(), dec!(3));
    }

    #[test]
    fn empty_array_is_an_empty_inventory() {
        assert!(deserialize(b"[]").unwrap().is_empty());
    }

    #[test]
    fn malformed_documents_are_errors() {
        for bad in [
            &b"not json"[..],
            b"{}",
            b"[{\"n\":\"Tea\"}]",
            b"[{\"n\":\"Tea\",\"c\":\"Food\",\"co\":null,\"m\":\"1\",\"s\":\"1\"}]",
            b"",
        ] {
            assert!(
                matches!(deserialize(bad), Err(StoreError::JsonError(_))),
                "expected a JSON error for {:?}",
                String::from_utf8_lossy(bad)
            );
        }
    }
}
