use crate::error::StoreError;
use crate::file;
use core_types::{InventoryRow, ProductDraft, ProductRecord, RecordId};
use std::path::Path;

/// The in-memory inventory table.
///
/// Rows keep their insertion order. Each row gets a `RecordId` when it enters
/// the store; removing a row never changes the ids of the others.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    ids: Vec<RecordId>,
    rows: Vec<InventoryRow>,
    dirty: bool,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from freshly loaded rows. The result has no unsaved changes.
    pub fn from_rows(rows: Vec<InventoryRow>) -> Self {
        Self {
            ids: rows.iter().map(|_| RecordId::new()).collect(),
            rows,
            dirty: false,
        }
    }

    /// Validates `draft` and appends it.
    pub fn add(&mut self, draft: ProductDraft) -> Result<RecordId, StoreError> {
        let record = ProductRecord::try_from(draft)?;
        Ok(self.add_record(record))
    }

    pub fn add_record(&mut self, record: ProductRecord) -> RecordId {
        let id = RecordId::new();
        tracing::debug!(%id, name = record.name(), "Adding product.");
        self.ids.push(id);
        self.rows.push(InventoryRow::Priced(record));
        self.dirty = true;
        id
    }

    /// Removes the row with `id`. Returns `None` if there is no such row.
    pub fn remove(&mut self, id: RecordId) -> Option<InventoryRow> {
        let index = self.ids.iter().position(|candidate| *candidate == id)?;
        Some(self.remove_index(index).1)
    }

    /// Removes the row at the 1-based `position` as shown in listings.
    pub fn remove_at(&mut self, position: usize) -> Option<(RecordId, InventoryRow)> {
        let index = position.checked_sub(1)?;
        if index >= self.rows.len() {
            return None;
        }
        Some(self.remove_index(index))
    }

    fn remove_index(&mut self, index: usize) -> (RecordId, InventoryRow) {
        let id = self.ids.remove(index);
        let row = self.rows.remove(index);
        tracing::debug!(%id, name = row.name(), "Removed product.");
        self.dirty = true;
        (id, row)
    }

    pub fn get(&self, id: RecordId) -> Option<&InventoryRow> {
        let index = self.ids.iter().position(|candidate| *candidate == id)?;
        self.rows.get(index)
    }

    pub fn rows(&self) -> &[InventoryRow] {
        &self.rows
    }

    pub fn ids(&self) -> &[RecordId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True if rows were added or removed since the last load or save.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Writes every row to `path` and clears the dirty flag.
    pub fn save(&mut self, path: &Path) -> Result<(), StoreError> {
        file::save(path, &self.rows)?;
        self.dirty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn widget() -> ProductDraft {
        ProductDraft {
            name: "Widget".to_string(),
            category: "Other".to_string(),
            cost_price: dec!(10.0),
            markup_pct: dec!(20.0),
            stock_qty: 5,
        }
    }

    #[test]
    fn add_appends_in_order() {
        let mut store = RecordStore::new();
        let first = store.add(widget()).unwrap();
        let second = store
            .add(ProductDraft {
                name: "Gadget".to_string(),
                ..widget()
            })
            .unwrap();

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
        assert_eq!(store.rows()[0].name(), "Widget");
        assert_eq!(store.rows()[1].name(), "Gadget");
        assert_eq!(store.get(second).map(|row| row.name()), Some("Gadget"));
        assert!(store.is_dirty());
    }

    #[test]
    fn invalid_draft_adds_nothing() {
        let mut store = RecordStore::new();
        let result = store.add(ProductDraft {
            cost_price: Decimal::NEGATIVE_ONE,
            ..widget()
        });

        assert!(matches!(result, Err(StoreError::InvalidRecord(_))));
        assert!(store.is_empty());
        assert!(!store.is_dirty());
    }

    #[test]
    fn add_then_remove_restores_prior_rows() {
        let mut store = RecordStore::new();
        store.add(widget()).unwrap();
        let before = store.rows().to_vec();

        let id = store
            .add(ProductDraft {
                name: "Temporary".to_string(),
                ..widget()
            })
            .unwrap();
        let removed = store.remove(id).expect("row should exist");

        assert_eq!(removed.name(), "Temporary");
        assert_eq!(store.rows(), before.as_slice());
        assert!(store.get(id).is_none());
    }

    #[test]
    fn removing_from_an_empty_store_is_a_no_op() {
        let mut store = RecordStore::new();
        assert!(store.remove(RecordId::new()).is_none());
        assert!(store.remove_at(1).is_none());
        assert!(store.remove_at(0).is_none());
        assert!(store.is_empty());
        assert!(!store.is_dirty());
    }

    #[test]
    fn remove_at_uses_one_based_positions() {
        let mut store = RecordStore::new();
        let widget_id = store.add(widget()).unwrap();
        store
            .add(ProductDraft {
                name: "Gadget".to_string(),
                ..widget()
            })
            .unwrap();

        assert!(store.remove_at(3).is_none());
        let (id, row) = store.remove_at(1).unwrap();
        assert_eq!(id, widget_id);
        assert_eq!(row.name(), "Widget");
        assert_eq!(store.rows()[0].name(), "Gadget");
    }

    #[test]
    fn loaded_rows_start_clean_with_fresh_ids() {
        let record = ProductRecord::new("Tea", "Food", dec!(2), dec!(50), 3).unwrap();
        let store = RecordStore::from_rows(vec![record.into()]);

        assert_eq!(store.ids().len(), 1);
        assert!(!store.is_dirty());
    }
}
