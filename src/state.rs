use analytics::{AnalyticsEngine, InventoryReport};
use anyhow::Context;
use configuration::Config;
use core_types::{InventoryRow, ProductDraft, RecordId};
use database::{LoadOutcome, RecordStore};

/// Everything the shell works on: settings, the record store, and the report
/// for the store's current rows.
///
/// Every mutation goes through this type so the report is recalculated after
/// each add, remove, load and sync.
pub struct AppState {
    config: Config,
    store: RecordStore,
    engine: AnalyticsEngine,
    report: InventoryReport,
}

impl AppState {
    /// Builds the state from the result of the start-up load.
    pub fn from_outcome(config: Config, outcome: LoadOutcome) -> Self {
        let mut state = Self {
            config,
            store: RecordStore::from_rows(outcome.into_rows()),
            engine: AnalyticsEngine::new(),
            report: InventoryReport::new(),
        };
        state.refresh();
        state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn rows(&self) -> &[InventoryRow] {
        self.store.rows()
    }

    pub fn report(&self) -> &InventoryReport {
        &self.report
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.store.is_dirty()
    }

    pub fn add(&mut self, draft: ProductDraft) -> anyhow::Result<RecordId> {
        let id = self.store.add(draft)?;
        self.refresh();
        Ok(id)
    }

    pub fn remove(&mut self, id: RecordId) -> Option<InventoryRow> {
        let removed = self.store.remove(id);
        self.refresh();
        removed
    }

    /// Removes the row at the 1-based `position`.
    pub fn remove_at(&mut self, position: usize) -> Option<InventoryRow> {
        let id = position
            .checked_sub(1)
            .and_then(|index| self.store.ids().get(index).copied())?;
        self.remove(id)
    }

    /// Overwrites the inventory file with the current rows.
    pub fn sync(&mut self) -> anyhow::Result<()> {
        let path = self.config.storage.path.clone();
        self.store
            .save(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        self.refresh();
        Ok(())
    }

    fn refresh(&mut self) {
        self.report = self.engine.calculate(self.store.rows());
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use analytics::{RowEvaluation, SkipReason};
    use configuration::{Display, Entry, LogLevel, Logging, Storage};
    use core_types::ProductRecord;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::path::Path;

    pub(crate) fn test_config(path: &Path) -> Config {
        Config {
            storage: Storage {
                path: path.to_path_buf(),
            },
            display: Display {
                title: "NOVA BI".to_string(),
                currency_suffix: "DHS".to_string(),
            },
            entry: Entry {
                categories: vec!["Electronics".to_string(), "Other".to_string()],
                default_markup_pct: dec!(20),
            },
            logging: Logging {
                directory: path.with_file_name("logs"),
                file_prefix: "nova.log".to_string(),
                level: LogLevel::Info,
            },
        }
    }

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
    fn report_follows_every_mutation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let mut state = AppState::from_outcome(test_config(&path), LoadOutcome::Missing);
        assert_eq!(state.report().net_profit, Decimal::ZERO);

        let id = state.add(widget()).unwrap();
        assert_eq!(state.report().total_investment, dec!(50.00));
        assert_eq!(state.report().total_revenue, dec!(60.00));
        assert_eq!(state.report().net_profit, dec!(10.00));

        assert!(state.remove(id).is_some());
        assert_eq!(state.report().total_investment, Decimal::ZERO);
        assert!(state.report().rows.is_empty());
    }

    #[test]
    fn sync_writes_the_file_and_clears_unsaved_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let mut state = AppState::from_outcome(test_config(&path), LoadOutcome::Missing);

        state.add(widget()).unwrap();
        assert!(state.has_unsaved_changes());
        state.sync().unwrap();
        assert!(!state.has_unsaved_changes());

        let reloaded = AppState::from_outcome(test_config(&path), database::load(&path));
        assert_eq!(reloaded.rows().len(), 1);
        assert_eq!(reloaded.report().net_profit, dec!(10));
    }

    #[test]
    fn corrupt_start_up_file_gives_an_empty_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let state = AppState::from_outcome(
            test_config(&path),
            LoadOutcome::Corrupt("trailing characters".to_string()),
        );

        assert!(state.rows().is_empty());
        assert!(!state.has_unsaved_changes());
    }

    #[test]
    fn rejected_draft_leaves_state_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let mut state = AppState::from_outcome(test_config(&path), LoadOutcome::Missing);

        let result = state.add(ProductDraft {
            name: String::new(),
            ..widget()
        });

        assert!(result.is_err());
        assert!(state.rows().is_empty());
        assert!(!state.has_unsaved_changes());
    }

    fn huge(name: &str) -> InventoryRow {
        ProductRecord::new(name, "Other", Decimal::MAX, dec!(0), 1)
            .unwrap()
            .into()
    }

    fn assert_report_matches_rows(state: &AppState) {
        assert_eq!(state.rows().len(), state.report().rows.len());
        assert_eq!(
            state.report().priced_rows + state.report().skipped_rows,
            state.rows().len()
        );
    }

    #[test]
    fn start_up_survives_totals_that_overflow() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let state = AppState::from_outcome(
            test_config(&path),
            LoadOutcome::Loaded(vec![huge("A"), huge("B")]),
        );

        assert_eq!(state.rows().len(), 2);
        assert_eq!(state.report().total_investment, Decimal::MAX);
        assert_eq!(state.report().rows[1], RowEvaluation::Skipped(SkipReason::Overflow));
        assert_report_matches_rows(&state);
    }

    #[test]
    fn overflowing_rows_can_still_be_added_and_removed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let mut state =
            AppState::from_outcome(test_config(&path), LoadOutcome::Loaded(vec![huge("A")]));
        assert_report_matches_rows(&state);

        state
            .add(ProductDraft {
                cost_price: Decimal::MAX,
                markup_pct: dec!(0),
                stock_qty: 1,
                ..widget()
            })
            .unwrap();
        assert_report_matches_rows(&state);
        assert_eq!(state.report().skipped_rows, 1);
        assert!(state.has_unsaved_changes());

        assert!(state.remove_at(1).is_some());
        assert_report_matches_rows(&state);
        assert_eq!(state.report().skipped_rows, 0);
        assert_eq!(state.report().total_investment, Decimal::MAX);

        state.sync().unwrap();
        assert_report_matches_rows(&state);
        assert!(state.remove_at(5).is_none());
        assert_report_matches_rows(&state);
    }
}
