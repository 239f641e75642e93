use analytics::{InventoryReport, RowEvaluation, SkipReason};
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};
use core_types::InventoryRow;
use database::LoadOutcome;
use rust_decimal::{Decimal, RoundingStrategy};
use std::path::Path;

/// Formats an amount with two decimals, thousands separators and an optional
/// currency suffix: `1234.5` becomes `1,234.50 DHS`.
pub fn format_money(amount: Decimal, suffix: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    if suffix.is_empty() {
        format!("{sign}{grouped}.{fraction}")
    } else {
        format!("{sign}{grouped}.{fraction} {suffix}")
    }
}

/// The product table: one line per row, unreadable rows included.
pub fn products_table(rows: &[InventoryRow], report: &InventoryReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").fg(Color::Cyan),
        Cell::new("PRODUCT").fg(Color::Cyan),
        Cell::new("CATEGORY").fg(Color::Cyan),
        Cell::new("COST").fg(Color::Cyan),
        Cell::new("MARKUP").fg(Color::Cyan),
        Cell::new("SELL PRICE").fg(Color::Cyan),
        Cell::new("STOCK").fg(Color::Cyan),
    ]);

    for (index, row) in rows.iter().enumerate() {
        let raw = row.to_raw();
        let sell_price = match report.rows.get(index) {
            Some(RowEvaluation::Priced { sell_price }) => {
                Cell::new(format_money(*sell_price, "")).fg(Color::Blue)
            }
            Some(RowEvaluation::Skipped(SkipReason::Overflow)) => Cell::new("overflow").fg(Color::Red),
            Some(RowEvaluation::Skipped(SkipReason::Unreadable(_))) | None => {
                Cell::new("n/a").fg(Color::Red)
            }
        };

        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(row.name()),
            Cell::new(row.category()),
            Cell::new(raw.cost_price).set_alignment(CellAlignment::Right),
            Cell::new(format!("{}%", raw.markup_pct)).set_alignment(CellAlignment::Right),
            sell_price.set_alignment(CellAlignment::Right),
            Cell::new(raw.stock_qty).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// The three stat cards as a single table.
pub fn stat_cards(report: &InventoryReport, currency_suffix: &str) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("INVESTMENT").fg(Color::Cyan),
        Cell::new("EST. REVENUE").fg(Color::Magenta),
        Cell::new("NET PROFIT").fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new(format_money(report.total_investment, currency_suffix)),
        Cell::new(format_money(report.total_revenue, currency_suffix)),
        Cell::new(format_money(report.net_profit, currency_suffix)),
    ]);

    table
}

/// A one-line note about the start-up load, or `None` when there is nothing
/// worth telling the user.
pub fn load_notice(outcome: &LoadOutcome, path: &Path) -> Option<String> {
    match outcome {
        LoadOutcome::Loaded(_) | LoadOutcome::Missing => None,
        LoadOutcome::Corrupt(reason) => Some(format!(
            "Could not read {} ({reason}); starting with an empty inventory.",
            path.display()
        )),
    }
}

/// A one-line summary of rows left out of the totals.
pub fn skipped_notice(report: &InventoryReport) -> Option<String> {
    match report.skipped_rows {
        0 => None,
        1 => Some("1 row could not be priced and is left out of the totals.".to_string()),
        n => Some(format!("{n} rows could not be priced and are left out of the totals.")),
    }
}
