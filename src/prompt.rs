use crate::cli::AddArgs;
use configuration::Entry;
use core_types::{parse_amount, parse_quantity, ProductDraft};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

/// Typing this at any prompt abandons the current entry.
pub const CANCEL_WORD: &str = "q";

/// A line-oriented conversation with the user.
pub trait Prompter {
    /// Shows `label` and reads one line. `None` means the user cancelled,
    /// either with [`CANCEL_WORD`] or by closing the input.
    fn ask(&mut self, label: &str) -> Option<String>;

    /// Shows a message that needs no answer.
    fn say(&mut self, message: &str);
}

/// A `Prompter` over any reader/writer pair, usually stdin and stdout.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn ask(&mut self, label: &str) -> Option<String> {
        // A broken terminal reads as a cancel.
        if write!(self.output, "{label} ").and_then(|_| self.output.flush()).is_err() {
            return None;
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let answer = line.trim();
                if answer.eq_ignore_ascii_case(CANCEL_WORD) {
                    None
                } else {
                    Some(answer.to_string())
                }
            }
        }
    }

    fn say(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "{message}") {
            tracing::warn!(error = %e, "Failed to write to the terminal.");
        }
    }
}

/// Runs the guided product entry: name, category, cost, markup, stock.
///
/// Steps already answered by `preset` are not asked. Returns `None` as soon as
/// any step is cancelled, in which case nothing should be added. A blank name
/// also cancels. Blank answers elsewhere take the step's default: the first
/// category, a cost of zero, the configured markup, a stock of zero.
pub fn run_questionnaire(
    prompter: &mut impl Prompter,
    entry: &Entry,
    preset: AddArgs,
) -> Option<ProductDraft> {
    let name = match preset.name {
        Some(name) => name,
        None => prompter.ask("Product Name:")?,
    };
    if name.trim().is_empty() {
        return None;
    }

    let category = match preset.category {
        Some(category) => category,
        None => ask_category(prompter, &entry.categories)?,
    };

    let cost_price = match preset.cost {
        Some(cost) => cost,
        None => ask_amount(prompter, "Cost Price [0]:", "cost price", Decimal::ZERO)?,
    };

    let markup_pct = match preset.markup {
        Some(markup) => markup,
        None => ask_amount(
            prompter,
            &format!("Markup % [{}]:", entry.default_markup_pct),
            "markup",
            entry.default_markup_pct,
        )?,
    };

    let stock_qty = match preset.stock {
        Some(stock) => stock,
        None => i64::from(ask_quantity(prompter, "Stock Qty [0]:")?),
    };

    Some(ProductDraft {
        name,
        category,
        cost_price,
        markup_pct,
        stock_qty,
    })
}

fn ask_category(prompter: &mut impl Prompter, categories: &[String]) -> Option<String> {
    let choices = categories
        .iter()
        .enumerate()
        .map(|(i, name)| format!("[{}] {name}", i + 1))
        .collect::<Vec<_>>()
        .join("  ");
    prompter.say(&format!("Category: {choices}"));

    loop {
        let answer = prompter.ask("Choose a category [1]:")?;
        if answer.is_empty() {
            return categories.first().cloned();
        }
        if let Ok(number) = answer.parse::<usize>() {
            if let Some(category) = number.checked_sub(1).and_then(|i| categories.get(i)) {
                return Some(category.clone());
            }
        }
        if let Some(category) = categories.iter().find(|c| c.eq_ignore_ascii_case(&answer)) {
            return Some(category.clone());
        }
        prompter.say(&format!("'{answer}' is not one of the listed categories."));
    }
}

fn ask_amount(prompter: &mut impl Prompter, label: &str, field: &str, default: Decimal) -> Option<Decimal> {
    loop {
        let answer = prompter.ask(label)?;
        if answer.is_empty() {
            return Some(default);
        }
        match parse_amount(field, &answer) {
            Ok(amount) => return Some(amount),
            Err(e) => prompter.say(&e.to_string()),
        }
    }
}

fn ask_quantity(prompter: &mut impl Prompter, label: &str) -> Option<u32> {
    loop {
        let answer = prompter.ask(label)?;
        if answer.is_empty() {
            return Some(0);
        }
        match parse_quantity("stock quantity", &answer) {
            Ok(quantity) => return Some(quantity),
            Err(e) => prompter.say(&e.to_string()),
        }
    }
}
