use crate::error::CoreError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A stable identifier for a row held in the record store.
///
/// Ids are assigned when a row enters the store and are never persisted, so a
/// reload hands out fresh ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unvalidated input for a new product, as collected by the entry prompt or
/// the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub cost_price: Decimal,
    pub markup_pct: Decimal,
    pub stock_qty: i64,
}

/// A validated product.
///
/// The fields are private so the non-negativity and non-blank invariants hold
/// for every value of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    name: String,
    category: String,
    cost_price: Decimal,
    markup_pct: Decimal,
    stock_qty: u32,
}

impl ProductRecord {
    /// Builds a record, rejecting blank text fields and negative numbers.
    /// Name and category are stored exactly as given, so whatever is loaded
    /// from disk is written back unchanged.
    pub fn new(
        name: &str,
        category: &str,
        cost_price: Decimal,
        markup_pct: Decimal,
        stock_qty: u32,
    ) -> Result<Self, CoreError> {
        if name.trim().is_empty() {
            return Err(CoreError::invalid("name", "must not be empty"));
        }
        if category.trim().is_empty() {
            return Err(CoreError::invalid("category", "must not be empty"));
        }
        if cost_price < Decimal::ZERO {
            return Err(CoreError::invalid("cost price", "must not be negative"));
        }
        if markup_pct < Decimal::ZERO {
            return Err(CoreError::invalid("markup", "must not be negative"));
        }

        Ok(Self {
            name: name.to_string(),
            category: category.to_string(),
            cost_price,
            markup_pct,
            stock_qty,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn cost_price(&self) -> Decimal {
        self.cost_price
    }

    pub fn markup_pct(&self) -> Decimal {
        self.markup_pct
    }

    pub fn stock_qty(&self) -> u32 {
        self.stock_qty
    }

    /// The derived sell price, `cost * (1 + markup / 100)`.
    pub fn sell_price(&self) -> Result<Decimal, CoreError> {
        sell_price(self.cost_price, self.markup_pct).ok_or_else(|| {
            CoreError::Calculation(format!("sell price of '{}' overflows", self.name))
        })
    }
}

impl TryFrom<ProductDraft> for ProductRecord {
    type Error = CoreError;

    fn try_from(draft: ProductDraft) -> Result<Self, Self::Error> {
        let stock_qty = u32::try_from(draft.stock_qty).map_err(|_| {
            if draft.stock_qty < 0 {
                CoreError::invalid("stock quantity", "must not be negative")
            } else {
                CoreError::invalid("stock quantity", "is too large")
            }
        })?;
        ProductRecord::new(
            &draft.name,
            &draft.category,
            draft.cost_price,
            draft.markup_pct,
            stock_qty,
        )
    }
}

/// Computes `cost * (1 + markup / 100)`, returning `None` on overflow.
pub fn sell_price(cost_price: Decimal, markup_pct: Decimal) -> Option<Decimal> {
    let factor = Decimal::ONE.checked_add(markup_pct.checked_div(Decimal::ONE_HUNDRED)?)?;
    cost_price.checked_mul(factor)
}

/// Parses a non-negative decimal amount such as a cost or a markup.
///
/// Plain (`"12.5"`) and scientific (`"1.25e1"`) notation are accepted.
pub fn parse_amount(field: &str, text: &str) -> Result<Decimal, CoreError> {
    let trimmed = text.trim();
    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| CoreError::invalid(field, format!("'{trimmed}' is not a number")))?;

    if value < Decimal::ZERO {
        return Err(CoreError::invalid(field, "must not be negative"));
    }
    Ok(value)
}

/// Parses a non-negative whole stock quantity.
pub fn parse_quantity(field: &str, text: &str) -> Result<u32, CoreError> {
    let trimmed = text.trim();
    match trimmed.parse::<i64>() {
        Ok(n) if n < 0 => Err(CoreError::invalid(field, "must not be negative")),
        Ok(n) => u32::try_from(n).map_err(|_| CoreError::invalid(field, "is too large")),
        Err(_) => Err(CoreError::invalid(
            field,
            format!("'{trimmed}' is not a whole number"),
        )),
    }
}
