//! # Nova Core Types
//!
//! The shared vocabulary of the inventory workspace. Every other crate speaks
//! in terms of the types defined here.
//!
//! ## Architectural Principles
//!
//! - **Layer 0:** This crate has no knowledge of files, terminals or
//!   configuration. It only defines values and the rules that keep them valid.
//! - **Derived, never stored:** A product's sell price is always computed from
//!   its cost and markup via [`sell_price`]. No type in this crate carries a
//!   sell price field.
//!
//! ## Public API
//!
//! - `ProductDraft`: unvalidated user input for a new product.
//! - `ProductRecord`: a validated product (name, category, cost, markup, stock).
//! - `RawProduct`: a product exactly as read from disk, numeric fields still text.
//! - `InventoryRow`: what the record store holds; either priced or unreadable.
//! - `RecordId`: the stable identifier assigned to each stored row.
//! - `CoreError`: validation and calculation failures.

pub mod error;
pub mod product;
pub mod row;

// Re-export the core types to provide a clean public API.
pub use error::CoreError;
pub use product::{
    parse_amount, parse_quantity, sell_price, ProductDraft, ProductRecord, RecordId,
};
pub use row::{InventoryRow, RawProduct};
