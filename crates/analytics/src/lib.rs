//! # Nova Analytics Engine
//!
//! This crate turns the rows of the inventory into a priced view: a sell price
//! for every readable row and the three aggregate totals shown on the stat
//! cards.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files
//!   or terminals. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `AnalyticsEngine` takes the current rows as
//!   input and produces an `InventoryReport`. The shell reruns it after every
//!   add, delete, load and save.
//! - **Skip, don't fail:** A row that cannot be priced, or that would push a
//!   total past `Decimal::MAX`, is reported as `RowEvaluation::Skipped` and
//!   left out of the totals. Calculation never fails.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: The main struct that contains the calculation logic.
//! - `InventoryReport`: Per-row evaluations plus investment, revenue and profit.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use report::{InventoryReport, RowEvaluation, SkipReason};
