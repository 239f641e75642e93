//! # Nova Database Crate
//!
//! This crate is the inventory's "permanent archive": an in-memory, ordered
//! table of product rows mirrored to and from a flat JSON file.
//!
//! ## Architectural Principles
//!
//! - **Layer 3 Adapter:** This crate encapsulates everything file-specific. The
//!   rest of the application sees a `RecordStore` and never touches JSON.
//! - **Explicit sync:** Nothing is written until the user asks for it. `save`
//!   overwrites the whole file with the current rows.
//! - **Best-effort load:** A missing or corrupt file yields an empty store. The
//!   `LoadOutcome` says which of the two happened.
//!
//! ## Public API
//!
//! - `RecordStore`: The ordered row table with add/remove by stable id.
//! - `load`, `save`: File round-trip for a whole row list.
//! - `serialize`, `deserialize`: The same round-trip on byte buffers.
//! - `LoadOutcome`: Whether a load found rows, no file, or an unusable file.
//! - `StoreError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod file;
pub mod record_file;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use error::StoreError;
pub use file::{load, save, LoadOutcome};
pub use record_file::{deserialize, serialize};
pub use store::RecordStore;
