//! Tendency tag catalog and selection reconciliation.
//!
//! This module maps the legacy free-form "tendency" preference signal onto a
//! structured board/topic selection and serializes user edits back out for
//! persistence. All operations are pure and total: malformed input degrades
//! to a best-effort fallback instead of propagating errors.

pub mod catalog;
pub mod repository;
pub mod selection;
pub mod tendency;

pub use catalog::{TagCatalog, display_name};
pub use repository::{TagCatalogRepository, TendencyRepository};
pub use selection::{SelectionState, TendencyPayload, TendencySelection};
pub use tendency::{TendencyTokens, tokenize};
