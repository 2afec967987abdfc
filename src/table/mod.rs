//! Type-compatibility lookup table.
//!
//! A square matrix with one row and column per Type category, indexed by
//! `type_id`. Built once at startup and shared read-only (wrap it in an
//! `Arc` to hand it to several scorers or threads).

mod types;

pub use types::CompatibilityTable;
