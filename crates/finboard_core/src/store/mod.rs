//! Screen-owned record storage.
//!
//! # Responsibility
//! - Hold each screen's records in memory for the screen's lifetime.
//! - Report semantic errors (`NotFound`, `DuplicateKey`) to callers.
//!
//! # Invariants
//! - Mutations replace the whole collection; no partial writes are visible.

pub mod record_store;
