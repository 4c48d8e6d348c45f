//! Derived view pipeline shared by every list screen.
//!
//! # Responsibility
//! - Turn a record slice plus live filter/sort/page parameters into the
//!   page to display.
//! - Reduce record subsets to KPI scalars.
//!
//! # Invariants
//! - Every stage is a pure function of its inputs; nothing here mutates a
//!   store.
//! - Flow is `filter -> sort -> paginate`, with aggregation applied to the
//!   filtered (or explicitly chosen) subset.

pub mod aggregate;
pub mod calendar;
pub mod filter;
pub mod list_view;
pub mod paginate;
pub mod sort;
