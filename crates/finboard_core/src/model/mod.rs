//! Domain records for the back-office screens.
//!
//! # Responsibility
//! - Define the record types each screen keeps in its store.
//! - Expose named, typed fields so one view pipeline serves every screen.
//!
//! # Invariants
//! - Every record has a key unique within its store.
//! - Soft deletion is a status change (employees); only tax forms are
//!   removed outright.

pub mod employee;
pub mod expense;
pub mod field;
pub mod payroll;
pub mod record;
pub mod salary;
pub mod tax;
pub mod validation;
