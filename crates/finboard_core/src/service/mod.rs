//! Screen-level use-cases built on stores and the view pipeline.
//!
//! # Responsibility
//! - One service per screen, owning its store and view state.
//! - Shared add/edit form state machine in [`editor`].

pub mod editor;
pub mod employee_service;
pub mod expense_service;
pub mod filing_service;
pub mod list_screen;
pub mod payroll_service;
pub mod payslip_service;
pub mod salary;
pub mod tax_calendar_service;
pub mod tax_form_service;
