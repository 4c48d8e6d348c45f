//! Payslip history for one selected employee.
//!
//! # Invariants
//! - Exactly one employee is selected; the default is employee 1.
//! - Year defaults to `"2025"`; month defaults to `"All"`.
//! - Free text matches the pay period or the plain net pay figure.

use crate::model::payroll::{Payslip, PayslipField};
use crate::service::list_screen::ListScreen;
use crate::store::record_store::RecordStore;
use crate::view::filter::{FilterSet, ALL};

pub const PAYSLIP_PAGE_SIZE: usize = 6;
pub const DEFAULT_PAYSLIP_EMPLOYEE: u32 = 1;
pub const DEFAULT_PAYSLIP_YEAR: &str = "2025";

/// Month tokens offered by the month selector, `"All"` first.
pub const MONTH_OPTIONS: [&str; 13] = [
    ALL, "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Selectable employee in the payslip screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeOption {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct PayslipHistory {
    screen: ListScreen<Payslip>,
    employees: Vec<EmployeeOption>,
}

impl PayslipHistory {
    pub fn new(store: RecordStore<Payslip>, employees: Vec<EmployeeOption>) -> Self {
        let filters = FilterSet::new([PayslipField::PayPeriod, PayslipField::NetPay])
            .with_category(PayslipField::EmployeeId)
            .with_period(PayslipField::PayPeriod);
        let mut screen = ListScreen::new(store, filters, PAYSLIP_PAGE_SIZE);
        screen.set_category(
            PayslipField::EmployeeId,
            DEFAULT_PAYSLIP_EMPLOYEE.to_string(),
        );
        screen.set_year(DEFAULT_PAYSLIP_YEAR);
        Self { screen, employees }
    }

    pub fn screen(&self) -> &ListScreen<Payslip> {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut ListScreen<Payslip> {
        &mut self.screen
    }

    pub fn employees(&self) -> &[EmployeeOption] {
        &self.employees
    }

    /// Currently selected employee id.
    pub fn selected_employee(&self) -> Option<u32> {
        self.screen
            .filters()
            .category(PayslipField::EmployeeId)
            .and_then(|value| value.trim().parse().ok())
    }

    pub fn select_employee(&mut self, id: u32) {
        self.screen
            .set_category(PayslipField::EmployeeId, id.to_string());
    }

    pub fn set_year(&mut self, year: impl Into<String>) {
        self.screen.set_year(year);
    }

    pub fn set_month(&mut self, month: impl Into<String>) {
        self.screen.set_month(month);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.screen.set_query(query);
    }

    /// Years present in pay periods, newest first.
    pub fn year_options(&self) -> Vec<String> {
        let mut years: Vec<String> = self
            .screen
            .store()
            .records()
            .iter()
            .filter_map(|payslip| period_year(&payslip.pay_period))
            .collect();
        years.sort_by(|left, right| right.cmp(left));
        years.dedup();
        years
    }
}

/// Trailing four-digit year of a period such as `"Mar 2025"`.
fn period_year(period: &str) -> Option<String> {
    period
        .split_whitespace()
        .rev()
        .find(|token| token.len() == 4 && token.chars().all(|ch| ch.is_ascii_digit()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::period_year;

    #[test]
    fn period_year_reads_trailing_token() {
        assert_eq!(period_year("Mar 2025").as_deref(), Some("2025"));
        assert_eq!(period_year("Quarterly"), None);
    }
}
