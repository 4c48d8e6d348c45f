//! Employee records managed by the employee directory.
//!
//! # Invariants
//! - `employee_code` is derived from `id` at creation and never changes.
//! - Termination is a status change, not a removal.

use crate::model::field::FieldValue;
use crate::model::record::Record;
use crate::model::salary::SalaryDetails;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    Active,
    OnLeave,
    Terminated,
}

impl EmployeeStatus {
    pub const ALL: [EmployeeStatus; 3] = [Self::Active, Self::OnLeave, Self::Terminated];

    /// Display label, also the value categorical filters compare against.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnLeave => "On Leave",
            Self::Terminated => "Terminated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    /// Human-facing code, `EMP-###`.
    pub employee_code: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub status: EmployeeStatus,
    /// Label of the salary structure currently assigned.
    pub salary_structure: String,
    pub start_date: NaiveDate,
    pub profile_image_url: Option<String>,
    pub salary: SalaryDetails,
}

impl Employee {
    pub fn is_terminated(&self) -> bool {
        self.status == EmployeeStatus::Terminated
    }
}

/// Formats the human-facing code for an employee key.
pub fn employee_code(id: u32) -> String {
    format!("EMP-{id:03}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeField {
    EmployeeCode,
    Name,
    Email,
    Role,
    Department,
    Status,
    SalaryStructure,
    StartDate,
    GrossPay,
}

impl Record for Employee {
    type Key = u32;
    type Field = EmployeeField;

    fn key(&self) -> &u32 {
        &self.id
    }

    fn field(&self, field: EmployeeField) -> FieldValue<'_> {
        match field {
            EmployeeField::EmployeeCode => FieldValue::text(&self.employee_code),
            EmployeeField::Name => FieldValue::text(&self.name),
            EmployeeField::Email => FieldValue::text(&self.email),
            EmployeeField::Role => FieldValue::text(&self.role),
            EmployeeField::Department => FieldValue::text(&self.department),
            EmployeeField::Status => FieldValue::text(self.status.label()),
            EmployeeField::SalaryStructure => FieldValue::text(&self.salary_structure),
            EmployeeField::StartDate => FieldValue::Date(self.start_date),
            EmployeeField::GrossPay => FieldValue::Amount(self.salary.breakdown().gross_pay),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::employee_code;

    #[test]
    fn employee_code_pads_to_three_digits() {
        assert_eq!(employee_code(9), "EMP-009");
        assert_eq!(employee_code(1234), "EMP-1234");
    }
}
