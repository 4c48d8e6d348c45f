//! Payslip and payroll-run records.

use crate::model::field::FieldValue;
use crate::model::record::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayslipStatus {
    Paid,
    Processing,
}

impl PayslipStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Processing => "Processing",
        }
    }
}

/// One issued payslip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    pub id: u32,
    /// Key of the employee this payslip belongs to.
    pub employee_id: u32,
    /// Month token followed by the year, e.g. `"Mar 2025"`.
    pub pay_period: String,
    pub payment_date: NaiveDate,
    pub net_pay: f64,
    pub status: PayslipStatus,
    pub document_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayslipField {
    EmployeeId,
    PayPeriod,
    PaymentDate,
    NetPay,
    Status,
}

impl Record for Payslip {
    type Key = u32;
    type Field = PayslipField;

    fn key(&self) -> &u32 {
        &self.id
    }

    fn field(&self, field: PayslipField) -> FieldValue<'_> {
        match field {
            PayslipField::EmployeeId => FieldValue::Integer(i64::from(self.employee_id)),
            PayslipField::PayPeriod => FieldValue::text(&self.pay_period),
            PayslipField::PaymentDate => FieldValue::Date(self.payment_date),
            PayslipField::NetPay => FieldValue::Amount(self.net_pay),
            PayslipField::Status => FieldValue::text(self.status.label()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Completed,
    Processing,
    Failed,
    Scheduled,
}

impl RunStatus {
    pub const ALL: [RunStatus; 4] = [
        Self::Completed,
        Self::Processing,
        Self::Failed,
        Self::Scheduled,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Processing => "Processing",
            Self::Failed => "Failed",
            Self::Scheduled => "Scheduled",
        }
    }
}

/// One payroll batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRun {
    pub id: u32,
    /// Human-facing run identifier, e.g. `PR-2024-001`.
    pub run_id: String,
    pub pay_period: String,
    pub process_date: NaiveDate,
    pub status: RunStatus,
    pub employee_count: u32,
    pub total_cost: f64,
    pub gross_pay: f64,
    pub deductions: f64,
    pub net_pay: f64,
    pub overtime_hours: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayrollRunField {
    RunId,
    PayPeriod,
    ProcessDate,
    Status,
    TotalCost,
}

impl Record for PayrollRun {
    type Key = u32;
    type Field = PayrollRunField;

    fn key(&self) -> &u32 {
        &self.id
    }

    fn field(&self, field: PayrollRunField) -> FieldValue<'_> {
        match field {
            PayrollRunField::RunId => FieldValue::text(&self.run_id),
            PayrollRunField::PayPeriod => FieldValue::text(&self.pay_period),
            PayrollRunField::ProcessDate => FieldValue::Date(self.process_date),
            PayrollRunField::Status => FieldValue::text(self.status.label()),
            PayrollRunField::TotalCost => FieldValue::Amount(self.total_cost),
        }
    }
}
