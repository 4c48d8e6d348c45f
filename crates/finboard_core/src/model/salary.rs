//! Salary structure attached to every employee.
//!
//! # Invariants
//! - `gross = base + allowances`, `net = gross - deductions`.
//! - Derived figures are computed from the line items on every call, never cached.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Named salary preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryTemplate {
    TechStandard,
    SalesCommission,
    /// User-defined figures; never overwritten by a preset.
    Custom,
}

impl SalaryTemplate {
    pub const ALL: [SalaryTemplate; 3] = [Self::TechStandard, Self::SalesCommission, Self::Custom];

    pub fn label(self) -> &'static str {
        match self {
            Self::TechStandard => "Tech Standard",
            Self::SalesCommission => "Sales Commission",
            Self::Custom => "Custom",
        }
    }

    /// Preset figures for this template, `None` for [`SalaryTemplate::Custom`].
    pub fn preset(self) -> Option<SalaryPreset> {
        match self {
            Self::TechStandard => Some(SalaryPreset {
                base_salary: 90_000.0,
                allowances: Allowances {
                    housing: 15_000.0,
                    transport: 5_000.0,
                    bonus: 10_000.0,
                },
                deductions: Deductions {
                    federal_tax: 12_000.0,
                    state_tax: 4_000.0,
                    health_insurance: 6_000.0,
                    other: 1_000.0,
                },
            }),
            Self::SalesCommission => Some(SalaryPreset {
                base_salary: 60_000.0,
                allowances: Allowances {
                    housing: 10_000.0,
                    transport: 5_000.0,
                    bonus: 25_000.0,
                },
                deductions: Deductions {
                    federal_tax: 8_000.0,
                    state_tax: 3_000.0,
                    health_insurance: 5_000.0,
                    other: 500.0,
                },
            }),
            Self::Custom => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentFrequency {
    Monthly,
    BiWeekly,
}

impl PaymentFrequency {
    pub fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::BiWeekly => "Bi-weekly",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Allowances {
    pub housing: f64,
    pub transport: f64,
    pub bonus: f64,
}

impl Allowances {
    pub fn total(&self) -> f64 {
        self.housing + self.transport + self.bonus
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Deductions {
    pub federal_tax: f64,
    pub state_tax: f64,
    pub health_insurance: f64,
    pub other: f64,
}

impl Deductions {
    pub fn total(&self) -> f64 {
        self.federal_tax + self.state_tax + self.health_insurance + self.other
    }
}

/// Figures a template writes into the salary form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryPreset {
    pub base_salary: f64,
    pub allowances: Allowances,
    pub deductions: Deductions,
}

/// The four figures shown next to a salary structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryBreakdown {
    pub base_salary: f64,
    pub gross_pay: f64,
    pub total_deductions: f64,
    pub net_pay: f64,
}

impl SalaryBreakdown {
    pub fn compute(base_salary: f64, allowances: &Allowances, deductions: &Deductions) -> Self {
        let gross_pay = base_salary + allowances.total();
        let total_deductions = deductions.total();
        Self {
            base_salary,
            gross_pay,
            total_deductions,
            net_pay: gross_pay - total_deductions,
        }
    }
}

/// Salary structure persisted on an employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryDetails {
    pub template: SalaryTemplate,
    pub base_salary: f64,
    pub payment_frequency: PaymentFrequency,
    pub effective_date: NaiveDate,
    pub allowances: Allowances,
    pub deductions: Deductions,
}

impl SalaryDetails {
    /// Zeroed custom structure given to newly added employees.
    pub fn unassigned(effective_date: NaiveDate) -> Self {
        Self {
            template: SalaryTemplate::Custom,
            base_salary: 0.0,
            payment_frequency: PaymentFrequency::Monthly,
            effective_date,
            allowances: Allowances::default(),
            deductions: Deductions::default(),
        }
    }

    pub fn breakdown(&self) -> SalaryBreakdown {
        SalaryBreakdown::compute(self.base_salary, &self.allowances, &self.deductions)
    }
}
