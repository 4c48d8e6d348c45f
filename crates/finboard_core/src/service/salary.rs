//! Salary structure form.
//!
//! # Responsibility
//! - Hold editable salary figures and apply template presets.
//! - Report gross/deductions/net from the current figures.
//!
//! # Invariants
//! - Selecting `Custom` never overwrites figures.
//! - The breakdown is recomputed from the form on every call.

use crate::model::salary::{
    Allowances, Deductions, PaymentFrequency, SalaryBreakdown, SalaryDetails, SalaryTemplate,
};
use crate::model::validation::ValidationErrors;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct SalaryForm {
    pub template: SalaryTemplate,
    pub base_salary: f64,
    pub payment_frequency: PaymentFrequency,
    pub effective_date: Option<NaiveDate>,
    pub allowances: Allowances,
    pub deductions: Deductions,
}

impl SalaryForm {
    pub fn from_details(details: &SalaryDetails) -> Self {
        Self {
            template: details.template,
            base_salary: details.base_salary,
            payment_frequency: details.payment_frequency,
            effective_date: Some(details.effective_date),
            allowances: details.allowances,
            deductions: details.deductions,
        }
    }

    /// Switches template, copying its preset figures when it has any.
    pub fn select_template(&mut self, template: SalaryTemplate) {
        self.template = template;
        if let Some(preset) = template.preset() {
            self.base_salary = preset.base_salary;
            self.allowances = preset.allowances;
            self.deductions = preset.deductions;
        }
    }

    pub fn breakdown(&self) -> SalaryBreakdown {
        SalaryBreakdown::compute(self.base_salary, &self.allowances, &self.deductions)
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_some("effective_date", &self.effective_date);
        errors.require_at_least("base_salary", self.base_salary, 0.0);
        errors.require_at_least("housing", self.allowances.housing, 0.0);
        errors.require_at_least("transport", self.allowances.transport, 0.0);
        errors.require_at_least("bonus", self.allowances.bonus, 0.0);
        errors.require_at_least("federal_tax", self.deductions.federal_tax, 0.0);
        errors.require_at_least("state_tax", self.deductions.state_tax, 0.0);
        errors.require_at_least("health_insurance", self.deductions.health_insurance, 0.0);
        errors.require_at_least("other", self.deductions.other, 0.0);
        errors.into_result()
    }

    /// Validated salary details ready to store on an employee.
    pub fn to_details(&self) -> Result<SalaryDetails, ValidationErrors> {
        self.validate()?;
        let mut errors = ValidationErrors::new();
        let Some(effective_date) = self.effective_date else {
            errors.require_some("effective_date", &self.effective_date);
            return Err(errors);
        };
        Ok(SalaryDetails {
            template: self.template,
            base_salary: self.base_salary,
            payment_frequency: self.payment_frequency,
            effective_date,
            allowances: self.allowances,
            deductions: self.deductions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::SalaryForm;
    use crate::model::salary::{SalaryDetails, SalaryTemplate};
    use chrono::NaiveDate;

    fn blank_form() -> SalaryForm {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        SalaryForm::from_details(&SalaryDetails::unassigned(date))
    }

    #[test]
    fn tech_standard_preset_breakdown() {
        let mut form = blank_form();
        form.select_template(SalaryTemplate::TechStandard);
        let breakdown = form.breakdown();
        assert_eq!(breakdown.gross_pay, 120_000.0);
        assert_eq!(breakdown.total_deductions, 23_000.0);
        assert_eq!(breakdown.net_pay, 97_000.0);
    }

    #[test]
    fn custom_template_keeps_current_figures() {
        let mut form = blank_form();
        form.select_template(SalaryTemplate::SalesCommission);
        form.base_salary = 61_500.0;
        form.select_template(SalaryTemplate::Custom);
        assert_eq!(form.template, SalaryTemplate::Custom);
        assert_eq!(form.base_salary, 61_500.0);
        assert_eq!(form.allowances.bonus, 25_000.0);
    }

    #[test]
    fn breakdown_tracks_edits_immediately() {
        let mut form = blank_form();
        form.select_template(SalaryTemplate::TechStandard);
        form.allowances.bonus = 0.0;
        assert_eq!(form.breakdown().gross_pay, 110_000.0);
    }

    #[test]
    fn missing_date_and_negative_amount_are_rejected() {
        let mut form = blank_form();
        form.effective_date = None;
        form.deductions.other = -5.0;
        let errors = form.to_details().unwrap_err();
        assert!(errors.has_field("effective_date"));
        assert!(errors.has_field("other"));
    }
}
