//! Employee directory use-cases.
//!
//! # Responsibility
//! - Searchable, paginated employee list.
//! - Add/edit form, soft termination and salary assignment.
//! - Headcount and payroll-cost KPIs.
//!
//! # Invariants
//! - Termination only changes status; the record stays in the store.
//! - Editing keeps code, start date and salary details of the record.
//! - Payroll cost ignores terminated employees.

use crate::model::employee::{employee_code, Employee, EmployeeField, EmployeeStatus};
use crate::model::record::Record;
use crate::model::salary::SalaryDetails;
use crate::model::validation::ValidationErrors;
use crate::service::editor::{Editor, RecordForm, SubmitOutcome};
use crate::service::list_screen::ListScreen;
use crate::service::salary::SalaryForm;
use crate::store::record_store::{RecordStore, StoreError, StoreResult};
use crate::view::aggregate::{count_where, sum_by};
use crate::view::filter::FilterSet;
use chrono::NaiveDate;
use log::{info, warn};

pub const EMPLOYEE_PAGE_SIZE: usize = 10;

/// Fields the add/edit employee form owns.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeForm {
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
    pub status: EmployeeStatus,
    pub salary_structure: String,
    /// Start date given to a newly added employee.
    pub start_date: NaiveDate,
}

impl EmployeeForm {
    /// Empty add form dated `today`.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: String::new(),
            department: String::new(),
            status: EmployeeStatus::Active,
            salary_structure: "Tech Standard".to_string(),
            start_date: today,
        }
    }
}

impl RecordForm<Employee> for EmployeeForm {
    fn from_record(record: &Employee) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            role: record.role.clone(),
            department: record.department.clone(),
            status: record.status,
            salary_structure: record.salary_structure.clone(),
            start_date: record.start_date,
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_text("name", &self.name);
        errors.require_email("email", &self.email);
        errors.require_text("role", &self.role);
        errors.require_text("department", &self.department);
        errors.require_text("salary_structure", &self.salary_structure);
        errors.into_result()
    }

    fn build(&self, key: u32) -> Employee {
        Employee {
            id: key,
            employee_code: employee_code(key),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role.trim().to_string(),
            department: self.department.trim().to_string(),
            status: self.status,
            salary_structure: self.salary_structure.clone(),
            start_date: self.start_date,
            profile_image_url: Some(format!("https://picsum.photos/id/10{key}/100/100")),
            salary: SalaryDetails::unassigned(self.start_date),
        }
    }

    fn merge_into(&self, existing: &Employee) -> Employee {
        Employee {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role.trim().to_string(),
            department: self.department.trim().to_string(),
            status: self.status,
            salary_structure: self.salary_structure.clone(),
            ..existing.clone()
        }
    }
}

/// Headline figures above the employee table.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeKpis {
    pub total: usize,
    pub active: usize,
    pub on_leave: usize,
    pub terminated: usize,
    /// Annual gross pay of everyone not terminated.
    pub payroll_cost: f64,
}

#[derive(Debug, Clone)]
pub struct EmployeeDirectory {
    screen: ListScreen<Employee>,
    editor: Editor<Employee, EmployeeForm>,
}

impl EmployeeDirectory {
    pub fn new(store: RecordStore<Employee>) -> Self {
        let filters = FilterSet::new([
            EmployeeField::Name,
            EmployeeField::Email,
            EmployeeField::EmployeeCode,
        ]);
        Self {
            screen: ListScreen::new(store, filters, EMPLOYEE_PAGE_SIZE),
            editor: Editor::new(),
        }
    }

    pub fn screen(&self) -> &ListScreen<Employee> {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut ListScreen<Employee> {
        &mut self.screen
    }

    pub fn editor(&self) -> &Editor<Employee, EmployeeForm> {
        &self.editor
    }

    pub fn get(&self, id: u32) -> Option<&Employee> {
        self.screen.store().get(&id)
    }

    pub fn open_add(&mut self, today: NaiveDate) {
        self.editor.open_add(EmployeeForm::blank(today));
    }

    pub fn open_edit(&mut self, id: u32) -> bool {
        self.editor.open_edit(self.screen.store(), &id)
    }

    pub fn form_mut(&mut self) -> Option<&mut EmployeeForm> {
        self.editor.form_mut()
    }

    pub fn cancel(&mut self) {
        self.editor.cancel();
    }

    /// Submits the open form.
    ///
    /// # Errors
    /// - Propagates store invariant violations.
    pub fn save(&mut self) -> StoreResult<SubmitOutcome<u32>> {
        let editor = &mut self.editor;
        self.screen.edit_store(|store| editor.submit(store))
    }

    /// Marks the employee terminated. Returns `false` when the id is unknown.
    pub fn terminate(&mut self, id: u32) -> bool {
        let result = self.screen.edit_store(|store| {
            store.update(&id, |employee| Employee {
                status: EmployeeStatus::Terminated,
                ..employee.clone()
            })
        });
        match result {
            Ok(()) => {
                info!("event=employee_terminate module=employee status=ok id={id}");
                true
            }
            Err(err) => {
                warn!("event=employee_terminate module=employee status=noop id={id} err={err}");
                false
            }
        }
    }

    /// Salary form pre-filled from the employee's current structure.
    pub fn salary_form(&self, id: u32) -> Option<SalaryForm> {
        self.get(id)
            .map(|employee| SalaryForm::from_details(&employee.salary))
    }

    /// Stores validated salary details on one employee.
    ///
    /// Returns `Ok(false)` when the id is unknown.
    ///
    /// # Errors
    /// - Returns field errors when the salary form is invalid.
    pub fn assign_salary(&mut self, id: u32, form: &SalaryForm) -> Result<bool, ValidationErrors> {
        let details = form.to_details()?;
        let label = details.template.label().to_string();
        let result = self.screen.edit_store(|store| {
            store.update(&id, |employee| Employee {
                salary_structure: label,
                salary: details,
                ..employee.clone()
            })
        });
        match result {
            Ok(()) => {
                info!("event=salary_assign module=employee status=ok id={id}");
                Ok(true)
            }
            Err(StoreError::NotFound(_)) => {
                warn!("event=salary_assign module=employee status=noop reason=not_found id={id}");
                Ok(false)
            }
            Err(err) => {
                warn!("event=salary_assign module=employee status=error id={id} err={err}");
                Ok(false)
            }
        }
    }

    pub fn kpis(&self) -> EmployeeKpis {
        let records = self.screen.store().records();
        let by_status = |status: EmployeeStatus| {
            count_where(records.iter(), |employee| employee.status == status)
        };
        EmployeeKpis {
            total: records.len(),
            active: by_status(EmployeeStatus::Active),
            on_leave: by_status(EmployeeStatus::OnLeave),
            terminated: by_status(EmployeeStatus::Terminated),
            payroll_cost: sum_by(
                records.iter().filter(|employee| !employee.is_terminated()),
                |employee| employee.salary.breakdown().gross_pay,
            ),
        }
    }

    /// Headcount per department in first-seen order, terminated excluded.
    pub fn headcount_by_department(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for employee in self.screen.store().records() {
            if employee.is_terminated() {
                continue;
            }
            match counts
                .iter_mut()
                .find(|(department, _)| *department == employee.department)
            {
                Some((_, count)) => *count += 1,
                None => counts.push((employee.department.clone(), 1)),
            }
        }
        counts
    }

    /// Ids on the current page, in display order.
    pub fn page_ids(&self) -> Vec<u32> {
        self.screen
            .page()
            .items
            .iter()
            .map(|employee| *employee.key())
            .collect()
    }
}
