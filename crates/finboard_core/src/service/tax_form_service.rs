//! Tax forms library: filterable form catalogue with add/edit/delete.
//!
//! # Responsibility
//! - Search by form name; filter by jurisdiction, tax year and status.
//! - Order by last modification, newest first.
//! - CRUD through the shared editor; deletion is a hard delete.
//!
//! # Invariants
//! - Saving an edit stamps `modified_at`; `created_at` never changes.
//! - Option lists are derived from the current store contents.

use crate::model::tax::{TaxForm, TaxFormField, TaxFormStatus};
use crate::model::validation::ValidationErrors;
use crate::service::editor::{Editor, RecordForm, SubmitOutcome};
use crate::service::list_screen::ListScreen;
use crate::store::record_store::{RecordStore, StoreResult};
use crate::view::filter::{FilterSet, ALL};
use crate::view::sort::SortRule;
use chrono::{DateTime, Datelike, Utc};
use log::{info, warn};
use uuid::Uuid;

pub const TAX_FORM_PAGE_SIZE: usize = 12;
pub const MIN_TAX_YEAR: i32 = 1900;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    #[default]
    List,
    Card,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaxFormForm {
    pub form_name: String,
    pub jurisdiction: String,
    pub tax_year: i32,
    pub status: TaxFormStatus,
    /// Timestamp written to `created_at`/`modified_at` on save.
    pub saved_at: DateTime<Utc>,
}

impl TaxFormForm {
    /// Empty add form for the current year, in draft.
    pub fn blank(now: DateTime<Utc>) -> Self {
        Self {
            form_name: String::new(),
            jurisdiction: String::new(),
            tax_year: now.year(),
            status: TaxFormStatus::Draft,
            saved_at: now,
        }
    }
}

impl RecordForm<TaxForm> for TaxFormForm {
    fn from_record(record: &TaxForm) -> Self {
        Self {
            form_name: record.form_name.clone(),
            jurisdiction: record.jurisdiction.clone(),
            tax_year: record.tax_year,
            status: record.status,
            saved_at: record.modified_at,
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_text("form_name", &self.form_name);
        errors.require_text("jurisdiction", &self.jurisdiction);
        errors.require_at_least("tax_year", f64::from(self.tax_year), f64::from(MIN_TAX_YEAR));
        errors.into_result()
    }

    fn build(&self, key: Uuid) -> TaxForm {
        TaxForm {
            id: key,
            form_name: self.form_name.trim().to_string(),
            jurisdiction: self.jurisdiction.trim().to_string(),
            tax_year: self.tax_year,
            status: self.status,
            created_at: self.saved_at,
            modified_at: self.saved_at,
        }
    }

    fn merge_into(&self, existing: &TaxForm) -> TaxForm {
        TaxForm {
            form_name: self.form_name.trim().to_string(),
            jurisdiction: self.jurisdiction.trim().to_string(),
            tax_year: self.tax_year,
            status: self.status,
            modified_at: self.saved_at.max(existing.created_at),
            ..existing.clone()
        }
    }
}

#[derive(Debug, Clone)]
pub struct TaxFormsLibrary {
    screen: ListScreen<TaxForm>,
    editor: Editor<TaxForm, TaxFormForm>,
    layout: LayoutMode,
}

impl TaxFormsLibrary {
    pub fn new(store: RecordStore<TaxForm>) -> Self {
        let filters = FilterSet::new([TaxFormField::FormName])
            .with_category(TaxFormField::Jurisdiction)
            .with_category(TaxFormField::TaxYear)
            .with_category(TaxFormField::Status);
        let screen = ListScreen::new(store, filters, TAX_FORM_PAGE_SIZE)
            .with_sort(SortRule::descending(TaxFormField::ModifiedAt));
        Self {
            screen,
            editor: Editor::new(),
            layout: LayoutMode::default(),
        }
    }

    pub fn screen(&self) -> &ListScreen<TaxForm> {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut ListScreen<TaxForm> {
        &mut self.screen
    }

    pub fn editor(&self) -> &Editor<TaxForm, TaxFormForm> {
        &self.editor
    }

    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    pub fn set_layout(&mut self, layout: LayoutMode) {
        self.layout = layout;
    }

    pub fn set_jurisdiction(&mut self, value: impl Into<String>) {
        self.screen.set_category(TaxFormField::Jurisdiction, value);
    }

    pub fn set_year(&mut self, value: impl Into<String>) {
        self.screen.set_category(TaxFormField::TaxYear, value);
    }

    pub fn set_status(&mut self, value: impl Into<String>) {
        self.screen.set_category(TaxFormField::Status, value);
    }

    /// Forms matching the filters, newest modification first.
    pub fn forms(&self) -> Vec<&TaxForm> {
        self.screen.matching()
    }

    pub fn open_add(&mut self, now: DateTime<Utc>) {
        self.editor.open_add(TaxFormForm::blank(now));
    }

    pub fn open_edit(&mut self, id: Uuid) -> bool {
        self.editor.open_edit(self.screen.store(), &id)
    }

    pub fn form_mut(&mut self) -> Option<&mut TaxFormForm> {
        self.editor.form_mut()
    }

    pub fn cancel(&mut self) {
        self.editor.cancel();
    }

    /// Submits the open form, stamping it with `now`.
    ///
    /// # Errors
    /// - Propagates store invariant violations.
    pub fn save(&mut self, now: DateTime<Utc>) -> StoreResult<SubmitOutcome<Uuid>> {
        if let Some(form) = self.editor.form_mut() {
            form.saved_at = now;
        }
        let editor = &mut self.editor;
        self.screen.edit_store(|store| editor.submit(store))
    }

    /// Removes a form. Returns `false` when the id is unknown.
    pub fn delete(&mut self, id: Uuid) -> bool {
        match self.screen.edit_store(|store| store.remove(&id)) {
            Ok(removed) => {
                info!(
                    "event=tax_form_delete module=tax_forms status=ok id={id} name={}",
                    removed.form_name
                );
                true
            }
            Err(err) => {
                warn!("event=tax_form_delete module=tax_forms status=noop id={id} err={err}");
                false
            }
        }
    }

    /// `"All"` followed by every jurisdiction in ascending order.
    pub fn jurisdiction_options(&self) -> Vec<String> {
        let mut values: Vec<String> = self
            .screen
            .store()
            .records()
            .iter()
            .map(|form| form.jurisdiction.clone())
            .collect();
        values.sort();
        values.dedup();
        with_all(values)
    }

    /// `"All"` followed by every tax year, newest first.
    pub fn year_options(&self) -> Vec<String> {
        let mut years: Vec<i32> = self
            .screen
            .store()
            .records()
            .iter()
            .map(|form| form.tax_year)
            .collect();
        years.sort_by(|left, right| right.cmp(left));
        years.dedup();
        with_all(years.into_iter().map(|year| year.to_string()).collect())
    }

    /// `"All"` followed by every status label.
    pub fn status_options() -> Vec<String> {
        with_all(
            TaxFormStatus::ALL
                .iter()
                .map(|status| status.label().to_string())
                .collect(),
        )
    }
}

fn with_all(values: Vec<String>) -> Vec<String> {
    let mut options = Vec::with_capacity(values.len() + 1);
    options.push(ALL.to_string());
    options.extend(values);
    options
}
