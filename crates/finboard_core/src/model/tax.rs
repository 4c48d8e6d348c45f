//! Tax compliance records: filing submissions, forms and calendar events.
//!
//! # Invariants
//! - A `TaxEvent` with status `Filed` is the only kind that counts toward
//!   filed totals; `filed_date` is set when it is marked filed.
//! - `TaxForm::modified_at` is never earlier than `created_at`.

use crate::model::field::FieldValue;
use crate::model::record::Record;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Accepted,
    Processing,
    RejectedError,
    Submitted,
}

impl SubmissionStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Accepted => "Accepted",
            Self::Processing => "Processing",
            Self::RejectedError => "Rejected/Error",
            Self::Submitted => "Submitted",
        }
    }
}

/// One filed return in the filing history.
///
/// Period, date and amount are kept as the free text the filing portal
/// reported; they are displayed and searched, never computed on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: u32,
    pub tax_name: String,
    pub filing_period: String,
    pub submission_date: String,
    pub amount: String,
    pub status: SubmissionStatus,
    pub transaction_id: Option<String>,
    pub is_paid: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionField {
    TaxName,
    TransactionId,
    FilingPeriod,
    Status,
}

impl Record for Submission {
    type Key = u32;
    type Field = SubmissionField;

    fn key(&self) -> &u32 {
        &self.id
    }

    fn field(&self, field: SubmissionField) -> FieldValue<'_> {
        match field {
            SubmissionField::TaxName => FieldValue::text(&self.tax_name),
            SubmissionField::TransactionId => {
                FieldValue::optional_text(self.transaction_id.as_deref())
            }
            SubmissionField::FilingPeriod => FieldValue::text(&self.filing_period),
            SubmissionField::Status => FieldValue::text(self.status.label()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxFormStatus {
    Draft,
    Ready,
    Filed,
    Archived,
}

impl TaxFormStatus {
    pub const ALL: [TaxFormStatus; 4] = [Self::Draft, Self::Ready, Self::Filed, Self::Archived];

    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Ready => "Ready",
            Self::Filed => "Filed",
            Self::Archived => "Archived",
        }
    }
}

/// One form template in the forms library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxForm {
    pub id: Uuid,
    pub form_name: String,
    pub jurisdiction: String,
    pub tax_year: i32,
    pub status: TaxFormStatus,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxFormField {
    FormName,
    Jurisdiction,
    TaxYear,
    Status,
    CreatedAt,
    ModifiedAt,
}

impl Record for TaxForm {
    type Key = Uuid;
    type Field = TaxFormField;

    fn key(&self) -> &Uuid {
        &self.id
    }

    fn field(&self, field: TaxFormField) -> FieldValue<'_> {
        match field {
            TaxFormField::FormName => FieldValue::text(&self.form_name),
            TaxFormField::Jurisdiction => FieldValue::text(&self.jurisdiction),
            TaxFormField::TaxYear => FieldValue::Integer(i64::from(self.tax_year)),
            TaxFormField::Status => FieldValue::text(self.status.label()),
            TaxFormField::CreatedAt => FieldValue::Timestamp(self.created_at),
            TaxFormField::ModifiedAt => FieldValue::Timestamp(self.modified_at),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxEventStatus {
    Upcoming,
    Overdue,
    Filed,
}

impl TaxEventStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Overdue => "Overdue",
            Self::Filed => "Filed",
        }
    }

    /// Still owed: upcoming or overdue.
    pub fn is_open(self) -> bool {
        self != Self::Filed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiabilityType {
    Payroll,
    Corporate,
    Expense,
}

impl LiabilityType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Payroll => "Payroll",
            Self::Corporate => "Corporate",
            Self::Expense => "Expense",
        }
    }
}

/// One deadline on the tax calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxEvent {
    pub id: u32,
    pub form_name: String,
    pub jurisdiction: String,
    pub due_date: NaiveDate,
    pub filed_date: Option<NaiveDate>,
    pub status: TaxEventStatus,
    pub liability_type: Option<LiabilityType>,
    /// Estimated liability; counted as owed only while not filed.
    pub amount: f64,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxEventField {
    FormName,
    Jurisdiction,
    DueDate,
    FiledDate,
    Status,
    LiabilityType,
    Amount,
}

impl Record for TaxEvent {
    type Key = u32;
    type Field = TaxEventField;

    fn key(&self) -> &u32 {
        &self.id
    }

    fn field(&self, field: TaxEventField) -> FieldValue<'_> {
        match field {
            TaxEventField::FormName => FieldValue::text(&self.form_name),
            TaxEventField::Jurisdiction => FieldValue::text(&self.jurisdiction),
            TaxEventField::DueDate => FieldValue::Date(self.due_date),
            TaxEventField::FiledDate => FieldValue::optional_date(self.filed_date),
            TaxEventField::Status => FieldValue::text(self.status.label()),
            TaxEventField::LiabilityType => {
                FieldValue::optional_text(self.liability_type.map(LiabilityType::label))
            }
            TaxEventField::Amount => FieldValue::Amount(self.amount),
        }
    }
}
