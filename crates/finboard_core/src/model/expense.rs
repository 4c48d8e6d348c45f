//! Expense claims shown on the expense dashboard.

use crate::model::field::FieldValue;
use crate::model::record::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Travel,
    Food,
    Software,
    OfficeSupplies,
}

impl ExpenseCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Travel => "Travel",
            Self::Food => "Food",
            Self::Software => "Software",
            Self::OfficeSupplies => "Office Supplies",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
}

impl ClaimStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseClaim {
    pub id: u32,
    pub date: NaiveDate,
    pub merchant: String,
    pub category: ExpenseCategory,
    pub amount: f64,
    pub status: ClaimStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpenseClaimField {
    Date,
    Merchant,
    Category,
    Amount,
    Status,
}

impl Record for ExpenseClaim {
    type Key = u32;
    type Field = ExpenseClaimField;

    fn key(&self) -> &u32 {
        &self.id
    }

    fn field(&self, field: ExpenseClaimField) -> FieldValue<'_> {
        match field {
            ExpenseClaimField::Date => FieldValue::Date(self.date),
            ExpenseClaimField::Merchant => FieldValue::text(&self.merchant),
            ExpenseClaimField::Category => FieldValue::text(self.category.label()),
            ExpenseClaimField::Amount => FieldValue::Amount(self.amount),
            ExpenseClaimField::Status => FieldValue::text(self.status.label()),
        }
    }
}
