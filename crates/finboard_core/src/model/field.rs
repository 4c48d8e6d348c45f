//! Typed field values exposed by records to the view pipeline.
//!
//! # Responsibility
//! - Give filters one textual rendering per field.
//! - Give sort rules one total order per field.
//!
//! # Invariants
//! - `to_text` is deterministic for the same value.
//! - `compare` is a total order, including across variants.

use chrono::{DateTime, NaiveDate, Utc};
use std::borrow::Cow;
use std::cmp::Ordering;

/// Borrowed view of one record field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// Field is unset for this record (for example a missing transaction id).
    Empty,
    Text(Cow<'a, str>),
    Integer(i64),
    Amount(f64),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
}

impl<'a> FieldValue<'a> {
    /// Shorthand for borrowed text fields.
    pub fn text(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }

    /// Maps an optional text field, treating `None` as [`FieldValue::Empty`].
    pub fn optional_text(value: Option<&'a str>) -> Self {
        value.map_or(Self::Empty, Self::text)
    }

    /// Maps an optional date field, treating `None` as [`FieldValue::Empty`].
    pub fn optional_date(value: Option<NaiveDate>) -> Self {
        value.map_or(Self::Empty, Self::Date)
    }

    /// Textual rendering used by substring, equality and period filters.
    ///
    /// Amounts render without a trailing `.0` for whole values, so `75500.0`
    /// matches the query `"75500"`.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Empty => Cow::Borrowed(""),
            Self::Text(value) => Cow::Borrowed(value.as_ref()),
            Self::Integer(value) => Cow::Owned(value.to_string()),
            Self::Amount(value) => Cow::Owned(format!("{value}")),
            Self::Date(value) => Cow::Owned(value.format("%Y-%m-%d").to_string()),
            Self::Timestamp(value) => Cow::Owned(value.to_rfc3339()),
        }
    }

    /// Whether this field contains `needle`, ignoring case.
    ///
    /// `needle` must already be lowercased.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        self.to_text().to_lowercase().contains(needle)
    }

    /// Total order used by sort rules.
    ///
    /// Values of different variants order by variant rank, with `Empty` first.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (Self::Empty, FieldValue::Empty) => Ordering::Equal,
            (Self::Text(left), FieldValue::Text(right)) => left.as_ref().cmp(right.as_ref()),
            (Self::Integer(left), FieldValue::Integer(right)) => left.cmp(right),
            (Self::Amount(left), FieldValue::Amount(right)) => left.total_cmp(right),
            (Self::Date(left), FieldValue::Date(right)) => left.cmp(right),
            (Self::Timestamp(left), FieldValue::Timestamp(right)) => left.cmp(right),
            (left, right) => left.rank().cmp(&right.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Text(_) => 1,
            Self::Integer(_) => 2,
            Self::Amount(_) => 3,
            Self::Date(_) => 4,
            Self::Timestamp(_) => 5,
        }
    }
}
