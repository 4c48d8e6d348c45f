//! Field-level validation errors for CRUD forms.
//!
//! # Invariants
//! - A form is valid iff its `ValidationErrors` is empty.
//! - Errors carry the form field name they belong to.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

// Same acceptance rules as the browser-side email validator the forms used.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("valid email regex")
});

/// Reason one form field was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldErrorKind {
    /// Field is empty or whitespace-only.
    Required,
    /// Field does not look like an email address.
    InvalidEmail,
    /// Numeric field is below its minimum.
    BelowMinimum { minimum: f64, actual: f64 },
    /// Numeric field is NaN or infinite.
    NotFinite,
}

/// One rejected form field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub kind: FieldErrorKind,
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            FieldErrorKind::Required => write!(f, "{} is required", self.field),
            FieldErrorKind::InvalidEmail => {
                write!(f, "{} must be a valid email address", self.field)
            }
            FieldErrorKind::BelowMinimum { minimum, actual } => {
                write!(f, "{} must be >= {minimum}, got {actual}", self.field)
            }
            FieldErrorKind::NotFinite => write!(f, "{} must be a finite number", self.field),
        }
    }
}

/// Collected field errors of one form submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, kind: FieldErrorKind) {
        self.errors.push(FieldError { field, kind });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Errors reported for one field, in the order they were found.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |error| error.field == field)
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.for_field(field).next().is_some()
    }

    /// Rejects blank text.
    pub fn require_text(&mut self, field: &'static str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, FieldErrorKind::Required);
        }
    }

    /// Rejects blank text and text that is not an email address.
    pub fn require_email(&mut self, field: &'static str, value: &str) {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.push(field, FieldErrorKind::Required);
        } else if !EMAIL_RE.is_match(trimmed) {
            self.push(field, FieldErrorKind::InvalidEmail);
        }
    }

    /// Rejects non-finite numbers and numbers below `minimum`.
    pub fn require_at_least(&mut self, field: &'static str, value: f64, minimum: f64) {
        if !value.is_finite() {
            self.push(field, FieldErrorKind::NotFinite);
        } else if value < minimum {
            self.push(
                field,
                FieldErrorKind::BelowMinimum {
                    minimum,
                    actual: value,
                },
            );
        }
    }

    /// Rejects a missing required value.
    pub fn require_some<T>(&mut self, field: &'static str, value: &Option<T>) {
        if value.is_none() {
            self.push(field, FieldErrorKind::Required);
        }
    }

    /// `Ok(())` when no errors were collected.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        write!(f, "invalid form: {}", messages.join("; "))
    }
}

impl Error for ValidationErrors {}
