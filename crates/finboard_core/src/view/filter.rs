//! Filter predicate set: free-text, categorical and period rules.
//!
//! # Invariants
//! - Rules combine by logical AND; an unset rule matches every record.
//! - The sentinel `"All"` (or an empty value) disables a categorical or
//!   period rule.
//! - `matches` is pure and does not look at other records.

use crate::model::record::Record;

/// Sentinel option value that disables a categorical or period rule.
pub const ALL: &str = "All";

/// Whether a select-style filter value constrains anything.
pub fn is_active(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed != ALL
}

/// Exact-equality rule against one field's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter<F> {
    pub field: F,
    pub value: String,
}

impl<F: Copy> CategoryFilter<F> {
    fn matches<R: Record<Field = F>>(&self, record: &R) -> bool {
        !is_active(&self.value) || record.field(self.field).to_text() == self.value.trim()
    }
}

/// Year/month rule against one period-like text field.
///
/// The year matches when the field contains it; the month matches when
/// the field starts with the month token (`"Mar"` matches `"Mar 2025"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodFilter<F> {
    pub field: F,
    pub year: String,
    pub month: String,
}

impl<F: Copy> PeriodFilter<F> {
    pub fn new(field: F) -> Self {
        Self {
            field,
            year: ALL.to_string(),
            month: ALL.to_string(),
        }
    }

    fn matches<R: Record<Field = F>>(&self, record: &R) -> bool {
        let value = record.field(self.field);
        let text = value.to_text();
        let year_ok = !is_active(&self.year) || text.contains(self.year.trim());
        let month_ok = !is_active(&self.month) || text.starts_with(self.month.trim());
        year_ok && month_ok
    }
}

/// Active search/category/period constraints for one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet<F> {
    search_fields: Vec<F>,
    query: String,
    needle: String,
    categories: Vec<CategoryFilter<F>>,
    period: Option<PeriodFilter<F>>,
}

impl<F: Copy + Eq> FilterSet<F> {
    /// Creates a filter set whose free-text query searches `search_fields`.
    pub fn new(search_fields: impl IntoIterator<Item = F>) -> Self {
        Self {
            search_fields: search_fields.into_iter().collect(),
            query: String::new(),
            needle: String::new(),
            categories: Vec::new(),
            period: None,
        }
    }

    /// Declares a categorical rule on `field`, initially set to `"All"`.
    pub fn with_category(mut self, field: F) -> Self {
        self.set_category(field, ALL);
        self
    }

    /// Declares a period rule on `field`, initially `"All"`/`"All"`.
    pub fn with_period(mut self, field: F) -> Self {
        self.period = Some(PeriodFilter::new(field));
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn categories(&self) -> &[CategoryFilter<F>] {
        &self.categories
    }

    pub fn period(&self) -> Option<&PeriodFilter<F>> {
        self.period.as_ref()
    }

    /// Current value of the categorical rule on `field`, if declared.
    pub fn category(&self, field: F) -> Option<&str> {
        self.categories
            .iter()
            .find(|filter| filter.field == field)
            .map(|filter| filter.value.as_str())
    }

    /// Replaces the free-text query. Matching ignores case and surrounding
    /// whitespace.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.needle = self.query.trim().to_lowercase();
    }

    /// Sets the categorical rule on `field`, declaring it when missing.
    pub fn set_category(&mut self, field: F, value: impl Into<String>) {
        let value = value.into();
        match self.categories.iter_mut().find(|filter| filter.field == field) {
            Some(filter) => filter.value = value,
            None => self.categories.push(CategoryFilter { field, value }),
        }
    }

    /// Sets the period year. Returns `false` when no period rule is declared.
    pub fn set_year(&mut self, year: impl Into<String>) -> bool {
        match self.period.as_mut() {
            Some(period) => {
                period.year = year.into();
                true
            }
            None => false,
        }
    }

    /// Sets the period month token. Returns `false` when no period rule is declared.
    pub fn set_month(&mut self, month: impl Into<String>) -> bool {
        match self.period.as_mut() {
            Some(period) => {
                period.month = month.into();
                true
            }
            None => false,
        }
    }

    /// Resets every rule to its match-all state, keeping declarations.
    pub fn clear(&mut self) {
        self.set_query("");
        for filter in &mut self.categories {
            filter.value = ALL.to_string();
        }
        if let Some(period) = self.period.as_mut() {
            period.year = ALL.to_string();
            period.month = ALL.to_string();
        }
    }

    /// True when no rule constrains anything.
    pub fn is_unconstrained(&self) -> bool {
        self.needle.is_empty()
            && self
                .categories
                .iter()
                .all(|filter| !is_active(&filter.value))
            && self
                .period
                .as_ref()
                .map_or(true, |period| !is_active(&period.year) && !is_active(&period.month))
    }

    /// Whether `record` satisfies every active rule.
    pub fn matches<R: Record<Field = F>>(&self, record: &R) -> bool {
        self.matches_query(record)
            && self.categories.iter().all(|filter| filter.matches(record))
            && self.period.as_ref().map_or(true, |period| period.matches(record))
    }

    /// Records satisfying every active rule, in store order.
    pub fn apply<'a, R: Record<Field = F>>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|record| self.matches(*record)).collect()
    }

    fn matches_query<R: Record<Field = F>>(&self, record: &R) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        self.search_fields
            .iter()
            .any(|field| record.field(*field).contains_lowercase(&self.needle))
    }
}
