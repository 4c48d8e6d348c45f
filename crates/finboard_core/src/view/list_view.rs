//! Stateful list view: filters + sort + paginator + current page.
//!
//! # Invariants
//! - Any filter change resets the current page to 1.
//! - Navigation clamps the page against the records it is given; owners
//!   call `clamp_to` after mutating those records.
//! - Rendering clamps too, so a stale page number is never shown.

use crate::model::record::Record;
use crate::view::filter::FilterSet;
use crate::view::paginate::{Page, Paginator};
use crate::view::sort::{sort_records, SortRule};

/// `paginate(sort(filter(records)))` as one pure call.
pub fn derive_view<'a, R: Record>(
    records: &'a [R],
    filters: &FilterSet<R::Field>,
    sort: Option<&SortRule<R::Field>>,
    paginator: &Paginator,
    page: usize,
) -> Page<&'a R> {
    let matching = sort_records(filters.apply(records), sort);
    paginator.page(&matching, page)
}

/// Live filter/sort/page parameters of one list screen.
#[derive(Debug, Clone)]
pub struct ListView<F> {
    filters: FilterSet<F>,
    sort: Option<SortRule<F>>,
    paginator: Paginator,
    current_page: usize,
}

impl<F: Copy + Eq> ListView<F> {
    pub fn new(filters: FilterSet<F>, paginator: Paginator) -> Self {
        Self {
            filters,
            sort: None,
            paginator,
            current_page: 1,
        }
    }

    pub fn with_sort(mut self, sort: SortRule<F>) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn filters(&self) -> &FilterSet<F> {
        &self.filters
    }

    pub fn sort(&self) -> Option<&SortRule<F>> {
        self.sort.as_ref()
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Page last clamped by navigation or `clamp_to`.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Pulls the current page back into range after `records` changed.
    pub fn clamp_to<R: Record<Field = F>>(&mut self, records: &[R]) -> usize {
        let total = self.filters.apply(records).len();
        self.current_page = self.paginator.clamp_page(self.current_page, total);
        self.current_page
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filters.set_query(query);
        self.current_page = 1;
    }

    pub fn set_category(&mut self, field: F, value: impl Into<String>) {
        self.filters.set_category(field, value);
        self.current_page = 1;
    }

    pub fn set_year(&mut self, year: impl Into<String>) {
        self.filters.set_year(year);
        self.current_page = 1;
    }

    pub fn set_month(&mut self, month: impl Into<String>) {
        self.filters.set_month(month);
        self.current_page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.current_page = 1;
    }

    /// Replaces the sort rule; the page is kept because the matching set is
    /// unchanged.
    pub fn set_sort(&mut self, sort: Option<SortRule<F>>) {
        self.sort = sort;
    }

    /// Moves to `page`, clamped against the records currently matching.
    pub fn go_to_page<R: Record<Field = F>>(&mut self, records: &[R], page: usize) -> usize {
        self.current_page = page;
        self.clamp_to(records)
    }

    pub fn next_page<R: Record<Field = F>>(&mut self, records: &[R]) -> usize {
        let target = self.current_page.saturating_add(1);
        self.go_to_page(records, target)
    }

    pub fn previous_page<R: Record<Field = F>>(&mut self, records: &[R]) -> usize {
        let target = self.current_page.saturating_sub(1);
        self.go_to_page(records, target)
    }

    /// All records matching the filters, sorted; the subset aggregates use.
    pub fn matching<'a, R: Record<Field = F>>(&self, records: &'a [R]) -> Vec<&'a R> {
        sort_records(self.filters.apply(records), self.sort.as_ref())
    }

    /// The page currently shown.
    pub fn render<'a, R: Record<Field = F>>(&self, records: &'a [R]) -> Page<&'a R> {
        derive_view(
            records,
            &self.filters,
            self.sort.as_ref(),
            &self.paginator,
            self.current_page,
        )
    }
}
