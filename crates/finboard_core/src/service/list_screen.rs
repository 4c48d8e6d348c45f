//! A record store paired with the list view that renders it.
//!
//! # Invariants
//! - The view is always derived from the current store snapshot.
//! - Every store write goes through `edit_store`, which re-clamps the
//!   current page, so it stays within `[1, total_pages]`.

use crate::model::record::Record;
use crate::store::record_store::RecordStore;
use crate::view::filter::FilterSet;
use crate::view::list_view::ListView;
use crate::view::paginate::{Page, Paginator};
use crate::view::sort::SortRule;

/// One list screen: its collection plus live filter/sort/page state.
#[derive(Debug, Clone)]
pub struct ListScreen<R: Record> {
    store: RecordStore<R>,
    view: ListView<R::Field>,
}

impl<R: Record> ListScreen<R> {
    pub fn new(store: RecordStore<R>, filters: FilterSet<R::Field>, page_size: usize) -> Self {
        Self {
            store,
            view: ListView::new(filters, Paginator::new(page_size)),
        }
    }

    pub fn with_sort(mut self, sort: SortRule<R::Field>) -> Self {
        self.view = self.view.with_sort(sort);
        self
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    /// Runs `edit` against the store, then re-clamps the current page.
    pub fn edit_store<T>(&mut self, edit: impl FnOnce(&mut RecordStore<R>) -> T) -> T {
        let result = edit(&mut self.store);
        self.view.clamp_to(self.store.records());
        result
    }

    pub fn view(&self) -> &ListView<R::Field> {
        &self.view
    }

    pub fn filters(&self) -> &FilterSet<R::Field> {
        self.view.filters()
    }

    pub fn current_page(&self) -> usize {
        self.view.current_page()
    }

    /// Page currently displayed.
    pub fn page(&self) -> Page<&R> {
        self.view.render(self.store.records())
    }

    /// Every record matching the filters, sorted.
    pub fn matching(&self) -> Vec<&R> {
        self.view.matching(self.store.records())
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.view.set_query(query);
    }

    pub fn set_category(&mut self, field: R::Field, value: impl Into<String>) {
        self.view.set_category(field, value);
    }

    pub fn set_year(&mut self, year: impl Into<String>) {
        self.view.set_year(year);
    }

    pub fn set_month(&mut self, month: impl Into<String>) {
        self.view.set_month(month);
    }

    pub fn clear_filters(&mut self) {
        self.view.clear_filters();
    }

    pub fn set_sort(&mut self, sort: Option<SortRule<R::Field>>) {
        self.view.set_sort(sort);
    }

    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.view.go_to_page(self.store.records(), page)
    }

    pub fn next_page(&mut self) -> usize {
        self.view.next_page(self.store.records())
    }

    pub fn previous_page(&mut self) -> usize {
        self.view.previous_page(self.store.records())
    }
}
