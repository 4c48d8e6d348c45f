//! Fixed-size pagination with clamped page numbers.
//!
//! # Invariants
//! - Page size is at least 1.
//! - `total_pages = ceil(n / page_size)`, 0 when `n == 0`.
//! - Returned page numbers are within `[1, total_pages]`, or 1 when empty.

use std::ops::RangeInclusive;

/// Splits a sequence into fixed-size pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Paginator {
    /// Creates a paginator; a zero page size is raised to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, total_items: usize) -> usize {
        total_items.div_ceil(self.page_size)
    }

    /// Clamps a requested page number into the valid range.
    pub fn clamp_page(&self, page: usize, total_items: usize) -> usize {
        page.clamp(1, self.total_pages(total_items).max(1))
    }

    /// Returns the requested page of `items`, clamping the page number.
    pub fn page<T: Clone>(&self, items: &[T], page: usize) -> Page<T> {
        let total_items = items.len();
        let number = self.clamp_page(page, total_items);
        let start = ((number - 1) * self.page_size).min(total_items);
        let end = (start + self.page_size).min(total_items);
        Page {
            items: items[start..end].to_vec(),
            number,
            page_size: self.page_size,
            total_items,
            total_pages: self.total_pages(total_items),
        }
    }
}

/// One page of a filtered, sorted sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number actually shown.
    pub number: usize,
    pub page_size: usize,
    /// Length of the whole sequence before slicing.
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Page numbers for navigation, empty when there are no pages.
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// 1-based position of the first item on this page, 0 when empty.
    pub fn first_item_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.number - 1) * self.page_size + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Paginator;

    #[test]
    fn empty_sequence_has_zero_pages_and_page_one() {
        let paginator = Paginator::new(7);
        let page = paginator.page::<u32>(&[], 3);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.number, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.page_numbers().count(), 0);
    }

    #[test]
    fn out_of_range_requests_are_clamped() {
        let paginator = Paginator::new(7);
        let items: Vec<u32> = (1..=9).collect();
        assert_eq!(paginator.page(&items, 0).number, 1);
        let last = paginator.page(&items, 99);
        assert_eq!(last.number, 2);
        assert_eq!(last.items, vec![8, 9]);
        assert_eq!(last.first_item_index(), 8);
    }

    #[test]
    fn zero_page_size_is_raised_to_one() {
        assert_eq!(Paginator::new(0).page_size(), 1);
    }
}
