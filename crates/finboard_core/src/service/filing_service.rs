//! Tax filing history: searchable, paginated submissions.

use crate::model::tax::{Submission, SubmissionField, SubmissionStatus};
use crate::service::list_screen::ListScreen;
use crate::store::record_store::RecordStore;
use crate::view::aggregate::count_where;
use crate::view::filter::FilterSet;

pub const FILING_PAGE_SIZE: usize = 7;

#[derive(Debug, Clone)]
pub struct FilingHistory {
    screen: ListScreen<Submission>,
}

impl FilingHistory {
    pub fn new(store: RecordStore<Submission>) -> Self {
        let filters = FilterSet::new([SubmissionField::TaxName, SubmissionField::TransactionId]);
        Self {
            screen: ListScreen::new(store, filters, FILING_PAGE_SIZE),
        }
    }

    pub fn screen(&self) -> &ListScreen<Submission> {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut ListScreen<Submission> {
        &mut self.screen
    }

    /// Submissions with the given status among the current matches.
    pub fn count_matching(&self, status: SubmissionStatus) -> usize {
        count_where(self.screen.matching(), |submission| submission.status == status)
    }
}
