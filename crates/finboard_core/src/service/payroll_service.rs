//! Payroll run history and its KPIs.
//!
//! # Invariants
//! - Only completed runs count toward paid cost.
//! - At most one run row is expanded at a time.

use crate::model::payroll::{PayrollRun, PayrollRunField, RunStatus};
use crate::service::list_screen::ListScreen;
use crate::store::record_store::RecordStore;
use crate::view::aggregate::{count_where, sum_by};
use crate::view::filter::FilterSet;

pub const PAYROLL_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct PayrollKpis {
    pub completed: usize,
    pub processing: usize,
    pub failed: usize,
    pub scheduled: usize,
    pub completed_cost: f64,
    pub overtime_hours: u64,
}

#[derive(Debug, Clone)]
pub struct PayrollDashboard {
    screen: ListScreen<PayrollRun>,
    expanded: Option<u32>,
}

impl PayrollDashboard {
    pub fn new(store: RecordStore<PayrollRun>) -> Self {
        let filters = FilterSet::new([PayrollRunField::RunId, PayrollRunField::PayPeriod]);
        Self {
            screen: ListScreen::new(store, filters, PAYROLL_PAGE_SIZE),
            expanded: None,
        }
    }

    pub fn screen(&self) -> &ListScreen<PayrollRun> {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut ListScreen<PayrollRun> {
        &mut self.screen
    }

    pub fn expanded(&self) -> Option<u32> {
        self.expanded
    }

    /// Expands `id`, or collapses it when it is already expanded.
    pub fn toggle_row(&mut self, id: u32) {
        self.expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// KPIs over every run, independent of the search box.
    pub fn kpis(&self) -> PayrollKpis {
        let runs = self.screen.store().records();
        let by_status = |status: RunStatus| count_where(runs.iter(), |run| run.status == status);
        PayrollKpis {
            completed: by_status(RunStatus::Completed),
            processing: by_status(RunStatus::Processing),
            failed: by_status(RunStatus::Failed),
            scheduled: by_status(RunStatus::Scheduled),
            completed_cost: sum_by(
                runs.iter().filter(|run| run.status == RunStatus::Completed),
                |run| run.total_cost,
            ),
            overtime_hours: runs.iter().map(|run| u64::from(run.overtime_hours)).sum(),
        }
    }
}
