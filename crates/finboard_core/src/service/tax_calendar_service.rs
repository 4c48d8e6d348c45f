//! Tax calendar and compliance dashboard.
//!
//! # Responsibility
//! - Compliance KPIs, urgent deadlines and recent filings.
//! - Month grid with status toggles and day selection.
//! - Adding deadlines and marking them filed.
//!
//! # Invariants
//! - Filed events are always shown; upcoming/overdue follow their toggles.
//! - "Today" is always passed in, never read from the clock here.
//! - Changing month clears the selected day.

use crate::model::tax::{TaxEvent, TaxEventField, TaxEventStatus};
use crate::model::validation::ValidationErrors;
use crate::service::editor::{Editor, RecordForm, SubmitOutcome};
use crate::store::record_store::{RecordStore, StoreResult};
use crate::view::aggregate::{compliance_rate, count_where, sum_by, top_n};
use crate::view::calendar::{month_grid, CalendarDay, CalendarError, YearMonth};
use crate::view::sort::{sort_records, SortRule};
use chrono::{Days, NaiveDate};
use log::{info, warn};

pub const URGENT_LIMIT: usize = 4;
pub const RECENT_FILINGS_LIMIT: usize = 5;
pub const RECENT_FILING_WINDOW_DAYS: u64 = 30;

/// Add-deadline form. New deadlines always start as upcoming.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaxEventForm {
    pub form_name: String,
    pub jurisdiction: String,
    pub due_date: Option<NaiveDate>,
    pub description: String,
}

impl RecordForm<TaxEvent> for TaxEventForm {
    fn from_record(record: &TaxEvent) -> Self {
        Self {
            form_name: record.form_name.clone(),
            jurisdiction: record.jurisdiction.clone(),
            due_date: Some(record.due_date),
            description: record.description.clone().unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_text("form_name", &self.form_name);
        errors.require_text("jurisdiction", &self.jurisdiction);
        errors.require_some("due_date", &self.due_date);
        errors.into_result()
    }

    fn build(&self, key: u32) -> TaxEvent {
        TaxEvent {
            id: key,
            form_name: self.form_name.trim().to_string(),
            jurisdiction: self.jurisdiction.trim().to_string(),
            due_date: self.due_date.unwrap_or_default(),
            filed_date: None,
            status: TaxEventStatus::Upcoming,
            liability_type: None,
            amount: 0.0,
            description: self.description_text(),
        }
    }

    fn merge_into(&self, existing: &TaxEvent) -> TaxEvent {
        TaxEvent {
            form_name: self.form_name.trim().to_string(),
            jurisdiction: self.jurisdiction.trim().to_string(),
            due_date: self.due_date.unwrap_or(existing.due_date),
            description: self.description_text(),
            ..existing.clone()
        }
    }
}

impl TaxEventForm {
    fn description_text(&self) -> Option<String> {
        let trimmed = self.description.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaxKpis {
    pub upcoming: usize,
    pub overdue: usize,
    /// Sum of amounts not yet filed.
    pub estimated_liability: f64,
    /// Filed share of filed + overdue, one decimal.
    pub compliance_rate: f64,
    pub filed_last_30_days: usize,
}

#[derive(Debug, Clone)]
pub struct TaxCalendar {
    events: RecordStore<TaxEvent>,
    month: YearMonth,
    selected_day: Option<NaiveDate>,
    show_upcoming: bool,
    show_overdue: bool,
    editor: Editor<TaxEvent, TaxEventForm>,
}

impl TaxCalendar {
    /// Opens the calendar on the month containing `today`.
    pub fn new(events: RecordStore<TaxEvent>, today: NaiveDate) -> Self {
        Self {
            events,
            month: YearMonth::containing(today),
            selected_day: None,
            show_upcoming: true,
            show_overdue: true,
            editor: Editor::new(),
        }
    }

    pub fn events(&self) -> &RecordStore<TaxEvent> {
        &self.events
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn kpis(&self, today: NaiveDate) -> TaxKpis {
        let events = self.events.records();
        let by_status =
            |status: TaxEventStatus| count_where(events.iter(), |event| event.status == status);
        let filed = by_status(TaxEventStatus::Filed);
        let overdue = by_status(TaxEventStatus::Overdue);
        TaxKpis {
            upcoming: by_status(TaxEventStatus::Upcoming),
            overdue,
            estimated_liability: sum_by(
                events.iter().filter(|event| event.status.is_open()),
                |event| event.amount,
            ),
            compliance_rate: compliance_rate(filed, overdue),
            filed_last_30_days: self.filed_since(today),
        }
    }

    fn filed_since(&self, today: NaiveDate) -> usize {
        let Some(cutoff) = today.checked_sub_days(Days::new(RECENT_FILING_WINDOW_DAYS)) else {
            return 0;
        };
        count_where(self.events.records().iter(), |event| {
            event.status == TaxEventStatus::Filed
                && event.filed_date.is_some_and(|filed| filed > cutoff)
        })
    }

    /// Open deadlines, earliest due first, at most four.
    pub fn urgent_deadlines(&self) -> Vec<&TaxEvent> {
        let open: Vec<&TaxEvent> = self
            .events
            .records()
            .iter()
            .filter(|event| event.status.is_open())
            .collect();
        let sorted = sort_records(open, Some(&SortRule::ascending(TaxEventField::DueDate)));
        top_n(sorted, URGENT_LIMIT)
    }

    /// Filed events, latest filing first, at most five.
    pub fn recent_filings(&self) -> Vec<&TaxEvent> {
        let filed: Vec<&TaxEvent> = self
            .events
            .records()
            .iter()
            .filter(|event| event.status == TaxEventStatus::Filed)
            .collect();
        let rule = SortRule::descending(TaxEventField::FiledDate)
            .then_descending(TaxEventField::DueDate);
        top_n(sort_records(filed, Some(&rule)), RECENT_FILINGS_LIMIT)
    }

    /// Open deadlines due in the displayed month, earliest first.
    pub fn upcoming_for_month(&self) -> Vec<&TaxEvent> {
        let due: Vec<&TaxEvent> = self
            .events
            .records()
            .iter()
            .filter(|event| event.status.is_open() && self.month.contains(event.due_date))
            .collect();
        sort_records(due, Some(&SortRule::ascending(TaxEventField::DueDate)))
    }

    pub fn is_status_shown(&self, status: TaxEventStatus) -> bool {
        match status {
            TaxEventStatus::Filed => true,
            TaxEventStatus::Upcoming => self.show_upcoming,
            TaxEventStatus::Overdue => self.show_overdue,
        }
    }

    /// Flips the toggle for `status`. Filed has no toggle; returns whether
    /// the status is shown afterwards.
    pub fn toggle_status(&mut self, status: TaxEventStatus) -> bool {
        match status {
            TaxEventStatus::Filed => {}
            TaxEventStatus::Upcoming => self.show_upcoming = !self.show_upcoming,
            TaxEventStatus::Overdue => self.show_overdue = !self.show_overdue,
        }
        self.is_status_shown(status)
    }

    /// 42-cell grid of the displayed month with the visible events.
    ///
    /// # Errors
    /// - Returns `OutOfRange` at the edges of the representable calendar.
    pub fn grid(&self, today: NaiveDate) -> Result<Vec<CalendarDay<&TaxEvent>>, CalendarError> {
        let visible = self
            .events
            .records()
            .iter()
            .filter(|event| self.is_status_shown(event.status));
        month_grid(self.month, today, visible, |event| event.due_date)
    }

    /// # Errors
    /// - Returns `OutOfRange` before the first representable month.
    pub fn previous_month(&mut self) -> Result<YearMonth, CalendarError> {
        self.month = self.month.previous()?;
        self.selected_day = None;
        Ok(self.month)
    }

    /// # Errors
    /// - Returns `OutOfRange` after the last representable month.
    pub fn next_month(&mut self) -> Result<YearMonth, CalendarError> {
        self.month = self.month.next()?;
        self.selected_day = None;
        Ok(self.month)
    }

    /// Selects a day of the displayed month that has visible events.
    pub fn select_day(&mut self, date: NaiveDate) -> bool {
        let selectable = self.month.contains(date)
            && self
                .events
                .records()
                .iter()
                .any(|event| event.due_date == date && self.is_status_shown(event.status));
        if selectable {
            self.selected_day = Some(date);
        }
        selectable
    }

    pub fn selected_day(&self) -> Option<NaiveDate> {
        self.selected_day
    }

    /// Events of the selected day, read from the current store contents.
    pub fn selected_events(&self) -> Vec<&TaxEvent> {
        let Some(date) = self.selected_day else {
            return Vec::new();
        };
        self.events
            .records()
            .iter()
            .filter(|event| event.due_date == date && self.is_status_shown(event.status))
            .collect()
    }

    pub fn editor(&self) -> &Editor<TaxEvent, TaxEventForm> {
        &self.editor
    }

    pub fn open_add_event(&mut self) {
        self.editor.open_add(TaxEventForm::default());
    }

    pub fn form_mut(&mut self) -> Option<&mut TaxEventForm> {
        self.editor.form_mut()
    }

    pub fn cancel(&mut self) {
        self.editor.cancel();
    }

    /// # Errors
    /// - Propagates store invariant violations.
    pub fn submit_event(&mut self) -> StoreResult<SubmitOutcome<u32>> {
        self.editor.submit(&mut self.events)
    }

    /// Marks the event filed today. Returns `false` when the id is unknown.
    pub fn mark_as_filed(&mut self, id: u32, today: NaiveDate) -> bool {
        let result = self.events.update(&id, |event| TaxEvent {
            status: TaxEventStatus::Filed,
            filed_date: Some(today),
            ..event.clone()
        });
        match result {
            Ok(()) => {
                info!("event=tax_event_filed module=tax_calendar status=ok id={id} filed={today}");
                true
            }
            Err(err) => {
                warn!("event=tax_event_filed module=tax_calendar status=noop id={id} err={err}");
                false
            }
        }
    }
}
