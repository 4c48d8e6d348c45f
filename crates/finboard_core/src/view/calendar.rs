//! Month grid for the tax calendar.
//!
//! # Invariants
//! - A grid always has 42 cells (6 weeks) and starts on a Sunday.
//! - Only cells inside the displayed month carry events.
//! - At most one cell is marked as today.

use chrono::{Datelike, Days, Months, NaiveDate};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const GRID_CELLS: usize = 42;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Month number outside `1..=12`, or a year chrono cannot represent.
    InvalidMonth { year: i32, month: u32 },
    /// Navigation moved past the representable date range.
    OutOfRange,
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth { year, month } => write!(f, "invalid month: {year}-{month:02}"),
            Self::OutOfRange => write!(f, "calendar month out of range"),
        }
    }
}

impl Error for CalendarError {}

/// A calendar month, stored as its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or(CalendarError::InvalidMonth { year, month })
    }

    /// Month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date - Days::new(u64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn previous(&self) -> Result<Self, CalendarError> {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .ok_or(CalendarError::OutOfRange)
    }

    pub fn next(&self) -> Result<Self, CalendarError> {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .ok_or(CalendarError::OutOfRange)
    }

    /// Display title such as `"March 2025"`.
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }
}

/// One cell of a month grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay<T> {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
    pub events: Vec<T>,
}

impl<T> CalendarDay<T> {
    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }

    /// Days outside the month or without events cannot be selected.
    pub fn is_selectable(&self) -> bool {
        self.in_month && !self.events.is_empty()
    }
}

/// Lays out `month` as 42 cells starting on the Sunday on or before its
/// first day. `due` maps an event to the day it is shown on.
///
/// # Errors
/// - Returns `OutOfRange` when the grid would leave chrono's date range.
pub fn month_grid<T, I, D>(
    month: YearMonth,
    today: NaiveDate,
    events: I,
    mut due: D,
) -> Result<Vec<CalendarDay<T>>, CalendarError>
where
    I: IntoIterator<Item = T>,
    D: FnMut(&T) -> NaiveDate,
{
    let lead = u64::from(month.first_day().weekday().num_days_from_sunday());
    let start = month
        .first_day()
        .checked_sub_days(Days::new(lead))
        .ok_or(CalendarError::OutOfRange)?;

    let mut grid = Vec::with_capacity(GRID_CELLS);
    let mut date = start;
    for index in 0..GRID_CELLS {
        if index > 0 {
            date = date.succ_opt().ok_or(CalendarError::OutOfRange)?;
        }
        grid.push(CalendarDay {
            date,
            in_month: month.contains(date),
            is_today: date == today,
            events: Vec::new(),
        });
    }

    for event in events {
        let day = due(&event);
        if !month.contains(day) {
            continue;
        }
        let offset = (day - start).num_days();
        if let Some(cell) = usize::try_from(offset)
            .ok()
            .and_then(|offset| grid.get_mut(offset))
        {
            cell.events.push(event);
        }
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::{month_grid, CalendarError, YearMonth, GRID_CELLS};
    use chrono::{Datelike, NaiveDate, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn grid_starts_on_sunday_and_has_six_weeks() {
        let month = YearMonth::new(2025, 3).unwrap();
        let grid = month_grid(month, date(2025, 3, 12), Vec::<NaiveDate>::new(), |d| *d).unwrap();
        assert_eq!(grid.len(), GRID_CELLS);
        assert_eq!(grid[0].date.weekday(), Weekday::Sun);
        assert_eq!(grid[0].date, date(2025, 2, 23));
        assert_eq!(grid.iter().filter(|day| day.in_month).count(), 31);
        assert_eq!(grid.iter().filter(|day| day.is_today).count(), 1);
    }

    #[test]
    fn events_land_only_inside_the_month() {
        let month = YearMonth::new(2025, 3).unwrap();
        let events = vec![date(2025, 3, 15), date(2025, 3, 15), date(2025, 4, 1)];
        let grid = month_grid(month, date(2024, 1, 1), events, |d| *d).unwrap();
        let marked: Vec<_> = grid.iter().filter(|day| !day.events.is_empty()).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].date, date(2025, 3, 15));
        assert_eq!(marked[0].events.len(), 2);
    }

    #[test]
    fn navigation_crosses_year_boundaries() {
        let january = YearMonth::new(2025, 1).unwrap();
        let december = january.previous().unwrap();
        assert_eq!((december.year(), december.month()), (2024, 12));
        assert_eq!(december.next().unwrap(), january);
        assert_eq!(
            YearMonth::new(2025, 13),
            Err(CalendarError::InvalidMonth { year: 2025, month: 13 })
        );
    }
}
