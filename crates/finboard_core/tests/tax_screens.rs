use chrono::{Datelike, NaiveDate, TimeZone, Utc, Weekday};
use finboard_core::model::tax::{TaxEventStatus, TaxFormStatus};
use finboard_core::seed;
use finboard_core::service::tax_calendar_service::TaxCalendar;
use finboard_core::service::tax_form_service::TaxFormsLibrary;
use finboard_core::{RecordStore, SubmitOutcome};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn library() -> TaxFormsLibrary {
    TaxFormsLibrary::new(RecordStore::from_records(seed::tax_forms()).unwrap())
}

fn form_names(library: &TaxFormsLibrary) -> Vec<String> {
    library
        .forms()
        .into_iter()
        .map(|form| format!("{} {}", form.form_name, form.tax_year))
        .collect()
}

fn calendar(today: NaiveDate) -> TaxCalendar {
    TaxCalendar::new(
        RecordStore::from_records(seed::tax_events(today)).unwrap(),
        today,
    )
}

fn ids(events: Vec<&finboard_core::model::tax::TaxEvent>) -> Vec<u32> {
    events.into_iter().map(|event| event.id).collect()
}

#[test]
fn forms_are_listed_newest_modification_first() {
    let library = library();
    assert_eq!(
        form_names(&library),
        vec![
            "Form 941 2024",
            "Corporate/Other-(-18) 2023",
            "Form 1099-NEC 2023",
            "VAT Return (UK) 2023",
            "Form W-2 2023",
            "CA Form 592-B 2023",
            "GST Filing (India) 2023",
            "VAT Return (UK) 2022",
            "Form W-2 2022",
        ]
    );
}

#[test]
fn form_option_lists_put_all_first() {
    let library = library();
    assert_eq!(
        library.jurisdiction_options(),
        vec!["All", "California", "India", "UK", "US"]
    );
    assert_eq!(library.year_options(), vec!["All", "2024", "2023", "2022"]);
    assert_eq!(
        TaxFormsLibrary::status_options(),
        vec!["All", "Draft", "Ready", "Filed", "Archived"]
    );
}

#[test]
fn form_filters_combine() {
    let mut library = library();
    library.set_jurisdiction("US");
    library.set_year("2023");
    assert_eq!(form_names(&library), vec!["Form 1099-NEC 2023", "Form W-2 2023"]);

    library.set_year("All");
    library.set_status("Archived");
    assert_eq!(form_names(&library), vec!["Form W-2 2022"]);

    library.screen_mut().clear_filters();
    library.screen_mut().set_query("vat");
    assert_eq!(form_names(&library).len(), 2);
}

#[test]
fn editing_a_form_bumps_modified_and_moves_it_first() {
    let mut library = library();
    let old_w2 = library
        .forms()
        .into_iter()
        .find(|form| form.form_name == "Form W-2" && form.tax_year == 2022)
        .map(|form| (form.id, form.created_at))
        .unwrap();

    assert!(library.open_edit(old_w2.0));
    library.form_mut().unwrap().status = TaxFormStatus::Ready;
    let now = Utc.with_ymd_and_hms(2025, 1, 2, 9, 30, 0).unwrap();
    assert_eq!(library.save(now).unwrap(), SubmitOutcome::Updated(old_w2.0));

    let first = library.forms()[0];
    assert_eq!(first.id, old_w2.0);
    assert_eq!(first.status, TaxFormStatus::Ready);
    assert_eq!(first.modified_at, now);
    assert_eq!(first.created_at, old_w2.1);
}

#[test]
fn form_validation_requires_names_and_plausible_year() {
    let mut library = library();
    let now = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();
    library.open_add(now);
    library.form_mut().unwrap().tax_year = 1899;

    assert_eq!(library.save(now).unwrap(), SubmitOutcome::Invalid);
    let errors = library.editor().errors().unwrap();
    assert!(errors.has_field("form_name"));
    assert!(errors.has_field("jurisdiction"));
    assert!(errors.has_field("tax_year"));

    {
        let form = library.form_mut().unwrap();
        form.form_name = "Form 940".to_string();
        form.jurisdiction = "US".to_string();
        form.tax_year = 2024;
    }
    let SubmitOutcome::Created(id) = library.save(now).unwrap() else {
        panic!("expected a created form");
    };
    assert_eq!(library.forms()[0].id, id);
    assert_eq!(library.forms()[0].status, TaxFormStatus::Draft);
    assert_eq!(library.screen().store().len(), 10);
}

#[test]
fn deleting_a_form_removes_it() {
    let mut library = library();
    let id = library.forms()[0].id;
    assert!(library.delete(id));
    assert!(!library.delete(id));
    assert_eq!(library.forms().len(), 8);
}

#[test]
fn calendar_kpis_follow_event_statuses() {
    let today = date(2024, 7, 10);
    let calendar = calendar(today);
    let kpis = calendar.kpis(today);
    assert_eq!(kpis.upcoming, 5);
    assert_eq!(kpis.overdue, 2);
    assert_eq!(kpis.estimated_liability, 81_650.0);
    assert_eq!(kpis.compliance_rate, 71.4);
    assert_eq!(kpis.filed_last_30_days, 2);
}

#[test]
fn urgent_and_recent_lists_are_ordered_and_capped() {
    let today = date(2024, 7, 10);
    let calendar = calendar(today);
    assert_eq!(ids(calendar.urgent_deadlines()), vec![12, 7, 10, 2]);
    assert_eq!(ids(calendar.recent_filings()), vec![3, 11, 8, 9, 6]);
    assert_eq!(ids(calendar.upcoming_for_month()), vec![10, 2, 1]);
}

#[test]
fn month_grid_has_six_weeks_from_sunday() {
    let today = date(2024, 7, 10);
    let calendar = calendar(today);
    let grid = calendar.grid(today).unwrap();

    assert_eq!(grid.len(), 42);
    assert_eq!(grid[0].date, date(2024, 6, 30));
    assert_eq!(grid[0].date.weekday(), Weekday::Sun);
    assert!(!grid[0].in_month);

    let today_cell = grid.iter().find(|day| day.is_today).unwrap();
    assert_eq!(today_cell.date, today);
    assert_eq!(today_cell.events.len(), 1);

    let with_events: Vec<u32> = grid
        .iter()
        .filter(|day| !day.events.is_empty())
        .map(|day| day.day_of_month())
        .collect();
    assert_eq!(with_events, vec![10, 20, 31]);
}

#[test]
fn hiding_upcoming_empties_july_and_blocks_selection() {
    let today = date(2024, 7, 10);
    let mut calendar = calendar(today);
    assert!(calendar.select_day(date(2024, 7, 20)));
    assert_eq!(ids(calendar.selected_events()), vec![2]);

    assert!(!calendar.toggle_status(TaxEventStatus::Upcoming));
    assert!(calendar.toggle_status(TaxEventStatus::Filed));
    let grid = calendar.grid(today).unwrap();
    assert!(grid.iter().all(|day| day.events.is_empty()));
    assert!(!calendar.select_day(date(2024, 7, 31)));
    assert!(calendar.selected_events().is_empty());
}

#[test]
fn month_navigation_clears_selection() {
    let today = date(2024, 7, 10);
    let mut calendar = calendar(today);
    assert!(calendar.select_day(date(2024, 7, 31)));

    let august = calendar.next_month().unwrap();
    assert_eq!((august.year(), august.month()), (2024, 8));
    assert_eq!(calendar.selected_day(), None);
    assert_eq!(ids(calendar.upcoming_for_month()), vec![4]);

    calendar.previous_month().unwrap();
    let june = calendar.previous_month().unwrap();
    assert_eq!(june.title(), "June 2024");
    let grid = calendar.grid(today).unwrap();
    let filed_cell = grid.iter().find(|day| day.date == date(2024, 6, 25)).unwrap();
    assert_eq!(ids(filed_cell.events.clone()), vec![11]);
}

#[test]
fn marking_filed_and_adding_events() {
    let today = date(2024, 7, 10);
    let mut calendar = calendar(today);

    assert!(calendar.mark_as_filed(2, today));
    assert!(!calendar.mark_as_filed(99, today));
    let filed = calendar.events().get(&2).unwrap();
    assert_eq!(filed.status, TaxEventStatus::Filed);
    assert_eq!(filed.filed_date, Some(today));
    let kpis = calendar.kpis(today);
    assert_eq!(kpis.upcoming, 4);
    assert_eq!(kpis.filed_last_30_days, 3);

    calendar.open_add_event();
    {
        let form = calendar.form_mut().unwrap();
        form.form_name = "Form 940".to_string();
        form.jurisdiction = "Federal".to_string();
    }
    assert_eq!(calendar.submit_event().unwrap(), SubmitOutcome::Invalid);
    assert!(calendar.editor().errors().unwrap().has_field("due_date"));

    calendar.form_mut().unwrap().due_date = Some(date(2024, 7, 25));
    assert_eq!(calendar.submit_event().unwrap(), SubmitOutcome::Created(13));
    let added = calendar.events().get(&13).unwrap();
    assert_eq!(added.status, TaxEventStatus::Upcoming);
    assert_eq!(ids(calendar.upcoming_for_month()), vec![10, 13, 1]);
}
