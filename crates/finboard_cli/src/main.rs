//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `finboard_core` linkage and print a seeded KPI summary.
//! - Keep output line-oriented for quick local sanity checks.
//! - Start file logging under `FINBOARD_LOG_DIR`, or the temp directory.

use finboard_core::seed;
use finboard_core::service::employee_service::EmployeeDirectory;
use finboard_core::service::expense_service::ExpenseDashboard;
use finboard_core::service::tax_calendar_service::TaxCalendar;
use finboard_core::RecordStore;
use std::path::PathBuf;
use std::process::ExitCode;

const LOG_DIR_VAR: &str = "FINBOARD_LOG_DIR";

fn main() -> ExitCode {
    println!("finboard_core ping={}", finboard_core::ping());
    println!("finboard_core version={}", finboard_core::core_version());

    let log_dir = log_dir();
    match finboard_core::init_logging(finboard_core::default_log_level(), &log_dir) {
        Ok(()) => println!("finboard logging dir={}", log_dir.display()),
        // Logging is diagnostics only; the summary still runs.
        Err(err) => eprintln!("finboard logging disabled: {err}"),
    }

    match print_summary() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("finboard summary failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn log_dir() -> PathBuf {
    std::env::var_os(LOG_DIR_VAR)
        .map(PathBuf::from)
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| std::env::temp_dir().join("finboard").join("logs"))
}

fn print_summary() -> Result<(), finboard_core::StoreError> {
    let today = chrono::Local::now().date_naive();

    let directory = EmployeeDirectory::new(RecordStore::from_records(seed::employees())?);
    let people = directory.kpis();
    println!(
        "employees total={} active={} on_leave={} terminated={} payroll_cost={:.2}",
        people.total, people.active, people.on_leave, people.terminated, people.payroll_cost
    );

    let calendar = TaxCalendar::new(RecordStore::from_records(seed::tax_events(today))?, today);
    let tax = calendar.kpis(today);
    println!(
        "tax upcoming={} overdue={} liability={:.2} compliance={:.1}% filed_30d={}",
        tax.upcoming,
        tax.overdue,
        tax.estimated_liability,
        tax.compliance_rate,
        tax.filed_last_30_days
    );

    let expenses = ExpenseDashboard::new(
        seed::expense_ledger(),
        RecordStore::from_records(seed::expense_claims())?,
    );
    println!(
        "expenses spend={:.2} budget={:.2} utilization={}%",
        expenses.ledger().monthly_spend,
        expenses.ledger().monthly_budget,
        expenses.budget_utilization()
    );
    Ok(())
}
