//! Demo records every screen starts with.
//!
//! Dates that depend on the current day take `today` explicitly.

use crate::model::employee::{employee_code, Employee, EmployeeStatus};
use crate::model::expense::{ClaimStatus, ExpenseCategory, ExpenseClaim};
use crate::model::payroll::{PayrollRun, Payslip, PayslipStatus, RunStatus};
use crate::model::salary::{Allowances, Deductions, PaymentFrequency, SalaryDetails, SalaryTemplate};
use crate::model::tax::{
    LiabilityType, Submission, SubmissionStatus, TaxEvent, TaxEventStatus, TaxForm, TaxFormStatus,
};
use crate::service::expense_service::ExpenseLedger;
use crate::service::payslip_service::EmployeeOption;
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn midnight_utc(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    ymd(year, month, day).and_time(NaiveTime::MIN).and_utc()
}

struct EmployeeSeed {
    id: u32,
    name: &'static str,
    email: &'static str,
    role: &'static str,
    department: &'static str,
    status: EmployeeStatus,
    structure: &'static str,
    start: (i32, u32, u32),
    template: SalaryTemplate,
    frequency: PaymentFrequency,
    effective: (i32, u32, u32),
    base: f64,
    allowances: [f64; 3],
    deductions: [f64; 4],
}

impl EmployeeSeed {
    fn into_employee(self) -> Employee {
        let (sy, sm, sd) = self.start;
        let (ey, em, ed) = self.effective;
        let [housing, transport, bonus] = self.allowances;
        let [federal_tax, state_tax, health_insurance, other] = self.deductions;
        Employee {
            id: self.id,
            employee_code: employee_code(self.id),
            name: self.name.to_string(),
            email: self.email.to_string(),
            role: self.role.to_string(),
            department: self.department.to_string(),
            status: self.status,
            salary_structure: self.structure.to_string(),
            start_date: ymd(sy, sm, sd),
            profile_image_url: Some(format!("https://picsum.photos/id/{}/100/100", 1010 + self.id)),
            salary: SalaryDetails {
                template: self.template,
                base_salary: self.base,
                payment_frequency: self.frequency,
                effective_date: ymd(ey, em, ed),
                allowances: Allowances {
                    housing,
                    transport,
                    bonus,
                },
                deductions: Deductions {
                    federal_tax,
                    state_tax,
                    health_insurance,
                    other,
                },
            },
        }
    }
}

pub fn employees() -> Vec<Employee> {
    use EmployeeStatus::{Active, OnLeave, Terminated};
    use PaymentFrequency::{BiWeekly, Monthly};
    use SalaryTemplate::{Custom, SalesCommission, TechStandard};

    let seeds = vec![
        EmployeeSeed {
            id: 1,
            name: "Sarah Johnson",
            email: "sarah.j@company.com",
            role: "Software Engineer",
            department: "Engineering",
            status: Active,
            structure: "Tech Standard",
            start: (2022, 3, 15),
            template: TechStandard,
            frequency: Monthly,
            effective: (2024, 1, 1),
            base: 120_000.0,
            allowances: [20_000.0, 6_000.0, 15_000.0],
            deductions: [18_000.0, 7_000.0, 6_000.0, 1_000.0],
        },
        EmployeeSeed {
            id: 2,
            name: "Michael Chen",
            email: "m.chen@company.com",
            role: "Product Manager",
            department: "Product",
            status: Active,
            structure: "Management",
            start: (2021, 8, 1),
            template: Custom,
            frequency: Monthly,
            effective: (2024, 1, 1),
            base: 140_000.0,
            allowances: [25_000.0, 7_000.0, 20_000.0],
            deductions: [22_000.0, 9_000.0, 6_500.0, 1_500.0],
        },
        EmployeeSeed {
            id: 3,
            name: "Emily Davis",
            email: "emily.d@company.com",
            role: "UX Designer",
            department: "Design",
            status: OnLeave,
            structure: "Design Standard",
            start: (2023, 1, 20),
            template: Custom,
            frequency: BiWeekly,
            effective: (2023, 1, 20),
            base: 95_000.0,
            allowances: [18_000.0, 5_000.0, 5_000.0],
            deductions: [13_000.0, 5_000.0, 5_500.0, 800.0],
        },
        EmployeeSeed {
            id: 4,
            name: "James Wilson",
            email: "j.wilson@company.com",
            role: "DevOps Engineer",
            department: "Engineering",
            status: Active,
            structure: "Tech Standard",
            start: (2022, 9, 10),
            template: TechStandard,
            frequency: Monthly,
            effective: (2022, 9, 10),
            base: 130_000.0,
            allowances: [22_000.0, 6_000.0, 10_000.0],
            deductions: [20_000.0, 8_000.0, 6_000.0, 1_200.0],
        },
        EmployeeSeed {
            id: 5,
            name: "Amanda Foster",
            email: "a.foster@company.com",
            role: "HR Manager",
            department: "Human Resources",
            status: Active,
            structure: "Management",
            start: (2020, 5, 30),
            template: Custom,
            frequency: Monthly,
            effective: (2020, 5, 30),
            base: 110_000.0,
            allowances: [20_000.0, 5_000.0, 8_000.0],
            deductions: [16_000.0, 6_000.0, 6_000.0, 1_000.0],
        },
        EmployeeSeed {
            id: 6,
            name: "Robert Martinez",
            email: "r.martinez@company.com",
            role: "Sales Executive",
            department: "Sales",
            status: Terminated,
            structure: "Sales Commission",
            start: (2021, 11, 1),
            template: SalesCommission,
            frequency: Monthly,
            effective: (2021, 11, 1),
            base: 70_000.0,
            allowances: [10_000.0, 5_000.0, 40_000.0],
            deductions: [15_000.0, 5_000.0, 5_000.0, 500.0],
        },
        EmployeeSeed {
            id: 7,
            name: "Lisa Thompson",
            email: "l.thompson@company.com",
            role: "Marketing Lead",
            department: "Marketing",
            status: Active,
            structure: "Management",
            start: (2022, 2, 18),
            template: Custom,
            frequency: Monthly,
            effective: (2022, 2, 18),
            base: 115_000.0,
            allowances: [20_000.0, 5_500.0, 12_000.0],
            deductions: [17_000.0, 6_500.0, 6_000.0, 1_000.0],
        },
        EmployeeSeed {
            id: 8,
            name: "David Kim",
            email: "d.kim@company.com",
            role: "Data Analyst",
            department: "Analytics",
            status: Active,
            structure: "Tech Standard",
            start: (2023, 6, 5),
            template: TechStandard,
            frequency: Monthly,
            effective: (2023, 6, 5),
            base: 90_000.0,
            allowances: [15_000.0, 5_000.0, 5_000.0],
            deductions: [12_000.0, 4_000.0, 5_500.0, 800.0],
        },
    ];
    seeds.into_iter().map(EmployeeSeed::into_employee).collect()
}

pub fn submissions() -> Vec<Submission> {
    use SubmissionStatus::{Accepted, Processing, RejectedError, Submitted};

    let rows: [(u32, &str, &str, &str, &str, SubmissionStatus, Option<&str>, Option<bool>); 9] = [
        (
            1,
            "Annual Income Tax - FY 2024-25",
            "10 Oct 2025",
            "10 Oct 2025",
            "1,50,000",
            Accepted,
            Some("TXN-2025-A8B9C1D4"),
            Some(true),
        ),
        (
            2,
            "GST M-3",
            "01 Apr 2024 - Period - 30 Sep 2025",
            "01 Sep 2025",
            "1,50,000 - X7Y6Z5W2",
            Accepted,
            Some("PROP-2025-P9S0"),
            Some(false),
        ),
        (3, "GST M-3", "05 Oct 2025", "25,000", "25,000", Accepted, None, Some(true)),
        (
            4,
            "Property Tax - H1 2025",
            "01 Apr 2024-2025 - 30 Sep 2025",
            "31 Oct 2024",
            "12,000",
            Processing,
            None,
            Some(true),
        ),
        (5, "TDS Q2 FY24-25", "TDS-29M8N706", "TDS-29M8N706", "N/A", RejectedError, None, None),
        (6, "Annual Income Tax - FY 2023-24", "N/A", "N/A", "8,000", Accepted, None, Some(false)),
        (7, "Annual Income Tax - 31 Mar 2024", "N/A", "N/A", "N/A", Submitted, None, None),
        (
            8,
            "VAT Return Q1 2024",
            "01 Jan 2024 - 31 Mar 2024",
            "15 Apr 2024",
            "5,600",
            Accepted,
            None,
            Some(true),
        ),
        (
            9,
            "Corporate Tax 2023",
            "01 Jan 2023 - 31 Dec 2023",
            "10 Mar 2024",
            "45,000",
            Accepted,
            None,
            Some(true),
        ),
    ];
    rows.into_iter()
        .map(
            |(
                id,
                tax_name,
                filing_period,
                submission_date,
                amount,
                status,
                transaction_id,
                is_paid,
            )| {
                Submission {
                    id,
                    tax_name: tax_name.to_string(),
                    filing_period: filing_period.to_string(),
                    submission_date: submission_date.to_string(),
                    amount: amount.to_string(),
                    status,
                    transaction_id: transaction_id.map(str::to_string),
                    is_paid,
                }
            },
        )
        .collect()
}

pub fn payslip_employees() -> Vec<EmployeeOption> {
    [(1, "Sarah Johnson"), (2, "Michael Chen"), (3, "Emily Davis")]
        .into_iter()
        .map(|(id, name)| EmployeeOption {
            id,
            name: name.to_string(),
        })
        .collect()
}

pub fn payslips() -> Vec<Payslip> {
    use PayslipStatus::{Paid, Processing};

    let rows: [(u32, u32, &str, (i32, u32, u32), f64, PayslipStatus); 12] = [
        (1, 1, "Mar 2025", (2025, 3, 31), 75_500.0, Paid),
        (2, 1, "Feb 2025", (2025, 2, 28), 75_500.0, Paid),
        (3, 1, "Jan 2025", (2025, 1, 31), 75_500.0, Paid),
        (4, 1, "Dec 2024", (2024, 12, 31), 74_950.0, Paid),
        (5, 1, "Nov 2024", (2024, 11, 30), 74_950.0, Paid),
        (6, 1, "Oct 2024", (2024, 10, 31), 74_950.0, Paid),
        (7, 2, "Mar 2025", (2025, 3, 31), 82_000.0, Paid),
        (8, 2, "Feb 2025", (2025, 2, 28), 82_000.0, Paid),
        (9, 2, "Jan 2025", (2025, 1, 31), 81_500.0, Paid),
        (10, 3, "Mar 2025", (2025, 3, 31), 68_000.0, Paid),
        (11, 3, "Feb 2025", (2025, 2, 28), 68_000.0, Paid),
        (12, 1, "Apr 2024", (2024, 4, 30), 73_800.0, Processing),
    ];
    rows.into_iter()
        .map(|(id, employee_id, period, (y, m, d), net_pay, status)| Payslip {
            id,
            employee_id,
            pay_period: period.to_string(),
            payment_date: ymd(y, m, d),
            net_pay,
            status,
            document_url: "#".to_string(),
        })
        .collect()
}

pub fn tax_forms() -> Vec<TaxForm> {
    use TaxFormStatus::{Archived, Draft, Filed, Ready};

    let rows: [(&str, &str, i32, TaxFormStatus, (i32, u32, u32), (i32, u32, u32)); 9] = [
        ("Form W-2", "US", 2023, Filed, (2023, 11, 1), (2024, 1, 15)),
        ("VAT Return (UK)", "UK", 2023, Filed, (2023, 12, 5), (2024, 1, 20)),
        ("Form 1099-NEC", "US", 2023, Ready, (2024, 1, 1), (2024, 1, 25)),
        ("Form W-2", "US", 2022, Archived, (2022, 11, 1), (2023, 1, 15)),
        ("Corporate/Other-(-18)", "India", 2023, Draft, (2024, 2, 1), (2024, 2, 10)),
        ("GST Filing (India)", "India", 2023, Filed, (2023, 7, 1), (2023, 7, 20)),
        ("VAT Return (UK)", "UK", 2022, Archived, (2022, 12, 5), (2023, 1, 20)),
        ("Form 941", "US", 2024, Draft, (2024, 4, 1), (2024, 4, 5)),
        ("CA Form 592-B", "California", 2023, Filed, (2023, 12, 15), (2024, 1, 10)),
    ];
    rows.into_iter()
        .map(|(name, jurisdiction, tax_year, status, (cy, cm, cd), (my, mm, md))| TaxForm {
            id: Uuid::new_v4(),
            form_name: name.to_string(),
            jurisdiction: jurisdiction.to_string(),
            tax_year,
            status,
            created_at: midnight_utc(cy, cm, cd),
            modified_at: midnight_utc(my, mm, md),
        })
        .collect()
}

/// Calendar deadlines; two of them are placed relative to `today`.
pub fn tax_events(today: NaiveDate) -> Vec<TaxEvent> {
    use LiabilityType::{Corporate, Expense, Payroll};
    use TaxEventStatus::{Filed, Overdue, Upcoming};

    let fifteen_days_ago = today.checked_sub_days(Days::new(15)).unwrap_or(today);
    let event = |id: u32,
                 form_name: &str,
                 jurisdiction: &str,
                 due_date: NaiveDate,
                 status: TaxEventStatus,
                 filed_date: Option<NaiveDate>,
                 liability: Option<(LiabilityType, f64)>,
                 description: Option<&str>| TaxEvent {
        id,
        form_name: form_name.to_string(),
        jurisdiction: jurisdiction.to_string(),
        due_date,
        filed_date,
        status,
        liability_type: liability.map(|(kind, _)| kind),
        amount: liability.map_or(0.0, |(_, amount)| amount),
        description: description.map(str::to_string),
    };

    vec![
        event(
            1,
            "Form 941",
            "Federal",
            ymd(2024, 7, 31),
            Upcoming,
            None,
            Some((Payroll, 45_000.0)),
            Some("Quarterly Federal Tax Return"),
        ),
        event(
            2,
            "CA Sales Tax",
            "California",
            ymd(2024, 7, 20),
            Upcoming,
            None,
            Some((Expense, 12_500.0)),
            Some("Q2 Sales & Use Tax"),
        ),
        event(
            3,
            "Form W-2",
            "Federal",
            ymd(2024, 6, 28),
            Filed,
            Some(ymd(2024, 6, 25)),
            Some((Payroll, 0.0)),
            Some("Annual Wage and Tax Statement"),
        ),
        event(
            4,
            "VAT Return Q2",
            "United Kingdom",
            ymd(2024, 8, 7),
            Upcoming,
            None,
            Some((Corporate, 18_000.0)),
            None,
        ),
        event(5, "Corporate Tax Est.", "Federal", ymd(2024, 9, 15), Upcoming, None, None, None),
        event(
            6,
            "NY IT-204-LL",
            "New York",
            ymd(2024, 3, 15),
            Filed,
            Some(ymd(2024, 3, 12)),
            None,
            None,
        ),
        event(
            7,
            "TX Franchise Tax",
            "Texas",
            ymd(2024, 5, 15),
            Overdue,
            None,
            Some((Corporate, 5_000.0)),
            Some("Annual franchise tax report."),
        ),
        event(
            8,
            "Q1 Payroll Tax",
            "Federal",
            ymd(2024, 4, 30),
            Filed,
            Some(ymd(2024, 4, 28)),
            Some((Payroll, 0.0)),
            None,
        ),
        event(
            9,
            "Form 1120",
            "Federal",
            ymd(2024, 4, 15),
            Filed,
            Some(ymd(2024, 4, 10)),
            Some((Corporate, 0.0)),
            None,
        ),
        event(
            10,
            "DE Franchise Tax",
            "Delaware",
            today,
            Upcoming,
            None,
            Some((Corporate, 350.0)),
            None,
        ),
        event(
            11,
            "Monthly Payroll",
            "Federal",
            fifteen_days_ago,
            Filed,
            Some(fifteen_days_ago),
            Some((Payroll, 0.0)),
            None,
        ),
        event(
            12,
            "Local Business Tax",
            "City",
            ymd(2024, 5, 1),
            Overdue,
            None,
            Some((Corporate, 800.0)),
            None,
        ),
    ]
}

pub fn payroll_runs() -> Vec<PayrollRun> {
    use RunStatus::{Completed, Failed, Processing, Scheduled};

    let rows: [(&str, &str, (i32, u32, u32), RunStatus, u32, f64, f64, f64, u32); 6] = [
        (
            "PR-2024-001",
            "12/01/24 - 12/15/24",
            (2024, 12, 15),
            Completed,
            156,
            260_100.00,
            14_210.00,
            245_890.00,
            512,
        ),
        (
            "PR-2024-002",
            "11/16/24 - 11/30/24",
            (2024, 11, 30),
            Completed,
            154,
            258_000.00,
            14_879.50,
            243_120.50,
            480,
        ),
        (
            "PR-2024-003",
            "11/01/24 - 11/15/24",
            (2024, 11, 15),
            Processing,
            152,
            255_000.00,
            13_500.00,
            241_500.00,
            450,
        ),
        (
            "PR-2024-004",
            "10/16/24 - 10/31/24",
            (2024, 10, 31),
            Failed,
            150,
            252_000.00,
            13_249.25,
            238_750.75,
            420,
        ),
        (
            "PR-2024-005",
            "10/01/24 - 10/15/24",
            (2024, 10, 15),
            Completed,
            148,
            248_000.00,
            12_800.00,
            235_200.00,
            390,
        ),
        (
            "PR-2024-006",
            "12/16/24 - 12/31/24",
            (2024, 12, 31),
            Scheduled,
            158,
            262_000.00,
            13_500.00,
            248_500.00,
            0,
        ),
    ];
    rows.into_iter()
        .zip(1u32..)
        .map(
            |(
                (run_id, period, (y, m, d), status, employees, gross, deductions, net, overtime),
                id,
            )| {
                PayrollRun {
                    id,
                    run_id: run_id.to_string(),
                    pay_period: period.to_string(),
                    process_date: ymd(y, m, d),
                    status,
                    employee_count: employees,
                    total_cost: net,
                    gross_pay: gross,
                    deductions,
                    net_pay: net,
                    overtime_hours: overtime,
                }
            },
        )
        .collect()
}

pub fn expense_claims() -> Vec<ExpenseClaim> {
    use ClaimStatus::{Approved, Pending, Rejected};
    use ExpenseCategory::{Food, OfficeSupplies, Software, Travel};

    let rows: [(u32, (i32, u32, u32), &str, ExpenseCategory, f64, ClaimStatus); 6] = [
        (1, (2024, 12, 12), "Uber", Travel, 45.50, Pending),
        (2, (2024, 12, 12), "Starbucks", Food, 12.80, Approved),
        (3, (2024, 12, 11), "Adobe Creative Cloud", Software, 59.99, Approved),
        (4, (2024, 12, 11), "Delta Airlines", Travel, 850.00, Pending),
        (5, (2024, 12, 10), "Office Depot", OfficeSupplies, 125.00, Rejected),
        (6, (2024, 12, 9), "The Corner Bistro", Food, 85.30, Approved),
    ];
    rows.into_iter()
        .map(|(id, (y, m, d), merchant, category, amount, status)| ExpenseClaim {
            id,
            date: ymd(y, m, d),
            merchant: merchant.to_string(),
            category,
            amount,
            status,
        })
        .collect()
}

pub fn expense_ledger() -> ExpenseLedger {
    ExpenseLedger {
        monthly_spend: 145_000.0,
        monthly_budget: 200_000.0,
        pending_expenses: 7,
        policy_violations: 2,
        category_spend: vec![
            (ExpenseCategory::Travel, 65_250.0),
            (ExpenseCategory::Software, 40_600.0),
            (ExpenseCategory::Food, 26_100.0),
            (ExpenseCategory::OfficeSupplies, 13_050.0),
        ],
    }
}
