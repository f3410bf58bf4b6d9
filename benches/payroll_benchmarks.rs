//! Performance benchmarks for the attendance and payroll engine.
//!
//! Covers the pieces the screen recomputes on every interaction:
//! - Pay period window generation
//! - Salary calculation for one fully marked employee
//! - Summaries for a whole roster of 100 employees
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use attendance_payroll::app::AttendanceApp;
use attendance_payroll::calculation::{calculate_salary, generate_date_range};
use attendance_payroll::config::{ConfigLoader, PayrollConfig};
use attendance_payroll::models::{
    AdjustmentBucket, AllowanceKind, AmountInput, AttendanceStatus, DeductionKind, Employee,
};
use attendance_payroll::roster::Roster;

/// Loads the standard configuration.
fn load_config() -> PayrollConfig {
    ConfigLoader::load("./config/standard")
        .expect("Failed to load config")
        .into_config()
}

/// Creates an employee with every day of January 2024's window marked and
/// one allowance and deduction enabled. Every tenth day is flagged.
fn create_marked_employee(id: &str) -> Employee {
    let mut employee = Employee::blank(id);
    for (i, entry) in generate_date_range(0, 2024).into_iter().enumerate() {
        let status = if i % 10 == 9 {
            AttendanceStatus::Flagged
        } else {
            AttendanceStatus::Normal
        };
        employee.attendance.insert(entry.date, status);
    }
    employee.allowances.insert(
        AllowanceKind::Meal,
        AdjustmentBucket {
            enabled: true,
            amount: AmountInput::from("1500"),
        },
    );
    employee.deductions.insert(
        DeductionKind::SocialSecurity,
        AdjustmentBucket {
            enabled: true,
            amount: AmountInput::from("750"),
        },
    );
    employee
}

/// Benchmark: Window generation for every month of a year.
fn bench_date_range(c: &mut Criterion) {
    c.bench_function("date_range_12_months", |b| {
        b.iter(|| {
            for month in 0..12 {
                black_box(generate_date_range(black_box(month), black_box(2024)));
            }
        })
    });
}

/// Benchmark: One salary calculation.
fn bench_single_salary(c: &mut Criterion) {
    let config = load_config();
    let employee = create_marked_employee("001");

    c.bench_function("single_salary", |b| {
        b.iter(|| black_box(calculate_salary(black_box(&employee), &config)))
    });
}

/// Benchmark: Summaries for rosters of growing size.
fn bench_roster_summaries(c: &mut Criterion) {
    let config = load_config();
    let mut group = c.benchmark_group("roster_summaries");

    for size in [10_usize, 100] {
        let employees = (1..=size)
            .map(|n| create_marked_employee(&format!("{:03}", n)))
            .collect();
        let roster = Roster::from_employees(employees).expect("unique ids");
        let app = AttendanceApp::with_period(config.clone(), 0, 2024).with_roster(roster);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &app, |b, app| {
            b.iter(|| {
                let summaries: Vec<_> = app
                    .roster()
                    .employees()
                    .iter()
                    .filter_map(|e| app.summary_for(&e.id))
                    .collect();
                black_box(summaries)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_date_range,
    bench_single_salary,
    bench_roster_summaries
);
criterion_main!(benches);
