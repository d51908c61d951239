use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::list_punches;
use crate::errors::AppResult;
use crate::models::punch::PunchRecord;
use crate::models::punch_kind::PunchKind;
use crate::utils::date::period_prefix;
use std::collections::BTreeMap;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        shop_id,
        employee,
        period,
        shifts,
    } = cmd
    {
        let period = match period {
            Some(p) => Some(period_prefix(p)?),
            None => None,
        };

        let pool = DbPool::new(&cfg.database)?;
        let punches = list_punches(&pool.conn, *shop_id, *employee, period.as_deref())?;

        if punches.is_empty() {
            println!("No punches recorded.");
            return Ok(());
        }

        if *shifts {
            let rows = compute_shift_rows(&punches);
            print_shift_rows(&rows, "Shift summary");
        } else {
            print_punch_table(&punches, "Recorded punches");
        }
    }
    Ok(())
}

/// One aggregated Day In / Day Out pair, with break minutes.
#[derive(Debug, Clone)]
struct ShiftRow {
    employee: String,
    date: String,
    opened: String,
    closed: String,
    break_minutes: i64,
    open: bool,
}

/// Rebuild per-shift rows from raw punches.
/// Rules mirror the validator's model:
///  - every Day In opens a new row
///  - the next Day Out (by resolved order) closes it
///  - Break Start / Break End pairs inside the row accumulate break time
fn compute_shift_rows(punches: &[PunchRecord]) -> Vec<ShiftRow> {
    // Group by (employee, date) bucket, resolved order within each.
    let mut buckets: BTreeMap<(String, String), Vec<&PunchRecord>> = BTreeMap::new();
    for p in punches {
        let key = (
            p.employee_id.map(|e| e.to_string()).unwrap_or_default(),
            p.date_str(),
        );
        buckets.entry(key).or_default().push(p);
    }

    let mut rows = Vec::new();
    for ((employee, date), mut records) in buckets {
        records.sort_by_key(|r| (r.resolved_at, r.id));

        let mut current: Option<ShiftRow> = None;
        let mut break_opened: Option<chrono::NaiveDateTime> = None;

        for r in records {
            match r.kind {
                PunchKind::DayIn => {
                    if let Some(row) = current.take() {
                        rows.push(row);
                    }
                    current = Some(ShiftRow {
                        employee: employee.clone(),
                        date: date.clone(),
                        opened: r.resolved_str(),
                        closed: "-".to_string(),
                        break_minutes: 0,
                        open: true,
                    });
                    break_opened = None;
                }
                PunchKind::BreakStart => {
                    break_opened = Some(r.resolved_at);
                }
                PunchKind::BreakEnd => {
                    if let (Some(start), Some(row)) = (break_opened.take(), current.as_mut()) {
                        row.break_minutes += (r.resolved_at - start).num_minutes();
                    }
                }
                PunchKind::DayOut => {
                    if let Some(mut row) = current.take() {
                        row.closed = r.resolved_str();
                        row.open = false;
                        rows.push(row);
                    }
                }
            }
        }

        if let Some(row) = current.take() {
            rows.push(row);
        }
    }

    rows
}

fn print_shift_rows(rows: &[ShiftRow], title: &str) {
    println!("📊 {}:", title);
    if rows.is_empty() {
        println!("(no shifts)");
        return;
    }

    let mut w_emp = 8usize;
    let mut w_date = 10usize;
    let mut w_open = 19usize;
    let mut w_close = 19usize;
    let mut w_break = 5usize;
    for r in rows {
        w_emp = w_emp.max(r.employee.len());
        w_date = w_date.max(r.date.len());
        w_open = w_open.max(r.opened.len());
        w_close = w_close.max(r.closed.len() + if r.open { 1 } else { 0 });
        w_break = w_break.max(r.break_minutes.to_string().len());
    }

    println!(
        "{:<emp$}  {:<date$}  {:<open$}  {:<close$}  {:>brk$}",
        "Employee",
        "Date",
        "Opened",
        "Closed",
        "Break",
        emp = w_emp,
        date = w_date,
        open = w_open,
        close = w_close,
        brk = w_break
    );
    println!(
        "{}  {}  {}  {}  {}",
        "-".repeat(w_emp),
        "-".repeat(w_date),
        "-".repeat(w_open),
        "-".repeat(w_close),
        "-".repeat(w_break),
    );

    for r in rows {
        let closed = if r.open {
            format!("{}*", r.closed)
        } else {
            r.closed.clone()
        };
        println!(
            "{:<emp$}  {:<date$}  {:<open$}  {:<close$}  {:>brk$}",
            r.employee,
            r.date,
            r.opened,
            closed,
            r.break_minutes,
            emp = w_emp,
            date = w_date,
            open = w_open,
            close = w_close,
            brk = w_break
        );
    }
    println!("\n(* = shift still open)");
}

fn print_punch_table(punches: &[PunchRecord], title: &str) {
    println!("📅 {}:", title);
    println!();

    let mut w_id = 2usize;
    let mut w_emp = 8usize;
    let mut w_date = 10usize;
    let mut w_time = 8usize;
    let mut w_kind = 4usize;
    let mut w_resolved = 19usize;
    let mut w_origin = 6usize;
    for p in punches {
        w_id = w_id.max(p.id.to_string().len());
        w_emp = w_emp.max(p.employee_id.map(|e| e.to_string().len()).unwrap_or(1));
        w_date = w_date.max(p.date_str().len());
        w_time = w_time.max(p.time_str().len());
        w_kind = w_kind.max(p.kind.label().len());
        w_resolved = w_resolved.max(p.resolved_str().len());
        w_origin = w_origin.max(p.origin.to_db_str().len());
    }

    println!(
        "{:<id$}  {:<emp$}  {:<date$}  {:<time$}  {:<kind$}  {:<res$}  {:<org$}",
        "ID",
        "Employee",
        "Date",
        "Time",
        "Kind",
        "Resolved",
        "Origin",
        id = w_id,
        emp = w_emp,
        date = w_date,
        time = w_time,
        kind = w_kind,
        res = w_resolved,
        org = w_origin
    );
    println!(
        "{}  {}  {}  {}  {}  {}  {}",
        "-".repeat(w_id),
        "-".repeat(w_emp),
        "-".repeat(w_date),
        "-".repeat(w_time),
        "-".repeat(w_kind),
        "-".repeat(w_resolved),
        "-".repeat(w_origin),
    );

    for p in punches {
        println!(
            "{:<id$}  {:<emp$}  {:<date$}  {:<time$}  {:<kind$}  {:<res$}  {:<org$}",
            p.id,
            p.employee_id.map(|e| e.to_string()).unwrap_or_else(|| "-".to_string()),
            p.date_str(),
            p.time_str(),
            p.kind.label(),
            p.resolved_str(),
            p.origin.to_db_str(),
            id = w_id,
            emp = w_emp,
            date = w_date,
            time = w_time,
            kind = w_kind,
            res = w_resolved,
            org = w_origin
        );
    }
}
