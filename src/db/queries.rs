use crate::errors::{AppError, AppResult};
use crate::models::day_events::DayEventSet;
use crate::models::punch::{Origin, PunchRecord};
use crate::models::punch_kind::PunchKind;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rusqlite::{Connection, Result, Row, params};

/// Load the full bucket snapshot for (shop, employee, date).
///
/// Rows come back ordered by raw `time_at`; `DayEventSet::new` re-sorts by
/// `resolved_at`, which is what every consumer must order by across
/// midnight rollover.
pub fn load_day_events(
    conn: &Connection,
    shop_id: i64,
    employee_id: Option<i64>,
    date: &NaiveDate,
) -> AppResult<DayEventSet> {
    let mut stmt = conn.prepare(
        "SELECT * FROM punches
         WHERE shop_id = ?1 AND employee_id IS ?2 AND date_at = ?3
         ORDER BY time_at ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();

    let rows = stmt.query_map(params![shop_id, employee_id, date_str], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(DayEventSet::new(out))
}

pub fn map_row(row: &Row) -> Result<PunchRecord> {
    let date_str: String = row.get("date_at")?;
    let time_str: String = row.get("time_at")?;
    let resolved_str: String = row.get("resolved_at")?;

    let date_at = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let time_at = NaiveTime::parse_from_str(&time_str, "%H:%M:%S").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(time_str.clone())),
        )
    })?;

    let resolved_at =
        NaiveDateTime::parse_from_str(&resolved_str, "%Y-%m-%d %H:%M:%S").map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidDate(resolved_str.clone())),
            )
        })?;

    let shift_start_str: String = row.get("shift_start")?;
    let shift_start = NaiveTime::parse_from_str(&shift_start_str, "%H:%M:%S").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(shift_start_str.clone())),
        )
    })?;

    let shift_end_str: String = row.get("shift_end")?;
    let shift_end = NaiveTime::parse_from_str(&shift_end_str, "%H:%M:%S").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTime(shift_end_str.clone())),
        )
    })?;

    let kind_str: String = row.get("kind")?;
    let kind = PunchKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Other(format!("Invalid kind: {}", kind_str))),
        )
    })?;

    let origin_str: String = row.get("origin")?;
    let origin = Origin::from_db_str(&origin_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidOrigin(origin_str.clone())),
        )
    })?;

    Ok(PunchRecord {
        id: row.get("id")?,
        shop_id: row.get("shop_id")?,
        employee_id: row.get("employee_id")?,
        date_at,
        time_at,
        resolved_at,
        shift_start,
        shift_end,
        buffer_hours: row.get("buffer_hours")?,
        kind,
        comment: row.get::<_, Option<String>>("comment")?.unwrap_or_default(),
        origin,
        created_at: row.get("created_at")?,
    })
}

/// Insert an accepted punch and return the assigned row id.
///
/// A hit on the dedup unique index means a concurrent submission won the
/// race between our snapshot read and this insert; surface it as the same
/// `DuplicatePunch` rejection the validator would have produced.
pub fn insert_punch(conn: &Connection, punch: &PunchRecord) -> AppResult<i64> {
    let inserted = conn.execute(
        "INSERT INTO punches (shop_id, employee_id, date_at, time_at, resolved_at,
                              shift_start, shift_end, buffer_hours, kind, comment, origin, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            punch.shop_id,
            punch.employee_id,
            punch.date_str(),
            punch.time_str(),
            punch.resolved_str(),
            punch.shift_start.format("%H:%M:%S").to_string(),
            punch.shift_end.format("%H:%M:%S").to_string(),
            punch.buffer_hours,
            punch.kind.to_db_str(),
            punch.comment,
            punch.origin.to_db_str(),
            punch.created_at,
        ],
    );

    match inserted {
        Ok(_) => Ok(conn.last_insert_rowid()),
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Err(AppError::Rejected {
                rejection: crate::core::validate::Rejection::DuplicatePunch {
                    kind: punch.kind,
                    date: punch.date_at,
                    time: punch.time_at,
                },
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// List punches for a shop, optionally narrowed to one employee and/or a
/// period prefix (`YYYY`, `YYYY-MM` or `YYYY-MM-DD`).
pub fn list_punches(
    conn: &Connection,
    shop_id: i64,
    employee_id: Option<i64>,
    period: Option<&str>,
) -> AppResult<Vec<PunchRecord>> {
    // Placeholders are appended together with their values, so the
    // parameter list always matches the statement.
    let mut sql = String::from("SELECT * FROM punches WHERE shop_id = ?");
    let period_like = period.map(|p| p.to_string());

    let mut args: Vec<&dyn rusqlite::ToSql> = vec![&shop_id];
    if let Some(emp) = employee_id.as_ref() {
        sql.push_str(" AND employee_id = ?");
        args.push(emp);
    }
    if let Some(p) = period_like.as_ref() {
        sql.push_str(" AND date_at LIKE ? || '%'");
        args.push(p);
    }
    sql.push_str(" ORDER BY date_at ASC, resolved_at ASC, id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(args), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Punches for a shop between two dates inclusive (export support).
pub fn punches_in_range(
    conn: &Connection,
    shop_id: i64,
    employee_id: Option<i64>,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<PunchRecord>> {
    let mut sql =
        String::from("SELECT * FROM punches WHERE shop_id = ? AND date_at BETWEEN ? AND ?");
    let from_str = from.format("%Y-%m-%d").to_string();
    let to_str = to.format("%Y-%m-%d").to_string();

    let mut args: Vec<&dyn rusqlite::ToSql> = vec![&shop_id, &from_str, &to_str];
    if let Some(emp) = employee_id.as_ref() {
        sql.push_str(" AND employee_id = ?");
        args.push(emp);
    }
    sql.push_str(" ORDER BY date_at ASC, resolved_at ASC, id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(args), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn delete_punch(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM punches WHERE id = ?1", [id])?;
    Ok(n)
}

pub fn delete_punches_by_bucket(
    conn: &Connection,
    shop_id: i64,
    employee_id: Option<i64>,
    date: &NaiveDate,
) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM punches WHERE shop_id = ?1 AND employee_id IS ?2 AND date_at = ?3",
        params![shop_id, employee_id, date.format("%Y-%m-%d").to_string()],
    )?;
    Ok(n)
}

pub fn count_punches_by_bucket(
    conn: &Connection,
    shop_id: i64,
    employee_id: Option<i64>,
    date: &NaiveDate,
) -> AppResult<i64> {
    let n = conn.query_row(
        "SELECT COUNT(*) FROM punches WHERE shop_id = ?1 AND employee_id IS ?2 AND date_at = ?3",
        params![shop_id, employee_id, date.format("%Y-%m-%d").to_string()],
        |row| row.get(0),
    )?;
    Ok(n)
}
