use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::punch::PunchLogic;
use crate::core::validate::Rejection;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::punch::{Origin, PunchCandidate};
use crate::models::punch_kind::PunchKind;
use crate::models::shift::Shift;
use crate::ui::messages::success;
use crate::utils::{date, time};

/// Validate and record a punch.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch {
        shop_id,
        date: date_str,
        time: time_str,
        kind: kind_str,
        employee,
        comment,
        origin,
        shift_start,
        shift_end,
        buffer,
    } = cmd
    {
        //
        // 1. Parse candidate fields
        //
        let d = date::parse_date(date_str)?;
        let t = time::parse_time(time_str)?;

        let kind = PunchKind::from_cli_str(kind_str)
            .ok_or_else(|| AppError::from(Rejection::InvalidKind(kind_str.clone())))?;

        let origin = match origin.to_lowercase().as_str() {
            "api" => Origin::Api,
            "web" => Origin::Web,
            other => return Err(AppError::InvalidOrigin(other.to_string())),
        };

        //
        // 2. Resolve shift: per-invocation overrides win over config
        //
        let base = cfg.default_shift()?;
        let shift = Shift::new(
            match shift_start {
                Some(s) => time::parse_time(s)?,
                None => base.start,
            },
            match shift_end {
                Some(s) => time::parse_time(s)?,
                None => base.end,
            },
            buffer.unwrap_or(base.buffer_hours),
        );

        let candidate = PunchCandidate {
            shop_id: *shop_id,
            employee_id: *employee,
            date: d,
            time: t,
            kind,
            comment: comment.clone(),
            origin,
        };

        //
        // 3. Open DB and run the validate-and-record flow
        //
        let mut pool = DbPool::new(&cfg.database)?;

        let record = PunchLogic::apply(&mut pool, &candidate, &shift)?;

        if record.resolved_at.date() != record.date_at {
            success(format!(
                "{} recorded for shop {} on {} at {} (resolves to {}).",
                record.kind.label(),
                record.shop_id,
                record.date_str(),
                record.time_str(),
                record.resolved_str(),
            ));
        } else {
            success(format!(
                "{} recorded for shop {} on {} at {}.",
                record.kind.label(),
                record.shop_id,
                record.date_str(),
                record.time_str(),
            ));
        }

        // Audit entry (non-blocking)
        if let Err(e) = log::audit(
            &pool.conn,
            "punch",
            record.kind.to_db_str(),
            &format!(
                "shop={} employee={:?} date={} time={} resolved={}",
                record.shop_id,
                record.employee_id,
                record.date_str(),
                record.time_str(),
                record.resolved_str(),
            ),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }
    }

    Ok(())
}
