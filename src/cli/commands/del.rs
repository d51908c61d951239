use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries::{count_punches_by_bucket, delete_punch, delete_punches_by_bucket};
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success, warning};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        shop_id,
        date: date_str,
        employee,
        id,
    } = cmd
    {
        let d = date::parse_date(date_str)?;

        let pool = DbPool::new(&cfg.database)?;

        if let Some(punch_id) = id {
            if !confirm(format!(
                "Are you sure to delete punch {} of shop {} on {}",
                punch_id, shop_id, d
            )) {
                info("Aborted. No rows deleted.");
                return Ok(());
            }

            let rows = delete_punch(&pool.conn, *punch_id)?;
            if rows == 0 {
                warning(format!("Punch {} not found.", punch_id));
                return Ok(());
            }

            success(format!("Deleted punch {} for {}.", punch_id, d));
            let _ = log::audit(
                &pool.conn,
                "del",
                "Delete single punch",
                &format!("shop={} date={} id={}", shop_id, d, punch_id),
            );
        } else {
            let n = count_punches_by_bucket(&pool.conn, *shop_id, *employee, &d)?;
            if n == 0 {
                warning(format!("No punches found for shop {} on {}.", shop_id, d));
                return Ok(());
            }

            if !confirm(format!(
                "Are you sure to delete the {} punch(es) of shop {} on {}",
                n, shop_id, d
            )) {
                info("Aborted. No rows deleted.");
                return Ok(());
            }

            let rows = delete_punches_by_bucket(&pool.conn, *shop_id, *employee, &d)?;
            success(format!("Deleted {} punch(es) for {}.", rows, d));
            let _ = log::audit(
                &pool.conn,
                "del",
                "Delete bucket punches",
                &format!("shop={} employee={:?} date={} rows={}", shop_id, employee, d, rows),
            );
        }
    }

    Ok(())
}
