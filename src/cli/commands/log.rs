use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Print rows from the internal `log` table when requested.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::new(&cfg.database)?;
        let rows = load_log(&pool.conn)?;

        println!("📜 Internal log:");
        for (id, date, operation, target, message) in rows {
            if target.is_empty() {
                println!("{:>3}: {} | {} | {}", id, date, operation, message);
            } else {
                println!("{:>3}: {} | {} ({}) | {}", id, date, operation, target, message);
            }
        }
    }
    Ok(())
}
