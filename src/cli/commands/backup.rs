use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{error, success};
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// Plain file copy of the database.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file } = cmd {
        let src = Path::new(&cfg.database);
        let dest = Path::new(file);

        if !src.exists() {
            error(format!("Source database not found at {:?}", src));
            return Ok(());
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        if let Ok(conn) = Connection::open(src) {
            let _ = log::audit(
                &conn,
                "backup",
                &dest.to_string_lossy(),
                "Database backup created",
            );
        }
    }

    Ok(())
}
