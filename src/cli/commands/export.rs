use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries::{list_punches, punches_in_range};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, PunchExport, notify_export_success, parse_range};
use crate::export::{csv::write_csv, json::write_json};
use crate::ui::messages::warning;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        shop_id,
        format,
        file,
        employee,
        range,
        force,
    } = cmd
    {
        let dest = Path::new(file);
        if dest.exists() && !force {
            return Err(AppError::Export(format!(
                "{} already exists (use --force to overwrite)",
                dest.display()
            )));
        }

        let pool = DbPool::new(&cfg.database)?;

        let punches = match range {
            Some(r) => {
                let (from, to) = parse_range(r)?;
                punches_in_range(&pool.conn, *shop_id, *employee, &from, &to)?
            }
            None => list_punches(&pool.conn, *shop_id, *employee, None)?,
        };

        if punches.is_empty() {
            warning("No punches to export.");
            return Ok(());
        }

        let rows: Vec<PunchExport> = punches.iter().map(PunchExport::from).collect();

        match format {
            ExportFormat::Csv => {
                write_csv(file, &rows)?;
                notify_export_success("CSV", dest);
            }
            ExportFormat::Json => {
                write_json(file, &rows)?;
                notify_export_success("JSON", dest);
            }
        }

        let _ = log::audit(
            &pool.conn,
            "export",
            file,
            &format!("Exported {} punch(es) for shop {}", rows.len(), shop_id),
        );
    }

    Ok(())
}
