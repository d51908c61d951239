use super::model::PunchExport;
use crate::errors::{AppError, AppResult};

/// Write punch rows as pretty-printed JSON.
pub fn write_json(path: &str, punches: &[PunchExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(punches)
        .map_err(|e| AppError::Export(format!("JSON serialization failed: {}", e)))?;
    std::fs::write(path, json)?;
    Ok(())
}
