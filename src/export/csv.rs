use super::model::{PunchExport, get_headers};
use csv::Writer;

/// Write punch rows as CSV to the given file.
pub fn write_csv(path: &str, punches: &[PunchExport]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;

    for p in punches {
        wtr.write_record(&[
            p.id.to_string(),
            p.shop_id.to_string(),
            p.employee_id.map(|e| e.to_string()).unwrap_or_default(),
            p.date.clone(),
            p.time.clone(),
            p.resolved_at.clone(),
            p.kind.clone(),
            p.comment.clone(),
            p.origin.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
