use crate::models::punch::PunchRecord;
use serde::Serialize;

/// Flat row shape for punch export.
#[derive(Serialize, Clone, Debug)]
pub struct PunchExport {
    pub id: i64,
    pub shop_id: i64,
    pub employee_id: Option<i64>,
    pub date: String,
    pub time: String,
    pub resolved_at: String,
    pub kind: String,
    pub comment: String,
    pub origin: String,
}

impl From<&PunchRecord> for PunchExport {
    fn from(p: &PunchRecord) -> Self {
        Self {
            id: p.id,
            shop_id: p.shop_id,
            employee_id: p.employee_id,
            date: p.date_str(),
            time: p.time_str(),
            resolved_at: p.resolved_str(),
            kind: p.kind.to_db_str().to_string(),
            comment: p.comment.clone(),
            origin: p.origin.to_db_str().to_string(),
        }
    }
}

/// Header for CSV
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "shop_id",
        "employee_id",
        "date",
        "time",
        "resolved_at",
        "kind",
        "comment",
        "origin",
    ]
}
