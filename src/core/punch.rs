use super::validate::validate;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_punch, load_day_events};
use crate::errors::AppResult;
use crate::models::punch::{PunchCandidate, PunchRecord};
use crate::models::shift::Shift;
use rusqlite::TransactionBehavior;

/// High-level business logic for the `punch` command.
pub struct PunchLogic;

impl PunchLogic {
    /// Validate and record one punch.
    ///
    /// Snapshot read, decision and insert run inside a single IMMEDIATE
    /// transaction: the validator itself is pure, and the read-decide-write
    /// sequence is not atomic on its own, so the writer lock is what keeps
    /// two concurrent punches for the same bucket from both being accepted
    /// against the same snapshot.
    pub fn apply(
        pool: &mut DbPool,
        candidate: &PunchCandidate,
        shift: &Shift,
    ) -> AppResult<PunchRecord> {
        shift.validate()?;

        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let existing =
            load_day_events(&tx, candidate.shop_id, candidate.employee_id, &candidate.date)?;

        let acceptance = validate(candidate, shift, &existing)?;

        let mut record = PunchRecord::accepted(candidate, shift, acceptance.resolved_at);
        record.id = insert_punch(&tx, &record)?;

        tx.commit()?;

        Ok(record)
    }
}
