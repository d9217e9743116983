//! Schedule checks on phases

use chrono::NaiveDate;

use crate::contract::Phase;

/// Non-fatal notice that a phase finished before its planned end date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EarlyCompletion {
    pub phase_id: Option<i64>,
    pub planned_end_date: NaiveDate,
    pub actual_end_date: NaiveDate,
}

impl EarlyCompletion {
    /// Whole days between the actual and the planned end
    pub fn days_ahead(&self) -> i64 {
        (self.planned_end_date - self.actual_end_date).num_days()
    }
}

/// Returns a notice when both end dates are set and the actual one is
/// strictly before the planned one.
pub fn early_completion(phase: &Phase) -> Option<EarlyCompletion> {
    match (phase.planned_end_date, phase.actual_end_date) {
        (Some(planned), Some(actual)) if actual < planned => Some(EarlyCompletion {
            phase_id: phase.id,
            planned_end_date: planned,
            actual_end_date: actual,
        }),
        _ => None,
    }
}
