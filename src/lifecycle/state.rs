//! Pure helpers over the submission state machine

use crate::types::{Assignment, Submission};
use chrono::{DateTime, Utc};

/// Total number of confirmation steps in the lifecycle
pub const TOTAL_CONFIRMATION_STEPS: u8 = 2;

/// Fraction of the confirmation flow a submission has completed
///
/// 0.0 for step 0 (pending), 0.5 for step 1 (submitted), 1.0 for step 2
/// (confirmed). Used for progress-bar rendering.
pub fn progress_ratio(submission: &Submission) -> f64 {
    f64::from(submission.confirmation_step) / f64::from(TOTAL_CONFIRMATION_STEPS)
}

/// Whether an assignment is past due at `reference_time`
///
/// Strictly after: a submission landing exactly on the due date is on
/// time. Display-only; late submissions are still accepted.
pub fn is_overdue(assignment: &Assignment, reference_time: DateTime<Utc>) -> bool {
    reference_time > assignment.due_date
}
