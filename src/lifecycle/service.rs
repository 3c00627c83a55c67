//! Lifecycle commands over the backend gateway
//!
//! Each operation is a single logical round trip: validate locally, issue
//! the command, read the authoritative result back. On failure the prior
//! state is untouched; callers re-fetch rather than trusting a locally
//! advanced state.

use crate::error::{Error, Result};
use crate::gateway::ClassroomGateway;
use crate::lifecycle::validate::{ensure_eligible, ensure_not_duplicate, validate_link};
use crate::types::{Role, Submission, SubmissionStatus};
use tracing::warn;

/// Submit a link for an assignment as a group (step 1 of 2)
///
/// Preconditions checked before the round trip: the link is a valid
/// http(s) URL, the assignment exists, the group is in its audience, and
/// the pair has no submission yet. The due date is deliberately not
/// checked; late submissions are accepted.
pub async fn submit_assignment(
    gateway: &dyn ClassroomGateway,
    assignment_id: &str,
    group_id: &str,
    link: &str,
) -> Result<Submission> {
    let link = validate_link(link)?;

    let assignments = gateway.list_assignments().await?;
    let assignment = assignments
        .iter()
        .find(|a| a.id == assignment_id)
        .ok_or_else(|| Error::NotFound(format!("assignment {assignment_id}")))?;
    ensure_eligible(assignment, group_id)?;

    let existing = gateway.list_group_submissions(group_id).await?;
    ensure_not_duplicate(&existing, assignment_id, group_id)?;

    let submission = gateway
        .create_submission(assignment_id, group_id, link.as_str())
        .await?;

    // A fresh submission is always submitted/step 1, never confirmed
    if submission.status != SubmissionStatus::Submitted {
        return Err(Error::Api(format!(
            "new submission {} is {}, expected submitted",
            submission.id, submission.status
        )));
    }
    Ok(submission)
}

/// Confirm a submission (step 2 of 2)
///
/// The submission must exist in the group and currently be `submitted`.
/// Confirming an already-confirmed submission fails with
/// [`Error::InvalidState`]; it is never silently re-applied. The updated
/// record is read back from the backend.
pub async fn confirm_submission(
    gateway: &dyn ClassroomGateway,
    group_id: &str,
    submission_id: &str,
) -> Result<Submission> {
    let submissions = gateway.list_group_submissions(group_id).await?;
    let current = submissions
        .into_iter()
        .find(|s| s.id == submission_id)
        .ok_or_else(|| Error::NotFound(format!("submission {submission_id}")))?;

    match current.status {
        SubmissionStatus::Submitted => {}
        SubmissionStatus::Confirmed => {
            return Err(Error::InvalidState(format!(
                "submission {submission_id} is already confirmed"
            )));
        }
        SubmissionStatus::Pending => {
            return Err(Error::InvalidState(format!(
                "submission {submission_id} has not been submitted"
            )));
        }
    }

    gateway.confirm_submission(submission_id).await?;

    // Read the result back instead of advancing the step locally
    let refreshed = gateway.list_group_submissions(group_id).await?;
    let confirmed = refreshed
        .into_iter()
        .find(|s| s.id == submission_id)
        .ok_or_else(|| Error::NotFound(format!("submission {submission_id}")))?;

    if confirmed.status != SubmissionStatus::Confirmed {
        return Err(Error::Api(format!(
            "submission {submission_id} did not advance to confirmed"
        )));
    }
    Ok(confirmed)
}

/// Dashboard counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardCounts {
    /// Groups visible to the acting user
    pub groups: usize,
    /// Assignments visible to the acting user
    pub assignments: usize,
    /// All submissions (professors only; zero for students)
    pub submissions: usize,
}

/// Gather dashboard counters
///
/// These fetches are auxiliary: a failure degrades that counter to zero
/// with a logged warning instead of blocking the page.
pub async fn dashboard_counts(gateway: &dyn ClassroomGateway, role: Role) -> DashboardCounts {
    let groups = match gateway.list_groups().await {
        Ok(groups) => groups.len(),
        Err(e) => {
            warn!("groups fetch failed, counting zero: {e}");
            0
        }
    };

    let assignments = match gateway.list_assignments().await {
        Ok(assignments) => assignments.len(),
        Err(e) => {
            warn!("assignments fetch failed, counting zero: {e}");
            0
        }
    };

    let submissions = if role == Role::Professor {
        match gateway.list_all_submissions().await {
            Ok(submissions) => submissions.len(),
            Err(e) => {
                warn!("submissions fetch failed, counting zero: {e}");
                0
            }
        }
    } else {
        0
    };

    DashboardCounts {
        groups,
        assignments,
        submissions,
    }
}
