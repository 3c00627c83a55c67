//! Core types for classtrack

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role, as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Joins groups and submits assignments
    Student,
    /// Posts assignments and reviews submissions
    Professor,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => write!(f, "student"),
            Self::Professor => write!(f, "professor"),
        }
    }
}

/// An authenticated account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Account role
    pub role: Role,
}

/// A member of a group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupMember {
    /// Display name
    pub name: String,
    /// Optional institutional student number
    pub student_id: Option<String>,
}

/// A named collection of students collaborating on assignments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Backend identifier
    pub id: String,
    /// Group name
    pub name: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Id of the user who created the group
    pub created_by: String,
    /// Members, in the order the backend reports them
    pub members: Vec<GroupMember>,
}

/// Which groups an assignment is addressed to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Audience {
    /// Every group may submit
    All,
    /// Only the listed group ids may submit
    Groups(Vec<String>),
}

impl Audience {
    /// Whether the given group may submit for an assignment with this audience
    pub fn includes(&self, group_id: &str) -> bool {
        match self {
            Self::All => true,
            Self::Groups(ids) => ids.iter().any(|id| id == group_id),
        }
    }
}

/// A unit of work posted by a professor
///
/// Immutable once created; there is no edit operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Backend identifier
    pub id: String,
    /// Title shown to students
    pub title: String,
    /// Task description
    pub description: String,
    /// Due timestamp (UTC); late submissions are still accepted
    pub due_date: DateTime<Utc>,
    /// Optional external resource link (brief, starter repo, ...)
    pub link: Option<String>,
    /// Id of the professor who posted it
    pub created_by: String,
    /// Groups the assignment is addressed to
    pub audience: Audience,
}

/// Lifecycle state of a submission
///
/// Kept in lock-step with the confirmation step counter:
/// `pending` -> 0, `submitted` -> 1, `confirmed` -> 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// No record exists yet (notional initial state)
    Pending,
    /// Created with a resource link, awaiting confirmation
    Submitted,
    /// Confirmed; terminal
    Confirmed,
}

impl SubmissionStatus {
    /// Confirmation step this status corresponds to
    pub const fn step(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Submitted => 1,
            Self::Confirmed => 2,
        }
    }

    /// Status corresponding to a confirmation step counter
    pub const fn from_step(step: u8) -> Option<Self> {
        match step {
            0 => Some(Self::Pending),
            1 => Some(Self::Submitted),
            2 => Some(Self::Confirmed),
            _ => None,
        }
    }

    /// Whether no further transition is possible
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Submitted => write!(f, "submitted"),
            Self::Confirmed => write!(f, "confirmed"),
        }
    }
}

/// A group's declared completion of an assignment
///
/// Created in `submitted` state with a mandatory link, advanced exactly
/// once by a confirm action. One submission per (assignment, group) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Backend identifier
    pub id: String,
    /// Assignment this submission is for
    pub assignment_id: String,
    /// Title of that assignment (for display)
    pub assignment_title: String,
    /// Group that submitted
    pub group_id: String,
    /// Display name of the submitting user
    pub submitted_by: String,
    /// Link to the completed work
    pub link: String,
    /// Lifecycle state
    pub status: SubmissionStatus,
    /// Confirmation step counter (0, 1 or 2), lock-step with `status`
    pub confirmation_step: u8,
    /// When the submission was created
    pub submitted_at: DateTime<Utc>,
    /// When the submission was confirmed, if it has been
    pub confirmed_at: Option<DateTime<Utc>>,
}

/// Input for posting a new assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssignment {
    /// Title shown to students
    pub title: String,
    /// Task description
    pub description: String,
    /// Due timestamp (UTC)
    pub due_date: DateTime<Utc>,
    /// Optional external resource link
    pub link: Option<String>,
    /// Groups the assignment is addressed to
    pub audience: Audience,
}
