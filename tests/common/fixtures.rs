//! Test data factories for classtrack types
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use chrono::{Duration, Utc};
use classtrack::types::{
    Assignment, Audience, Group, GroupMember, Role, Submission, SubmissionStatus, User,
};

/// Create a user with default values
pub fn make_user(id: &str, name: &str, role: Role) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{id}@example.com"),
        role,
    }
}

/// Create a group member with no student id
pub fn make_member(name: &str) -> GroupMember {
    GroupMember {
        name: name.to_string(),
        student_id: None,
    }
}

/// Create a group with two members, owned by "u1"
pub fn make_group(id: &str, name: &str) -> Group {
    Group {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        created_by: "u1".to_string(),
        members: vec![make_member("Avery Lee"), make_member("Sam Park")],
    }
}

/// Create an assignment due a week from now
pub fn make_assignment(id: &str, title: &str, audience: Audience) -> Assignment {
    Assignment {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("Description of {title}"),
        due_date: Utc::now() + Duration::days(7),
        link: None,
        created_by: "p1".to_string(),
        audience,
    }
}

/// Create an assignment whose due date has already passed
pub fn make_overdue_assignment(id: &str, title: &str) -> Assignment {
    Assignment {
        due_date: Utc::now() - Duration::days(1),
        ..make_assignment(id, title, Audience::All)
    }
}

/// Create a submission in the given state, step kept in lock-step
pub fn make_submission(
    id: &str,
    assignment_id: &str,
    group_id: &str,
    status: SubmissionStatus,
) -> Submission {
    Submission {
        id: id.to_string(),
        assignment_id: assignment_id.to_string(),
        assignment_title: format!("Assignment {assignment_id}"),
        group_id: group_id.to_string(),
        submitted_by: "Avery Lee".to_string(),
        link: "https://example.com/work".to_string(),
        status,
        confirmation_step: status.step(),
        submitted_at: Utc::now() - Duration::hours(1),
        confirmed_at: match status {
            SubmissionStatus::Confirmed => Some(Utc::now()),
            _ => None,
        },
    }
}
