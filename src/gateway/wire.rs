//! Wire format and normalization
//!
//! Raw payloads mirror the backend JSON: camelCase fields and Mongo-style
//! `_id` identifiers, with references that arrive either as bare ids or as
//! populated objects. Normalization is the single place those
//! inconsistencies are handled; every value handed to the rest of the
//! crate is fully populated, or the call fails. In particular the
//! status/step lock-step invariant is enforced here, so the lifecycle code
//! never needs defensive checks.

use crate::error::{Error, Result};
use crate::types::{
    Assignment, Audience, Group, GroupMember, Role, Submission, SubmissionStatus, User,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reference field that may be a bare id or a populated object
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawRef {
    /// Unpopulated: just the id
    Id(String),
    /// Populated sub-document
    Object(RawRefObject),
}

/// The populated form of a reference
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawRefObject {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

impl RawRef {
    pub(crate) fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Object(obj) => &obj.id,
        }
    }

    /// Display label: name or title when populated, the id otherwise
    pub(crate) fn label(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Object(obj) => obj
                .name
                .as_deref()
                .or(obj.title.as_deref())
                .unwrap_or(&obj.id),
        }
    }
}

/// Account payload, as returned by login/register/me
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawUser {
    #[serde(rename = "_id", alias = "id")]
    id: String,
    name: String,
    email: String,
    role: Role,
}

impl RawUser {
    pub(crate) fn into_user(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
        }
    }
}

/// Login/register response body
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawAuthResponse {
    pub(crate) token: String,
    pub(crate) user: RawUser,
}

/// Error body the backend attaches to non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiMessage {
    #[serde(default)]
    pub(crate) message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawMember {
    name: String,
    #[serde(rename = "studentId", default)]
    student_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawGroup {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    #[serde(default)]
    description: Option<String>,
    created_by: Option<RawRef>,
    members: Option<Vec<RawMember>>,
}

pub(crate) fn normalize_group(raw: RawGroup) -> Result<Group> {
    let created_by = raw
        .created_by
        .ok_or_else(|| Error::NotFound(format!("creator of group {}", raw.id)))?;
    let members = raw
        .members
        .ok_or_else(|| Error::Decode(format!("group {} has no member list", raw.id)))?;

    Ok(Group {
        id: raw.id,
        name: raw.name,
        description: raw.description.filter(|d| !d.is_empty()),
        created_by: created_by.id().to_string(),
        members: members
            .into_iter()
            .map(|m| GroupMember {
                name: m.name,
                student_id: m.student_id.filter(|s| !s.is_empty()),
            })
            .collect(),
    })
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawAssignment {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    due_date: DateTime<Utc>,
    #[serde(default)]
    link: Option<String>,
    created_by: Option<RawRef>,
    assigned_to: String,
    #[serde(default)]
    assigned_groups: Vec<RawRef>,
}

pub(crate) fn normalize_assignment(raw: RawAssignment) -> Result<Assignment> {
    let created_by = raw
        .created_by
        .ok_or_else(|| Error::NotFound(format!("creator of assignment {}", raw.id)))?;

    let audience = match raw.assigned_to.as_str() {
        "all" => Audience::All,
        "specific" => Audience::Groups(
            raw.assigned_groups
                .iter()
                .map(|g| g.id().to_string())
                .collect(),
        ),
        other => {
            return Err(Error::Decode(format!(
                "assignment {}: unknown audience kind \"{other}\"",
                raw.id
            )));
        }
    };

    Ok(Assignment {
        id: raw.id,
        title: raw.title,
        description: raw.description.unwrap_or_default(),
        due_date: raw.due_date,
        link: raw.link.filter(|l| !l.is_empty()),
        created_by: created_by.id().to_string(),
        audience,
    })
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSubmission {
    #[serde(rename = "_id")]
    id: String,
    #[serde(alias = "assignmentId")]
    assignment: Option<RawRef>,
    #[serde(alias = "groupId")]
    group: Option<RawRef>,
    submitted_by: Option<RawRef>,
    submission_link: Option<String>,
    status: SubmissionStatus,
    confirmation_step: u8,
    submitted_at: DateTime<Utc>,
    #[serde(default)]
    confirmed_at: Option<DateTime<Utc>>,
}

pub(crate) fn normalize_submission(raw: RawSubmission) -> Result<Submission> {
    let assignment = raw
        .assignment
        .ok_or_else(|| Error::NotFound(format!("assignment of submission {}", raw.id)))?;
    let group = raw
        .group
        .ok_or_else(|| Error::NotFound(format!("group of submission {}", raw.id)))?;
    let submitted_by = raw
        .submitted_by
        .ok_or_else(|| Error::NotFound(format!("submitter of submission {}", raw.id)))?;
    let link = raw
        .submission_link
        .filter(|l| !l.is_empty())
        .ok_or_else(|| Error::Decode(format!("submission {} has no link", raw.id)))?;

    // A persisted record in `pending` would mean it was created without a
    // submit action; reject it along with any status/step disagreement.
    if raw.status == SubmissionStatus::Pending {
        return Err(Error::Decode(format!(
            "submission {} is persisted in pending state",
            raw.id
        )));
    }
    if raw.status.step() != raw.confirmation_step {
        return Err(Error::Decode(format!(
            "submission {}: status {} does not match step {}",
            raw.id, raw.status, raw.confirmation_step
        )));
    }
    if raw.status == SubmissionStatus::Confirmed && raw.confirmed_at.is_none() {
        return Err(Error::Decode(format!(
            "submission {} is confirmed but has no confirmation time",
            raw.id
        )));
    }

    Ok(Submission {
        id: raw.id,
        assignment_id: assignment.id().to_string(),
        assignment_title: assignment.label().to_string(),
        group_id: group.id().to_string(),
        submitted_by: submitted_by.label().to_string(),
        link,
        status: raw.status,
        confirmation_step: raw.confirmation_step,
        submitted_at: raw.submitted_at,
        confirmed_at: raw.confirmed_at,
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateSubmissionPayload<'a> {
    pub(crate) assignment_id: &'a str,
    pub(crate) group_id: &'a str,
    pub(crate) submission_link: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateAssignmentPayload<'a> {
    pub(crate) title: &'a str,
    pub(crate) description: &'a str,
    pub(crate) due_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) link: Option<&'a str>,
    pub(crate) assigned_to: &'static str,
    pub(crate) assigned_groups: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateGroupPayload<'a> {
    pub(crate) name: &'a str,
    pub(crate) description: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct AddMemberPayload<'a> {
    pub(crate) email: &'a str,
}
