//! Mock gateway for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use classtrack::error::{Error, Result};
use classtrack::gateway::ClassroomGateway;
use classtrack::types::{
    Assignment, Group, NewAssignment, Role, Submission, SubmissionStatus, User,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Call record for `create_submission`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSubmissionCall {
    pub assignment_id: String,
    pub group_id: String,
    pub link: String,
}

/// Simple in-memory mock of the classroom backend
///
/// Manually implements `ClassroomGateway` rather than using a mocking
/// crate, mirroring how the backend behaves: creates land as
/// submitted/step 1, confirm is applied atomically and a second
/// confirmation is rejected.
///
/// Features:
/// - Preloadable assignments, groups and submissions
/// - Auto-incrementing submission ids
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockGateway {
    user: Mutex<User>,
    assignments: Mutex<Vec<Assignment>>,
    groups: Mutex<Vec<Group>>,
    submissions: Mutex<Vec<Submission>>,
    next_submission_id: AtomicU64,
    // Call tracking
    create_submission_calls: Mutex<Vec<CreateSubmissionCall>>,
    confirm_calls: Mutex<Vec<String>>,
    // Error injection
    error_on_list_assignments: Mutex<Option<String>>,
    error_on_list_groups: Mutex<Option<String>>,
    error_on_list_all_submissions: Mutex<Option<String>>,
    error_on_create_submission: Mutex<Option<String>>,
    error_on_confirm: Mutex<Option<String>>,
}

impl MockGateway {
    /// Create an empty mock acting as a student
    pub fn new() -> Self {
        Self {
            user: Mutex::new(User {
                id: "u1".to_string(),
                name: "Avery Lee".to_string(),
                email: "avery@example.com".to_string(),
                role: Role::Student,
            }),
            assignments: Mutex::new(Vec::new()),
            groups: Mutex::new(Vec::new()),
            submissions: Mutex::new(Vec::new()),
            next_submission_id: AtomicU64::new(1),
            create_submission_calls: Mutex::new(Vec::new()),
            confirm_calls: Mutex::new(Vec::new()),
            error_on_list_assignments: Mutex::new(None),
            error_on_list_groups: Mutex::new(None),
            error_on_list_all_submissions: Mutex::new(None),
            error_on_create_submission: Mutex::new(None),
            error_on_confirm: Mutex::new(None),
        }
    }

    // === Preloading ===

    pub fn set_user(&self, user: User) {
        *self.user.lock().unwrap() = user;
    }

    pub fn add_assignment(&self, assignment: Assignment) {
        self.assignments.lock().unwrap().push(assignment);
    }

    pub fn add_group(&self, group: Group) {
        self.groups.lock().unwrap().push(group);
    }

    pub fn add_submission(&self, submission: Submission) {
        self.submissions.lock().unwrap().push(submission);
    }

    /// Snapshot of the stored submissions
    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().unwrap().clone()
    }

    // === Error injection ===

    pub fn fail_list_assignments(&self, msg: &str) {
        *self.error_on_list_assignments.lock().unwrap() = Some(msg.to_string());
    }

    pub fn fail_list_groups(&self, msg: &str) {
        *self.error_on_list_groups.lock().unwrap() = Some(msg.to_string());
    }

    pub fn fail_list_all_submissions(&self, msg: &str) {
        *self.error_on_list_all_submissions.lock().unwrap() = Some(msg.to_string());
    }

    pub fn fail_create_submission(&self, msg: &str) {
        *self.error_on_create_submission.lock().unwrap() = Some(msg.to_string());
    }

    pub fn fail_confirm(&self, msg: &str) {
        *self.error_on_confirm.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification ===

    pub fn create_submission_calls(&self) -> Vec<CreateSubmissionCall> {
        self.create_submission_calls.lock().unwrap().clone()
    }

    pub fn confirm_calls(&self) -> Vec<String> {
        self.confirm_calls.lock().unwrap().clone()
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClassroomGateway for MockGateway {
    async fn current_user(&self) -> Result<User> {
        Ok(self.user.lock().unwrap().clone())
    }

    async fn list_assignments(&self) -> Result<Vec<Assignment>> {
        if let Some(msg) = self.error_on_list_assignments.lock().unwrap().as_ref() {
            return Err(Error::Api(msg.clone()));
        }
        Ok(self.assignments.lock().unwrap().clone())
    }

    async fn create_assignment(&self, new_assignment: &NewAssignment) -> Result<Assignment> {
        let assignment = Assignment {
            id: format!("a{}", self.assignments.lock().unwrap().len() + 1),
            title: new_assignment.title.clone(),
            description: new_assignment.description.clone(),
            due_date: new_assignment.due_date,
            link: new_assignment.link.clone(),
            created_by: self.user.lock().unwrap().id.clone(),
            audience: new_assignment.audience.clone(),
        };
        self.assignments.lock().unwrap().push(assignment.clone());
        Ok(assignment)
    }

    async fn list_groups(&self) -> Result<Vec<Group>> {
        if let Some(msg) = self.error_on_list_groups.lock().unwrap().as_ref() {
            return Err(Error::Api(msg.clone()));
        }
        Ok(self.groups.lock().unwrap().clone())
    }

    async fn create_group(&self, name: &str, description: Option<&str>) -> Result<Group> {
        let group = Group {
            id: format!("g{}", self.groups.lock().unwrap().len() + 1),
            name: name.to_string(),
            description: description.map(ToString::to_string),
            created_by: self.user.lock().unwrap().id.clone(),
            members: Vec::new(),
        };
        self.groups.lock().unwrap().push(group.clone());
        Ok(group)
    }

    async fn add_group_member(&self, group_id: &str, _email: &str) -> Result<()> {
        let groups = self.groups.lock().unwrap();
        if groups.iter().any(|g| g.id == group_id) {
            Ok(())
        } else {
            Err(Error::NotFound(format!("group {group_id}")))
        }
    }

    async fn list_group_submissions(&self, group_id: &str) -> Result<Vec<Submission>> {
        Ok(self
            .submissions
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.group_id == group_id)
            .cloned()
            .collect())
    }

    async fn list_all_submissions(&self) -> Result<Vec<Submission>> {
        if let Some(msg) = self.error_on_list_all_submissions.lock().unwrap().as_ref() {
            return Err(Error::Api(msg.clone()));
        }
        Ok(self.submissions.lock().unwrap().clone())
    }

    async fn create_submission(
        &self,
        assignment_id: &str,
        group_id: &str,
        link: &str,
    ) -> Result<Submission> {
        self.create_submission_calls
            .lock()
            .unwrap()
            .push(CreateSubmissionCall {
                assignment_id: assignment_id.to_string(),
                group_id: group_id.to_string(),
                link: link.to_string(),
            });

        if let Some(msg) = self.error_on_create_submission.lock().unwrap().as_ref() {
            return Err(Error::Api(msg.clone()));
        }

        let number = self.next_submission_id.fetch_add(1, Ordering::SeqCst);
        let title = self
            .assignments
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == assignment_id)
            .map_or_else(|| assignment_id.to_string(), |a| a.title.clone());

        let submission = Submission {
            id: format!("s{number}"),
            assignment_id: assignment_id.to_string(),
            assignment_title: title,
            group_id: group_id.to_string(),
            submitted_by: self.user.lock().unwrap().name.clone(),
            link: link.to_string(),
            status: SubmissionStatus::Submitted,
            confirmation_step: 1,
            submitted_at: Utc::now(),
            confirmed_at: None,
        };
        self.submissions.lock().unwrap().push(submission.clone());
        Ok(submission)
    }

    async fn confirm_submission(&self, submission_id: &str) -> Result<()> {
        self.confirm_calls
            .lock()
            .unwrap()
            .push(submission_id.to_string());

        if let Some(msg) = self.error_on_confirm.lock().unwrap().as_ref() {
            return Err(Error::Api(msg.clone()));
        }

        let mut submissions = self.submissions.lock().unwrap();
        let submission = submissions
            .iter_mut()
            .find(|s| s.id == submission_id)
            .ok_or_else(|| Error::NotFound(format!("submission {submission_id}")))?;

        // Applied atomically; a second confirmation is rejected
        if submission.status != SubmissionStatus::Submitted {
            return Err(Error::InvalidState(format!(
                "submission {submission_id} is {}",
                submission.status
            )));
        }
        submission.status = SubmissionStatus::Confirmed;
        submission.confirmation_step = 2;
        submission.confirmed_at = Some(Utc::now());
        Ok(())
    }
}
