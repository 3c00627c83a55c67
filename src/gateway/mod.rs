//! Backend gateway for the classroom API
//!
//! Provides a trait seam between the lifecycle/CLI layers and the HTTP
//! transport, so the interesting logic can be tested against a mock.

mod http;
pub(crate) mod wire;

pub use http::HttpGateway;

use crate::error::Result;
use crate::types::{Assignment, Group, NewAssignment, Submission, User};
use async_trait::async_trait;

/// Gateway trait for the classroom backend
///
/// Every call acts as the user whose credential the gateway was built
/// with; authorization is enforced by the backend. Implementations must
/// only return fully populated values (see [`wire`]); callers never
/// null-check.
#[async_trait]
pub trait ClassroomGateway: Send + Sync {
    /// Who the configured credential belongs to
    async fn current_user(&self) -> Result<User>;

    /// All assignments visible to the acting user
    async fn list_assignments(&self) -> Result<Vec<Assignment>>;

    /// Post a new assignment (professor role)
    async fn create_assignment(&self, new_assignment: &NewAssignment) -> Result<Assignment>;

    /// All groups visible to the acting user, with members
    async fn list_groups(&self) -> Result<Vec<Group>>;

    /// Create a group owned by the acting user
    async fn create_group(&self, name: &str, description: Option<&str>) -> Result<Group>;

    /// Add a member to a group by email (group creator only)
    async fn add_group_member(&self, group_id: &str, email: &str) -> Result<()>;

    /// Submissions belonging to one group
    async fn list_group_submissions(&self, group_id: &str) -> Result<Vec<Submission>>;

    /// All submissions (professor role)
    async fn list_all_submissions(&self) -> Result<Vec<Submission>>;

    /// Create a submission: {assignment, group, link} -> submitted, step 1
    async fn create_submission(
        &self,
        assignment_id: &str,
        group_id: &str,
        link: &str,
    ) -> Result<Submission>;

    /// Confirm a submission (step 2); the backend applies this atomically
    /// and rejects a second confirmation
    async fn confirm_submission(&self, submission_id: &str) -> Result<()>;
}
