//! HTTP gateway implementation

use crate::auth::Credentials;
use crate::error::{Error, Result};
use crate::gateway::wire::{
    AddMemberPayload, ApiMessage, CreateAssignmentPayload, CreateGroupPayload,
    CreateSubmissionPayload, RawAssignment, RawGroup, RawSubmission, RawUser, normalize_assignment,
    normalize_group, normalize_submission,
};
use crate::gateway::ClassroomGateway;
use crate::types::{Assignment, Audience, Group, NewAssignment, Submission, User};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Backend gateway over HTTP with bearer authentication
///
/// The acting user's credential is injected at construction and attached
/// to every request; nothing is stored in ambient state.
pub struct HttpGateway {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpGateway {
    /// Create a gateway for the given backend, acting as the credential owner
    pub fn new(base_url: impl Into<String>, credentials: &Credentials) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: credentials.token.clone(),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "GET");
        let response = self
            .client
            .get(self.api_url(path))
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::decode(response, path).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        debug!(path, "POST");
        let response = self
            .client
            .post(self.api_url(path))
            .bearer_auth(&self.token)
            .json(body)
            .send()
            .await?;
        Self::decode(response, path).await
    }

    async fn decode<T: DeserializeOwned>(response: Response, path: &str) -> Result<T> {
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| Error::Decode(format!("{path}: {e}")))
    }

    /// Extract the backend's error message, falling back to the status line
    async fn response_message(response: Response) -> String {
        let status = response.status();
        response
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str::<ApiMessage>(&body).ok())
            .and_then(|m| m.message)
            .unwrap_or_else(|| status.to_string())
    }

    /// Map a non-success response onto the error taxonomy
    async fn api_error(response: Response) -> Error {
        let status = response.status();
        let message = Self::response_message(response).await;
        match status {
            StatusCode::UNAUTHORIZED => Error::Auth(message),
            StatusCode::FORBIDDEN => Error::Eligibility(message),
            StatusCode::NOT_FOUND => Error::NotFound(message),
            _ => Error::Api(message),
        }
    }
}

#[async_trait]
impl ClassroomGateway for HttpGateway {
    async fn current_user(&self) -> Result<User> {
        let raw: RawUser = self.get_json("/api/auth/me").await?;
        Ok(raw.into_user())
    }

    async fn list_assignments(&self) -> Result<Vec<Assignment>> {
        let raw: Vec<RawAssignment> = self.get_json("/api/assignments").await?;
        raw.into_iter().map(normalize_assignment).collect()
    }

    async fn create_assignment(&self, new_assignment: &NewAssignment) -> Result<Assignment> {
        let (assigned_to, assigned_groups) = match &new_assignment.audience {
            Audience::All => ("all", Vec::new()),
            Audience::Groups(ids) => ("specific", ids.clone()),
        };
        let payload = CreateAssignmentPayload {
            title: &new_assignment.title,
            description: &new_assignment.description,
            due_date: new_assignment.due_date,
            link: new_assignment.link.as_deref(),
            assigned_to,
            assigned_groups,
        };
        let raw: RawAssignment = self.post_json("/api/assignments", &payload).await?;
        normalize_assignment(raw)
    }

    async fn list_groups(&self) -> Result<Vec<Group>> {
        let raw: Vec<RawGroup> = self.get_json("/api/groups").await?;
        raw.into_iter().map(normalize_group).collect()
    }

    async fn create_group(&self, name: &str, description: Option<&str>) -> Result<Group> {
        let payload = CreateGroupPayload {
            name,
            description: description.unwrap_or_default(),
        };
        let raw: RawGroup = self.post_json("/api/groups", &payload).await?;
        normalize_group(raw)
    }

    async fn add_group_member(&self, group_id: &str, email: &str) -> Result<()> {
        debug!(group_id, "POST member");
        let response = self
            .client
            .post(self.api_url(&format!("/api/groups/{group_id}/members")))
            .bearer_auth(&self.token)
            .json(&AddMemberPayload { email })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Ok(())
    }

    async fn list_group_submissions(&self, group_id: &str) -> Result<Vec<Submission>> {
        let raw: Vec<RawSubmission> = self
            .get_json(&format!("/api/submissions/group/{group_id}"))
            .await?;
        raw.into_iter().map(normalize_submission).collect()
    }

    async fn list_all_submissions(&self) -> Result<Vec<Submission>> {
        let raw: Vec<RawSubmission> = self.get_json("/api/submissions").await?;
        raw.into_iter().map(normalize_submission).collect()
    }

    async fn create_submission(
        &self,
        assignment_id: &str,
        group_id: &str,
        link: &str,
    ) -> Result<Submission> {
        let payload = CreateSubmissionPayload {
            assignment_id,
            group_id,
            submission_link: link,
        };
        debug!(assignment_id, group_id, "POST submission");
        let response = self
            .client
            .post(self.api_url("/api/submissions"))
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await?;

        // The backend guards (assignment, group) uniqueness with a conflict
        if response.status() == StatusCode::CONFLICT {
            return Err(Error::Duplicate(Self::response_message(response).await));
        }
        let raw: RawSubmission = Self::decode(response, "/api/submissions").await?;
        normalize_submission(raw)
    }

    async fn confirm_submission(&self, submission_id: &str) -> Result<()> {
        let path = format!("/api/submissions/{submission_id}/confirm");
        debug!(submission_id, "POST confirm");
        let response = self
            .client
            .post(self.api_url(&path))
            .bearer_auth(&self.token)
            .send()
            .await?;

        // A conflict here means the submission is not in a confirmable state
        if response.status() == StatusCode::CONFLICT {
            return Err(Error::InvalidState(Self::response_message(response).await));
        }
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Ok(())
    }
}
