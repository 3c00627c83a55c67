//! Authentication against the classroom backend
//!
//! The acting user's bearer credential is resolved explicitly and injected
//! into the gateway at construction; nothing is kept in ambient state.
//!
//! Priority:
//! 1. `CLASSTRACK_TOKEN` environment variable
//! 2. Stored session from `ctrack auth login`

mod session;

pub use session::{StoredSession, delete_session, load_session, save_session, session_path};

use crate::error::{Error, Result};
use crate::gateway::wire::{ApiMessage, RawAuthResponse, RawUser};
use crate::types::{Role, User};
use reqwest::{Client, Response};
use std::env;
use tracing::debug;

/// Environment variable carrying a bearer token directly
pub const TOKEN_ENV: &str = "CLASSTRACK_TOKEN";

/// Source of the resolved credential
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Token from the `CLASSTRACK_TOKEN` environment variable
    EnvVar,
    /// Token from the stored session file
    Session,
}

/// Bearer credential representing the acting user
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Token attached to every authenticated request
    pub token: String,
    /// Where the token was obtained from
    pub source: CredentialSource,
}

/// Resolve the acting user's credential
pub fn resolve_credentials() -> Result<Credentials> {
    if let Ok(token) = env::var(TOKEN_ENV) {
        if !token.trim().is_empty() {
            debug!("using token from {TOKEN_ENV}");
            return Ok(Credentials {
                token,
                source: CredentialSource::EnvVar,
            });
        }
    }

    if let Some(stored) = load_session()? {
        debug!("using stored session for {}", stored.user.email);
        return Ok(Credentials {
            token: stored.token,
            source: CredentialSource::Session,
        });
    }

    Err(Error::Auth(format!(
        "no credentials found. Run `ctrack auth login` or set {TOKEN_ENV}"
    )))
}

/// Log in with email and password
///
/// Returns the token and account on success. Nothing is persisted; the
/// caller decides whether to save a session.
pub async fn login(base_url: &str, email: &str, password: &str) -> Result<(String, User)> {
    let response = Client::new()
        .post(format!("{base_url}/api/auth/login"))
        .json(&serde_json::json!({ "email": email, "password": password }))
        .send()
        .await?;
    auth_response(response).await
}

/// Create an account
///
/// Like [`login`], returns the token and the freshly created account.
pub async fn register(
    base_url: &str,
    name: &str,
    email: &str,
    password: &str,
    role: Role,
) -> Result<(String, User)> {
    let response = Client::new()
        .post(format!("{base_url}/api/auth/register"))
        .json(&serde_json::json!({
            "name": name,
            "email": email,
            "password": password,
            "role": role,
        }))
        .send()
        .await?;
    auth_response(response).await
}

/// Test a credential by asking the backend who it belongs to
pub async fn whoami(base_url: &str, credentials: &Credentials) -> Result<User> {
    let response = Client::new()
        .get(format!("{base_url}/api/auth/me"))
        .bearer_auth(&credentials.token)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(Error::Auth(error_message(response).await));
    }
    let raw: RawUser = response
        .json()
        .await
        .map_err(|e| Error::Decode(format!("/api/auth/me: {e}")))?;
    Ok(raw.into_user())
}

async fn auth_response(response: Response) -> Result<(String, User)> {
    if !response.status().is_success() {
        return Err(Error::Auth(error_message(response).await));
    }
    let raw: RawAuthResponse = response
        .json()
        .await
        .map_err(|e| Error::Decode(format!("auth response: {e}")))?;
    Ok((raw.token, raw.user.into_user()))
}

async fn error_message(response: Response) -> String {
    let status = response.status();
    response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<ApiMessage>(&body).ok())
        .and_then(|m| m.message)
        .unwrap_or_else(|| status.to_string())
}
