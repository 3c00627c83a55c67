//! Stored session file
//!
//! `ctrack auth login` persists the bearer token and account under the user
//! config dir so later invocations act as the same user.

use crate::error::{Error, Result};
use crate::types::User;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk session payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    /// Bearer token for the backend
    pub token: String,
    /// Account the token belongs to
    pub user: User,
}

/// Path of the session file, if a config dir exists on this platform
pub fn session_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("classtrack").join("session.json"))
}

/// Load the stored session, if any
pub fn load_session() -> Result<Option<StoredSession>> {
    match session_path() {
        Some(path) => load_session_from(&path),
        None => Ok(None),
    }
}

/// Persist a session, replacing any previous one
pub fn save_session(session: &StoredSession) -> Result<()> {
    let path = session_path()
        .ok_or_else(|| Error::Auth("no config directory on this platform".to_string()))?;
    save_session_to(&path, session)
}

/// Delete the stored session
///
/// Returns whether a session existed.
pub fn delete_session() -> Result<bool> {
    match session_path() {
        Some(path) => delete_session_at(&path),
        None => Ok(false),
    }
}

fn load_session_from(path: &Path) -> Result<Option<StoredSession>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)?;
    let session = serde_json::from_str(&raw)
        .map_err(|e| Error::Decode(format!("session file {}: {e}", path.display())))?;
    Ok(Some(session))
}

fn save_session_to(path: &Path, session: &StoredSession) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let raw = serde_json::to_string_pretty(session)
        .map_err(|e| Error::Decode(format!("session serialization: {e}")))?;
    fs::write(path, raw)?;
    Ok(())
}

fn delete_session_at(path: &Path) -> Result<bool> {
    if path.exists() {
        fs::remove_file(path)?;
        Ok(true)
    } else {
        Ok(false)
    }
}
