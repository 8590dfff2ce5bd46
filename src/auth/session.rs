//! Locally persisted demo session.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ClientResult;
use crate::models::UserRecord;

/// Bearer token and user record issued by the demo login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DemoSession {
    pub token: String,
    pub user: UserRecord,
}

/// JSON file holding the demo token and user record together.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored session. A missing or unreadable file means no session.
    pub async fn load(&self) -> ClientResult<Option<DemoSession>> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_slice::<DemoSession>(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                tracing::warn!("Discarding corrupt session file {:?}: {}", self.path, e);
                self.clear().await?;
                Ok(None)
            }
        }
    }

    pub async fn save(&self, session: &DemoSession) -> ClientResult<()> {
        // Ensure the parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(session)?;
        tokio::fs::write(&self.path, json).await?;
        tracing::debug!("Saved demo session to {:?}", self.path);
        Ok(())
    }

    pub async fn clear(&self) -> ClientResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
