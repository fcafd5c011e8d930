//! Signed-in session model and the port used to look it up.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::BackendError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Cached auth session, in the shape the hosted auth client persists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    /// Unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    pub user: SessionUser,
}

/// Older auth clients nest the session under `currentSession`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CachedSession {
    Direct(Session),
    Wrapped {
        #[serde(rename = "currentSession")]
        current_session: Session,
    },
}

impl Session {
    pub fn from_json(raw: &str) -> Result<Self, BackendError> {
        let cached: CachedSession = serde_json::from_str(raw)?;
        Ok(match cached {
            CachedSession::Direct(session) => session,
            CachedSession::Wrapped { current_session } => current_session,
        })
    }

    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    pub fn is_expired_at(&self, now_unix: i64) -> bool {
        self.expires_at.is_some_and(|expires| expires <= now_unix)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(OffsetDateTime::now_utc().unix_timestamp())
    }
}

/// Looks up the currently signed-in session, if any.
///
/// Returns `Ok(None)` when nobody is signed in or the cached session has
/// expired; `Err` only when the lookup itself failed.
#[async_trait(?Send)]
pub trait SessionProvider {
    async fn current_session(&self) -> Result<Option<Session>, BackendError>;
}
