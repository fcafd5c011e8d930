//! Prior assessment records and the store port that serves them.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::BackendError;
use crate::session::Session;

/// Most recent records fetched per user.
pub const HISTORY_LIMIT: usize = 10;

/// A stored assessment, as returned by the remote store. Read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub overall_score: f64,
    /// RFC 3339 timestamp.
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<BTreeMap<String, f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<String>,
}

/// Parameters for a history lookup. The user is always passed explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryQuery {
    pub user_id: String,
    pub limit: usize,
    /// Access token of the signed-in user; the anon key is used when absent.
    pub bearer: Option<String>,
}

impl HistoryQuery {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            limit: HISTORY_LIMIT,
            bearer: None,
        }
    }

    pub fn for_session(session: &Session) -> Self {
        Self {
            user_id: session.user_id().to_string(),
            limit: HISTORY_LIMIT,
            bearer: Some(session.access_token.clone()),
        }
    }

    /// Query-string pairs: user filter, newest first, capped at `limit`.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("select", "*".to_string()),
            ("user_id", format!("eq.{}", self.user_id)),
            ("order", "created_at.desc".to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

/// Source of a user's past assessments, newest first.
#[async_trait(?Send)]
pub trait AssessmentStore {
    async fn recent_assessments(
        &self,
        query: &HistoryQuery,
    ) -> Result<Vec<HistoryRecord>, BackendError>;
}
