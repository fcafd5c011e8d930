//! PostgREST-style adapter for [`AssessmentStore`].
//!
//! Requests go to `{base}/rest/v1/assessments`. No timeout or retry is
//! configured; failures surface as [`BackendError`] and callers decide what to do.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::BackendConfig;
use crate::error::BackendError;
use crate::history::{AssessmentStore, HistoryQuery, HistoryRecord};

const ASSESSMENTS_TABLE: &str = "assessments";

#[derive(Debug, Clone)]
pub struct RestStore {
    config: BackendConfig,
    client: Client,
}

impl RestStore {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn table_url(&self, table: &str) -> Result<String, BackendError> {
        Ok(format!("{}/rest/v1/{table}", self.config.base_url()?))
    }
}

#[async_trait(?Send)]
impl AssessmentStore for RestStore {
    async fn recent_assessments(
        &self,
        query: &HistoryQuery,
    ) -> Result<Vec<HistoryRecord>, BackendError> {
        let url = self.table_url(ASSESSMENTS_TABLE)?;
        let anon_key = self.config.anon_key()?;
        let bearer = query.bearer.as_deref().unwrap_or(anon_key);

        tracing::debug!(user_id = %query.user_id, limit = query.limit, "fetching assessment history");

        let response = self
            .client
            .get(url)
            .query(&query.query_pairs())
            .header("apikey", anon_key)
            .bearer_auth(bearer)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_url_joins_rest_prefix() {
        let store = RestStore::new(BackendConfig::new("https://db.example.com/", "anon"));
        assert_eq!(
            store.table_url(ASSESSMENTS_TABLE).unwrap(),
            "https://db.example.com/rest/v1/assessments"
        );
    }

    #[test]
    fn unconfigured_store_fails_before_any_request() {
        let store = RestStore::new(BackendConfig::default());
        let outcome = futures::executor::block_on(
            store.recent_assessments(&HistoryQuery::new("user-1")),
        );
        assert!(matches!(outcome, Err(BackendError::NotConfigured(_))));
    }
}
