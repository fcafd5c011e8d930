//! Backend handles shared with views through context.

use std::rc::Rc;

use api::{AssessmentStore, BackendConfig, RestStore, SessionProvider};

use super::storage::CachedSessionProvider;

/// Session lookup plus history store. Platforms provide one at the app root.
#[derive(Clone)]
pub struct Backend {
    pub session: Rc<dyn SessionProvider>,
    pub store: Rc<dyn AssessmentStore>,
}

impl Backend {
    pub fn new(
        session: impl SessionProvider + 'static,
        store: impl AssessmentStore + 'static,
    ) -> Self {
        Self {
            session: Rc::new(session),
            store: Rc::new(store),
        }
    }

    pub fn from_config(config: BackendConfig) -> Self {
        if !config.is_configured() {
            tracing::warn!("backend URL or anon key missing; history will be unavailable");
        }
        let session = CachedSessionProvider::new(config.session_storage_key.clone());
        Self::new(session, RestStore::new(config))
    }

    pub fn from_env() -> Self {
        Self::from_config(BackendConfig::from_env())
    }
}
