//! Local persistence helpers: reading the cached auth session and any
//! hand-off left behind by the questionnaire.
//!
//! The hosted auth client writes its session JSON to `localStorage` on web; the
//! desktop sign-in flow writes the same JSON to `<config dir>/<key>.json`.

use api::{BackendError, Session, SessionProvider};
use async_trait::async_trait;

use crate::assessment::NavigationState;

/// `sessionStorage` key the web questionnaire writes its payload to.
pub const HANDOFF_STORAGE_KEY: &str = "mindcheck-results-handoff";
/// Desktop: JSON file to pre-fill the hand-off from.
pub const HANDOFF_FILE_VAR: &str = "MINDCHECK_HANDOFF_FILE";

#[derive(Debug, Clone)]
pub struct CachedSessionProvider {
    key: String,
}

impl CachedSessionProvider {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[async_trait(?Send)]
impl SessionProvider for CachedSessionProvider {
    async fn current_session(&self) -> Result<Option<Session>, BackendError> {
        let Some(raw) = read_cached(&self.key)? else {
            return Ok(None);
        };

        let session = Session::from_json(&raw)?;
        if session.is_expired() {
            tracing::info!(user_id = %session.user_id(), "cached session expired");
            return Ok(None);
        }
        Ok(Some(session))
    }
}

#[cfg(target_arch = "wasm32")]
fn read_cached(key: &str) -> Result<Option<String>, BackendError> {
    let storage = web_sys::window()
        .ok_or_else(|| BackendError::SessionCache("window unavailable".into()))?
        .local_storage()
        .map_err(|_| BackendError::SessionCache("localStorage blocked".into()))?
        .ok_or_else(|| BackendError::SessionCache("localStorage unavailable".into()))?;

    storage
        .get_item(key)
        .map_err(|_| BackendError::SessionCache(format!("unable to read {key}")))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_cached(key: &str) -> Result<Option<String>, BackendError> {
    let Some(path) = session_file(key) else {
        return Ok(None);
    };

    match std::fs::read_to_string(&path) {
        Ok(raw) => Ok(Some(raw)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(BackendError::SessionCache(format!(
            "{}: {err}",
            path.display()
        ))),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn session_file(key: &str) -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("com", "Mindcheck", "Mindcheck")
        .map(|dirs| dirs.config_dir().join(format!("{key}.json")))
}

/// Hand-off payload waiting at startup, if any.
///
/// On web the entry is removed from `sessionStorage` once read. Malformed
/// payloads are logged and ignored.
#[cfg(target_arch = "wasm32")]
pub fn pending_handoff() -> Option<NavigationState> {
    let storage = web_sys::window()?.session_storage().ok()??;
    let raw = storage.get_item(HANDOFF_STORAGE_KEY).ok()??;
    storage.remove_item(HANDOFF_STORAGE_KEY).ok();
    parse_handoff(&raw, HANDOFF_STORAGE_KEY)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn pending_handoff() -> Option<NavigationState> {
    let path = std::env::var_os(HANDOFF_FILE_VAR)?;
    handoff_from_file(std::path::Path::new(&path))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn handoff_from_file(path: &std::path::Path) -> Option<NavigationState> {
    match std::fs::read_to_string(path) {
        Ok(raw) => parse_handoff(&raw, &path.display().to_string()),
        Err(err) => {
            tracing::warn!("couldn't read hand-off file {}: {err}", path.display());
            None
        }
    }
}

fn parse_handoff(raw: &str, source: &str) -> Option<NavigationState> {
    match NavigationState::from_json(raw) {
        Ok(state) => Some(state),
        Err(err) => {
            tracing::warn!("ignoring malformed hand-off from {source}: {err}");
            None
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{name}-{}.json", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn handoff_file_is_loaded() {
        let path = temp_file(
            "mindcheck-handoff",
            r#"{ "results": { "overallScore": 31 }, "responses": { "4": "2" } }"#,
        );
        let state = handoff_from_file(&path);
        std::fs::remove_file(&path).ok();

        let state = state.unwrap();
        assert_eq!(state.results.map(|r| r.overall_score), Some(31.0));
        assert_eq!(state.responses.map(|r| r.len()), Some(1));
    }

    #[test]
    fn malformed_or_missing_handoff_is_ignored() {
        let path = temp_file("mindcheck-handoff-bad", "{ not json");
        assert!(handoff_from_file(&path).is_none());
        std::fs::remove_file(&path).ok();

        let missing = std::env::temp_dir().join("mindcheck-handoff-missing.json");
        assert!(handoff_from_file(&missing).is_none());
    }
}
