//! Backend configuration resolved from the environment.
//!
//! Native builds load a `.env` file if present, read runtime variables first
//! and fall back to values baked in at compile time; wasm builds only have the
//! compile-time values.

use crate::error::BackendError;

pub const BACKEND_URL_VAR: &str = "MINDCHECK_BACKEND_URL";
pub const ANON_KEY_VAR: &str = "MINDCHECK_BACKEND_ANON_KEY";
pub const SESSION_KEY_VAR: &str = "MINDCHECK_SESSION_KEY";

/// Storage key for the cached auth session when none is configured.
pub const DEFAULT_SESSION_KEY: &str = "mindcheck-auth-token";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: Option<String>,
    pub anon_key: Option<String>,
    pub session_storage_key: String,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            anon_key: Some(anon_key.into()),
            session_storage_key: DEFAULT_SESSION_KEY.to_string(),
        }
    }

    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            // Load .env file if present (development)
            dotenvy::dotenv().ok();
            Self::resolve(|var| std::env::var(var).ok())
        }

        #[cfg(target_arch = "wasm32")]
        {
            Self::resolve(|_| None)
        }
    }

    /// Reads the variables from a dotenv-style file without touching the
    /// process environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env_file(path: impl AsRef<std::path::Path>) -> Result<Self, BackendError> {
        let mut vars = std::collections::HashMap::new();
        let entries = dotenvy::from_path_iter(path.as_ref())
            .map_err(|err| BackendError::EnvFile(err.to_string()))?;
        for entry in entries {
            let (key, value) = entry.map_err(|err| BackendError::EnvFile(err.to_string()))?;
            vars.insert(key, value);
        }
        Ok(Self::resolve(|var| vars.get(var).cloned()))
    }

    fn resolve(get: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |var: &str, baked: Option<&'static str>| {
            get(var)
                .filter(|value| !value.trim().is_empty())
                .or_else(|| baked.map(str::to_string))
        };

        let base_url = lookup(BACKEND_URL_VAR, option_env!("MINDCHECK_BACKEND_URL"));
        let anon_key = lookup(ANON_KEY_VAR, option_env!("MINDCHECK_BACKEND_ANON_KEY"));
        let session_storage_key = lookup(SESSION_KEY_VAR, option_env!("MINDCHECK_SESSION_KEY"))
            .unwrap_or_else(|| DEFAULT_SESSION_KEY.to_string());

        Self {
            base_url,
            anon_key,
            session_storage_key,
        }
    }

    pub fn with_session_key(mut self, key: impl Into<String>) -> Self {
        self.session_storage_key = key.into();
        self
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> Result<&str, BackendError> {
        self.base_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .ok_or(BackendError::NotConfigured(BACKEND_URL_VAR))
    }

    pub fn anon_key(&self) -> Result<&str, BackendError> {
        self.anon_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(BackendError::NotConfigured(ANON_KEY_VAR))
    }

    pub fn is_configured(&self) -> bool {
        self.base_url().is_ok() && self.anon_key().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = BackendConfig::new("https://db.example.com/", "anon");
        assert_eq!(config.base_url().unwrap(), "https://db.example.com");
        assert!(config.is_configured());
    }

    #[test]
    fn missing_values_report_the_variable() {
        let config = BackendConfig::default();
        match config.base_url() {
            Err(BackendError::NotConfigured(var)) => assert_eq!(var, BACKEND_URL_VAR),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(
            config.anon_key(),
            Err(BackendError::NotConfigured(ANON_KEY_VAR))
        ));
        assert!(!config.is_configured());
    }

    #[test]
    fn empty_url_counts_as_missing() {
        let config = BackendConfig::new("", "anon");
        assert!(config.base_url().is_err());
    }

    #[test]
    fn env_file_values_are_picked_up() {
        let path = std::env::temp_dir().join(format!("mindcheck-config-{}.env", std::process::id()));
        std::fs::write(
            &path,
            "MINDCHECK_BACKEND_URL=https://db.example.com/\nMINDCHECK_BACKEND_ANON_KEY=anon-key\n",
        )
        .unwrap();

        let config = BackendConfig::from_env_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.base_url().unwrap(), "https://db.example.com");
        assert_eq!(config.anon_key().unwrap(), "anon-key");
    }

    #[test]
    fn missing_env_file_is_an_error() {
        let path = std::env::temp_dir().join("mindcheck-config-does-not-exist.env");
        assert!(matches!(
            BackendConfig::from_env_file(path),
            Err(BackendError::EnvFile(_))
        ));
    }
}
