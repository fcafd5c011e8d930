//! Backend client for Mindcheck: the signed-in session and the assessment history store.
//!
//! The UI only talks to the two ports defined here ([`SessionProvider`] and
//! [`AssessmentStore`]); [`RestStore`] is the PostgREST-style adapter used in the apps.

pub mod config;
pub mod error;
pub mod history;
pub mod rest;
pub mod session;

pub use config::BackendConfig;
pub use error::BackendError;
pub use history::{AssessmentStore, HistoryQuery, HistoryRecord, HISTORY_LIMIT};
pub use rest::RestStore;
pub use session::{Session, SessionProvider, SessionUser};
