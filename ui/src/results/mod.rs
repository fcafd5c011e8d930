mod charts;
pub use charts::{ResultsTrendChart, TrendPoint, TrendSeries, MIN_TREND_POINTS};

mod export;
pub use export::{build_export_text, export_filename, ResultsExportPanel};

mod summary;
pub use summary::ResultsSummary;

mod table;
pub use table::ResponseTable;

mod utils;
pub(crate) use utils::*;

use api::{AssessmentStore, HistoryQuery, HistoryRecord, SessionProvider, HISTORY_LIMIT};

use crate::assessment::{
    response_entries, AssessmentResult, NavigationState, ResponseEntry, ResponseMap,
};

/// Everything the results page renders from the hand-off payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsState {
    pub result: AssessmentResult,
    pub responses: ResponseMap,
    pub entries: Vec<ResponseEntry>,
}

impl ResultsState {
    /// `None` when the payload carried no result; the page then shows its placeholder.
    pub fn from_navigation(state: Option<NavigationState>) -> Option<Self> {
        let state = state?;
        let selected = state.selected_ids();
        let result = state.results?;
        let responses = state.responses.unwrap_or_default();
        let entries = response_entries(&responses, selected.as_deref());

        Some(Self {
            result,
            responses,
            entries,
        })
    }
}

/// Result of the mount-time session check.
#[derive(Debug, Clone, PartialEq)]
pub enum MountOutcome {
    SignedOut,
    SignedIn {
        user_id: String,
        /// Newest first, at most [`HISTORY_LIMIT`] records.
        history: Vec<HistoryRecord>,
    },
}

/// Check the session, then fetch history only when there is a result to show.
///
/// A failed session lookup counts as signed out.
pub async fn load_on_mount(
    sessions: &dyn SessionProvider,
    store: &dyn AssessmentStore,
    has_results: bool,
) -> MountOutcome {
    let session = match sessions.current_session().await {
        Ok(Some(session)) => session,
        Ok(None) => {
            tracing::info!("no active session; redirecting to sign-in");
            return MountOutcome::SignedOut;
        }
        Err(err) => {
            tracing::warn!("session lookup failed: {err}");
            return MountOutcome::SignedOut;
        }
    };

    let history = if has_results {
        load_history(store, &HistoryQuery::for_session(&session)).await
    } else {
        Vec::new()
    };

    MountOutcome::SignedIn {
        user_id: session.user_id().to_string(),
        history,
    }
}

/// Errors are logged and leave the history empty.
pub async fn load_history(store: &dyn AssessmentStore, query: &HistoryQuery) -> Vec<HistoryRecord> {
    match store.recent_assessments(query).await {
        Ok(mut records) => {
            records.truncate(query.limit.min(HISTORY_LIMIT));
            tracing::debug!(count = records.len(), "loaded assessment history");
            records
        }
        Err(err) => {
            tracing::warn!(user_id = %query.user_id, "couldn't load assessment history: {err}");
            Vec::new()
        }
    }
}
