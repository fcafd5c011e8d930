//! Payload passed from the questionnaire to the results page.
//!
//! The questionnaire fills the [`HandoffSlot`] right before navigating (or, when
//! it runs as a separate page, leaves it for the shell to load at startup). The
//! results page reads it without consuming it, so a remount after a language
//! switch still shows the same results. Starting a new assessment clears it.
//! Nothing is persisted or put in the URL.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use super::answers::ResponseMap;
use super::AssessmentResult;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    #[serde(default)]
    pub results: Option<AssessmentResult>,
    #[serde(default)]
    pub responses: Option<ResponseMap>,
    /// Left loosely typed: older questionnaire builds send ids as strings.
    #[serde(default)]
    pub selected_questions: Option<serde_json::Value>,
}

impl NavigationState {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Question ids from `selectedQuestions`; entries that are not ids are skipped.
    pub fn selected_ids(&self) -> Option<Vec<u32>> {
        let items = self.selected_questions.as_ref()?.as_array()?;
        let ids = items
            .iter()
            .filter_map(|item| match item {
                serde_json::Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
                serde_json::Value::String(s) => s.trim().parse().ok(),
                _ => None,
            })
            .collect();
        Some(ids)
    }
}

/// Context slot holding the pending hand-off, provided by the platform shell.
#[derive(Clone, Copy, PartialEq)]
pub struct HandoffSlot(pub Signal<Option<NavigationState>>);

impl HandoffSlot {
    /// Entry point for the questionnaire once it has scored an attempt.
    pub fn put(&mut self, state: NavigationState) {
        self.0.set(Some(state));
    }

    /// Copy of the pending payload. Does not subscribe the caller.
    pub fn current(&self) -> Option<NavigationState> {
        self.0.peek().as_ref().cloned()
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}
