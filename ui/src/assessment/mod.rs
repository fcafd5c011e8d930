//! Assessment data handed to the results page: the scored result, raw answers,
//! and the static question table used to label them.

mod answers;
mod handoff;
mod questions;
mod score;

pub use answers::{
    answer_label, answer_score, response_entries, AnswerCode, ResponseEntry, ResponseMap,
    UNKNOWN_CATEGORY, UNKNOWN_QUESTION,
};
pub use handoff::{HandoffSlot, NavigationState};
pub use questions::{find_question, Question, QUESTIONS};
pub use score::ScoreTier;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Maximum overall score.
pub const OVERALL_MAX: f64 = 50.0;
/// Maximum score of a single category.
pub const CATEGORY_MAX: f64 = 10.0;

/// Scored assessment supplied by the questionnaire page. Never mutated here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    #[serde(alias = "overall_score")]
    pub overall_score: f64,
    #[serde(default)]
    pub scores: BTreeMap<String, f64>,
    #[serde(default)]
    pub insights: String,
    #[serde(default)]
    pub metrics: BTreeMap<String, f64>,
    #[serde(default, alias = "assessment_id")]
    pub assessment_id: String,
}

impl AssessmentResult {
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::for_score(self.overall_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_accepts_camel_and_snake_case() {
        let camel: AssessmentResult = serde_json::from_str(
            r#"{ "overallScore": 37, "scores": { "sleep": 6 }, "insights": "ok", "metrics": {}, "assessmentId": "a-1" }"#,
        )
        .unwrap();
        let snake: AssessmentResult =
            serde_json::from_str(r#"{ "overall_score": 37, "assessment_id": "a-1" }"#).unwrap();

        assert_eq!(camel.overall_score, 37.0);
        assert_eq!(camel.scores.get("sleep"), Some(&6.0));
        assert_eq!(snake.assessment_id, "a-1");
        assert_eq!(camel.tier(), ScoreTier::Good);
    }
}
