//! Raw answers and their joined, labelled form.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::questions::find_question;

pub const UNKNOWN_QUESTION: &str = "Unknown question";
pub const UNKNOWN_CATEGORY: &str = "Unknown";

const ANSWER_LABELS: [&str; 5] = ["Very Poor", "Poor", "Fair", "Good", "Excellent"];

/// Likert answer code, normally `"1"`..`"5"`. Integers are accepted and
/// stored as their decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnswerCode(String);

impl AnswerCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnswerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for AnswerCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AnswerCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Integer(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Self(text),
            Raw::Integer(value) => Self(value.to_string()),
        })
    }
}

/// Question id → answer code, in the order the payload listed them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseMap(Vec<(u32, AnswerCode)>);

impl ResponseMap {
    pub fn from_pairs<I, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u32, C)>,
        C: Into<String>,
    {
        let mut map = Self::default();
        for (id, code) in pairs {
            map.insert(id, AnswerCode::new(code));
        }
        map
    }

    /// A repeated id replaces the earlier answer in place.
    pub fn insert(&mut self, id: u32, code: AnswerCode) {
        match self.0.iter_mut().find(|(existing, _)| *existing == id) {
            Some(slot) => slot.1 = code,
            None => self.0.push((id, code)),
        }
    }

    pub fn get(&self, id: u32) -> Option<&AnswerCode> {
        self.0
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, code)| code)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &AnswerCode)> {
        self.0.iter().map(|(id, code)| (*id, code))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ResponseMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (id, code) in &self.0 {
            map.serialize_entry(&id.to_string(), code)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ResponseMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ResponseMapVisitor;

        impl<'de> Visitor<'de> for ResponseMapVisitor {
            type Value = ResponseMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of question ids to answer codes")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = ResponseMap::default();
                while let Some((id, code)) = access.next_entry::<u32, AnswerCode>()? {
                    map.insert(id, code);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(ResponseMapVisitor)
    }
}

/// Human label for a code; unmapped codes come back verbatim.
pub fn answer_label(code: &str) -> String {
    answer_score(code)
        .map(|score| ANSWER_LABELS[usize::from(score) - 1].to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Numeric value of a code, which must be exactly one of `"1"`..`"5"`.
pub fn answer_score(code: &str) -> Option<u8> {
    match code {
        "1" => Some(1),
        "2" => Some(2),
        "3" => Some(3),
        "4" => Some(4),
        "5" => Some(5),
        _ => None,
    }
}

/// One row of the response breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEntry {
    pub question_id: u32,
    pub question: String,
    pub category: String,
    pub code: String,
    pub label: String,
    pub score: Option<u8>,
}

impl ResponseEntry {
    pub fn new(question_id: u32, code: &AnswerCode) -> Self {
        let (question, category) = match find_question(question_id) {
            Some(found) => (found.text.to_string(), found.category.to_string()),
            None => (UNKNOWN_QUESTION.to_string(), UNKNOWN_CATEGORY.to_string()),
        };

        Self {
            question_id,
            question,
            category,
            code: code.as_str().to_string(),
            label: answer_label(code.as_str()),
            score: answer_score(code.as_str()),
        }
    }
}

/// Join answers against the question table, keeping response order.
///
/// A non-empty `selected` list restricts the rows to those question ids.
pub fn response_entries(responses: &ResponseMap, selected: Option<&[u32]>) -> Vec<ResponseEntry> {
    let selected = selected.filter(|ids| !ids.is_empty());
    responses
        .iter()
        .filter(|(id, _)| selected.map_or(true, |ids| ids.contains(id)))
        .map(|(id, code)| ResponseEntry::new(id, code))
        .collect()
}
