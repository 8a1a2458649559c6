use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A labeled grouping that questions belong to.
///
/// Categories are loaded at seed time and are read-only through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Category {
    /// Wire representation: `{id, type}`.
    pub fn format(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "type": self.kind,
        })
    }
}

/// A stored quiz item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    /// Id of the owning [`Category`]. Not checked against the categories table.
    pub category: i32,
    pub difficulty: i32,
}

impl Question {
    /// Wire representation: `{id, question, answer, category, difficulty}`.
    pub fn format(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "question": self.question,
            "answer": self.answer,
            "category": self.category,
            "difficulty": self.difficulty,
        })
    }
}

/// Validated payload for inserting a new question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl NewQuestion {
    /// Build a question from raw request fields.
    ///
    /// Every field must be present and truthy: text must be non-empty and
    /// `category`/`difficulty` must coerce to a non-zero integer (see
    /// [`coerce_int`]). The error lists every missing key.
    pub fn from_fields(
        question: Option<&str>,
        answer: Option<&str>,
        category: Option<&serde_json::Value>,
        difficulty: Option<&serde_json::Value>,
    ) -> Result<Self, AppError> {
        let question = question.filter(|s| !s.is_empty());
        let answer = answer.filter(|s| !s.is_empty());
        let category = category.and_then(coerce_int).filter(|v| *v != 0);
        let difficulty = difficulty.and_then(coerce_int).filter(|v| *v != 0);

        match (question, answer, category, difficulty) {
            (Some(question), Some(answer), Some(category), Some(difficulty)) => Ok(Self {
                question: question.to_string(),
                answer: answer.to_string(),
                category,
                difficulty,
            }),
            (question, answer, category, difficulty) => {
                let missing: Vec<&str> = [
                    ("question", question.is_none()),
                    ("answer", answer.is_none()),
                    ("category", category.is_none()),
                    ("difficulty", difficulty.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();

                Err(AppError::BadRequest(format!(
                    "Required question object keys missing from request body: {}",
                    missing.join(", ")
                )))
            }
        }
    }
}

/// Interpret a JSON value as an integer id or score.
///
/// Accepts JSON integers and strings holding an integer (HTML selects submit
/// numbers as strings). Everything else is treated as absent.
pub fn coerce_int(value: &serde_json::Value) -> Option<i32> {
    match value {
        serde_json::Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Collapse a category list into the `{id: type}` mapping the API returns.
pub fn category_map(categories: Vec<Category>) -> BTreeMap<i32, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
