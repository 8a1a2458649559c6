use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use trivia_core::models::Question;

use crate::deserializers::deserialize_int_or_string;

/// `current_category` reported by search results. The web client expects
/// this fixed value.
pub const SEARCH_CURRENT_CATEGORY: i32 = 6;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    /// Category type keyed by category id.
    pub categories: BTreeMap<i32, String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CategoryQuestionsResponse {
    #[schema(value_type = Vec<Object>)]
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: i32,
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct PageQuery {
    /// 1-based page number; unparseable values fall back to 1.
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct QuestionListResponse {
    pub success: bool,
    #[schema(value_type = Vec<Object>)]
    pub questions: Vec<Question>,
    /// Row count across all pages.
    pub total_questions: i64,
    pub current_category: Option<i32>,
    pub categories: BTreeMap<i32, String>,
}

/// Raw create body. Fields stay loosely typed so that missing or falsy
/// values are reported as a bad request rather than a parse failure.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[schema(value_type = Option<i32>)]
    pub category: Option<serde_json::Value>,
    #[schema(value_type = Option<i32>)]
    pub difficulty: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CreatedQuestionResponse {
    #[schema(value_type = Object)]
    pub question: Question,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub deleted_question: i32,
}

fn default_search_term() -> Option<String> {
    Some("what".to_string())
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct SearchRequest {
    /// Defaults to `"what"` when the key is absent. An explicit `null` or
    /// empty string yields 404.
    #[serde(rename = "searchTerm", default = "default_search_term")]
    pub search_term: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct SearchResponse {
    pub success: bool,
    #[schema(value_type = Vec<Object>)]
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: i32,
}

// ---------------------------------------------------------------------------
// Quizzes
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct QuizCategory {
    /// `0` means all categories. Numeric strings are accepted.
    #[serde(deserialize_with = "deserialize_int_or_string")]
    pub id: i32,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct QuizRequest {
    /// Ids already asked. `null` (or absent) disables exclusion.
    #[serde(default)]
    pub previous_questions: Option<Vec<i32>>,
    pub quiz_category: QuizCategory,
}

/// `{success: true, question}` when a question was drawn, `{question: null}`
/// when the pool was empty.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct QuizResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[schema(value_type = Option<Object>)]
    pub question: Option<Question>,
}

impl QuizResponse {
    pub fn next(question: Question) -> Self {
        Self {
            success: Some(true),
            question: Some(question),
        }
    }

    pub fn exhausted() -> Self {
        Self {
            success: None,
            question: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}
