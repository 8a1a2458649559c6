//! Quiz question selection.
//!
//! The candidate pool is every question in the requested category (or all
//! questions for category `0`) minus the ones already asked. One candidate is
//! drawn uniformly through a [`RandomSource`].

use tracing::debug;

use crate::error::AppError;
use crate::models::Question;
use crate::traits::{QuestionStore, RandomSource};

/// Category id meaning "any category".
pub const ALL_CATEGORIES: i32 = 0;

/// Filter defining the candidate pool for the next quiz question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizFilter {
    /// `None` selects all categories.
    pub category: Option<i32>,
    /// `None` disables exclusion entirely, which differs from an empty list
    /// only in the query issued.
    pub exclude: Option<Vec<i32>>,
}

impl QuizFilter {
    pub fn new(category_id: i32, previous_questions: Option<Vec<i32>>) -> Self {
        Self {
            category: (category_id != ALL_CATEGORIES).then_some(category_id),
            exclude: previous_questions,
        }
    }

    pub fn matches(&self, question: &Question) -> bool {
        let in_category = self.category.is_none_or(|c| question.category == c);
        let unseen = self
            .exclude
            .as_ref()
            .is_none_or(|ids| !ids.contains(&question.id));
        in_category && unseen
    }
}

/// Pick one element uniformly. Returns `None` for an empty pool.
pub fn choose<T>(mut pool: Vec<T>, rng: &dyn RandomSource) -> Option<T> {
    if pool.is_empty() {
        return None;
    }
    let index = rng.pick_index(pool.len());
    Some(pool.swap_remove(index))
}

/// Load the candidate pool for `filter` and draw the next question.
pub async fn next_question<S: QuestionStore>(
    store: &S,
    filter: &QuizFilter,
    rng: &dyn RandomSource,
) -> Result<Option<Question>, AppError> {
    let pool = store.candidates(filter).await?;
    debug!(candidates = pool.len(), "Loaded quiz candidate pool");
    Ok(choose(pool, rng))
}
