//! Test utilities: an in-memory question store and a deterministic random
//! source. Compiled for unit tests and behind the `testutil` feature.
//!
//! The store uses `Arc<Mutex<_>>` so clones share state, matching how the
//! database repositories share one pool.

use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::models::{NewQuestion, Question};
use crate::pagination::Page;
use crate::quiz::QuizFilter;
use crate::traits::{QuestionStore, RandomSource};

/// Build a question with placeholder answer and difficulty.
pub fn question(id: i32, text: &str, category: i32) -> Question {
    Question {
        id,
        question: text.to_string(),
        answer: format!("answer {id}"),
        category,
        difficulty: 1,
    }
}

// ---------------------------------------------------------------------------
// FixedRandom
// ---------------------------------------------------------------------------

/// Random source that always returns the same index, wrapped to the pool size.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub usize);

impl RandomSource for FixedRandom {
    fn pick_index(&self, len: usize) -> usize {
        self.0 % len
    }
}

// ---------------------------------------------------------------------------
// InMemoryQuestionStore
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct InMemoryQuestionStore {
    questions: Arc<Mutex<Vec<Question>>>,
    fail_with: Arc<Mutex<Option<AppError>>>,
}

impl InMemoryQuestionStore {
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::new(Mutex::new(questions)),
            fail_with: Arc::new(Mutex::new(None)),
        }
    }

    /// Store whose next operation returns `error`.
    pub fn with_error(error: AppError) -> Self {
        Self {
            questions: Arc::new(Mutex::new(Vec::new())),
            fail_with: Arc::new(Mutex::new(Some(error))),
        }
    }

    fn check(&self) -> Result<(), AppError> {
        match self.fail_with.lock().unwrap().take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn select(&self, keep: impl Fn(&Question) -> bool) -> Vec<Question> {
        let mut rows: Vec<Question> = self
            .questions
            .lock()
            .unwrap()
            .iter()
            .filter(|q| keep(*q))
            .cloned()
            .collect();
        rows.sort_by_key(|q| q.id);
        rows
    }
}

impl QuestionStore for InMemoryQuestionStore {
    async fn count(&self) -> Result<i64, AppError> {
        self.check()?;
        Ok(self.questions.lock().unwrap().len() as i64)
    }

    async fn list_page(&self, page: Page) -> Result<Vec<Question>, AppError> {
        self.check()?;
        if page.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .select(|_| true)
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Question>, AppError> {
        self.check()?;
        Ok(self.select(|q| q.id == id).into_iter().next())
    }

    async fn create(&self, new: &NewQuestion) -> Result<Question, AppError> {
        self.check()?;
        let mut questions = self.questions.lock().unwrap();
        let id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        let created = Question {
            id,
            question: new.question.clone(),
            answer: new.answer.clone(),
            category: new.category,
            difficulty: new.difficulty,
        };
        questions.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: i32) -> Result<bool, AppError> {
        self.check()?;
        let mut questions = self.questions.lock().unwrap();
        let before = questions.len();
        questions.retain(|q| q.id != id);
        Ok(questions.len() != before)
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, AppError> {
        self.check()?;
        let needle = term.to_lowercase();
        Ok(self.select(|q| q.question.to_lowercase().contains(&needle)))
    }

    async fn by_category(&self, category: i32) -> Result<Vec<Question>, AppError> {
        self.check()?;
        Ok(self.select(|q| q.category == category))
    }

    async fn candidates(&self, filter: &QuizFilter) -> Result<Vec<Question>, AppError> {
        self.check()?;
        Ok(self.select(|q| filter.matches(q)))
    }
}
