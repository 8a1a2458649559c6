use std::future::Future;

use rand::Rng;

use crate::error::AppError;
use crate::models::{Category, NewQuestion, Question};
use crate::pagination::Page;
use crate::quiz::QuizFilter;

/// Read access to categories, plus inserts for seeding.
pub trait CategoryStore: Send + Sync + Clone {
    /// All categories, ascending by id.
    fn list_categories(&self) -> impl Future<Output = Result<Vec<Category>, AppError>> + Send;

    /// Insert a category. Only used at data-load time.
    fn create_category(
        &self,
        kind: &str,
    ) -> impl Future<Output = Result<Category, AppError>> + Send;
}

/// Persists and queries questions.
pub trait QuestionStore: Send + Sync + Clone {
    /// Total number of stored questions.
    fn count(&self) -> impl Future<Output = Result<i64, AppError>> + Send;

    /// One page of questions, ascending by id.
    fn list_page(&self, page: Page) -> impl Future<Output = Result<Vec<Question>, AppError>> + Send;

    fn get(&self, id: i32) -> impl Future<Output = Result<Option<Question>, AppError>> + Send;

    fn create(
        &self,
        question: &NewQuestion,
    ) -> impl Future<Output = Result<Question, AppError>> + Send;

    /// Remove a question. Returns false if no row had that id.
    fn delete(&self, id: i32) -> impl Future<Output = Result<bool, AppError>> + Send;

    /// Questions whose text contains `term`, ignoring case.
    fn search(&self, term: &str) -> impl Future<Output = Result<Vec<Question>, AppError>> + Send;

    fn by_category(
        &self,
        category: i32,
    ) -> impl Future<Output = Result<Vec<Question>, AppError>> + Send;

    /// Every question eligible under `filter`.
    fn candidates(
        &self,
        filter: &QuizFilter,
    ) -> impl Future<Output = Result<Vec<Question>, AppError>> + Send;
}

/// Source of uniform random indices, injectable so quiz selection can be
/// made deterministic in tests.
pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Production source backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}
