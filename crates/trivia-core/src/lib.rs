pub mod error;
pub mod models;
pub mod pagination;
pub mod quiz;
#[cfg(any(test, feature = "testutil"))]
pub mod testutil;
pub mod traits;

pub use error::AppError;
pub use models::{Category, NewQuestion, Question, category_map, coerce_int};
pub use pagination::{Page, QUESTIONS_PER_PAGE};
pub use quiz::QuizFilter;
pub use traits::{CategoryStore, QuestionStore, RandomSource, ThreadRandom};
