use trivia_core::{RandomSource, ThreadRandom};
use trivia_db::Database;

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub db: Database,
    /// Draws quiz questions. Tests swap in a deterministic source.
    pub random: Box<dyn RandomSource>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self::with_random(db, ThreadRandom)
    }

    pub fn with_random(db: Database, random: impl RandomSource + 'static) -> Self {
        Self {
            db,
            random: Box::new(random),
        }
    }
}
