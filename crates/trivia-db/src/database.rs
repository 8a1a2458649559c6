use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;
use trivia_core::AppError;
use trivia_core::models::NewQuestion;

use crate::category_repository::CategoryRepository;
use crate::config::DatabaseConfig;
use crate::question_repository::QuestionRepository;

/// Central database facade — owns the connection pool, runs migrations,
/// and vends repository instances.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL with the given configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to connect: {e}")))?;

        Ok(Self { pool })
    }

    /// Create a `Database` from an existing pool (useful for testing).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run all pending migrations.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Migration failed: {e}")))?;
        Ok(())
    }

    pub fn category_repo(&self) -> CategoryRepository {
        CategoryRepository::new(self.pool.clone())
    }

    pub fn question_repo(&self) -> QuestionRepository {
        QuestionRepository::new(self.pool.clone())
    }

    /// Insert seed categories in order, then questions, in one transaction.
    ///
    /// Seed files reference categories by position, so a database that
    /// already holds categories is refused.
    pub async fn seed(&self, kinds: &[String], questions: &[NewQuestion]) -> Result<(), AppError> {
        let db_error = |e: sqlx::Error| AppError::DatabaseError(e.to_string());
        let mut tx = self.pool.begin().await.map_err(db_error)?;

        let (seeded,): (bool,) = sqlx::query_as(r#"SELECT EXISTS (SELECT 1 FROM categories)"#)
            .fetch_one(&mut *tx)
            .await
            .map_err(db_error)?;
        if seeded {
            return Err(AppError::Generic(
                "Database already contains categories; refusing to seed".to_string(),
            ));
        }

        for kind in kinds {
            sqlx::query(r#"INSERT INTO categories (type) VALUES ($1)"#)
                .bind(kind)
                .execute(&mut *tx)
                .await
                .map_err(db_error)?;
        }

        for question in questions {
            sqlx::query(
                r#"
                INSERT INTO questions (question, answer, category, difficulty)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(&question.question)
            .bind(&question.answer)
            .bind(question.category)
            .bind(question.difficulty)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;
        }

        tx.commit().await.map_err(db_error)?;

        info!(
            categories = kinds.len(),
            questions = questions.len(),
            "Seed committed"
        );
        Ok(())
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
