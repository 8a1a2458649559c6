use sqlx::{PgPool, Pool, Postgres};
use trivia_core::error::AppError;
use trivia_core::models::Category;
use trivia_core::traits::CategoryStore;

/// Repository for the read-mostly `categories` table.
#[derive(Clone)]
pub struct CategoryRepository {
    pool: Pool<Postgres>,
}

impl CategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i32,
    #[sqlx(rename = "type")]
    kind: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            kind: row.kind,
        }
    }
}

impl CategoryStore for CategoryRepository {
    async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"SELECT id, type FROM categories ORDER BY id ASC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create_category(&self, kind: &str) -> Result<Category, AppError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"INSERT INTO categories (type) VALUES ($1) RETURNING id, type"#,
        )
        .bind(kind)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.into())
    }
}
