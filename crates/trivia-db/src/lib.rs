pub mod category_repository;
pub mod config;
pub mod database;
pub mod question_repository;

pub use category_repository::CategoryRepository;
pub use config::DatabaseConfig;
pub use database::Database;
pub use question_repository::QuestionRepository;
