use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use trivia_core::models::NewQuestion;
use trivia_core::pagination::Page;
use trivia_core::traits::{CategoryStore, QuestionStore};
use trivia_db::{Database, DatabaseConfig};

#[derive(Parser)]
#[command(name = "trivia", version, about = "Manage the trivia database")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending migrations
    Migrate,

    /// Load categories and questions from a JSON file
    Seed {
        /// Path to a file shaped like {"categories": [...], "questions": [...]}
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Print every category as `id<TAB>type`
    Categories,

    /// Print questions as JSON lines
    Questions {
        /// Page number (10 questions per page)
        #[arg(short, long, default_value_t = 1)]
        page: i64,

        /// Only questions in this category (ignores --page)
        #[arg(short, long)]
        category: Option<i32>,
    },
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    categories: Vec<SeedCategory>,
    #[serde(default)]
    questions: Vec<SeedQuestion>,
}

#[derive(Debug, Deserialize)]
struct SeedCategory {
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct SeedQuestion {
    question: Option<String>,
    answer: Option<String>,
    category: Option<serde_json::Value>,
    difficulty: Option<serde_json::Value>,
}

impl SeedFile {
    /// Validate every question up front so a bad entry aborts before any insert.
    fn into_rows(self) -> Result<(Vec<String>, Vec<NewQuestion>)> {
        let kinds = self.categories.into_iter().map(|c| c.kind).collect();

        let questions = self
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| {
                NewQuestion::from_fields(
                    q.question.as_deref(),
                    q.answer.as_deref(),
                    q.category.as_ref(),
                    q.difficulty.as_ref(),
                )
                .with_context(|| format!("Invalid question at index {i}"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok((kinds, questions))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("trivia=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let db = connect_db().await?;

    match cli.command {
        Commands::Migrate => {
            db.migrate().await?;
            tracing::info!("Migrations applied");
        }
        Commands::Seed { file } => {
            db.migrate().await?;
            cmd_seed(&db, &file).await?;
        }
        Commands::Categories => cmd_categories(&db).await?,
        Commands::Questions { page, category } => cmd_questions(&db, page, category).await?,
    }

    Ok(())
}

/// Connect to PostgreSQL using DATABASE_URL.
async fn connect_db() -> Result<Database> {
    let config = DatabaseConfig::from_env()?;
    Database::connect(&config)
        .await
        .context("Failed to connect to database")
}

fn load_seed_file(path: &Path) -> Result<SeedFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file: {}", path.display()))?;
    serde_json::from_str(&raw).context("Invalid JSON in seed file")
}

async fn cmd_seed(db: &Database, path: &Path) -> Result<()> {
    let (kinds, questions) = load_seed_file(path)?.into_rows()?;

    db.seed(&kinds, &questions)
        .await
        .with_context(|| format!("Failed to seed from {}", path.display()))?;

    tracing::info!(
        categories = kinds.len(),
        questions = questions.len(),
        "Seed complete"
    );
    Ok(())
}

async fn cmd_categories(db: &Database) -> Result<()> {
    let categories = db.category_repo().list_categories().await?;

    if categories.is_empty() {
        println!("No categories found");
        return Ok(());
    }

    for category in categories {
        println!("{}\t{}", category.id, category.kind);
    }
    Ok(())
}

async fn cmd_questions(db: &Database, page: i64, category: Option<i32>) -> Result<()> {
    let repo = db.question_repo();

    let questions = match category {
        Some(id) => repo.by_category(id).await?,
        None => repo.list_page(Page::new(page)).await?,
    };
    let total = repo.count().await?;

    for question in &questions {
        println!("{}", question.format());
    }
    eprintln!("Showing {} of {} questions", questions.len(), total);

    Ok(())
}
