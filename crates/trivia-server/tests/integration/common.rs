use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use testcontainers::core::{ContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage, ImageExt};
use tower::ServiceExt;

use trivia_core::testutil::FixedRandom;
use trivia_core::traits::{CategoryStore, QuestionStore};
use trivia_core::{Category, NewQuestion, Question};
use trivia_db::Database;
use trivia_server::routes;
use trivia_server::state::AppState;

pub struct TestApp {
    pub router: Router,
    pub db: Database,
    _container: ContainerAsync<GenericImage>,
}

/// Spin up a PostgreSQL container and return the test app. Quiz draws always
/// take the first candidate.
pub async fn setup_test_app() -> TestApp {
    let container = GenericImage::new("postgres", "16")
        .with_exposed_port(ContainerPort::Tcp(5432))
        .with_wait_for(WaitFor::message_on_stderr(
            "database system is ready to accept connections",
        ))
        .with_env_var("POSTGRES_PASSWORD", "postgres")
        .with_env_var("POSTGRES_DB", "trivia_test")
        .start()
        .await
        .expect("Failed to start PostgreSQL container");

    let host = container.get_host().await.expect("Failed to get host");
    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get port");

    let url = format!("postgresql://postgres:postgres@{host}:{port}/trivia_test");

    let pool = retry_connect(&url).await;
    let db = Database::from_pool(pool);
    db.migrate().await.expect("Failed to run migrations");

    let state = Arc::new(AppState::with_random(db.clone(), FixedRandom(0)));

    TestApp {
        router: routes::router(state),
        db,
        _container: container,
    }
}

async fn retry_connect(url: &str) -> PgPool {
    for _ in 0..30 {
        if let Ok(pool) = PgPoolOptions::new().max_connections(5).connect(url).await {
            return pool;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }
    panic!("Failed to connect to test database");
}

/// Seed three categories and one question per (category, index) pair.
pub async fn seed(db: &Database, per_category: i32) -> (Vec<Category>, Vec<Question>) {
    let mut categories = Vec::new();
    for kind in ["Science", "Art", "Geography"] {
        categories.push(db.category_repo().create_category(kind).await.unwrap());
    }

    let mut questions = Vec::new();
    for category in &categories {
        for i in 0..per_category {
            let q = db
                .question_repo()
                .create(&NewQuestion {
                    question: format!("What is {} fact number {i}?", category.kind),
                    answer: format!("Fact {i}"),
                    category: category.id,
                    difficulty: i % 5 + 1,
                })
                .await
                .unwrap();
            questions.push(q);
        }
    }

    (categories, questions)
}

/// Send a request and decode the JSON body.
pub async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}
