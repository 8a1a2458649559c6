use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::IntoResponse;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use trivia_core::error::AppError;
use trivia_core::models::{NewQuestion, category_map};
use trivia_core::pagination::Page;
use trivia_core::quiz::{self, QuizFilter};
use trivia_core::traits::{CategoryStore, QuestionStore};

use crate::dto::{
    CategoriesResponse, CategoryQuestionsResponse, CreateQuestionRequest, CreatedQuestionResponse,
    DeleteQuestionResponse, HealthResponse, PageQuery, QuestionListResponse, QuizRequest,
    QuizResponse, SEARCH_CURRENT_CATEGORY, SearchRequest, SearchResponse,
};
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the full router with all routes and the CORS policy.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/categories", get(list_categories))
        .route(
            "/categories/{category_id}/questions",
            get(questions_by_category),
        )
        .route("/questions", get(list_questions))
        .route("/questions", post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{question_id}", delete(delete_question))
        .route("/quizzes", post(next_quiz_question))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(fallback)
        .layer(cors())
        .with_state(state)
}

/// Any origin; PATCH is advertised although no route implements it.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

async fn fallback(uri: Uri) -> ApiError {
    ApiError(AppError::NotFound(format!("No route for {}", uri.path())))
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Category types keyed by id", body = CategoriesResponse),
        (status = 500, description = "Storage failure", body = crate::dto::ErrorResponse),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let categories = state.db.category_repo().list_categories().await?;

    Ok(axum::Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

#[utoipa::path(
    get,
    path = "/categories/{category_id}/questions",
    params(
        ("category_id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Questions in the category", body = CategoryQuestionsResponse),
        (status = 400, description = "Category id 0", body = crate::dto::ErrorResponse),
        (status = 404, description = "Not a positive integer", body = crate::dto::ErrorResponse),
    ),
    tag = "categories"
)]
pub async fn questions_by_category(
    State(state): State<Arc<AppState>>,
    ApiPath(category_id): ApiPath<i32>,
) -> Result<impl IntoResponse, ApiError> {
    if category_id < 0 {
        return Err(AppError::NotFound(format!("Invalid category path segment {category_id}")).into());
    }
    if category_id == 0 {
        return Err(AppError::BadRequest("Invalid category id".to_string()).into());
    }

    let questions = state.db.question_repo().by_category(category_id).await?;

    Ok(axum::Json(CategoryQuestionsResponse {
        total_questions: questions.len(),
        questions,
        current_category: category_id,
    }))
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of questions", body = QuestionListResponse),
        (status = 500, description = "Storage failure", body = crate::dto::ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = Page::from_query(query.page.as_deref());
    let repo = state.db.question_repo();

    let total_questions = repo.count().await?;
    let questions = repo.list_page(page).await?;
    let categories = state.db.category_repo().list_categories().await?;

    Ok(axum::Json(QuestionListResponse {
        success: true,
        questions,
        total_questions,
        current_category: None,
        categories: category_map(categories),
    }))
}

#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionRequest,
    responses(
        (status = 200, description = "Question created", body = CreatedQuestionResponse),
        (status = 400, description = "Missing or falsy field", body = crate::dto::ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn create_question(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<CreateQuestionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new_question = NewQuestion::from_fields(
        body.question.as_deref(),
        body.answer.as_deref(),
        body.category.as_ref(),
        body.difficulty.as_ref(),
    )?;

    let question = state.db.question_repo().create(&new_question).await?;
    tracing::info!(id = question.id, category = question.category, "Created question");

    Ok(axum::Json(CreatedQuestionResponse { question }))
}

#[utoipa::path(
    delete,
    path = "/questions/{question_id}",
    params(
        ("question_id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeleteQuestionResponse),
        (status = 404, description = "Not found", body = crate::dto::ErrorResponse),
        (status = 500, description = "Delete rolled back", body = crate::dto::ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(state): State<Arc<AppState>>,
    ApiPath(question_id): ApiPath<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = state.db.question_repo();

    if repo.get(question_id).await?.is_none() {
        return Err(AppError::NotFound(format!("Question not found: {question_id}")).into());
    }

    if !repo.delete(question_id).await? {
        return Err(AppError::NotFound(format!("Question not found: {question_id}")).into());
    }
    tracing::info!(id = question_id, "Deleted question");

    Ok(axum::Json(DeleteQuestionResponse {
        success: true,
        deleted_question: question_id,
    }))
}

#[utoipa::path(
    post,
    path = "/questions/search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Questions containing the term", body = SearchResponse),
        (status = 404, description = "Empty search term", body = crate::dto::ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn search_questions(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<SearchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let term = body
        .search_term
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::NotFound("Empty search term".to_string()))?;

    let questions = state.db.question_repo().search(&term).await?;

    Ok(axum::Json(SearchResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: SEARCH_CURRENT_CATEGORY,
    }))
}

// ---------------------------------------------------------------------------
// Quizzes
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "Next question, or null when none remain", body = QuizResponse),
        (status = 422, description = "Missing quiz_category", body = crate::dto::ErrorResponse),
    ),
    tag = "quizzes"
)]
pub async fn next_quiz_question(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<QuizRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let filter = QuizFilter::new(body.quiz_category.id, body.previous_questions);
    let repo = state.db.question_repo();

    let response = match quiz::next_question(&repo, &filter, state.random.as_ref()).await? {
        Some(question) => QuizResponse::next(question),
        None => QuizResponse::exhausted(),
    };

    Ok(axum::Json(response))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let db_ok = state.db.health_check().await.is_ok();

    let status = if db_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: if db_ok { "healthy" } else { "unhealthy" },
        database: if db_ok { "ok" } else { "error" },
    };

    (status, axum::Json(response))
}
