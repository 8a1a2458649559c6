use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trivia API",
        version = "0.1.0",
        description = "Categories, questions and quiz play for the trivia game."
    ),
    paths(
        crate::routes::list_categories,
        crate::routes::questions_by_category,
        crate::routes::list_questions,
        crate::routes::create_question,
        crate::routes::delete_question,
        crate::routes::search_questions,
        crate::routes::next_quiz_question,
        crate::routes::health,
    ),
    components(schemas(
        crate::dto::CategoriesResponse,
        crate::dto::CategoryQuestionsResponse,
        crate::dto::QuestionListResponse,
        crate::dto::CreateQuestionRequest,
        crate::dto::CreatedQuestionResponse,
        crate::dto::DeleteQuestionResponse,
        crate::dto::SearchRequest,
        crate::dto::SearchResponse,
        crate::dto::QuizCategory,
        crate::dto::QuizRequest,
        crate::dto::QuizResponse,
        crate::dto::HealthResponse,
        crate::dto::ErrorResponse,
    )),
    tags(
        (name = "categories", description = "Category listing"),
        (name = "questions", description = "Question management and search"),
        (name = "quizzes", description = "Quiz play"),
        (name = "system", description = "Health and system status"),
    )
)]
pub struct ApiDoc;
