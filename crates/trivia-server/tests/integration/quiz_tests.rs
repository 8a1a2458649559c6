use axum::http::StatusCode;
use serde_json::json;

use crate::integration::common::{post_json, seed, send, setup_test_app};

#[tokio::test]
async fn quiz_all_categories_with_everything_seen_returns_null() {
    let app = setup_test_app().await;
    let (_, questions) = seed(&app.db, 2).await;
    let all_ids: Vec<i32> = questions.iter().map(|q| q.id).collect();

    let (status, json) = send(
        &app,
        post_json(
            "/quizzes",
            json!({"previous_questions": all_ids, "quiz_category": {"type": "click", "id": 0}}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"question": null}));
}

#[tokio::test]
async fn quiz_returns_unseen_question_in_category() {
    let app = setup_test_app().await;
    let (categories, questions) = seed(&app.db, 3).await;
    let geography = &categories[2];
    let in_category: Vec<i32> = questions
        .iter()
        .filter(|q| q.category == geography.id)
        .map(|q| q.id)
        .collect();
    let previous = vec![in_category[0]];

    let (status, json) = send(
        &app,
        post_json(
            "/quizzes",
            json!({
                "previous_questions": previous,
                "quiz_category": {"type": "Geography", "id": geography.id.to_string()}
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let question = &json["question"];
    let id = question["id"].as_i64().unwrap() as i32;
    assert!(!previous.contains(&id));
    assert!(in_category.contains(&id));
    assert_eq!(question["category"], geography.id);
}

#[tokio::test]
async fn quiz_walks_every_question_once() {
    let app = setup_test_app().await;
    let (categories, questions) = seed(&app.db, 2).await;
    let science = categories[0].id;
    let pool: Vec<i32> = questions
        .iter()
        .filter(|q| q.category == science)
        .map(|q| q.id)
        .collect();

    let mut previous: Vec<i32> = Vec::new();
    for _ in 0..pool.len() {
        let (_, json) = send(
            &app,
            post_json(
                "/quizzes",
                json!({"previous_questions": previous, "quiz_category": {"id": science}}),
            ),
        )
        .await;
        let id = json["question"]["id"].as_i64().unwrap() as i32;
        assert!(pool.contains(&id));
        assert!(!previous.contains(&id));
        previous.push(id);
    }

    let (_, json) = send(
        &app,
        post_json(
            "/quizzes",
            json!({"previous_questions": previous, "quiz_category": {"id": science}}),
        ),
    )
    .await;
    assert!(json["question"].is_null());
}

#[tokio::test]
async fn quiz_null_previous_skips_exclusion() {
    let app = setup_test_app().await;
    let (_, questions) = seed(&app.db, 1).await;

    let (status, json) = send(
        &app,
        post_json(
            "/quizzes",
            json!({"previous_questions": null, "quiz_category": {"id": 0}}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // FixedRandom(0) draws the lowest id
    assert_eq!(json["question"]["id"], questions[0].id);
}

#[tokio::test]
async fn quiz_empty_category_returns_null() {
    let app = setup_test_app().await;
    seed(&app.db, 1).await;

    let (status, json) = send(
        &app,
        post_json("/quizzes", json!({"previous_questions": [], "quiz_category": {"id": 77}})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"question": null}));
}

#[tokio::test]
async fn quiz_without_category_returns_422() {
    let app = setup_test_app().await;

    let (status, json) = send(&app, post_json("/quizzes", json!({"previous_questions": []}))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        json,
        json!({"success": false, "error": 422, "message": "We couldn't process your request."})
    );
}
