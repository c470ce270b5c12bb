//! Handler-level tests: status codes and acknowledgement payloads.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use learnow_api::api;
use learnow_api::app::{CodingQuestionCreateReq, MentorCreateReq, UserCreateReq};
use learnow_api::infra::db::init_test_db;
use learnow_api::infra::DbPool;

// ──────────────────────── Helper ────────────────────────

fn test_pool() -> Arc<DbPool> {
    Arc::new(init_test_db())
}

fn signup(username: &str) -> UserCreateReq {
    serde_json::from_value(serde_json::json!({
        "username": username,
        "password": "pw"
    }))
    .unwrap()
}

#[test]
fn router_builds_with_shared_pool() {
    let _app = api::router(test_pool());
}

#[tokio::test]
async fn add_mentor_returns_created_ack() {
    let pool = test_pool();
    let req: MentorCreateReq = serde_json::from_value(serde_json::json!({
        "username": "ravi",
        "name": "Ravi Kumar"
    }))
    .unwrap();

    let (status, Json(ack)) = api::mentor::add_mentor(State(pool.clone()), Json(req))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(ack.message, "Mentor added successfully");
    assert!(ack.mentor_id >= 1);

    let Json(all) = api::mentor::list_mentors(State(pool)).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].username, "ravi");
}

#[tokio::test]
async fn add_coding_question_ack_carries_generated_id() {
    let pool = test_pool();
    let req = CodingQuestionCreateReq {
        name: Some("Two Sum".to_string()),
        difficulty: Some("Easy".to_string()),
        link: Some("http://x/1".to_string()),
    };

    let (status, Json(ack)) = api::coding_question::add_coding_question(State(pool), Json(req))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(ack.message, "✅ Coding question added successfully");
    assert_eq!(ack.question_id, 1);
}

#[tokio::test]
async fn delete_job_echoes_path_segment_even_without_match() {
    let pool = test_pool();
    let Json(ack) = api::job::delete_job(State(pool), Path("42".to_string()))
        .await
        .unwrap();
    assert_eq!(ack.message, "Job deleted successfully");
    assert_eq!(ack.deleted_id, "42");
}

#[tokio::test]
async fn duplicate_signup_maps_to_bad_request() {
    let pool = test_pool();
    api::user::add_user(State(pool.clone()), Json(signup("alice")))
        .await
        .unwrap();

    let err = api::user::add_user(State(pool), Json(signup("alice")))
        .await
        .unwrap_err();
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_user_details_reports_fixed_message() {
    let pool = test_pool();
    let req = serde_json::from_value(serde_json::json!({ "username": "ghost" })).unwrap();
    let Json(ack) = api::user::update_user_details(State(pool), Json(req))
        .await
        .unwrap();
    assert_eq!(ack.message, "User Details Updated Successfully.");
}
