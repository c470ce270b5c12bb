//! HTTP handlers and router construction (DTO boundary).

pub mod coding_question;
pub mod job;
pub mod mentor;
pub mod user;

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::infra::DbPool;

/// Build the application router with the shared store handle as state.
pub fn router(pool: Arc<DbPool>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/mentors-details", get(mentor::list_mentors))
        .route("/add-mentor", post(mentor::add_mentor))
        .route("/coding-questions", get(coding_question::list_coding_questions))
        .route("/add-coding-question", post(coding_question::add_coding_question))
        .route("/jobs", get(job::list_jobs))
        .route("/add-jobs", post(job::add_job))
        .route("/delete-jobs/:id", delete(job::delete_job))
        .route("/users", get(user::list_users))
        .route("/add-users", post(user::add_user))
        .route("/user-details", get(user::list_user_details))
        .route("/update-user-details", post(user::update_user_details))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}

async fn root() -> &'static str {
    "Welcome to Learnow!"
}
