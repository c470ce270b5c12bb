//! Mentor routes.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::app::{mentor_create, mentor_list, MentorCreateReq, MentorDto};
use crate::error::AppError;
use crate::infra::DbPool;

#[derive(Debug, Serialize)]
pub struct MentorCreated {
    pub message: &'static str,
    #[serde(rename = "mentorId")]
    pub mentor_id: i64,
}

pub async fn list_mentors(
    State(pool): State<Arc<DbPool>>,
) -> Result<Json<Vec<MentorDto>>, AppError> {
    Ok(Json(mentor_list(&pool)?))
}

pub async fn add_mentor(
    State(pool): State<Arc<DbPool>>,
    Json(req): Json<MentorCreateReq>,
) -> Result<(StatusCode, Json<MentorCreated>), AppError> {
    let mentor_id = mentor_create(&pool, req)?;
    Ok((
        StatusCode::CREATED,
        Json(MentorCreated {
            message: "Mentor added successfully",
            mentor_id,
        }),
    ))
}
