//! Coding question routes.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::app::{
    coding_question_create, coding_question_list, CodingQuestionCreateReq, CodingQuestionDto,
};
use crate::error::AppError;
use crate::infra::DbPool;

#[derive(Debug, Serialize)]
pub struct CodingQuestionCreated {
    pub message: &'static str,
    #[serde(rename = "questionId")]
    pub question_id: i64,
}

pub async fn list_coding_questions(
    State(pool): State<Arc<DbPool>>,
) -> Result<Json<Vec<CodingQuestionDto>>, AppError> {
    Ok(Json(coding_question_list(&pool)?))
}

pub async fn add_coding_question(
    State(pool): State<Arc<DbPool>>,
    Json(req): Json<CodingQuestionCreateReq>,
) -> Result<(StatusCode, Json<CodingQuestionCreated>), AppError> {
    let question_id = coding_question_create(&pool, req)?;
    Ok((
        StatusCode::CREATED,
        Json(CodingQuestionCreated {
            message: "✅ Coding question added successfully",
            question_id,
        }),
    ))
}
