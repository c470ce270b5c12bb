//! Job routes.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::app::{job_create, job_delete, job_list, JobCreateReq, JobDto};
use crate::error::AppError;
use crate::infra::DbPool;

#[derive(Debug, Serialize)]
pub struct JobCreated {
    pub message: &'static str,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct JobDeleted {
    pub message: &'static str,
    #[serde(rename = "deletedId")]
    pub deleted_id: String,
}

pub async fn list_jobs(State(pool): State<Arc<DbPool>>) -> Result<Json<Vec<JobDto>>, AppError> {
    Ok(Json(job_list(&pool)?))
}

pub async fn add_job(
    State(pool): State<Arc<DbPool>>,
    Json(req): Json<JobCreateReq>,
) -> Result<(StatusCode, Json<JobCreated>), AppError> {
    let id = job_create(&pool, req)?;
    Ok((
        StatusCode::CREATED,
        Json(JobCreated {
            message: "Job added successfully",
            id,
        }),
    ))
}

/// The path segment is echoed back as `deletedId` whether or not a row
/// matched.
pub async fn delete_job(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<String>,
) -> Result<Json<JobDeleted>, AppError> {
    job_delete(&pool, &id)?;
    Ok(Json(JobDeleted {
        message: "Job deleted successfully",
        deleted_id: id,
    }))
}
