//! User and user profile routes.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::app::{
    user_create, user_details_list, user_details_update, user_list, UserCreateReq, UserDetailsDto,
    UserDetailsUpdateReq, UserDto,
};
use crate::error::AppError;
use crate::infra::DbPool;

#[derive(Debug, Serialize)]
pub struct UserCreated {
    pub message: &'static str,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

#[derive(Debug, Serialize)]
pub struct UserDetailsUpdated {
    pub message: &'static str,
}

pub async fn list_users(State(pool): State<Arc<DbPool>>) -> Result<Json<Vec<UserDto>>, AppError> {
    Ok(Json(user_list(&pool)?))
}

pub async fn add_user(
    State(pool): State<Arc<DbPool>>,
    Json(req): Json<UserCreateReq>,
) -> Result<(StatusCode, Json<UserCreated>), AppError> {
    let user_id = user_create(&pool, req)?;
    Ok((
        StatusCode::CREATED,
        Json(UserCreated {
            message: "User Added Successfully.",
            user_id,
        }),
    ))
}

pub async fn list_user_details(
    State(pool): State<Arc<DbPool>>,
) -> Result<Json<Vec<UserDetailsDto>>, AppError> {
    Ok(Json(user_details_list(&pool)?))
}

pub async fn update_user_details(
    State(pool): State<Arc<DbPool>>,
    Json(req): Json<UserDetailsUpdateReq>,
) -> Result<Json<UserDetailsUpdated>, AppError> {
    user_details_update(&pool, req)?;
    Ok(Json(UserDetailsUpdated {
        message: "User Details Updated Successfully.",
    }))
}
