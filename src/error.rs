//! Application errors and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Db(String),

    #[error("Username already exists")]
    UsernameTaken,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UsernameTaken => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::Db(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Store failures carry the raw message under "error"; the
        // duplicate-username case uses a fixed "message" body.
        let body = match &self {
            Self::Db(msg) => json!({ "error": msg }),
            Self::UsernameTaken => json!({ "message": self.to_string() }),
        };
        tracing::error!("request failed ({}): {}", status, self);
        (status, Json(body)).into_response()
    }
}
