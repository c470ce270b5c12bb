//! Coding question use cases.

use crate::error::AppError;
use crate::infra::get_connection;
use crate::infra::DbPool;
use rusqlite::params;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CodingQuestionCreateReq {
    pub name: Option<String>,
    pub difficulty: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CodingQuestionDto {
    pub id: i64,
    pub name: String,
    pub difficulty: String,
    pub link: String,
}

pub fn coding_question_create(
    pool: &DbPool,
    req: CodingQuestionCreateReq,
) -> Result<i64, AppError> {
    let conn = get_connection(pool);
    conn.execute(
        "INSERT INTO coding_questions (name, difficulty, link) VALUES (?1, ?2, ?3)",
        params![req.name, req.difficulty, req.link],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn coding_question_list(pool: &DbPool) -> Result<Vec<CodingQuestionDto>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn.prepare("SELECT id, name, difficulty, link FROM coding_questions")?;
    let rows = stmt.query_map([], |row| {
        Ok(CodingQuestionDto {
            id: row.get(0)?,
            name: row.get(1)?,
            difficulty: row.get(2)?,
            link: row.get(3)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| AppError::Db(e.to_string()))?);
    }
    Ok(out)
}
