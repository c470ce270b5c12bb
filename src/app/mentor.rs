//! Mentor use cases.

use crate::error::AppError;
use crate::infra::get_connection;
use crate::infra::DbPool;
use rusqlite::params;
use serde::{Deserialize, Serialize};

/// Mentor creation payload. Every field is optional on the wire; absent
/// fields bind SQL NULL and the schema decides whether that is acceptable.
/// The LinkedIn URL arrives under the `linkedIn` key but is stored as
/// `linkedin`.
#[derive(Debug, Deserialize)]
pub struct MentorCreateReq {
    pub username: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub photo: Option<String>,
    pub expertise: Option<String>,
    pub experience: Option<String>,
    pub bio: Option<String>,
    #[serde(rename = "linkedIn")]
    pub linkedin: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MentorDto {
    pub username: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub photo: Option<String>,
    pub expertise: Option<String>,
    pub experience: Option<String>,
    pub bio: Option<String>,
    pub linkedin: Option<String>,
}

pub fn mentor_create(pool: &DbPool, req: MentorCreateReq) -> Result<i64, AppError> {
    let conn = get_connection(pool);
    conn.execute(
        "INSERT INTO mentor (username, name, phone, photo, expertise, experience, bio, linkedin)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            req.username,
            req.name,
            req.phone,
            req.photo,
            req.expertise,
            req.experience,
            req.bio,
            req.linkedin
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn mentor_list(pool: &DbPool) -> Result<Vec<MentorDto>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn.prepare(
        "SELECT username, name, phone, photo, expertise, experience, bio, linkedin FROM mentor",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(MentorDto {
            username: row.get(0)?,
            name: row.get(1)?,
            phone: row.get(2)?,
            photo: row.get(3)?,
            expertise: row.get(4)?,
            experience: row.get(5)?,
            bio: row.get(6)?,
            linkedin: row.get(7)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| AppError::Db(e.to_string()))?);
    }
    Ok(out)
}
