//! Job use cases.

use crate::error::AppError;
use crate::infra::get_connection;
use crate::infra::DbPool;
use rusqlite::params;
use serde::{Deserialize, Serialize};

/// Job creation payload. The id is supplied by the client; inserting an id
/// that already exists is a primary-key violation surfaced as a store error.
#[derive(Debug, Deserialize)]
pub struct JobCreateReq {
    pub id: Option<i64>,
    pub company: Option<String>,
    pub role: Option<String>,
    pub link: Option<String>,
    pub ctc: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<String>,
    pub location: Option<String>,
    pub last_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JobDto {
    pub id: i64,
    pub company: String,
    pub role: Option<String>,
    pub link: Option<String>,
    pub ctc: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<String>,
    pub location: Option<String>,
    pub last_date: Option<String>,
}

pub fn job_create(pool: &DbPool, req: JobCreateReq) -> Result<i64, AppError> {
    let conn = get_connection(pool);
    conn.execute(
        "INSERT INTO jobs (id, company, role, link, ctc, description, technologies, location, last_date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            req.id,
            req.company,
            req.role,
            req.link,
            req.ctc,
            req.description,
            req.technologies,
            req.location,
            req.last_date
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Delete by id without an existence check; a no-match delete is a success.
/// The id arrives as a raw path segment and is bound as text, relying on the
/// column's integer affinity for the comparison.
pub fn job_delete(pool: &DbPool, id: &str) -> Result<(), AppError> {
    let conn = get_connection(pool);
    conn.execute("DELETE FROM jobs WHERE id = ?1", [id])?;
    Ok(())
}

pub fn job_list(pool: &DbPool) -> Result<Vec<JobDto>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn.prepare(
        "SELECT id, company, role, link, ctc, description, technologies, location, last_date FROM jobs",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(JobDto {
            id: row.get(0)?,
            company: row.get(1)?,
            role: row.get(2)?,
            link: row.get(3)?,
            ctc: row.get(4)?,
            description: row.get(5)?,
            technologies: row.get(6)?,
            location: row.get(7)?,
            last_date: row.get(8)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| AppError::Db(e.to_string()))?);
    }
    Ok(out)
}
