//! User use cases: account creation with its profile row, scans, and
//! profile updates.

use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};
use argon2::Argon2;
use rusqlite::params;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::infra::get_connection;
use crate::infra::DbPool;

/// Profile photo used when the signup payload carries none.
pub const DEFAULT_PHOTO: &str =
    "https://www.pngall.com/wp-content/uploads/12/Avatar-PNG-Images-HD.png";

/// Graduation year used when the signup payload carries none.
pub const DEFAULT_GRADUATION_YEAR: i64 = 2026;

/// Signup payload: the account fields plus the optional profile fields that
/// seed the user_details row.
#[derive(Debug, Deserialize)]
pub struct UserCreateReq {
    pub username: Option<String>,
    pub password: Option<String>,
    pub mentor_username: Option<String>,
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub photo: Option<String>,
    pub highest_study: Option<String>,
    pub college: Option<String>,
    pub graduation_year: Option<i64>,
    pub expertise: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserDto {
    pub username: String,
    pub password: String,
    pub mentor_username: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserDetailsDto {
    pub username: String,
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub photo: Option<String>,
    pub highest_study: Option<String>,
    pub college: Option<String>,
    pub graduation_year: Option<i64>,
    pub expertise: Option<String>,
}

/// Full-replacement profile update, keyed by username. Absent fields bind
/// NULL; a username with no profile row is a silent no-op.
#[derive(Debug, Deserialize)]
pub struct UserDetailsUpdateReq {
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub photo: Option<String>,
    pub highest_study: Option<String>,
    pub college: Option<String>,
    pub graduation_year: Option<i64>,
    pub expertise: Option<String>,
}

/// Create the account row and its profile row in one transaction, so a
/// failed profile insert cannot leave an account without a profile.
/// Uniqueness is enforced by the schema; the constraint violation on the
/// account insert is the duplicate-username case.
pub fn user_create(pool: &DbPool, req: UserCreateReq) -> Result<i64, AppError> {
    let password = req.password.as_deref().map(hash_password).transpose()?;

    let mut conn = get_connection(pool);
    let tx = conn.transaction()?;

    let user_id = match tx.execute(
        "INSERT INTO user (username, password, mentor_username) VALUES (?1, ?2, ?3)",
        params![req.username, password, req.mentor_username],
    ) {
        Ok(_) => tx.last_insert_rowid(),
        Err(e) if is_unique_violation(&e) => return Err(AppError::UsernameTaken),
        Err(e) => return Err(e.into()),
    };

    tx.execute(
        "INSERT INTO user_details (username, full_name, address, phone, photo, highest_study, college, graduation_year, expertise)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            req.username,
            req.full_name.unwrap_or_default(),
            req.address.unwrap_or_default(),
            req.phone.unwrap_or_default(),
            req.photo.unwrap_or_else(|| DEFAULT_PHOTO.to_string()),
            req.highest_study.unwrap_or_default(),
            req.college.unwrap_or_default(),
            req.graduation_year.unwrap_or(DEFAULT_GRADUATION_YEAR),
            req.expertise.unwrap_or_default(),
        ],
    )?;

    tx.commit()?;
    Ok(user_id)
}

pub fn user_list(pool: &DbPool) -> Result<Vec<UserDto>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn.prepare("SELECT username, password, mentor_username FROM user")?;
    let rows = stmt.query_map([], |row| {
        Ok(UserDto {
            username: row.get(0)?,
            password: row.get(1)?,
            mentor_username: row.get(2)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| AppError::Db(e.to_string()))?);
    }
    Ok(out)
}

pub fn user_details_list(pool: &DbPool) -> Result<Vec<UserDetailsDto>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn.prepare(
        "SELECT username, full_name, address, phone, photo, highest_study, college, graduation_year, expertise FROM user_details",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(UserDetailsDto {
            username: row.get(0)?,
            full_name: row.get(1)?,
            address: row.get(2)?,
            phone: row.get(3)?,
            photo: row.get(4)?,
            highest_study: row.get(5)?,
            college: row.get(6)?,
            graduation_year: row.get(7)?,
            expertise: row.get(8)?,
        })
    })?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| AppError::Db(e.to_string()))?);
    }
    Ok(out)
}

pub fn user_details_update(pool: &DbPool, req: UserDetailsUpdateReq) -> Result<(), AppError> {
    let conn = get_connection(pool);
    conn.execute(
        "UPDATE user_details
         SET full_name = ?1, address = ?2, phone = ?3, photo = ?4, highest_study = ?5, college = ?6, graduation_year = ?7, expertise = ?8
         WHERE username = ?9",
        params![
            req.full_name,
            req.address,
            req.phone,
            req.photo,
            req.highest_study,
            req.college,
            req.graduation_year,
            req.expertise,
            req.username
        ],
    )?;
    Ok(())
}

/// Passwords are stored as Argon2id hashes, never plaintext.
fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Db(e.to_string()))
}

fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(code, _)
            if code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
