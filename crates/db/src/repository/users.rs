//! User repository functions.

use sqlx::PgPool;

use crate::{DbError, models::UserRow};

/// Fetch the user registered under `email`, if any.
pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRow>, DbError> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, email, password FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Insert a new user and return its generated id.
///
/// `password_hash` must already be hashed. A duplicate email surfaces as
/// [`DbError::UniqueViolation`].
pub async fn insert_user(pool: &PgPool, email: &str, password_hash: &str) -> Result<i32, DbError> {
    let id = sqlx::query_scalar::<_, i32>(
        "INSERT INTO users (email, password) VALUES ($1, $2) RETURNING id",
    )
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await
    .map_err(DbError::classify)?;

    Ok(id)
}
