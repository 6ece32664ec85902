//! Storage traits — the seam between the domain services and persistence.
//!
//! [`PgStore`](crate::PgStore) is the production implementation;
//! [`MemoryStore`](crate::MemoryStore) backs tests that have no Postgres.

use async_trait::async_trait;
use db::models::{JobRow, JobValues, UserRow};
use db::DbError;

/// Persistence for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by exact email.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRow>, DbError>;

    /// Insert a user with an already-hashed password and return its id.
    ///
    /// A duplicate email must fail with [`DbError::UniqueViolation`].
    async fn insert_user(&self, email: &str, password_hash: &str) -> Result<i32, DbError>;
}

/// Persistence for job postings.
///
/// Single-row lookups, updates and deletes report a missing id as
/// [`DbError::NotFound`].
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn insert_job(&self, values: JobValues) -> Result<JobRow, DbError>;

    async fn list_jobs(&self) -> Result<Vec<JobRow>, DbError>;

    async fn get_job(&self, id: i32) -> Result<JobRow, DbError>;

    /// Overwrite every column of row `id` and return the new row.
    async fn update_job(&self, id: i32, values: JobValues) -> Result<JobRow, DbError>;

    /// Rows whose `posted_by` equals `email` byte-for-byte.
    async fn list_jobs_by_poster(&self, email: &str) -> Result<Vec<JobRow>, DbError>;

    /// Remove row `id` and return its prior contents.
    async fn delete_job(&self, id: i32) -> Result<JobRow, DbError>;
}
