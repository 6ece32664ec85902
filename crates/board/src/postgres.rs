//! Postgres-backed store, delegating to `db::repository`.

use async_trait::async_trait;
use db::models::{JobRow, JobValues, UserRow};
use db::repository::{jobs as job_repo, users as user_repo};
use db::{DbError, DbPool};
use tracing::info;

use crate::store::{JobStore, UserStore};

/// Owns the process-wide connection pool.
///
/// Cloning is cheap; clones share the same pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Close every pooled connection. Call once the server has stopped.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRow>, DbError> {
        user_repo::find_by_email(&self.pool, email).await
    }

    async fn insert_user(&self, email: &str, password_hash: &str) -> Result<i32, DbError> {
        user_repo::insert_user(&self.pool, email, password_hash).await
    }
}

#[async_trait]
impl JobStore for PgStore {
    async fn insert_job(&self, values: JobValues) -> Result<JobRow, DbError> {
        job_repo::insert_job(&self.pool, values).await
    }

    async fn list_jobs(&self) -> Result<Vec<JobRow>, DbError> {
        job_repo::list_jobs(&self.pool).await
    }

    async fn get_job(&self, id: i32) -> Result<JobRow, DbError> {
        job_repo::get_job(&self.pool, id).await
    }

    async fn update_job(&self, id: i32, values: JobValues) -> Result<JobRow, DbError> {
        job_repo::update_job(&self.pool, id, values).await
    }

    async fn list_jobs_by_poster(&self, email: &str) -> Result<Vec<JobRow>, DbError> {
        job_repo::list_jobs_by_poster(&self.pool, email).await
    }

    async fn delete_job(&self, id: i32) -> Result<JobRow, DbError> {
        job_repo::delete_job(&self.pool, id).await
    }
}
