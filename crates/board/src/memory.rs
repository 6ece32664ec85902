//! `MemoryStore` — an in-process test double for [`UserStore`] and [`JobStore`].
//!
//! Mirrors the Postgres semantics the services rely on: serial ids starting
//! at 1, unique emails, insertion-ordered listing, and `NotFound` for
//! missing ids. It can also be switched to fail every call, which is how the
//! HTTP tests exercise the 500 paths.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use db::models::{JobRow, JobValues, UserRow};
use db::DbError;

use crate::store::{JobStore, UserStore};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<UserRow>,
    jobs: Vec<JobRow>,
    next_user_id: i32,
    next_job_id: i32,
}

/// Users and jobs held in plain vectors behind a mutex.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the database were down.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored users.
    pub fn user_count(&self) -> usize {
        self.lock().users.len()
    }

    /// Number of stored jobs.
    pub fn job_count(&self) -> usize {
        self.lock().jobs.len()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check(&self) -> Result<(), DbError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DbError::Sqlx(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRow>, DbError> {
        self.check()?;
        Ok(self.lock().users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert_user(&self, email: &str, password_hash: &str) -> Result<i32, DbError> {
        self.check()?;
        let mut tables = self.lock();
        if tables.users.iter().any(|u| u.email == email) {
            return Err(DbError::UniqueViolation("users_email_key".into()));
        }
        tables.next_user_id += 1;
        let id = tables.next_user_id;
        tables.users.push(UserRow {
            id,
            email: email.to_string(),
            password: password_hash.to_string(),
        });
        Ok(id)
    }
}

#[async_trait]
impl JobStore for MemoryStore {
    async fn insert_job(&self, values: JobValues) -> Result<JobRow, DbError> {
        self.check()?;
        let mut tables = self.lock();
        tables.next_job_id += 1;
        let row = values.into_row(tables.next_job_id);
        tables.jobs.push(row.clone());
        Ok(row)
    }

    async fn list_jobs(&self) -> Result<Vec<JobRow>, DbError> {
        self.check()?;
        Ok(self.lock().jobs.clone())
    }

    async fn get_job(&self, id: i32) -> Result<JobRow, DbError> {
        self.check()?;
        self.lock()
            .jobs
            .iter()
            .find(|j| j.id == id)
            .cloned()
            .ok_or(DbError::NotFound)
    }

    async fn update_job(&self, id: i32, values: JobValues) -> Result<JobRow, DbError> {
        self.check()?;
        let mut tables = self.lock();
        let slot = tables
            .jobs
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or(DbError::NotFound)?;
        *slot = values.into_row(id);
        Ok(slot.clone())
    }

    async fn list_jobs_by_poster(&self, email: &str) -> Result<Vec<JobRow>, DbError> {
        self.check()?;
        Ok(self
            .lock()
            .jobs
            .iter()
            .filter(|j| j.posted_by.as_deref() == Some(email))
            .cloned()
            .collect())
    }

    async fn delete_job(&self, id: i32) -> Result<JobRow, DbError> {
        self.check()?;
        let mut tables = self.lock();
        let index = tables
            .jobs
            .iter()
            .position(|j| j.id == id)
            .ok_or(DbError::NotFound)?;
        Ok(tables.jobs.remove(index))
    }
}
