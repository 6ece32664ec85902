//! Job posting CRUD.
//!
//! Each operation is one statement against the [`JobStore`]; there is no
//! cross-operation ordering and no ownership check on `postedBy`.

use std::sync::Arc;

use db::models::JobRow;
use tracing::{debug, info, instrument};

use crate::{BoardError, Job, JobFields, JobStore};

pub struct JobRegistry {
    jobs: Arc<dyn JobStore>,
}

fn decode_all(rows: Vec<JobRow>) -> Result<Vec<Job>, BoardError> {
    rows.into_iter().map(Job::try_from).collect()
}

impl JobRegistry {
    pub fn new(jobs: Arc<dyn JobStore>) -> Self {
        Self { jobs }
    }

    /// Store a new posting and return its id.
    #[instrument(skip_all)]
    pub async fn create(&self, fields: JobFields) -> Result<i32, BoardError> {
        let row = self.jobs.insert_job(fields.into()).await?;
        info!(job_id = row.id, "Job posted");
        Ok(row.id)
    }

    /// Every posting, in storage order.
    pub async fn list_all(&self) -> Result<Vec<Job>, BoardError> {
        let rows = self.jobs.list_jobs().await?;
        debug!(count = rows.len(), "Listed jobs");
        decode_all(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Job, BoardError> {
        self.jobs.get_job(id).await?.try_into()
    }

    /// Replace every field of posting `id`; omitted fields become empty.
    #[instrument(skip(self, fields))]
    pub async fn update(&self, id: i32, fields: JobFields) -> Result<Job, BoardError> {
        let row = self.jobs.update_job(id, fields.into()).await?;
        info!("Job updated");
        row.try_into()
    }

    /// Postings whose `postedBy` equals `email` exactly.
    pub async fn list_by_poster(&self, email: &str) -> Result<Vec<Job>, BoardError> {
        decode_all(self.jobs.list_jobs_by_poster(email).await?)
    }

    /// Remove posting `id` and return what it held.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i32) -> Result<Job, BoardError> {
        let row = self.jobs.delete_job(id).await?;
        info!("Job deleted");
        row.try_into()
    }
}
