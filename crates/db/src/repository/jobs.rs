//! Job posting repository functions.
//!
//! Each function is a single statement; there are no transactions. Inserts
//! and updates always write every column, so a `None` in [`JobValues`] clears
//! whatever was stored before.

use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{PgPool, Postgres};

use crate::{DbError, models::{JobRow, JobValues}};

const JOB_COLUMNS: &str = r#"id, "jobTitle", "companyName", "minPrice", "maxPrice", "salaryType",
     "jobLocation", "postingDate", "experienceLevel", "companyLogo", "employmentType",
     "description", "postedBy", "skills""#;

type JobQuery<'q> = QueryAs<'q, Postgres, JobRow, PgArguments>;

/// Bind the thirteen job columns as `$1..$13`, in `JOB_COLUMNS` order.
fn bind_values(query: JobQuery<'_>, values: JobValues) -> JobQuery<'_> {
    query
        .bind(values.job_title)
        .bind(values.company_name)
        .bind(values.min_price)
        .bind(values.max_price)
        .bind(values.salary_type)
        .bind(values.job_location)
        .bind(values.posting_date)
        .bind(values.experience_level)
        .bind(values.company_logo)
        .bind(values.employment_type)
        .bind(values.description)
        .bind(values.posted_by)
        .bind(values.skills)
}

/// Insert a new job posting and return the stored row.
///
/// Returns `DbError::NotFound` if the insert produced no row.
pub async fn insert_job(pool: &PgPool, values: JobValues) -> Result<JobRow, DbError> {
    let sql = format!(
        r#"
        INSERT INTO jobs
            ("jobTitle", "companyName", "minPrice", "maxPrice", "salaryType", "jobLocation",
             "postingDate", "experienceLevel", "companyLogo", "employmentType", "description",
             "postedBy", "skills")
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        RETURNING {JOB_COLUMNS}
        "#
    );

    let row = bind_values(sqlx::query_as::<_, JobRow>(&sql), values)
        .fetch_optional(pool)
        .await?
        .ok_or(DbError::NotFound)?;

    Ok(row)
}

/// Return every job posting in storage order. No filtering, no paging.
pub async fn list_jobs(pool: &PgPool) -> Result<Vec<JobRow>, DbError> {
    let sql = format!("SELECT {JOB_COLUMNS} FROM jobs");
    let rows = sqlx::query_as::<_, JobRow>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

/// Fetch a single job posting by its primary key.
pub async fn get_job(pool: &PgPool, id: i32) -> Result<JobRow, DbError> {
    let sql = format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1");
    let row = sqlx::query_as::<_, JobRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(DbError::NotFound)?;

    Ok(row)
}

/// Overwrite every column of the job with the given id.
///
/// Returns the post-update row, or `DbError::NotFound` if no row matched.
pub async fn update_job(pool: &PgPool, id: i32, values: JobValues) -> Result<JobRow, DbError> {
    let sql = format!(
        r#"
        UPDATE jobs SET
            "jobTitle" = $1,
            "companyName" = $2,
            "minPrice" = $3,
            "maxPrice" = $4,
            "salaryType" = $5,
            "jobLocation" = $6,
            "postingDate" = $7,
            "experienceLevel" = $8,
            "companyLogo" = $9,
            "employmentType" = $10,
            "description" = $11,
            "postedBy" = $12,
            "skills" = $13
        WHERE id = $14
        RETURNING {JOB_COLUMNS}
        "#
    );

    let row = bind_values(sqlx::query_as::<_, JobRow>(&sql), values)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(DbError::NotFound)?;

    Ok(row)
}

/// Return the jobs whose `postedBy` equals `email` exactly (case-sensitive).
pub async fn list_jobs_by_poster(pool: &PgPool, email: &str) -> Result<Vec<JobRow>, DbError> {
    let sql = format!(r#"SELECT {JOB_COLUMNS} FROM jobs WHERE "postedBy" = $1"#);
    let rows = sqlx::query_as::<_, JobRow>(&sql)
        .bind(email)
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

/// Permanently delete a job and return what it held.
///
/// Returns `DbError::NotFound` if no row was deleted.
pub async fn delete_job(pool: &PgPool, id: i32) -> Result<JobRow, DbError> {
    let sql = format!("DELETE FROM jobs WHERE id = $1 RETURNING {JOB_COLUMNS}");
    let row = sqlx::query_as::<_, JobRow>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(DbError::NotFound)?;

    Ok(row)
}
