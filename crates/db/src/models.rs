//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models — they carry no domain behaviour.
//! Domain types live in the `board` crate.

use sqlx::FromRow;

// ---------------------------------------------------------------------------
// users
// ---------------------------------------------------------------------------

/// A persisted user row.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i32,
    pub email: String,
    /// bcrypt hash of the user's password.
    pub password: String,
}

// ---------------------------------------------------------------------------
// jobs
// ---------------------------------------------------------------------------

/// A persisted job posting row.
///
/// Every column but `id` is nullable: a job is stored exactly as submitted.
/// Columns are named in quoted camelCase (`"jobTitle"`, ...).
#[derive(Debug, Clone, PartialEq, FromRow)]
#[sqlx(rename_all = "camelCase")]
pub struct JobRow {
    pub id: i32,
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub salary_type: Option<String>,
    pub job_location: Option<String>,
    pub posting_date: Option<String>,
    pub experience_level: Option<String>,
    pub company_logo: Option<String>,
    pub employment_type: Option<String>,
    pub description: Option<String>,
    pub posted_by: Option<String>,
    /// JSONB array of skill names, in submission order.
    pub skills: Option<serde_json::Value>,
}

/// Column values written by an insert or a full-row update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobValues {
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub salary_type: Option<String>,
    pub job_location: Option<String>,
    pub posting_date: Option<String>,
    pub experience_level: Option<String>,
    pub company_logo: Option<String>,
    pub employment_type: Option<String>,
    pub description: Option<String>,
    pub posted_by: Option<String>,
    pub skills: Option<serde_json::Value>,
}

impl JobValues {
    /// Materialise these values as a row with the given primary key.
    pub fn into_row(self, id: i32) -> JobRow {
        JobRow {
            id,
            job_title: self.job_title,
            company_name: self.company_name,
            min_price: self.min_price,
            max_price: self.max_price,
            salary_type: self.salary_type,
            job_location: self.job_location,
            posting_date: self.posting_date,
            experience_level: self.experience_level,
            company_logo: self.company_logo,
            employment_type: self.employment_type,
            description: self.description,
            posted_by: self.posted_by,
            skills: self.skills,
        }
    }
}
