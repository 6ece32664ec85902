//! Core domain models for the job board.
//!
//! These are the shapes clients send and receive. JSON field names are
//! camelCase, like the quoted column names behind `db::models::JobRow`.

use std::fmt;

use db::models::{JobRow, JobValues};
use serde::{Deserialize, Deserializer, Serialize};

use crate::BoardError;

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

/// Email and plaintext password submitted to `/signup` or `/login`.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

// ---------------------------------------------------------------------------
// JobFields
// ---------------------------------------------------------------------------

/// The full, client-supplied field set of a job posting.
///
/// Used for both create and update. Any field the client leaves out is
/// `None` and is stored as NULL; an update never merges with the old row.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobFields {
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    #[serde(deserialize_with = "lenient_price")]
    pub min_price: Option<f64>,
    #[serde(deserialize_with = "lenient_price")]
    pub max_price: Option<f64>,
    pub salary_type: Option<String>,
    pub job_location: Option<String>,
    pub posting_date: Option<String>,
    pub experience_level: Option<String>,
    pub company_logo: Option<String>,
    pub employment_type: Option<String>,
    pub description: Option<String>,
    pub posted_by: Option<String>,
    /// Skill names, order preserved.
    pub skills: Option<Vec<String>>,
}

/// Form-driven clients send prices as strings; accept `50`, `"50"` and `""`.
///
/// Non-finite values are rejected; JSON cannot represent them.
fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Price {
        Number(f64),
        Text(String),
    }

    let invalid = |raw: &str| -> D::Error {
        serde::de::Error::custom(format!("invalid price: {raw:?}"))
    };

    let price = match Option::<Price>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(Price::Number(n)) => n,
        Some(Price::Text(s)) if s.trim().is_empty() => return Ok(None),
        Some(Price::Text(s)) => s.trim().parse::<f64>().map_err(|_| invalid(&s))?,
    };

    if !price.is_finite() {
        return Err(invalid(&price.to_string()));
    }
    Ok(Some(price))
}

impl From<JobFields> for JobValues {
    fn from(fields: JobFields) -> Self {
        JobValues {
            job_title: fields.job_title,
            company_name: fields.company_name,
            min_price: fields.min_price,
            max_price: fields.max_price,
            salary_type: fields.salary_type,
            job_location: fields.job_location,
            posting_date: fields.posting_date,
            experience_level: fields.experience_level,
            company_logo: fields.company_logo,
            employment_type: fields.employment_type,
            description: fields.description,
            posted_by: fields.posted_by,
            skills: fields.skills.map(serde_json::Value::from),
        }
    }
}

// ---------------------------------------------------------------------------
// Job
// ---------------------------------------------------------------------------

/// A stored job posting as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
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
    pub skills: Option<Vec<String>>,
}

impl Job {
    /// The client-editable part of this job, i.e. everything but `id`.
    pub fn fields(&self) -> JobFields {
        JobFields {
            job_title: self.job_title.clone(),
            company_name: self.company_name.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            salary_type: self.salary_type.clone(),
            job_location: self.job_location.clone(),
            posting_date: self.posting_date.clone(),
            experience_level: self.experience_level.clone(),
            company_logo: self.company_logo.clone(),
            employment_type: self.employment_type.clone(),
            description: self.description.clone(),
            posted_by: self.posted_by.clone(),
            skills: self.skills.clone(),
        }
    }
}

impl TryFrom<JobRow> for Job {
    type Error = BoardError;

    fn try_from(row: JobRow) -> Result<Self, Self::Error> {
        let skills = match row.skills {
            None | Some(serde_json::Value::Null) => None,
            Some(value) => Some(serde_json::from_value::<Vec<String>>(value)?),
        };

        Ok(Job {
            id: row.id,
            job_title: row.job_title,
            company_name: row.company_name,
            min_price: row.min_price,
            max_price: row.max_price,
            salary_type: row.salary_type,
            job_location: row.job_location,
            posting_date: row.posting_date,
            experience_level: row.experience_level,
            company_logo: row.company_logo,
            employment_type: row.employment_type,
            description: row.description,
            posted_by: row.posted_by,
            skills,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fields_parse_camel_case_and_default_missing_to_none() {
        let fields: JobFields = serde_json::from_value(json!({
            "jobTitle": "Engineer",
            "companyName": "Acme",
            "minPrice": 50,
            "maxPrice": "90",
            "skills": ["Go", "SQL"]
        }))
        .unwrap();

        assert_eq!(fields.job_title.as_deref(), Some("Engineer"));
        assert_eq!(fields.min_price, Some(50.0));
        assert_eq!(fields.max_price, Some(90.0));
        assert_eq!(fields.skills, Some(vec!["Go".to_string(), "SQL".to_string()]));
        assert_eq!(fields.posted_by, None);
        assert_eq!(fields.description, None);
    }

    #[test]
    fn empty_and_null_prices_are_none() {
        let fields: JobFields =
            serde_json::from_value(json!({ "minPrice": "", "maxPrice": null })).unwrap();
        assert_eq!(fields.min_price, None);
        assert_eq!(fields.max_price, None);
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let err = serde_json::from_value::<JobFields>(json!({ "minPrice": "lots" }));
        assert!(err.is_err());
    }

    #[test]
    fn non_finite_price_strings_are_rejected() {
        for raw in ["NaN", "inf", "-infinity", " Infinity "] {
            let err = serde_json::from_value::<JobFields>(json!({ "maxPrice": raw }));
            assert!(err.is_err(), "{raw} was accepted");
        }
    }

    #[test]
    fn skills_are_stored_as_json_array_in_order() {
        let values = JobValues::from(JobFields {
            skills: Some(vec!["Rust".into(), "Go".into(), "SQL".into()]),
            ..Default::default()
        });
        assert_eq!(values.skills, Some(json!(["Rust", "Go", "SQL"])));
    }

    #[test]
    fn row_with_non_list_skills_is_corrupt() {
        let row = JobValues {
            skills: Some(json!({ "not": "a list" })),
            ..Default::default()
        }
        .into_row(7);
        assert!(matches!(Job::try_from(row), Err(BoardError::Corrupt(_))));
    }

    #[test]
    fn job_serializes_with_camel_case_keys() {
        let job = Job::try_from(
            JobValues {
                job_title: Some("Engineer".into()),
                posted_by: Some("a@b.com".into()),
                skills: Some(json!(["Go"])),
                ..Default::default()
            }
            .into_row(3),
        )
        .unwrap();

        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["jobTitle"], "Engineer");
        assert_eq!(value["postedBy"], "a@b.com");
        assert_eq!(value["skills"], json!(["Go"]));
        assert!(value["companyName"].is_null());
    }

    #[test]
    fn credentials_debug_hides_password() {
        let creds = Credentials { email: "a@b.com".into(), password: "hunter2".into() };
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("a@b.com"));
        assert!(!rendered.contains("hunter2"));
    }
}
