//! Job postings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Record;

/// An open position posted by a company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Opaque unique identifier.
    pub id: Uuid,
    /// Posting company.
    pub company_id: Uuid,
    /// Position title.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Location as free text; `None` means unspecified.
    pub location: Option<String>,
    /// Lower salary bound in whole currency units.
    pub salary_range_min: Option<i64>,
    /// Upper salary bound in whole currency units.
    pub salary_range_max: Option<i64>,
    /// Employment type, e.g. `"Full-time"` or `"Contract"`.
    pub job_type: Option<String>,
    /// Whether the posting accepts applications.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Create an active job with a fresh id and current timestamps.
    #[must_use]
    pub fn new(company_id: Uuid, title: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            company_id,
            title: title.into(),
            description: description.into(),
            location: None,
            salary_range_min: None,
            salary_range_max: None,
            job_type: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Bump the last-modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Record for Job {
    fn id(&self) -> Uuid {
        self.id
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_jobs_are_active() {
        let job = Job::new(Uuid::new_v4(), "Software Engineer", "Develop amazing software.");
        assert!(job.is_active);
        assert!(job.location.is_none());
    }
}
