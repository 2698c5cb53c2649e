//! Job applications and their status vocabulary.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::types::Record;

/// Error returned when an application status label is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown application status: {0}")]
pub struct UnknownStatus(pub String);

/// Lifecycle status of an application. Serialised as the exact label,
/// e.g. `"Submitted"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    /// Received, not yet looked at.
    Submitted,
    /// Seen by the company.
    Reviewed,
    /// Interview loop in progress.
    Interviewing,
    /// Offer extended.
    Offered,
    /// Closed without an offer.
    Rejected,
}

impl ApplicationStatus {
    /// The exact wire label for this status.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::Reviewed => "Reviewed",
            Self::Interviewing => "Interviewing",
            Self::Offered => "Offered",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ApplicationStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Submitted" => Ok(Self::Submitted),
            "Reviewed" => Ok(Self::Reviewed),
            "Interviewing" => Ok(Self::Interviewing),
            "Offered" => Ok(Self::Offered),
            "Rejected" => Ok(Self::Rejected),
            other => Err(UnknownStatus(other.to_owned())),
        }
    }
}

/// A talent's application to a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Opaque unique identifier.
    pub id: Uuid,
    /// Applying talent.
    pub talent_id: Uuid,
    /// Target job.
    pub job_id: Uuid,
    /// Current status.
    pub status: ApplicationStatus,
    /// When the application was submitted.
    pub applied_at: DateTime<Utc>,
    /// Last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Application {
    /// Create a freshly submitted application.
    #[must_use]
    pub fn new(talent_id: Uuid, job_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            talent_id,
            job_id,
            status: ApplicationStatus::Submitted,
            applied_at: now,
            updated_at: now,
        }
    }

    /// Bump the last-modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Record for Application {
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
    fn status_round_trips_through_labels() {
        for status in [
            ApplicationStatus::Submitted,
            ApplicationStatus::Reviewed,
            ApplicationStatus::Interviewing,
            ApplicationStatus::Offered,
            ApplicationStatus::Rejected,
        ] {
            assert_eq!(status.label().parse::<ApplicationStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_status_rejected() {
        let err = "Ghosted".parse::<ApplicationStatus>().unwrap_err();
        assert_eq!(err, UnknownStatus("Ghosted".to_owned()));
    }

    #[test]
    fn new_applications_start_submitted() {
        let app = Application::new(Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(app.status, ApplicationStatus::Submitted);
    }
}
