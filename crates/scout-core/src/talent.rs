//! Talent profiles as stored and served over the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Record;

/// A talent profile on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Talent {
    /// Opaque unique identifier.
    pub id: Uuid,
    /// Full display name.
    pub name: String,
    /// Photo URL.
    pub photo: Option<String>,
    /// Professional title, e.g. `"Backend Engineer"`.
    pub title: Option<String>,
    /// Current location as free text.
    pub location: Option<String>,
    /// Total professional experience in years.
    pub years_of_experience: Option<f64>,
    /// Skill tags.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Availability label, e.g. `"Full-time"`.
    pub availability: Option<String>,
    /// Short biography.
    pub bio: Option<String>,
    /// Held certifications.
    #[serde(default)]
    pub certifications: Vec<String>,
    /// Portfolio URL.
    pub portfolio_url: Option<String>,
    /// GitHub profile URL.
    pub github_url: Option<String>,
    /// LinkedIn profile URL.
    pub linkedin_url: Option<String>,
    /// Remote-work preference label.
    pub remote_preference: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Talent {
    /// Create a talent profile with a fresh id and current timestamps;
    /// all optional fields start empty.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            photo: None,
            title: None,
            location: None,
            years_of_experience: None,
            skills: Vec::new(),
            availability: None,
            bio: None,
            certifications: Vec::new(),
            portfolio_url: None,
            github_url: None,
            linkedin_url: None,
            remote_preference: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Bump the last-modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Record for Talent {
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
    fn missing_array_fields_default_to_empty() {
        let json = serde_json::json!({
            "id": Uuid::new_v4(),
            "name": "Alice Smith",
            "photo": null,
            "title": "Frontend Engineer",
            "location": "Remote",
            "yearsOfExperience": 6.0,
            "availability": "Full-time",
            "bio": null,
            "portfolioUrl": null,
            "githubUrl": null,
            "linkedinUrl": null,
            "remotePreference": null,
            "createdAt": Utc::now(),
            "updatedAt": Utc::now(),
        });
        let talent: Talent = serde_json::from_value(json).unwrap();
        assert!(talent.skills.is_empty());
        assert!(talent.certifications.is_empty());
    }
}
