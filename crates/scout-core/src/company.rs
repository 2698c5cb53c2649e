//! Company profiles as stored and served over the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Record;

/// A company profile on the marketplace.
///
/// Wire names are camelCase to match the JSON API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Opaque unique identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Logo URL.
    pub logo: Option<String>,
    /// Short description.
    pub description: Option<String>,
    /// Public website URL.
    pub website: Option<String>,
    /// Primary industry.
    pub industry: Option<String>,
    /// Size bracket, e.g. `"51-200"`.
    pub company_size: Option<String>,
    /// Founding year as free text.
    pub founded: Option<String>,
    /// Headquarters location as free text.
    pub headquarters: Option<String>,
    /// Comma-separated specialty areas.
    pub specialties: Option<String>,
    /// Hiring status label, e.g. `"Actively Hiring"`.
    pub hiring_status: Option<String>,
    /// Number of open positions.
    pub open_positions: Option<i32>,
    /// Offered benefits.
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Technologies in use.
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Company {
    /// Create a company with a fresh id and current timestamps; all
    /// optional fields start empty.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            logo: None,
            description: None,
            website: None,
            industry: None,
            company_size: None,
            founded: None,
            headquarters: None,
            specialties: None,
            hiring_status: None,
            open_positions: None,
            benefits: Vec::new(),
            tech_stack: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Bump the last-modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Record for Company {
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
    fn serialises_with_camel_case_keys() {
        let company = Company::new("Innovatech Solutions");
        let json = serde_json::to_value(&company).unwrap();
        assert!(json.get("companySize").is_some());
        assert!(json.get("techStack").is_some());
        assert!(json.get("company_size").is_none());
    }

    #[test]
    fn touch_advances_updated_at() {
        let mut company = Company::new("Synergy Corp");
        let before = company.updated_at;
        company.touch();
        assert!(company.updated_at >= before);
    }
}
