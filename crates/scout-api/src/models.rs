//! API request and response models.
//!
//! Create bodies carry the required fields plus whatever optional ones
//! the caller wants to set. Update bodies are partial merges: fields
//! omitted from the JSON are left unchanged.

use scout_core::{Application, ApplicationStatus, Company, Job, Talent};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response body for delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub message: String,
}

/// Request body for `POST /v1/companies`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyRequest {
    /// Display name (required, non-empty).
    pub name: String,
    /// Logo URL.
    pub logo: Option<String>,
    /// Short description.
    pub description: Option<String>,
    /// Public website URL.
    pub website: Option<String>,
    /// Primary industry.
    pub industry: Option<String>,
    /// Size bracket.
    pub company_size: Option<String>,
    /// Founding year.
    pub founded: Option<String>,
    /// Headquarters location.
    pub headquarters: Option<String>,
    /// Specialty areas.
    pub specialties: Option<String>,
    /// Hiring status label.
    pub hiring_status: Option<String>,
    /// Number of open positions.
    pub open_positions: Option<i32>,
    /// Offered benefits.
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Technologies in use.
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

impl CreateCompanyRequest {
    /// Materialise the company this request describes.
    #[must_use]
    pub fn into_company(self) -> Company {
        let mut company = Company::new(self.name);
        company.logo = self.logo;
        company.description = self.description;
        company.website = self.website;
        company.industry = self.industry;
        company.company_size = self.company_size;
        company.founded = self.founded;
        company.headquarters = self.headquarters;
        company.specialties = self.specialties;
        company.hiring_status = self.hiring_status;
        company.open_positions = self.open_positions;
        company.benefits = self.benefits;
        company.tech_stack = self.tech_stack;
        company
    }
}

/// Request body for `PUT /v1/companies/{id}`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateCompanyRequest {
    /// New display name.
    pub name: Option<String>,
    /// New logo URL.
    pub logo: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New website URL.
    pub website: Option<String>,
    /// New industry.
    pub industry: Option<String>,
    /// New size bracket.
    pub company_size: Option<String>,
    /// New founding year.
    pub founded: Option<String>,
    /// New headquarters.
    pub headquarters: Option<String>,
    /// New specialty areas.
    pub specialties: Option<String>,
    /// New hiring status.
    pub hiring_status: Option<String>,
    /// New open-position count.
    pub open_positions: Option<i32>,
    /// Replacement benefits list.
    pub benefits: Option<Vec<String>>,
    /// Replacement tech stack.
    pub tech_stack: Option<Vec<String>>,
}

impl UpdateCompanyRequest {
    /// Merge the supplied fields onto `company`.
    pub fn apply(self, company: &mut Company) {
        if let Some(name) = self.name {
            company.name = name;
        }
        if self.logo.is_some() {
            company.logo = self.logo;
        }
        if self.description.is_some() {
            company.description = self.description;
        }
        if self.website.is_some() {
            company.website = self.website;
        }
        if self.industry.is_some() {
            company.industry = self.industry;
        }
        if self.company_size.is_some() {
            company.company_size = self.company_size;
        }
        if self.founded.is_some() {
            company.founded = self.founded;
        }
        if self.headquarters.is_some() {
            company.headquarters = self.headquarters;
        }
        if self.specialties.is_some() {
            company.specialties = self.specialties;
        }
        if self.hiring_status.is_some() {
            company.hiring_status = self.hiring_status;
        }
        if self.open_positions.is_some() {
            company.open_positions = self.open_positions;
        }
        if let Some(benefits) = self.benefits {
            company.benefits = benefits;
        }
        if let Some(tech_stack) = self.tech_stack {
            company.tech_stack = tech_stack;
        }
    }
}

/// Request body for `POST /v1/talent`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTalentRequest {
    /// Full display name (required, non-empty).
    pub name: String,
    /// Photo URL.
    pub photo: Option<String>,
    /// Professional title.
    pub title: Option<String>,
    /// Current location.
    pub location: Option<String>,
    /// Years of professional experience.
    pub years_of_experience: Option<f64>,
    /// Skill tags.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Availability label.
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
    /// Remote-work preference.
    pub remote_preference: Option<String>,
}

impl CreateTalentRequest {
    /// Materialise the talent profile this request describes.
    #[must_use]
    pub fn into_talent(self) -> Talent {
        let mut talent = Talent::new(self.name);
        talent.photo = self.photo;
        talent.title = self.title;
        talent.location = self.location;
        talent.years_of_experience = self.years_of_experience;
        talent.skills = self.skills;
        talent.availability = self.availability;
        talent.bio = self.bio;
        talent.certifications = self.certifications;
        talent.portfolio_url = self.portfolio_url;
        talent.github_url = self.github_url;
        talent.linkedin_url = self.linkedin_url;
        talent.remote_preference = self.remote_preference;
        talent
    }
}

/// Request body for `PUT /v1/talent/{id}`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateTalentRequest {
    /// New display name.
    pub name: Option<String>,
    /// New photo URL.
    pub photo: Option<String>,
    /// New title.
    pub title: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New experience figure.
    pub years_of_experience: Option<f64>,
    /// Replacement skills list.
    pub skills: Option<Vec<String>>,
    /// New availability.
    pub availability: Option<String>,
    /// New biography.
    pub bio: Option<String>,
    /// Replacement certifications list.
    pub certifications: Option<Vec<String>>,
    /// New portfolio URL.
    pub portfolio_url: Option<String>,
    /// New GitHub URL.
    pub github_url: Option<String>,
    /// New LinkedIn URL.
    pub linkedin_url: Option<String>,
    /// New remote-work preference.
    pub remote_preference: Option<String>,
}

impl UpdateTalentRequest {
    /// Merge the supplied fields onto `talent`.
    pub fn apply(self, talent: &mut Talent) {
        if let Some(name) = self.name {
            talent.name = name;
        }
        if self.photo.is_some() {
            talent.photo = self.photo;
        }
        if self.title.is_some() {
            talent.title = self.title;
        }
        if self.location.is_some() {
            talent.location = self.location;
        }
        if self.years_of_experience.is_some() {
            talent.years_of_experience = self.years_of_experience;
        }
        if let Some(skills) = self.skills {
            talent.skills = skills;
        }
        if self.availability.is_some() {
            talent.availability = self.availability;
        }
        if self.bio.is_some() {
            talent.bio = self.bio;
        }
        if let Some(certifications) = self.certifications {
            talent.certifications = certifications;
        }
        if self.portfolio_url.is_some() {
            talent.portfolio_url = self.portfolio_url;
        }
        if self.github_url.is_some() {
            talent.github_url = self.github_url;
        }
        if self.linkedin_url.is_some() {
            talent.linkedin_url = self.linkedin_url;
        }
        if self.remote_preference.is_some() {
            talent.remote_preference = self.remote_preference;
        }
    }
}

/// Request body for `POST /v1/jobs`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    /// Posting company id (required).
    pub company_id: Uuid,
    /// Position title (required, non-empty).
    pub title: String,
    /// Full description (required).
    pub description: String,
    /// Location.
    pub location: Option<String>,
    /// Lower salary bound.
    pub salary_range_min: Option<i64>,
    /// Upper salary bound.
    pub salary_range_max: Option<i64>,
    /// Employment type.
    pub job_type: Option<String>,
    /// Whether the posting is open; defaults to `true`.
    pub is_active: Option<bool>,
}

impl CreateJobRequest {
    /// Materialise the job this request describes.
    #[must_use]
    pub fn into_job(self) -> Job {
        let mut job = Job::new(self.company_id, self.title, self.description);
        job.location = self.location;
        job.salary_range_min = self.salary_range_min;
        job.salary_range_max = self.salary_range_max;
        job.job_type = self.job_type;
        if let Some(is_active) = self.is_active {
            job.is_active = is_active;
        }
        job
    }
}

/// Request body for `PUT /v1/jobs/{id}`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateJobRequest {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New lower salary bound.
    pub salary_range_min: Option<i64>,
    /// New upper salary bound.
    pub salary_range_max: Option<i64>,
    /// New employment type.
    pub job_type: Option<String>,
    /// New active flag.
    pub is_active: Option<bool>,
}

impl UpdateJobRequest {
    /// Merge the supplied fields onto `job`.
    pub fn apply(self, job: &mut Job) {
        if let Some(title) = self.title {
            job.title = title;
        }
        if let Some(description) = self.description {
            job.description = description;
        }
        if self.location.is_some() {
            job.location = self.location;
        }
        if self.salary_range_min.is_some() {
            job.salary_range_min = self.salary_range_min;
        }
        if self.salary_range_max.is_some() {
            job.salary_range_max = self.salary_range_max;
        }
        if self.job_type.is_some() {
            job.job_type = self.job_type;
        }
        if let Some(is_active) = self.is_active {
            job.is_active = is_active;
        }
    }
}

/// Request body for `POST /v1/applications`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    /// Applying talent id (required).
    pub talent_id: Uuid,
    /// Target job id (required).
    pub job_id: Uuid,
}

impl CreateApplicationRequest {
    /// Materialise a freshly submitted application.
    #[must_use]
    pub fn into_application(self) -> Application {
        Application::new(self.talent_id, self.job_id)
    }
}

/// Request body for `PUT /v1/applications/{id}`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateApplicationRequest {
    /// New status; unknown labels are rejected at deserialisation.
    pub status: Option<ApplicationStatus>,
}

impl UpdateApplicationRequest {
    /// Merge the supplied fields onto `application`.
    pub fn apply(self, application: &mut Application) {
        if let Some(status) = self.status {
            application.status = status;
        }
    }
}
