//! PostgreSQL-backed directories for the searchable entities.
//!
//! Rows are fetched in the documented order (`updated_at DESC, id ASC`)
//! and the opaque search predicate is evaluated in process over that
//! snapshot; the `Collection` contract keeps predicates opaque, so no
//! pushdown is attempted. Count and page are separate reads, matching
//! the read-committed (not snapshot) guarantee of the search pipeline.

use chrono::{DateTime, Utc};
use scout_core::{Company, Talent};
use scout_search::collection::{count_slice, page_slice};
use scout_search::{BoxFuture, Collection, CollectionError};
use sqlx::PgPool;
use uuid::Uuid;

use crate::directory::{Directory, StoreError};

fn unavailable(err: &sqlx::Error) -> CollectionError {
    CollectionError::Unavailable(err.to_string())
}

#[derive(sqlx::FromRow)]
struct CompanyRow {
    id: Uuid,
    name: String,
    logo: Option<String>,
    description: Option<String>,
    website: Option<String>,
    industry: Option<String>,
    company_size: Option<String>,
    founded: Option<String>,
    headquarters: Option<String>,
    specialties: Option<String>,
    hiring_status: Option<String>,
    open_positions: Option<i32>,
    benefits: Vec<String>,
    tech_stack: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            logo: row.logo,
            description: row.description,
            website: row.website,
            industry: row.industry,
            company_size: row.company_size,
            founded: row.founded,
            headquarters: row.headquarters,
            specialties: row.specialties,
            hiring_status: row.hiring_status,
            open_positions: row.open_positions,
            benefits: row.benefits,
            tech_stack: row.tech_stack,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Company directory backed by the `companies` table.
#[derive(Clone)]
pub struct PgCompanyDirectory {
    pool: PgPool,
}

impl PgCompanyDirectory {
    /// Create a directory over `pool`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn all_ordered(&self) -> Result<Vec<Company>, sqlx::Error> {
        let rows: Vec<CompanyRow> = sqlx::query_as(
            "SELECT id, name, logo, description, website, industry, company_size,
                    founded, headquarters, specialties, hiring_status, open_positions,
                    benefits, tech_stack, created_at, updated_at
             FROM companies
             ORDER BY updated_at DESC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Company::from).collect())
    }
}

impl Collection<Company> for PgCompanyDirectory {
    fn count_matching<'a>(
        &'a self,
        matches: &'a (dyn Fn(&Company) -> bool + Send + Sync),
    ) -> BoxFuture<'a, Result<u64, CollectionError>> {
        Box::pin(async move {
            let rows = self.all_ordered().await.map_err(|e| unavailable(&e))?;
            Ok(count_slice(&rows, matches))
        })
    }

    fn fetch_page<'a>(
        &'a self,
        matches: &'a (dyn Fn(&Company) -> bool + Send + Sync),
        offset: usize,
        limit: usize,
    ) -> BoxFuture<'a, Result<Vec<Company>, CollectionError>> {
        Box::pin(async move {
            let rows = self.all_ordered().await.map_err(|e| unavailable(&e))?;
            Ok(page_slice(&rows, matches, offset, limit))
        })
    }
}

impl Directory<Company> for PgCompanyDirectory {
    fn insert<'a>(&'a self, entity: Company) -> BoxFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            sqlx::query(
                "INSERT INTO companies
                     (id, name, logo, description, website, industry, company_size,
                      founded, headquarters, specialties, hiring_status, open_positions,
                      benefits, tech_stack, created_at, updated_at)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)",
            )
            .bind(entity.id)
            .bind(&entity.name)
            .bind(&entity.logo)
            .bind(&entity.description)
            .bind(&entity.website)
            .bind(&entity.industry)
            .bind(&entity.company_size)
            .bind(&entity.founded)
            .bind(&entity.headquarters)
            .bind(&entity.specialties)
            .bind(&entity.hiring_status)
            .bind(entity.open_positions)
            .bind(&entity.benefits)
            .bind(&entity.tech_stack)
            .bind(entity.created_at)
            .bind(entity.updated_at)
            .execute(&self.pool)
            .await?;
            Ok(())
        })
    }

    fn get<'a>(&'a self, id: Uuid) -> BoxFuture<'a, Result<Option<Company>, StoreError>> {
        Box::pin(async move {
            let row: Option<CompanyRow> = sqlx::query_as(
                "SELECT id, name, logo, description, website, industry, company_size,
                        founded, headquarters, specialties, hiring_status, open_positions,
                        benefits, tech_stack, created_at, updated_at
                 FROM companies WHERE id = $1",
            )
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
            Ok(row.map(Company::from))
        })
    }

    fn replace<'a>(&'a self, entity: Company) -> BoxFuture<'a, Result<bool, StoreError>> {
        Box::pin(async move {
            let result = sqlx::query(
                "UPDATE companies SET
                     name = $2, logo = $3, description = $4, website = $5, industry = $6,
                     company_size = $7, founded = $8, headquarters = $9, specialties = $10,
                     hiring_status = $11, open_positions = $12, benefits = $13,
                     tech_stack = $14, created_at = $15, updated_at = $16
                 WHERE id = $1",
            )
            .bind(entity.id)
            .bind(&entity.name)
            .bind(&entity.logo)
            .bind(&entity.description)
            .bind(&entity.website)
            .bind(&entity.industry)
            .bind(&entity.company_size)
            .bind(&entity.founded)
            .bind(&entity.headquarters)
            .bind(&entity.specialties)
            .bind(&entity.hiring_status)
            .bind(entity.open_positions)
            .bind(&entity.benefits)
            .bind(&entity.tech_stack)
            .bind(entity.created_at)
            .bind(entity.updated_at)
            .execute(&self.pool)
            .await?;
            Ok(result.rows_affected() > 0)
        })
    }

    fn remove<'a>(&'a self, id: Uuid) -> BoxFuture<'a, Result<bool, StoreError>> {
        Box::pin(async move {
            let result = sqlx::query("DELETE FROM companies WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await?;
            Ok(result.rows_affected() > 0)
        })
    }

    fn list<'a>(&'a self) -> BoxFuture<'a, Result<Vec<Company>, StoreError>> {
        Box::pin(async move { Ok(self.all_ordered().await?) })
    }
}

#[derive(sqlx::FromRow)]
struct TalentRow {
    id: Uuid,
    name: String,
    photo: Option<String>,
    title: Option<String>,
    location: Option<String>,
    years_of_experience: Option<f64>,
    skills: Vec<String>,
    availability: Option<String>,
    bio: Option<String>,
    certifications: Vec<String>,
    portfolio_url: Option<String>,
    github_url: Option<String>,
    linkedin_url: Option<String>,
    remote_preference: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TalentRow> for Talent {
    fn from(row: TalentRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            photo: row.photo,
            title: row.title,
            location: row.location,
            years_of_experience: row.years_of_experience,
            skills: row.skills,
            availability: row.availability,
            bio: row.bio,
            certifications: row.certifications,
            portfolio_url: row.portfolio_url,
            github_url: row.github_url,
            linkedin_url: row.linkedin_url,
            remote_preference: row.remote_preference,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Talent directory backed by the `talents` table.
#[derive(Clone)]
pub struct PgTalentDirectory {
    pool: PgPool,
}

impl PgTalentDirectory {
    /// Create a directory over `pool`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn all_ordered(&self) -> Result<Vec<Talent>, sqlx::Error> {
        let rows: Vec<TalentRow> = sqlx::query_as(
            "SELECT id, name, photo, title, location, years_of_experience, skills,
                    availability, bio, certifications, portfolio_url, github_url,
                    linkedin_url, remote_preference, created_at, updated_at
             FROM talents
             ORDER BY updated_at DESC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Talent::from).collect())
    }
}

impl Collection<Talent> for PgTalentDirectory {
    fn count_matching<'a>(
        &'a self,
        matches: &'a (dyn Fn(&Talent) -> bool + Send + Sync),
    ) -> BoxFuture<'a, Result<u64, CollectionError>> {
        Box::pin(async move {
            let rows = self.all_ordered().await.map_err(|e| unavailable(&e))?;
            Ok(count_slice(&rows, matches))
        })
    }

    fn fetch_page<'a>(
        &'a self,
        matches: &'a (dyn Fn(&Talent) -> bool + Send + Sync),
        offset: usize,
        limit: usize,
    ) -> BoxFuture<'a, Result<Vec<Talent>, CollectionError>> {
        Box::pin(async move {
            let rows = self.all_ordered().await.map_err(|e| unavailable(&e))?;
            Ok(page_slice(&rows, matches, offset, limit))
        })
    }
}

impl Directory<Talent> for PgTalentDirectory {
    fn insert<'a>(&'a self, entity: Talent) -> BoxFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            sqlx::query(
                "INSERT INTO talents
                     (id, name, photo, title, location, years_of_experience, skills,
                      availability, bio, certifications, portfolio_url, github_url,
                      linkedin_url, remote_preference, created_at, updated_at)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)",
            )
            .bind(entity.id)
            .bind(&entity.name)
            .bind(&entity.photo)
            .bind(&entity.title)
            .bind(&entity.location)
            .bind(entity.years_of_experience)
            .bind(&entity.skills)
            .bind(&entity.availability)
            .bind(&entity.bio)
            .bind(&entity.certifications)
            .bind(&entity.portfolio_url)
            .bind(&entity.github_url)
            .bind(&entity.linkedin_url)
            .bind(&entity.remote_preference)
            .bind(entity.created_at)
            .bind(entity.updated_at)
            .execute(&self.pool)
            .await?;
            Ok(())
        })
    }

    fn get<'a>(&'a self, id: Uuid) -> BoxFuture<'a, Result<Option<Talent>, StoreError>> {
        Box::pin(async move {
            let row: Option<TalentRow> = sqlx::query_as(
                "SELECT id, name, photo, title, location, years_of_experience, skills,
                        availability, bio, certifications, portfolio_url, github_url,
                        linkedin_url, remote_preference, created_at, updated_at
                 FROM talents WHERE id = $1",
            )
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
            Ok(row.map(Talent::from))
        })
    }

    fn replace<'a>(&'a self, entity: Talent) -> BoxFuture<'a, Result<bool, StoreError>> {
        Box::pin(async move {
            let result = sqlx::query(
                "UPDATE talents SET
                     name = $2, photo = $3, title = $4, location = $5,
                     years_of_experience = $6, skills = $7, availability = $8, bio = $9,
                     certifications = $10, portfolio_url = $11, github_url = $12,
                     linkedin_url = $13, remote_preference = $14, created_at = $15,
                     updated_at = $16
                 WHERE id = $1",
            )
            .bind(entity.id)
            .bind(&entity.name)
            .bind(&entity.photo)
            .bind(&entity.title)
            .bind(&entity.location)
            .bind(entity.years_of_experience)
            .bind(&entity.skills)
            .bind(&entity.availability)
            .bind(&entity.bio)
            .bind(&entity.certifications)
            .bind(&entity.portfolio_url)
            .bind(&entity.github_url)
            .bind(&entity.linkedin_url)
            .bind(&entity.remote_preference)
            .bind(entity.created_at)
            .bind(entity.updated_at)
            .execute(&self.pool)
            .await?;
            Ok(result.rows_affected() > 0)
        })
    }

    fn remove<'a>(&'a self, id: Uuid) -> BoxFuture<'a, Result<bool, StoreError>> {
        Box::pin(async move {
            let result = sqlx::query("DELETE FROM talents WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await?;
            Ok(result.rows_affected() > 0)
        })
    }

    fn list<'a>(&'a self) -> BoxFuture<'a, Result<Vec<Talent>, StoreError>> {
        Box::pin(async move { Ok(self.all_ordered().await?) })
    }
}
