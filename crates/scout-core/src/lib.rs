//! Core domain types for the TalentScout marketplace.
#![deny(warnings, clippy::all)]
#![warn(missing_docs)]

pub mod application;
pub mod company;
pub mod experience;
pub mod job;
pub mod talent;
pub mod types;

pub use application::{Application, ApplicationStatus};
pub use company::Company;
pub use experience::{ExperienceLevel, YearsRange};
pub use job::Job;
pub use talent::Talent;
pub use types::{validate_name, Record, ValidationError};
