//! Request handlers for the TalentScout API.

pub mod applications;
pub mod companies;
pub mod jobs;
pub mod search;
pub mod talent;
