//! Development fixtures loaded into freshly created directories.

use scout_core::{Application, ApplicationStatus, Company, Job, Talent};

/// One consistent set of fixture rows; application and job links point
/// at the generated ids.
pub struct SeedData {
    /// Fixture companies.
    pub companies: Vec<Company>,
    /// Fixture talent profiles.
    pub talents: Vec<Talent>,
    /// Fixture jobs, linked to the fixture companies.
    pub jobs: Vec<Job>,
    /// Fixture applications, linked to the fixture talents and jobs.
    pub applications: Vec<Application>,
}

/// Build the fixture set.
#[must_use]
pub fn seed() -> SeedData {
    let mut innovatech = Company::new("Innovatech Solutions");
    innovatech.description = Some("Leading tech innovator.".to_owned());
    innovatech.website = Some("https://innovatech.com".to_owned());
    innovatech.industry = Some("Software".to_owned());
    innovatech.company_size = Some("51-200".to_owned());
    innovatech.headquarters = Some("New York, NY".to_owned());
    innovatech.hiring_status = Some("Actively Hiring".to_owned());
    innovatech.open_positions = Some(4);
    innovatech.tech_stack = vec!["React".to_owned(), "Node.js".to_owned()];

    let mut synergy = Company::new("Synergy Corp");
    synergy.description = Some("Collaborative work environment.".to_owned());
    synergy.website = Some("https://synergy.com".to_owned());
    synergy.industry = Some("Consulting".to_owned());
    synergy.company_size = Some("201-500".to_owned());
    synergy.headquarters = Some("Austin, TX".to_owned());
    synergy.hiring_status = Some("Not Hiring".to_owned());

    let mut techstart = Company::new("TechStart Inc.");
    techstart.description = Some("Early-stage product studio.".to_owned());
    techstart.industry = Some("Software".to_owned());
    techstart.company_size = Some("1-50".to_owned());
    techstart.headquarters = Some("San Francisco, CA".to_owned());
    techstart.specialties = Some("Prototyping, Mobile, Developer Tools".to_owned());
    techstart.hiring_status = Some("Actively Hiring".to_owned());
    techstart.open_positions = Some(2);
    techstart.tech_stack = vec!["Rust".to_owned(), "TypeScript".to_owned()];

    let mut alice = Talent::new("Alice Smith");
    alice.title = Some("Senior Frontend Engineer".to_owned());
    alice.location = Some("Remote".to_owned());
    alice.years_of_experience = Some(8.0);
    alice.skills = vec!["React".to_owned(), "Node.js".to_owned()];
    alice.availability = Some("Full-time".to_owned());
    alice.linkedin_url = Some("https://linkedin.com/in/alicesmith".to_owned());
    alice.portfolio_url = Some("https://alicesmith.dev".to_owned());

    let mut bob = Talent::new("Bob Johnson");
    bob.title = Some("Backend Engineer".to_owned());
    bob.location = Some("New York, NY".to_owned());
    bob.years_of_experience = Some(4.0);
    bob.skills = vec!["Python".to_owned(), "Django".to_owned()];
    bob.availability = Some("Part-time".to_owned());
    bob.linkedin_url = Some("https://linkedin.com/in/bobjohnson".to_owned());

    let mut carol = Talent::new("Carol Williams");
    carol.title = Some("Software Engineer".to_owned());
    carol.location = Some("Austin, TX".to_owned());
    carol.years_of_experience = Some(1.0);
    carol.skills = vec!["Java".to_owned(), "Spring".to_owned()];
    carol.availability = Some("Internship".to_owned());

    let mut engineer = Job::new(innovatech.id, "Software Engineer", "Develop amazing software.");
    engineer.location = Some("Remote".to_owned());
    engineer.salary_range_min = Some(80_000);
    engineer.salary_range_max = Some(120_000);
    engineer.job_type = Some("Full-time".to_owned());

    let mut pm = Job::new(synergy.id, "Product Manager", "Lead product strategy.");
    pm.location = Some("New York, NY".to_owned());
    pm.salary_range_min = Some(100_000);
    pm.salary_range_max = Some(150_000);
    pm.job_type = Some("Full-time".to_owned());

    let mut frontend = Job::new(innovatech.id, "Frontend Developer", "Build beautiful UIs.");
    frontend.location = Some("San Francisco, CA".to_owned());
    frontend.salary_range_min = Some(90_000);
    frontend.salary_range_max = Some(130_000);
    frontend.job_type = Some("Full-time".to_owned());
    frontend.is_active = false;

    let alice_application = Application::new(alice.id, engineer.id);
    let mut bob_application = Application::new(bob.id, engineer.id);
    bob_application.status = ApplicationStatus::Reviewed;

    SeedData {
        companies: vec![innovatech, synergy, techstart],
        talents: vec![alice, bob, carol],
        jobs: vec![engineer, pm, frontend],
        applications: vec![alice_application, bob_application],
    }
}
