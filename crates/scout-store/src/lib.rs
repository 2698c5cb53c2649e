//! Entity storage for the TalentScout marketplace.
//!
//! A [`Directory`] owns one entity collection and offers CRUD on top of
//! the read-only search capability. Directories are constructed
//! explicitly (once per process, or per test) and injected into
//! whatever needs them; nothing in this crate is global state.
#![deny(warnings, clippy::all)]
#![warn(missing_docs)]

pub mod directory;
pub mod memory;
pub mod postgres;
pub mod seed;

pub use directory::{Directory, SharedDirectory, StoreError};
pub use memory::MemoryDirectory;
pub use postgres::{PgCompanyDirectory, PgTalentDirectory};
