//! HTTP clients for TalentScout's third-party integrations: the
//! web-scraping actor platform and the code-completion API. Neither is
//! used by the core search or CRUD flow.
#![deny(warnings, clippy::all)]
#![warn(missing_docs)]

use std::future::Future;
use std::pin::Pin;

pub mod completion;
pub mod error;
pub mod scraper;

/// Boxed future returned by dyn-compatible async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub use completion::{CodeAssistant, CompletionClient, CompletionRequest, HttpCompletionClient};
pub use error::ClientError;
pub use scraper::{ActorClient, HttpActorClient, Scraper};
