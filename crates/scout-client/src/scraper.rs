//! Web-scraping actor client and profile-enrichment helpers.

use std::sync::Arc;

use log::debug;
use serde_json::{json, Value};

use crate::error::ClientError;
use crate::BoxFuture;

/// Runs a named actor synchronously and returns its dataset items.
pub trait ActorClient: Send + Sync {
    /// Run `actor` with `input`, blocking until the run finishes, and
    /// return the items of its default dataset.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on network or parse failure.
    fn run_actor<'a>(
        &'a self,
        actor: &'a str,
        input: &'a Value,
    ) -> BoxFuture<'a, Result<Vec<Value>, ClientError>>;
}

/// `reqwest`-backed implementation of [`ActorClient`].
#[derive(Debug, Clone)]
pub struct HttpActorClient {
    base_url: String,
    token: String,
    http: Arc<reqwest::Client>,
}

impl HttpActorClient {
    /// Create a new client targeting `base_url`, authenticating with
    /// `token`.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            http: Arc::new(reqwest::Client::new()),
        }
    }
}

/// Actor ids use `owner/name` on the wire but `owner~name` in URLs.
fn actor_path(actor: &str) -> String {
    actor.replace('/', "~")
}

impl ActorClient for HttpActorClient {
    fn run_actor<'a>(
        &'a self,
        actor: &'a str,
        input: &'a Value,
    ) -> BoxFuture<'a, Result<Vec<Value>, ClientError>> {
        Box::pin(async move {
            let url = format!(
                "{}/v2/acts/{}/run-sync-get-dataset-items?token={}",
                self.base_url,
                actor_path(actor),
                self.token,
            );

            debug!("running actor {actor}");

            let items: Vec<Value> = self
                .http
                .post(&url)
                .json(input)
                .send()
                .await?
                .error_for_status()
                .map_err(ClientError::Http)?
                .json()
                .await
                .map_err(|e| ClientError::Parse(e.to_string()))?;

            Ok(items)
        })
    }
}

/// Profile and keyword scraping on top of an [`ActorClient`].
pub struct Scraper {
    client: Arc<dyn ActorClient>,
}

impl Scraper {
    /// Wrap an actor client.
    pub fn new(client: Arc<dyn ActorClient>) -> Self {
        Self { client }
    }

    /// Scrape one company profile. Returns `None` if the actor produced
    /// no items.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the actor run fails.
    pub async fn scrape_company_profile(
        &self,
        company_url: &str,
    ) -> Result<Option<Value>, ClientError> {
        let input = json!({
            "linkedInCompanyUrls": [company_url],
            "includeJobs": true,
        });
        let items = self
            .client
            .run_actor("apify/linkedin-company-scraper", &input)
            .await?;
        Ok(items.into_iter().next())
    }

    /// Scrape one talent profile. Returns `None` if the actor produced
    /// no items.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the actor run fails.
    pub async fn scrape_talent_profile(
        &self,
        profile_url: &str,
    ) -> Result<Option<Value>, ClientError> {
        let input = json!({
            "linkedInProfileUrls": [profile_url],
            "includeContactInfo": true,
        });
        let items = self
            .client
            .run_actor("apify/linkedin-profile-scraper", &input)
            .await?;
        Ok(items.into_iter().next())
    }

    /// Keyword search for companies, returning at most `limit` items.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the actor run fails.
    pub async fn search_companies(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Value>, ClientError> {
        let input = json!({
            "searchType": "companies",
            "keywords": query,
            "maxItems": limit,
        });
        self.client
            .run_actor("apify/linkedin-search-scraper", &input)
            .await
    }

    /// Keyword search for people, returning at most `limit` items.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the actor run fails.
    pub async fn search_talents(&self, query: &str, limit: u32) -> Result<Vec<Value>, ClientError> {
        let input = json!({
            "searchType": "people",
            "keywords": query,
            "maxItems": limit,
        });
        self.client
            .run_actor("apify/linkedin-search-scraper", &input)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actor_ids_are_url_escaped() {
        assert_eq!(actor_path("apify/web-scraper"), "apify~web-scraper");
        assert_eq!(actor_path("plain"), "plain");
    }

    struct RecordingClient;

    impl ActorClient for RecordingClient {
        fn run_actor<'a>(
            &'a self,
            actor: &'a str,
            input: &'a Value,
        ) -> BoxFuture<'a, Result<Vec<Value>, ClientError>> {
            let echoed = json!({ "actor": actor, "input": input });
            Box::pin(std::future::ready(Ok(vec![echoed])))
        }
    }

    #[tokio::test]
    async fn profile_scrape_returns_first_item() {
        let scraper = Scraper::new(Arc::new(RecordingClient));
        let item = scraper
            .scrape_company_profile("https://example.com/acme")
            .await
            .unwrap()
            .expect("one item");
        assert_eq!(item["actor"], "apify/linkedin-company-scraper");
        assert_eq!(item["input"]["includeJobs"], true);
    }

    #[tokio::test]
    async fn talent_search_sets_people_search_type() {
        let scraper = Scraper::new(Arc::new(RecordingClient));
        let items = scraper.search_talents("rust engineer", 10).await.unwrap();
        assert_eq!(items[0]["input"]["searchType"], "people");
        assert_eq!(items[0]["input"]["maxItems"], 10);
    }
}
