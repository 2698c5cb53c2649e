//! Code-completion API client and prompt builders.

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::BoxFuture;

/// Completion model requested from the API.
const MODEL: &str = "code-davinci-002";

/// Parameters for one completion call.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// The code prompt to complete.
    pub prompt: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
    /// Language hint prepended to the prompt as a comment; `None`
    /// sends the prompt untouched.
    pub language: Option<String>,
}

impl CompletionRequest {
    /// A request with the default generation settings (500 tokens,
    /// temperature 0.7, JavaScript language hint).
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: 500,
            temperature: 0.7,
            language: Some("javascript".to_owned()),
        }
    }

    fn rendered_prompt(&self) -> String {
        match &self.language {
            Some(language) => format!("// {language}\n{}", self.prompt),
            None => self.prompt.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    prompt: String,
    max_tokens: u32,
    temperature: f64,
    top_p: f64,
    frequency_penalty: f64,
    presence_penalty: f64,
}

#[derive(Debug, Deserialize)]
struct Choice {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

/// Generates text completions for code prompts.
pub trait CompletionClient: Send + Sync {
    /// Run one completion and return the first choice's text; an empty
    /// choice list yields an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on network or parse failure.
    fn complete<'a>(
        &'a self,
        request: &'a CompletionRequest,
    ) -> BoxFuture<'a, Result<String, ClientError>>;
}

/// `reqwest`-backed implementation of [`CompletionClient`].
#[derive(Debug, Clone)]
pub struct HttpCompletionClient {
    base_url: String,
    api_key: String,
    http: Arc<reqwest::Client>,
}

impl HttpCompletionClient {
    /// Create a new client targeting `base_url`, authenticating with
    /// `api_key`.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            http: Arc::new(reqwest::Client::new()),
        }
    }
}

impl CompletionClient for HttpCompletionClient {
    fn complete<'a>(
        &'a self,
        request: &'a CompletionRequest,
    ) -> BoxFuture<'a, Result<String, ClientError>> {
        Box::pin(async move {
            let body = CompletionBody {
                model: MODEL,
                prompt: request.rendered_prompt(),
                max_tokens: request.max_tokens,
                temperature: request.temperature,
                top_p: 1.0,
                frequency_penalty: 0.0,
                presence_penalty: 0.0,
            };

            debug!("requesting completion of {} tokens", request.max_tokens);

            let response: CompletionResponse = self
                .http
                .post(format!("{}/v1/completions", self.base_url))
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
                .await?
                .error_for_status()
                .map_err(ClientError::Http)?
                .json()
                .await
                .map_err(|e| ClientError::Parse(e.to_string()))?;

            Ok(response
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.text)
                .unwrap_or_default())
        })
    }
}

/// Build the code-analysis prompt: bugs, performance, quality.
#[must_use]
pub fn analysis_prompt(code: &str, language: &str) -> String {
    format!(
        "# Code Analysis\n\
         The following {language} code needs to be analyzed for bugs, performance issues, and potential improvements:\n\n\
         ```{language}\n{code}\n```\n\n\
         Please provide:\n\
         1. Potential bugs or issues\n\
         2. Performance improvements\n\
         3. Code quality suggestions\n\n\
         Analysis:\n"
    )
}

/// Build the unit-test-generation prompt for `framework`.
#[must_use]
pub fn unit_test_prompt(code: &str, language: &str, framework: &str) -> String {
    format!(
        "# Generate Unit Tests\n\
         Write unit tests for the following {language} code using {framework}:\n\n\
         ```{language}\n{code}\n```\n\n\
         Unit Tests:\n"
    )
}

/// Code-assistance helpers on top of a [`CompletionClient`].
pub struct CodeAssistant {
    client: Arc<dyn CompletionClient>,
}

impl CodeAssistant {
    /// Wrap a completion client.
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Complete a raw code prompt with the default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the completion call fails.
    pub async fn complete_code(&self, prompt: &str) -> Result<String, ClientError> {
        self.client.complete(&CompletionRequest::new(prompt)).await
    }

    /// Analyze `code` for bugs and improvements.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the completion call fails.
    pub async fn analyze_code(&self, code: &str, language: &str) -> Result<String, ClientError> {
        let request = CompletionRequest {
            prompt: analysis_prompt(code, language),
            max_tokens: 1000,
            temperature: 0.5,
            language: None,
        };
        self.client.complete(&request).await
    }

    /// Generate unit tests for `code` using `framework`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the completion call fails.
    pub async fn generate_unit_tests(
        &self,
        code: &str,
        language: &str,
        framework: &str,
    ) -> Result<String, ClientError> {
        let request = CompletionRequest {
            prompt: unit_test_prompt(code, language, framework),
            max_tokens: 1000,
            temperature: 0.5,
            language: None,
        };
        self.client.complete(&request).await
    }
}
