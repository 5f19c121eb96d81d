mod api;
pub mod prompt;
mod wire;

use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

pub use prompt::{build_prompt, response_schema};

use crate::core::{BriefClient, BriefError, CoinSummary, CorrelationRecord, RetryConfig};

/// A builder for turning correlation records into per-coin LLM summaries.
#[derive(Clone)]
pub struct SummaryBuilder {
    client: BriefClient,
    records: Vec<CorrelationRecord>,
    retry_override: Option<RetryConfig>,
}

impl SummaryBuilder {
    /// Creates a new `SummaryBuilder` over the given correlation records.
    pub fn new(client: &BriefClient, records: Vec<CorrelationRecord>) -> Self {
        Self {
            client: client.clone(),
            records,
            retry_override: None,
        }
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Builds the prompt and schema, calls the model, and validates the
    /// response.
    ///
    /// # Errors
    ///
    /// Returns [`BriefError::InvalidInput`] for an empty record list,
    /// [`BriefError::Config`] when no LLM API key is configured, and the
    /// usual client/transient errors otherwise. Missing or malformed entries
    /// in an otherwise valid response are warnings, not failures.
    pub async fn generate(self) -> Result<Vec<CoinSummary>, BriefError> {
        let prompt = prompt::build_prompt(&self.records)?;
        let schema = prompt::response_schema();
        let expected: Vec<String> = self.records.iter().map(|r| r.symbol.clone()).collect();
        api::generate(
            &self.client,
            &prompt,
            &schema,
            &expected,
            self.retry_override.as_ref(),
        )
        .await
    }
}

/// A capability interface for the language-model adapter.
pub trait Summarizer: Send + Sync {
    /// Generate one summary per expected coin from a prepared prompt and
    /// response schema. Partial results are acceptable.
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
        schema: &'a Value,
        expected_symbols: &'a [String],
    ) -> Pin<Box<dyn Future<Output = Result<Vec<CoinSummary>, BriefError>> + Send + 'a>>;
}

impl Summarizer for BriefClient {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
        schema: &'a Value,
        expected_symbols: &'a [String],
    ) -> Pin<Box<dyn Future<Output = Result<Vec<CoinSummary>, BriefError>> + Send + 'a>> {
        Box::pin(async move { api::generate(self, prompt, schema, expected_symbols, None).await })
    }
}
