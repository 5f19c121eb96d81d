//! One-run pipeline composition: fetch market data and news, correlate,
//! build the prompt, and collect validated LLM summaries.
//!
//! Each run is a single, stateless computation over one fixed time window.
//! Rendering the result to HTML and sending it stay outside this crate.

use serde::Serialize;

use crate::{
    core::{BriefClient, BriefError, CacheMode, CorrelationRecord, RetryConfig},
    correlate::correlate,
    market::MarketBuilder,
    news::NewsBuilder,
    summary::SummaryBuilder,
};

/// One coin in the fixed tracked set: the market provider's id plus the
/// ticker symbol the news provider filters by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedCoin {
    pub id: String,
    pub symbol: String,
}

impl<I: Into<String>, S: Into<String>> From<(I, S)> for TrackedCoin {
    fn from((id, symbol): (I, S)) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
        }
    }
}

/// One newsletter section: the correlation record plus the model's summary
/// for it, when one was returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DigestSection {
    pub record: CorrelationRecord,
    /// `None` when the model skipped the coin; partial results are accepted.
    pub summary: Option<String>,
}

/// The payload of one newsletter run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Digest {
    /// Unix timestamp (seconds) of when the digest was computed.
    pub generated_at: i64,
    pub sections: Vec<DigestSection>,
}

/// A builder for one end-to-end digest computation.
#[derive(Clone)]
pub struct DigestBuilder {
    client: BriefClient,
    coins: Vec<TrackedCoin>,
    hours_back: Option<u32>,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl DigestBuilder {
    /// Creates a new `DigestBuilder`.
    pub fn new(client: &BriefClient) -> Self {
        Self {
            client: client.clone(),
            coins: Vec::new(),
            hours_back: None,
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// Sets the fixed set of tracked coins.
    #[must_use]
    pub fn coins<I, C>(mut self, coins: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<TrackedCoin>,
    {
        self.coins = coins.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the news lookback window in hours. Default: 48.
    #[must_use]
    pub const fn hours_back(mut self, hours: u32) -> Self {
        self.hours_back = Some(hours);
        self
    }

    /// Sets the cache mode for the news fetch.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Overrides the default retry policy for every call this run makes.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Runs the pipeline: market + news fetched concurrently, correlated,
    /// summarized.
    ///
    /// Any propagated error aborts the whole run; no partial newsletter is
    /// produced. A coin the model skipped keeps its section with an empty
    /// summary instead.
    ///
    /// # Errors
    ///
    /// Returns [`BriefError::InvalidInput`] for an empty coin set, plus
    /// whatever the underlying adapters propagate.
    pub async fn run(self) -> Result<Digest, BriefError> {
        if self.coins.is_empty() {
            return Err(BriefError::InvalidInput(
                "at least one tracked coin is required".into(),
            ));
        }

        let ids: Vec<String> = self.coins.iter().map(|c| c.id.clone()).collect();
        let symbols: Vec<String> = self.coins.iter().map(|c| c.symbol.clone()).collect();

        let market = MarketBuilder::new(&self.client)
            .ids(ids)
            .retry_policy(self.retry_override.clone());
        let mut news = NewsBuilder::new(&self.client)
            .symbols(symbols)
            .cache_mode(self.cache_mode)
            .retry_policy(self.retry_override.clone());
        if let Some(hours) = self.hours_back {
            news = news.hours_back(hours);
        }

        let (snapshots, items) = tokio::join!(market.fetch(), news.fetch());
        let (snapshots, items) = (snapshots?, items?);

        let records = correlate(&snapshots, &items);
        let summaries = SummaryBuilder::new(&self.client, records.clone())
            .retry_policy(self.retry_override)
            .generate()
            .await?;

        let sections = records
            .into_iter()
            .map(|record| {
                let summary = summaries
                    .iter()
                    .find(|s| s.symbol.eq_ignore_ascii_case(&record.symbol))
                    .map(|s| s.summary.clone());
                DigestSection { record, summary }
            })
            .collect();

        Ok(Digest {
            generated_at: chrono::Utc::now().timestamp(),
            sections,
        })
    }
}
