mod api;
mod wire;

use std::future::Future;
use std::pin::Pin;

use crate::core::{BriefClient, BriefError, MarketSnapshot, RetryConfig};

/// A builder for fetching market snapshots for a set of coins.
#[derive(Clone)]
pub struct MarketBuilder {
    client: BriefClient,
    ids: Vec<String>,
    retry_override: Option<RetryConfig>,
}

impl MarketBuilder {
    /// Creates a new `MarketBuilder`.
    pub fn new(client: &BriefClient) -> Self {
        Self {
            client: client.clone(),
            ids: Vec::new(),
            retry_override: None,
        }
    }

    /// Sets the coin identifiers to fetch (provider ids, e.g. `bitcoin`).
    #[must_use]
    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Executes the request and fetches one snapshot per coin.
    ///
    /// # Errors
    ///
    /// Returns [`BriefError::InvalidInput`] for an empty id list (before any
    /// network call), [`BriefError::Auth`] when the provider rejects the key,
    /// and the usual transient errors after retries exhaust.
    pub async fn fetch(self) -> Result<Vec<MarketSnapshot>, BriefError> {
        api::fetch_markets(&self.client, &self.ids, self.retry_override.as_ref()).await
    }
}

/// A capability interface for anything that can produce market snapshots.
///
/// Production code uses [`BriefClient`]; tests can supply a canned variant
/// without touching the network.
pub trait PriceSource: Send + Sync {
    /// Fetch one snapshot per coin id, preserving input order where the
    /// provider allows it.
    fn fetch<'a>(
        &'a self,
        ids: &'a [String],
    ) -> Pin<Box<dyn Future<Output = Result<Vec<MarketSnapshot>, BriefError>> + Send + 'a>>;
}

impl PriceSource for BriefClient {
    fn fetch<'a>(
        &'a self,
        ids: &'a [String],
    ) -> Pin<Box<dyn Future<Output = Result<Vec<MarketSnapshot>, BriefError>> + Send + 'a>> {
        Box::pin(async move {
            MarketBuilder::new(self)
                .ids(ids.iter().cloned())
                .fetch()
                .await
        })
    }
}
