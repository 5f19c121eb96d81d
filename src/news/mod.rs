mod api;
mod wire;

use std::future::Future;
use std::pin::Pin;

use crate::core::{
    BriefClient, BriefError, CacheMode, NewsItem, RetryConfig, client::DEFAULT_LOOKBACK_HOURS,
};

/// A builder for fetching recent news for a set of currency symbols.
///
/// Results are consulted through the client's TTL cache, keyed by the sorted
/// symbol list and the lookback window, so repeated runs within the TTL do
/// not re-hit the provider.
#[derive(Clone)]
pub struct NewsBuilder {
    client: BriefClient,
    symbols: Vec<String>,
    hours_back: u32,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder`.
    pub fn new(client: &BriefClient) -> Self {
        Self {
            client: client.clone(),
            symbols: Vec::new(),
            hours_back: DEFAULT_LOOKBACK_HOURS,
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// Sets the currency symbols to fetch news for (e.g. `BTC`, `ETH`).
    #[must_use]
    pub fn symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the trailing window, in hours, for item relevance. Default: 48.
    #[must_use]
    pub const fn hours_back(mut self, hours: u32) -> Self {
        self.hours_back = hours;
        self
    }

    /// Sets the cache mode for this specific API call.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Executes the request and fetches items published within the window.
    ///
    /// # Errors
    ///
    /// Returns [`BriefError::Config`] when no news API key was configured,
    /// [`BriefError::InvalidInput`] for an empty symbol list, and the usual
    /// client/transient errors otherwise.
    pub async fn fetch(self) -> Result<Vec<NewsItem>, BriefError> {
        api::fetch_news(
            &self.client,
            &self.symbols,
            self.hours_back,
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await
    }
}

/// A capability interface for anything that can produce news items.
pub trait NewsSource: Send + Sync {
    /// Fetch news items for `symbols` published within the trailing
    /// `hours_back` window.
    fn fetch<'a>(
        &'a self,
        symbols: &'a [String],
        hours_back: u32,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<NewsItem>, BriefError>> + Send + 'a>>;
}

impl NewsSource for BriefClient {
    fn fetch<'a>(
        &'a self,
        symbols: &'a [String],
        hours_back: u32,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<NewsItem>, BriefError>> + Send + 'a>> {
        Box::pin(async move {
            NewsBuilder::new(self)
                .symbols(symbols.iter().cloned())
                .hours_back(hours_back)
                .fetch()
                .await
        })
    }
}
