//! Public client surface + builder.
//!
//! The client is an explicitly constructed context object: every endpoint,
//! credential and policy is supplied here, never read from the environment,
//! so the core is testable without environment mutation.

mod constants;

use std::time::Duration;

use constants::{
    DEFAULT_BASE_LLM, DEFAULT_BASE_MARKET, DEFAULT_BASE_NEWS, DEFAULT_LLM_MODEL, USER_AGENT,
};
use reqwest::Client;
use url::Url;

use crate::core::{BriefError, RetryConfig, cache::TtlCache};

pub(crate) use constants::{ANTHROPIC_VERSION, DEFAULT_LOOKBACK_HOURS};

/// Defines how an API call interacts with the response cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheMode {
    /// Read from the cache if a non-expired entry is present; otherwise fetch
    /// from the network and write the response to the cache. (Default)
    Use,
    /// Always fetch from the network, bypassing any cached entry, and write
    /// the new response to the cache.
    Refresh,
    /// Always fetch from the network and do not read from or write to the cache.
    Bypass,
}

/// Shared context for all adapters: HTTP client, endpoints, credentials,
/// retry policy and response cache.
#[derive(Debug, Clone)]
pub struct BriefClient {
    http: Client,
    base_market: Url,
    base_news: Url,
    base_llm: Url,

    market_api_key: Option<String>,
    news_api_key: Option<String>,
    llm_api_key: Option<String>,
    llm_model: String,

    retry: RetryConfig,
    cache: TtlCache,
}

impl Default for BriefClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl BriefClient {
    /// Create a new builder.
    #[must_use]
    pub fn builder() -> BriefClientBuilder {
        BriefClientBuilder::default()
    }

    /* -------- internal getters used by the adapter modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_market(&self) -> &Url {
        &self.base_market
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) fn base_llm(&self) -> &Url {
        &self.base_llm
    }
    pub(crate) fn market_api_key(&self) -> Option<&str> {
        self.market_api_key.as_deref()
    }
    pub(crate) fn news_api_key(&self) -> Option<&str> {
        self.news_api_key.as_deref()
    }
    pub(crate) fn llm_api_key(&self) -> Option<&str> {
        self.llm_api_key.as_deref()
    }
    pub(crate) fn llm_model(&self) -> &str {
        &self.llm_model
    }

    /// The default retry policy applied when a call has no override.
    #[must_use]
    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// The shared response cache (disabled unless a TTL was configured).
    #[must_use]
    pub fn cache(&self) -> &TtlCache {
        &self.cache
    }

    #[must_use]
    pub fn cache_enabled(&self) -> bool {
        self.cache.is_enabled()
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct BriefClientBuilder {
    user_agent: Option<String>,
    base_market: Option<Url>,
    base_news: Option<Url>,
    base_llm: Option<Url>,

    market_api_key: Option<String>,
    news_api_key: Option<String>,
    llm_api_key: Option<String>,
    llm_model: Option<String>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    cache_ttl: Option<Duration>,
    retry: Option<RetryConfig>,
}

impl BriefClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the market-data API base (e.g. `https://api.coingecko.com/api/v3/`).
    #[must_use]
    pub fn base_market(mut self, url: Url) -> Self {
        self.base_market = Some(url);
        self
    }

    /// Override the news API base (e.g. `https://cryptopanic.com/api/v1/`).
    #[must_use]
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Override the LLM messages endpoint.
    #[must_use]
    pub fn base_llm(mut self, url: Url) -> Self {
        self.base_llm = Some(url);
        self
    }

    /// API key sent to the market-data provider. Optional; the public
    /// endpoint works without one at a lower rate limit.
    #[must_use]
    pub fn market_api_key(mut self, key: impl Into<String>) -> Self {
        self.market_api_key = Some(key.into());
        self
    }

    /// Auth token for the news provider. Required before fetching news.
    #[must_use]
    pub fn news_api_key(mut self, key: impl Into<String>) -> Self {
        self.news_api_key = Some(key.into());
        self
    }

    /// API key for the LLM provider. Required before generating summaries.
    #[must_use]
    pub fn llm_api_key(mut self, key: impl Into<String>) -> Self {
        self.llm_api_key = Some(key.into());
        self
    }

    /// Override the LLM model name.
    #[must_use]
    pub fn llm_model(mut self, model: impl Into<String>) -> Self {
        self.llm_model = Some(model.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Enable response caching with a default TTL.
    /// If not set, caching is disabled.
    #[must_use]
    pub fn cache_ttl(mut self, dur: Duration) -> Self {
        self.cache_ttl = Some(dur);
        self
    }

    /// Override the default retry policy.
    #[must_use]
    pub fn retry(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns a [`BriefError`] if a default base URL fails to parse or the
    /// underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<BriefClient, BriefError> {
        let base_market = self.base_market.unwrap_or(Url::parse(DEFAULT_BASE_MARKET)?);
        let base_news = self.base_news.unwrap_or(Url::parse(DEFAULT_BASE_NEWS)?);
        let base_llm = self.base_llm.unwrap_or(Url::parse(DEFAULT_BASE_LLM)?);

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(BriefClient {
            http,
            base_market,
            base_news,
            base_llm,
            market_api_key: self.market_api_key,
            news_api_key: self.news_api_key,
            llm_api_key: self.llm_api_key,
            llm_model: self
                .llm_model
                .unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            retry: self.retry.unwrap_or_default(),
            cache: self
                .cache_ttl
                .map_or_else(TtlCache::disabled, TtlCache::new),
        })
    }
}
