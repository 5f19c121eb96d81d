//! coinbrief: the correlation & resilient-fetch core of a daily explanatory
//! cryptocurrency newsletter.
//!
//! The crate fetches price data and news for a fixed set of coins, correlates
//! the two deterministically, and prepares the prompt and response contract
//! for a language model that summarizes the correlation using only supplied
//! facts. Every network-bound adapter goes through the same retry/backoff
//! policy, and the news adapter is backed by a TTL response cache.
//!
//! ```no_run
//! use coinbrief::{BriefClient, DigestBuilder};
//!
//! # async fn run() -> Result<(), coinbrief::BriefError> {
//! let client = BriefClient::builder()
//!     .news_api_key("cryptopanic-token")
//!     .llm_api_key("llm-key")
//!     .cache_ttl(std::time::Duration::from_secs(15 * 60))
//!     .build()?;
//!
//! let digest = DigestBuilder::new(&client)
//!     .coins([("bitcoin", "BTC"), ("ethereum", "ETH")])
//!     .run()
//!     .await?;
//! # let _ = digest;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod correlate;
pub mod digest;
pub mod mail;
pub mod market;
pub mod news;
pub mod summary;

pub use crate::core::{
    Backoff, BriefClient, BriefClientBuilder, BriefError, CacheMode, CoinSummary,
    CorrelationRecord, Direction, ExplanationBasis, MarketSnapshot, NewsItem, RetryConfig,
    TtlCache, Votes, with_retry,
};
pub use correlate::{correlate, format_usd_abbrev};
pub use digest::{Digest, DigestBuilder, DigestSection, TrackedCoin};
pub use mail::{MailTransport, SendReceipt};
pub use market::{MarketBuilder, PriceSource};
pub use news::{NewsBuilder, NewsSource};
pub use summary::{SummaryBuilder, Summarizer, build_prompt, response_schema};
