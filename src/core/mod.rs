//! Core components of the `coinbrief` crate.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`BriefClient`] and its builder.
//! - The primary [`BriefError`] type and its retry classification.
//! - Shared data models like [`MarketSnapshot`] and [`CorrelationRecord`].
//! - The [`TtlCache`] and the resilient-fetch retry policy.

/// The main client (`BriefClient`), builder, and cache-mode configuration.
pub mod client;
/// The primary error type (`BriefError`) for the crate.
pub mod error;
/// Shared data models used across multiple API modules.
pub mod models;

/// The TTL response cache.
pub mod cache;
/// Retry/backoff policy applied uniformly to network-bound operations.
pub mod retry;

pub use cache::TtlCache;
pub use client::{BriefClient, BriefClientBuilder, CacheMode};
pub use error::BriefError;
pub use models::{
    CoinSummary, CorrelationRecord, Direction, ExplanationBasis, MarketSnapshot, NewsItem, Votes,
};
pub use retry::{Backoff, RetryConfig, with_retry};
