pub(crate) const USER_AGENT: &str = "coinbrief/0.1 (+https://github.com/coinbrief-rs/coinbrief)";

pub(crate) const DEFAULT_BASE_MARKET: &str = "https://api.coingecko.com/api/v3/";
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://cryptopanic.com/api/v1/";
pub(crate) const DEFAULT_BASE_LLM: &str = "https://api.anthropic.com/v1/messages";

pub(crate) const DEFAULT_LLM_MODEL: &str = "claude-3-5-haiku-latest";
pub(crate) const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Default trailing window for news relevance.
pub(crate) const DEFAULT_LOOKBACK_HOURS: u32 = 48;
