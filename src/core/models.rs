use serde::Serialize;

/* ----- MARKET (shared by market/, correlate/, digest) ----- */

/// A point-in-time view of one tracked asset, produced once per pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketSnapshot {
    /// Provider identifier for the coin (e.g. `bitcoin`).
    pub id: String,
    /// Ticker symbol (e.g. `BTC`).
    pub symbol: String,
    /// Display name (e.g. `Bitcoin`).
    pub name: String,
    /// Current price in USD.
    pub price: f64,
    /// Absolute price change over the last 24 hours.
    pub change_24h: f64,
    /// Percentage price change over the last 24 hours.
    pub change_pct_24h: f64,
    /// Trading volume over the last 24 hours, when the provider reports it.
    pub volume_24h: Option<f64>,
    /// Market capitalization, when the provider reports it.
    pub market_cap: Option<f64>,
    /// Unix timestamp (seconds) of the provider's last update.
    pub last_updated: i64,
}

/* ----- NEWS (shared by news/, correlate/, summary/) ----- */

/// Community vote counts attached to a news item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Votes {
    pub positive: u32,
    pub negative: u32,
    pub important: u32,
}

/// A single news item as returned by the news source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsItem {
    /// Provider identifier for the item.
    pub id: String,
    /// The headline.
    pub title: String,
    /// Body snippet, when the provider supplies one.
    pub description: Option<String>,
    /// Unix timestamp (seconds) of publication.
    pub published_at: i64,
    /// Publisher name or domain (e.g. `CoinDesk`, `coindesk.com`).
    pub source: String,
    /// Direct link to the article.
    pub url: Option<String>,
    /// Ticker symbols the provider associates with this item.
    ///
    /// Uniqueness is not guaranteed; providers may list a symbol more than
    /// once when it is derived from text-matching heuristics.
    pub currencies: Vec<String>,
    /// Provider category tag (e.g. `news`, `media`).
    pub kind: String,
    /// Community vote counts.
    pub votes: Votes,
}

/* ----- CORRELATION (produced by correlate/, consumed by summary/) ----- */

/// Direction of an asset's 24h price movement.
///
/// `Up` requires a strictly positive percentage change; an exactly-zero
/// change classifies as `Down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// What the LLM summary for a coin should lean on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplanationBasis {
    /// Two or more relevant news items matched the symbol.
    News,
    /// Exactly one relevant news item matched; signals fill the gap.
    Both,
    /// No relevant news; only fallback signals are available.
    Signals,
}

impl ExplanationBasis {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Both => "both",
            Self::Signals => "signals",
        }
    }
}

/// The explanation basis for one asset: its price movement joined with the
/// news relevant to it, derived 1:1 from a [`MarketSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationRecord {
    /// Provider identifier of the coin.
    pub coin_id: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Current price in USD.
    pub price: f64,
    /// Absolute 24h change.
    pub change_24h: f64,
    /// Percentage 24h change.
    pub change_pct_24h: f64,
    /// 24h volume, if reported.
    pub volume_24h: Option<f64>,
    /// Market capitalization, if reported.
    pub market_cap: Option<f64>,
    /// Movement direction derived from the percentage change.
    pub direction: Direction,
    /// Up to 5 relevant news items, most recent first.
    pub news: Vec<NewsItem>,
    /// Deterministic fallback sentences describing price, volume and cap.
    pub signals: Vec<String>,
    /// Whether the summary should lean on news, signals, or both.
    pub basis: ExplanationBasis,
}

/* ----- LLM OUTPUT (shared by summary/ and digest) ----- */

/// One validated per-coin summary returned by the language model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoinSummary {
    /// Display name of the coin.
    pub coin: String,
    /// Ticker symbol.
    pub symbol: String,
    /// The explanatory summary text.
    pub summary: String,
}
