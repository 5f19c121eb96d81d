//! The correlation engine: a pure function matching price movement to
//! relevant news, or synthesizing fallback signals when news is absent.
//!
//! Nothing in this module performs I/O; given the same snapshots and news
//! items it produces the same records under test and production conditions.

use crate::core::{CorrelationRecord, Direction, ExplanationBasis, MarketSnapshot, NewsItem};

/// Maximum number of news items attached to a single record.
const MAX_NEWS_PER_COIN: usize = 5;

/// Correlate market snapshots with news items, producing one
/// [`CorrelationRecord`] per snapshot in the same order.
///
/// Per asset: news items listing the asset's symbol are selected and sorted
/// most-recent-first (stable, so equal timestamps keep input order), then
/// truncated to 5. The explanation basis is decided by the match count
/// *before* truncation: 2+ → news, exactly 1 → both, 0 → signals. Fallback
/// signals are always computed, whatever the basis.
///
/// An exactly-zero percentage change classifies as [`Direction::Down`]; the
/// strict `> 0` comparison is deliberate and pinned by tests.
#[must_use]
pub fn correlate(snapshots: &[MarketSnapshot], news: &[NewsItem]) -> Vec<CorrelationRecord> {
    snapshots
        .iter()
        .map(|snap| correlate_one(snap, news))
        .collect()
}

fn correlate_one(snap: &MarketSnapshot, news: &[NewsItem]) -> CorrelationRecord {
    let mut relevant: Vec<&NewsItem> = news
        .iter()
        .filter(|item| {
            item.currencies
                .iter()
                .any(|c| c.eq_ignore_ascii_case(&snap.symbol))
        })
        .collect();
    let matched = relevant.len();

    relevant.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    relevant.truncate(MAX_NEWS_PER_COIN);

    let direction = if snap.change_pct_24h > 0.0 {
        Direction::Up
    } else {
        Direction::Down
    };

    let basis = match matched {
        0 => ExplanationBasis::Signals,
        1 => ExplanationBasis::Both,
        _ => ExplanationBasis::News,
    };

    CorrelationRecord {
        coin_id: snap.id.clone(),
        symbol: snap.symbol.clone(),
        name: snap.name.clone(),
        price: snap.price,
        change_24h: snap.change_24h,
        change_pct_24h: snap.change_pct_24h,
        volume_24h: snap.volume_24h,
        market_cap: snap.market_cap,
        direction,
        news: relevant.into_iter().cloned().collect(),
        signals: fallback_signals(snap, direction),
        basis,
    }
}

/// Deterministic, template-generated sentences describing price, volume and
/// market cap, used when insufficient news exists to explain a price move.
fn fallback_signals(snap: &MarketSnapshot, direction: Direction) -> Vec<String> {
    let verb = match direction {
        Direction::Up => "increased",
        Direction::Down => "decreased",
    };
    vec![
        format!(
            "Price {verb} {:+.2}% over the last 24 hours.",
            snap.change_pct_24h
        ),
        format!(
            "24h trading volume was {}.",
            format_usd_abbrev(snap.volume_24h)
        ),
        format!(
            "Market capitalization stands at {}.",
            format_usd_abbrev(snap.market_cap)
        ),
    ]
}

/// Abbreviate a USD amount: `$X.XB` / `$X.XM` / `$X.XK` above 1e9 / 1e6 /
/// 1e3, `$X.XX` below, `$0` when the provider reported nothing.
#[must_use]
pub fn format_usd_abbrev(value: Option<f64>) -> String {
    let Some(v) = value else {
        return "$0".to_string();
    };
    if v >= 1e9 {
        format!("${:.1}B", v / 1e9)
    } else if v >= 1e6 {
        format!("${:.1}M", v / 1e6)
    } else if v >= 1e3 {
        format!("${:.1}K", v / 1e3)
    } else {
        format!("${v:.2}")
    }
}
