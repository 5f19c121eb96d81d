use url::Url;

use crate::{
    core::{
        BriefClient, BriefError, MarketSnapshot, RetryConfig, error::status_error, retry::with_retry,
    },
    market::wire,
};

pub(super) async fn fetch_markets(
    client: &BriefClient,
    ids: &[String],
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<MarketSnapshot>, BriefError> {
    if ids.is_empty() {
        return Err(BriefError::InvalidInput(
            "at least one coin id is required".into(),
        ));
    }

    let mut url = client.base_market().join("coins/markets")?;
    url.query_pairs_mut()
        .append_pair("vs_currency", "usd")
        .append_pair("ids", &ids.join(","))
        .append_pair("price_change_percentage", "24h");

    let cfg = retry_override.unwrap_or_else(|| client.retry_config());
    with_retry(cfg, || attempt_fetch(client, &url)).await
}

async fn attempt_fetch(client: &BriefClient, url: &Url) -> Result<Vec<MarketSnapshot>, BriefError> {
    let mut req = client
        .http()
        .get(url.clone())
        .header("accept", "application/json");
    if let Some(key) = client.market_api_key() {
        req = req.header("x-cg-demo-api-key", key);
    }

    let resp = req.send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(status_error(status.as_u16(), url));
    }

    let body = resp.text().await?;
    let nodes: Vec<wire::MarketNode> = serde_json::from_str(&body)?;
    Ok(nodes.into_iter().map(Into::into).collect())
}

impl From<wire::MarketNode> for MarketSnapshot {
    fn from(n: wire::MarketNode) -> Self {
        let last_updated = n
            .last_updated
            .as_deref()
            .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.timestamp())
            .unwrap_or_default();
        Self {
            id: n.id,
            symbol: n.symbol.unwrap_or_default().to_uppercase(),
            name: n.name.unwrap_or_default(),
            price: n.current_price.unwrap_or_default(),
            change_24h: n.price_change_24h.unwrap_or_default(),
            change_pct_24h: n.price_change_percentage_24h.unwrap_or_default(),
            volume_24h: n.total_volume,
            market_cap: n.market_cap,
            last_updated,
        }
    }
}
