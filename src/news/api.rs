use url::Url;

use crate::{
    core::{
        BriefClient, BriefError, CacheMode, NewsItem, RetryConfig, Votes, error::status_error,
        retry::with_retry,
    },
    news::wire,
};

/// Deterministic cache key for a news request: sorted, comma-joined symbols
/// plus the lookback window.
pub(super) fn cache_key(symbols: &[String], hours_back: u32) -> String {
    let mut sorted: Vec<String> = symbols.iter().map(|s| s.to_uppercase()).collect();
    sorted.sort();
    format!("news:{}:{}h", sorted.join(","), hours_back)
}

pub(super) async fn fetch_news(
    client: &BriefClient,
    symbols: &[String],
    hours_back: u32,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<NewsItem>, BriefError> {
    let Some(token) = client.news_api_key() else {
        return Err(BriefError::Config(
            "news API key is required to fetch news".into(),
        ));
    };
    if symbols.is_empty() {
        return Err(BriefError::InvalidInput(
            "at least one currency symbol is required".into(),
        ));
    }

    let key = cache_key(symbols, hours_back);
    let cutoff = chrono::Utc::now().timestamp() - i64::from(hours_back) * 3600;

    if cache_mode == CacheMode::Use
        && let Some(body) = client.cache().get(&key).await
    {
        // A corrupt cached payload is a miss, never a failure.
        match parse_posts(&body) {
            Ok(items) => return Ok(within_window(items, cutoff)),
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "discarding unparseable cached news payload");
            }
        }
    }

    let mut url = client.base_news().join("posts/")?;
    url.query_pairs_mut()
        .append_pair("auth_token", token)
        .append_pair("currencies", &sorted_symbols(symbols).join(","))
        .append_pair("public", "true");

    let cfg = retry_override.unwrap_or_else(|| client.retry_config());
    let (body, items) = with_retry(cfg, || attempt_fetch(client, &url)).await?;

    if cache_mode != CacheMode::Bypass {
        client.cache().set(&key, &body).await;
    }

    Ok(within_window(items, cutoff))
}

fn sorted_symbols(symbols: &[String]) -> Vec<String> {
    let mut sorted: Vec<String> = symbols.iter().map(|s| s.to_uppercase()).collect();
    sorted.sort();
    sorted
}

async fn attempt_fetch(
    client: &BriefClient,
    url: &Url,
) -> Result<(String, Vec<NewsItem>), BriefError> {
    let resp = client
        .http()
        .get(url.clone())
        .header("accept", "application/json")
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(status_error(status.as_u16(), url));
    }

    let body = resp.text().await?;
    let items = parse_posts(&body)?;
    Ok((body, items))
}

fn parse_posts(body: &str) -> Result<Vec<NewsItem>, BriefError> {
    let envelope: wire::NewsEnvelope = serde_json::from_str(body)?;
    let posts = envelope.results.unwrap_or_default();

    let items = posts
        .into_iter()
        .filter_map(|post| {
            let id = post.id?;
            let title = post.title?;
            let published_at = chrono::DateTime::parse_from_rfc3339(&post.published_at?)
                .ok()?
                .timestamp();

            let source = post
                .source
                .and_then(|s| s.title.or(s.domain))
                .unwrap_or_default();
            let currencies = post
                .currencies
                .unwrap_or_default()
                .into_iter()
                .filter_map(|c| c.code)
                .collect();
            let votes = post.votes.unwrap_or_default();

            Some(NewsItem {
                id: id.to_string(),
                title,
                description: post.description.filter(|d| !d.is_empty()),
                published_at,
                source,
                url: post.url,
                currencies,
                kind: post.kind.unwrap_or_else(|| "news".to_string()),
                votes: Votes {
                    positive: votes.positive.unwrap_or_default(),
                    negative: votes.negative.unwrap_or_default(),
                    important: votes.important.unwrap_or_default(),
                },
            })
        })
        .collect();

    Ok(items)
}

/// Client-side filter to the trailing lookback window.
fn within_window(items: Vec<NewsItem>, cutoff: i64) -> Vec<NewsItem> {
    items
        .into_iter()
        .filter(|item| item.published_at >= cutoff)
        .collect()
}
