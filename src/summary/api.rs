use serde_json::{Value, json};
use url::Url;

use crate::{
    core::{
        BriefClient, BriefError, CoinSummary, RetryConfig, client::ANTHROPIC_VERSION,
        error::status_error, retry::with_retry,
    },
    summary::wire,
};

pub(super) async fn generate(
    client: &BriefClient,
    prompt: &str,
    schema: &Value,
    expected_symbols: &[String],
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<CoinSummary>, BriefError> {
    let Some(api_key) = client.llm_api_key() else {
        return Err(BriefError::Config(
            "LLM API key is required to generate summaries".into(),
        ));
    };

    let system = format!(
        "Respond with a single JSON object conforming to this schema. \
         Do not output markdown fences or conversational text.\n\n{schema}"
    );
    let payload = json!({
        "model": client.llm_model(),
        "max_tokens": 2048,
        "system": system,
        "messages": [
            { "role": "user", "content": prompt }
        ]
    });

    let url = client.base_llm().clone();
    let cfg = retry_override.unwrap_or_else(|| client.retry_config());
    let summaries =
        with_retry(cfg, || attempt_generate(client, &url, api_key, &payload)).await?;

    Ok(validate(summaries, expected_symbols))
}

async fn attempt_generate(
    client: &BriefClient,
    url: &Url,
    api_key: &str,
    payload: &Value,
) -> Result<Vec<wire::SummaryNode>, BriefError> {
    let resp = client
        .http()
        .post(url.clone())
        .header("x-api-key", api_key)
        .header("anthropic-version", ANTHROPIC_VERSION)
        .header("content-type", "application/json")
        .json(payload)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(status_error(status.as_u16(), url));
    }

    let body = resp.text().await?;
    let envelope: wire::LlmEnvelope = serde_json::from_str(&body)?;
    let text = envelope
        .content
        .unwrap_or_default()
        .into_iter()
        .find(|block| block.kind.as_deref() == Some("text"))
        .and_then(|block| block.text)
        .ok_or_else(|| BriefError::Data("LLM response carries no text content".into()))?;

    // The prompt requests JSON only, but strip the occasional wrapper anyway.
    let start = text.find('{').unwrap_or(0);
    let end = text.rfind('}').map_or(text.len(), |i| i + 1);
    let doc: wire::SummariesDoc = serde_json::from_str(&text[start..end])?;

    Ok(doc.summaries)
}

/// Enforce the response contract: entries with empty fields are dropped with
/// a warning, and expected coins missing from the output are warned about —
/// never raised. Partial results are accepted.
fn validate(nodes: Vec<wire::SummaryNode>, expected_symbols: &[String]) -> Vec<CoinSummary> {
    let summaries: Vec<CoinSummary> = nodes
        .into_iter()
        .filter_map(|node| {
            let coin = node.coin.unwrap_or_default();
            let symbol = node.symbol.unwrap_or_default();
            let summary = node.summary.unwrap_or_default();
            if coin.is_empty() || symbol.is_empty() || summary.is_empty() {
                tracing::warn!(%coin, %symbol, "dropping LLM summary entry with empty fields");
                return None;
            }
            Some(CoinSummary {
                coin,
                symbol,
                summary,
            })
        })
        .collect();

    for expected in expected_symbols {
        if !summaries
            .iter()
            .any(|s| s.symbol.eq_ignore_ascii_case(expected))
        {
            tracing::warn!(symbol = %expected, "LLM output is missing an expected coin");
        }
    }

    summaries
}
