//! Deterministic templating of correlation records into the LLM request,
//! plus the contract the model's response must satisfy.

use std::fmt::Write as _;

use serde_json::{Value, json};

use crate::core::{BriefError, CorrelationRecord, ExplanationBasis};

/// Fixed system instructions embedded at the top of every prompt.
///
/// They forbid speculation and advisory language, require the literal
/// "Insufficient data" citation for signals-only coins, and cap each
/// explanation at 3-4 sentences.
const INSTRUCTIONS: &str = "\
You are writing the explanations for a factual daily cryptocurrency newsletter.

Rules:
- Use only the facts supplied below. Do not speculate, and do not invent causes \
that are not stated.
- Do not give trading recommendations or advice of any kind.
- When a coin has no news and only fallback signals, begin its summary with \
\"Insufficient data\" and describe the signals factually.
- Keep each coin's explanation to 3-4 sentences.
- Respond with a single JSON object conforming to the provided schema, and \
nothing else.";

/// Render the correlation records into a single templated request.
///
/// # Errors
///
/// Returns [`BriefError::InvalidInput`] for an empty record list.
pub fn build_prompt(records: &[CorrelationRecord]) -> Result<String, BriefError> {
    if records.is_empty() {
        return Err(BriefError::InvalidInput(
            "cannot build a prompt from zero correlation records".into(),
        ));
    }

    let mut out = String::from(INSTRUCTIONS);
    out.push_str("\n\n");

    for record in records {
        render_section(&mut out, record);
    }

    Ok(out)
}

fn render_section(out: &mut String, record: &CorrelationRecord) {
    let _ = writeln!(out, "## {} ({})", record.name, record.symbol);
    let _ = writeln!(
        out,
        "Price moved {} {:+.2}% over the last 24 hours.",
        record.direction.as_str(),
        record.change_pct_24h
    );
    let _ = writeln!(out, "Current price: ${:.2}", record.price);

    if !record.news.is_empty() {
        let _ = writeln!(out, "News:");
        for (idx, item) in record.news.iter().enumerate() {
            match &item.description {
                Some(desc) => {
                    let _ = writeln!(out, "{}. [{}] {}: {}", idx + 1, item.source, item.title, desc);
                }
                None => {
                    let _ = writeln!(out, "{}. [{}] {}", idx + 1, item.source, item.title);
                }
            }
        }
    }

    if matches!(
        record.basis,
        ExplanationBasis::Signals | ExplanationBasis::Both
    ) {
        let _ = writeln!(out, "Signals:");
        for signal in &record.signals {
            let _ = writeln!(out, "- {signal}");
        }
    }

    out.push('\n');
}

/// The structured-output schema the model's response must satisfy: a
/// `summaries` array of objects with exactly {coin, symbol, summary} string
/// fields, all required.
#[must_use]
pub fn response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "summaries": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "coin": { "type": "string" },
                        "symbol": { "type": "string" },
                        "summary": { "type": "string" }
                    },
                    "required": ["coin", "symbol", "summary"],
                    "additionalProperties": false
                }
            }
        },
        "required": ["summaries"],
        "additionalProperties": false
    })
}
