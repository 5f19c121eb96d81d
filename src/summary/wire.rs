use serde::Deserialize;

/// Envelope of the messages API response.
#[derive(Deserialize)]
pub(crate) struct LlmEnvelope {
    pub(crate) content: Option<Vec<ContentBlock>>,
}

#[derive(Deserialize)]
pub(crate) struct ContentBlock {
    #[serde(rename = "type")]
    pub(crate) kind: Option<String>,
    pub(crate) text: Option<String>,
}

/// The JSON document the model is instructed to emit.
#[derive(Deserialize)]
pub(crate) struct SummariesDoc {
    pub(crate) summaries: Vec<SummaryNode>,
}

#[derive(Deserialize)]
pub(crate) struct SummaryNode {
    pub(crate) coin: Option<String>,
    pub(crate) symbol: Option<String>,
    pub(crate) summary: Option<String>,
}
