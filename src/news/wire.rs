use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct NewsEnvelope {
    pub(crate) results: Option<Vec<PostNode>>,
}

#[derive(Deserialize)]
pub(crate) struct PostNode {
    pub(crate) id: Option<i64>,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) published_at: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) source: Option<SourceNode>,
    pub(crate) currencies: Option<Vec<CurrencyNode>>,
    pub(crate) kind: Option<String>,
    pub(crate) votes: Option<VotesNode>,
}

#[derive(Deserialize)]
pub(crate) struct SourceNode {
    pub(crate) title: Option<String>,
    pub(crate) domain: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct CurrencyNode {
    pub(crate) code: Option<String>,
}

#[derive(Deserialize, Default)]
pub(crate) struct VotesNode {
    pub(crate) positive: Option<u32>,
    pub(crate) negative: Option<u32>,
    pub(crate) important: Option<u32>,
}
