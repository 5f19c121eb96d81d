use serde::Deserialize;

/// One element of the provider's `/coins/markets` array response.
#[derive(Deserialize)]
pub(crate) struct MarketNode {
    pub(crate) id: String,
    pub(crate) symbol: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) current_price: Option<f64>,
    pub(crate) price_change_24h: Option<f64>,
    pub(crate) price_change_percentage_24h: Option<f64>,
    pub(crate) total_volume: Option<f64>,
    pub(crate) market_cap: Option<f64>,
    pub(crate) last_updated: Option<String>,
}
