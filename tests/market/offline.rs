use coinbrief::{BriefError, MarketBuilder, PriceSource};
use httpmock::{Method::GET, MockServer};

use crate::common::client_for;

const MARKETS_BODY: &str = r#"[
  {
    "id": "bitcoin",
    "symbol": "btc",
    "name": "Bitcoin",
    "current_price": 64250.53,
    "price_change_24h": 1474.12,
    "price_change_percentage_24h": 2.35,
    "total_volume": 28000000000.0,
    "market_cap": 850000000000.0,
    "last_updated": "2024-05-01T12:00:00Z"
  },
  {
    "id": "ethereum",
    "symbol": "eth",
    "name": "Ethereum",
    "current_price": 3120.77,
    "price_change_24h": -42.1,
    "price_change_percentage_24h": -1.33,
    "total_volume": null,
    "market_cap": null,
    "last_updated": "2024-05-01T12:00:05Z"
  }
]"#;

#[tokio::test]
async fn offline_markets_parse_into_snapshots() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v3/coins/markets")
            .query_param("vs_currency", "usd")
            .query_param("ids", "bitcoin,ethereum");
        then.status(200)
            .header("content-type", "application/json")
            .body(MARKETS_BODY);
    });

    let client = client_for(&server);
    let snapshots = MarketBuilder::new(&client)
        .ids(["bitcoin", "ethereum"])
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(snapshots.len(), 2);

    let btc = &snapshots[0];
    assert_eq!(btc.id, "bitcoin");
    assert_eq!(btc.symbol, "BTC");
    assert_eq!(btc.name, "Bitcoin");
    assert!((btc.price - 64_250.53).abs() < 1e-9);
    assert!((btc.change_pct_24h - 2.35).abs() < 1e-9);
    assert_eq!(btc.volume_24h, Some(28_000_000_000.0));
    // 2024-05-01T12:00:00Z
    assert_eq!(btc.last_updated, 1_714_564_800);

    let eth = &snapshots[1];
    assert_eq!(eth.symbol, "ETH");
    assert_eq!(eth.volume_24h, None);
    assert_eq!(eth.market_cap, None);
}

#[tokio::test]
async fn empty_id_list_fails_before_any_network_call() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v3/coins/markets");
        then.status(200).body("[]");
    });

    let client = client_for(&server);
    let err = MarketBuilder::new(&client).fetch().await.unwrap_err();

    assert!(matches!(err, BriefError::InvalidInput(_)));
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn api_key_is_sent_as_a_header_when_configured() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v3/coins/markets")
            .header("x-cg-demo-api-key", "demo-key");
        then.status(200)
            .header("content-type", "application/json")
            .body(MARKETS_BODY);
    });

    let client = crate::common::client_builder_for(&server)
        .market_api_key("demo-key")
        .build()
        .unwrap();
    let snapshots = MarketBuilder::new(&client)
        .ids(["bitcoin", "ethereum"])
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(snapshots.len(), 2);
}

#[tokio::test]
async fn price_source_trait_delegates_to_the_client() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v3/coins/markets");
        then.status(200)
            .header("content-type", "application/json")
            .body(MARKETS_BODY);
    });

    let client = client_for(&server);
    let ids = vec!["bitcoin".to_string(), "ethereum".to_string()];
    let snapshots = PriceSource::fetch(&client, &ids).await.unwrap();

    mock.assert();
    assert_eq!(snapshots.len(), 2);
}
