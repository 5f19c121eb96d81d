use coinbrief::{BriefError, NewsBuilder, NewsSource};
use httpmock::{Method::GET, MockServer};

use crate::common::{client_for, posts_body};

#[tokio::test]
async fn offline_news_parses_posts() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/posts/")
            .query_param("auth_token", "test-token")
            .query_param("currencies", "BTC,ETH")
            .query_param("public", "true");
        then.status(200)
            .header("content-type", "application/json")
            .body(posts_body(&[
                (101, "Bitcoin ETF inflows surge", &["BTC"], 2),
                (102, "Ethereum upgrade ships", &["ETH", "BTC"], 5),
            ]));
    });

    let client = client_for(&server);
    let items = NewsBuilder::new(&client)
        .symbols(["ETH", "BTC"])
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(items.len(), 2);

    let first = &items[0];
    assert_eq!(first.id, "101");
    assert_eq!(first.title, "Bitcoin ETF inflows surge");
    assert_eq!(first.source, "CoinDesk");
    assert_eq!(first.currencies, vec!["BTC".to_string()]);
    assert_eq!(first.kind, "news");
    assert_eq!(first.votes.positive, 12);
    assert_eq!(first.votes.important, 3);
    // An empty description maps to absent.
    assert_eq!(first.description, None);
    assert!(first.published_at > 0);
}

#[tokio::test]
async fn items_outside_the_lookback_window_are_dropped() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/posts/");
        then.status(200)
            .header("content-type", "application/json")
            .body(posts_body(&[
                (201, "Fresh item", &["BTC"], 3),
                (202, "Stale item", &["BTC"], 100),
            ]));
    });

    let client = client_for(&server);
    let items = NewsBuilder::new(&client)
        .symbols(["BTC"])
        .hours_back(48)
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "201");
}

#[tokio::test]
async fn missing_news_api_key_is_a_configuration_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/posts/");
        then.status(200).body("{}");
    });

    let client = coinbrief::BriefClient::builder()
        .base_news(url::Url::parse(&format!("{}/api/v1/", server.base_url())).unwrap())
        .build()
        .unwrap();
    let err = NewsBuilder::new(&client)
        .symbols(["BTC"])
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, BriefError::Config(_)));
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn empty_symbol_list_is_invalid_input() {
    let server = MockServer::start();
    let client = client_for(&server);

    let err = NewsBuilder::new(&client).fetch().await.unwrap_err();
    assert!(matches!(err, BriefError::InvalidInput(_)));
}

#[tokio::test]
async fn news_source_trait_delegates_to_the_client() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/posts/");
        then.status(200)
            .header("content-type", "application/json")
            .body(posts_body(&[(301, "Headline", &["BTC"], 1)]));
    });

    let client = client_for(&server);
    let symbols = vec!["BTC".to_string()];
    let items = NewsSource::fetch(&client, &symbols, 48).await.unwrap();

    mock.assert();
    assert_eq!(items.len(), 1);
}
