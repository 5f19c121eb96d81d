use coinbrief::{BriefError, RetryConfig, SummaryBuilder, Summarizer, correlate};
use httpmock::{Method::POST, MockServer};
use serde_json::json;

use crate::common::{client_for, llm_envelope, snapshot};

#[tokio::test]
async fn offline_generate_returns_validated_summaries() {
    let server = MockServer::start();
    let doc = json!({
        "summaries": [
            { "coin": "Bitcoin", "symbol": "BTC", "summary": "Moved on ETF inflows." },
            { "coin": "Ethereum", "symbol": "ETH", "summary": "Followed the broader market." }
        ]
    });
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/messages")
            .header("x-api-key", "test-key")
            .header("anthropic-version", "2023-06-01");
        then.status(200)
            .header("content-type", "application/json")
            .body(llm_envelope(&doc));
    });

    let client = client_for(&server);
    let records = correlate(
        &[
            snapshot("bitcoin", "BTC", "Bitcoin", 2.0),
            snapshot("ethereum", "ETH", "Ethereum", -1.0),
        ],
        &[],
    );
    let summaries = SummaryBuilder::new(&client, records).generate().await.unwrap();

    mock.assert();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].symbol, "BTC");
    assert_eq!(summaries[0].summary, "Moved on ETF inflows.");
}

#[tokio::test]
async fn entries_with_empty_fields_are_dropped_not_fatal() {
    let server = MockServer::start();
    let doc = json!({
        "summaries": [
            { "coin": "Bitcoin", "symbol": "BTC", "summary": "Valid entry." },
            { "coin": "Ethereum", "symbol": "ETH", "summary": "" }
        ]
    });
    server.mock(|when, then| {
        when.method(POST).path("/v1/messages");
        then.status(200)
            .header("content-type", "application/json")
            .body(llm_envelope(&doc));
    });

    let client = client_for(&server);
    let records = correlate(
        &[
            snapshot("bitcoin", "BTC", "Bitcoin", 2.0),
            snapshot("ethereum", "ETH", "Ethereum", -1.0),
        ],
        &[],
    );
    // A missing expected coin is a warning, not a hard failure.
    let summaries = SummaryBuilder::new(&client, records).generate().await.unwrap();

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].symbol, "BTC");
}

#[tokio::test]
async fn empty_record_list_fails_before_any_network_call() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/messages");
        then.status(200).body("{}");
    });

    let client = client_for(&server);
    let err = SummaryBuilder::new(&client, Vec::new())
        .generate()
        .await
        .unwrap_err();

    assert!(matches!(err, BriefError::InvalidInput(_)));
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn missing_llm_api_key_is_a_configuration_error() {
    let server = MockServer::start();
    let client = coinbrief::BriefClient::builder()
        .base_llm(url::Url::parse(&format!("{}/v1/messages", server.base_url())).unwrap())
        .build()
        .unwrap();

    let records = correlate(&[snapshot("bitcoin", "BTC", "Bitcoin", 2.0)], &[]);
    let err = SummaryBuilder::new(&client, records)
        .generate()
        .await
        .unwrap_err();

    assert!(matches!(err, BriefError::Config(_)));
}

#[tokio::test]
async fn unparseable_model_output_is_a_data_shape_error() {
    let server = MockServer::start();
    let body = json!({
        "content": [ { "type": "text", "text": "no json here" } ]
    });
    server.mock(|when, then| {
        when.method(POST).path("/v1/messages");
        then.status(200)
            .header("content-type", "application/json")
            .body(body.to_string());
    });

    let client = client_for(&server);
    let records = correlate(&[snapshot("bitcoin", "BTC", "Bitcoin", 2.0)], &[]);
    let err = SummaryBuilder::new(&client, records)
        .retry_policy(Some(RetryConfig::no_retries()))
        .generate()
        .await
        .unwrap_err();

    // Malformed bodies classify as transient, so retries would apply.
    assert!(err.is_transient());
}

#[tokio::test]
async fn summarizer_trait_accepts_a_prepared_prompt_and_schema() {
    let server = MockServer::start();
    let doc = json!({
        "summaries": [
            { "coin": "Bitcoin", "symbol": "BTC", "summary": "From the trait." }
        ]
    });
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/messages");
        then.status(200)
            .header("content-type", "application/json")
            .body(llm_envelope(&doc));
    });

    let client = client_for(&server);
    let records = correlate(&[snapshot("bitcoin", "BTC", "Bitcoin", 2.0)], &[]);
    let prompt = coinbrief::build_prompt(&records).unwrap();
    let schema = coinbrief::response_schema();
    let expected = vec!["BTC".to_string()];

    let summaries = Summarizer::generate(&client, &prompt, &schema, &expected)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].summary, "From the trait.");
}
