//! # Feed Client Integration Tests
//!
//! Exercises `FeedClient` against a wiremock server: correct request
//! construction, array decoding, status triage, and malformed bodies —
//! no live feed access required.

use stuckinside_feed::{FeedClient, FeedConfig, FeedError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn feed_client(server: &MockServer) -> FeedClient {
    FeedClient::new(FeedConfig::new(format!("{}/feed.json", server.uri()))).expect("client build")
}

#[tokio::test]
async fn fetch_records_decodes_array() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/feed.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "CountryName": "Italy",
                "CountryCode": "ITA",
                "StartDate": 20200309,
                "EndDate": "null",
                "PolicyType": "C6: Stay at home requirements",
                "PolicyValue": 3,
                "Flag": 1,
                "InitialNote": "National lockdown"
            },
            {
                "CountryName": "France",
                "CountryCode": "FRA",
                "StartDate": "20200317",
                "EndDate": 20200510,
                "PolicyType": "C6: Stay at home requirements",
                "PolicyValue": "null"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let records = feed_client(&server).fetch_records().await.expect("fetch");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].country_code, "ITA");
    assert_eq!(records[0].start_date, "20200309");
    assert_eq!(records[1].policy_value, None);
    assert_eq!(records[1].end_date, "20200510");
}

#[tokio::test]
async fn fetch_records_tolerates_unknown_columns() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/feed.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "CountryName": "Germany",
                "CountryCode": "DEU",
                "StartDate": 20200322,
                "EndDate": "null",
                "NewUpstreamColumn": {"nested": true}
            }
        ])))
        .mount(&server)
        .await;

    let records = feed_client(&server).fetch_records().await.expect("fetch");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].country_code, "DEU");
}

#[tokio::test]
async fn fetch_records_surfaces_non_2xx_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/feed.json"))
        .respond_with(ResponseTemplate::new(503).set_body_string("feed offline"))
        .expect(1)
        .mount(&server)
        .await;

    let err = feed_client(&server).fetch_records().await.unwrap_err();
    match err {
        FeedError::Status { status, body, .. } => {
            assert_eq!(status, 503);
            assert_eq!(body, "feed offline");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_records_rejects_non_array_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/feed.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"not": "an array"})),
        )
        .mount(&server)
        .await;

    let err = feed_client(&server).fetch_records().await.unwrap_err();
    assert!(matches!(err, FeedError::Parse { .. }), "got {err:?}");
}

#[tokio::test]
async fn fetch_records_rejects_invalid_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/feed.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = feed_client(&server).fetch_records().await.unwrap_err();
    assert!(matches!(err, FeedError::Parse { .. }), "got {err:?}");
}

#[tokio::test]
async fn client_rejects_invalid_url() {
    let err = FeedClient::new(FeedConfig::new("not a url")).unwrap_err();
    assert!(matches!(err, FeedError::Config(_)), "got {err:?}");
}
