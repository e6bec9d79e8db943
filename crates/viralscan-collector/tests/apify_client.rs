//! Integration tests for `ApifyCollector` using wiremock HTTP mocks.

use chrono::NaiveDate;
use viralscan_collector::{ApifyCollector, Collector, CollectorError, SearchRequest};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACTOR: &str = "apidojo~tweet-scraper";
const SYNC_PATH: &str = "/acts/apidojo~tweet-scraper/run-sync-get-dataset-items";

fn test_collector(base_url: &str) -> ApifyCollector {
    ApifyCollector::with_base_url(Some("test-token".to_string()), ACTOR, 30, base_url)
        .expect("collector construction should not fail")
}

fn request(max_results: usize) -> SearchRequest {
    SearchRequest {
        query: "ChatGPT".to_string(),
        min_engagement: 100,
        since: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        max_results,
        language: "en".to_string(),
    }
}

#[tokio::test]
async fn search_returns_parsed_posts() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        {
            "id": "1",
            "text": "ChatGPT just shipped memory #AI",
            "createdAt": "Thu May 01 12:00:00 +0000 2025",
            "likeCount": 900,
            "retweetCount": 80,
            "replyCount": 20,
            "author": { "userName": "techwatcher", "name": "Tech Watcher" }
        },
        {
            "id": "2",
            "full_text": "Long form ChatGPT thread",
            "likeCount": 150
        }
    ]);

    Mock::given(method("POST"))
        .and(path(SYNC_PATH))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(serde_json::json!({
            "searchTerms": ["ChatGPT min_faves:100 since:2025-05-01 lang:en"],
            "maxItems": 50
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(&body))
        .mount(&server)
        .await;

    let collector = test_collector(&server.uri());
    let posts = collector.search(&request(50)).await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].text, "ChatGPT just shipped memory #AI");
    assert_eq!(posts[0].engagement(), 1000);
    assert_eq!(posts[0].author.as_deref(), Some("techwatcher"));
    assert!(posts[0].timestamp.is_some());
    assert_eq!(posts[1].text, "Long form ChatGPT thread");
    assert_eq!(posts[1].retweet_count, 0);
}

#[tokio::test]
async fn search_caps_results_and_drops_placeholders() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        { "noResults": true },
        { "text": "one", "likeCount": 101 },
        { "text": "two", "likeCount": 102 },
        { "text": "three", "likeCount": 103 }
    ]);

    Mock::given(method("POST"))
        .and(path(SYNC_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let collector = test_collector(&server.uri());
    let posts = collector.search(&request(2)).await.unwrap();
    let texts: Vec<&str> = posts.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two"]);
}

#[tokio::test]
async fn non_success_status_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SYNC_PATH))
        .respond_with(ResponseTemplate::new(402).set_body_string("monthly usage exceeded"))
        .mount(&server)
        .await;

    let collector = test_collector(&server.uri());
    let err = collector.search(&request(10)).await.unwrap_err();
    assert!(
        matches!(err, CollectorError::Api { status: 402, ref message } if message.contains("usage")),
        "expected Api error, got: {err:?}"
    );
}

#[tokio::test]
async fn malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(SYNC_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let collector = test_collector(&server.uri());
    let err = collector.search(&request(10)).await.unwrap_err();
    assert!(
        matches!(err, CollectorError::Deserialize { ref context, .. } if context.contains("ChatGPT")),
        "expected Deserialize error, got: {err:?}"
    );
}

#[tokio::test]
async fn search_without_token_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let collector = ApifyCollector::with_base_url(None, ACTOR, 30, &server.uri()).unwrap();
    let err = collector.search(&request(10)).await.unwrap_err();
    assert!(matches!(err, CollectorError::Unavailable(_)));
}
