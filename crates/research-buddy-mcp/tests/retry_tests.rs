//! Retry behavior of the client: rate limiting, failing statuses and transport errors.

use std::time::{Duration, Instant};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use research_buddy_mcp::ClientError;
use research_buddy_mcp::client::SemanticScholarClient;
use research_buddy_mcp::config::{Config, RetryPolicy, fields};

fn client_for(mock_server: &MockServer) -> SemanticScholarClient {
    SemanticScholarClient::new(Config::for_testing(&mock_server.uri())).unwrap()
}

#[tokio::test]
async fn test_rate_limit_then_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"paperId": "p1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let paper = client.get_paper_details("p1", fields::DETAILS).await.unwrap();
    assert_eq!(paper.id(), "p1");
}

#[tokio::test]
async fn test_rate_limit_backoff_waits_base_delay() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"paperId": "p1"})))
        .mount(&mock_server)
        .await;

    let config = Config { retry: RetryPolicy::default(), ..Config::for_testing(&mock_server.uri()) };
    let client = SemanticScholarClient::new(config).unwrap();

    let started = Instant::now();
    client.get_paper_details("p1", fields::DETAILS).await.unwrap();
    assert!(started.elapsed() >= Duration::from_secs(1));
}

#[tokio::test]
async fn test_persistent_rate_limit_exhausts_attempts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/search"))
        .respond_with(ResponseTemplate::new(429))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.search_papers("q", 10, None, fields::SEARCH).await.unwrap_err();

    assert!(err.is_rate_limited());
    assert!(matches!(err, ClientError::RateLimited { attempts: 3 }));
}

#[tokio::test]
async fn test_server_error_retried_then_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_paper_details("p1", fields::DETAILS).await.unwrap_err();

    let message = err.to_string();
    assert!(message.starts_with("API request failed:"), "{message}");
    assert!(message.contains("500"), "{message}");
}

#[tokio::test]
async fn test_not_found_is_retried_like_other_failures() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/unknown"))
        .respond_with(ResponseTemplate::new(404))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_paper_details("unknown", fields::DETAILS).await.unwrap_err();
    assert!(matches!(err, ClientError::RequestFailed { .. }));
}

#[tokio::test]
async fn test_server_error_then_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graph/v1/paper/batch"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/graph/v1/paper/batch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"paperId": "a"}])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let papers = client.batch_get_papers(&["a".to_string()], fields::DETAILS).await.unwrap();
    assert_eq!(papers.len(), 1);
}

#[tokio::test]
async fn test_non_json_body_is_retried_then_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_paper_details("p1", fields::DETAILS).await.unwrap_err();
    assert!(matches!(err, ClientError::RequestFailed { .. }));
    assert!(err.to_string().starts_with("API request failed: invalid JSON"));
}

#[tokio::test]
async fn test_non_json_body_then_success_recovers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"paperId": "p1", "title": "Recovered"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let paper = client.get_paper_details("p1", fields::DETAILS).await.unwrap();
    assert_eq!(paper.title, "Recovered");
}

#[tokio::test]
async fn test_unreadable_body_reports_request_failed() {
    let mock_server = MockServer::start().await;

    // Claims gzip but is plain text, so decoding the body fails.
    Mock::given(method("GET"))
        .and(path("/graph/v1/paper/p1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-encoding", "gzip")
                .set_body_string("not gzip at all"),
        )
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_paper_details("p1", fields::DETAILS).await.unwrap_err();
    assert!(matches!(err, ClientError::RequestFailed { .. }));
}

#[tokio::test]
async fn test_connection_refused_reports_request_failed() {
    // Nothing listens on port 9 on test machines.
    let client = SemanticScholarClient::new(Config::for_testing("http://127.0.0.1:9")).unwrap();

    let err = client.get_paper_details("p1", fields::DETAILS).await.unwrap_err();
    assert!(err.to_string().starts_with("API request failed:"));
}
