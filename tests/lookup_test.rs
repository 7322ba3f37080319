//! Integration tests for the TMDB lookup client against a mock server.

use cinesort::tmdb::{Lookup, LookupError, TmdbClient};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> TmdbClient {
    TmdbClient::with_base_url("test-key".to_string(), server.uri())
}

#[tokio::test]
async fn zero_results_classifies_not_movie() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"total_results": 0, "results": []})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let lookup = client.search_movie("randomfile", "1234").await.unwrap();
    assert_eq!(lookup, Lookup::NotMovie);
}

#[tokio::test]
async fn single_result_classifies_movie() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("query", "Inception"))
        .and(query_param("year", "2010"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_results": 1,
            "results": [{"id": 27205, "original_title": "Inception"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let lookup = client.search_movie("Inception", "2010").await.unwrap();
    assert_eq!(
        lookup,
        Lookup::Movie {
            original_title: "Inception".to_string()
        }
    );
}

#[tokio::test]
async fn multiple_results_still_classify_movie_using_first() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_results": 3,
            "results": [
                {"id": 1, "original_title": "Dune"},
                {"id": 2, "original_title": "Dune: Part Two"},
                {"id": 3, "original_title": "Dune (1984)"}
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let lookup = client.search_movie("Dune", "2021").await.unwrap();
    assert_eq!(
        lookup,
        Lookup::Movie {
            original_title: "Dune".to_string()
        }
    );
}

#[tokio::test]
async fn server_error_surfaces_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.search_movie("Inception", "2010").await.unwrap_err();
    assert!(matches!(err, LookupError::Status(s) if s.as_u16() == 500));
}

#[tokio::test]
async fn malformed_body_surfaces_payload_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.search_movie("Inception", "2010").await.unwrap_err();
    assert!(matches!(err, LookupError::Payload(_)));
}

#[tokio::test]
async fn missing_expected_fields_surface_payload_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"page": 1})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.search_movie("Inception", "2010").await.unwrap_err();
    assert!(matches!(err, LookupError::Payload(_)));
}

#[tokio::test]
async fn bad_year_length_never_issues_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"total_results": 1, "results": []})),
        )
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let err = client.search_movie("randomfile.txt", "").await.unwrap_err();
    assert!(matches!(err, LookupError::YearFormat(_)));

    let err = client.search_movie("Movie", "999").await.unwrap_err();
    assert!(matches!(err, LookupError::YearFormat(_)));

    // MockServer verifies the expect(0) on drop.
}
