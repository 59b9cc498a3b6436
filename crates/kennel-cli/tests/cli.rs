//! CLI integration tests against a mock dog service.
//!
//! These tests drive the compiled binary and point it at a wiremock server,
//! so they cover argument parsing, the HTTP round trip, and output together.

mod common;

use common::{run_cli, run_cli_success};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn collection_url(server: &MockServer) -> String {
    format!("{}/dog", server.uri())
}

#[tokio::test(flavor = "multi_thread")]
async fn list_prints_one_line_per_dog() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dog"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Comet", "breed": "Whippet" },
            { "id": 3, "name": "Snoopy", "breed": "Beagle" },
        ])))
        .mount(&server)
        .await;

    let stdout = run_cli_success(&collection_url(&server), &["list"]);

    assert!(stdout.contains("Comet is a Whippet"));
    assert!(stdout.contains("Snoopy is a Beagle"));
}

#[tokio::test(flavor = "multi_thread")]
async fn get_prints_record_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dog/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            { "id": 1, "name": "Comet", "breed": "Whippet" }
        )))
        .mount(&server)
        .await;

    let stdout = run_cli_success(&collection_url(&server), &["get", "1"]);

    assert!(stdout.contains("\"name\": \"Comet\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn get_missing_dog_fails_with_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dog/9"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let output = run_cli(&collection_url(&server), &["get", "9"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bad status 404"));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_posts_identifier_less_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/dog"))
        .and(body_json(json!({ "name": "Clarice", "breed": "Whippet" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            { "id": 7, "name": "Clarice", "breed": "Whippet" }
        )))
        .mount(&server)
        .await;

    let stdout = run_cli_success(
        &collection_url(&server),
        &["create", "--name", "Clarice", "--breed", "Whippet"],
    );

    assert!(stdout.contains("Created dog 7"));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_fetches_then_puts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dog/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            { "id": 1, "name": "Comet", "breed": "Whippet" }
        )))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/dog/1"))
        .and(body_json(json!({ "id": 1, "name": "Moo", "breed": "Cow" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            { "id": 1, "name": "Moo", "breed": "Cow" }
        )))
        .mount(&server)
        .await;

    let stdout = run_cli_success(
        &collection_url(&server),
        &["update", "1", "--name", "Moo", "--breed", "Cow"],
    );

    assert!(stdout.contains("Updated dog 1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_confirms() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/dog/2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let stdout = run_cli_success(&collection_url(&server), &["delete", "2"]);

    assert!(stdout.contains("Deleted dog 2"));
}

#[test]
fn offline_demo_needs_no_server() {
    let stdout = run_cli_success("http://localhost:8001/dog", &["demo", "--offline"]);

    // The observer prints the final collection: dog 1 renamed, dog 2 gone.
    assert!(stdout.contains("Moo is a Cow"));
    assert!(!stdout.contains("Oscar"));
    assert!(stdout.contains("Clarice is a Whippet"));
    assert!(stdout.contains("Demo flow completed"));
}
