#![cfg(not(coverage))]

use super::*;
use httpmock::prelude::*;
use serde_json::json;

const TOKEN: &str = "test-token";

fn story_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "story_id": id,
        "rname": name,
        "domain": "Education",
        "story_text": "Got into university after the mentoring program.",
        "image_url": "uploads\\stories\\photo.png"
    })
}

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api")).with_credentials(Credentials::bearer(TOKEN))
}

#[tokio::test]
async fn list_pending_sends_bearer_token_and_parses_stories() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/success-stories/pending")
                .header("authorization", "Bearer test-token");
            then.status(200)
                .json_body(json!([story_json(1, "Asha"), story_json(2, "Ben")]));
        })
        .await;

    let stories = client_for(&server)
        .list_pending_success_stories()
        .await
        .expect("stories");

    mock.assert_hits_async(1).await;
    assert_eq!(stories.len(), 2);
    assert_eq!(stories[0].story_id, "1");
    assert_eq!(stories[1].rname, "Ben");
}

#[tokio::test]
async fn approve_issues_put_to_story_endpoint() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/api/success-stories/17/approve")
                .header("authorization", "Bearer test-token");
            then.status(200).json_body(json!({ "message": "approved" }));
        })
        .await;

    client_for(&server)
        .approve_success_story("17")
        .await
        .expect("approve");
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn reject_issues_delete_and_accepts_empty_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/success-stories/17/reject");
            then.status(204);
        })
        .await;

    client_for(&server)
        .reject_success_story("17")
        .await
        .expect("reject");
    mock.assert_hits_async(1).await;
}

#[tokio::test]
async fn missing_credentials_fail_without_network_io() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/success-stories/pending");
            then.status(200).json_body(json!([]));
        })
        .await;

    let client = ApiClient::new_with_base_url(server.url("/api"));
    let err = client
        .list_pending_success_stories()
        .await
        .expect_err("unauthorized");

    assert_eq!(err.code, "UNAUTHORIZED");
    mock.assert_hits_async(0).await;
}

#[tokio::test]
async fn error_payload_is_surfaced() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/success-stories/9/approve");
            then.status(403)
                .json_body(json!({ "error": "Admins only", "code": "FORBIDDEN" }));
        })
        .await;

    let err = client_for(&server)
        .approve_success_story("9")
        .await
        .expect_err("forbidden");
    assert_eq!(err.error, "Admins only");
    assert_eq!(err.code, "FORBIDDEN");
}

#[tokio::test]
async fn non_json_error_maps_to_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/success-stories/pending");
            then.status(500).body("Internal Server Error");
        })
        .await;

    let err = client_for(&server)
        .list_pending_success_stories()
        .await
        .expect_err("server error");
    assert_eq!(err.code, "HTTP_ERROR");
    assert_eq!(err.details, Some(json!({ "status": 500 })));
}

#[tokio::test]
async fn malformed_success_body_is_a_parse_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/success-stories/pending");
            then.status(200).json_body(json!({ "unexpected": true }));
        })
        .await;

    let err = client_for(&server)
        .list_pending_success_stories()
        .await
        .expect_err("parse failure");
    assert_eq!(err.code, "UNKNOWN");
    assert!(err.error.starts_with("Failed to parse response"));
}

#[tokio::test]
async fn trailing_slash_on_base_url_is_ignored() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/success-stories/5/reject");
            then.status(200);
        })
        .await;

    ApiClient::new_with_base_url(format!("{}/", server.url("/api")))
        .with_credentials(Credentials::bearer(TOKEN))
        .reject_success_story("5")
        .await
        .expect("reject");
    mock.assert_hits_async(1).await;
}
