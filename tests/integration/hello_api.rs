//! End-to-end checks of the hello endpoint over a real socket.

use futures::future::join_all;
use hello_vibe::api::{HELLO_MESSAGE, HELLO_PATH};
use hello_vibe::harness::is_json_media_type;
use pretty_assertions::assert_eq;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use crate::support::TestServer;

#[tokio::test]
async fn hello_returns_contract_response() {
    let server = TestServer::spawn().await;

    let resp = Client::new()
        .get(server.url(HELLO_PATH))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    let content_type = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(
        is_json_media_type(&content_type),
        "content type {content_type:?} is not JSON"
    );

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Hello Vibe!" }));
    assert_eq!(body["message"], HELLO_MESSAGE);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let server = TestServer::spawn().await;

    let resp = Client::new()
        .get(server.url("/api/unknown"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "not found: /api/unknown");
}

#[tokio::test]
async fn repeated_calls_return_identical_bytes() {
    let server = TestServer::spawn().await;
    let client = Client::new();

    let mut bodies = Vec::new();
    for _ in 0..10 {
        let resp = client.get(server.url(HELLO_PATH)).send().await.unwrap();
        bodies.push(resp.bytes().await.unwrap());
    }

    assert_eq!(bodies[0].as_ref(), br#"{"message":"Hello Vibe!"}"#);
    assert!(bodies.iter().all(|b| *b == bodies[0]));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_all_succeed_identically() {
    let server = TestServer::spawn().await;
    let client = Client::new();

    let requests = (0..100).map(|_| {
        let client = client.clone();
        let url = server.url(HELLO_PATH);
        async move {
            let resp = client.get(url).send().await.unwrap();
            let status = resp.status();
            let body = resp.bytes().await.unwrap();
            (status, body)
        }
    });

    let results = join_all(requests).await;

    assert_eq!(results.len(), 100);
    let (_, first) = &results[0];
    for (status, body) in &results {
        assert_eq!(*status, StatusCode::OK);
        assert_eq!(body, first);
    }
}
