#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use phraser_api::app::envy::Envy;
use serde_json::Value;
use tower::ServiceExt;

pub fn envy(openai_endpoint: &str, kakao_base_url: Option<&str>) -> Envy {
    Envy {
        app_env: Some("test".to_string()),
        port: None,
        openai_endpoint: openai_endpoint.to_string(),
        openai_api_key: "test-key".to_string(),
        phrase_max_tokens: None,
        kakao_api_key: kakao_base_url.map(|_| "kakao-key".to_string()),
        kakao_base_url: kakao_base_url.map(str::to_string),
    }
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}
