#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{Request, Response},
};
use childcare_calculator_core::analytics::AnalyticsSink;
use childcare_calculator_server::{config::Config, AppState};

pub fn test_config() -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        static_dir: "public".to_string(),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(5),
    }
}

pub fn test_state(sink: Arc<dyn AnalyticsSink>) -> Arc<AppState> {
    Arc::new(AppState::new(sink))
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
