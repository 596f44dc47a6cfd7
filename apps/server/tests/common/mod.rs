#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use sheetwise::domain::config::ApiConfig;
use sheetwise::features::summarize::{SummarizeError, Summarizer, Workbook};
use sheetwise_server::Server;
use std::sync::Arc;
use tower::ServiceExt;

/// Echoes the sheet layout instead of calling a model.
#[derive(Debug)]
pub struct StubSummarizer;

#[async_trait]
impl Summarizer for StubSummarizer {
    async fn summarize(&self, workbook: &Workbook) -> Result<String, SummarizeError> {
        let names: Vec<_> = workbook.sheets().iter().map(|sheet| sheet.name()).collect();
        Ok(format!("stub summary of {}", names.join(", ")))
    }
}

pub fn app() -> Router {
    Server::builder()
        .config(ApiConfig::default())
        .summarizer(Arc::new(StubSummarizer))
        .build()
        .expect("server should build")
        .router()
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body should be readable").to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body should be JSON")
    };
    (status, json)
}

pub fn multipart(field: &str, filename: &str, content_type: &str, content: &[u8]) -> Request<Body> {
    const BOUNDARY: &str = "sheetwise-test-boundary";
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
    )
    .into_bytes();
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::post("/api/summarize")
        .header("content-type", format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(body))
        .unwrap()
}

pub fn json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
