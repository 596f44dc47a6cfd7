mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::json;
use tower::ServiceExt;

const INFO: &str = "view /docs for documentation.";

#[tokio::test]
async fn info_route_returns_detail() {
    let request = Request::get("/api/").body(Body::empty()).unwrap();
    let (status, body) = common::send(common::app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "detail": INFO }));
}

#[tokio::test]
async fn info_route_ignores_query_headers_and_body() {
    let request = Request::get("/api/?verbose=true&x=1")
        .header("x-custom", "anything")
        .header(header::AUTHORIZATION, "Bearer whatever")
        .body(Body::from("ignored payload"))
        .unwrap();

    let (status, body) = common::send(common::app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "detail": INFO }));
}

#[tokio::test]
async fn info_route_answers_without_trailing_slash() {
    let request = Request::get("/api").body(Body::empty()).unwrap();
    let (status, body) = common::send(common::app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["detail"], INFO);
}

#[tokio::test]
async fn concurrent_requests_get_identical_answers() {
    let app = common::app();
    let tasks: Vec<_> = (0..50)
        .map(|_| {
            let app = app.clone();
            tokio::spawn(async move {
                common::send(app, Request::get("/api/").body(Body::empty()).unwrap()).await
            })
        })
        .collect();

    for task in tasks {
        let (status, body) = task.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "detail": INFO }));
    }
}

#[tokio::test]
async fn cors_preflight_allows_any_origin_without_credentials() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/")
        .header(header::ORIGIN, "https://client.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = common::app().oneshot(request).await.unwrap();
    let headers = response.headers();

    assert!(response.status().is_success());
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
    assert!(headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).is_none());
}

#[tokio::test]
async fn simple_request_carries_cors_header() {
    let request = Request::get("/api/")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();

    let response = common::app().oneshot(request).await.unwrap();
    assert_eq!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
}
