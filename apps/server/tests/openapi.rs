mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

#[tokio::test]
async fn description_lists_exactly_two_tags() {
    let (status, doc) = common::send(
        common::app(),
        Request::get("/api/openapi.json").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let tags = doc["tags"].as_array().expect("tags array");
    let names: Vec<_> = tags.iter().map(|tag| tag["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Testing", "Summarize"]);
    for tag in tags {
        assert!(!tag["description"].as_str().unwrap().is_empty());
        assert!(tag["externalDocs"]["url"].as_str().unwrap().starts_with("https://"));
    }
}

#[tokio::test]
async fn description_documents_every_route() {
    let (_, doc) = common::send(
        common::app(),
        Request::get("/api/openapi.json").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(doc["info"]["title"], "SheetWise Backend");
    assert_eq!(doc["info"]["version"], "0.0.1");
    assert_eq!(doc["info"]["license"]["name"], "MIT");

    let info = &doc["paths"]["/api/"]["get"];
    assert_eq!(info["tags"][0], "Testing");
    assert!(info["responses"]["500"].is_object());

    for path in ["/api/summarize", "/api/summarize/text"] {
        assert_eq!(doc["paths"][path]["post"]["tags"][0], "Summarize", "{path}");
    }
    assert!(doc["components"]["schemas"]["Detail"].is_object());
}

#[tokio::test]
async fn docs_ui_is_served() {
    let response = common::app()
        .oneshot(Request::get("/api/docs").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&html).contains("SheetWise Backend"));
}
