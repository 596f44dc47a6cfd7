mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use sheetwise::domain::config::{ApiConfig, SummarizeConfig};
use sheetwise_server::Server;

#[tokio::test]
async fn csv_upload_returns_sheet_stats() {
    let request = common::multipart(
        "file",
        "sales.csv",
        "text/csv",
        b"region,q1,q2\nnorth,10,12\nsouth,8,9\n",
    );

    let (status, body) = common::send(common::app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "filename": "sales.csv",
            "sheets": [{ "name": "Sheet1", "rows": 3, "columns": 3 }],
            "summary": "stub summary of Sheet1"
        })
    );
}

#[tokio::test]
async fn xlsx_upload_reports_every_sheet() {
    let workbook = include_bytes!("../../../crates/features/summarize/tests/fixtures/quarterly.xlsx");
    let request = common::multipart(
        "file",
        "quarterly.xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        workbook,
    );

    let (status, body) = common::send(common::app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "filename": "quarterly.xlsx",
            "sheets": [
                { "name": "Revenue", "rows": 3, "columns": 3 },
                { "name": "Costs", "rows": 2, "columns": 2 }
            ],
            "summary": "stub summary of Revenue, Costs"
        })
    );
}

#[tokio::test]
async fn missing_file_field_is_a_bad_request() {
    let request = common::multipart("attachment", "sales.csv", "text/csv", b"a,b\n1,2\n");
    let (status, body) = common::send(common::app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("file"));
}

#[tokio::test]
async fn empty_spreadsheet_is_a_bad_request() {
    let request = common::multipart("file", "empty.csv", "text/csv", b",,\n\n");
    let (status, body) = common::send(common::app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "detail": "spreadsheet contains no data" }));
}

#[tokio::test]
async fn unreadable_workbook_is_a_bad_request() {
    let request = common::multipart(
        "file",
        "report.xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        b"not really a workbook",
    );
    let (status, body) = common::send(common::app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "detail": "Unsupported or corrupted spreadsheet" }));
}

#[tokio::test]
async fn non_multipart_upload_is_a_bad_request() {
    let request = common::json("/api/summarize", &json!({ "file": "x" }));
    let (status, body) = common::send(common::app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let mut config = ApiConfig::default();
    config.server.body_limit = 256;
    let app = Server::builder()
        .config(config)
        .summarizer(std::sync::Arc::new(common::StubSummarizer))
        .build()
        .unwrap()
        .router();

    let request = common::multipart("file", "big.csv", "text/csv", &[b'a'; 4096]);
    let (status, body) = common::send(app, request).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn text_route_summarizes_pasted_rows() {
    let request = common::json("/api/summarize/text", &json!({ "text": "a\tb\n1\t2" }));
    let (status, body) = common::send(common::app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "summary": "stub summary of Sheet1" }));
}

#[tokio::test]
async fn empty_text_is_a_bad_request() {
    let request = common::json("/api/summarize/text", &json!({ "text": "   " }));
    let (status, body) = common::send(common::app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "detail": "text must not be empty" }));
}

#[tokio::test]
async fn malformed_json_is_a_bad_request_with_detail() {
    let request = common::json("/api/summarize/text", &json!({ "txt": "a,b" }));
    let (status, body) = common::send(common::app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn startup_without_api_key_fails_lazily() {
    let mut config = ApiConfig::default();
    config.summarize = SummarizeConfig {
        api_key: None,
        api_key_env: "SHEETWISE_TEST_UNSET_KEY".to_owned(),
        ..SummarizeConfig::default()
    };

    let server = Server::builder().config(config).build().expect("startup needs no API key");

    let info = Request::get("/api/").body(Body::empty()).unwrap();
    let (status, _) = common::send(server.router(), info).await;
    assert_eq!(status, StatusCode::OK);

    let request = common::json("/api/summarize/text", &json!({ "text": "a,b\n1,2" }));
    let (status, body) = common::send(server.router(), request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "detail": "Summarization is not configured" }));
}
