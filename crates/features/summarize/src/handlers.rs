use crate::Summarize;
use crate::models::{SpreadsheetUpload, SummaryResponse, TextSummaryRequest, TextSummaryResponse};
use crate::spreadsheet::Workbook;
use axum::Json;
use axum::extract::State;
use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use sheetwise_derive::api_handler;
use sheetwise_kernel::prelude::{ApiError, ApiState, Detail, SUMMARIZE_TAG};
use tracing::info;

const UPLOAD_FIELD: &str = "file";
const DEFAULT_FILENAME: &str = "upload";

#[derive(Debug)]
struct Upload {
    filename: Option<String>,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

/// Summarize spreadsheet
///
/// Parses the uploaded workbook and asks the language model for a summary.
#[api_handler(
    post,
    path = "/api/summarize",
    request_body(content = SpreadsheetUpload, content_type = "multipart/form-data"),
    responses(
        (status = OK, description = "Workbook summarized", body = SummaryResponse),
        (status = BAD_REQUEST, description = "Missing, unreadable or empty spreadsheet", body = Detail),
        (status = PAYLOAD_TOO_LARGE, description = "Upload exceeds the body limit", body = Detail),
        (status = INTERNAL_SERVER_ERROR, description = "Model not configured or unavailable", body = Detail),
    ),
    tag = SUMMARIZE_TAG,
)]
pub(crate) async fn summarize_spreadsheet(
    State(state): State<ApiState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let summarizer = state.try_get_slice::<Summarize>()?.summarizer.clone();
    let mut multipart = multipart.map_err(|rejection| {
        ApiError::bad_request(format!("expected a multipart upload: {}", rejection.body_text()))
    })?;

    let Upload { filename, content_type, bytes } = read_upload(&mut multipart).await?;
    let size = bytes.len();
    let parse_name = filename.clone();
    let workbook = tokio::task::spawn_blocking(move || {
        Workbook::parse(parse_name.as_deref(), content_type.as_deref(), &bytes)
    })
    .await
    .map_err(|err| ApiError::Internal {
        message: "Internal server error".into(),
        context: Some(format!("spreadsheet parser task failed: {err}").into()),
    })??;

    let filename = filename.unwrap_or_else(|| DEFAULT_FILENAME.to_owned());
    info!(%filename, size, sheets = workbook.sheets().len(), "Summarizing spreadsheet");

    let summary = summarizer.summarize(&workbook).await?;
    Ok(Json(SummaryResponse::new(filename, &workbook, summary)))
}

/// Summarize text
///
/// Summarizes tabular text pasted by a client (CSV, or tab separated as copied from a
/// spreadsheet application).
#[api_handler(
    post,
    path = "/api/summarize/text",
    request_body = TextSummaryRequest,
    responses(
        (status = OK, description = "Text summarized", body = TextSummaryResponse),
        (status = BAD_REQUEST, description = "Empty or malformed text", body = Detail),
        (status = INTERNAL_SERVER_ERROR, description = "Model not configured or unavailable", body = Detail),
    ),
    tag = SUMMARIZE_TAG,
)]
pub(crate) async fn summarize_text(
    State(state): State<ApiState>,
    payload: Result<Json<TextSummaryRequest>, JsonRejection>,
) -> Result<Json<TextSummaryResponse>, ApiError> {
    let summarizer = state.try_get_slice::<Summarize>()?.summarizer.clone();
    let Json(TextSummaryRequest { text }) = payload.map_err(json_rejection)?;

    if text.trim().is_empty() {
        return Err(ApiError::bad_request("text must not be empty"));
    }

    let workbook = Workbook::from_text(&text)?;
    info!(chars = text.len(), "Summarizing text");

    let summary = summarizer.summarize(&workbook).await?;
    Ok(Json(TextSummaryResponse { summary }))
}

async fn read_upload(multipart: &mut Multipart) -> Result<Upload, ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let filename = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        let bytes = field.bytes().await.map_err(multipart_error)?;

        if bytes.is_empty() {
            return Err(ApiError::bad_request("uploaded file is empty"));
        }
        return Ok(Upload { filename, content_type, bytes: bytes.to_vec() });
    }

    Err(ApiError::bad_request(format!("missing '{UPLOAD_FIELD}' field")))
}

fn multipart_error(err: MultipartError) -> ApiError {
    let message = err.body_text();
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge { message: message.into(), context: None }
    } else {
        ApiError::bad_request(message)
    }
}

fn json_rejection(rejection: JsonRejection) -> ApiError {
    let message = rejection.body_text();
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge { message: message.into(), context: None }
    } else {
        ApiError::bad_request(message)
    }
}
