use super::schemas::Detail;
use axum::Json;
use sheetwise_derive::api_handler;
use sheetwise_domain::constants::{INFO_DETAIL, TESTING_TAG};

/// Root
///
/// Points callers at the interactive documentation.
#[api_handler(
    get,
    path = "/api/",
    responses(
        (status = OK, description = "Service is reachable", body = Detail),
        (status = INTERNAL_SERVER_ERROR, description = "Unexpected failure", body = Detail),
    ),
    tag = TESTING_TAG,
)]
pub async fn info() -> Json<Detail> {
    Json(Detail::new(INFO_DETAIL))
}
