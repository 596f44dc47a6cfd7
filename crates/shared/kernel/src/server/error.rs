use super::schemas::Detail;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::borrow::Cow;
use tracing::{error, warn};

/// Request failure rendered as `{"detail": <message>}` with a matching status.
///
/// The message is returned to the caller; the context is only logged.
#[sheetwise_derive::sheetwise_error]
pub enum ApiError {
    #[error("Bad request{}: {message}", format_context(.context))]
    BadRequest { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Payload too large{}: {message}", format_context(.context))]
    PayloadTooLarge { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed in the response body.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest { message, .. }
            | Self::PayloadTooLarge { message, .. }
            | Self::Internal { message, .. } => message,
        }
    }

    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::BadRequest { message: message.into(), context: None }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), "{self}");
        } else {
            warn!(status = status.as_u16(), "{self}");
        }
        (status, Json(Detail::new(self.message()))).into_response()
    }
}

impl From<super::state::ApiStateError> for ApiError {
    fn from(err: super::state::ApiStateError) -> Self {
        Self::Internal {
            message: "Service is not fully initialized".into(),
            context: Some(err.to_string().into()),
        }
    }
}
