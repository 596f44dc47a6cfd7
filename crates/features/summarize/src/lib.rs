//! # Summarize
//!
//! Feature slice that turns spreadsheet content into a text summary.
//!
//! * [`spreadsheet`]: office workbooks and delimited text into a [`Workbook`].
//! * [`engine`]: the [`Summarizer`] seam, shared as `Arc<dyn Summarizer>`.
//! * [`openai`]: the production engine for OpenAI-compatible APIs.
//! * `handlers` / `router` (feature `server`): `POST /api/summarize` and
//!   `POST /api/summarize/text`.

pub mod engine;
mod error;
pub mod models;
pub mod openai;
pub mod spreadsheet;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
mod router;

pub use crate::engine::Summarizer;
pub use crate::error::{SummarizeError, SummarizeErrorExt};
pub use crate::openai::OpenAiSummarizer;
#[cfg(feature = "server")]
pub use crate::router::summarize_router;
pub use crate::spreadsheet::{Sheet, Workbook};

use sheetwise_domain::config::SummarizeConfig;
use sheetwise_kernel::domain::registry::InitializedSlice;
use std::sync::Arc;

/// Summarize feature state
#[sheetwise_derive::sheetwise_slice]
pub struct Summarize {
    pub summarizer: Arc<dyn Summarizer>,
}

/// Initialize the summarize feature with the OpenAI-compatible engine.
///
/// A missing API key is not checked here; the engine reports it per request.
///
/// # Errors
/// Returns [`SummarizeError::Http`] when the HTTP client cannot be built.
pub fn init(config: &SummarizeConfig) -> Result<InitializedSlice, SummarizeError> {
    let engine = OpenAiSummarizer::new(config.clone())?;
    tracing::info!(model = %config.model, base_url = %config.base_url, "Summarize slice initialized");
    Ok(init_with(Arc::new(engine)))
}

/// Initialize the summarize feature around a caller-provided engine.
pub fn init_with(summarizer: Arc<dyn Summarizer>) -> InitializedSlice {
    InitializedSlice::new(Summarize::new(SummarizeInner { summarizer }))
}
