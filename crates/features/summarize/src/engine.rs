use crate::error::SummarizeError;
use crate::spreadsheet::Workbook;
use async_trait::async_trait;
use std::fmt::Debug;

/// Instruction sent ahead of every workbook.
pub const SYSTEM_PROMPT: &str = "You are a data analyst. The user sends the contents of a \
spreadsheet, one section per sheet, rows as CSV lines. Summarize what the data describes, its \
structure, and its notable values, totals or trends in a few short paragraphs. Only state what \
the data supports.";

/// Produces a text summary of a workbook.
///
/// Implementations are shared between concurrent requests and must not hold locks across
/// the call.
#[async_trait]
pub trait Summarizer: Debug + Send + Sync {
    /// # Errors
    /// Returns [`SummarizeError`] when the summary cannot be produced.
    async fn summarize(&self, workbook: &Workbook) -> Result<String, SummarizeError>;
}
