use crate::spreadsheet::{Sheet, Workbook};
use sheetwise_derive::api_model;

#[api_model]
#[derive(Clone, PartialEq, Eq)]
/// Shape of one parsed sheet.
pub struct SheetStats {
    pub name: String,
    /// Non-blank rows.
    pub rows: usize,
    /// Width of the widest row.
    pub columns: usize,
}

impl From<&Sheet> for SheetStats {
    fn from(sheet: &Sheet) -> Self {
        Self { name: sheet.name().to_owned(), rows: sheet.row_count(), columns: sheet.column_count() }
    }
}

#[api_model]
#[derive(Clone)]
/// Summary of an uploaded spreadsheet.
pub struct SummaryResponse {
    pub filename: String,
    pub sheets: Vec<SheetStats>,
    pub summary: String,
}

impl SummaryResponse {
    pub fn new(filename: impl Into<String>, workbook: &Workbook, summary: String) -> Self {
        Self {
            filename: filename.into(),
            sheets: workbook.sheets().iter().map(SheetStats::from).collect(),
            summary,
        }
    }
}

#[api_model]
/// Tabular text to summarize, CSV or tab separated.
pub struct TextSummaryRequest {
    pub text: String,
}

#[api_model]
pub struct TextSummaryResponse {
    pub summary: String,
}

/// Multipart body accepted by the upload route. Documentation only.
#[cfg(feature = "server")]
#[derive(Debug, utoipa::ToSchema)]
#[allow(dead_code)]
pub struct SpreadsheetUpload {
    /// Spreadsheet file: xlsx, xlsm, xlsb, xls, ods, csv or tsv.
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}
