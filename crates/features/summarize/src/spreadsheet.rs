//! # Spreadsheet parsing
//!
//! Turns uploaded bytes into a [`Workbook`]: office formats (xlsx, xlsm, xlsb, xls, ods) are
//! detected from the bytes by `calamine`; delimited text is read with the `csv` crate when the
//! file name or content type says so. Uploads that name neither are tried as a workbook first,
//! then as UTF-8 text. Cells are kept as display text (dates as ISO-8601), rows keep their
//! order, blank rows and trailing blank cells are dropped.

use crate::error::{SummarizeError, SummarizeErrorExt};
use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use chrono::Timelike;
use std::fmt::Write as _;
use std::io::Cursor;

const CSV_CONTENT_TYPES: &[&str] = &["text/csv", "application/csv", "text/plain"];
const TSV_CONTENT_TYPE: &str = "text/tab-separated-values";
const OFFICE_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "xla", "ods"];
const OFFICE_CONTENT_TYPES: &[&str] = &[
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "application/vnd.ms-excel",
    "application/vnd.ms-excel.sheet.macroenabled.12",
    "application/vnd.ms-excel.sheet.binary.macroenabled.12",
    "application/vnd.oasis.opendocument.spreadsheet",
];
/// Sheet name used for delimited text, which has no sheets of its own.
pub const TEXT_SHEET_NAME: &str = "Sheet1";

/// A named grid of cell text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    name: String,
    rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Builds a sheet, dropping blank rows and trailing blank cells.
    pub fn new(name: impl Into<String>, rows: impl IntoIterator<Item = Vec<String>>) -> Self {
        let rows = rows
            .into_iter()
            .filter_map(|mut row| {
                while row.last().is_some_and(|cell| cell.trim().is_empty()) {
                    row.pop();
                }
                (!row.is_empty()).then_some(row)
            })
            .collect();
        Self { name: name.into(), rows }
    }

    /// Converts a `calamine` range; empty cells become empty strings.
    pub fn from_range(name: impl Into<String>, range: &Range<Data>) -> Self {
        let rows = range.rows().map(|row| row.iter().map(cell_text).collect());
        Self::new(name, rows)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Request-scoped spreadsheet content. Always holds at least one non-empty sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// # Errors
    /// Returns [`SummarizeError::Spreadsheet`] when every sheet is empty.
    pub fn new(sheets: Vec<Sheet>) -> Result<Self, SummarizeError> {
        if sheets.iter().all(Sheet::is_empty) {
            return Err(SummarizeError::Spreadsheet {
                message: "spreadsheet contains no data".into(),
                context: None,
            });
        }
        Ok(Self { sheets })
    }

    /// Parses an upload, choosing the reader from its file name and content type.
    ///
    /// # Errors
    /// * [`SummarizeError::Csv`] for undecodable delimited text.
    /// * [`SummarizeError::Workbook`] for bytes `calamine` cannot open.
    /// * [`SummarizeError::Spreadsheet`] when nothing readable remains.
    pub fn parse(
        filename: Option<&str>,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<Self, SummarizeError> {
        match Format::detect(filename, content_type) {
            Format::Delimited(delimiter) => Self::from_delimited(bytes, delimiter),
            Format::Office => Self::from_office(bytes),
            Format::Unknown => match Self::from_office(bytes) {
                Err(err @ SummarizeError::Workbook { .. }) => match std::str::from_utf8(bytes) {
                    Ok(text) => Self::from_text(text),
                    Err(_) => Err(err),
                },
                other => other,
            },
        }
    }

    /// Reads comma separated bytes into a single sheet.
    ///
    /// # Errors
    /// See [`Workbook::parse`].
    pub fn from_csv(bytes: &[u8]) -> Result<Self, SummarizeError> {
        Self::from_delimited(bytes, b',')
    }

    /// Reads tabular text pasted by a client. Tab separated input (the clipboard format of
    /// spreadsheet applications) is recognised; anything else is read as CSV.
    ///
    /// # Errors
    /// See [`Workbook::parse`].
    pub fn from_text(text: &str) -> Result<Self, SummarizeError> {
        let tabbed = text.lines().next().is_some_and(|line| line.contains('\t'));
        Self::from_delimited(text.as_bytes(), if tabbed { b'\t' } else { b',' })
    }

    /// # Errors
    /// See [`Workbook::parse`].
    pub fn from_office(bytes: &[u8]) -> Result<Self, SummarizeError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
            .context("unsupported or corrupted spreadsheet")?;

        let sheets = workbook
            .sheet_names()
            .into_iter()
            .map(|name| -> Result<Sheet, SummarizeError> {
                let range = workbook
                    .worksheet_range(&name)
                    .context(format!("reading sheet '{name}'"))?;
                Ok(Sheet::from_range(name, &range))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(sheets)
    }

    fn from_delimited(bytes: &[u8], delimiter: u8) -> Result<Self, SummarizeError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(bytes);

        let rows = reader
            .records()
            .map(|record| record.map(|record| record.iter().map(str::to_owned).collect()))
            .collect::<Result<Vec<Vec<String>>, csv::Error>>()
            .context("reading delimited text")?;

        Self::new(vec![Sheet::new(TEXT_SHEET_NAME, rows)])
    }

    #[must_use]
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Renders the workbook as prompt text: one `## Sheet: <name>` section per non-empty
    /// sheet followed by its first `max_rows` rows as CSV lines, with a note when rows
    /// were left out.
    #[must_use]
    pub fn render(&self, max_rows: usize) -> String {
        let mut out = String::new();
        for sheet in self.sheets.iter().filter(|sheet| !sheet.is_empty()) {
            if !out.is_empty() {
                out.push('\n');
            }
            let _ = writeln!(
                out,
                "## Sheet: {} ({} rows, {} columns)",
                sheet.name(),
                sheet.row_count(),
                sheet.column_count()
            );
            for row in sheet.rows().iter().take(max_rows) {
                let line: Vec<_> = row.iter().map(|cell| csv_field(cell)).collect();
                let _ = writeln!(out, "{}", line.join(","));
            }
            let omitted = sheet.row_count().saturating_sub(max_rows);
            if omitted > 0 {
                let _ = writeln!(out, "... {omitted} more rows not shown");
            }
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Delimited(u8),
    Office,
    Unknown,
}

impl Format {
    fn detect(filename: Option<&str>, content_type: Option<&str>) -> Self {
        let extension = filename
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase());
        let mime = content_type
            .and_then(|value| value.split(';').next())
            .map(|value| value.trim().to_ascii_lowercase());

        // A known extension wins over the content type, which browsers often guess.
        match (extension.as_deref(), mime.as_deref()) {
            (Some(ext), _) if OFFICE_EXTENSIONS.contains(&ext) => Self::Office,
            (Some("tsv" | "tab"), _) => Self::Delimited(b'\t'),
            (Some("csv" | "txt"), _) => Self::Delimited(b','),
            (_, Some(TSV_CONTENT_TYPE)) => Self::Delimited(b'\t'),
            (_, Some(mime)) if CSV_CONTENT_TYPES.contains(&mime) => Self::Delimited(b','),
            (_, Some(mime)) if OFFICE_CONTENT_TYPES.contains(&mime) => Self::Office,
            _ => Self::Unknown,
        }
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::DateTime(value) if value.is_datetime() => match value.as_datetime() {
            Some(datetime) if datetime.num_seconds_from_midnight() == 0 => {
                datetime.date().format("%Y-%m-%d").to_string()
            },
            Some(datetime) => datetime.format("%Y-%m-%dT%H:%M:%S").to_string(),
            None => cell.to_string(),
        },
        other => other.to_string(),
    }
}

/// Quotes a cell when it would otherwise break the CSV line.
fn csv_field(cell: &str) -> std::borrow::Cow<'_, str> {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\"")).into()
    } else {
        cell.into()
    }
}
