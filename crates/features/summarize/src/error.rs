use std::borrow::Cow;

/// Failures of the summarize slice.
///
/// Input variants (`Spreadsheet`, `Workbook`, `Csv`) are the caller's fault; the rest are
/// service-side.
#[sheetwise_derive::sheetwise_error]
pub enum SummarizeError {
    /// The upload was readable but holds nothing to summarize.
    #[error("Spreadsheet error{}: {message}", format_context(.context))]
    Spreadsheet { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Workbook error{}: {source}", format_context(.context))]
    Workbook { source: calamine::Error, context: Option<Cow<'static, str>> },

    #[error("CSV error{}: {source}", format_context(.context))]
    Csv { source: csv::Error, context: Option<Cow<'static, str>> },

    /// Engine settings are unusable, typically a missing API key.
    #[error("Summarizer config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The model API could not be reached or its body could not be read.
    #[error("Model transport error{}: {source}", format_context(.context))]
    Http { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The model API answered, but not with a usable completion.
    #[error("Model upstream error{}: {message}", format_context(.context))]
    Upstream { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal summarize error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl SummarizeError {
    /// Whether the error stems from the submitted data rather than the service.
    #[must_use]
    pub const fn is_input(&self) -> bool {
        matches!(self, Self::Spreadsheet { .. } | Self::Workbook { .. } | Self::Csv { .. })
    }
}

#[cfg(feature = "server")]
impl From<SummarizeError> for sheetwise_kernel::server::error::ApiError {
    fn from(err: SummarizeError) -> Self {
        let message: Cow<'static, str> = match &err {
            SummarizeError::Spreadsheet { message, .. } => message.clone(),
            SummarizeError::Workbook { .. } => "Unsupported or corrupted spreadsheet".into(),
            SummarizeError::Csv { .. } => "Delimited text could not be read".into(),
            SummarizeError::Config { .. } => "Summarization is not configured".into(),
            SummarizeError::Http { .. } | SummarizeError::Upstream { .. } => {
                "The language model request failed".into()
            },
            SummarizeError::Internal { .. } => "Internal server error".into(),
        };
        let context = Some(err.to_string().into());

        if err.is_input() {
            Self::BadRequest { message, context }
        } else {
            Self::Internal { message, context }
        }
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use sheetwise_kernel::server::error::ApiError;

    #[test]
    fn input_errors_keep_details_out_of_the_message() {
        let err = SummarizeError::Spreadsheet {
            message: "spreadsheet contains no data".into(),
            context: Some("sheet 'Raw'".into()),
        };
        let api = ApiError::from(err);

        assert!(matches!(api, ApiError::BadRequest { .. }));
        assert_eq!(api.message(), "spreadsheet contains no data");
        assert!(api.to_string().contains("sheet 'Raw'"));
    }

    #[test]
    fn workbook_errors_get_a_fixed_message() {
        let err = SummarizeError::Workbook {
            source: calamine::Error::Msg("Cannot detect file format"),
            context: Some("unsupported or corrupted spreadsheet".into()),
        };
        let api = ApiError::from(err);

        assert_eq!(api.message(), "Unsupported or corrupted spreadsheet");
        assert!(api.to_string().contains("Cannot detect file format"));
    }

    #[test]
    fn service_errors_are_internal() {
        let err = SummarizeError::Upstream { message: "model API returned 429".into(), context: None };
        let api = ApiError::from(err);

        assert!(matches!(api, ApiError::Internal { .. }));
        assert_eq!(api.message(), "The language model request failed");
    }
}
