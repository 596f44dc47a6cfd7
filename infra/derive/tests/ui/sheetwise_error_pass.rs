use sheetwise_derive::sheetwise_error;
use std::borrow::Cow;

#[sheetwise_error]
pub enum UploadError {
    #[error("Read error{}: {source}", format_context(.context))]
    Read {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read_upload() -> Result<Vec<u8>, UploadError> {
    let bytes = std::fs::read("missing.xlsx").context("Reading uploaded workbook")?;
    if bytes.is_empty() {
        return Err("Uploaded workbook is empty".into());
    }
    Ok(bytes)
}

fn main() {
    let _ = read_upload();
}
