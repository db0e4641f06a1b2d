pub mod archive;
pub mod dispatch;
pub mod extractor;
pub mod image;
pub mod office;
pub mod pdf;
pub mod rtf;
pub mod spreadsheet;
pub mod text;
pub mod types;

pub use dispatch::{dispatch, HandlerKind};
pub use extractor::extract_document;
pub use types::*;

use thiserror::Error;

/// Errors raised inside extraction handlers.
///
/// These never escape the per-file boundary: `extract_document` converts
/// every one of them into a fallback descriptor so a single bad file can
/// not abort batch extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("PDF parsing failed: {0}")]
    PdfParsing(String),

    #[error("OCR processing failed: {0}")]
    OcrProcessing(String),

    #[error("Archive reading failed: {0}")]
    Archive(String),

    #[error("Office document part unreadable: {0}")]
    OfficePart(String),

    #[error("Spreadsheet parsing failed: {0}")]
    Spreadsheet(String),
}
