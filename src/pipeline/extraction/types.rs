use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::ExtractionError;
use crate::pipeline::document::UploadedDocument;

/// Result of extracting one uploaded file.
///
/// Every input file yields exactly one outcome: usable text, or a
/// descriptive fallback standing in for content that could not be
/// meaningfully extracted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ExtractionOutcome {
    Text(String),
    Fallback(FallbackDescriptor),
}

impl ExtractionOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    /// The text that represents this file in the model context: either
    /// the extracted content or the rendered fallback descriptor.
    pub fn into_context_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Fallback(descriptor) => descriptor.render(),
        }
    }
}

/// Why a file was downgraded to a fallback descriptor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum FallbackReason {
    /// Neither extension nor MIME type matched any handler.
    Unsupported,
    /// Extraction produced too little text to be informative; the short
    /// text is embedded verbatim so "truly empty" stays distinguishable
    /// from "some content found".
    LimitedText { partial: String },
    /// The handler failed (malformed container, parse error, ...).
    ExtractionFailed { message: String },
}

/// Synthetic stand-in for a file whose content could not be extracted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FallbackDescriptor {
    pub file_name: String,
    pub declared_type: String,
    pub size_bytes: u64,
    pub reason: FallbackReason,
}

impl FallbackDescriptor {
    pub fn unsupported(doc: &UploadedDocument) -> Self {
        Self::new(doc, FallbackReason::Unsupported)
    }

    pub fn limited_text(doc: &UploadedDocument, partial: String) -> Self {
        Self::new(doc, FallbackReason::LimitedText { partial })
    }

    pub fn extraction_failed(doc: &UploadedDocument, message: String) -> Self {
        Self::new(doc, FallbackReason::ExtractionFailed { message })
    }

    fn new(doc: &UploadedDocument, reason: FallbackReason) -> Self {
        Self {
            file_name: doc.name.clone(),
            declared_type: doc.declared_type().to_string(),
            size_bytes: doc.size_bytes(),
            reason,
        }
    }

    /// Render the bracketed descriptor text embedded into the context.
    pub fn render(&self) -> String {
        let kb = self.size_bytes as f64 / 1024.0;
        let prefix = format!(
            "[File: {}, Type: {}, Size: {kb:.1}KB",
            self.file_name, self.declared_type
        );
        match &self.reason {
            FallbackReason::Unsupported => format!(
                "{prefix} - Unsupported file format. Please convert to PDF or text for analysis.]"
            ),
            FallbackReason::LimitedText { partial } => {
                let raw = if partial.trim().is_empty() {
                    "No text found"
                } else {
                    partial.as_str()
                };
                format!("{prefix} - Limited text extracted. Raw content: {raw}]")
            }
            FallbackReason::ExtractionFailed { message } => {
                format!("{prefix} - Extraction failed: {message}]")
            }
        }
    }
}

/// PDF text-layer engine abstraction (allows mocking, and absence).
pub trait PdfEngine: Send + Sync {
    /// Extract per-page text, up to `max_pages` pages.
    fn extract_pages(
        &self,
        bytes: &[u8],
        max_pages: usize,
    ) -> Result<Vec<String>, ExtractionError>;
}

/// OCR engine abstraction (allows mocking, and absence).
pub trait OcrEngine: Send + Sync {
    /// Recognize text in a raster image. `on_progress` receives the
    /// recognition fraction in `[0, 1]` as a sub-progress signal.
    fn recognize(
        &self,
        bytes: &[u8],
        on_progress: &dyn Fn(f32),
    ) -> Result<String, ExtractionError>;
}

/// Optional third-party engines injected into the pipeline.
///
/// Absence is a first-class state: a missing engine routes the affected
/// formats to their documented degraded path instead of probing globals
/// at runtime.
#[derive(Clone, Default)]
pub struct Engines {
    pub pdf: Option<Arc<dyn PdfEngine>>,
    pub ocr: Option<Arc<dyn OcrEngine>>,
}

impl Engines {
    /// Engines with the built-in PDF text-layer extractor and no OCR.
    pub fn with_default_pdf() -> Self {
        Self {
            pdf: Some(Arc::new(super::pdf::PdfExtractEngine)),
            ocr: None,
        }
    }

    pub fn has_pdf(&self) -> bool {
        self.pdf.is_some()
    }

    pub fn has_ocr(&self) -> bool {
        self.ocr.is_some()
    }
}
