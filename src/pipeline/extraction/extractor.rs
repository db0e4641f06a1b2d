//! Per-file extraction boundary.
//!
//! Every uploaded file yields exactly one [`ExtractionOutcome`]: handler
//! errors are downgraded to fallback descriptors here, so extraction of
//! one file can never abort extraction of the batch.

use super::dispatch::{dispatch, HandlerKind};
use super::types::{Engines, ExtractionOutcome, FallbackDescriptor};
use super::{archive, image, office, pdf, rtf, spreadsheet, text};
use crate::config::MIN_INFORMATIVE_CHARS;
use crate::pipeline::document::UploadedDocument;
use crate::progress::ProgressChannel;

/// Extract analyzable text from one uploaded file. Never fails: anything
/// that goes wrong inside a handler becomes a fallback descriptor.
pub fn extract_document(
    doc: &UploadedDocument,
    engines: &Engines,
    progress: &ProgressChannel,
) -> ExtractionOutcome {
    let Some(kind) = dispatch(doc) else {
        tracing::debug!(file = %doc.name, mime = %doc.declared_type(), "no handler matched");
        return ExtractionOutcome::Fallback(FallbackDescriptor::unsupported(doc));
    };

    progress.emit(&format!("Extracting text from {}...", doc.name), 0);
    tracing::debug!(file = %doc.name, handler = kind.as_str(), "extracting");

    let result = match kind {
        HandlerKind::PlainText => text::extract(doc),
        HandlerKind::PdfText => pdf::extract(doc, engines),
        HandlerKind::WordXml => office::extract_word(doc),
        HandlerKind::SlidesXml => office::extract_slides(doc),
        HandlerKind::Spreadsheet => spreadsheet::extract(doc),
        HandlerKind::RichText => rtf::extract(doc),
        HandlerKind::Image => image::extract(doc, engines, progress),
        HandlerKind::Archive => archive::extract(doc),
    };

    match result {
        Ok(extracted) => {
            if extracted.chars().count() > MIN_INFORMATIVE_CHARS {
                ExtractionOutcome::Text(extracted)
            } else {
                // Too little to analyze on its own; keep it visible inside
                // a descriptor so downstream can tell "short" from "empty".
                ExtractionOutcome::Fallback(FallbackDescriptor::limited_text(doc, extracted))
            }
        }
        Err(e) => {
            tracing::warn!(file = %doc.name, error = %e, "extraction downgraded to fallback");
            ExtractionOutcome::Fallback(FallbackDescriptor::extraction_failed(doc, e.to_string()))
        }
    }
}
