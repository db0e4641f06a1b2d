use regex::Regex;

use super::types::{Engines, PdfEngine};
use super::ExtractionError;
use crate::config::{MAX_PDF_PAGES, PDF_BINARY_SCAN_BYTES, PDF_BINARY_SCAN_MAX_RUNS};
use crate::pipeline::document::UploadedDocument;

/// PDF text-layer engine backed by the pdf-extract crate.
pub struct PdfExtractEngine;

impl PdfEngine for PdfExtractEngine {
    fn extract_pages(
        &self,
        bytes: &[u8],
        max_pages: usize,
    ) -> Result<Vec<String>, ExtractionError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| ExtractionError::PdfParsing(e.to_string()))?;
        Ok(pages.into_iter().take(max_pages).collect())
    }
}

/// PDF extraction: text layer via the injected engine, then a heuristic
/// binary scan, then a descriptor noting the file may be scanned/image-only.
pub fn extract(doc: &UploadedDocument, engines: &Engines) -> Result<String, ExtractionError> {
    if let Some(engine) = &engines.pdf {
        match engine.extract_pages(&doc.bytes, MAX_PDF_PAGES) {
            Ok(pages) => {
                let rendered: Vec<String> = pages
                    .iter()
                    .enumerate()
                    .filter(|(_, text)| !text.trim().is_empty())
                    .map(|(i, text)| format!("--- Page {} ---\n{}", i + 1, text.trim_end()))
                    .collect();
                if !rendered.is_empty() {
                    return Ok(rendered.join("\n\n"));
                }
            }
            Err(e) => {
                tracing::warn!(
                    file = %doc.name,
                    error = %e,
                    "PDF text-layer extraction failed, trying binary scan"
                );
            }
        }
    }

    if let Some(text) = binary_scan(&doc.bytes) {
        return Ok(text);
    }

    Ok(format!(
        "[PDF file: {} - No extractable text found. File size: {:.1}KB. \
         This may be a scanned/image-based PDF.]",
        doc.name,
        doc.size_kb()
    ))
}

/// Best-effort text proxy for PDFs without a usable text layer: decode the
/// leading bytes and keep runs of at least 10 printable characters.
fn binary_scan(bytes: &[u8]) -> Option<String> {
    let head = &bytes[..bytes.len().min(PDF_BINARY_SCAN_BYTES)];
    let decoded = String::from_utf8_lossy(head);

    let printable_runs = Regex::new(r"[ -~]{10,}").unwrap();
    let runs: Vec<&str> = printable_runs
        .find_iter(&decoded)
        .map(|m| m.as_str())
        .take(PDF_BINARY_SCAN_MAX_RUNS)
        .collect();

    if runs.is_empty() {
        None
    } else {
        Some(format!("[Extracted from PDF binary: {}]", runs.join(" ")))
    }
}
