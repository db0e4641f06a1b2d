use regex::Regex;

use super::office::collapse_whitespace;
use super::ExtractionError;
use crate::pipeline::document::UploadedDocument;

/// Rich text: strip control words and groups with a conservative regex.
/// Not a full RTF parser: formatting-only sequences may be lost, literal
/// text must not be.
pub fn extract(doc: &UploadedDocument) -> Result<String, ExtractionError> {
    let raw = String::from_utf8_lossy(&doc.bytes);
    let stripped = strip_rtf(&raw);
    if stripped.is_empty() {
        Ok(format!("[RTF file: {} - No readable text found]", doc.name))
    } else {
        Ok(stripped)
    }
}

pub(crate) fn strip_rtf(text: &str) -> String {
    let controls = Regex::new(
        r"(?i)\\[a-z]+-?\d*|\\'[0-9a-f]{2}|\\\{|\\\}|\\\\|\{\*?\\[^{}]+\}|[{}]",
    )
    .unwrap();
    collapse_whitespace(&controls.replace_all(text, " "))
}
