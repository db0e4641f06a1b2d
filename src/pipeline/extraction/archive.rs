use std::io::Read;

use super::dispatch::HandlerKind;
use super::office::open_container;
use super::ExtractionError;
use crate::config::{ARCHIVE_ENTRY_CHAR_CAP, ARCHIVE_MAX_TEXT_ENTRIES};
use crate::pipeline::document::UploadedDocument;

/// Generic zip archives: surface up to a handful of plain-text entries,
/// each truncated, under per-entry headers. Archives without qualifying
/// entries report their total entry count instead.
pub fn extract(doc: &UploadedDocument) -> Result<String, ExtractionError> {
    let mut archive = open_container(&doc.bytes)?;
    let total_entries = archive.len();

    let mut sections = Vec::new();
    for index in 0..total_entries {
        if sections.len() >= ARCHIVE_MAX_TEXT_ENTRIES {
            break;
        }
        let mut entry = match archive.by_index(index) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!(file = %doc.name, index, error = %e, "skipping archive entry");
                continue;
            }
        };
        if entry.is_dir() {
            continue;
        }
        let name = entry.name().to_string();
        if !has_plain_text_extension(&name) {
            continue;
        }

        let mut content = String::new();
        // Entries that are not valid UTF-8 are silently skipped.
        if entry.read_to_string(&mut content).is_err() {
            continue;
        }

        let truncated: String = content.chars().take(ARCHIVE_ENTRY_CHAR_CAP).collect();
        sections.push(format!("--- File in ZIP: {name} ---\n{truncated}"));
    }

    if sections.is_empty() {
        Ok(format!(
            "[ZIP archive: {} - Contains {} files. Extract and upload \
             relevant documents for analysis.]",
            doc.name, total_entries
        ))
    } else {
        Ok(format!(
            "[ZIP archive: {} contains:\n{}]",
            doc.name,
            sections.join("\n\n")
        ))
    }
}

fn has_plain_text_extension(entry_name: &str) -> bool {
    let Some((stem, ext)) = entry_name.rsplit_once('.') else {
        return false;
    };
    if stem.is_empty() {
        return false;
    }
    HandlerKind::PlainText
        .extensions()
        .contains(&ext.to_ascii_lowercase().as_str())
}
