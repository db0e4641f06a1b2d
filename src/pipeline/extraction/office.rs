//! Compressed-XML office formats: word-processing documents and slide
//! decks. Both are zip containers holding XML parts; the text is recovered
//! by stripping markup rather than fully parsing the schema.

use std::io::{Cursor, Read};

use regex::Regex;
use zip::ZipArchive;

use super::ExtractionError;
use crate::pipeline::document::UploadedDocument;

/// Word-processing documents: the single `word/document.xml` body part.
pub fn extract_word(doc: &UploadedDocument) -> Result<String, ExtractionError> {
    let mut archive = open_container(&doc.bytes)?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractionError::OfficePart(format!("word/document.xml: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractionError::OfficePart(e.to_string()))?;

    let text = strip_markup(&xml);
    if text.is_empty() {
        Ok(format!("[DOCX file: {} - No text content found]", doc.name))
    } else {
        Ok(text)
    }
}

/// Presentations: one XML part per slide, in numeric slide order.
pub fn extract_slides(doc: &UploadedDocument) -> Result<String, ExtractionError> {
    let mut archive = open_container(&doc.bytes)?;

    let mut slide_parts: Vec<(u32, String)> = archive
        .file_names()
        .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
        .filter_map(|name| slide_number(name).map(|n| (n, name.to_string())))
        .collect();
    slide_parts.sort();

    let mut slides = Vec::new();
    for (number, part) in slide_parts {
        let mut xml = String::new();
        archive
            .by_name(&part)
            .map_err(|e| ExtractionError::OfficePart(format!("{part}: {e}")))?
            .read_to_string(&mut xml)
            .map_err(|e| ExtractionError::OfficePart(e.to_string()))?;

        let text = strip_markup(&xml);
        if !text.is_empty() {
            slides.push(format!("--- Slide {number} ---\n{text}"));
        }
    }

    if slides.is_empty() {
        Ok(format!("[PPTX file: {} - No text content found]", doc.name))
    } else {
        Ok(slides.join("\n\n"))
    }
}

pub(crate) fn open_container(
    bytes: &[u8],
) -> Result<ZipArchive<Cursor<&[u8]>>, ExtractionError> {
    ZipArchive::new(Cursor::new(bytes)).map_err(|e| ExtractionError::Archive(e.to_string()))
}

fn slide_number(part_name: &str) -> Option<u32> {
    part_name
        .trim_start_matches("ppt/slides/slide")
        .trim_end_matches(".xml")
        .parse()
        .ok()
}

/// Strip all markup tags and collapse whitespace. Loses structure, keeps
/// every piece of literal text.
pub(crate) fn strip_markup(xml: &str) -> String {
    let tags = Regex::new(r"<[^>]*>").unwrap();
    collapse_whitespace(&tags.replace_all(xml, " "))
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
