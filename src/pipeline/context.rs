//! Context assembly: merges per-file extraction outputs into the two
//! labeled, length-capped evidence blocks embedded into the audit prompt.
//!
//! Caps bound the size of the request to the external reasoning service.
//! Truncation is a hard cutoff, not sentence-aware: acceptable lossy
//! behavior for this domain.

use crate::config::{DOCUMENT_FILE_CHAR_CAP, REGULATION_FILE_CHAR_CAP};

/// Instruction substituted when no regulation files were uploaded.
pub const NO_REGULATIONS_INSTRUCTION: &str =
    "No regulation files uploaded. Rely on your general knowledge of the applicable regulatory domain.";

/// Evidence block for the regulation file set.
pub fn assemble_regulation_context(files: &[(String, String)]) -> String {
    if files.is_empty() {
        return NO_REGULATIONS_INSTRUCTION.to_string();
    }
    assemble(files, "Regulation File", REGULATION_FILE_CHAR_CAP)
}

/// Evidence block for the subject (audited) file set.
pub fn assemble_document_context(files: &[(String, String)]) -> String {
    assemble(files, "Document", DOCUMENT_FILE_CHAR_CAP)
}

fn assemble(files: &[(String, String)], label: &str, cap: usize) -> String {
    files
        .iter()
        .enumerate()
        .map(|(i, (name, text))| {
            format!("=== {label} {}: {name} ===\n{}", i + 1, truncate_chars(text, cap))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Short inventory of both file sets, embedded into the prompt so the
/// model can refer to files by name.
pub fn build_file_summary(regulation_names: &[String], document_names: &[String]) -> String {
    let list = |names: &[String]| {
        if names.is_empty() {
            "None".to_string()
        } else {
            names.join(", ")
        }
    };
    format!(
        "File Summary:\n- Regulations: {}\n- Documents: {}\n- Total files: {}",
        list(regulation_names),
        list(document_names),
        regulation_names.len() + document_names.len()
    )
}

fn truncate_chars(text: &str, cap: usize) -> String {
    text.chars().take(cap).collect()
}
