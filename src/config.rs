/// Page cap for PDF text-layer extraction.
pub const MAX_PDF_PAGES: usize = 30;

/// How many leading bytes of a PDF the binary-scan fallback inspects.
pub const PDF_BINARY_SCAN_BYTES: usize = 10 * 1024;

/// How many printable runs the binary-scan fallback keeps.
pub const PDF_BINARY_SCAN_MAX_RUNS: usize = 20;

/// Extracted text at or below this length (in characters) is treated as
/// uninformative and replaced by a descriptor embedding the short text.
pub const MIN_INFORMATIVE_CHARS: usize = 100;

/// Per-file character cap for regulation-set context contributions.
pub const REGULATION_FILE_CHAR_CAP: usize = 8000;

/// Per-file character cap for subject-set context contributions.
pub const DOCUMENT_FILE_CHAR_CAP: usize = 12000;

/// How many plain-text entries of a generic archive are surfaced.
pub const ARCHIVE_MAX_TEXT_ENTRIES: usize = 5;

/// Character cap per surfaced archive entry.
pub const ARCHIVE_ENTRY_CHAR_CAP: usize = 2000;

/// Default log filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "auditflow=info"
}

/// Connection settings for the external chat service.
///
/// Defaults target a local OpenAI-compatible endpoint (Ollama's `/v1`
/// surface); hosted services are reached by overriding `base_url` and
/// supplying an `api_key`.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434/v1".to_string(),
            api_key: None,
            model: "llama3:latest".to_string(),
            timeout_secs: 300,
        }
    }
}
