//! Auditflow: document normalization and AI-analysis pipeline for
//! regulatory compliance audits.
//!
//! The pipeline takes two sets of uploaded binary files (regulation
//! reference material and the documents under audit) plus a list of
//! selected compliance categories, and produces a structured
//! [`AuditResult`]:
//!
//! 1. Each file is routed to a format-specific extraction handler
//!    (plain text, PDF text layer, office XML, spreadsheets, RTF,
//!    images via OCR, zip archives). Per-file failures degrade to
//!    descriptive fallback text; one bad file never aborts a batch.
//! 2. Extracted texts are assembled into two length-capped context
//!    blocks and embedded into an audit prompt.
//! 3. The prompt is sent once to an external chat service; the
//!    free-form reply is tolerantly parsed into a validated
//!    [`AuditResult`].
//!
//! Progress is reported through a caller-supplied [`ProgressSink`]
//! with monotonically non-decreasing percentages.

pub mod config;
pub mod pipeline;
pub mod progress;

pub use pipeline::analysis::client::{HttpChatClient, MockChatClient};
pub use pipeline::analysis::orchestrator::{AnalysisStage, AuditOrchestrator};
pub use pipeline::analysis::types::{
    AnalysisRequest, AuditFinding, AuditResult, ChatClient, Opinion, Severity,
};
pub use pipeline::analysis::AnalysisError;
pub use pipeline::document::UploadedDocument;
pub use pipeline::extraction::types::Engines;
pub use progress::{CollectingSink, ProgressSink};

use tracing_subscriber::EnvFilter;

/// Initialize tracing for callers that don't install their own subscriber.
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();
}
