pub mod client;
pub mod orchestrator;
pub mod parser;
pub mod prompt;
pub mod types;

pub use client::*;
pub use orchestrator::*;
pub use parser::*;
pub use prompt::*;
pub use types::*;

use thiserror::Error;

/// Fatal analysis-run failures.
///
/// Service-level failures (the service didn't answer) and response-shape
/// failures (the service answered unusably) stay distinct variants so
/// callers can tell them apart. A run either fully succeeds or surfaces
/// exactly one of these; no partial result is ever returned.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Chat service is unreachable at {0}")]
    Connection(String),

    #[error("Chat request timed out after {0}s")]
    Timeout(u64),

    #[error("Chat service returned error (status {status}): {body}")]
    Service { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Chat reply could not be decoded: {0}")]
    ResponseDecoding(String),

    #[error("Malformed model reply: {0}")]
    MalformedResponse(String),

    #[error("JSON parsing error: {0}")]
    JsonParsing(String),

    #[error("No documents selected for audit")]
    NoDocuments,

    #[error("No compliance categories selected")]
    NoCategories,

    #[error("Analysis task failed: {0}")]
    TaskFailed(String),
}

impl AnalysisError {
    /// The external service did not produce a usable answer at all.
    pub fn is_service_failure(&self) -> bool {
        matches!(
            self,
            Self::Connection(_)
                | Self::Timeout(_)
                | Self::Service { .. }
                | Self::HttpClient(_)
                | Self::ResponseDecoding(_)
        )
    }

    /// The service answered, but the reply was not a usable result.
    pub fn is_response_shape_failure(&self) -> bool {
        matches!(self, Self::MalformedResponse(_) | Self::JsonParsing(_))
    }
}
