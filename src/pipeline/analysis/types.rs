//! Audit result types and the chat-client seam.

use serde::{Deserialize, Serialize};

use super::AnalysisError;

/// Severity of a single finding, as classified by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
    Compliant,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
            Severity::Compliant => "compliant",
        }
    }
}

/// Overall audit opinion across all findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opinion {
    Clean,
    Qualified,
    Adverse,
}

impl Opinion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Opinion::Clean => "clean",
            Opinion::Qualified => "qualified",
            Opinion::Adverse => "adverse",
        }
    }
}

/// One audit finding as reported by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditFinding {
    pub severity: Severity,
    pub title: String,
    pub regulation: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

/// The complete audit outcome. Counts and opinion come straight from the
/// model reply; they are not recomputed from the findings list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    pub total_findings: u32,
    pub high_risk: u32,
    pub medium_risk: u32,
    pub compliant: u32,
    pub opinion: Opinion,
    pub findings: Vec<AuditFinding>,
}

/// Input to a single audit run. Regulation files may be empty (the model
/// is then told to rely on its general knowledge); document files and
/// categories may not.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub regulation_files: Vec<crate::pipeline::document::UploadedDocument>,
    pub document_files: Vec<crate::pipeline::document::UploadedDocument>,
    pub categories: Vec<String>,
}

impl AnalysisRequest {
    pub fn new(
        regulation_files: Vec<crate::pipeline::document::UploadedDocument>,
        document_files: Vec<crate::pipeline::document::UploadedDocument>,
        categories: Vec<String>,
    ) -> Result<Self, AnalysisError> {
        let request = Self {
            regulation_files,
            document_files,
            categories,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.document_files.is_empty() {
            return Err(AnalysisError::NoDocuments);
        }
        if self.categories.is_empty() {
            return Err(AnalysisError::NoCategories);
        }
        Ok(())
    }
}

/// Abstraction over the chat completion backend. Implementations are
/// synchronous; the orchestrator moves calls onto a blocking task.
pub trait ChatClient: Send + Sync {
    /// Send one prompt and return the assistant's raw text reply.
    fn complete(&self, model: &str, prompt: &str, system: &str) -> Result<String, AnalysisError>;
}
