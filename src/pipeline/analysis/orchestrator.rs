//! End-to-end audit run: extract both file sets, assemble context, call
//! the model once, parse the reply.

use std::sync::Arc;

use super::parser::parse_audit_result;
use super::prompt::{build_audit_prompt, AUDITOR_SYSTEM_PROMPT};
use super::types::{AnalysisRequest, AuditResult, ChatClient};
use super::AnalysisError;
use crate::pipeline::context::{
    assemble_document_context, assemble_regulation_context, build_file_summary,
};
use crate::pipeline::document::UploadedDocument;
use crate::pipeline::extraction::extractor::extract_document;
use crate::pipeline::extraction::types::Engines;
use crate::progress::{ProgressChannel, ProgressSink};

/// Named checkpoints of an audit run, in order. Every run that completes
/// passes through all six; per-file and OCR sub-progress interleaves
/// between them without ever moving the reported percentage backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStage {
    ExtractingRegulations,
    ExtractingDocuments,
    AssemblingContext,
    AwaitingModel,
    ParsingResponse,
    Done,
}

impl AnalysisStage {
    pub fn percent(&self) -> u8 {
        match self {
            AnalysisStage::ExtractingRegulations => 10,
            AnalysisStage::ExtractingDocuments => 30,
            AnalysisStage::AssemblingContext => 50,
            AnalysisStage::AwaitingModel => 70,
            AnalysisStage::ParsingResponse => 90,
            AnalysisStage::Done => 100,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AnalysisStage::ExtractingRegulations => "Extracting text from regulation files...",
            AnalysisStage::ExtractingDocuments => "Extracting text from audit documents...",
            AnalysisStage::AssemblingContext => "Preparing analysis context...",
            AnalysisStage::AwaitingModel => "Sending documents for compliance analysis...",
            AnalysisStage::ParsingResponse => "Parsing analysis results...",
            AnalysisStage::Done => "Analysis complete!",
        }
    }
}

/// Drives a complete audit run. Extraction engines and the chat backend
/// are injected, so runs are fully testable offline.
pub struct AuditOrchestrator {
    engines: Engines,
    chat: Arc<dyn ChatClient>,
    model: String,
}

impl AuditOrchestrator {
    pub fn new(engines: Engines, chat: Arc<dyn ChatClient>, model: impl Into<String>) -> Self {
        Self {
            engines,
            chat,
            model: model.into(),
        }
    }

    /// Runs the full pipeline against one request.
    ///
    /// Per-file extraction failures degrade to descriptor text and the
    /// run continues; only input validation, a failed chat call, or an
    /// unparseable reply abort the run.
    pub async fn analyse(
        &self,
        request: AnalysisRequest,
        sink: Arc<dyn ProgressSink>,
    ) -> Result<AuditResult, AnalysisError> {
        request.validate()?;

        let progress = Arc::new(ProgressChannel::new(sink));
        let emit = |stage: AnalysisStage| progress.emit(stage.message(), stage.percent());

        emit(AnalysisStage::ExtractingRegulations);
        let regulations = extract_set(
            request.regulation_files.clone(),
            self.engines.clone(),
            progress.clone(),
        );

        emit(AnalysisStage::ExtractingDocuments);
        let documents = extract_set(
            request.document_files.clone(),
            self.engines.clone(),
            progress.clone(),
        );

        let (regulations, documents) = tokio::join!(regulations, documents);

        emit(AnalysisStage::AssemblingContext);
        let regulation_context = assemble_regulation_context(&regulations);
        let document_context = assemble_document_context(&documents);
        let file_summary = build_file_summary(
            &request
                .regulation_files
                .iter()
                .map(|d| d.name.clone())
                .collect::<Vec<_>>(),
            &request
                .document_files
                .iter()
                .map(|d| d.name.clone())
                .collect::<Vec<_>>(),
        );
        let prompt = build_audit_prompt(
            &file_summary,
            &request.categories,
            &regulation_context,
            &document_context,
        );

        emit(AnalysisStage::AwaitingModel);
        let chat = self.chat.clone();
        let model = self.model.clone();
        let system = AUDITOR_SYSTEM_PROMPT.to_string();
        let reply = tokio::task::spawn_blocking(move || chat.complete(&model, &prompt, &system))
            .await
            .map_err(|e| AnalysisError::TaskFailed(e.to_string()))??;

        emit(AnalysisStage::ParsingResponse);
        let result = parse_audit_result(&reply)?;
        for finding in &result.findings {
            tracing::debug!(
                severity = finding.severity.as_str(),
                title = %finding.title,
                regulation = %finding.regulation,
                "audit finding"
            );
        }
        tracing::info!(
            opinion = result.opinion.as_str(),
            findings = result.findings.len(),
            "audit analysis complete"
        );

        emit(AnalysisStage::Done);
        Ok(result)
    }
}

/// Extracts one file set, preserving input order. Each file runs on a
/// blocking task; a panicked task degrades to an error marker for that
/// file instead of aborting the batch.
async fn extract_set(
    documents: Vec<UploadedDocument>,
    engines: Engines,
    progress: Arc<ProgressChannel>,
) -> Vec<(String, String)> {
    let handles: Vec<_> = documents
        .into_iter()
        .map(|doc| {
            let engines = engines.clone();
            let progress = progress.clone();
            let name = doc.name.clone();
            let handle = tokio::task::spawn_blocking(move || {
                extract_document(&doc, &engines, &progress).into_context_text()
            });
            (name, handle)
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for (name, handle) in handles {
        let text = match handle.await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(file = %name, error = %e, "extraction task failed");
                format!("[Error extracting {}: {}]", name, e)
            }
        };
        results.push((name, text));
    }
    results
}
