//! End-to-end pipeline runs against a scripted chat backend.

use std::sync::{Arc, Mutex};

use auditflow::{
    AnalysisError, AnalysisRequest, AuditOrchestrator, ChatClient, CollectingSink, Engines,
    MockChatClient, Opinion, UploadedDocument,
};

const CLEAN_REPLY: &str = r#"{
    "totalFindings": 2,
    "highRisk": 0,
    "mediumRisk": 0,
    "compliant": 2,
    "opinion": "clean",
    "findings": [
        {
            "severity": "compliant",
            "title": "Retention schedule adequate",
            "regulation": "Companies Act s.388",
            "description": "Records are retained for the statutory period."
        },
        {
            "severity": "compliant",
            "title": "Privacy notice complete",
            "regulation": "GDPR Art. 13",
            "description": "All required disclosures are present."
        }
    ]
}"#;

/// Chat client that records every prompt it receives before answering.
struct RecordingChatClient {
    response: String,
    prompts: Mutex<Vec<String>>,
}

impl RecordingChatClient {
    fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl ChatClient for RecordingChatClient {
    fn complete(&self, _model: &str, prompt: &str, _system: &str) -> Result<String, AnalysisError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.response.clone())
    }
}

/// Chat client that always fails as if the service were down.
struct UnreachableChatClient;

impl ChatClient for UnreachableChatClient {
    fn complete(&self, _model: &str, _prompt: &str, _system: &str) -> Result<String, AnalysisError> {
        Err(AnalysisError::Connection("http://localhost:11434/v1".into()))
    }
}

fn text_doc(name: &str, content: &str) -> UploadedDocument {
    UploadedDocument::new(name, "text/plain", content.as_bytes().to_vec())
}

fn policy_text() -> String {
    "All statutory records are retained for seven years in line with the \
     Companies Act. Customer data is processed under a documented privacy \
     notice reviewed annually."
        .to_string()
}

#[tokio::test]
async fn audit_without_regulation_files_completes() {
    let orchestrator = AuditOrchestrator::new(
        Engines::default(),
        Arc::new(MockChatClient::new(CLEAN_REPLY)),
        "llama3:latest",
    );
    let request = AnalysisRequest::new(
        vec![],
        vec![text_doc("policy.txt", &policy_text())],
        vec!["financial".into(), "privacy".into()],
    )
    .unwrap();

    let sink = Arc::new(CollectingSink::new());
    let result = orchestrator.analyse(request, sink.clone()).await.unwrap();

    assert_eq!(result.opinion, Opinion::Clean);
    assert_eq!(result.total_findings as usize, result.findings.len());

    let percents: Vec<u8> = sink.events().iter().map(|(_, p)| *p).collect();
    assert!(!percents.is_empty());
    assert!(percents.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*percents.last().unwrap(), 100);
}

#[tokio::test]
async fn missing_regulations_switch_prompt_to_general_knowledge() {
    let chat = Arc::new(RecordingChatClient::new(CLEAN_REPLY));
    let orchestrator =
        AuditOrchestrator::new(Engines::default(), chat.clone(), "llama3:latest");
    let request = AnalysisRequest::new(
        vec![],
        vec![text_doc("policy.txt", &policy_text())],
        vec!["privacy".into()],
    )
    .unwrap();

    orchestrator
        .analyse(request, Arc::new(CollectingSink::new()))
        .await
        .unwrap();

    let prompts = chat.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("No regulation files uploaded"));
    assert!(prompts[0].contains("- Regulations: None"));
}

#[tokio::test]
async fn corrupt_file_degrades_to_fallback_but_run_completes() {
    let chat = Arc::new(RecordingChatClient::new(CLEAN_REPLY));
    let orchestrator =
        AuditOrchestrator::new(Engines::default(), chat.clone(), "llama3:latest");

    // Claims to be a Word document but is not a zip container, so its
    // handler fails and the file is represented by a descriptor instead.
    let corrupt = UploadedDocument::new(
        "contract.docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        b"not a zip container".to_vec(),
    );
    let request = AnalysisRequest::new(
        vec![],
        vec![corrupt, text_doc("policy.txt", &policy_text())],
        vec!["financial".into()],
    )
    .unwrap();

    let result = orchestrator
        .analyse(request, Arc::new(CollectingSink::new()))
        .await
        .unwrap();
    assert_eq!(result.opinion, Opinion::Clean);

    let prompts = chat.prompts();
    assert!(prompts[0].contains("[File: contract.docx"));
    assert!(prompts[0].contains("Extraction failed"));
    assert!(prompts[0].contains("=== Document 2: policy.txt ==="));
}

#[tokio::test]
async fn service_failure_and_shape_failure_stay_distinct() {
    let request = || {
        AnalysisRequest::new(
            vec![],
            vec![text_doc("policy.txt", &policy_text())],
            vec!["financial".into()],
        )
        .unwrap()
    };

    let down = AuditOrchestrator::new(
        Engines::default(),
        Arc::new(UnreachableChatClient),
        "llama3:latest",
    );
    let err = down
        .analyse(request(), Arc::new(CollectingSink::new()))
        .await
        .unwrap_err();
    assert!(err.is_service_failure());
    assert!(!err.is_response_shape_failure());

    let chatty = AuditOrchestrator::new(
        Engines::default(),
        Arc::new(MockChatClient::new("I'd be happy to help with the audit!")),
        "llama3:latest",
    );
    let err = chatty
        .analyse(request(), Arc::new(CollectingSink::new()))
        .await
        .unwrap_err();
    assert!(err.is_response_shape_failure());
    assert!(!err.is_service_failure());
}
