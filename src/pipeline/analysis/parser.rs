//! Tolerant extraction of the audit JSON from a chat reply.
//!
//! Models wrap JSON in prose or markdown fences more often than not, so
//! recovery happens in two isolated stages: first locate a candidate JSON
//! span, then parse and shape-check it. A failure in either stage reports
//! which stage failed.

use regex::Regex;

use super::types::AuditResult;
use super::AnalysisError;

/// Finds the JSON object span inside a raw model reply.
///
/// Tries, in order: the whole trimmed reply, the body of the first
/// markdown code fence, and the widest `{ ... }` span. A fence body may
/// itself carry prose around the object, so the span extraction applies
/// to it too. The caller decides whether the span actually parses.
pub fn recover_json_span(reply: &str) -> Result<&str, AnalysisError> {
    let trimmed = reply.trim();
    if trimmed.is_empty() {
        return Err(AnalysisError::MalformedResponse(
            "reply was empty".to_string(),
        ));
    }

    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        return Ok(trimmed);
    }

    let fence = Regex::new(r"(?s)```(?:json)?\s*(.*?)```").unwrap();
    let candidate = fence
        .captures(trimmed)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim())
        .filter(|body| !body.is_empty())
        .unwrap_or(trimmed);

    if let (Some(start), Some(end)) = (candidate.find('{'), candidate.rfind('}')) {
        if start < end {
            return Ok(&candidate[start..=end]);
        }
    }

    Err(AnalysisError::MalformedResponse(
        "no JSON object found in reply".to_string(),
    ))
}

/// Parses a chat reply into an [`AuditResult`].
///
/// Shape requirements beyond valid JSON: the object must carry a
/// `findings` array. Counts are taken from the reply as-is.
pub fn parse_audit_result(reply: &str) -> Result<AuditResult, AnalysisError> {
    let span = recover_json_span(reply)?;

    let value: serde_json::Value =
        serde_json::from_str(span).map_err(|e| AnalysisError::JsonParsing(e.to_string()))?;

    if !value
        .get("findings")
        .map(serde_json::Value::is_array)
        .unwrap_or(false)
    {
        return Err(AnalysisError::MalformedResponse(
            "reply is missing the findings array".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| AnalysisError::JsonParsing(e.to_string()))
}
