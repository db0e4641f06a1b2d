//! Prompt construction for the compliance-audit chat call.

/// System persona for the audit conversation.
pub const AUDITOR_SYSTEM_PROMPT: &str = "You are an expert regulatory compliance auditor. \
You examine business documents against regulations and produce precise, \
evidence-backed findings. You always respond with valid JSON and nothing else.";

/// Builds the single user prompt for one audit run. The reply contract is
/// spelled out in full so the tolerant parser has a predictable shape to
/// recover.
pub fn build_audit_prompt(
    file_summary: &str,
    categories: &[String],
    regulation_context: &str,
    document_context: &str,
) -> String {
    format!(
        r#"Perform a compliance audit of the documents below.

{file_summary}

Audit categories to assess: {categories}

REGULATIONS:
{regulation_context}

DOCUMENTS UNDER AUDIT:
{document_context}

Respond with ONLY a JSON object in exactly this shape:
{{
  "totalFindings": <number>,
  "highRisk": <number>,
  "mediumRisk": <number>,
  "compliant": <number>,
  "opinion": "clean" | "qualified" | "adverse",
  "findings": [
    {{
      "severity": "high" | "medium" | "low" | "compliant",
      "title": "<short finding title>",
      "regulation": "<specific regulation and section cited>",
      "description": "<what was found and why it matters>",
      "evidence": "<quote or reference from the documents>",
      "recommendation": "<corrective action>"
    }}
  ]
}}

Rules:
- Cite the specific regulation section for every finding.
- Include compliant findings for areas that pass the audit.
- Omit "recommendation" for compliant findings.
- Set "opinion" to "clean" if there are no high or medium findings, "qualified" if there are medium findings but no high, "adverse" if there is any high finding.
- Return ONLY the JSON object, with no surrounding text."#,
        file_summary = file_summary,
        categories = categories.join(", "),
        regulation_context = regulation_context,
        document_context = document_context,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_all_sections() {
        let prompt = build_audit_prompt(
            "File Summary:\n- Regulations: reg.txt\n- Documents: doc.txt\n- Total files: 2",
            &["financial".to_string(), "privacy".to_string()],
            "=== Regulation File 1: reg.txt ===\nKeep records for 7 years.",
            "=== Document 1: doc.txt ===\nRecords kept for 2 years.",
        );
        assert!(prompt.contains("financial, privacy"));
        assert!(prompt.contains("=== Regulation File 1: reg.txt ==="));
        assert!(prompt.contains("=== Document 1: doc.txt ==="));
        assert!(prompt.contains("\"totalFindings\""));
        assert!(prompt.contains("Return ONLY the JSON object"));
    }
}
