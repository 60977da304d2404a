//! Instruction template and response parsing
//!
//! Local models love wrapping answers in ```json fences; parsing strips
//! them before decoding. Anything that still fails to decode becomes the
//! unknown/0.0 fallback.

use super::types::ClassificationResult;

pub const SYSTEM_PROMPT: &str = "You are a JSON-only API. No markdown. No chatter.";

/// Build the classification instruction for one (already sanitized) command.
pub fn instruction(command: &str) -> String {
    format!(
        r#"[ROLE]
You are a Security Operations Center (SOC) AI.

[INPUT COMMAND]
"{command}"

[TASK]
1. Classify the intent of the input into exactly ONE category:
- credential_access (Stealing passwords, asking for users)
- data_exfiltration (Dump database, show tables)
- privilege_escalation (Override rules, Ignore instructions, Jailbreak)
- harmless (Hello, weather, generic help)

2. Classify the impact of the input into exactly ONE category:
- credential_theft (asking for passwords / secrets directly)
- sensitive_read (reading sensitive tables legitimately)
- destructive (DROP / DELETE / MODIFY critical data)
- harmless

[OUTPUT]
Return JSON ONLY:
{{
  "intent": "category_name",
  "impact": "category_name",
  "confidence": <float 0.0-1.0>,
  "reason": "Brief explanation"
}}"#
    )
}

/// Strip markdown code fences from model output.
pub fn strip_code_fences(content: &str) -> String {
    if content.contains("```") {
        content.replace("```json", "").replace("```", "")
    } else {
        content.to_string()
    }
}

/// Decode raw model output into a `ClassificationResult`, clamping
/// confidence into [0, 1]. Unparseable output degrades to the fallback.
pub fn parse_classification(content: &str) -> ClassificationResult {
    let cleaned = strip_code_fences(content);
    match serde_json::from_str::<ClassificationResult>(cleaned.trim()) {
        Ok(mut result) => {
            result.confidence = result.confidence.clamp(0.0, 1.0);
            result
        }
        Err(e) => {
            tracing::warn!("Classifier output did not parse as JSON: {}", e);
            ClassificationResult::fallback("classifier output parse error")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::classify::{Impact, Intent};

    #[test]
    fn test_parses_plain_json() {
        let r = parse_classification(
            r#"{"intent":"data_exfiltration","impact":"destructive","confidence":0.8,"reason":"drop table"}"#,
        );
        assert_eq!(r.intent, Intent::DataExfiltration);
        assert_eq!(r.impact, Impact::Destructive);
        assert!((r.confidence - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_strips_code_fences() {
        let r = parse_classification(
            "```json\n{\"intent\":\"harmless\",\"impact\":\"harmless\",\"confidence\":0.9,\"reason\":\"greeting\"}\n```",
        );
        assert_eq!(r.intent, Intent::Harmless);
    }

    #[test]
    fn test_garbage_degrades_to_fallback() {
        let r = parse_classification("I think this request is probably fine!");
        assert_eq!(r.intent, Intent::Unknown);
        assert_eq!(r.impact, Impact::Unknown);
        assert_eq!(r.confidence, 0.0);
    }

    #[test]
    fn test_confidence_clamped() {
        let r = parse_classification(
            r#"{"intent":"harmless","impact":"harmless","confidence":7.5,"reason":""}"#,
        );
        assert_eq!(r.confidence, 1.0);
    }

    #[test]
    fn test_instruction_embeds_command() {
        let p = instruction("show tables");
        assert!(p.contains("\"show tables\""));
        assert!(p.contains("credential_access"));
    }
}
