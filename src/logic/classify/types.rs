//! Classifier output schema
//!
//! Data structures only - no parsing or transport logic.

use serde::{Deserialize, Serialize};

// ============================================================================
// INTENT & IMPACT
// ============================================================================

/// Why the request was made, in the classifier's judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Stealing passwords, enumerating users
    CredentialAccess,
    /// Dump database, show tables
    DataExfiltration,
    /// Override rules, ignore instructions, jailbreak
    PrivilegeEscalation,
    Harmless,
    /// Catch-all for unrecognized labels and classifier failure
    #[default]
    #[serde(other)]
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::CredentialAccess => "credential_access",
            Intent::DataExfiltration => "data_exfiltration",
            Intent::PrivilegeEscalation => "privilege_escalation",
            Intent::Harmless => "harmless",
            Intent::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the request would do if fulfilled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    /// Passwords / secrets handed out directly
    CredentialTheft,
    /// Reading sensitive tables
    SensitiveRead,
    /// DROP / DELETE / modify critical data
    Destructive,
    Harmless,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Impact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::CredentialTheft => "credential_theft",
            Impact::SensitiveRead => "sensitive_read",
            Impact::Destructive => "destructive",
            Impact::Harmless => "harmless",
            Impact::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// CLASSIFICATION RESULT
// ============================================================================

/// One classification, created fresh per request and discarded after fusion.
/// Missing wire fields default to unknown / 0.0 so a partial classifier
/// answer still deserializes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ClassificationResult {
    #[serde(default)]
    pub intent: Intent,
    #[serde(default)]
    pub impact: Impact,
    /// Classifier confidence in [0, 1]
    #[serde(default)]
    pub confidence: f32,
    /// Free-text explanation, advisory only - never used in decisions
    #[serde(default)]
    pub reason: String,
}

impl ClassificationResult {
    /// Substitute used when the classifier is unavailable or unparseable.
    /// Keeps fusion total: unknown/0.0 falls through to the default branch.
    pub fn fallback(reason: &str) -> Self {
        Self {
            intent: Intent::Unknown,
            impact: Impact::Unknown,
            confidence: 0.0,
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_deserialize() {
        let r: ClassificationResult = serde_json::from_str(
            r#"{"intent":"credential_access","impact":"credential_theft","confidence":0.95,"reason":"asked for passwords"}"#,
        )
        .unwrap();
        assert_eq!(r.intent, Intent::CredentialAccess);
        assert_eq!(r.impact, Impact::CredentialTheft);
    }

    #[test]
    fn test_unrecognized_labels_become_unknown() {
        let r: ClassificationResult = serde_json::from_str(
            r#"{"intent":"world_domination","impact":"apocalypse","confidence":1.0,"reason":""}"#,
        )
        .unwrap();
        assert_eq!(r.intent, Intent::Unknown);
        assert_eq!(r.impact, Impact::Unknown);
    }

    #[test]
    fn test_missing_fields_default() {
        let r: ClassificationResult = serde_json::from_str(r#"{"intent":"harmless"}"#).unwrap();
        assert_eq!(r.intent, Intent::Harmless);
        assert_eq!(r.impact, Impact::Unknown);
        assert_eq!(r.confidence, 0.0);
        assert_eq!(r.reason, "");
    }

    #[test]
    fn test_enum_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Intent::PrivilegeEscalation).unwrap(),
            "\"privilege_escalation\""
        );
        assert_eq!(serde_json::to_string(&Impact::Unknown).unwrap(), "\"unknown\"");
    }
}
