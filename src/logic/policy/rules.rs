//! Policy Override Rules
//!
//! A fixed-priority severity chain evaluated first-match-wins: credential
//! theft dominates data destruction, which dominates scraping, which
//! dominates jailbreak detection. Once a rule claims a classification the
//! later ones are unreachable - that ordering IS the policy and must not
//! be reshuffled.

use once_cell::sync::Lazy;

use crate::logic::classify::{ClassificationResult, Impact, Intent};

use super::types::{Decision, PolicyDecision};

// ============================================================================
// VIOLATION LABELS (fixed set)
// ============================================================================

pub const VIOLATION_NONE: &str = "None";
pub const VIOLATION_CREDENTIAL: &str = "Zero-Trust: Credential Access Attempt";
pub const VIOLATION_DESTRUCTIVE_FAST: &str = "Critical: High-Velocity Data Destruction";
pub const VIOLATION_DESTRUCTIVE: &str = "Suspicious Destructive Command";
pub const VIOLATION_SCRAPING: &str = "Abnormal Data Access Pattern (Scraping)";
pub const VIOLATION_JAILBREAK: &str = "AI Safety: Jailbreak Detected";

// ============================================================================
// THRESHOLDS & FLOORS
// ============================================================================

/// Behavior score above which (strictly) a destructive command is blocked
/// outright instead of escalated to verification.
pub const DESTRUCTIVE_BLOCK_THRESHOLD: f32 = 0.5;

/// Behavior score above which (strictly) a sensitive read is treated as
/// scraping.
pub const SCRAPING_THRESHOLD: f32 = 0.6;

/// Risk floor applied to slow destructive commands.
pub const DESTRUCTIVE_RISK_FLOOR: f32 = 0.8;

/// Risk floor applied to scraping-pattern reads.
pub const SCRAPING_RISK_FLOOR: f32 = 0.75;

// ============================================================================
// OVERRIDE RULE TRAIT
// ============================================================================

/// One entry of the severity chain. `applies` decides whether the rule
/// claims the classification; `apply` produces the mandated outcome.
pub trait OverrideRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn applies(&self, classification: &ClassificationResult) -> bool;

    fn apply(
        &self,
        classification: &ClassificationResult,
        behavior_score: f32,
        fused_risk: f32,
    ) -> PolicyDecision;
}

// ============================================================================
// BUILT-IN RULES (in severity order)
// ============================================================================

/// Identity protection: any credential angle blocks, full stop.
pub struct CredentialRule;

impl OverrideRule for CredentialRule {
    fn name(&self) -> &'static str {
        "CredentialRule"
    }

    fn applies(&self, classification: &ClassificationResult) -> bool {
        classification.impact == Impact::CredentialTheft
            || classification.intent == Intent::CredentialAccess
    }

    fn apply(
        &self,
        classification: &ClassificationResult,
        _behavior_score: f32,
        _fused_risk: f32,
    ) -> PolicyDecision {
        PolicyDecision {
            decision: Decision::Block,
            final_risk: 1.0,
            policy_violation: VIOLATION_CREDENTIAL.to_string(),
            impact: classification.impact,
        }
    }
}

/// Data integrity: destructive commands block when moving fast, otherwise
/// get a risk floor and a verification step.
pub struct DestructiveRule;

impl OverrideRule for DestructiveRule {
    fn name(&self) -> &'static str {
        "DestructiveRule"
    }

    fn applies(&self, classification: &ClassificationResult) -> bool {
        classification.impact == Impact::Destructive
            || classification.intent == Intent::DataExfiltration
    }

    fn apply(
        &self,
        classification: &ClassificationResult,
        behavior_score: f32,
        fused_risk: f32,
    ) -> PolicyDecision {
        if behavior_score > DESTRUCTIVE_BLOCK_THRESHOLD {
            PolicyDecision {
                decision: Decision::Block,
                final_risk: 1.0,
                policy_violation: VIOLATION_DESTRUCTIVE_FAST.to_string(),
                impact: classification.impact,
            }
        } else {
            PolicyDecision {
                decision: Decision::VerifyThenAllow,
                final_risk: fused_risk.max(DESTRUCTIVE_RISK_FLOOR),
                policy_violation: VIOLATION_DESTRUCTIVE.to_string(),
                impact: classification.impact,
            }
        }
    }
}

/// Privacy: a read becomes a scrape when behavior is hot; a slow read is
/// allowed at the fused risk, unmodified.
pub struct SensitiveReadRule;

impl OverrideRule for SensitiveReadRule {
    fn name(&self) -> &'static str {
        "SensitiveReadRule"
    }

    fn applies(&self, classification: &ClassificationResult) -> bool {
        classification.impact == Impact::SensitiveRead
    }

    fn apply(
        &self,
        classification: &ClassificationResult,
        behavior_score: f32,
        fused_risk: f32,
    ) -> PolicyDecision {
        if behavior_score > SCRAPING_THRESHOLD {
            PolicyDecision {
                decision: Decision::VerifyThenAllow,
                final_risk: fused_risk.max(SCRAPING_RISK_FLOOR),
                policy_violation: VIOLATION_SCRAPING.to_string(),
                impact: classification.impact,
            }
        } else {
            PolicyDecision {
                decision: Decision::Allow,
                final_risk: fused_risk,
                policy_violation: VIOLATION_NONE.to_string(),
                impact: classification.impact,
            }
        }
    }
}

/// AI safety: prompt-injection / instruction-override attempts block.
pub struct JailbreakRule;

impl OverrideRule for JailbreakRule {
    fn name(&self) -> &'static str {
        "JailbreakRule"
    }

    fn applies(&self, classification: &ClassificationResult) -> bool {
        classification.intent == Intent::PrivilegeEscalation
    }

    fn apply(
        &self,
        classification: &ClassificationResult,
        _behavior_score: f32,
        _fused_risk: f32,
    ) -> PolicyDecision {
        PolicyDecision {
            decision: Decision::Block,
            final_risk: 1.0,
            policy_violation: VIOLATION_JAILBREAK.to_string(),
            impact: classification.impact,
        }
    }
}

// ============================================================================
// RULE ENGINE
// ============================================================================

/// The fixed severity chain, built once.
pub static DEFAULT_RULES: Lazy<Vec<Box<dyn OverrideRule>>> = Lazy::new(|| {
    vec![
        Box::new(CredentialRule),
        Box::new(DestructiveRule),
        Box::new(SensitiveReadRule),
        Box::new(JailbreakRule),
    ]
});

/// Apply rules in order; the first rule whose predicate matches wins.
/// Returns None when no rule claims the classification.
pub fn apply_rules(
    rules: &[Box<dyn OverrideRule>],
    classification: &ClassificationResult,
    behavior_score: f32,
    fused_risk: f32,
) -> Option<PolicyDecision> {
    rules
        .iter()
        .find(|rule| rule.applies(classification))
        .map(|rule| rule.apply(classification, behavior_score, fused_risk))
}

// ============================================================================
// TESTS
// ============================================================================
