//! Governor Decision Engine
//!
//! Input: ClassificationResult + behavioral risk score.
//! Output: PolicyDecision.
//!
//! Step 1 fuses confidence and behavior into a weighted base risk; step 2
//! runs the override chain; step 3 rounds the risk once for presentation.
//! Pure, deterministic, total - safe to call concurrently with no
//! coordination.

use crate::logic::classify::ClassificationResult;
use crate::logic::round2;

use super::rules::{apply_rules, OverrideRule, DEFAULT_RULES, VIOLATION_NONE};
use super::types::{Decision, PolicyDecision};

// ============================================================================
// FUSION WEIGHTS
// ============================================================================

/// Weight of classifier confidence (40%)
pub const CONFIDENCE_WEIGHT: f32 = 0.4;

/// Weight of the behavioral risk score (40%)
pub const BEHAVIOR_WEIGHT: f32 = 0.4;

/// Fixed base term: no request ever fuses to a flat zero.
pub const BASE_RISK: f32 = 0.1;

// ============================================================================
// FUSION
// ============================================================================

/// Weighted fusion of confidence and behavior, before any override.
/// Inputs are clamped into [0, 1]; the result lands in [0.1, 1.0] and is
/// monotone non-decreasing in both inputs.
pub fn fused_risk(confidence: f32, behavior_score: f32) -> f32 {
    let base = CONFIDENCE_WEIGHT * confidence.clamp(0.0, 1.0)
        + BEHAVIOR_WEIGHT * behavior_score.clamp(0.0, 1.0)
        + BASE_RISK;
    base.min(1.0)
}

/// Main fusion decision with the built-in severity chain.
pub fn fuse(classification: &ClassificationResult, behavior_score: f32) -> PolicyDecision {
    fuse_with_rules(classification, behavior_score, &DEFAULT_RULES)
}

/// Fusion decision with a caller-supplied rule chain.
pub fn fuse_with_rules(
    classification: &ClassificationResult,
    behavior_score: f32,
    rules: &[Box<dyn OverrideRule>],
) -> PolicyDecision {
    let behavior_score = behavior_score.clamp(0.0, 1.0);
    let fused = fused_risk(classification.confidence, behavior_score);

    let mut result = apply_rules(rules, classification, behavior_score, fused).unwrap_or_else(|| {
        PolicyDecision {
            decision: Decision::Allow,
            final_risk: fused,
            policy_violation: VIOLATION_NONE.to_string(),
            impact: classification.impact,
        }
    });

    // Thresholds above compared against the unrounded value; round once here.
    result.final_risk = round2(result.final_risk);
    result
}

// ============================================================================
// TESTS
// ============================================================================
