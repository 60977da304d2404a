//! Policy Types
//!
//! Data structures only - no decision logic.

use serde::{Deserialize, Serialize};

use crate::logic::classify::Impact;

// ============================================================================
// DECISION
// ============================================================================

/// Final policy decision for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    /// Forward the request unchanged
    Allow,
    /// Forward only after an out-of-band verification step
    VerifyThenAllow,
    /// Reject outright
    Block,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Allow => "ALLOW",
            Decision::VerifyThenAllow => "VERIFY_THEN_ALLOW",
            Decision::Block => "BLOCK",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            Decision::Allow => 0,
            Decision::VerifyThenAllow => 1,
            Decision::Block => 2,
        }
    }

    pub fn requires_verification(&self) -> bool {
        matches!(self, Decision::VerifyThenAllow)
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// POLICY DECISION
// ============================================================================

/// Complete fusion output, immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyDecision {
    pub decision: Decision,
    /// Fused risk in [0, 1], rounded to 2 decimals at the output edge
    pub final_risk: f32,
    /// One of the fixed violation labels, or "None"
    pub policy_violation: String,
    /// Echoed from the input classification for downstream auditing
    pub impact: Impact,
}
