//! Policy Module
//!
//! The Governor's decision core: fuses the classifier verdict with the
//! behavioral risk score and applies a fixed-priority override chain.
//! This is where Security happens - not the model, not the transport.
//!
//! ## Structure
//! - `types`: Core types (Decision, PolicyDecision)
//! - `rules`: Ordered override rules and violation labels
//! - `engine`: Fusion math and decision entry point
//!
//! ## Usage
//! ```ignore
//! use crate::logic::policy::{fuse, Decision};
//!
//! let verdict = fuse(&classification, behavior_score);
//! match verdict.decision {
//!     Decision::Allow => forward_request(),
//!     Decision::VerifyThenAllow => challenge_then_forward(),
//!     Decision::Block => reject(),
//! }
//! ```

pub mod engine;
pub mod rules;
pub mod types;

// Re-export main types for convenience
pub use types::{Decision, PolicyDecision};

pub use rules::{
    apply_rules, OverrideRule, CredentialRule, DestructiveRule, JailbreakRule,
    SensitiveReadRule, DEFAULT_RULES, VIOLATION_NONE,
};

pub use engine::{fuse, fuse_with_rules, fused_risk};
