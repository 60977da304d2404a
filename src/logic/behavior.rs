//! Behavior Scoring
//!
//! Normalizes two raw telemetry counters (request velocity, resource spread)
//! and combines them into a weighted behavioral risk score in [0, 1].
//! Pure and total: oversized counters saturate at 1.0, negative counters
//! clamp to 0 instead of dragging the score below zero.

use serde::{Deserialize, Serialize};

use super::round2;

// ============================================================================
// WEIGHTS & CAPS (fixed policy, not runtime-configurable)
// ============================================================================

/// Requests-per-window count at which velocity saturates.
pub const VELOCITY_CAP: f32 = 100.0;

/// Distinct-resource count at which spread saturates.
pub const SPREAD_CAP: f32 = 20.0;

/// Weight of normalized velocity (60%)
pub const VELOCITY_WEIGHT: f32 = 0.6;

/// Weight of normalized spread (40%)
pub const SPREAD_WEIGHT: f32 = 0.4;

// ============================================================================
// SCORING
// ============================================================================

/// Derived behavioral risk score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BehaviorScore {
    pub normalized_velocity: f32,
    pub normalized_spread: f32,
    /// Weighted combination, rounded to 2 decimals, in [0, 1].
    pub score: f32,
}

/// Score raw behavioral counters.
pub fn score(velocity: f32, spread: f32) -> BehaviorScore {
    let normalized_velocity = (velocity / VELOCITY_CAP).clamp(0.0, 1.0);
    let normalized_spread = (spread / SPREAD_CAP).clamp(0.0, 1.0);

    let score = round2(VELOCITY_WEIGHT * normalized_velocity + SPREAD_WEIGHT * normalized_spread);

    BehaviorScore {
        normalized_velocity,
        normalized_spread,
        score,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midrange_counters() {
        let s = score(50.0, 10.0);
        assert_eq!(s.normalized_velocity, 0.5);
        assert_eq!(s.normalized_spread, 0.5);
        assert_eq!(s.score, 0.5);
    }

    #[test]
    fn test_zero_counters() {
        let s = score(0.0, 0.0);
        assert_eq!(s.score, 0.0);
    }

    #[test]
    fn test_saturation() {
        // Oversized counters cap at 1.0 instead of overflowing
        let s = score(5000.0, 300.0);
        assert_eq!(s.normalized_velocity, 1.0);
        assert_eq!(s.normalized_spread, 1.0);
        assert_eq!(s.score, 1.0);
    }

    #[test]
    fn test_negative_counters_clamp_to_zero() {
        let s = score(-40.0, -3.0);
        assert_eq!(s.normalized_velocity, 0.0);
        assert_eq!(s.normalized_spread, 0.0);
        assert_eq!(s.score, 0.0);
    }

    #[test]
    fn test_weighting_and_rounding() {
        // 0.6 * 0.33 + 0.4 * 0.35 = 0.338 -> 0.34
        let s = score(33.0, 7.0);
        assert!((s.score - 0.34).abs() < 1e-6);
    }

    #[test]
    fn test_velocity_dominates_spread() {
        let fast = score(80.0, 0.0);
        let wide = score(0.0, 16.0);
        // Same normalized magnitude (0.8), velocity carries more weight
        assert!(fast.score > wide.score);
    }
}
