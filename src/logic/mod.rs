//! Decision logic
//!
//! Pure evaluation pipeline: classify -> score behavior -> fuse under policy.
//! Everything in here is importable and testable without network access;
//! only `classify::ScreenerClient` talks to the outside world.

pub mod behavior;
pub mod classify;
pub mod policy;
pub mod sanitize;

/// Round to 2 decimal places for presentation. Thresholds are always
/// compared against unrounded values; rounding happens once at the edge.
pub fn round2(x: f32) -> f32 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::round2;

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.338), 0.34);
        assert_eq!(round2(0.5), 0.5);
        assert_eq!(round2(0.004), 0.0);
        assert_eq!(round2(1.0), 1.0);
    }
}
