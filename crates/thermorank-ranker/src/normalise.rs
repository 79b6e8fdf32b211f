//! Score normalisation functions.
//!
//! Each raw property maps onto a 0–10 scale where higher always means more
//! desirable, so the scorer can treat every criterion the same way.
//! Inputs are not range-checked: a raw score outside its documented domain
//! yields a normalised value outside [0, 10], and that is the caller's
//! responsibility.

use thermorank_common::SynthesisComplexity;

/// ZT at which efficiency saturates.
pub const ZT_CEILING: f64 = 3.0;
/// Cost at or above which the cost score bottoms out.
pub const COST_CAP: f64 = 5000.0;
/// Synthesis time (days) at or above which the time score bottoms out.
pub const SYNTHESIS_DAYS_CAP: f64 = 30.0;

/// Linear against ZT_CEILING, clamped at 10.
pub fn normalise_zt(zt: f64) -> f64 {
    ((zt / ZT_CEILING) * 10.0).min(10.0)
}

/// Cheaper is better. Floors at 0 for costs at or above COST_CAP.
pub fn normalise_cost(cost: f64) -> f64 {
    (10.0 - (cost / COST_CAP) * 10.0).max(0.0)
}

pub fn normalise_complexity(complexity: SynthesisComplexity) -> f64 {
    match complexity {
        SynthesisComplexity::Low => 10.0,
        SynthesisComplexity::Medium => 6.0,
        SynthesisComplexity::High => 3.0,
    }
}

/// Direct inverse of a 0–10 toxicity score. Not clamped.
pub fn normalise_toxicity(toxicity: f64) -> f64 {
    10.0 - toxicity
}

/// Shorter is better. Floors at 0 at or above SYNTHESIS_DAYS_CAP.
pub fn normalise_synthesis_time(days: f64) -> f64 {
    (10.0 - (days / SYNTHESIS_DAYS_CAP) * 10.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zt_linear_then_saturates() {
        assert!((normalise_zt(0.0) - 0.0).abs() < 1e-9);
        assert!((normalise_zt(1.5) - 5.0).abs() < 1e-9);
        assert_eq!(normalise_zt(3.0), 10.0);
        assert_eq!(normalise_zt(4.2), 10.0);
    }

    #[test]
    fn test_zt_monotone() {
        let mut prev = f64::NEG_INFINITY;
        for step in 0..=100 {
            let v = normalise_zt(step as f64 * 0.05);
            assert!(v >= prev, "normalise_zt decreased at step {step}");
            prev = v;
        }
    }

    #[test]
    fn test_cost_inverse_and_floor() {
        assert_eq!(normalise_cost(0.0), 10.0);
        assert!((normalise_cost(1200.0) - 7.6).abs() < 1e-9);
        assert_eq!(normalise_cost(5000.0), 0.0);
        assert_eq!(normalise_cost(12_000.0), 0.0);
    }

    #[test]
    fn test_complexity_lookup() {
        assert_eq!(normalise_complexity(SynthesisComplexity::Low), 10.0);
        assert_eq!(normalise_complexity(SynthesisComplexity::Medium), 6.0);
        assert_eq!(normalise_complexity(SynthesisComplexity::High), 3.0);
    }

    #[test]
    fn test_toxicity_is_not_clamped() {
        assert_eq!(normalise_toxicity(3.0), 7.0);
        assert_eq!(normalise_toxicity(12.0), -2.0);
    }

    #[test]
    fn test_synthesis_time() {
        assert_eq!(normalise_synthesis_time(0.0), 10.0);
        assert!((normalise_synthesis_time(10.0) - 20.0 / 3.0).abs() < 1e-9);
        assert_eq!(normalise_synthesis_time(45.0), 0.0);
    }
}
