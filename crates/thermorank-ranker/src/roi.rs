//! Return-on-investment metric: ZT gained over the bismuth telluride
//! baseline per thousand currency units of synthesis cost.
//! Independent of the priority weights and not used for ranking.

use thermorank_common::Material;

use crate::round2;

/// ZT of the incumbent commercial material (Bi2Te3).
pub const BASELINE_ZT: f64 = 1.0;

/// `max(0, ZT - 1.0) / (cost / 1000)`, rounded to 2 dp. Zero-cost materials
/// report 0.
pub fn roi(material: &Material) -> f64 {
    let zt_improvement = (material.predicted_zt - BASELINE_ZT).max(0.0);
    let cost_in_thousands = material.estimated_cost / 1000.0;

    if cost_in_thousands == 0.0 {
        return 0.0;
    }

    round2(zt_improvement / cost_in_thousands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use thermorank_test_utils::MaterialBuilder;

    #[test]
    fn test_roi_basic() {
        let m = MaterialBuilder::new("m").zt(2.1).cost(1200.0).build();
        // 1.1 / 1.2 = 0.9166…
        assert_eq!(roi(&m), 0.92);
    }

    #[test]
    fn test_roi_zero_below_baseline() {
        let m = MaterialBuilder::new("m").zt(0.8).cost(500.0).build();
        assert_eq!(roi(&m), 0.0);
        let at_baseline = MaterialBuilder::new("m").zt(1.0).cost(500.0).build();
        assert_eq!(roi(&at_baseline), 0.0);
    }

    #[test]
    fn test_roi_zero_cost_guarded() {
        let m = MaterialBuilder::new("m").zt(2.5).cost(0.0).build();
        assert_eq!(roi(&m), 0.0);
    }
}
