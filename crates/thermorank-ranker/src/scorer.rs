//! Priority score computation, ranking and top-candidate selection.
//!
//! S(m) = Σ(w_i × n_i(m)) over the eight criteria, rounded to 2 dp.
//! Every material is scored on its own; there is no cross-material
//! normalisation, so a score depends only on the material and the weights.

use serde::{Deserialize, Serialize};
use thermorank_common::{Material, MaterialStatus};

use crate::normalise::{
    normalise_complexity, normalise_cost, normalise_synthesis_time, normalise_toxicity,
    normalise_zt,
};
use crate::round2;
use crate::weights::{Criterion, PriorityWeights};

/// Number of candidates the dashboard recommends by default.
pub const DEFAULT_TOP_CANDIDATES: usize = 5;

/// Normalised per-criterion scores (nominally in [0, 10], unrounded).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub efficiency: f64,
    pub cost: f64,
    pub synthesis_complexity: f64,
    pub toxicity: f64,
    pub availability: f64,
    pub novelty: f64,
    pub commercial_viability: f64,
    pub synthesis_time: f64,
}

impl ScoreBreakdown {
    pub fn from_material(m: &Material) -> Self {
        Self {
            efficiency: normalise_zt(m.predicted_zt),
            cost: normalise_cost(m.estimated_cost),
            synthesis_complexity: normalise_complexity(m.synthesis_complexity),
            toxicity: normalise_toxicity(m.toxicity_score),
            availability: m.availability_score,
            novelty: m.novelty_score,
            commercial_viability: m.commercial_viability,
            synthesis_time: normalise_synthesis_time(m.estimated_synthesis_time),
        }
    }

    pub fn get(&self, criterion: Criterion) -> f64 {
        self.as_array()[criterion.index()]
    }

    pub fn as_array(&self) -> [f64; 8] {
        [
            self.efficiency,
            self.cost,
            self.synthesis_complexity,
            self.toxicity,
            self.availability,
            self.novelty,
            self.commercial_viability,
            self.synthesis_time,
        ]
    }
}

/// A material together with its priority score and the breakdown behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredMaterial {
    #[serde(flatten)]
    pub material: Material,
    pub priority_score: f64,
    pub breakdown: ScoreBreakdown,
}

impl ScoredMaterial {
    /// Weighted contribution of each criterion: `breakdown[i] × w[i]`.
    /// Contributions are unrounded, so their sum can differ from
    /// `priority_score` in the second decimal.
    pub fn contributions(&self, weights: &PriorityWeights) -> Vec<(Criterion, f64)> {
        Criterion::ALL
            .iter()
            .map(|&c| (c, self.breakdown.get(c) * weights.get(c)))
            .collect()
    }
}

/// Score a single material. The material is cloned, never mutated.
pub fn score(material: &Material, weights: &PriorityWeights) -> ScoredMaterial {
    let breakdown = ScoreBreakdown::from_material(material);

    let weighted_sum: f64 = breakdown
        .as_array()
        .iter()
        .zip(weights.as_array().iter())
        .map(|(n, w)| n * w)
        .sum();

    ScoredMaterial {
        material: material.clone(),
        priority_score: round2(weighted_sum),
        breakdown,
    }
}

/// Score every material and sort by descending priority score.
///
/// The sort is stable: materials with equal scores keep their input order.
pub fn rank(materials: &[Material], weights: &PriorityWeights) -> Vec<ScoredMaterial> {
    if !weights.is_balanced() {
        tracing::debug!(total = weights.total(), "Ranking with weights that do not sum to 1.0");
    }

    let mut scored: Vec<ScoredMaterial> = materials.iter().map(|m| score(m, weights)).collect();
    scored.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));

    tracing::debug!(
        count = scored.len(),
        top = scored.first().map(|s| s.material.id.as_str()),
        "Ranked materials"
    );
    scored
}

/// Rank the full pool, keep only `Queued` materials, and take the first `count`.
///
/// Filtering happens after ranking, so order reflects standing within the
/// whole pool.
pub fn top_candidates(
    materials: &[Material],
    count: usize,
    weights: &PriorityWeights,
) -> Vec<ScoredMaterial> {
    let candidates: Vec<ScoredMaterial> = rank(materials, weights)
        .into_iter()
        .filter(|s| s.material.is_queued())
        .take(count)
        .collect();

    tracing::debug!(requested = count, returned = candidates.len(), "Selected top candidates");
    candidates
}

/// Restrict a ranking to one status, preserving order. `None` keeps everything.
pub fn filter_by_status(
    ranked: Vec<ScoredMaterial>,
    status: Option<MaterialStatus>,
) -> Vec<ScoredMaterial> {
    match status {
        None => ranked,
        Some(status) => ranked
            .into_iter()
            .filter(|s| s.material.status == status)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thermorank_common::SynthesisComplexity;
    use thermorank_test_utils::MaterialBuilder;

    fn reference_material() -> Material {
        MaterialBuilder::new("mat-ref")
            .zt(2.1)
            .cost(1200.0)
            .complexity(SynthesisComplexity::Low)
            .toxicity(3.0)
            .availability(7.0)
            .novelty(8.0)
            .viability(6.0)
            .synthesis_days(10.0)
            .build()
    }

    #[test]
    fn test_reference_breakdown() {
        let s = score(&reference_material(), &PriorityWeights::default());
        let b = s.breakdown;
        assert!((b.efficiency - 7.0).abs() < 1e-9);
        assert!((b.cost - 7.6).abs() < 1e-9);
        assert_eq!(b.synthesis_complexity, 10.0);
        assert_eq!(b.toxicity, 7.0);
        assert_eq!(b.availability, 7.0);
        assert_eq!(b.novelty, 8.0);
        assert_eq!(b.commercial_viability, 6.0);
        assert!((b.synthesis_time - 6.6667).abs() < 1e-4);
    }

    #[test]
    fn test_breakdown_lookup_follows_criterion_order() {
        let b = score(&reference_material(), &PriorityWeights::default()).breakdown;
        for (criterion, value) in Criterion::ALL.iter().zip(b.as_array()) {
            assert_eq!(b.get(*criterion), value);
        }
        assert_eq!(b.get(Criterion::SynthesisComplexity), 10.0);
        assert_eq!(b.get(Criterion::Novelty), 8.0);
    }

    #[test]
    fn test_reference_score() {
        let s = score(&reference_material(), &PriorityWeights::default());
        assert_eq!(s.priority_score, 7.52);
    }

    #[test]
    fn test_score_does_not_touch_material() {
        let m = reference_material();
        let s = score(&m, &PriorityWeights::default());
        assert_eq!(s.material, m);
    }

    #[test]
    fn test_score_is_idempotent() {
        let m = reference_material();
        let w = PriorityWeights::default();
        let a = score(&m, &w);
        let b = score(&m, &w);
        assert_eq!(a.priority_score.to_bits(), b.priority_score.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn test_unbalanced_weights_scale_score() {
        let m = reference_material();
        let doubled = PriorityWeights::from_array(PriorityWeights::default().as_array().map(|w| w * 2.0));
        let s = score(&m, &doubled);
        assert!((s.priority_score - 15.05).abs() < 0.011);
    }

    #[test]
    fn test_contributions_sum_close_to_score() {
        let w = PriorityWeights::default();
        let s = score(&reference_material(), &w);
        let contributions = s.contributions(&w);
        assert_eq!(contributions.len(), 8);
        assert_eq!(contributions[0].0, Criterion::Efficiency);
        assert!((contributions[0].1 - 1.75).abs() < 1e-9);
        let total: f64 = contributions.iter().map(|(_, v)| v).sum();
        assert!((total - s.priority_score).abs() < 0.005);
    }

    #[test]
    fn test_rank_descending() {
        let materials = vec![
            MaterialBuilder::new("low").zt(0.5).build(),
            MaterialBuilder::new("high").zt(2.8).build(),
            MaterialBuilder::new("mid").zt(1.5).build(),
        ];
        let ranked = rank(&materials, &PriorityWeights::default());
        let ids: Vec<&str> = ranked.iter().map(|s| s.material.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(&[], &PriorityWeights::default()).is_empty());
    }

    #[test]
    fn test_top_candidates_skips_non_queued() {
        let materials = vec![
            MaterialBuilder::new("best-testing").zt(2.9).status(MaterialStatus::Testing).build(),
            MaterialBuilder::new("queued-a").zt(2.0).build(),
            MaterialBuilder::new("queued-b").zt(1.0).build(),
        ];
        let top = top_candidates(&materials, DEFAULT_TOP_CANDIDATES, &PriorityWeights::default());
        let ids: Vec<&str> = top.iter().map(|s| s.material.id.as_str()).collect();
        assert_eq!(ids, vec!["queued-a", "queued-b"]);
    }

    #[test]
    fn test_filter_by_status() {
        let materials = vec![
            MaterialBuilder::new("a").status(MaterialStatus::Validated).build(),
            MaterialBuilder::new("b").build(),
            MaterialBuilder::new("c").status(MaterialStatus::Validated).zt(2.5).build(),
        ];
        let ranked = rank(&materials, &PriorityWeights::default());
        let all = filter_by_status(ranked.clone(), None);
        assert_eq!(all.len(), 3);
        let validated = filter_by_status(ranked, Some(MaterialStatus::Validated));
        let ids: Vec<&str> = validated.iter().map(|s| s.material.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    #[test]
    fn test_scored_material_serialises_flat() {
        let s = score(&reference_material(), &PriorityWeights::default());
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["id"], "mat-ref");
        assert_eq!(v["predictedZT"], 2.1);
        assert_eq!(v["priorityScore"], 7.52);
        assert_eq!(v["breakdown"]["synthesisComplexity"], 10.0);
    }
}
