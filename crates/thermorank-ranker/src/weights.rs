//! Weight vector for material prioritization scoring.

use serde::{Deserialize, Serialize};

/// The eight scoring criteria, in the fixed order used by
/// [`PriorityWeights::as_array`] and `ScoreBreakdown::as_array`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Efficiency,
    Cost,
    SynthesisComplexity,
    Toxicity,
    Availability,
    Novelty,
    CommercialViability,
    SynthesisTime,
}

impl Criterion {
    pub const ALL: [Criterion; 8] = [
        Self::Efficiency,
        Self::Cost,
        Self::SynthesisComplexity,
        Self::Toxicity,
        Self::Availability,
        Self::Novelty,
        Self::CommercialViability,
        Self::SynthesisTime,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Efficiency => "Efficiency (ZT)",
            Self::Cost => "Cost",
            Self::SynthesisComplexity => "Synthesis Complexity",
            Self::Toxicity => "Toxicity",
            Self::Availability => "Availability",
            Self::Novelty => "Novelty",
            Self::CommercialViability => "Commercial Viability",
            Self::SynthesisTime => "Synthesis Time",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

/// User-adjustable weights, one per criterion.
///
/// Weights are not required to sum to 1.0. The score scales with the sum,
/// which the dashboard surfaces through [`PriorityWeights::is_balanced`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PriorityWeights {
    /// Predicted ZT
    pub efficiency: f64,
    /// Lower cost scores higher
    pub cost: f64,
    /// Lower complexity scores higher
    pub synthesis_complexity: f64,
    /// Lower toxicity scores higher
    pub toxicity: f64,
    pub availability: f64,
    pub novelty: f64,
    pub commercial_viability: f64,
    /// Shorter synthesis scores higher
    pub synthesis_time: f64,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            efficiency:           0.25,
            cost:                 0.15,
            synthesis_complexity: 0.15,
            toxicity:             0.10,
            availability:         0.10,
            novelty:              0.10,
            commercial_viability: 0.10,
            synthesis_time:       0.05,
        }
    }
}

impl PriorityWeights {
    /// Tolerance for the "balanced" display hint.
    pub const BALANCE_TOLERANCE: f64 = 0.01;

    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }

    /// Whether the weights sum to ~1.0. Display hint only; scoring never
    /// rescales the weights.
    pub fn is_balanced(&self) -> bool {
        (self.total() - 1.0).abs() < Self::BALANCE_TOLERANCE
    }

    pub fn get(&self, criterion: Criterion) -> f64 {
        self.as_array()[criterion.index()]
    }

    /// Copy with one weight replaced.
    pub fn with(self, criterion: Criterion, weight: f64) -> Self {
        let mut arr = self.as_array();
        arr[criterion.index()] = weight;
        Self::from_array(arr)
    }

    /// Convert to array for iteration.
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

    pub fn from_array(arr: [f64; 8]) -> Self {
        Self {
            efficiency: arr[0],
            cost: arr[1],
            synthesis_complexity: arr[2],
            toxicity: arr[3],
            availability: arr[4],
            novelty: arr[5],
            commercial_viability: arr[6],
            synthesis_time: arr[7],
        }
    }
}
