//! Summary figures for the dashboard header and priority chart.

use serde::{Deserialize, Serialize};
use thermorank_common::{Material, MaterialStatus};

use crate::round2;
use crate::scorer::ScoredMaterial;

/// How many queued materials the priority chart summarises by default.
pub const DEFAULT_QUEUE_SUMMARY_LIMIT: usize = 10;

/// Pipeline counts and averages over the whole material set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStats {
    pub queued: usize,
    pub in_synthesis: usize,
    pub testing: usize,
    pub validated: usize,
    pub total: usize,
    /// Mean predicted ZT, 2 dp. 0 for an empty set.
    #[serde(rename = "avgZT")]
    pub avg_zt: f64,
    /// Mean estimated cost, whole units. 0 for an empty set.
    pub avg_cost: f64,
}

impl PipelineStats {
    pub fn from_materials(materials: &[Material]) -> Self {
        let count = |status: MaterialStatus| materials.iter().filter(|m| m.status == status).count();
        let total = materials.len();

        let (avg_zt, avg_cost) = if total == 0 {
            (0.0, 0.0)
        } else {
            let n = total as f64;
            let zt: f64 = materials.iter().map(|m| m.predicted_zt).sum();
            let cost: f64 = materials.iter().map(|m| m.estimated_cost).sum();
            (round2(zt / n), (cost / n).round())
        };

        Self {
            queued: count(MaterialStatus::Queued),
            in_synthesis: count(MaterialStatus::InSynthesis),
            testing: count(MaterialStatus::Testing),
            validated: count(MaterialStatus::Validated),
            total,
            avg_zt,
            avg_cost,
        }
    }
}

/// Coarse priority band used to colour scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityTier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl PriorityTier {
    pub fn for_score(score: f64) -> Self {
        if score >= 8.0 {
            Self::Excellent
        } else if score >= 6.0 {
            Self::Good
        } else if score >= 4.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }
}

/// Synthesis recommendation shown alongside a candidate's score.
/// Banded independently of [`PriorityTier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    /// Recommended for synthesis
    High,
    /// Consider for the next round
    Medium,
    /// Review the scoring criteria
    Low,
}

impl Recommendation {
    pub fn for_score(score: f64) -> Self {
        if score >= 7.0 {
            Self::High
        } else if score >= 5.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High Priority - Recommended for Synthesis",
            Self::Medium => "Medium Priority - Consider for Next Round",
            Self::Low => "Low Priority - Review Criteria",
        }
    }
}

/// Headline numbers for the leading queued candidates of a ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueSummary {
    pub count: usize,
    pub top_score: Option<f64>,
    pub mean_score: Option<f64>,
}

impl QueueSummary {
    /// Summarise the first `limit` queued entries of an already ranked list.
    pub fn from_ranked(ranked: &[ScoredMaterial], limit: usize) -> Self {
        let scores: Vec<f64> = ranked
            .iter()
            .filter(|s| s.material.is_queued())
            .take(limit)
            .map(|s| s.priority_score)
            .collect();

        let mean_score = if scores.is_empty() {
            None
        } else {
            Some(round2(scores.iter().sum::<f64>() / scores.len() as f64))
        };

        Self {
            count: scores.len(),
            top_score: scores.first().copied(),
            mean_score,
        }
    }
}
