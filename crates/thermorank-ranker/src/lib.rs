//! thermorank-ranker — Priority scoring engine for thermoelectric candidates.
//!
//! Every raw property is normalised onto a 0–10 "higher is better" scale,
//! combined with user-tunable [`PriorityWeights`], and ranked.

pub mod normalise;
pub mod weights;
pub mod scorer;
pub mod roi;
pub mod stats;
pub mod config;

pub use config::DashboardConfig;
pub use scorer::{filter_by_status, rank, score, top_candidates, ScoreBreakdown, ScoredMaterial};
pub use roi::roi;
pub use stats::{PriorityTier, Recommendation};
pub use weights::{Criterion, PriorityWeights};

/// Round to two decimal places, the precision scores and ROI are reported at.
///
/// Rounds the exact binary value, so 10.235 (stored as 10.23499…) gives
/// 10.23. Exact midpoints, which are the multiples of 1/8, round away from
/// zero.
pub(crate) fn round2(value: f64) -> f64 {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        return (value * 100.0).round() / 100.0;
    }
    format!("{value:.2}").parse().unwrap_or(value)
}
