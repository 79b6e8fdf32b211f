/// Material candidate types as they arrive from the generation pipeline.
/// Field names serialise in the camelCase shape the dashboard data uses.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ThermorankError;

// ---------------------------------------------------------------------------
// Synthesis complexity
// ---------------------------------------------------------------------------

/// How hard a candidate is to make in the lab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SynthesisComplexity {
    Low,
    Medium,
    High,
}

impl SynthesisComplexity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for SynthesisComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SynthesisComplexity {
    type Err = ThermorankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            other => Err(ThermorankError::UnknownComplexity(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Lab pipeline status
// ---------------------------------------------------------------------------

/// Where a candidate sits in the synthesis pipeline.
/// Only `Queued` materials are eligible for top-candidate selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialStatus {
    Queued,
    #[serde(rename = "In Synthesis")]
    InSynthesis,
    Testing,
    Validated,
    Rejected,
}

impl MaterialStatus {
    pub const ALL: [MaterialStatus; 5] = [
        Self::Queued,
        Self::InSynthesis,
        Self::Testing,
        Self::Validated,
        Self::Rejected,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Queued => "Queued",
            Self::InSynthesis => "In Synthesis",
            Self::Testing => "Testing",
            Self::Validated => "Validated",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for MaterialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MaterialStatus {
    type Err = ThermorankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| ThermorankError::UnknownStatus(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Material
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub name: String,
    pub formula: String,
    /// Thermoelectric figure of merit; practical ceiling around 3.
    #[serde(rename = "predictedZT")]
    pub predicted_zt: f64,
    /// Synthesis cost in currency units.
    pub estimated_cost: f64,
    pub synthesis_complexity: SynthesisComplexity,
    /// 0–10, lower is safer.
    pub toxicity_score: f64,
    /// 0–10, higher means the precursors are easier to source.
    pub availability_score: f64,
    pub novelty_score: f64,
    pub commercial_viability: f64,
    /// Days.
    pub estimated_synthesis_time: f64,
    pub thermal_conductivity: f64,
    pub electrical_conductivity: f64,
    pub status: MaterialStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lab_partner: Option<String>,
    pub generated_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Material {
    pub fn is_queued(&self) -> bool {
        self.status == MaterialStatus::Queued
    }
}
