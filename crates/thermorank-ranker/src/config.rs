//! Dashboard configuration.
//!
//! Reads thermorank.toml from the current directory or the path in the
//! THERMORANK_CONFIG env var. YAML and JSON files are accepted too.
//! Every section is optional and falls back to its defaults.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use thermorank_common::dataset::load_materials;
use thermorank_common::{Material, MaterialStatus};

use crate::scorer::DEFAULT_TOP_CANDIDATES;
use crate::weights::PriorityWeights;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Initial slider positions
    #[serde(default)]
    pub scoring: PriorityWeights,

    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub dataset: DatasetConfig,
}

// ── Selection ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Number of synthesis recommendations to surface
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Initial table filter; absent means all statuses
    #[serde(default)]
    pub status_filter: Option<MaterialStatus>,
}

fn default_top_n() -> usize { DEFAULT_TOP_CANDIDATES }

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            status_filter: None,
        }
    }
}

// ── Dataset ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// JSON or YAML material file
    #[serde(default)]
    pub path: Option<String>,
}

// ── Loading ──────────────────────────────────────────────────────────────────

impl DashboardConfig {
    /// Load from THERMORANK_CONFIG, or thermorank.toml in the current directory.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("THERMORANK_CONFIG")
            .unwrap_or_else(|_| "thermorank.toml".to_string());

        if !Path::new(&path).exists() {
            anyhow::bail!("Config file not found: {}", path);
        }

        Self::from_path(&path)
    }

    /// Load from a file, choosing the parser by extension.
    pub fn from_path(path: &str) -> anyhow::Result<Self> {
        let config = match Path::new(path).extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(path)?,
            Some("yaml") | Some("yml") => Self::from_yaml(path)?,
            Some("json") => Self::from_json(path)?,
            _ => anyhow::bail!("Unsupported config format: {}", path),
        };

        tracing::info!(
            path,
            weight_total = config.scoring.total(),
            balanced = config.scoring.is_balanced(),
            top_n = config.selection.top_n,
            "Loaded dashboard config"
        );
        Ok(config)
    }

    /// Load the material dataset named by `dataset.path`.
    pub fn load_dataset(&self) -> anyhow::Result<Vec<Material>> {
        let path = self
            .dataset
            .path
            .as_deref()
            .context("No dataset path configured")?;
        load_materials(path).with_context(|| format!("Failed to load dataset {path}"))
    }

    pub fn from_toml(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn from_yaml(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn from_json(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
