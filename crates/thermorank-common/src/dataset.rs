//! Read-only loading of material datasets.
//!
//! Datasets are a JSON or YAML array of [`Material`] records. The format is
//! picked from the file extension. Nothing is ever written back.

use std::collections::HashSet;
use std::path::Path;

use crate::entities::Material;
use crate::error::{Result, ThermorankError};

/// Load a dataset file, dispatching on `.json`, `.yaml` or `.yml`.
pub fn load_materials(path: impl AsRef<Path>) -> Result<Vec<Material>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let content = std::fs::read_to_string(path)?;
    let materials = match ext.as_str() {
        "json" => parse_materials_json(&content)?,
        "yaml" | "yml" => parse_materials_yaml(&content)?,
        _ => return Err(ThermorankError::UnsupportedFormat(path.display().to_string())),
    };

    tracing::info!(path = %path.display(), count = materials.len(), "Loaded material dataset");
    Ok(materials)
}

pub fn parse_materials_json(content: &str) -> Result<Vec<Material>> {
    let materials: Vec<Material> = serde_json::from_str(content)?;
    ensure_unique_ids(&materials)?;
    Ok(materials)
}

pub fn parse_materials_yaml(content: &str) -> Result<Vec<Material>> {
    let materials: Vec<Material> = serde_yaml::from_str(content)?;
    ensure_unique_ids(&materials)?;
    Ok(materials)
}

fn ensure_unique_ids(materials: &[Material]) -> Result<()> {
    let mut seen = HashSet::with_capacity(materials.len());
    for m in materials {
        if !seen.insert(m.id.as_str()) {
            return Err(ThermorankError::DuplicateMaterialId(m.id.clone()));
        }
    }
    Ok(())
}
