//! thermorank-common — Shared material types, errors, and dataset loading.

pub mod error;
pub mod entities;
pub mod dataset;

// Re-export commonly used types
pub use entities::{Material, MaterialStatus, SynthesisComplexity};
pub use error::{Result, ThermorankError};
