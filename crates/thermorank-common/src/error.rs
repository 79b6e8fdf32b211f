use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThermorankError {
    #[error("Unknown synthesis complexity: {0}")]
    UnknownComplexity(String),

    #[error("Unknown material status: {0}")]
    UnknownStatus(String),

    #[error("Duplicate material id: {0}")]
    DuplicateMaterialId(String),

    #[error("Unsupported dataset format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ThermorankError>;
