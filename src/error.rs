use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DealCsvError {
    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Malformed input file {path}: {reason}")]
    MalformedInput { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, DealCsvError>;
