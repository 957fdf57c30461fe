use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::{DealCsvError, Result};
use crate::listing::ListingRecord;
use crate::metrics::ConvertMetrics;

/// What to do with an input file that can't be read or isn't a JSON array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BadFilePolicy {
    /// Stop the run on the first bad file.
    #[default]
    Abort,
    /// Log it and continue with the remaining files.
    Skip,
}

/// Listings parsed from one input file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub listings: Vec<ListingRecord>,
}

/// A file left out under [`BadFilePolicy::Skip`].
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Files matching `pattern`, sorted by path so runs are reproducible.
pub fn discover(pattern: &str) -> Result<Vec<PathBuf>> {
    info!("Searching for files matching pattern: {}", pattern);
    let mut paths = Vec::new();
    for entry in glob::glob(pattern)? {
        match entry {
            Ok(path) if path.is_file() => paths.push(path),
            Ok(_) => {}
            Err(e) => warn!("Unreadable path while matching {}: {}", pattern, e),
        }
    }
    paths.sort();
    if paths.is_empty() {
        warn!("No files found matching the pattern: {}", pattern);
    }
    Ok(paths)
}

/// Parse a JSON document whose top level must be an array of listings.
pub fn parse_listings(path: &Path, bytes: &[u8]) -> Result<Vec<ListingRecord>> {
    let doc: Value = serde_json::from_slice(bytes).map_err(|e| DealCsvError::MalformedInput {
        path: path.to_path_buf(),
        reason: format!("invalid JSON: {}", e),
    })?;
    match doc {
        Value::Array(items) => Ok(items.into_iter().map(ListingRecord::new).collect()),
        other => Err(DealCsvError::MalformedInput {
            path: path.to_path_buf(),
            reason: format!("expected a JSON array of listings, found {}", json_kind(&other)),
        }),
    }
}

pub fn load_file(path: &Path) -> Result<SourceFile> {
    let bytes = fs::read(path)?;
    let listings = parse_listings(path, &bytes)?;
    info!("Loaded {} listings from {}", listings.len(), path.display());
    Ok(SourceFile {
        path: path.to_path_buf(),
        listings,
    })
}

/// Load every path in order, applying `policy` to failures.
pub fn load_all(
    paths: &[PathBuf],
    policy: BadFilePolicy,
) -> Result<(Vec<SourceFile>, Vec<SkippedFile>)> {
    let mut loaded = Vec::with_capacity(paths.len());
    let mut skipped = Vec::new();
    for path in paths {
        match load_file(path) {
            Ok(file) => {
                ConvertMetrics::file_read();
                loaded.push(file);
            }
            Err(e) if policy == BadFilePolicy::Skip => {
                warn!("Skipping {}: {}", path.display(), e);
                ConvertMetrics::file_skipped();
                skipped.push(SkippedFile {
                    path: path.clone(),
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }
    Ok((loaded, skipped))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
