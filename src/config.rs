use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;

use crate::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_INPUT_GLOB, DEFAULT_OUTPUT_PATH, ENV_INPUT, ENV_LAYOUT,
    ENV_OUTPUT,
};
use crate::error::{DealCsvError, Result};
use crate::extract::{BedroomFallback, ExtractOptions};
use crate::loader::BadFilePolicy;
use crate::table::Layout;

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input_glob: String,
    pub output_path: PathBuf,
    pub layout: Layout,
    pub on_bad_file: BadFilePolicy,
    pub extract: ExtractOptions,
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_glob: DEFAULT_INPUT_GLOB.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            layout: Layout::default(),
            on_bad_file: BadFilePolicy::default(),
            extract: ExtractOptions::default(),
            log_dir: None,
        }
    }
}

/// Shape of `deal_csv.toml`; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub input: Option<String>,
    pub output: Option<PathBuf>,
    pub layout: Option<Layout>,
    pub bedroom_fallback: Option<BedroomFallback>,
    pub on_bad_file: Option<BadFilePolicy>,
    pub multi_family_codes: Option<Vec<i64>>,
    pub log_dir: Option<PathBuf>,
}

/// Command-line values, applied last.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub input: Option<String>,
    pub output: Option<PathBuf>,
    pub layout: Option<Layout>,
    pub bedroom_fallback: Option<BedroomFallback>,
    pub on_bad_file: Option<BadFilePolicy>,
}

impl Config {
    /// Defaults, then the TOML file, then the environment.
    ///
    /// An explicit `path` must exist; the default `deal_csv.toml` is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let file = match path {
            Some(p) => Some(read_file_config(p)?),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Some(read_file_config(default_path)?)
                } else {
                    None
                }
            }
        };
        if let Some(file) = file {
            config.apply_file(file)?;
        }

        config.apply_env()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config = Self::default();
        config.apply_file(toml::from_str(content)?)?;
        Ok(config)
    }

    pub fn apply_file(&mut self, file: FileConfig) -> Result<()> {
        if let Some(input) = file.input {
            self.input_glob = input;
        }
        if let Some(output) = file.output {
            self.output_path = output;
        }
        if let Some(layout) = file.layout {
            self.layout = layout;
        }
        if let Some(fallback) = file.bedroom_fallback {
            self.extract.bedroom_fallback = fallback;
        }
        if let Some(policy) = file.on_bad_file {
            self.on_bad_file = policy;
        }
        if let Some(codes) = file.multi_family_codes {
            if codes.is_empty() {
                return Err(DealCsvError::Config(
                    "multi_family_codes must list at least one code".to_string(),
                ));
            }
            self.extract.multi_family_codes = codes;
        }
        if file.log_dir.is_some() {
            self.log_dir = file.log_dir;
        }
        Ok(())
    }

    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(input) = env::var(ENV_INPUT) {
            self.input_glob = input;
        }
        if let Ok(output) = env::var(ENV_OUTPUT) {
            self.output_path = PathBuf::from(output);
        }
        if let Ok(layout) = env::var(ENV_LAYOUT) {
            self.layout = Layout::from_str(&layout, true).map_err(|e| {
                DealCsvError::Config(format!("{}={}: {}", ENV_LAYOUT, layout, e))
            })?;
        }
        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if let Some(input) = overrides.input {
            self.input_glob = input;
        }
        if let Some(output) = overrides.output {
            self.output_path = output;
        }
        if let Some(layout) = overrides.layout {
            self.layout = layout;
        }
        if let Some(fallback) = overrides.bedroom_fallback {
            self.extract.bedroom_fallback = fallback;
        }
        if let Some(policy) = overrides.on_bad_file {
            self.on_bad_file = policy;
        }
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        DealCsvError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
    })?;
    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.input_glob, "./dataset_redfin-search_*.json");
        assert_eq!(config.output_path, PathBuf::from("./quick_deal_import.csv"));
        assert_eq!(config.layout, Layout::Extended);
        assert_eq!(config.on_bad_file, BadFilePolicy::Abort);
        assert_eq!(config.extract.multi_family_codes, vec![4, 13]);
        assert_eq!(config.extract.bedroom_fallback, BedroomFallback::Unit1);
    }

    #[test]
    fn test_toml_values() {
        let config = Config::from_toml_str(
            r#"
            input = "data/*.json"
            output = "out/deals.csv"
            layout = "minimal"
            bedroom_fallback = "none"
            on_bad_file = "skip"
            multi_family_codes = [4]
            "#,
        )
        .unwrap();
        assert_eq!(config.input_glob, "data/*.json");
        assert_eq!(config.output_path, PathBuf::from("out/deals.csv"));
        assert_eq!(config.layout, Layout::Minimal);
        assert_eq!(config.extract.bedroom_fallback, BedroomFallback::Blank);
        assert_eq!(config.on_bad_file, BadFilePolicy::Skip);
        assert_eq!(config.extract.multi_family_codes, vec![4]);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(
            Config::from_toml_str("colour = \"red\""),
            Err(DealCsvError::Toml(_))
        ));
    }

    #[test]
    fn test_empty_multi_family_codes_rejected() {
        assert!(matches!(
            Config::from_toml_str("multi_family_codes = []"),
            Err(DealCsvError::Config(_))
        ));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, DealCsvError::Config(_)));
    }

    #[test]
    fn test_overrides_win() {
        let mut config = Config::from_toml_str("layout = \"minimal\"").unwrap();
        config.apply_overrides(Overrides {
            layout: Some(Layout::Extended),
            output: Some(PathBuf::from("x.csv")),
            ..Overrides::default()
        });
        assert_eq!(config.layout, Layout::Extended);
        assert_eq!(config.output_path, PathBuf::from("x.csv"));
    }
}
