//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.deployscan.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".deployscan.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Input and output locations.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Input and output file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Captured listing to parse.
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Pipe-delimited function list.
    #[serde(default = "default_function_list")]
    pub function_list: PathBuf,

    /// One function name per line.
    #[serde(default = "default_name_list")]
    pub name_list: PathBuf,

    /// Optional JSON summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_json: Option<PathBuf>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            function_list: default_function_list(),
            name_list: default_name_list(),
            summary_json: None,
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("functions_raw.txt")
}

fn default_function_list() -> PathBuf {
    PathBuf::from("functions_list.txt")
}

fn default_name_list() -> PathBuf {
    PathBuf::from("function_names.txt")
}

/// Report settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Print the skipped-line tally after the summary.
    #[serde(default)]
    pub show_skipped: bool,
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load `.deployscan.toml` from a directory.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings, but only
    /// when they were actually given.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref input) = args.input {
            self.paths.input = input.clone();
        }
        if let Some(ref list) = args.list_output {
            self.paths.function_list = list.clone();
        }
        if let Some(ref names) = args.names_output {
            self.paths.name_list = names.clone();
        }
        if let Some(ref json) = args.summary_json {
            self.paths.summary_json = Some(json.clone());
        }

        // Flags always override
        if args.show_skipped {
            self.report.show_skipped = true;
        }
    }

    /// Check the effective paths after merging.
    ///
    /// No output may share a path with the input or with another output.
    pub fn validate(&self) -> Result<()> {
        let mut paths = vec![
            ("input", &self.paths.input),
            ("function list", &self.paths.function_list),
            ("name list", &self.paths.name_list),
        ];
        if let Some(ref json) = self.paths.summary_json {
            paths.push(("JSON summary", json));
        }

        for (i, (label, path)) in paths.iter().enumerate() {
            for (other_label, other) in &paths[i + 1..] {
                if path == other {
                    anyhow::bail!(
                        "The {} and {} paths are the same: {}",
                        label,
                        other_label,
                        path.display()
                    );
                }
            }
        }

        Ok(())
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.paths.input, PathBuf::from("functions_raw.txt"));
        assert_eq!(config.paths.function_list, PathBuf::from("functions_list.txt"));
        assert_eq!(config.paths.name_list, PathBuf::from("function_names.txt"));
        assert!(config.paths.summary_json.is_none());
        assert!(!config.report.show_skipped);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[paths]
input = "captured/listing.txt"
summary_json = "out/summary.json"

[report]
show_skipped = true
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.paths.input, PathBuf::from("captured/listing.txt"));
        assert_eq!(config.paths.function_list, PathBuf::from("functions_list.txt"));
        assert_eq!(
            config.paths.summary_json,
            Some(PathBuf::from("out/summary.json"))
        );
        assert!(config.report.show_skipped);
    }

    #[test]
    fn test_merge_with_args() {
        let mut config: Config = toml::from_str(
            r#"
[paths]
input = "from_config.txt"
name_list = "config_names.txt"
"#,
        )
        .unwrap();

        let args = Args {
            input: Some(PathBuf::from("from_cli.txt")),
            show_skipped: true,
            ..Args::default()
        };
        config.merge_with_args(&args);

        assert_eq!(config.paths.input, PathBuf::from("from_cli.txt"));
        assert_eq!(config.paths.name_list, PathBuf::from("config_names.txt"));
        assert!(config.report.show_skipped);
    }

    #[test]
    fn test_validate_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_list_output_over_default_input() {
        let mut config = Config::default();
        let args = Args {
            list_output: Some(PathBuf::from("functions_raw.txt")),
            ..Args::default()
        };
        config.merge_with_args(&args);

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("input and function list"));
    }

    #[test]
    fn test_validate_collision_from_config_file() {
        let config: Config = toml::from_str(
            r#"
[paths]
function_list = "out.txt"
name_list = "out.txt"
"#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_json_over_input() {
        let mut config = Config::default();
        config.paths.summary_json = Some(PathBuf::from("functions_raw.txt"));

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_dir() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load_from_dir(dir.path()).unwrap().is_none());

        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[paths]\nfunction_list = \"list.txt\"\n",
        )
        .unwrap();
        let config = Config::load_from_dir(dir.path()).unwrap().unwrap();
        assert_eq!(config.paths.function_list, PathBuf::from("list.txt"));
    }

    #[test]
    fn test_load_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[paths\ninput = ").unwrap();

        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(toml_str.contains("[paths]"));
        assert!(toml_str.contains("[report]"));
        assert!(toml_str.contains("functions_raw.txt"));

        let round: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(round.paths.name_list, PathBuf::from("function_names.txt"));
    }
}
