use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, DEFAULT_BIND, DEFAULT_OUTPUT, DEFAULT_TIMEOUT};

/// Configuration file structure that mirrors CLI arguments
/// All fields are optional to allow partial configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// The URL of the page to audit
    pub url: Option<String>,

    /// Output format: text or json
    pub output: Option<String>,

    /// Save the JSON report to a file
    pub save: Option<String>,

    /// Verbose output
    pub verbose: Option<bool>,

    /// Fetch timeout in seconds
    pub timeout: Option<u64>,

    /// Address the HTTP API binds to
    pub bind: Option<String>,
}

/// Configuration file format based on file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                "toml" => Some(ConfigFormat::Toml),
                "yaml" | "yml" => Some(ConfigFormat::Yaml),
                _ => None,
            })
    }

    /// Get file extensions for this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            ConfigFormat::Json => &["json"],
            ConfigFormat::Toml => &["toml"],
            ConfigFormat::Yaml => &["yaml", "yml"],
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let format = ConfigFormat::from_path(path)
            .with_context(|| format!("Unsupported config file format: {}", path.display()))?;

        let config = match format {
            ConfigFormat::Json => serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?,
            ConfigFormat::Toml => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?,
            ConfigFormat::Yaml => serde_yaml::from_str(&contents)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?,
        };

        Ok(config)
    }

    /// Get the default configuration file paths to check (in order of priority)
    /// Returns paths in order: current directory, user config directory
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        for format in &[ConfigFormat::Json, ConfigFormat::Toml, ConfigFormat::Yaml] {
            for ext in format.extensions() {
                paths.push(PathBuf::from(format!("pagescout.{}", ext)));
            }
        }

        // Use XDG_CONFIG_HOME if set, otherwise fall back to ~/.config
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")));

        if let Some(config_home) = config_home {
            let pagescout_config_dir = config_home.join("pagescout");
            for format in &[ConfigFormat::Json, ConfigFormat::Toml, ConfigFormat::Yaml] {
                for ext in format.extensions() {
                    paths.push(pagescout_config_dir.join(format!("config.{}", ext)));
                }
            }
        }

        paths
    }

    /// Try to load configuration from default paths
    /// Returns the first configuration file found, or None if no config exists
    pub fn from_default_paths() -> Result<Option<Self>> {
        for path in Self::default_paths() {
            if path.exists() {
                return Ok(Some(Self::from_file(&path)?));
            }
        }
        Ok(None)
    }

    /// Loads the explicit `--config` file if given, otherwise the first default path found
    pub fn load(explicit: Option<&str>) -> Result<Option<Self>> {
        match explicit {
            Some(path) => Ok(Some(Self::from_file(Path::new(path))?)),
            None => Self::from_default_paths(),
        }
    }

    /// Merge this configuration with CLI arguments
    /// CLI arguments take precedence over config file values
    pub fn merge_with_cli(&self, cli: &Cli) -> Cli {
        Cli {
            url: cli.url.clone().or_else(|| self.url.clone()),
            output: if cli.output != DEFAULT_OUTPUT {
                cli.output.clone()
            } else {
                self.output.clone().unwrap_or_else(|| cli.output.clone())
            },
            save: cli.save.clone().or_else(|| self.save.clone()),
            verbose: if cli.verbose {
                cli.verbose
            } else {
                self.verbose.unwrap_or(cli.verbose)
            },
            timeout: if cli.timeout != DEFAULT_TIMEOUT {
                cli.timeout
            } else {
                self.timeout.unwrap_or(cli.timeout)
            },
            serve: cli.serve,
            bind: if cli.bind != DEFAULT_BIND {
                cli.bind.clone()
            } else {
                self.bind.clone().unwrap_or_else(|| cli.bind.clone())
            },
            config: cli.config.clone(),
        }
    }
}
