//! Preflight settings (`preflight.toml`): search order, loading and validation

use crate::checks::ExclusionScope;
use crate::core::error::{BootError, BootResult, ConfigError, ResultExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for boot-preflight
/// Searched in order: preflight.toml, .preflight.toml, .config/preflight.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreflightConfig {
  #[serde(default)]
  pub layout: LayoutConfig,
  #[serde(default)]
  pub pipeline: PipelineConfig,
}

/// Filesystem layout of the application being validated.
/// Relative paths are resolved against `root`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
  #[serde(default = "default_root")]
  pub root: PathBuf,
  #[serde(default = "default_config_dir")]
  pub config_dir: PathBuf,
  #[serde(default = "default_cache_dir")]
  pub cache_dir: PathBuf,
  #[serde(default = "default_web_root")]
  pub web_root: PathBuf,
}

fn default_root() -> PathBuf {
  PathBuf::from(".")
}

fn default_config_dir() -> PathBuf {
  PathBuf::from("app/config")
}

fn default_cache_dir() -> PathBuf {
  PathBuf::from("var/cache")
}

fn default_web_root() -> PathBuf {
  PathBuf::from("public")
}

impl Default for LayoutConfig {
  fn default() -> Self {
    Self {
      root: default_root(),
      config_dir: default_config_dir(),
      cache_dir: default_cache_dir(),
      web_root: default_web_root(),
    }
  }
}

/// Pipeline behaviour: which checks run and how exclusions apply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
  /// Skip the `apache` check (e.g. when served by another web server)
  #[serde(default)]
  pub disable_apache_checks: bool,

  /// Whether exclusions only affect a run or remove checks from the registry
  #[serde(default)]
  pub exclusion_scope: ExclusionScope,

  /// Additional check names to exclude
  #[serde(default)]
  pub skip: Vec<String>,

  /// One config-file check is registered per entry, validating `<config_dir>/<name>.toml`
  #[serde(default = "default_config_files")]
  pub config_files: Vec<String>,
}

fn default_config_files() -> Vec<String> {
  ["config", "contenttypes", "menu", "permissions", "routing", "taxonomy"]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for PipelineConfig {
  fn default() -> Self {
    Self {
      disable_apache_checks: false,
      exclusion_scope: ExclusionScope::default(),
      skip: Vec::new(),
      config_files: default_config_files(),
    }
  }
}

impl PipelineConfig {
  /// Validate pipeline configuration
  pub fn validate(&self) -> BootResult<()> {
    for name in &self.config_files {
      if name.trim().is_empty() {
        return Err(BootError::Config(ConfigError::InvalidValue {
          field: "pipeline.config_files".to_string(),
          value: name.clone(),
          reason: "config file names must not be empty".to_string(),
        }));
      }
      if name.contains('/') || name.contains('\\') || name == ".." {
        return Err(BootError::Config(ConfigError::InvalidValue {
          field: "pipeline.config_files".to_string(),
          value: name.clone(),
          reason: "config file names are stems inside config_dir, not paths".to_string(),
        }));
      }
    }
    Ok(())
  }
}

impl PreflightConfig {
  /// Find config file in search order: preflight.toml, .preflight.toml, .config/preflight.toml
  pub fn find_config_path(path: &Path) -> Option<PathBuf> {
    let candidates = [
      path.join("preflight.toml"),
      path.join(".preflight.toml"),
      path.join(".config").join("preflight.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load config from the search locations under `path`, falling back to defaults
  /// when no file exists. A relative `layout.root` is resolved against `path`.
  pub fn discover(path: &Path) -> BootResult<Self> {
    match Self::find_config_path(path) {
      Some(config_path) => Self::load_file(&config_path),
      None => {
        let mut config = Self::default();
        config.layout.root = path.join(&config.layout.root);
        Ok(config)
      }
    }
  }

  /// Load config from an explicit file. A relative `layout.root` is resolved
  /// against the directory holding the file.
  pub fn load_file(config_path: &Path) -> BootResult<Self> {
    if !config_path.exists() {
      return Err(BootError::Config(ConfigError::NotFound {
        path: config_path.to_path_buf(),
      }));
    }

    let content = fs::read_to_string(config_path)
      .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
    let mut config: PreflightConfig = toml_edit::de::from_str(&content)
      .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

    config
      .pipeline
      .validate()
      .with_context(|| format!("Invalid pipeline configuration in {}", config_path.display()))?;

    if config.layout.root.is_relative() {
      let base = config_path.parent().unwrap_or_else(|| Path::new("."));
      config.layout.root = base.join(&config.layout.root);
    }

    Ok(config)
  }
}
