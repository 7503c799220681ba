//! Shared, read-only context handed to checks that ask for it
//!
//! # Design
//!
//! Both context objects are built once by the composition root and shared
//! with every check build through `Arc`. Checks never mutate them.
//!
//! ```text
//! main.rs:
//!   ResourceLayout::from_config() -> Arc<ResourceLayout>
//!   ConfigSnapshot::load()        -> Arc<ConfigSnapshot>
//!   |
//!   v
//! CheckRunner::build():
//!   check.resource_aware()?.set_resources(layout.clone())
//!   check.config_aware()?.set_config(snapshot.clone())
//! ```

use crate::core::config::LayoutConfig;
use std::fs;
use std::path::{Path, PathBuf};
use toml_edit::{DocumentMut, Item};

/// Name of the application settings file inside `config_dir`
pub const APP_CONFIG_FILE: &str = "config.toml";

/// Absolute filesystem layout of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLayout {
  pub root: PathBuf,
  pub config_dir: PathBuf,
  pub cache_dir: PathBuf,
  pub web_root: PathBuf,
}

impl ResourceLayout {
  /// Resolve every configured directory against the layout root
  pub fn from_config(layout: &LayoutConfig) -> Self {
    let root = layout.root.clone();
    Self {
      config_dir: root.join(&layout.config_dir),
      cache_dir: root.join(&layout.cache_dir),
      web_root: root.join(&layout.web_root),
      root,
    }
  }

  /// Resolve a path relative to the layout root (absolute paths pass through)
  pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
    self.root.join(path)
  }

  /// Path of a named config file, e.g. `menu` -> `<config_dir>/menu.toml`
  pub fn config_file(&self, name: &str) -> PathBuf {
    self.config_dir.join(format!("{}.toml", name))
  }
}

/// Live application configuration as loaded at startup.
///
/// Loading never fails: read and parse problems are recorded so the
/// `configuration` check can report them as a validation failure.
#[derive(Debug, Clone, Default)]
pub struct ConfigSnapshot {
  source: Option<PathBuf>,
  document: DocumentMut,
  problems: Vec<String>,
}

impl ConfigSnapshot {
  /// Load `<config_dir>/config.toml`
  pub fn load(config_dir: &Path) -> Self {
    let path = config_dir.join(APP_CONFIG_FILE);
    let content = match fs::read_to_string(&path) {
      Ok(content) => content,
      Err(e) => {
        return Self {
          source: Some(path.clone()),
          document: DocumentMut::new(),
          problems: vec![format!("Unable to read {}: {}", path.display(), e)],
        };
      }
    };

    let mut snapshot = Self::parse(&content);
    snapshot.source = Some(path);
    snapshot
  }

  /// Build a snapshot from TOML text (no source file)
  pub fn parse(content: &str) -> Self {
    match content.parse::<DocumentMut>() {
      Ok(document) => Self {
        source: None,
        document,
        problems: Vec::new(),
      },
      Err(e) => Self {
        source: None,
        document: DocumentMut::new(),
        problems: vec![format!("Invalid TOML: {}", e)],
      },
    }
  }

  /// File the snapshot was loaded from, if any
  pub fn source(&self) -> Option<&Path> {
    self.source.as_deref()
  }

  /// Problems recorded while loading
  pub fn problems(&self) -> &[String] {
    &self.problems
  }

  /// Look up a dotted key such as `database.driver`
  pub fn get(&self, dotted: &str) -> Option<&Item> {
    let mut parts = dotted.split('.');
    let mut item = self.document.as_table().get(parts.next()?)?;
    for part in parts {
      item = item.get(part)?;
    }
    Some(item)
  }

  /// Look up a dotted key and return it as a string
  pub fn get_str(&self, dotted: &str) -> Option<&str> {
    self.get(dotted).and_then(|item| item.as_str())
  }
}
