//! Built-in checks and the default registry
//!
//! # Built-in Checks
//!
//! - **configuration**: the application config snapshot loaded cleanly
//! - **database**: `[database]` settings are complete for the chosen driver
//! - **cache**: the cache directory exists (or can be created) and is writable
//! - **apache**: the web root carries an `.htaccess` file
//! - **config files**: one check per configured name, each parsing `<config_dir>/<name>.toml`
//!
//! These are wired here, in the composition root, not inside the runner.

mod apache;
mod cache;
mod config_file;
mod configuration;
mod database;

pub use apache::ApacheCheck;
pub use cache::CacheCheck;
pub use config_file::ConfigFileCheck;
pub use configuration::ConfigurationCheck;
pub use database::DatabaseCheck;

use crate::checks::{CheckRegistry, factory};
use crate::core::config::PipelineConfig;
use std::sync::Arc;

/// Create a registry with all built-in checks in their default order
pub fn default_registry(pipeline: &PipelineConfig) -> CheckRegistry {
  let mut registry = CheckRegistry::new();

  registry.add("configuration", factory(|name| Ok(Box::new(ConfigurationCheck::new(name)))), false);
  registry.add("database", factory(|name| Ok(Box::new(DatabaseCheck::new(name)))), false);
  registry.add("cache", factory(|name| Ok(Box::new(CacheCheck::new(name)))), false);
  registry.add("apache", factory(|name| Ok(Box::new(ApacheCheck::new(name)))), false);

  for file in &pipeline.config_files {
    registry.add(file.as_str(), factory(|name| Ok(Box::new(ConfigFileCheck::new(name)))), false);
  }

  registry
}

/// Borrow injected context, or explain that the runner never supplied it
fn injected<'a, T>(slot: &'a Option<Arc<T>>, what: &str) -> anyhow::Result<&'a T> {
  slot
    .as_deref()
    .ok_or_else(|| anyhow::anyhow!("{} was not injected before the check ran", what))
}
