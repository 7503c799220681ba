//! Cache directory writability check

use super::injected;
use crate::checks::{Check, Failure, FailureRenderer, Outcome, ResourceAware};
use crate::core::context::ResourceLayout;
use std::fs;
use std::sync::Arc;

const PROBE_FILE: &str = ".preflight-probe";

/// Checks that the cache directory exists (creating it if needed) and is writable
pub struct CacheCheck {
  name: String,
  resources: Option<Arc<ResourceLayout>>,
}

impl CacheCheck {
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      resources: None,
    }
  }
}

impl ResourceAware for CacheCheck {
  fn set_resources(&mut self, resources: Arc<ResourceLayout>) {
    self.resources = Some(resources);
  }
}

impl Check for CacheCheck {
  fn name(&self) -> &str {
    &self.name
  }

  fn description(&self) -> &str {
    "Validates that the cache directory exists and is writable"
  }

  fn run(&self, renderer: &dyn FailureRenderer) -> anyhow::Result<Outcome> {
    let resources = injected(&self.resources, "Resource layout")?;
    let cache_dir = &resources.cache_dir;

    if let Err(e) = fs::create_dir_all(cache_dir) {
      return Ok(Outcome::Fail(renderer.render(
        Failure::new(
          self.name(),
          "Cache directory missing",
          format!("The cache directory {} does not exist and could not be created: {}", cache_dir.display(), e),
        )
        .with_suggestion(format!("Create {} and make it writable by the application", cache_dir.display())),
      )));
    }

    let probe = cache_dir.join(PROBE_FILE);
    if let Err(e) = fs::write(&probe, b"preflight") {
      return Ok(Outcome::Fail(renderer.render(
        Failure::new(
          self.name(),
          "Cache directory not writable",
          format!("The cache directory {} is not writable: {}", cache_dir.display(), e),
        )
        .with_suggestion(format!("Make {} writable by the application user", cache_dir.display())),
      )));
    }
    fs::remove_file(&probe)?;

    Ok(Outcome::Pass)
  }

  fn resource_aware(&mut self) -> Option<&mut dyn ResourceAware> {
    Some(self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::builtin::testing::runner_at;
  use crate::checks::{CheckRegistry, factory};

  fn registry() -> CheckRegistry {
    let mut registry = CheckRegistry::new();
    registry.add("cache", factory(|name| Ok(Box::new(CacheCheck::new(name)))), false);
    registry
  }

  #[test]
  fn test_creates_missing_cache_dir() {
    let dir = tempfile::tempdir().unwrap();
    let runner = runner_at(dir.path(), registry(), "");
    assert!(runner.check_one("cache").unwrap().is_pass());
    assert!(dir.path().join("var/cache").is_dir());
    assert!(!dir.path().join("var/cache").join(PROBE_FILE).exists());
  }

  #[test]
  fn test_cache_path_occupied_by_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("var")).unwrap();
    fs::write(dir.path().join("var/cache"), "not a directory").unwrap();

    let runner = runner_at(dir.path(), registry(), "");
    let outcome = runner.check_one("cache").unwrap();
    assert_eq!(outcome.response().unwrap().check_name, "cache");
  }
}
