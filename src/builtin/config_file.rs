//! Per-file configuration check
//!
//! One factory serves many registry entries: the registered name picks the
//! file, so `menu` validates `<config_dir>/menu.toml`.

use super::injected;
use crate::checks::{Check, Failure, FailureRenderer, Outcome, ResourceAware};
use crate::core::context::ResourceLayout;
use std::fs;
use std::io::ErrorKind;
use std::sync::Arc;
use toml_edit::DocumentMut;

/// Checks that a named config file exists and parses as TOML
pub struct ConfigFileCheck {
  name: String,
  resources: Option<Arc<ResourceLayout>>,
}

impl ConfigFileCheck {
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      resources: None,
    }
  }
}

impl ResourceAware for ConfigFileCheck {
  fn set_resources(&mut self, resources: Arc<ResourceLayout>) {
    self.resources = Some(resources);
  }
}

impl Check for ConfigFileCheck {
  fn name(&self) -> &str {
    &self.name
  }

  fn description(&self) -> &str {
    "Validates a TOML configuration file in the config directory"
  }

  fn run(&self, renderer: &dyn FailureRenderer) -> anyhow::Result<Outcome> {
    let resources = injected(&self.resources, "Resource layout")?;
    let path = resources.config_file(&self.name);

    let content = match fs::read_to_string(&path) {
      Ok(content) => content,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        let dist = path.with_extension("toml.dist");
        let suggestion = if dist.is_file() {
          format!("Copy {} to {} and adjust it", dist.display(), path.display())
        } else {
          format!("Create {}", path.display())
        };
        return Ok(Outcome::Fail(renderer.render(
          Failure::new(
            self.name(),
            "Missing configuration file",
            format!("The configuration file {} does not exist.", path.display()),
          )
          .with_suggestion(suggestion),
        )));
      }
      Err(e) => {
        return Ok(Outcome::Fail(renderer.render(
          Failure::new(
            self.name(),
            "Unreadable configuration file",
            format!("The configuration file {} could not be read: {}", path.display(), e),
          )
          .with_suggestion("Make the file readable by the application user"),
        )));
      }
    };

    if let Err(e) = content.parse::<DocumentMut>() {
      return Ok(Outcome::Fail(renderer.render(
        Failure::new(
          self.name(),
          "Invalid configuration file",
          format!("The configuration file {} is not valid TOML:\n{}", path.display(), e),
        )
        .with_suggestion("Fix the syntax error reported above")
        .with_details(serde_json::json!({ "path": path.display().to_string() })),
      )));
    }

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

  fn setup(files: &[(&str, &str)]) -> (tempfile::TempDir, crate::checks::CheckRunner) {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("app/config");
    fs::create_dir_all(&config_dir).unwrap();
    for (name, content) in files {
      fs::write(config_dir.join(name), content).unwrap();
    }

    let mut registry = CheckRegistry::new();
    for name in ["menu", "routing"] {
      registry.add(name, factory(|name| Ok(Box::new(ConfigFileCheck::new(name)))), false);
    }
    let runner = runner_at(dir.path(), registry, "");
    (dir, runner)
  }

  #[test]
  fn test_name_selects_file() {
    let (_dir, runner) = setup(&[("menu.toml", "[main]\nlabel = \"Home\"\n")]);
    assert!(runner.check_one("menu").unwrap().is_pass());
    let outcome = runner.check_one("routing").unwrap();
    assert!(outcome.response().unwrap().body.contains("routing.toml"));
  }

  #[test]
  fn test_missing_file_suggests_dist_copy() {
    let (_dir, runner) = setup(&[("menu.toml.dist", "")]);
    let outcome = runner.check_one("menu").unwrap();
    assert!(outcome.response().unwrap().body.contains("menu.toml.dist"));
  }

  #[test]
  fn test_invalid_toml_fails() {
    let (_dir, mut runner) = setup(&[("menu.toml", "[main\n"), ("routing.toml", "")]);
    let outcome = runner.check_all().unwrap();
    let response = outcome.response().unwrap();
    assert_eq!(response.check_name, "menu");
    assert!(response.body.contains("not valid TOML"));
  }
}
