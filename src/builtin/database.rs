//! Database settings check
//!
//! Validates the `[database]` table of the application configuration. No
//! connection is attempted; this only catches settings that could never work.

use super::injected;
use crate::checks::{Check, ConfigAware, Failure, FailureRenderer, Outcome, ResourceAware};
use crate::core::context::{ConfigSnapshot, ResourceLayout};
use std::sync::Arc;

/// Settings every networked driver needs
const NETWORK_KEYS: &[&str] = &["host", "databasename"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Driver {
  Sqlite,
  Mysql,
  Postgres,
}

impl Driver {
  fn parse(raw: &str) -> Option<Self> {
    match raw.to_ascii_lowercase().as_str() {
      "sqlite" | "pdo_sqlite" => Some(Driver::Sqlite),
      "mysql" | "pdo_mysql" => Some(Driver::Mysql),
      "postgres" | "postgresql" | "pdo_pgsql" => Some(Driver::Postgres),
      _ => None,
    }
  }
}

/// Checks database settings for the configured driver
pub struct DatabaseCheck {
  name: String,
  config: Option<Arc<ConfigSnapshot>>,
  resources: Option<Arc<ResourceLayout>>,
}

impl DatabaseCheck {
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      config: None,
      resources: None,
    }
  }

  fn fail(&self, renderer: &dyn FailureRenderer, message: String, suggestion: &str) -> Outcome {
    Outcome::Fail(renderer.render(
      Failure::new(self.name(), "Database configuration error", message).with_suggestion(suggestion),
    ))
  }
}

impl ResourceAware for DatabaseCheck {
  fn set_resources(&mut self, resources: Arc<ResourceLayout>) {
    self.resources = Some(resources);
  }
}

impl ConfigAware for DatabaseCheck {
  fn set_config(&mut self, config: Arc<ConfigSnapshot>) {
    self.config = Some(config);
  }
}

impl Check for DatabaseCheck {
  fn name(&self) -> &str {
    &self.name
  }

  fn description(&self) -> &str {
    "Validates database settings for the configured driver"
  }

  fn run(&self, renderer: &dyn FailureRenderer) -> anyhow::Result<Outcome> {
    let config = injected(&self.config, "Configuration snapshot")?;
    let resources = injected(&self.resources, "Resource layout")?;

    let Some(raw_driver) = config.get_str("database.driver") else {
      return Ok(self.fail(
        renderer,
        "No database driver is configured.".to_string(),
        "Add `driver = \"sqlite\"` (or mysql/postgres) under [database] in config.toml",
      ));
    };

    let Some(driver) = Driver::parse(raw_driver) else {
      return Ok(self.fail(
        renderer,
        format!("Unsupported database driver '{}'.", raw_driver),
        "Supported drivers are sqlite, mysql and postgres",
      ));
    };

    match driver {
      Driver::Sqlite => {
        let Some(path) = config.get_str("database.path").filter(|p| !p.trim().is_empty()) else {
          return Ok(self.fail(
            renderer,
            "The sqlite driver needs a database file path.".to_string(),
            "Set `path` under [database] in config.toml",
          ));
        };

        let file = resources.resolve(path);
        let parent = file.parent().map(|p| p.to_path_buf()).unwrap_or_else(|| resources.root.clone());
        if !parent.is_dir() {
          return Ok(self.fail(
            renderer,
            format!(
              "The directory for the sqlite database does not exist: {}",
              parent.display()
            ),
            "Create the directory or point `path` somewhere that exists",
          ));
        }
      }
      Driver::Mysql | Driver::Postgres => {
        let missing: Vec<&str> = NETWORK_KEYS
          .iter()
          .copied()
          .filter(|key| {
            config
              .get_str(&format!("database.{}", key))
              .is_none_or(|v| v.trim().is_empty())
          })
          .collect();

        if !missing.is_empty() {
          return Ok(self.fail(
            renderer,
            format!(
              "The {} driver needs these settings under [database]: {}",
              raw_driver,
              missing.join(", ")
            ),
            "Fill in the missing database settings in config.toml",
          ));
        }
      }
    }

    Ok(Outcome::Pass)
  }

  fn resource_aware(&mut self) -> Option<&mut dyn ResourceAware> {
    Some(self)
  }

  fn config_aware(&mut self) -> Option<&mut dyn ConfigAware> {
    Some(self)
  }
}
