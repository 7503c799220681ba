//! Application configuration load check

use super::injected;
use crate::checks::{Check, ConfigAware, Failure, FailureRenderer, Outcome};
use crate::core::context::ConfigSnapshot;
use std::sync::Arc;

/// Fails when the configuration snapshot recorded load problems
pub struct ConfigurationCheck {
  name: String,
  config: Option<Arc<ConfigSnapshot>>,
}

impl ConfigurationCheck {
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      config: None,
    }
  }
}

impl ConfigAware for ConfigurationCheck {
  fn set_config(&mut self, config: Arc<ConfigSnapshot>) {
    self.config = Some(config);
  }
}

impl Check for ConfigurationCheck {
  fn name(&self) -> &str {
    &self.name
  }

  fn description(&self) -> &str {
    "Validates that the application configuration loaded without errors"
  }

  fn run(&self, renderer: &dyn FailureRenderer) -> anyhow::Result<Outcome> {
    let config = injected(&self.config, "Configuration snapshot")?;

    if config.problems().is_empty() {
      return Ok(Outcome::Pass);
    }

    let source = config
      .source()
      .map(|p| p.display().to_string())
      .unwrap_or_else(|| "<inline>".to_string());

    let failure = Failure::new(
      self.name(),
      "Configuration error",
      format!(
        "The application configuration could not be loaded:\n  - {}",
        config.problems().join("\n  - ")
      ),
    )
    .with_suggestion(format!("Fix the problems reported in {}", source))
    .with_details(serde_json::json!({
      "source": source,
      "problems": config.problems(),
    }));

    Ok(Outcome::Fail(renderer.render(failure)))
  }

  fn config_aware(&mut self) -> Option<&mut dyn ConfigAware> {
    Some(self)
  }
}
