//! Apache `.htaccess` check

use super::injected;
use crate::checks::{Check, Failure, FailureRenderer, Outcome, ResourceAware};
use crate::core::context::ResourceLayout;
use std::sync::Arc;

/// Checks that a web root served by Apache ships its `.htaccess` rewrite rules.
/// Skip it with `pipeline.disable_apache_checks` on other web servers.
pub struct ApacheCheck {
  name: String,
  resources: Option<Arc<ResourceLayout>>,
}

impl ApacheCheck {
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      resources: None,
    }
  }
}

impl ResourceAware for ApacheCheck {
  fn set_resources(&mut self, resources: Arc<ResourceLayout>) {
    self.resources = Some(resources);
  }
}

impl Check for ApacheCheck {
  fn name(&self) -> &str {
    &self.name
  }

  fn description(&self) -> &str {
    "Validates that the web root contains an .htaccess file"
  }

  fn run(&self, renderer: &dyn FailureRenderer) -> anyhow::Result<Outcome> {
    let resources = injected(&self.resources, "Resource layout")?;

    // Nothing is served from here, so there is nothing to rewrite
    if !resources.web_root.is_dir() {
      return Ok(Outcome::Pass);
    }

    let htaccess = resources.web_root.join(".htaccess");
    if htaccess.is_file() {
      return Ok(Outcome::Pass);
    }

    Ok(Outcome::Fail(renderer.render(
      Failure::new(
        self.name(),
        "Missing .htaccess",
        format!(
          "The web root {} has no .htaccess file, so Apache will not route requests to the application.",
          resources.web_root.display()
        ),
      )
      .with_suggestion(
        "Restore .htaccess in the web root, or set `disable_apache_checks = true` under [pipeline] if you are not using Apache",
      ),
    )))
  }

  fn resource_aware(&mut self) -> Option<&mut dyn ResourceAware> {
    Some(self)
  }
}
