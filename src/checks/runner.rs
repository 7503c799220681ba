//! Check runner: builds, injects and invokes checks in registry order

use super::registry::{CheckFactory, CheckRegistry};
use super::trait_def::{Check, Failure, FailureRenderer, Outcome};
use crate::core::context::{ConfigSnapshot, ResourceLayout};
use crate::core::error::{BootError, BootResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Name of the web-server-specific check toggled by `disable_apache_checks`
pub const APACHE_CHECK: &str = "apache";

/// How long an exclusion lasts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExclusionScope {
  /// Skipped in every `check_all` run; the registry keeps the entry
  #[default]
  Run,
  /// Removed from the registry by every `check_all` run that finds it registered
  Permanent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Exclusion {
  name: String,
  scope: ExclusionScope,
}

/// Check runner that owns the registry and the shared context
pub struct CheckRunner {
  registry: CheckRegistry,
  resources: Arc<ResourceLayout>,
  config: Arc<ConfigSnapshot>,
  renderer: Box<dyn FailureRenderer>,
  exclusions: Vec<Exclusion>,
}

impl CheckRunner {
  /// Create a runner over an externally assembled registry
  pub fn new(
    registry: CheckRegistry,
    resources: Arc<ResourceLayout>,
    config: Arc<ConfigSnapshot>,
    renderer: Box<dyn FailureRenderer>,
  ) -> Self {
    Self {
      registry,
      resources,
      config,
      renderer,
      exclusions: Vec::new(),
    }
  }

  /// Add a check factory (see `CheckRegistry::add`)
  pub fn add(&mut self, name: impl Into<String>, factory: CheckFactory, prepend: bool) {
    self.registry.add(name, factory, prepend);
  }

  /// Remove a check; missing names are ignored
  pub fn remove(&mut self, name: &str) {
    self.registry.remove(name);
  }

  pub fn registry(&self) -> &CheckRegistry {
    &self.registry
  }

  pub fn registry_mut(&mut self) -> &mut CheckRegistry {
    &mut self.registry
  }

  /// Exclude a check from `check_all`. Evaluated once at the start of each run.
  pub fn exclude(&mut self, name: impl Into<String>, scope: ExclusionScope) {
    let name = name.into();
    match self.exclusions.iter_mut().find(|e| e.name == name) {
      Some(existing) => existing.scope = scope,
      None => self.exclusions.push(Exclusion { name, scope }),
    }
  }

  /// Skip the web-server-specific `apache` check
  pub fn disable_apache_checks(&mut self, scope: ExclusionScope) {
    self.exclude(APACHE_CHECK, scope);
  }

  /// Names `check_all` would visit right now, in order
  pub fn planned(&self) -> Vec<String> {
    self
      .registry
      .names()
      .filter(|name| !self.is_excluded(name))
      .map(String::from)
      .collect()
  }

  /// Whether `check_all` would skip `name`
  pub fn is_excluded(&self, name: &str) -> bool {
    self.exclusions.iter().any(|e| e.name == name)
  }

  /// Build a check without running it and return its description
  pub fn describe(&self, name: &str) -> BootResult<String> {
    let factory = self
      .registry
      .get(name)
      .ok_or_else(|| BootError::UnknownCheck { name: name.to_string() })?;
    Ok(self.build(name, factory)?.description().to_string())
  }

  /// Run a single named check. Exclusions do not apply to explicit requests.
  pub fn check_one(&self, name: &str) -> BootResult<Outcome> {
    let factory = self
      .registry
      .get(name)
      .ok_or_else(|| BootError::UnknownCheck { name: name.to_string() })?;

    let check = self.build(name, factory)?;
    Ok(self.invoke(check.as_ref()))
  }

  /// Run every registered check in order, stopping at the first failure.
  pub fn check_all(&mut self) -> BootResult<Outcome> {
    let skipped = self.apply_exclusions();

    let snapshot: Vec<_> = self
      .registry
      .snapshot()
      .into_iter()
      .filter(|(name, _)| !skipped.contains(name))
      .collect();

    for (index, (name, factory)) in snapshot.iter().enumerate() {
      let check = self.build(name, factory)?;
      let outcome = self.invoke(check.as_ref());
      if outcome.is_fail() {
        debug!(check = %name, visited = index + 1, total = snapshot.len(), "stopping at first failing check");
        return Ok(outcome);
      }
    }

    debug!(total = snapshot.len(), "all checks passed");
    Ok(Outcome::Pass)
  }

  /// Remove permanent exclusions from the registry and return the names
  /// skipped for this run only.
  fn apply_exclusions(&mut self) -> Vec<String> {
    let mut skipped = Vec::new();
    for exclusion in &self.exclusions {
      if !self.registry.contains(&exclusion.name) {
        continue;
      }
      match exclusion.scope {
        ExclusionScope::Permanent => {
          info!(check = %exclusion.name, "removing excluded check from registry");
          self.registry.remove(&exclusion.name);
        }
        ExclusionScope::Run => {
          info!(check = %exclusion.name, "skipping excluded check for this run");
          skipped.push(exclusion.name.clone());
        }
      }
    }
    skipped
  }

  /// Construct a check and inject whichever context it asks for
  fn build(&self, name: &str, factory: &CheckFactory) -> BootResult<Box<dyn Check>> {
    let mut check = factory(name).map_err(|e| BootError::Construction {
      check: name.to_string(),
      expected: "Check",
      reason: format!("{:#}", e),
    })?;

    if let Some(aware) = check.resource_aware() {
      aware.set_resources(Arc::clone(&self.resources));
    }
    if let Some(aware) = check.config_aware() {
      aware.set_config(Arc::clone(&self.config));
    }

    debug!(check = %name, "built check");
    Ok(check)
  }

  /// Invoke a built check. A check that cannot run becomes a failure outcome.
  fn invoke(&self, check: &dyn Check) -> Outcome {
    debug!(check = %check.name(), "running check");
    match check.run(self.renderer.as_ref()) {
      Ok(outcome) => outcome,
      Err(err) => Outcome::Fail(
        self.renderer.render(
          Failure::new(check.name(), "Check could not run", format!("Check failed to run: {:#}", err))
            .with_suggestion("Check the logs for more details"),
        ),
      ),
    }
  }
}
