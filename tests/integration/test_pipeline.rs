//! Library-level pipeline tests against a real application tree

use crate::helpers::TestApp;
use anyhow::Result;
use boot_preflight::builtin::default_registry;
use boot_preflight::checks::{CheckRunner, ExclusionScope, JsonRenderer, Outcome, factory};
use boot_preflight::core::config::PreflightConfig;
use boot_preflight::core::context::{ConfigSnapshot, ResourceLayout};
use boot_preflight::core::error::BootError;
use std::sync::Arc;

fn runner_for(app: &TestApp) -> Result<CheckRunner> {
  let settings = PreflightConfig::discover(&app.path)?;
  let resources = Arc::new(ResourceLayout::from_config(&settings.layout));
  let config = Arc::new(ConfigSnapshot::load(&resources.config_dir));
  Ok(CheckRunner::new(
    default_registry(&settings.pipeline),
    resources,
    config,
    Box::new(JsonRenderer),
  ))
}

#[test]
fn test_default_pipeline_passes_on_healthy_app() -> Result<()> {
  let app = TestApp::new()?;
  let mut runner = runner_for(&app)?;
  assert_eq!(runner.check_all()?, Outcome::Pass);
  Ok(())
}

#[test]
fn test_overwritten_check_keeps_position() -> Result<()> {
  let app = TestApp::new()?;
  app.remove_file("app/config/menu.toml")?;

  let mut runner = runner_for(&app)?;
  // the web root has its .htaccess, so the replacement passes
  runner.add(
    "menu",
    factory(|name| Ok(Box::new(boot_preflight::builtin::ApacheCheck::new(name)))),
    false,
  );
  assert_eq!(runner.registry().names().position(|n| n == "menu"), Some(6));
  assert_eq!(runner.check_all()?, Outcome::Pass);

  Ok(())
}

#[test]
fn test_permanent_apache_exclusion_survives_later_runs() -> Result<()> {
  let app = TestApp::new()?;
  app.remove_file("public/.htaccess")?;

  let mut runner = runner_for(&app)?;
  runner.disable_apache_checks(ExclusionScope::Permanent);
  assert_eq!(runner.check_all()?, Outcome::Pass);
  assert!(!runner.registry().contains("apache"));
  assert!(matches!(runner.check_one("apache"), Err(BootError::UnknownCheck { .. })));

  Ok(())
}

#[test]
fn test_removed_check_is_not_visited() -> Result<()> {
  let app = TestApp::new()?;
  app.remove_file("app/config/permissions.toml")?;

  let mut runner = runner_for(&app)?;
  assert!(runner.check_all()?.is_fail());

  runner.remove("permissions");
  runner.remove("permissions");
  assert_eq!(runner.check_all()?, Outcome::Pass);

  Ok(())
}
