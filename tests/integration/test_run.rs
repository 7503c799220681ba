//! Integration tests for `boot-preflight run`

use crate::helpers::{TestApp, run_preflight, stderr, stdout};
use anyhow::Result;

#[test]
fn test_healthy_app_passes() -> Result<()> {
  let app = TestApp::new()?;

  let output = run_preflight(&app.path, &["run"])?;
  assert!(output.status.success(), "stderr: {}", stderr(&output));
  assert!(stdout(&output).contains("All pre-flight checks passed"));
  assert!(app.path.join("var/cache").is_dir(), "cache check should create the cache dir");

  Ok(())
}

#[test]
fn test_first_failure_is_reported_with_validation_exit_code() -> Result<()> {
  let app = TestApp::new()?;
  // both fail; cache runs before apache and menu
  app.remove_file("public/.htaccess")?;
  app.remove_file("app/config/menu.toml")?;
  app.write_file("var/cache", "occupied by a file")?;

  let output = run_preflight(&app.path, &["run"])?;
  assert_eq!(output.status.code(), Some(3));
  let out = stdout(&output);
  assert!(out.contains("cache"), "stdout: {}", out);
  assert!(!out.contains(".htaccess"));
  assert!(!out.contains("menu.toml"));

  Ok(())
}

#[test]
fn test_json_failure_output() -> Result<()> {
  let app = TestApp::new()?;
  app.remove_file("app/config/routing.toml")?;

  let output = run_preflight(&app.path, &["run", "--json"])?;
  assert_eq!(output.status.code(), Some(3));

  let json: serde_json::Value = serde_json::from_str(&stdout(&output))?;
  assert_eq!(json["check_name"], "routing");
  assert_eq!(json["status"], 500);
  assert_eq!(json["title"], "Missing configuration file");

  Ok(())
}

#[test]
fn test_json_pass_output() -> Result<()> {
  let app = TestApp::new()?;

  let output = run_preflight(&app.path, &["run", "--json"])?;
  assert!(output.status.success());
  let json: serde_json::Value = serde_json::from_str(&stdout(&output))?;
  assert_eq!(json["outcome"], "pass");

  Ok(())
}

#[test]
fn test_disable_apache_checks_from_settings() -> Result<()> {
  let app = TestApp::new()?;
  app.remove_file("public/.htaccess")?;

  let output = run_preflight(&app.path, &["run"])?;
  assert_eq!(output.status.code(), Some(3));

  app.write_file("preflight.toml", "[pipeline]\ndisable_apache_checks = true\n")?;
  let output = run_preflight(&app.path, &["run"])?;
  assert!(output.status.success(), "stdout: {}", stdout(&output));

  Ok(())
}

#[test]
fn test_skip_flag_excludes_check() -> Result<()> {
  let app = TestApp::new()?;
  app.remove_file("app/config/taxonomy.toml")?;

  let output = run_preflight(&app.path, &["run", "--skip", "taxonomy"])?;
  assert!(output.status.success(), "stdout: {}", stdout(&output));

  Ok(())
}

#[test]
fn test_only_runs_single_check() -> Result<()> {
  let app = TestApp::new()?;
  app.remove_file("app/config/menu.toml")?;

  let output = run_preflight(&app.path, &["run", "--only", "database"])?;
  assert!(output.status.success());
  assert!(stdout(&output).contains("Check 'database' passed"));

  let output = run_preflight(&app.path, &["run", "--only", "menu"])?;
  assert_eq!(output.status.code(), Some(3));

  Ok(())
}

#[test]
fn test_only_unknown_check_is_boot_error() -> Result<()> {
  let app = TestApp::new()?;

  let output = run_preflight(&app.path, &["run", "--only", "nonexistent"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("'nonexistent'"));
  assert!(stdout(&output).is_empty());

  Ok(())
}

#[test]
fn test_broken_app_config_fails_configuration_check_first() -> Result<()> {
  let app = TestApp::new()?;
  app.write_file("app/config/config.toml", "[database\n")?;

  let output = run_preflight(&app.path, &["run"])?;
  assert_eq!(output.status.code(), Some(3));
  assert!(stdout(&output).contains("configuration: Configuration error"));

  Ok(())
}

#[test]
fn test_explicit_missing_settings_file_is_user_error() -> Result<()> {
  let app = TestApp::new()?;

  let output = run_preflight(&app.path, &["run", "--config", "missing.toml"])?;
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr(&output).contains("not found"));

  Ok(())
}
