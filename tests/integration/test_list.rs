//! Integration tests for `boot-preflight list`

use crate::helpers::{TestApp, run_preflight, stdout};
use anyhow::Result;

#[test]
fn test_list_shows_evaluation_order() -> Result<()> {
  let app = TestApp::new()?;

  let output = run_preflight(&app.path, &["list", "--json"])?;
  assert!(output.status.success());

  let json: serde_json::Value = serde_json::from_str(&stdout(&output))?;
  let names: Vec<&str> = json
    .as_array()
    .expect("list output should be an array")
    .iter()
    .filter_map(|entry| entry["name"].as_str())
    .collect();
  assert_eq!(
    names,
    vec![
      "configuration",
      "database",
      "cache",
      "apache",
      "config",
      "contenttypes",
      "menu",
      "permissions",
      "routing",
      "taxonomy"
    ]
  );

  Ok(())
}

#[test]
fn test_list_marks_skipped_checks() -> Result<()> {
  let app = TestApp::new()?;
  app.write_file(
    "preflight.toml",
    "[pipeline]\ndisable_apache_checks = true\nconfig_files = [\"menu\"]\n",
  )?;

  let output = run_preflight(&app.path, &["list"])?;
  assert!(output.status.success());
  let out = stdout(&output);
  assert!(out.contains("apache (skipped)"));
  assert!(out.contains("menu"));
  assert!(!out.contains("taxonomy"));

  Ok(())
}
