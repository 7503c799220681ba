//! `boot-preflight run` - run the pre-flight pipeline
//!
//! Prints nothing but a short confirmation when every check passes. On the
//! first failure the rendered response body is printed and the process exits
//! with the validation exit code.

use super::{build_runner, load_settings};
use boot_preflight::checks::Outcome;
use boot_preflight::core::error::BootResult;
use std::path::Path;

/// Run all checks (or just `only`) and print the outcome
pub fn run_checks(config_path: Option<&Path>, only: Option<&str>, skip: &[String], json: bool) -> BootResult<Outcome> {
  let settings = load_settings(config_path)?;
  let mut runner = build_runner(&settings, json, skip);

  let outcome = match only {
    Some(name) => runner.check_one(name)?,
    None => runner.check_all()?,
  };

  match &outcome {
    Outcome::Pass if json => {
      println!("{}", serde_json::to_string_pretty(&outcome)?);
    }
    Outcome::Pass => match only {
      Some(name) => println!("✅ Check '{}' passed", name),
      None => println!("✅ All pre-flight checks passed"),
    },
    Outcome::Fail(response) => {
      println!("{}", response.body.trim_end());
    }
  }

  Ok(outcome)
}
