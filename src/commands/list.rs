//! `boot-preflight list` - show registered checks in evaluation order

use super::{build_runner, load_settings};
use boot_preflight::core::error::BootResult;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct CheckListing {
  name: String,
  description: String,
  skipped: bool,
}

/// Print every registered check, marking the ones `run` would skip
pub fn run_list(config_path: Option<&Path>, json: bool) -> BootResult<()> {
  let settings = load_settings(config_path)?;
  let runner = build_runner(&settings, json, &[]);

  let listings = runner
    .registry()
    .names()
    .map(|name| {
      Ok(CheckListing {
        name: name.to_string(),
        description: runner.describe(name)?,
        skipped: runner.is_excluded(name),
      })
    })
    .collect::<BootResult<Vec<_>>>()?;

  if json {
    println!("{}", serde_json::to_string_pretty(&listings)?);
    return Ok(());
  }

  println!("📋 Registered checks (evaluation order):");
  for (index, listing) in listings.iter().enumerate() {
    let marker = if listing.skipped { " (skipped)" } else { "" };
    println!("  {:>2}. {}{}: {}", index + 1, listing.name, marker, listing.description);
  }

  Ok(())
}
