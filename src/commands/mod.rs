//! CLI commands for boot-preflight
//!
//! - **run**: Run the pipeline (all checks, or one with `--only`)
//! - **list**: Show the registered checks in evaluation order
//!
//! Both commands assemble the runner through `build_runner`, which is the
//! only place the default checks, the renderer and the exclusions are wired.

pub mod list;
pub mod run;

pub use list::run_list;
pub use run::run_checks;

use boot_preflight::builtin::default_registry;
use boot_preflight::checks::{CheckRunner, FailureRenderer, JsonRenderer, PlainRenderer};
use boot_preflight::core::config::PreflightConfig;
use boot_preflight::core::context::{ConfigSnapshot, ResourceLayout};
use boot_preflight::core::error::BootResult;
use std::env;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Load settings from `--config` or the working directory
pub fn load_settings(config_path: Option<&Path>) -> BootResult<PreflightConfig> {
  match config_path {
    Some(path) => PreflightConfig::load_file(path),
    None => PreflightConfig::discover(&env::current_dir()?),
  }
}

/// Assemble a runner from settings: default registry, shared context,
/// renderer and configured exclusions.
pub fn build_runner(settings: &PreflightConfig, json: bool, extra_skips: &[String]) -> CheckRunner {
  let resources = Arc::new(ResourceLayout::from_config(&settings.layout));
  let config = Arc::new(ConfigSnapshot::load(&resources.config_dir));
  debug!(root = %resources.root.display(), problems = config.problems().len(), "loaded context");

  let renderer: Box<dyn FailureRenderer> = if json {
    Box::new(JsonRenderer)
  } else {
    Box::new(PlainRenderer)
  };

  let pipeline = &settings.pipeline;
  let mut runner = CheckRunner::new(default_registry(pipeline), resources, config, renderer);

  if pipeline.disable_apache_checks {
    runner.disable_apache_checks(pipeline.exclusion_scope);
  }
  for name in pipeline.skip.iter().chain(extra_skips) {
    runner.exclude(name.as_str(), pipeline.exclusion_scope);
  }

  runner
}
