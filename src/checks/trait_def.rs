//! Check trait abstraction for pre-flight validations
//!
//! Every check implements the `Check` trait. Two optional capabilities,
//! `ResourceAware` and `ConfigAware`, let a check ask for shared context;
//! the runner discovers them through `Check::resource_aware` and
//! `Check::config_aware` and injects the context before `run` is called.

use crate::core::context::{ConfigSnapshot, ResourceLayout};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A problem found by a check, before rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Failure {
  /// Name of the check that failed
  pub check_name: String,
  /// Status code for the rendered response (HTTP semantics)
  pub status: u16,
  /// Short headline
  pub title: String,
  /// Human-readable message
  pub message: String,
  /// Optional suggested fix
  pub suggestion: Option<String>,
  /// Additional metadata (for JSON output)
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<serde_json::Value>,
}

impl Failure {
  /// Create a failure with status 500
  pub fn new(check_name: impl Into<String>, title: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      check_name: check_name.into(),
      status: 500,
      title: title.into(),
      message: message.into(),
      suggestion: None,
      details: None,
    }
  }

  /// Override the status code
  pub fn with_status(mut self, status: u16) -> Self {
    self.status = status;
    self
  }

  /// Add a suggested fix
  pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
    self.suggestion = Some(suggestion.into());
    self
  }

  /// Add details to the failure
  pub fn with_details(mut self, details: serde_json::Value) -> Self {
    self.details = Some(details);
    self
  }
}

/// A rendered failure, ready to hand to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
  /// Check that produced the failure
  pub check_name: String,
  pub status: u16,
  pub content_type: String,
  pub body: String,
}

/// Result of a validation: nothing to report, or a rendered failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Outcome {
  Pass,
  Fail(Response),
}

impl Outcome {
  pub fn is_pass(&self) -> bool {
    matches!(self, Outcome::Pass)
  }

  pub fn is_fail(&self) -> bool {
    !self.is_pass()
  }

  /// The failure response, if any
  pub fn response(&self) -> Option<&Response> {
    match self {
      Outcome::Pass => None,
      Outcome::Fail(response) => Some(response),
    }
  }
}

/// Turns a `Failure` into the final `Response`
pub trait FailureRenderer {
  fn render(&self, failure: Failure) -> Response;
}

/// Capability: the check needs the application's filesystem layout
pub trait ResourceAware {
  fn set_resources(&mut self, resources: Arc<ResourceLayout>);
}

/// Capability: the check needs the live configuration snapshot
pub trait ConfigAware {
  fn set_config(&mut self, config: Arc<ConfigSnapshot>);
}

/// Pre-flight check trait
///
/// Each check implements this trait to provide validation logic. A check
/// either returns `Outcome::Pass` or renders a `Failure` through the renderer
/// it is given.
///
/// # Example
///
/// ```rust,ignore
/// use boot_preflight::checks::{Check, Failure, FailureRenderer, Outcome};
///
/// struct MyCheck;
///
/// impl Check for MyCheck {
///   fn name(&self) -> &str {
///     "my-custom-check"
///   }
///
///   fn description(&self) -> &str {
///     "Validates my custom requirement"
///   }
///
///   fn run(&self, renderer: &dyn FailureRenderer) -> anyhow::Result<Outcome> {
///     if everything_ok {
///       Ok(Outcome::Pass)
///     } else {
///       Ok(Outcome::Fail(renderer.render(
///         Failure::new(self.name(), "Broken", "Something is wrong").with_suggestion("Try fixing it this way"),
///       )))
///     }
///   }
/// }
/// ```
pub trait Check {
  /// Name this check was registered under
  fn name(&self) -> &str;

  /// Human-readable description of what this check validates
  fn description(&self) -> &str;

  /// Run the check. `Err` means the check itself could not run; the runner
  /// turns it into a failure outcome.
  fn run(&self, renderer: &dyn FailureRenderer) -> anyhow::Result<Outcome>;

  /// Resource-context capability, if this check has it
  fn resource_aware(&mut self) -> Option<&mut dyn ResourceAware> {
    None
  }

  /// Configuration-context capability, if this check has it
  fn config_aware(&mut self) -> Option<&mut dyn ConfigAware> {
    None
  }
}
