//! Failure renderers
//!
//! The pipeline never formats failures itself. Whatever renderer the runner
//! was built with turns a check's `Failure` into the `Response` handed back
//! to the caller.

use super::trait_def::{Failure, FailureRenderer, Response};

/// Human-readable text, in the same shape the CLI prints errors
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl FailureRenderer for PlainRenderer {
  fn render(&self, failure: Failure) -> Response {
    let mut body = format!("❌ {}: {}\n\n{}\n", failure.check_name, failure.title, failure.message);
    if let Some(ref suggestion) = failure.suggestion {
      body.push_str(&format!("\n💡 Fix: {}\n", suggestion));
    }

    Response {
      check_name: failure.check_name,
      status: failure.status,
      content_type: "text/plain; charset=utf-8".to_string(),
      body,
    }
  }
}

/// JSON document carrying every field of the failure
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl FailureRenderer for JsonRenderer {
  fn render(&self, failure: Failure) -> Response {
    let body = serde_json::to_string_pretty(&failure).unwrap_or_else(|e| {
      serde_json::json!({
        "check_name": failure.check_name,
        "status": failure.status,
        "title": failure.title,
        "message": format!("{} (details could not be serialized: {})", failure.message, e),
      })
      .to_string()
    });

    Response {
      check_name: failure.check_name,
      status: failure.status,
      content_type: "application/json".to_string(),
      body,
    }
  }
}
