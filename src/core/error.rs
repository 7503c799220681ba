//! Boot error types with contextual messages and exit codes
//!
//! A boot error is a structural problem with the pipeline itself: an unknown
//! check name, a factory that cannot produce a check, an unreadable settings
//! file. It is never a validation result. Checks that find something wrong
//! with the environment report an `Outcome::Fail` instead.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for boot-preflight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args, unknown check)
  User = 1,
  /// System error (I/O)
  System = 2,
  /// Validation failure (a check reported a problem)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for the pipeline
#[derive(Debug)]
pub enum BootError {
  /// No check registered under the requested name
  UnknownCheck { name: String },

  /// A factory failed to produce a usable check
  Construction {
    check: String,
    expected: &'static str,
    reason: String,
  },

  /// Settings file errors
  Config(ConfigError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl BootError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    BootError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      BootError::Message { message, context, help } => BootError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      BootError::Io(err) => BootError::Message {
        message: format!("I/O error: {}", err),
        context: Some(ctx_str),
        help: None,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      BootError::UnknownCheck { .. } => ExitCode::User,
      BootError::Construction { .. } => ExitCode::User,
      BootError::Config(_) => ExitCode::User,
      BootError::Io(_) => ExitCode::System,
      BootError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      BootError::UnknownCheck { .. } => {
        Some("Run `boot-preflight list` to see the registered checks.".to_string())
      }
      BootError::Construction { check, .. } => Some(format!(
        "The factory registered for '{}' must return a check. Fix the registration or remove the check.",
        check
      )),
      BootError::Config(e) => e.help_message(),
      BootError::Message { help, .. } => help.clone(),
      BootError::Io(_) => None,
    }
  }
}

impl fmt::Display for BootError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BootError::UnknownCheck { name } => write!(f, "No check registered under the name '{}'", name),
      BootError::Construction {
        check,
        expected,
        reason,
      } => write!(
        f,
        "System validator was given a factory for '{}' that does not produce a {}: {}",
        check, expected, reason
      ),
      BootError::Config(e) => write!(f, "{}", e),
      BootError::Io(e) => write!(f, "I/O error: {}", e),
      BootError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for BootError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      BootError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for BootError {
  fn from(err: io::Error) -> Self {
    BootError::Io(err)
  }
}

impl From<ConfigError> for BootError {
  fn from(err: ConfigError) -> Self {
    BootError::Config(err)
  }
}

impl From<toml_edit::de::Error> for BootError {
  fn from(err: toml_edit::de::Error) -> Self {
    BootError::message(format!("TOML deserialization error: {}", err))
  }
}

impl From<serde_json::Error> for BootError {
  fn from(err: serde_json::Error) -> Self {
    BootError::message(format!("JSON error: {}", err))
  }
}

/// Settings-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// An explicitly requested settings file does not exist
  NotFound { path: PathBuf },

  /// A field holds a value outside its allowed set
  InvalidValue { field: String, value: String, reason: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { .. } => {
        Some("Pass an existing file to --config, or omit it to use preflight.toml from the working directory.".to_string())
      }
      ConfigError::InvalidValue { field, .. } => Some(format!("Fix `{}` in preflight.toml.", field)),
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { path } => {
        write!(f, "Preflight settings file not found: {}", path.display())
      }
      ConfigError::InvalidValue { field, value, reason } => {
        write!(f, "Invalid value '{}' for {}: {}", value, field, reason)
      }
    }
  }
}

/// Result type alias for boot-preflight
pub type BootResult<T> = Result<T, BootError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> BootResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<BootError>,
{
  fn with_context<F>(self, f: F) -> BootResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &BootError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
