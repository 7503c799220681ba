//! Pre-flight check pipeline
//!
//! A `CheckRegistry` maps check names to factories in evaluation order. A
//! `CheckRunner` builds each check on demand, injects the context it asks for,
//! and runs the registry front to back, returning the first failure.
//!
//! # Example
//!
//! ```rust,ignore
//! use boot_preflight::checks::{CheckRegistry, CheckRunner, PlainRenderer, Outcome};
//!
//! let mut runner = CheckRunner::new(registry, resources, config, Box::new(PlainRenderer));
//! runner.disable_apache_checks(ExclusionScope::Run);
//!
//! match runner.check_all()? {
//!   Outcome::Pass => boot(),
//!   Outcome::Fail(response) => show(response),
//! }
//! ```

mod registry;
mod render;
mod runner;
mod trait_def;

pub use registry::{CheckFactory, CheckRegistry, factory};
pub use render::{JsonRenderer, PlainRenderer};
pub use runner::{APACHE_CHECK, CheckRunner, ExclusionScope};
pub use trait_def::{Check, ConfigAware, Failure, FailureRenderer, Outcome, ResourceAware, Response};
