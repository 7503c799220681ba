//! Ordered, fail-fast pre-flight validation for application startup.
//!
//! Checks are registered by name in a [`checks::CheckRegistry`]; a
//! [`checks::CheckRunner`] builds each one on demand, injects the context it
//! asks for, and stops at the first failure. Structural problems (unknown
//! check names, broken factories) surface as [`core::error::BootError`],
//! never as a validation outcome.

pub mod builtin;
pub mod checks;
pub mod core;
