//! Core building blocks shared by the pipeline and the CLI
//!
//! - **config**: preflight.toml parsing and validation
//! - **context**: shared read-only context injected into checks (layout, config snapshot)
//! - **error**: boot error types with contextual help messages and exit codes

pub mod config;
pub mod context;
pub mod error;
