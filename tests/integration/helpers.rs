//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Config files the default pipeline validates
pub const CONFIG_FILES: &[&str] = &["config", "contenttypes", "menu", "permissions", "routing", "taxonomy"];

/// An application tree that passes every built-in check
pub struct TestApp {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestApp {
  /// Create a healthy application layout
  pub fn new() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();

    let config_dir = path.join("app/config");
    std::fs::create_dir_all(&config_dir)?;
    std::fs::create_dir_all(path.join("var"))?;
    std::fs::create_dir_all(path.join("public"))?;

    for name in CONFIG_FILES.iter().filter(|n| **n != "config") {
      std::fs::write(config_dir.join(format!("{}.toml", name)), format!("# {}\n", name))?;
    }
    std::fs::write(
      config_dir.join("config.toml"),
      r#"[site]
name = "Test Site"

[database]
driver = "sqlite"
path = "var/app.db"
"#,
    )?;
    std::fs::write(path.join("public/.htaccess"), "RewriteEngine On\n")?;

    Ok(Self { _root: root, path })
  }

  /// Write a file relative to the app root
  pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
    let full = self.path.join(path);
    if let Some(parent) = full.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(full, content)?;
    Ok(())
  }

  /// Remove a file relative to the app root
  pub fn remove_file(&self, path: &str) -> Result<()> {
    std::fs::remove_file(self.path.join(path))?;
    Ok(())
  }
}

/// Run the boot-preflight CLI; the caller inspects the exit status
pub fn run_preflight(cwd: &Path, args: &[&str]) -> Result<Output> {
  let bin = env!("CARGO_BIN_EXE_boot-preflight");

  Command::new(bin)
    .current_dir(cwd)
    .args(args)
    .env_remove("RUST_LOG")
    .output()
    .context("Failed to run boot-preflight")
}

pub fn stdout(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
  String::from_utf8_lossy(&output.stderr).to_string()
}
