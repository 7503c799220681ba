mod commands;

use boot_preflight::checks::Outcome;
use boot_preflight::core::error::{BootError, ExitCode, print_error};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

/// Run ordered pre-flight checks before an application boots
#[derive(Parser)]
#[command(name = "boot-preflight")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  /// Show debug logging (overridden by RUST_LOG)
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Run the checks in order, stopping at the first failure
  Run {
    /// Run only this check (exclusions do not apply)
    #[arg(long, value_name = "NAME")]
    only: Option<String>,
    /// Skip a check for this run (repeatable)
    #[arg(long, value_name = "NAME")]
    skip: Vec<String>,
    /// Render failures as JSON
    #[arg(long)]
    json: bool,
    /// Settings file (default: preflight.toml in the working directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
  },

  /// List registered checks in evaluation order
  List {
    /// Output the list in JSON format
    #[arg(long)]
    json: bool,
    /// Settings file (default: preflight.toml in the working directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .usage(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
}

fn init_logging(verbose: bool) {
  let default = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
  fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).init();
}

fn handle_error(error: BootError) -> ! {
  print_error(&error);
  std::process::exit(error.exit_code().as_i32());
}

fn main() {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  let result = match cli.command {
    Commands::Run {
      only,
      skip,
      json,
      config,
    } => commands::run_checks(config.as_deref(), only.as_deref(), &skip, json).map(Some),
    Commands::List { json, config } => commands::run_list(config.as_deref(), json).map(|_| None),
  };

  match result {
    Ok(Some(Outcome::Fail(_))) => std::process::exit(ExitCode::Validation.as_i32()),
    Ok(_) => {}
    Err(e) => handle_error(e),
  }
}
