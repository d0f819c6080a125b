//! sentinel CLI tool.
//!
//! Usage:
//! ```bash
//! sentinel check --rules rules.toml --values form.json --set username=alice
//! sentinel rules
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use sentinel_log::{Config as LogConfig, Level};

mod commands;

/// Validate texts against rule files
#[derive(Parser)]
#[command(name = "sentinel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter directives, e.g. `debug` or `sentinel_validator=trace`
    #[arg(long, global = true, env = "SENTINEL_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate target texts against a rule configuration
    Check {
        /// Rule configuration (.json or .toml)
        #[arg(short, long)]
        rules: PathBuf,

        /// Target texts as a flat map (.json or .toml)
        #[arg(short = 'i', long)]
        values: Option<PathBuf>,

        /// Set a target text; overrides the values file (repeatable)
        #[arg(short, long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
        set: Vec<(String, String)>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// List available rule kinds
    Rules,
}

/// Output format for validation reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per target.
    #[default]
    Text,
    /// A JSON array of target reports.
    Json,
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got `{raw}`"))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut log_config = LogConfig::from_env();
    match cli.log_level {
        Some(filter) => log_config.level = filter,
        None if std::env::var_os("RUST_LOG").is_none() => {
            log_config = log_config.with_level(Level::Warn);
        }
        None => {}
    }
    let _guard = match sentinel_log::init_with(log_config) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(commands::EXIT_USAGE);
        }
    };

    let outcome = match cli.command {
        Commands::Check {
            rules,
            values,
            set,
            format,
        } => commands::check::run(&rules, values.as_deref(), set, format),
        Commands::Rules => {
            commands::rules::run();
            Ok(ExitCode::SUCCESS)
        }
    };

    outcome.unwrap_or_else(|err| {
        tracing::debug!(error = ?err, "command failed");
        eprintln!("error: {err:#}");
        ExitCode::from(commands::EXIT_USAGE)
    })
}
