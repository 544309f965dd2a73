//! keyaddr: convert ndau key bytes to and from mnemonic words.

mod commands;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use crate::commands::Command;
use crate::config::{KeyaddrConfig, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "keyaddr", about = "ndau key bytes <-> mnemonic words")]
struct Cli {
    /// Wordlist language tag.
    #[arg(long, env = "NDAU_WORDS_LANG")]
    lang: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "NDAU_LOG_LEVEL")]
    log_level: Option<String>,

    /// Output format.
    #[arg(long, value_enum, env = "NDAU_OUTPUT")]
    output: Option<OutputFormat>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "NDAU_KEYADDR_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    /// Layer flags over the config file (if any) over the defaults.
    fn resolve_config(&self) -> anyhow::Result<KeyaddrConfig> {
        let base = match &self.config {
            Some(path) => KeyaddrConfig::from_toml_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => KeyaddrConfig::default(),
        };

        Ok(KeyaddrConfig {
            language: self.lang.clone().unwrap_or(base.language),
            log_level: self.log_level.clone().unwrap_or(base.log_level),
            output: self.output.unwrap_or(base.output),
        })
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_line(&err));
            ExitCode::FAILURE
        }
    }
}

/// The error and its context chain on one line.
fn error_line(err: &anyhow::Error) -> String {
    format!("error: {err:#}")
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config()?;
    ndau_utils::init_tracing(&config.log_level);

    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let output = commands::run(&cli.command, &config)?;
    println!("{}", output.render(config.output)?);
    Ok(())
}
