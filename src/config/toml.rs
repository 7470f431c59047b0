//! TOML configuration file parsing

use super::*;
use crate::config::cli::Cli;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with a base configuration (CLI takes precedence)
///
/// Workload values only override when given on the command line. Boolean
/// switches can only turn a setting on.
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Config {
    if let Some(threads) = cli.threads {
        config.workload.threads = threads;
    }
    if let Some(samples) = cli.samples {
        config.workload.samples = samples;
    }
    if let Some(min) = cli.min {
        config.workload.min = min;
    }
    if let Some(max) = cli.max {
        config.workload.max = max;
    }
    if cli.seed.is_some() {
        config.workload.seed = cli.seed;
    }

    if let Some(ref path) = cli.json_output {
        config.output.json_output = Some(path.clone());
    }
    config.output.json_pretty |= cli.json_pretty;
    config.output.show_summary |= cli.summary;
    config.output.quiet |= cli.quiet;

    config.runtime.debug |= cli.debug;
    config.runtime.dry_run |= cli.dry_run;

    config
}

/// Build the effective configuration: defaults, then `--config`, then flags
pub fn load_config(cli: &Cli) -> Result<Config> {
    let base = match cli.config {
        Some(ref path) => parse_toml_file(path)?,
        None => Config::default(),
    };

    Ok(merge_cli_with_config(cli, base))
}
