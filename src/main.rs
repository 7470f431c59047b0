//! threadsum CLI entry point

use anyhow::{Context, Result};
use std::io;
use threadsum::config::{cli::Cli, toml::load_config, validator::validate_config};
use threadsum::logger;
use threadsum::runner::{print_configuration, run};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Config is loaded first so a TOML `debug = true` also raises the log level
    let config = load_config(&cli)?;
    logger::init(logger::level_for(config.runtime.debug))
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    validate_config(&config).context("Configuration validation failed")?;
    print_configuration(&config);

    if config.runtime.dry_run {
        println!("Dry run mode - configuration validated successfully");
        println!("  Workload: {}", config.workload);
        return Ok(());
    }

    let stdout = io::stdout();
    run(&config, &mut stdout.lock())?;
    Ok(())
}
