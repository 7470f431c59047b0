//! Run a validated configuration end to end
//!
//! Spawns the workers, writes the console report and the optional JSON
//! report. The binary only adds argument parsing and logger setup on top.

use crate::config::Config;
use crate::coordinator::{Coordinator, RunReport};
use crate::output::{json, text};
use crate::Result;
use anyhow::Context;
use log::debug;
use std::io::Write;

/// Run every worker and emit the reports `config` asks for
///
/// The console report goes to `out` unless `output.quiet` is set.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<RunReport> {
    let coordinator = Coordinator::from_workload(&config.workload);
    let report = coordinator.run_all()?;

    if !config.output.quiet {
        text::write_report(out, &report, &config.workload, config.output.show_summary)?;
        out.flush()?;
    }

    if let Some(ref path) = config.output.json_output {
        let json_report = json::build_json_report(&report, &config.workload)?;
        json::write_json_output(path, &json_report, config.output.json_pretty)
            .with_context(|| format!("Failed to write JSON report to {}", path.display()))?;
        debug!("JSON report written to {}", path.display());
    }

    Ok(report)
}

/// Log the effective configuration
pub fn print_configuration(config: &Config) {
    debug!("Configuration:");
    debug!("  Workload: {}", config.workload);
    debug!("  Logical CPUs: {}", num_cpus::get());
    if let Some(ref path) = config.output.json_output {
        debug!("  JSON output: {} (pretty: {})", path.display(), config.output.json_pretty);
    }
    debug!(
        "  Summary: {}, quiet: {}, dry run: {}",
        config.output.show_summary, config.output.quiet, config.runtime.dry_run
    );
}
