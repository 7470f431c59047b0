//! Configuration validation

use super::*;
use crate::error::SumError;
use anyhow::Result;
use log::warn;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_workload(&config.workload)?;
    validate_output(&config.output)?;

    Ok(())
}

/// Validate workload configuration
pub fn validate_workload(workload: &WorkloadConfig) -> Result<()> {
    if workload.threads == 0 || workload.threads > MAX_THREADS {
        return Err(SumError::InvalidThreadCount(workload.threads).into());
    }

    if workload.min > workload.max {
        return Err(SumError::InvalidRange {
            min: workload.min,
            max: workload.max,
        }
        .into());
    }

    // The largest possible sum must fit the accumulator
    if workload.samples.checked_mul(u64::from(workload.max)).is_none() {
        return Err(SumError::AccumulatorOverflow {
            samples: workload.samples,
            max: workload.max,
        }
        .into());
    }

    let cpus = num_cpus::get();
    if workload.threads > cpus {
        warn!(
            "{} worker threads requested but only {} logical CPUs available",
            workload.threads, cpus
        );
    }

    if workload.samples == 0 {
        warn!("samples = 0: every worker will report 0 and the best worker is an arbitrary tie");
    }

    Ok(())
}

/// Validate output configuration
pub fn validate_output(output: &OutputConfig) -> Result<()> {
    if let Some(ref path) = output.json_output {
        if path.is_dir() {
            anyhow::bail!("JSON output path {} is a directory", path.display());
        }
    }

    if output.quiet && output.json_output.is_none() {
        warn!("--quiet without --json-output: results will not be reported anywhere");
    }

    Ok(())
}
