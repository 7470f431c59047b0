//! JSON output formatting
//!
//! Serializes a finished run: the workload that produced it, every worker's
//! sum and timing, the best worker and aggregate statistics.

use crate::config::WorkloadConfig;
use crate::coordinator::RunReport;
use crate::stats::AggregateStats;
use crate::util::time::format_duration;
use crate::Result;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Duration with both microseconds and human-readable format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonDuration {
    pub micros: u64,
    pub human: String,
}

impl JsonDuration {
    pub fn from_duration(d: Duration) -> Self {
        let micros = d.as_micros() as u64;
        let human = format_duration(d);
        Self { micros, human }
    }
}

/// Workload echo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonWorkload {
    pub threads: usize,
    pub samples: u64,
    pub min: u32,
    pub max: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl From<&WorkloadConfig> for JsonWorkload {
    fn from(w: &WorkloadConfig) -> Self {
        Self {
            threads: w.threads,
            samples: w.samples,
            min: w.min,
            max: w.max,
            seed: w.seed,
        }
    }
}

/// One worker row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonWorker {
    pub id: usize,
    pub sum: u64,
    pub samples: u64,
    pub elapsed: JsonDuration,
}

/// The worker with the largest sum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonBest {
    pub id: usize,
    pub sum: u64,
}

/// Complete JSON report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonReport {
    /// RFC 3339 timestamp of report creation
    pub generated_at: String,
    pub version: String,
    pub workload: JsonWorkload,
    pub workers: Vec<JsonWorker>,
    pub best: JsonBest,
    pub aggregate: AggregateStats,
    pub elapsed: JsonDuration,
}

/// Build the JSON report for a finished run
pub fn build_json_report(report: &RunReport, workload: &WorkloadConfig) -> Result<JsonReport> {
    let (best_id, best_sum) = report.best()?;

    let workers = report
        .results()
        .map(|r| JsonWorker {
            id: r.id,
            sum: r.sum,
            samples: r.samples,
            elapsed: JsonDuration::from_duration(r.elapsed),
        })
        .collect();

    Ok(JsonReport {
        generated_at: chrono::Local::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        workload: JsonWorkload::from(workload),
        workers,
        best: JsonBest {
            id: best_id,
            sum: best_sum,
        },
        aggregate: report.aggregate(),
        elapsed: JsonDuration::from_duration(report.elapsed()),
    })
}

/// Write JSON output to file
pub fn write_json_output(output_path: &Path, report: &JsonReport, pretty: bool) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create JSON output file: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(&mut writer, report)?;
    } else {
        serde_json::to_writer(&mut writer, report)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinator::Coordinator;
    use tempfile::TempDir;

    fn sample_report() -> (RunReport, WorkloadConfig) {
        let workload = WorkloadConfig {
            threads: 4,
            samples: 50,
            min: 1,
            max: 100,
            seed: Some(3),
        };
        let report = Coordinator::from_workload(&workload).run_all().unwrap();
        (report, workload)
    }

    #[test]
    fn test_json_duration() {
        let d = JsonDuration::from_duration(Duration::from_micros(1500));
        assert_eq!(d.micros, 1500);
        assert_eq!(d.human, "1.50ms");
    }

    #[test]
    fn test_build_json_report() {
        let (report, workload) = sample_report();
        let json = build_json_report(&report, &workload).unwrap();

        assert_eq!(json.workload, JsonWorkload::from(&workload));
        assert_eq!(json.workers.len(), 4);
        assert_eq!(json.aggregate.workers, 4);

        let max = json.workers.iter().map(|w| w.sum).max().unwrap();
        assert_eq!(json.best.sum, max);
        assert_eq!(json.workers[json.best.id].sum, max);
        assert!(chrono::DateTime::parse_from_rfc3339(&json.generated_at).is_ok());
    }

    #[test]
    fn test_write_json_output() {
        let (report, workload) = sample_report();
        let json = build_json_report(&report, &workload).unwrap();

        let dir = TempDir::new().unwrap();
        for pretty in [false, true] {
            let path = dir.path().join(format!("report-{}.json", pretty));
            write_json_output(&path, &json, pretty).unwrap();

            let contents = std::fs::read_to_string(&path).unwrap();
            let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
            assert_eq!(parsed["workload"]["threads"], 4);
            assert_eq!(parsed["workload"]["seed"], 3);
            assert_eq!(parsed["workers"].as_array().unwrap().len(), 4);
            assert_eq!(parsed["best"]["sum"], json.best.sum);
        }
    }

    #[test]
    fn test_seed_omitted_when_unset() {
        let workload = WorkloadConfig::default();
        let value = serde_json::to_value(JsonWorkload::from(&workload)).unwrap();
        assert!(value.get("seed").is_none());
    }

    #[test]
    fn test_write_json_output_bad_path() {
        let (report, workload) = sample_report();
        let json = build_json_report(&report, &workload).unwrap();
        let err = write_json_output(Path::new("/nonexistent/dir/out.json"), &json, false).unwrap_err();
        assert!(err.to_string().contains("Failed to create JSON output file"));
    }
}
