//! Human-readable text output

use crate::config::WorkloadConfig;
use crate::coordinator::RunReport;
use crate::util::time::{calculate_rate, format_duration, format_rate};
use crate::Result;
use std::io::{self, Write};

/// Write the fixed-format report
///
/// One row per worker in id order, then the worker with the largest sum. With
/// `show_summary` an aggregate block follows.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &RunReport,
    workload: &WorkloadConfig,
    show_summary: bool,
) -> Result<()> {
    writeln!(
        out,
        "Results per thread (sum of {} numbers between {} and {}):",
        workload.samples, workload.min, workload.max
    )?;
    for (id, total) in report.summaries() {
        writeln!(out, "  Thread #{} -> total = {}", id, total)?;
    }

    let (best_id, best_total) = report.best()?;
    writeln!(out)?;
    writeln!(
        out,
        "The thread with the highest score is #{} with {} points.",
        best_id, best_total
    )?;

    if show_summary {
        write_summary(out, report)?;
    }

    Ok(())
}

fn write_summary<W: Write>(out: &mut W, report: &RunReport) -> io::Result<()> {
    let stats = report.aggregate();
    let samples = u64::try_from(stats.total_samples).unwrap_or(u64::MAX);
    let rate = calculate_rate(samples, report.elapsed());

    writeln!(out)?;
    writeln!(out, "Summary:")?;
    writeln!(out, "  Workers:   {}", stats.workers)?;
    writeln!(out, "  Samples:   {}", format_number(stats.total_samples))?;
    writeln!(out, "  Total sum: {}", format_number(stats.total_sum))?;
    writeln!(out, "  Mean sum:  {:.2}", stats.mean_sum)?;
    writeln!(
        out,
        "  Spread:    {} .. {} ({})",
        format_number(u128::from(stats.min_sum)),
        format_number(u128::from(stats.max_sum)),
        format_number(u128::from(stats.max_sum - stats.min_sum))
    )?;
    writeln!(
        out,
        "  Elapsed:   {} ({} samples/s)",
        format_duration(report.elapsed()),
        format_rate(rate)
    )?;
    Ok(())
}

/// Format a number with thousands separators
fn format_number(n: u128) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (count, c) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}
