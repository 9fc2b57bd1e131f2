//! Verdict explanation
//!
//! Pure-text narrative for a health report: per-metric comparison lines,
//! the reason a HEALTHY host passed, or remediation hints when every
//! metric is saturated. No side effects.

use std::fmt::Write;

use crate::reading::UtilizationReading;
use crate::report::HealthReport;
use crate::verdict::HealthState;

/// Render the reasoning behind a report's verdict.
pub fn explain(report: &HealthReport) -> String {
    let mut out = String::new();

    let metrics = [
        ("CPU", report.cpu, report.verdict.below_threshold.cpu),
        ("Memory", report.memory, report.verdict.below_threshold.memory),
        ("Disk", report.disk, report.verdict.below_threshold.disk),
    ];

    for (name, reading, below) in metrics {
        let _ = writeln!(
            out,
            "{}: {} {} {:.1}% threshold -> {}",
            name,
            reading,
            if below { "<" } else { ">=" },
            report.threshold_percent,
            interpret(name, reading, below),
        );
    }

    match report.verdict.state {
        HealthState::Healthy => {
            let passing: Vec<&str> = report
                .verdict
                .below_threshold
                .named()
                .iter()
                .filter(|(_, below)| *below)
                .map(|(name, _)| *name)
                .collect();
            let _ = writeln!(
                out,
                "Verdict: HEALTHY - below threshold: {}",
                passing.join(", ")
            );
        },
        HealthState::Unhealthy => {
            let _ = writeln!(
                out,
                "Verdict: UNHEALTHY - all metrics at or above {:.1}% (cpu {}, memory {}, disk {})",
                report.threshold_percent, report.cpu, report.memory, report.disk
            );
            let _ = writeln!(out, "Hints:");
            let _ = writeln!(
                out,
                "  CPU: look for runaway processes (top/htop) or move load off this host"
            );
            let _ = writeln!(
                out,
                "  Memory: check for leaking processes, or add swap/RAM"
            );
            let _ = writeln!(
                out,
                "  Disk: clear logs and caches, or grow the fullest filesystem"
            );
        },
    }

    out
}

fn interpret(name: &str, reading: UtilizationReading, below: bool) -> String {
    if !reading.valid {
        return format!("{name} could not be measured, counted at 0.0%");
    }
    if below {
        format!("{name} has headroom")
    } else {
        format!("{name} is saturated")
    }
}
