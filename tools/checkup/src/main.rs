//! checkup - single-shot host health check
//!
//! Samples CPU, memory, and disk utilization, compares each against one
//! threshold, and reports a HEALTHY/UNHEALTHY verdict.
//!
//! Exit codes (a contract other tooling depends on):
//!   0 - healthy
//!   1 - unhealthy
//!   2 - configuration/argument error

use anyhow::Result;
use clap::Parser;
use colored::*;

use vitals::{explain::explain, HealthReport, HealthState, ThresholdPolicy, UtilizationReading};

#[derive(Parser)]
#[command(name = "checkup")]
#[command(about = "Single-shot host health check: CPU, memory, and disk vs one threshold")]
#[command(long_about = "Single-shot host health check.

Samples CPU utilization over a short interval, current memory usage, and
the fullest mounted filesystem, then compares each against one threshold.
The host is HEALTHY if any metric is strictly below the threshold and
UNHEALTHY only when all three are at or above it.

Examples:
  checkup                         # defaults: 60% threshold, 1s CPU window
  checkup -t 80 -i 2              # stricter threshold, longer CPU window
  checkup --explain               # include per-metric reasoning
  checkup --json                  # machine-readable report

Exit codes: 0 healthy, 1 unhealthy, 2 configuration error.")]
#[command(version)]
struct Cli {
    /// Utilization threshold percentage (>= 0)
    #[arg(short, long, default_value = "60.0", value_parser = threshold_arg)]
    threshold: f64,

    /// CPU sampling window in seconds (0 = two back-to-back reads)
    #[arg(short, long, default_value = "1", value_parser = interval_arg)]
    interval: u64,

    /// Print per-metric reasoning for the verdict
    #[arg(short, long)]
    explain: bool,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn threshold_arg(input: &str) -> Result<f64, String> {
    vitals::policy::parse_threshold(input).map_err(|e| e.to_string())
}

fn interval_arg(input: &str) -> Result<u64, String> {
    vitals::policy::parse_interval(input).map_err(|e| e.to_string())
}

fn main() {
    // Clap usage errors already exit with code 2
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .init();

    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            std::process::exit(2);
        },
    }
}

fn run(cli: &Cli) -> Result<i32> {
    let policy = ThresholdPolicy::new(cli.threshold, cli.interval)?;

    let report = HealthReport::collect(&policy);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, cli.explain);
    }

    Ok(match report.verdict.state {
        HealthState::Healthy => 0,
        HealthState::Unhealthy => 1,
    })
}

fn print_report(report: &HealthReport, with_explanation: bool) {
    println!("{}", "Host vitals".bold());
    println!("  CPU:       {}", format_reading(report.cpu));
    println!("  Memory:    {}", format_reading(report.memory));
    println!("  Disk:      {}", format_reading(report.disk));
    if !report.mounts.is_empty() {
        let detail = report
            .mounts
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("  ");
        println!("  Mounts:    {}", detail.dimmed());
    }
    println!("  Threshold: {:.1}%", report.threshold_percent);

    let keyword = match report.verdict.state {
        HealthState::Healthy => "HEALTHY".green().bold(),
        HealthState::Unhealthy => "UNHEALTHY".red().bold(),
    };
    println!("  Verdict:   {keyword}");

    if with_explanation {
        println!();
        print!("{}", explain(report));
    }
}

fn format_reading(reading: UtilizationReading) -> String {
    if reading.valid {
        reading.to_string()
    } else {
        format!("{reading} {}", "(not measured)".yellow())
    }
}
