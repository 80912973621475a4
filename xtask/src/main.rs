use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Keelson workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the criterion benchmarks and summarize them
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Where to write the markdown report
        #[arg(long, default_value = "benchmark_results/report.md")]
        output: PathBuf,
    },
}

const BENCHES: &[&str] = &[
    "binary_heap_benchmark",
    "priority_queue_benchmark",
    "hash_table_benchmark",
    "graph_benchmark",
];

#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            output,
        } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report(&output)?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    for bench in BENCHES {
        println!("\n>>> Running {bench}");
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.arg("bench").arg("--bench").arg(bench);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd
            .status()
            .with_context(|| format!("failed to spawn cargo bench for {bench}"))?;

        if !status.success() {
            anyhow::bail!("benchmark {bench} failed with {status}");
        }
        println!("Finished {bench} in {:.2?}", start.elapsed());
    }

    Ok(())
}

fn generate_report(report_path: &Path) -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    // group -> function -> mean nanoseconds
    let mut results: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    collect_results(criterion_dir, criterion_dir, &mut results)?;

    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("creating {}", report_path.display()))?;

    writeln!(file, "# Benchmark Report")?;
    for (group, functions) in &results {
        writeln!(file, "\n## {group}\n")?;
        writeln!(file, "| Benchmark | Mean | vs fastest |")?;
        writeln!(file, "|---|---|---|")?;

        let fastest = functions.values().copied().fold(f64::INFINITY, f64::min);
        for (name, &mean_ns) in functions {
            let rel = if fastest > 0.0 { mean_ns / fastest } else { 0.0 };
            writeln!(file, "| {name} | {} | **{rel:.2}x** |", format_ns(mean_ns))?;
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_ns(ns: f64) -> String {
    if ns >= 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns >= 1_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{ns:.0} ns")
    }
}

/// Walks criterion's output tree, reading every `<group>/<function>/new/estimates.json`.
fn collect_results(
    root: &Path,
    dir: &Path,
    results: &mut BTreeMap<String, BTreeMap<String, f64>>,
) -> Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            if path.file_name().and_then(|s| s.to_str()) == Some("report") {
                continue;
            }
            collect_results(root, &path, results)?;
            continue;
        }

        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }
        let Some(baseline_dir) = path.parent() else { continue };
        if baseline_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(bench_dir) = baseline_dir.parent() else { continue };
        let Ok(relative) = bench_dir.strip_prefix(root) else { continue };

        let mut parts = relative.iter().filter_map(|p| p.to_str());
        let (group, function) = match (parts.next(), parts.next()) {
            (Some(group), Some(function)) => (group.to_string(), function.to_string()),
            (Some(single), None) => (single.to_string(), single.to_string()),
            _ => continue,
        };

        let content =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        let estimates: Estimates = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;

        results
            .entry(group)
            .or_default()
            .insert(function, estimates.mean.point_estimate);
    }

    Ok(())
}
