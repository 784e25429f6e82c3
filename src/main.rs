mod cli;

use std::io::Read;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use cpu_schedule::config::EngineConfig;
use cpu_schedule::models::{Algorithm, Process, ScheduleResult};
use cpu_schedule::render::render_text;
use cpu_schedule::scheduler::{ScheduleMetrics, Scheduler};
use cpu_schedule::validation::validate_processes;
use cpu_schedule::workload::{generate, WorkloadSpec};

use crate::cli::CliArgs;

#[derive(Serialize)]
struct Report<'a> {
    algorithm: Algorithm,
    #[serde(flatten)]
    result: &'a ScheduleResult,
    metrics: ScheduleMetrics,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let mut config = match args.config.as_deref() {
        Some(path) => EngineConfig::load(path).context("failed to load engine config")?,
        None => EngineConfig::default(),
    };
    if let Some(quantum) = args.quantum {
        config.rr_quantum = quantum;
        config.feedback_quantum = quantum;
    }
    if let Some(levels) = args.levels {
        config.feedback_levels = levels;
    }
    let scheduler = Scheduler::with_config(config).context("invalid engine configuration")?;

    let processes = load_processes(&args)?;
    info!(processes = processes.len(), "Loaded process list");

    let algorithms: Vec<Algorithm> = if args.all {
        Algorithm::ALL.to_vec()
    } else {
        vec![Algorithm::from_id_or_default(&args.algorithm)]
    };

    let results: Vec<(Algorithm, ScheduleResult)> = algorithms
        .into_iter()
        .map(|a| (a, scheduler.schedule(&processes, a)))
        .collect();

    if args.json {
        print_json(&results, &processes)?;
    } else {
        for (algorithm, result) in &results {
            print_text(*algorithm, result, &processes, args.width);
        }
    }

    if results.iter().any(|(_, r)| r.has_error) {
        let messages = match validate_processes(&processes) {
            Err(errors) => errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; "),
            Ok(_) => String::new(),
        };
        bail!("invalid process list: {messages}");
    }

    Ok(())
}

fn load_processes(args: &CliArgs) -> Result<Vec<Process>> {
    if let Some(count) = args.random {
        let mut rng = StdRng::seed_from_u64(args.seed);
        return Ok(generate(&WorkloadSpec::new(count), &mut rng));
    }

    let content = match args.input.as_deref() {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read process list from stdin")?;
            buf
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read process list from {path}"))?,
    };

    serde_json::from_str(&content).context("process list is not a valid JSON array of processes")
}

fn print_json(results: &[(Algorithm, ScheduleResult)], processes: &[Process]) -> Result<()> {
    let reports: Vec<Report<'_>> = results
        .iter()
        .map(|(algorithm, result)| Report {
            algorithm: *algorithm,
            result,
            metrics: ScheduleMetrics::calculate(result, processes),
        })
        .collect();

    let serialized = match reports.as_slice() {
        [single] => serde_json::to_string_pretty(single),
        all => serde_json::to_string_pretty(all),
    };
    let json = serialized.context("failed to serialize results")?;
    println!("{json}");
    Ok(())
}

fn print_text(algorithm: Algorithm, result: &ScheduleResult, processes: &[Process], width: usize) {
    println!("== {} ==", algorithm.label());
    print!("{}", render_text(result, processes, width));
    if result.has_error || result.is_empty() {
        println!();
        return;
    }

    let metrics = ScheduleMetrics::calculate(result, processes);
    println!();
    println!(
        "{:<8} {:>8} {:>8} {:>10} {:>10} {:>8} {:>8} {:>8}",
        "process", "arrival", "service", "finish", "turnaround", "waiting", "response", "tr/ts"
    );
    for m in &metrics.processes {
        println!(
            "{:<8} {:>8.2} {:>8.2} {:>10.2} {:>10.2} {:>8.2} {:>8.2} {:>8.2}",
            m.name,
            m.arrival_time,
            m.service_time,
            m.completion_time,
            m.turnaround_time,
            m.waiting_time,
            m.response_time,
            m.normalized_turnaround
        );
    }
    println!(
        "{:<8} {:>8} {:>8} {:>10} {:>10.2} {:>8.2} {:>8.2} {:>8.2}",
        "mean",
        "",
        "",
        "",
        metrics.avg_turnaround_time,
        metrics.avg_waiting_time,
        metrics.avg_response_time,
        metrics.avg_normalized_turnaround
    );
    println!(
        "total time {:.2}, utilization {:.1}%, throughput {:.3}/unit, context switches {}",
        result.total_time,
        metrics.cpu_utilization * 100.0,
        metrics.throughput,
        metrics.context_switches
    );
    println!();
}
