use clap::Parser;

/// Simulate uniprocessor CPU scheduling and print a Gantt chart.
///
/// Reads a JSON array of processes (`[{"name":"A","arrivalTime":0,"processingTime":3}, ...]`)
/// or generates a random workload, runs the selected algorithm and prints
/// the timeline with per-process metrics.
#[derive(Parser, Debug)]
#[command(name = "cpu-schedule", about = "Uniprocessor CPU-scheduling simulator")]
pub struct CliArgs {
    /// JSON file with the process list ("-" reads stdin)
    #[arg(long, short, conflicts_with = "random")]
    pub input: Option<String>,

    /// Generate N random processes instead of reading a file
    #[arg(long)]
    pub random: Option<usize>,

    /// Seed for --random (default: fixed seed 0)
    #[arg(long, default_value = "0")]
    pub seed: u64,

    /// Algorithm: RR, SPN, SRT, HRRN or Feedback (unknown values fall back to RR)
    #[arg(long, short, default_value = "RR", env = "CPU_SCHEDULE_ALGORITHM")]
    pub algorithm: String,

    /// Run every algorithm on the same input
    #[arg(long)]
    pub all: bool,

    /// Path to a TOML engine config
    #[arg(long, env = "CPU_SCHEDULE_CONFIG")]
    pub config: Option<String>,

    /// Time quantum for RR and Feedback (overrides the config file)
    #[arg(long)]
    pub quantum: Option<f64>,

    /// Number of Feedback queues (overrides the config file)
    #[arg(long)]
    pub levels: Option<usize>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Chart width in columns for text output
    #[arg(long, default_value = "60")]
    pub width: usize,
}
