//! Random workload generation.
//!
//! Produces integral-valued process sets for demos and property checks.
//! Names follow the process table convention: `A`, `B`, `C`, ... and
//! continue past `Z` through the following code points.

use rand::Rng;

use crate::models::Process;

/// Shape of a generated workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadSpec {
    /// Number of processes.
    pub count: usize,
    /// Arrival times are drawn from `0..=max_arrival`.
    pub max_arrival: u32,
    /// Bursts are drawn from `1..=max_burst`.
    pub max_burst: u32,
}

impl WorkloadSpec {
    /// Creates a spec for `count` processes (arrivals up to 10, bursts up to 8).
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            max_burst: 8,
        }
    }

    /// Sets the latest possible arrival.
    pub fn with_max_arrival(mut self, max_arrival: u32) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the longest possible burst (at least 1).
    pub fn with_max_burst(mut self, max_burst: u32) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }
}

/// Generates a random, fully valid process list.
pub fn generate<R: Rng>(spec: &WorkloadSpec, rng: &mut R) -> Vec<Process> {
    let max_burst = spec.max_burst.max(1);
    (0..spec.count)
        .map(|i| {
            let arrival = rng.random_range(0..=spec.max_arrival);
            let burst = rng.random_range(1..=max_burst);
            Process::with_times(process_name(i), f64::from(arrival), f64::from(burst))
        })
        .collect()
}

/// Name of the `i`-th process (`0 → "A"`).
pub fn process_name(i: usize) -> String {
    u32::try_from(i)
        .ok()
        .and_then(|i| char::from_u32(u32::from(b'A') + i))
        .map(String::from)
        .unwrap_or_else(|| format!("P{i}"))
}
