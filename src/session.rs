//! Process table and chart session.
//!
//! `ProcessTable` is the editable list of process rows. `SchedulerSession`
//! pairs it with the selected algorithm and the last computed chart, and
//! decides when a chart becomes stale:
//!
//! - editing the processes clears the chart only when no row is valid
//! - changing the algorithm always clears the chart
//! - `generate()` recomputes from the current snapshot
//!
//! Every mutation carries the full new value; there is no event bus.

use tracing::debug;

use crate::models::{Algorithm, Process, ScheduleResult};
use crate::scheduler::Scheduler;
use crate::validation::has_valid_process;

/// Editable, ordered list of process definitions.
///
/// Never empty: removing the last row is refused and clearing leaves a
/// single blank row named `A`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessTable {
    rows: Vec<Process>,
}

impl Default for ProcessTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessTable {
    /// Starts with one row: `A`, arriving at 0, burst not set.
    pub fn new() -> Self {
        Self {
            rows: vec![Process::new("A").with_arrival(0.0)],
        }
    }

    /// Wraps an existing list; an empty list becomes a single blank row.
    pub fn from_processes(rows: Vec<Process>) -> Self {
        if rows.is_empty() {
            let mut table = Self::new();
            table.clear_all();
            table
        } else {
            Self { rows }
        }
    }

    /// Current rows.
    pub fn processes(&self) -> &[Process] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows. Never true for a table built through this API.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Name for the next row: the last row's first character plus one.
    pub fn next_process_name(&self) -> String {
        self.rows
            .last()
            .and_then(|p| p.name.chars().next())
            .and_then(|c| char::from_u32(u32::from(c) + 1))
            .map(String::from)
            .unwrap_or_else(|| "A".to_string())
    }

    /// Appends a blank row and returns its index.
    pub fn add_process(&mut self) -> usize {
        let name = self.next_process_name();
        self.rows.push(Process::new(name));
        self.rows.len() - 1
    }

    /// Removes a row unless it is the only one. Returns whether a row was removed.
    pub fn remove_process(&mut self, index: usize) -> bool {
        if self.rows.len() <= 1 || index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        true
    }

    /// Resets to a single blank row named `A`.
    pub fn clear_all(&mut self) {
        self.rows = vec![Process::new("A")];
    }

    /// Edits the times of a row. Returns false for an out-of-range index.
    pub fn set_times(&mut self, index: usize, arrival: Option<f64>, processing: Option<f64>) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.arrival_time = arrival;
                row.processing_time = processing;
                true
            }
            None => false,
        }
    }
}

/// Process snapshot, algorithm choice and the chart computed from them.
#[derive(Debug, Clone, Default)]
pub struct SchedulerSession {
    table: ProcessTable,
    algorithm: Algorithm,
    scheduler: Scheduler,
    chart: ScheduleResult,
}

impl SchedulerSession {
    /// Creates a session with the default table, Round Robin and default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session around an existing engine.
    pub fn with_scheduler(scheduler: Scheduler) -> Self {
        Self {
            scheduler,
            ..Self::default()
        }
    }

    /// Current process snapshot.
    pub fn processes(&self) -> &[Process] {
        self.table.processes()
    }

    /// Mutable access to the table. Edits made here do not touch the chart.
    pub fn table_mut(&mut self) -> &mut ProcessTable {
        &mut self.table
    }

    /// Selected algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Last computed chart.
    pub fn result(&self) -> &ScheduleResult {
        &self.chart
    }

    /// Replaces the process list. Clears the chart if no process is valid.
    pub fn set_processes(&mut self, processes: Vec<Process>) {
        if !has_valid_process(&processes) {
            debug!("No valid process left, clearing chart");
            self.clear_chart();
        }
        self.table = ProcessTable::from_processes(processes);
    }

    /// Selects an algorithm and clears the chart.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.clear_chart();
    }

    /// Recomputes the chart from the current snapshot.
    pub fn generate(&mut self) -> &ScheduleResult {
        self.chart = self.scheduler.schedule(self.table.processes(), self.algorithm);
        &self.chart
    }

    fn clear_chart(&mut self) {
        self.chart.timeline.clear();
        self.chart.total_time = 0.0;
    }
}
