//! Chart geometry, colors and a text Gantt chart.
//!
//! The geometry helpers express each slot as percentages of the total time
//! so any front-end can lay out bars without knowing the time scale.

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::models::{Process, ScheduleResult, TimeSlot};

/// Bar colors, indexed by `(first letter - 'A') mod 8`.
pub const PALETTE: [&str; 8] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#06b6d4", "#84cc16",
];

/// Width of a slot as a percentage of `total_time` (0 when `total_time` is 0).
pub fn slot_width_percent(slot: &TimeSlot, total_time: f64) -> f64 {
    if total_time == 0.0 {
        return 0.0;
    }
    slot.duration() / total_time * 100.0
}

/// Left offset of a slot as a percentage of `total_time` (0 when `total_time` is 0).
pub fn slot_left_percent(slot: &TimeSlot, total_time: f64) -> f64 {
    if total_time == 0.0 {
        return 0.0;
    }
    slot.start_time / total_time * 100.0
}

/// Deterministic palette color for a process name.
///
/// Names below `A` wrap around the palette; an empty name gets the first color.
pub fn process_color(name: &str) -> &'static str {
    let Some(first) = name.chars().next() else {
        return PALETTE[0];
    };
    let offset = i64::from(u32::from(first)) - i64::from(u32::from('A'));
    // rem_euclid keeps the index in 0..8 for names below 'A'.
    PALETTE[offset.rem_euclid(PALETTE.len() as i64) as usize]
}

/// Unique process names, sorted.
pub fn process_names(processes: &[Process]) -> Vec<&str> {
    processes
        .iter()
        .map(|p| p.name.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Slots of one process.
pub fn slots_for_process<'a>(result: &'a ScheduleResult, name: &str) -> Vec<&'a TimeSlot> {
    result.slots_for_process(name)
}

/// Renders a fixed-width text Gantt chart.
///
/// One row per process name (sorted), `#` where the process holds the CPU,
/// `.` elsewhere, followed by a time axis. `width` is the number of chart
/// columns (at least 1). Rejected or empty results render a one-line notice.
///
/// ```text
/// A |#.#.#|
/// B |.#.#.|
///   0    5
/// ```
pub fn render_text(result: &ScheduleResult, processes: &[Process], width: usize) -> String {
    if result.has_error {
        return "Invalid input: every process needs an arrival time and a processing time > 0\n"
            .to_string();
    }
    if result.is_empty() || result.total_time <= 0.0 {
        return "Nothing to schedule\n".to_string();
    }

    let width = width.max(1);
    let names = process_names(processes);
    let label_width = names.iter().map(|n| n.chars().count()).max().unwrap_or(1);
    let scale = width as f64 / result.total_time;
    let mut out = String::new();

    for name in &names {
        let mut row = vec!['.'; width];
        for slot in result.slots_for_process(name) {
            let start = (slot.start_time * scale).round() as usize;
            // Every slot covers at least one column.
            let end = ((slot.end_time * scale).round() as usize).max(start + 1).min(width);
            for cell in row.iter_mut().take(end).skip(start) {
                *cell = '#';
            }
        }
        let row: String = row.into_iter().collect();
        let _ = writeln!(out, "{name:>label_width$} |{row}|");
    }

    let total = format_time(result.total_time);
    let gap = width.saturating_sub(total.len());
    let _ = writeln!(out, "{:label_width$}  0{:gap$}{total}", "", "");
    out
}

fn format_time(t: f64) -> String {
    if t.fract() == 0.0 {
        format!("{t:.0}")
    } else {
        format!("{t:.2}")
    }
}
