//! Scheduling performance metrics.
//!
//! Derives per-process and aggregate indicators from a finished run's
//! process states and timeline.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |
//! | Makespan | latest timeline end |
//! | CPU utilization | busy time / (makespan - first dispatch) |
//! | Throughput | processes / (makespan - first dispatch) |
//! | Context switches | pid changes between consecutive timeline entries |
//!
//! Averages are arithmetic means over all processes.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", §5.2

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Pid, ProcessState, Time, Timeline};

/// Outcome of one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Process identifier.
    pub pid: Pid,
    /// Arrival time as submitted.
    pub arrival: Time,
    /// Total CPU time required.
    pub burst: Time,
    /// Priority as submitted (lower = higher priority).
    pub priority: i32,
    /// Time the process finished.
    pub completion: Time,
    /// Time spent ready but not running.
    pub waiting: Time,
    /// Time from arrival to completion.
    pub turnaround: Time,
    /// Time from arrival to first dispatch.
    pub response: Time,
}

/// Aggregate indicators for a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// Largest waiting time of any process.
    pub max_waiting: Time,
    /// Largest turnaround time of any process.
    pub max_turnaround: Time,
    /// Latest timeline end.
    pub makespan: Time,
    /// Total CPU time spent executing processes.
    pub total_busy_time: Time,
    /// Fraction of the active window the CPU was busy (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit over the active window.
    pub throughput: f64,
    /// Number of dispatches that changed the running process.
    pub context_switches: usize,
}

/// Per-process results plus aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// One result per process, ordered by ascending pid.
    pub results: Vec<ProcessResult>,
    /// Aggregate indicators.
    pub summary: MetricsSummary,
}

impl ProcessResult {
    /// Derives the result for a finished process.
    pub fn from_state(state: &ProcessState) -> Result<Self> {
        let (Some(completion), Some(first_start)) = (state.completion, state.first_start) else {
            return Err(Error::IncompleteRun { pid: state.pid() });
        };
        let turnaround = completion - state.arrival();
        Ok(Self {
            pid: state.pid(),
            arrival: state.arrival(),
            burst: state.burst(),
            priority: state.priority(),
            completion,
            waiting: turnaround - state.burst(),
            turnaround,
            response: first_start - state.arrival(),
        })
    }
}

impl Metrics {
    /// Computes metrics for a finished run.
    ///
    /// # Errors
    /// - [`Error::EmptyProcessSet`] if `states` is empty.
    /// - [`Error::IncompleteRun`] if any process has not completed.
    pub fn calculate(states: &[ProcessState], timeline: &Timeline) -> Result<Self> {
        if states.is_empty() {
            return Err(Error::EmptyProcessSet);
        }

        let mut results = states
            .iter()
            .map(ProcessResult::from_state)
            .collect::<Result<Vec<_>>>()?;
        results.sort_by_key(|r| r.pid);

        // Totals in f64; per-process values can sum past `Time::MAX`
        let n = results.len() as f64;
        let total_waiting: f64 = results.iter().map(|r| r.waiting as f64).sum();
        let total_turnaround: f64 = results.iter().map(|r| r.turnaround as f64).sum();
        let total_response: f64 = results.iter().map(|r| r.response as f64).sum();

        let makespan = timeline.makespan();
        let total_busy_time = timeline.total_busy_time();
        let window = timeline
            .first_start()
            .map(|start| makespan - start)
            .unwrap_or(0);

        let (cpu_utilization, throughput) = if window > 0 {
            (total_busy_time as f64 / window as f64, n / window as f64)
        } else {
            (0.0, 0.0)
        };

        let summary = MetricsSummary {
            avg_waiting: total_waiting / n,
            avg_turnaround: total_turnaround / n,
            avg_response: total_response / n,
            max_waiting: results.iter().map(|r| r.waiting).max().unwrap_or(0),
            max_turnaround: results.iter().map(|r| r.turnaround).max().unwrap_or(0),
            makespan,
            total_busy_time,
            cpu_utilization,
            throughput,
            context_switches: timeline.context_switches(),
        };

        Ok(Self { results, summary })
    }

    /// Result for a given pid.
    pub fn result_for(&self, pid: Pid) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.pid == pid)
    }
}
