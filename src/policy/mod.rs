//! CPU scheduling policies.
//!
//! Every policy drives a single simulated clock over a slice of per-run
//! [`ProcessState`]s, dispatching eligible processes until all of them have
//! finished, and returns the [`Timeline`] it produced. Policies record each
//! process's completion time on its state; metrics are derived afterwards.
//!
//! # Clock Discipline
//!
//! The clock starts at 0 and never decreases. A process is eligible at `t`
//! iff `arrival <= t` and `remaining > 0`. When nothing is eligible the
//! clock jumps straight to the next arrival, which yields the same timeline
//! as advancing one unit at a time.
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | FCFS | no | earliest arrival |
//! | SJF | no | shortest burst among arrived |
//! | SRTF | yes | shortest remaining time, re-evaluated on every arrival |
//! | Priority | no | lowest priority number among arrived |
//! | Round-Robin | yes | FIFO queue, fixed quantum |
//!
//! Equal keys resolve by ascending pid unless [`TieBreak::InputOrder`] is
//! requested.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", §2.4

mod fcfs;
mod priority;
mod round_robin;
pub mod rules;
mod sjf;
mod srtf;

pub use fcfs::Fcfs;
pub use priority::Priority;
pub use round_robin::RoundRobin;
pub use rules::{SelectionRule, TieBreak};
pub use sjf::Sjf;
pub use srtf::Srtf;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::Error;
use crate::models::{next_arrival_after, ProcessState, Time, Timeline};

/// Round-Robin quantum used when the caller does not pick one.
pub const DEFAULT_QUANTUM: Time = 2;

/// A scheduling algorithm that turns process states into a timeline.
pub trait SchedulingPolicy: Send + Sync + fmt::Debug {
    /// Short policy name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Whether a running process may be interrupted before it finishes.
    fn is_preemptive(&self) -> bool;

    /// Runs every process to completion.
    ///
    /// On return each state has `remaining == 0` and `completion` set.
    fn run(&self, states: &mut [ProcessState], tie: TieBreak) -> Timeline;
}

/// Algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come, First-Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest Job First (non-preemptive).
    #[serde(rename = "SJF")]
    Sjf,
    /// Shortest Remaining Time First (preemptive SJF).
    #[serde(rename = "SRTF")]
    Srtf,
    /// Non-preemptive priority scheduling.
    #[serde(rename = "Priority")]
    Priority,
    /// Round-Robin with a fixed quantum.
    #[serde(rename = "RR", alias = "RoundRobin")]
    RoundRobin,
}

impl Algorithm {
    /// Every algorithm, in presentation order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    /// Short tag (e.g., "SRTF").
    pub fn tag(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Srtf => "SRTF",
            Algorithm::Priority => "Priority",
            Algorithm::RoundRobin => "RR",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-Come, First-Served (FCFS)",
            Algorithm::Sjf => "Shortest Job First (SJF)",
            Algorithm::Srtf => "Shortest Remaining Time First (SRTF)",
            Algorithm::Priority => "Priority Scheduling",
            Algorithm::RoundRobin => "Round Robin (RR)",
        }
    }

    /// Whether the algorithm preempts running processes.
    pub fn is_preemptive(self) -> bool {
        matches!(self, Algorithm::Srtf | Algorithm::RoundRobin)
    }

    /// Whether the algorithm needs a time quantum.
    pub fn requires_quantum(self) -> bool {
        self == Algorithm::RoundRobin
    }

    /// Builds the policy for this algorithm.
    ///
    /// `quantum` is only read for Round-Robin.
    pub fn policy(self, quantum: Time) -> Box<dyn SchedulingPolicy> {
        match self {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Sjf => Box::new(Sjf),
            Algorithm::Srtf => Box::new(Srtf),
            Algorithm::Priority => Box::new(Priority),
            Algorithm::RoundRobin => Box::new(RoundRobin::new(quantum)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FCFS" => Ok(Algorithm::Fcfs),
            "SJF" => Ok(Algorithm::Sjf),
            "SRTF" => Ok(Algorithm::Srtf),
            "PRIORITY" => Ok(Algorithm::Priority),
            "RR" | "ROUNDROBIN" | "ROUND-ROBIN" => Ok(Algorithm::RoundRobin),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Non-preemptive dispatch loop shared by SJF and Priority.
///
/// Repeatedly picks the eligible process with the smallest key and runs it
/// to completion; idles forward to the next arrival when nothing is ready.
fn run_non_preemptive<R: SelectionRule + ?Sized>(
    states: &mut [ProcessState],
    rule: &R,
    tie: TieBreak,
) -> Timeline {
    let mut timeline = Timeline::new();
    let mut clock: Time = 0;

    loop {
        match rules::select_ready(states, clock, rule, tie) {
            Some(idx) => {
                let state = &mut states[idx];
                let start = clock;
                let remaining = state.remaining;
                clock = state.execute(start, remaining);
                trace!(
                    rule = rule.description(),
                    pid = state.pid(),
                    start,
                    end = clock,
                    "dispatch"
                );
                timeline.push(state.pid(), start, clock);
            }
            None => match next_arrival_after(states, clock) {
                Some(t) => clock = t,
                None => break,
            },
        }
    }

    timeline
}
