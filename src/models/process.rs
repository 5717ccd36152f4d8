//! Process model.
//!
//! A process is the unit of work competing for the simulated CPU. The
//! caller-owned [`Process`] descriptor is never mutated by a run; each run
//! works on a fresh [`ProcessState`] copy so repeated simulations over the
//! same descriptors cannot leak state into one another.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Process identifier, unique within a simulation run.
pub type Pid = u32;

/// Simulated time instant or duration (abstract time units).
pub type Time = i64;

/// Static description of a process.
///
/// # Priority Convention
/// **Lower value = higher priority.** Only the Priority policy reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub pid: Pid,
    /// Instant the process becomes eligible to run.
    pub arrival: Time,
    /// Total CPU time required.
    pub burst: Time,
    /// Scheduling priority (lower = more important).
    pub priority: i32,
}

impl Process {
    /// Creates a process with priority 0.
    pub fn new(pid: Pid, arrival: Time, burst: Time) -> Self {
        Self {
            pid,
            arrival,
            burst,
            priority: 0,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// Per-run mutable state of one process.
///
/// Created from a descriptor at the start of a run. Policies decrement
/// `remaining` and record `completion`; waiting and turnaround times are
/// derived afterwards by the metrics calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessState {
    /// The static descriptor this state was created from.
    pub process: Process,
    /// CPU time still owed. `0 <= remaining <= burst`.
    pub remaining: Time,
    /// Time the process first held the CPU.
    pub first_start: Option<Time>,
    /// Time `remaining` reached zero.
    pub completion: Option<Time>,
}

impl ProcessState {
    /// Creates a fresh state with `remaining = burst`.
    pub fn new(process: Process) -> Self {
        let remaining = process.burst;
        Self {
            process,
            remaining,
            first_start: None,
            completion: None,
        }
    }

    /// Builds isolated per-run states for a descriptor list, in input order.
    pub fn from_processes(processes: &[Process]) -> Vec<Self> {
        processes.iter().cloned().map(Self::new).collect()
    }

    /// Process identifier.
    #[inline]
    pub fn pid(&self) -> Pid {
        self.process.pid
    }

    /// Arrival time of the underlying descriptor.
    #[inline]
    pub fn arrival(&self) -> Time {
        self.process.arrival
    }

    /// Total CPU time the process needs.
    #[inline]
    pub fn burst(&self) -> Time {
        self.process.burst
    }

    /// Priority value; lower is more urgent.
    #[inline]
    pub fn priority(&self) -> i32 {
        self.process.priority
    }

    /// Whether the process still needs CPU time.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Eligibility at clock `t`: arrived and not yet finished.
    #[inline]
    pub fn is_ready_at(&self, t: Time) -> bool {
        self.arrival() <= t && self.remaining > 0
    }

    /// Runs the process for `amount` units starting at `start`.
    ///
    /// Records the first start and, when the process finishes, its
    /// completion time. `amount` is clamped to the remaining work.
    /// Returns the time the slice ends.
    pub fn execute(&mut self, start: Time, amount: Time) -> Time {
        let amount = amount.min(self.remaining);
        if self.first_start.is_none() {
            self.first_start = Some(start);
        }
        self.remaining -= amount;
        let end = start + amount;
        if self.remaining == 0 {
            self.completion = Some(end);
        }
        end
    }
}

/// Earliest arrival among unfinished processes that arrive after `t`.
///
/// Used to jump an idle clock straight to the next arrival.
pub fn next_arrival_after(states: &[ProcessState], t: Time) -> Option<Time> {
    states
        .iter()
        .filter(|s| !s.is_finished() && s.arrival() > t)
        .map(ProcessState::arrival)
        .min()
}
