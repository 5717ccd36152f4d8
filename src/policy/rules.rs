//! Ready-set selection rules.
//!
//! A rule maps a process state to an integer key; the eligible process with
//! the smallest key is dispatched next. Equal keys are resolved by a
//! [`TieBreak`] strategy.
//!
//! # Score Convention
//! **Lower key = dispatched first.**
//!
//! | Rule | Key | Used by |
//! |------|-----|---------|
//! | `EarliestArrival` | arrival time | FCFS, Round-Robin admission |
//! | `ShortestRemaining` | remaining burst | SJF, SRTF |
//! | `HighestPriority` | priority value | Priority |

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::models::{ProcessState, Time};

/// Ordering key used to pick among eligible processes.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SRT").
    fn name(&self) -> &'static str;

    /// Key for a process; lower = dispatched first.
    fn key(&self, state: &ProcessState) -> i64;

    /// Human-readable rule description, used in dispatch traces.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// How equal keys are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// Ascending process id.
    #[default]
    ByPid,
    /// Position in the caller's process list (stable-sort semantics).
    InputOrder,
}

impl TieBreak {
    /// Secondary key for the process at `index` in the state list.
    #[inline]
    pub fn rank(self, index: usize, state: &ProcessState) -> u64 {
        match self {
            TieBreak::ByPid => u64::from(state.pid()),
            TieBreak::InputOrder => index as u64,
        }
    }
}

/// First come, first served: earliest arrival wins.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl SelectionRule for EarliestArrival {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn key(&self, state: &ProcessState) -> i64 {
        state.arrival()
    }

    fn description(&self) -> &'static str {
        "Earliest Arrival"
    }
}

/// Least remaining CPU time wins.
///
/// For a process that has not started this equals its burst, so the same
/// rule drives both SJF and SRTF.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn key(&self, state: &ProcessState) -> i64 {
        state.remaining
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time"
    }
}

/// Lowest priority number wins.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, state: &ProcessState) -> i64 {
        i64::from(state.priority())
    }

    fn description(&self) -> &'static str {
        "Highest Priority (lowest number)"
    }
}

/// Index of the eligible process at clock `t` with the smallest key.
///
/// Returns `None` when nothing is eligible.
pub fn select_ready<R: SelectionRule + ?Sized>(
    states: &[ProcessState],
    t: Time,
    rule: &R,
    tie: TieBreak,
) -> Option<usize> {
    states
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_ready_at(t))
        .min_by_key(|&(i, s)| (rule.key(s), tie.rank(i, s)))
        .map(|(i, _)| i)
}

/// All state indices sorted by rule key, then tie-break.
pub fn sort_indices<R: SelectionRule + ?Sized>(
    states: &[ProcessState],
    rule: &R,
    tie: TieBreak,
) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..states.len()).collect();
    indices.sort_by_key(|&i| (rule.key(&states[i]), tie.rank(i, &states[i])));
    indices
}
