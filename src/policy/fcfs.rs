//! First-Come, First-Served.
//!
//! # Algorithm
//! Order processes by arrival (ties → tie-break) and run each to completion
//! starting at `max(clock, arrival)`. One timeline entry per process.
//!
//! # Complexity
//! O(n log n).

use tracing::trace;

use super::rules::{self, EarliestArrival, TieBreak};
use super::SchedulingPolicy;
use crate::models::{ProcessState, Time, Timeline};

/// Non-preemptive FCFS policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn run(&self, states: &mut [ProcessState], tie: TieBreak) -> Timeline {
        let mut timeline = Timeline::new();
        let mut clock: Time = 0;

        for idx in rules::sort_indices(states, &EarliestArrival, tie) {
            let state = &mut states[idx];
            let start = clock.max(state.arrival());
            let remaining = state.remaining;
            clock = state.execute(start, remaining);
            trace!(pid = state.pid(), start, end = clock, "fcfs dispatch");
            timeline.push(state.pid(), start, clock);
        }

        timeline
    }
}
