//! Round-Robin with a fixed time quantum.
//!
//! # Algorithm
//!
//! 1. Admit processes to a FIFO ready queue in arrival order (ties →
//!    tie-break) as the clock passes their arrival.
//! 2. If the queue is empty, jump to the next arrival and admit it.
//! 3. Pop the head and run it for `min(quantum, remaining)`, recording one
//!    timeline entry per slice.
//! 4. If it is not finished, first admit every process that arrived during
//!    the slice, then put it back at the tail.
//!
//! The order in step 4 decides fairness between newcomers and the
//! preempted process: a process arriving exactly when a slice ends is
//! queued ahead of the process that was just preempted.

use std::collections::VecDeque;

use tracing::trace;

use super::rules::{self, EarliestArrival, TieBreak};
use super::SchedulingPolicy;
use crate::models::{ProcessState, Time, Timeline};

/// Preemptive Round-Robin policy.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: Time,
}

impl RoundRobin {
    /// Creates a Round-Robin policy.
    ///
    /// A quantum below 1 is raised to 1 so the clock always advances;
    /// request validation rejects such values before a run.
    pub fn new(quantum: Time) -> Self {
        Self {
            quantum: quantum.max(1),
        }
    }

    /// The effective time quantum.
    pub fn quantum(&self) -> Time {
        self.quantum
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(super::DEFAULT_QUANTUM)
    }
}

/// Moves every not-yet-admitted process with `arrival <= clock` to the
/// queue tail, in admission order.
fn admit_arrivals(
    states: &[ProcessState],
    order: &[usize],
    next: &mut usize,
    clock: Time,
    queue: &mut VecDeque<usize>,
) {
    while let Some(&idx) = order.get(*next) {
        if states[idx].arrival() > clock {
            break;
        }
        queue.push_back(idx);
        *next += 1;
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn run(&self, states: &mut [ProcessState], tie: TieBreak) -> Timeline {
        let order = rules::sort_indices(states, &EarliestArrival, tie);
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(states.len());
        let mut next = 0;
        let mut timeline = Timeline::new();
        let mut clock: Time = 0;

        loop {
            admit_arrivals(states, &order, &mut next, clock, &mut queue);

            let Some(idx) = queue.pop_front() else {
                match order.get(next) {
                    Some(&upcoming) => {
                        clock = clock.max(states[upcoming].arrival());
                        continue;
                    }
                    None => break,
                }
            };

            let state = &mut states[idx];
            let start = clock;
            clock = state.execute(start, self.quantum);
            trace!(
                pid = state.pid(),
                start,
                end = clock,
                remaining = state.remaining,
                "rr slice"
            );
            timeline.push(state.pid(), start, clock);

            if !state.is_finished() {
                admit_arrivals(states, &order, &mut next, clock, &mut queue);
                queue.push_back(idx);
            }
        }

        timeline
    }
}
