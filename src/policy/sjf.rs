//! Shortest Job First (non-preemptive).
//!
//! # Algorithm
//! At each decision point, among processes that have arrived and not yet
//! run, pick the one with the shortest burst (ties → tie-break) and run it
//! to completion. Idle until the next arrival if nothing is ready.
//!
//! # Reference
//! Smith (1956), optimal for mean flow time on a single machine when all
//! jobs are available at once.

use super::rules::{ShortestRemaining, TieBreak};
use super::{run_non_preemptive, SchedulingPolicy};
use crate::models::{ProcessState, Timeline};

/// Non-preemptive SJF policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn run(&self, states: &mut [ProcessState], tie: TieBreak) -> Timeline {
        run_non_preemptive(states, &ShortestRemaining, tie)
    }
}
