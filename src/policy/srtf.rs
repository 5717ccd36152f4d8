//! Shortest Remaining Time First (preemptive SJF).
//!
//! # Algorithm
//! Conceptually the clock advances one unit at a time: at every tick the
//! eligible process with the least remaining time runs for one unit (ties →
//! tie-break), and consecutive ticks of the same process coalesce into one
//! timeline entry.
//!
//! The selection can only change when a process arrives or finishes: once
//! chosen, the running process's remaining time only shrinks, so it stays
//! the strict minimum until a newcomer shows up. The loop therefore jumps
//! the clock to the next event boundary (next arrival or the running
//! process's completion, whichever is sooner) and produces the same
//! timeline as unit stepping in O(n) decisions per event instead of one
//! per time unit.

use tracing::trace;

use super::rules::{self, ShortestRemaining, TieBreak};
use super::SchedulingPolicy;
use crate::models::{next_arrival_after, ProcessState, Time, Timeline};

/// Preemptive SRTF policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl SchedulingPolicy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn run(&self, states: &mut [ProcessState], tie: TieBreak) -> Timeline {
        let mut timeline = Timeline::new();
        let mut clock: Time = 0;

        loop {
            let Some(idx) = rules::select_ready(states, clock, &ShortestRemaining, tie) else {
                match next_arrival_after(states, clock) {
                    Some(t) => {
                        clock = t;
                        continue;
                    }
                    None => break,
                }
            };

            let boundary = next_arrival_after(states, clock);
            let state = &mut states[idx];
            let run_for = match boundary {
                Some(t) => (t - clock).min(state.remaining),
                None => state.remaining,
            };

            let start = clock;
            clock = state.execute(start, run_for);
            trace!(
                pid = state.pid(),
                start,
                end = clock,
                remaining = state.remaining,
                "srtf slice"
            );
            timeline.extend_or_push(state.pid(), start, clock);
        }

        timeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::policy::test_support::*;
    use crate::policy::{Fcfs, SchedulingPolicy};
    use crate::workload::WorkloadGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// One-unit-per-tick reference implementation.
    fn unit_stepped(states: &mut [ProcessState], tie: TieBreak) -> Timeline {
        let mut timeline = Timeline::new();
        let mut clock: Time = 0;
        while states.iter().any(|s| !s.is_finished()) {
            match rules::select_ready(states, clock, &ShortestRemaining, tie) {
                Some(idx) => {
                    let start = clock;
                    clock = states[idx].execute(start, 1);
                    timeline.extend_or_push(states[idx].pid(), start, clock);
                }
                None => clock += 1,
            }
        }
        timeline
    }

    #[test]
    fn test_srtf_textbook_example() {
        // Silberschatz Fig. 5.x: P1(0,8) P2(1,4) P3(2,9) P4(3,5)
        let mut s = states(&[(1, 0, 8, 0), (2, 1, 4, 0), (3, 2, 9, 0), (4, 3, 5, 0)]);
        let t = Srtf.run(&mut s, TieBreak::ByPid);
        assert_eq!(
            spans(&t),
            vec![(1, 0, 1), (2, 1, 5), (4, 5, 10), (1, 10, 17), (3, 17, 26)]
        );
        assert_eq!(completions(&s), vec![17, 5, 26, 10]);
        assert_well_formed(&s, &t);
    }

    #[test]
    fn test_srtf_coalesces_across_arrivals() {
        // P2 arrives mid-run but is longer → P1 keeps the CPU in one entry
        let mut s = states(&[(1, 0, 4, 0), (2, 2, 5, 0)]);
        let t = Srtf.run(&mut s, TieBreak::ByPid);
        assert_eq!(spans(&t), vec![(1, 0, 4), (2, 4, 9)]);
    }

    #[test]
    fn test_srtf_equal_remaining_tie_break_on_arrival() {
        // At t=1 P1 has 2 left, P0 arrives with 2 → pid 0 wins by default
        let mut s = states(&[(1, 0, 3, 0), (0, 1, 2, 0)]);
        let t = Srtf.run(&mut s, TieBreak::ByPid);
        assert_eq!(spans(&t), vec![(1, 0, 1), (0, 1, 3), (1, 3, 5)]);

        // Input order keeps P1 running
        let mut s = states(&[(1, 0, 3, 0), (0, 1, 2, 0)]);
        let t = Srtf.run(&mut s, TieBreak::InputOrder);
        assert_eq!(spans(&t), vec![(1, 0, 3), (0, 3, 5)]);
    }

    #[test]
    fn test_srtf_idle_then_resume() {
        let mut s = states(&[(1, 2, 2, 0), (2, 10, 1, 0)]);
        let t = Srtf.run(&mut s, TieBreak::ByPid);
        assert_eq!(spans(&t), vec![(1, 2, 4), (2, 10, 11)]);
    }

    #[test]
    fn test_srtf_equals_fcfs_when_preemption_impossible() {
        // Equal bursts, staggered arrivals: nobody ever has less work left
        let specs = [(1, 0, 3, 0), (2, 1, 3, 0), (3, 2, 3, 0), (4, 3, 3, 0)];
        let mut a = states(&specs);
        let mut b = states(&specs);
        let srtf = Srtf.run(&mut a, TieBreak::ByPid);
        let fcfs = Fcfs.run(&mut b, TieBreak::ByPid);
        assert_eq!(srtf, fcfs);
        assert_eq!(completions(&a), completions(&b));
    }

    #[test]
    fn test_srtf_matches_unit_stepping_on_random_workloads() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let generator = WorkloadGenerator::new(12)
            .with_arrival_range(0, 30)
            .with_burst_range(1, 9);

        for _ in 0..200 {
            let procs: Vec<Process> = generator.generate(&mut rng);
            for tie in [TieBreak::ByPid, TieBreak::InputOrder] {
                let mut fast = ProcessState::from_processes(&procs);
                let mut slow = ProcessState::from_processes(&procs);
                let t_fast = Srtf.run(&mut fast, tie);
                let t_slow = unit_stepped(&mut slow, tie);
                assert_eq!(t_fast, t_slow);
                assert_eq!(completions(&fast), completions(&slow));
                assert_well_formed(&fast, &t_fast);
            }
        }
    }
}
