//! Non-preemptive priority scheduling.
//!
//! Same dispatch loop as SJF, keyed on `priority` (lower number wins).

use super::rules::{HighestPriority, TieBreak};
use super::{run_non_preemptive, SchedulingPolicy};
use crate::models::{ProcessState, Timeline};

/// Non-preemptive priority policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Priority;

impl SchedulingPolicy for Priority {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn run(&self, states: &mut [ProcessState], tie: TieBreak) -> Timeline {
        run_non_preemptive(states, &HighestPriority, tie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::test_support::*;

    #[test]
    fn test_priority_ordering() {
        let mut s = states(&[(1, 0, 3, 3), (2, 0, 2, 1), (3, 0, 1, 2)]);
        let t = Priority.run(&mut s, TieBreak::ByPid);
        assert_eq!(spans(&t), vec![(2, 0, 2), (3, 2, 3), (1, 3, 6)]);
        assert_well_formed(&s, &t);
    }

    #[test]
    fn test_priority_only_considers_arrived() {
        // P2 is more important but arrives after P1 has started
        let mut s = states(&[(1, 0, 4, 5), (2, 1, 2, 0), (3, 2, 2, 1)]);
        let t = Priority.run(&mut s, TieBreak::ByPid);
        assert_eq!(spans(&t), vec![(1, 0, 4), (2, 4, 6), (3, 6, 8)]);
        assert_eq!(completions(&s), vec![4, 6, 8]);
    }

    #[test]
    fn test_priority_equal_priority_tie_break() {
        let mut s = states(&[(2, 0, 1, 0), (1, 0, 5, 0)]);
        let t = Priority.run(&mut s, TieBreak::ByPid);
        assert_eq!(spans(&t), vec![(1, 0, 5), (2, 5, 6)]);
    }

    #[test]
    fn test_priority_negative_values() {
        let mut s = states(&[(1, 0, 1, 0), (2, 0, 1, -10)]);
        let t = Priority.run(&mut s, TieBreak::ByPid);
        assert_eq!(spans(&t), vec![(2, 0, 1), (1, 1, 2)]);
    }
}
