//! Random workload generation.
//!
//! Produces valid process sets (unique pids `1..=n`, positive bursts) with
//! arrivals, bursts and priorities drawn uniformly from inclusive ranges.
//! Pass a seeded RNG for reproducible workloads. A set holds at most
//! `Pid::MAX` processes, one per pid.

use rand::Rng;

use crate::models::{Pid, Process, Time};

/// Builder for random process sets.
///
/// # Example
/// ```
/// use cpu_sched_sim::workload::WorkloadGenerator;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let processes = WorkloadGenerator::new(5)
///     .with_burst_range(1, 4)
///     .generate(&mut rng);
/// assert_eq!(processes.len(), 5);
/// assert!(processes.iter().all(|p| (1..=4).contains(&p.burst)));
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    arrival: (Time, Time),
    burst: (Time, Time),
    priority: (i32, i32),
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes, capped at `Pid::MAX`.
    ///
    /// Defaults: arrivals in `0..=10`, bursts in `1..=10`, priorities in `0..=4`.
    pub fn new(count: usize) -> Self {
        let max_count = usize::try_from(Pid::MAX).unwrap_or(usize::MAX);
        Self {
            count: count.min(max_count),
            arrival: (0, 10),
            burst: (1, 10),
            priority: (0, 4),
        }
    }

    /// Number of processes each call to [`generate`](Self::generate) draws.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Sets the inclusive arrival range.
    pub fn with_arrival_range(mut self, min: Time, max: Time) -> Self {
        self.arrival = ordered(min, max);
        self
    }

    /// Sets the inclusive burst range. Bounds below 1 are raised to 1.
    pub fn with_burst_range(mut self, min: Time, max: Time) -> Self {
        let (lo, hi) = ordered(min, max);
        self.burst = (lo.max(1), hi.max(1));
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority = ordered(min, max);
        self
    }

    /// Draws a process set.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        (1..=Pid::MAX)
            .take(self.count)
            .map(|pid| {
                let arrival = rng.random_range(self.arrival.0..=self.arrival.1);
                let burst = rng.random_range(self.burst.0..=self.burst.1);
                let priority = rng.random_range(self.priority.0..=self.priority.1);
                Process::new(pid, arrival, burst).with_priority(priority)
            })
            .collect()
    }
}

fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
