//! Simulation entry point.
//!
//! # Algorithm
//!
//! 1. Validate the request; reject it before any step runs.
//! 2. Copy the descriptors into fresh per-run process states.
//! 3. Run the selected policy to produce the timeline.
//! 4. Derive per-process and aggregate metrics.
//!
//! A run is a pure function of the request: descriptors are never mutated
//! and repeated runs return identical outcomes.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::metrics::{Metrics, MetricsSummary, ProcessResult};
use crate::models::{Pid, Process, ProcessState, Time, Timeline};
use crate::policy::{Algorithm, TieBreak, DEFAULT_QUANTUM};
use crate::validation::validate_request;

fn default_quantum() -> Time {
    DEFAULT_QUANTUM
}

/// Input container for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Scheduling algorithm.
    pub algorithm: Algorithm,
    /// Round-Robin time quantum; ignored by other algorithms.
    #[serde(default = "default_quantum")]
    pub quantum: Time,
    /// Resolution of equal selection keys.
    #[serde(default)]
    pub tie_break: TieBreak,
}

impl SimulationRequest {
    /// Creates a request with the default quantum and pid tie-breaking.
    pub fn new(processes: Vec<Process>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            quantum: DEFAULT_QUANTUM,
            tie_break: TieBreak::ByPid,
        }
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: Time) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the tie-breaking strategy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Adds a process.
    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }
}

/// Result of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Algorithm that produced this outcome.
    pub algorithm: Algorithm,
    /// Quantum used, for Round-Robin runs.
    pub quantum: Option<Time>,
    /// Execution intervals in order.
    pub timeline: Timeline,
    /// Per-process results, ordered by pid.
    pub results: Vec<ProcessResult>,
    /// Aggregate indicators.
    pub summary: MetricsSummary,
}

impl SimulationOutcome {
    /// Mean waiting time.
    pub fn avg_waiting(&self) -> f64 {
        self.summary.avg_waiting
    }

    /// Mean turnaround time.
    pub fn avg_turnaround(&self) -> f64 {
        self.summary.avg_turnaround
    }

    /// Result for a given pid.
    pub fn result_for(&self, pid: Pid) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.pid == pid)
    }
}

/// Runs scheduling simulations.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::models::Process;
/// use cpu_sched_sim::policy::Algorithm;
/// use cpu_sched_sim::simulator::{SimulationRequest, Simulator};
///
/// let processes = vec![
///     Process::new(1, 1, 1),
///     Process::new(2, 2, 3),
///     Process::new(3, 3, 3),
/// ];
/// let request = SimulationRequest::new(processes, Algorithm::RoundRobin).with_quantum(2);
///
/// let outcome = Simulator::new().run(&request).unwrap();
/// assert_eq!(outcome.timeline.len(), 5);
/// assert!((outcome.avg_waiting() - 4.0 / 3.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator;

impl Simulator {
    /// Creates a simulator.
    pub fn new() -> Self {
        Self
    }

    /// Validates and runs a request.
    ///
    /// # Errors
    /// [`Error::Invalid`] with every detected problem if validation fails.
    pub fn run(&self, request: &SimulationRequest) -> Result<SimulationOutcome> {
        if let Err(errors) = validate_request(request) {
            warn!(
                algorithm = request.algorithm.tag(),
                errors = errors.len(),
                "rejected simulation request"
            );
            return Err(Error::Invalid(errors));
        }

        debug!(
            algorithm = request.algorithm.tag(),
            processes = request.processes.len(),
            quantum = request.quantum,
            "starting simulation"
        );

        let mut states = ProcessState::from_processes(&request.processes);
        let policy = request.algorithm.policy(request.quantum);
        let timeline = policy.run(&mut states, request.tie_break);
        let Metrics { results, summary } = Metrics::calculate(&states, &timeline)?;

        debug!(
            algorithm = request.algorithm.tag(),
            entries = timeline.len(),
            makespan = summary.makespan,
            avg_waiting = summary.avg_waiting,
            avg_turnaround = summary.avg_turnaround,
            "simulation finished"
        );

        Ok(SimulationOutcome {
            algorithm: request.algorithm,
            quantum: request
                .algorithm
                .requires_quantum()
                .then_some(request.quantum),
            timeline,
            results,
            summary,
        })
    }

    /// Runs every algorithm over the same processes.
    ///
    /// Outcomes are returned in [`Algorithm::ALL`] order.
    pub fn compare(&self, processes: &[Process], quantum: Time) -> Result<Vec<SimulationOutcome>> {
        Algorithm::ALL
            .iter()
            .map(|&algorithm| {
                let request =
                    SimulationRequest::new(processes.to_vec(), algorithm).with_quantum(quantum);
                self.run(&request)
            })
            .collect()
    }
}

/// Validates and runs a request with a default [`Simulator`].
pub fn simulate(request: &SimulationRequest) -> Result<SimulationOutcome> {
    Simulator::new().run(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;
    use crate::workload::WorkloadGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reference_processes() -> Vec<Process> {
        vec![
            Process::new(1, 1, 1),
            Process::new(2, 2, 3),
            Process::new(3, 3, 3),
        ]
    }

    fn spans(outcome: &SimulationOutcome) -> Vec<(u32, i64, i64)> {
        outcome.timeline.iter().map(|e| (e.pid, e.start, e.end)).collect()
    }

    /// Conservation, coverage and no-overlap checks.
    fn assert_consistent(processes: &[Process], outcome: &SimulationOutcome) {
        assert_eq!(outcome.results.len(), processes.len());
        for r in &outcome.results {
            assert_eq!(r.completion, r.arrival + r.waiting + r.burst);
            assert_eq!(r.turnaround, r.waiting + r.burst);
            assert!(r.waiting >= 0);
            assert_eq!(outcome.timeline.busy_time_for(r.pid), r.burst);
        }
        for e in &outcome.timeline {
            assert!(e.start < e.end);
            assert!(e.start >= 0);
        }
        for w in outcome.timeline.entries.windows(2) {
            assert!(w[0].end <= w[1].start);
        }
    }

    #[test]
    fn test_fcfs_scenario() {
        let request = SimulationRequest::new(reference_processes(), Algorithm::Fcfs);
        let outcome = simulate(&request).unwrap();

        assert_eq!(spans(&outcome), vec![(1, 1, 2), (2, 2, 5), (3, 5, 8)]);
        assert!((outcome.avg_waiting() - 0.667).abs() < 1e-3);
        assert!((outcome.avg_turnaround() - 3.0).abs() < 1e-9);
        assert_eq!(outcome.quantum, None);
    }

    #[test]
    fn test_round_robin_scenario() {
        let request =
            SimulationRequest::new(reference_processes(), Algorithm::RoundRobin).with_quantum(2);
        let outcome = simulate(&request).unwrap();

        assert_eq!(
            spans(&outcome),
            vec![(1, 1, 2), (2, 2, 4), (3, 4, 6), (2, 6, 7), (3, 7, 8)]
        );
        let completions: Vec<i64> = outcome.results.iter().map(|r| r.completion).collect();
        assert_eq!(completions, vec![2, 7, 8]);
        assert!((outcome.avg_waiting() - 1.333).abs() < 1e-3);
        assert!((outcome.avg_turnaround() - 3.667).abs() < 1e-3);
        assert_eq!(outcome.quantum, Some(2));
    }

    #[test]
    fn test_invalid_request_runs_nothing() {
        let request = SimulationRequest::new(vec![], Algorithm::Sjf);
        let err = simulate(&request).unwrap_err();
        assert!(err
            .validation_errors()
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyProcessSet));

        let request =
            SimulationRequest::new(reference_processes(), Algorithm::RoundRobin).with_quantum(0);
        let err = simulate(&request).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::InvalidQuantum
        );
    }

    #[test]
    fn test_time_overflow_rejected_before_running() {
        let processes = vec![Process::new(1, Time::MAX - 1, 5)];
        for algorithm in Algorithm::ALL {
            let request = SimulationRequest::new(processes.clone(), algorithm);
            let err = simulate(&request).unwrap_err();
            assert_eq!(
                err.validation_errors()[0].kind,
                ValidationErrorKind::TimeOverflow
            );
        }
    }

    #[test]
    fn test_completion_at_time_max_runs() {
        let processes = vec![
            Process::new(1, Time::MAX - 5, 2),
            Process::new(2, 0, 3),
        ];
        for algorithm in Algorithm::ALL {
            let request = SimulationRequest::new(processes.clone(), algorithm);
            let outcome = simulate(&request).unwrap();
            assert_eq!(outcome.summary.makespan, Time::MAX - 3);
            assert_eq!(outcome.result_for(1).map(|r| r.turnaround), Some(2));
            assert_consistent(&processes, &outcome);
        }
    }

    #[test]
    fn test_quantum_ignored_for_other_algorithms() {
        let request = SimulationRequest::new(reference_processes(), Algorithm::Priority)
            .with_quantum(-1);
        assert!(simulate(&request).is_ok());
    }

    #[test]
    fn test_runs_are_idempotent() {
        let processes = reference_processes();
        for algorithm in Algorithm::ALL {
            let request = SimulationRequest::new(processes.clone(), algorithm);
            let first = simulate(&request).unwrap();
            let second = simulate(&request).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_compare_runs_every_algorithm() {
        let outcomes = Simulator::new()
            .compare(&reference_processes(), 2)
            .unwrap();
        let algorithms: Vec<Algorithm> = outcomes.iter().map(|o| o.algorithm).collect();
        assert_eq!(algorithms, Algorithm::ALL.to_vec());
        for outcome in &outcomes {
            assert_consistent(&reference_processes(), outcome);
        }
    }

    #[test]
    fn test_properties_hold_on_random_workloads() {
        let mut rng = StdRng::seed_from_u64(42);
        let generator = WorkloadGenerator::new(10)
            .with_arrival_range(0, 40)
            .with_burst_range(1, 12)
            .with_priority_range(0, 5);

        for _ in 0..100 {
            let processes = generator.generate(&mut rng);
            for quantum in [1, 3] {
                for outcome in Simulator::new().compare(&processes, quantum).unwrap() {
                    assert_consistent(&processes, &outcome);
                    if !outcome.algorithm.is_preemptive() {
                        assert_eq!(outcome.timeline.len(), processes.len());
                    }
                }
            }
        }
    }

    #[test]
    fn test_tie_break_strategy_is_applied() {
        let processes = vec![Process::new(2, 0, 3), Process::new(1, 0, 3)];
        let by_pid = simulate(&SimulationRequest::new(processes.clone(), Algorithm::Sjf)).unwrap();
        assert_eq!(by_pid.timeline.entries[0].pid, 1);

        let by_input = simulate(
            &SimulationRequest::new(processes, Algorithm::Sjf).with_tie_break(TieBreak::InputOrder),
        )
        .unwrap();
        assert_eq!(by_input.timeline.entries[0].pid, 2);
    }

    #[test]
    fn test_request_json_round_trip() {
        let json = r#"{
            "processes": [
                {"pid": 1, "arrival": 1, "burst": 1, "priority": 0},
                {"pid": 2, "arrival": 2, "burst": 3, "priority": 0}
            ],
            "algorithm": "RR"
        }"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.algorithm, Algorithm::RoundRobin);
        assert_eq!(request.quantum, DEFAULT_QUANTUM);
        assert_eq!(request.tie_break, TieBreak::ByPid);

        let outcome = simulate(&request).unwrap();
        let encoded = serde_json::to_string(&outcome).unwrap();
        let decoded: SimulationOutcome = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.timeline, outcome.timeline);
        assert_eq!(decoded.results, outcome.results);
        assert!((decoded.avg_waiting() - outcome.avg_waiting()).abs() < 1e-9);
    }
}
