//! CPU scheduling simulator.
//!
//! Simulates classical uniprocessor scheduling policies over a set of
//! processes described by arrival time, burst time and priority, and
//! reports the resulting Gantt timeline together with per-process and
//! aggregate performance metrics.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessState`, `Timeline`,
//!   `TimelineEntry`
//! - **`policy`**: `SchedulingPolicy` trait and the FCFS, SJF, SRTF,
//!   Priority and Round-Robin policies, plus selection rules
//! - **`metrics`**: Turnaround, waiting and response times, averages,
//!   utilization
//! - **`validation`**: Input integrity checks (empty sets, duplicate pids,
//!   non-positive bursts, invalid quanta, time-range overflow)
//! - **`simulator`**: Request → validate → run → measure
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::{simulate, Algorithm, Process, SimulationRequest};
//!
//! let request = SimulationRequest::new(
//!     vec![Process::new(1, 1, 1), Process::new(2, 2, 3), Process::new(3, 3, 3)],
//!     Algorithm::Fcfs,
//! );
//! let outcome = simulate(&request).unwrap();
//!
//! let completions: Vec<i64> = outcome.results.iter().map(|r| r.completion).collect();
//! assert_eq!(completions, vec![2, 5, 8]);
//! assert!((outcome.avg_turnaround() - 3.0).abs() < 1e-9);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", §2.4

pub mod error;
pub mod metrics;
pub mod models;
pub mod policy;
pub mod simulator;
pub mod validation;
pub mod workload;

pub use error::{Error, Result};
pub use metrics::{Metrics, MetricsSummary, ProcessResult};
pub use models::{Pid, Process, Time, Timeline, TimelineEntry};
pub use policy::{Algorithm, SchedulingPolicy, TieBreak, DEFAULT_QUANTUM};
pub use simulator::{simulate, SimulationOutcome, SimulationRequest, Simulator};
