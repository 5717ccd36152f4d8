//! Input validation for simulation requests.
//!
//! Checks structural integrity of the process set and the algorithm
//! parameters before any simulation step runs. Detects:
//! - Empty process sets
//! - Duplicate process IDs
//! - Non-positive burst times
//! - Non-positive Round-Robin quanta
//! - Process sets whose schedule could not be timed within `Time`
//!
//! All problems are collected and reported together. Negative arrival
//! times and any priority value are accepted.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{Process, Time};
use crate::policy::Algorithm;
use crate::simulator::SimulationRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Two processes share the same pid.
    DuplicatePid,
    /// A process has `burst <= 0`.
    NonPositiveBurst,
    /// Round-Robin selected with `quantum <= 0`.
    InvalidQuantum,
    /// No processes were supplied.
    EmptyProcessSet,
    /// Completion or turnaround times could exceed the `Time` range.
    TimeOverflow,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate pids
/// 3. Every burst is positive
/// 4. The latest possible completion, `max(arrival, 0) + Σ burst`, and the
///    longest possible turnaround both fit in `Time`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProcessSet,
            "No processes to simulate",
        ));
    }

    let mut pids = HashSet::new();
    for p in processes {
        if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate process ID: {}", p.pid),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has non-positive burst time {}", p.pid, p.burst),
            ));
        }
    }

    if !processes.is_empty() && longest_turnaround_bound(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Arrival and burst times exceed the representable time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on any turnaround a policy can produce, or `None` if it
/// overflows `Time`.
///
/// The CPU only idles until an arrival, so no process completes after
/// `max(latest arrival, 0) + Σ burst`. Turnaround is measured from the
/// earliest arrival, which may be negative.
fn longest_turnaround_bound(processes: &[Process]) -> Option<Time> {
    let latest = processes.iter().map(|p| p.arrival).max()?.max(0);
    let earliest = processes.iter().map(|p| p.arrival).min()?.min(0);
    let horizon = processes
        .iter()
        .filter(|p| p.burst > 0)
        .try_fold(latest, |t, p| t.checked_add(p.burst))?;
    horizon.checked_sub(earliest)
}

/// Validates the quantum for an algorithm. Only Round-Robin reads it.
pub fn validate_quantum(algorithm: Algorithm, quantum: Time) -> ValidationResult {
    if algorithm.requires_quantum() && quantum <= 0 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Time quantum must be a positive integer, got {quantum}"),
        )]);
    }
    Ok(())
}

/// Validates a complete simulation request.
pub fn validate_request(request: &SimulationRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if let Err(e) = validate_processes(&request.processes) {
        errors.extend(e);
    }
    if let Err(e) = validate_quantum(request.algorithm, request.quantum) {
        errors.extend(e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
