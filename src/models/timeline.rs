//! Timeline (Gantt chart) model.
//!
//! A timeline is the ordered record of which process held the CPU during
//! each interval of a simulation. Entries are appended in execution order,
//! so they are sorted by start time and never overlap.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", §5.3

use serde::{Deserialize, Serialize};

use super::{Pid, Time};

/// One contiguous span of CPU ownership: `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Process holding the CPU.
    pub pid: Pid,
    /// Start time (inclusive).
    pub start: Time,
    /// End time (exclusive).
    pub end: Time,
}

impl TimelineEntry {
    /// Creates a new entry.
    pub fn new(pid: Pid, start: Time, end: Time) -> Self {
        Self { pid, start, end }
    }

    /// Span length (end - start).
    #[inline]
    pub fn duration(&self) -> Time {
        self.end - self.start
    }
}

/// Ordered sequence of execution intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Entries in execution order.
    pub entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a span as its own entry.
    ///
    /// Empty spans (`end <= start`) are dropped.
    pub fn push(&mut self, pid: Pid, start: Time, end: Time) {
        if end <= start {
            return;
        }
        debug_assert!(
            self.entries.last().is_none_or(|last| last.end <= start),
            "timeline entries must not overlap"
        );
        self.entries.push(TimelineEntry::new(pid, start, end));
    }

    /// Appends a span, merging it into the last entry when that entry
    /// belongs to the same process and ends exactly where this span starts.
    pub fn extend_or_push(&mut self, pid: Pid, start: Time, end: Time) {
        if end <= start {
            return;
        }
        match self.entries.last_mut() {
            Some(last) if last.pid == pid && last.end == start => last.end = end,
            _ => self.push(pid, start, end),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the timeline has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, TimelineEntry> {
        self.entries.iter()
    }

    /// Latest end time, or 0 for an empty timeline.
    pub fn makespan(&self) -> Time {
        self.entries.iter().map(|e| e.end).max().unwrap_or(0)
    }

    /// Earliest start time.
    pub fn first_start(&self) -> Option<Time> {
        self.entries.first().map(|e| e.start)
    }

    /// All entries for a given process.
    pub fn entries_for(&self, pid: Pid) -> Vec<&TimelineEntry> {
        self.entries.iter().filter(|e| e.pid == pid).collect()
    }

    /// First time the given process held the CPU.
    pub fn first_start_of(&self, pid: Pid) -> Option<Time> {
        self.entries.iter().find(|e| e.pid == pid).map(|e| e.start)
    }

    /// Total CPU time granted to a process.
    pub fn busy_time_for(&self, pid: Pid) -> Time {
        self.entries
            .iter()
            .filter(|e| e.pid == pid)
            .map(TimelineEntry::duration)
            .sum()
    }

    /// Total CPU time granted to all processes.
    pub fn total_busy_time(&self) -> Time {
        self.entries.iter().map(TimelineEntry::duration).sum()
    }

    /// Number of times the CPU passes from one process to a different one.
    pub fn context_switches(&self) -> usize {
        self.entries
            .windows(2)
            .filter(|w| w[0].pid != w[1].pid)
            .count()
    }

    /// Idle intervals between consecutive entries, as `(start, end)` pairs.
    pub fn idle_gaps(&self) -> Vec<(Time, Time)> {
        self.entries
            .windows(2)
            .filter(|w| w[1].start > w[0].end)
            .map(|w| (w[0].end, w[1].start))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a TimelineEntry;
    type IntoIter = std::slice::Iter<'a, TimelineEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
