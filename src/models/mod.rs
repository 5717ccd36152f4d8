//! CPU scheduling domain models.
//!
//! Provides the data types shared by every scheduling policy: the process
//! descriptor and its per-run state, and the execution timeline a run
//! produces.
//!
//! # Terminology
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Process` | Caller-owned descriptor (pid, arrival, burst, priority) |
//! | `ProcessState` | Per-run scratch copy (remaining, completion) |
//! | `TimelineEntry` | One contiguous `[start, end)` span of CPU ownership |
//! | `Timeline` | Gantt chart: entries in execution order |

mod process;
mod timeline;

pub use process::{next_arrival_after, Pid, Process, ProcessState, Time};
pub use timeline::{Timeline, TimelineEntry};
