//! Execution trace model.
//!
//! A trace is the ordered list of dispatch slices an engine produced. The
//! reported "execution order" is the job id of every slice, repeats
//! included; [`ExecutionTrace::segments`] gives the coalesced Gantt view.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::JobId;

const CONTIGUOUS_EPSILON: f64 = 1e-9;

/// One dispatch of a job onto the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dispatch {
    /// Dispatched job.
    pub job_id: JobId,
    /// Slice start time.
    pub start: f64,
    /// CPU time consumed by the slice.
    pub duration: f64,
}

impl Dispatch {
    /// Slice end time.
    #[inline]
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// Ordered dispatch slices of one engine run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionTrace {
    dispatches: Vec<Dispatch>,
}

impl ExecutionTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    pub fn push(&mut self, job_id: JobId, start: f64, duration: f64) {
        self.dispatches.push(Dispatch {
            job_id,
            start,
            duration,
        });
    }

    /// All slices in dispatch order.
    pub fn dispatches(&self) -> &[Dispatch] {
        &self.dispatches
    }

    /// Job ids in dispatch order, one per slice.
    pub fn order(&self) -> Vec<JobId> {
        self.dispatches.iter().map(|d| d.job_id).collect()
    }

    /// Number of slices.
    pub fn len(&self) -> usize {
        self.dispatches.len()
    }

    /// Whether no slice was dispatched.
    pub fn is_empty(&self) -> bool {
        self.dispatches.is_empty()
    }

    /// Total CPU time given to `job_id`.
    pub fn busy_time_for(&self, job_id: JobId) -> f64 {
        self.dispatches
            .iter()
            .filter(|d| d.job_id == job_id)
            .map(|d| d.duration)
            .sum()
    }

    /// Number of slices given to `job_id`.
    pub fn dispatch_count_for(&self, job_id: JobId) -> usize {
        self.dispatches.iter().filter(|d| d.job_id == job_id).count()
    }

    /// End of the last slice (0 for an empty trace).
    pub fn end_time(&self) -> f64 {
        self.dispatches.iter().map(Dispatch::end).fold(0.0, f64::max)
    }

    /// Slices with back-to-back runs of the same job merged.
    pub fn segments(&self) -> Vec<Dispatch> {
        let mut segments: Vec<Dispatch> = Vec::new();
        for d in &self.dispatches {
            match segments.last_mut() {
                Some(last)
                    if last.job_id == d.job_id
                        && (last.end() - d.start).abs() < CONTIGUOUS_EPSILON =>
                {
                    last.duration += d.duration;
                }
                _ => segments.push(*d),
            }
        }
        segments
    }
}

impl fmt::Display for ExecutionTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, d) in self.dispatches.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "P{}", d.job_id)?;
        }
        Ok(())
    }
}
