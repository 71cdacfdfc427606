//! Result of one engine run.

use serde::{Deserialize, Serialize};

use super::{ExecutionTrace, JobId, JobMetrics, PolicyKind};

/// Per-job metrics and execution trace produced by one engine run.
///
/// `jobs` is in the engine's final job order: input order for FCFS and
/// Round Robin, burst order for SJF, input order followed by mid-run
/// admissions for SRTF.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Discipline that produced this outcome.
    pub policy: PolicyKind,
    /// Per-job results.
    pub jobs: Vec<JobMetrics>,
    /// Dispatch slices in order.
    pub trace: ExecutionTrace,
}

impl ScheduleOutcome {
    /// Creates an outcome.
    pub fn new(policy: PolicyKind, jobs: Vec<JobMetrics>, trace: ExecutionTrace) -> Self {
        Self {
            policy,
            jobs,
            trace,
        }
    }

    /// Number of jobs in the outcome (including mid-run admissions).
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Sum of waiting times.
    pub fn total_waiting(&self) -> f64 {
        self.jobs.iter().map(|j| j.waiting).sum()
    }

    /// Arithmetic mean waiting time (0 for an empty outcome).
    pub fn mean_waiting(&self) -> f64 {
        if self.jobs.is_empty() {
            return 0.0;
        }
        self.total_waiting() / self.jobs.len() as f64
    }

    /// Arithmetic mean turnaround time (0 for an empty outcome).
    pub fn mean_turnaround(&self) -> f64 {
        if self.jobs.is_empty() {
            return 0.0;
        }
        self.jobs.iter().map(|j| j.turnaround).sum::<f64>() / self.jobs.len() as f64
    }

    /// First job with the given id.
    pub fn job(&self, id: JobId) -> Option<&JobMetrics> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// Job ids in outcome order.
    pub fn job_ids(&self) -> Vec<JobId> {
        self.jobs.iter().map(|j| j.id).collect()
    }
}
