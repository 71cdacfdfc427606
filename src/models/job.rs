//! Job model.
//!
//! A job is a CPU-bound unit of work characterized only by its burst
//! length. Engines never mutate the caller's jobs; per-run results are
//! returned as [`JobMetrics`].

use serde::{Deserialize, Serialize};

/// Caller-supplied job identifier. Uniqueness is not required.
pub type JobId = i64;

/// A job to be scheduled.
///
/// # Time Representation
/// Times are abstract CPU time units relative to the start of a run (t=0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Job identifier.
    pub id: JobId,
    /// Required CPU time. Must be finite and positive.
    pub burst: f64,
}

impl Job {
    /// Creates a new job.
    pub fn new(id: JobId, burst: f64) -> Self {
        Self { id, burst }
    }

    /// Whether the burst is a positive finite number.
    #[inline]
    pub fn has_valid_burst(&self) -> bool {
        self.burst.is_finite() && self.burst > 0.0
    }
}

/// Waiting and turnaround times of one job after an engine run.
///
/// Built only from a waiting time or a completion time, so
/// `turnaround == waiting + burst` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JobMetrics {
    /// Job identifier.
    pub id: JobId,
    /// Burst the job was scheduled with.
    pub burst: f64,
    /// Time spent admitted but not running.
    pub waiting: f64,
    /// Time from t=0 to completion.
    pub turnaround: f64,
    /// Tick at which the job entered the run (0 unless admitted mid-run).
    pub admitted_at: u64,
}

impl JobMetrics {
    /// Metrics for a job that waited `waiting` units before finishing.
    pub fn from_waiting(job: &Job, waiting: f64) -> Self {
        Self {
            id: job.id,
            burst: job.burst,
            waiting,
            turnaround: waiting + job.burst,
            admitted_at: 0,
        }
    }

    /// Metrics for a job that completed at `completion`.
    pub fn from_completion(job: &Job, completion: f64) -> Self {
        Self {
            id: job.id,
            burst: job.burst,
            waiting: completion - job.burst,
            turnaround: completion,
            admitted_at: 0,
        }
    }

    /// Records the admission tick.
    pub fn with_admitted_at(mut self, tick: u64) -> Self {
        self.admitted_at = tick;
        self
    }

    /// Completion time. All clocks start at t=0, so this equals turnaround.
    #[inline]
    pub fn completion_time(&self) -> f64 {
        self.turnaround
    }

    /// Whether `turnaround == waiting + burst` within `epsilon`.
    pub fn is_consistent(&self, epsilon: f64) -> bool {
        (self.turnaround - (self.waiting + self.burst)).abs() <= epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_burst() {
        assert!(Job::new(1, 3.0).has_valid_burst());
        assert!(Job::new(1, 0.5).has_valid_burst());
        assert!(!Job::new(1, 0.0).has_valid_burst());
        assert!(!Job::new(1, -2.0).has_valid_burst());
        assert!(!Job::new(1, f64::NAN).has_valid_burst());
        assert!(!Job::new(1, f64::INFINITY).has_valid_burst());
    }

    #[test]
    fn test_metrics_from_waiting() {
        let m = JobMetrics::from_waiting(&Job::new(2, 3.0), 5.0);
        assert_eq!(m.id, 2);
        assert!((m.turnaround - 8.0).abs() < 1e-10);
        assert!(m.is_consistent(1e-10));
        assert_eq!(m.admitted_at, 0);
    }

    #[test]
    fn test_metrics_from_completion() {
        let m = JobMetrics::from_completion(&Job::new(4, 2.0), 8.0).with_admitted_at(5);
        assert!((m.waiting - 6.0).abs() < 1e-10);
        assert!((m.completion_time() - 8.0).abs() < 1e-10);
        assert!(m.is_consistent(1e-10));
        assert_eq!(m.admitted_at, 5);
    }
}
