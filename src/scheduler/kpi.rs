//! Schedule quality metrics (KPIs).
//!
//! Computes standard CPU scheduling indicators from a completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Mean waiting | Σ waiting / n |
//! | Max waiting | Largest single waiting time |
//! | Mean turnaround | Σ turnaround / n |
//! | Makespan | Latest completion time |
//! | Busy time | Σ burst |
//! | CPU utilization | Busy time / makespan |
//! | Throughput | Jobs completed per time unit |
//! | Context switches | Changes of running job in the coalesced trace |

use crate::models::ScheduleOutcome;

/// Run performance indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleKpi {
    /// Mean waiting time.
    pub mean_waiting: f64,
    /// Maximum waiting time of any single job.
    pub max_waiting: f64,
    /// Mean turnaround time.
    pub mean_turnaround: f64,
    /// Latest completion time.
    pub makespan: f64,
    /// Total CPU time spent on jobs.
    pub busy_time: f64,
    /// Busy time over makespan (0.0..=1.0).
    pub cpu_utilization: f64,
    /// Jobs per time unit.
    pub throughput: f64,
    /// Number of dispatch slices.
    pub dispatch_count: usize,
    /// Number of times the CPU moved to a different (or resumed) job.
    pub context_switches: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from an engine outcome.
    pub fn calculate(outcome: &ScheduleOutcome) -> Self {
        let n = outcome.jobs.len();
        let makespan = outcome
            .jobs
            .iter()
            .map(|j| j.completion_time())
            .fold(0.0, f64::max);
        let busy_time: f64 = outcome.jobs.iter().map(|j| j.burst).sum();
        let max_waiting = outcome.jobs.iter().map(|j| j.waiting).fold(0.0, f64::max);

        let (cpu_utilization, throughput) = if makespan > 0.0 {
            (busy_time / makespan, n as f64 / makespan)
        } else {
            (0.0, 0.0)
        };

        Self {
            mean_waiting: outcome.mean_waiting(),
            max_waiting,
            mean_turnaround: outcome.mean_turnaround(),
            makespan,
            busy_time,
            cpu_utilization,
            throughput,
            dispatch_count: outcome.trace.len(),
            context_switches: outcome.trace.segments().len().saturating_sub(1),
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_mean_waiting: f64, min_utilization: f64) -> bool {
        self.mean_waiting <= max_mean_waiting && self.cpu_utilization >= min_utilization
    }
}
