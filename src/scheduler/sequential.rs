//! Sequential (run-to-completion) engines: FCFS and non-preemptive SJF.
//!
//! # Algorithm
//!
//! Jobs run back to back in their current order:
//! `waiting[0] = 0`, `waiting[i] = waiting[i-1] + burst[i-1]`,
//! `turnaround[i] = waiting[i] + burst[i]`.
//! SJF is the same computation on a burst-ordered copy.
//!
//! # Complexity
//! O(n) for FCFS, O(n²) for SJF (dominated by the ordering pass).

use tracing::{debug, trace};

use super::{sort_by_burst, Scheduler};
use crate::admission::AdmissionOracle;
use crate::error::ScheduleResult;
use crate::models::{ExecutionTrace, Job, JobMetrics, PolicyKind, ScheduleOutcome};
use crate::validation::check_bursts;

/// Runs `jobs` to completion in the given order.
pub(crate) fn run_in_order(policy: PolicyKind, jobs: &[Job]) -> ScheduleOutcome {
    let mut metrics = Vec::with_capacity(jobs.len());
    let mut execution = ExecutionTrace::new();
    let mut clock = 0.0;

    for job in jobs {
        trace!(job_id = job.id, start = clock, burst = job.burst, "dispatch");
        execution.push(job.id, clock, job.burst);
        metrics.push(JobMetrics::from_waiting(job, clock));
        clock += job.burst;
    }

    debug!(policy = %policy, jobs = jobs.len(), makespan = clock, "sequential run finished");
    ScheduleOutcome::new(policy, metrics, execution)
}

/// First-Come-First-Served.
///
/// Jobs run in input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fcfs
    }

    fn schedule(
        &self,
        jobs: &[Job],
        _oracle: &mut dyn AdmissionOracle,
    ) -> ScheduleResult<ScheduleOutcome> {
        check_bursts(jobs)?;
        Ok(run_in_order(PolicyKind::Fcfs, jobs))
    }
}

/// Shortest-Job-First, non-preemptive.
///
/// Jobs run in ascending burst order; equal bursts keep input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SjfNonPreemptive;

impl Scheduler for SjfNonPreemptive {
    fn kind(&self) -> PolicyKind {
        PolicyKind::SjfNonPreemptive
    }

    fn schedule(
        &self,
        jobs: &[Job],
        _oracle: &mut dyn AdmissionOracle,
    ) -> ScheduleResult<ScheduleOutcome> {
        check_bursts(jobs)?;
        let mut ordered = jobs.to_vec();
        sort_by_burst(&mut ordered);
        Ok(run_in_order(PolicyKind::SjfNonPreemptive, &ordered))
    }
}
