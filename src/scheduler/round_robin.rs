//! Round Robin with context-switch overhead.
//!
//! # Algorithm
//!
//! Sweep the jobs in input order until all are finished. Each unfinished
//! job gets a slice of `min(quantum, remaining)`; a job whose remaining
//! time fits in the slice finishes with `waiting = time - burst`. After
//! every slice, finishing or not, the clock advances by the
//! context-switch time.
//!
//! # Complexity
//! O(n * ceil(max_burst / quantum)).

use tracing::{debug, trace};

use super::Scheduler;
use crate::admission::AdmissionOracle;
use crate::error::ScheduleResult;
use crate::models::{ExecutionTrace, Job, JobMetrics, Policy, PolicyKind, ScheduleOutcome};
use crate::validation::check_bursts;

/// Round Robin engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: u32,
    context_switch: u32,
}

impl RoundRobin {
    /// Creates an engine. The quantum must be positive.
    pub fn new(quantum: u32, context_switch: u32) -> ScheduleResult<Self> {
        Policy::round_robin(quantum, context_switch)?;
        Ok(Self {
            quantum,
            context_switch,
        })
    }

    /// Maximum slice length.
    pub fn quantum(&self) -> u32 {
        self.quantum
    }

    /// Overhead charged after each slice.
    pub fn context_switch(&self) -> u32 {
        self.context_switch
    }
}

impl Scheduler for RoundRobin {
    fn kind(&self) -> PolicyKind {
        PolicyKind::RoundRobin
    }

    fn schedule(
        &self,
        jobs: &[Job],
        _oracle: &mut dyn AdmissionOracle,
    ) -> ScheduleResult<ScheduleOutcome> {
        check_bursts(jobs)?;

        let quantum = f64::from(self.quantum);
        let overhead = f64::from(self.context_switch);
        let mut remaining: Vec<f64> = jobs.iter().map(|j| j.burst).collect();
        let mut waiting: Vec<f64> = vec![0.0; jobs.len()];
        let mut execution = ExecutionTrace::new();
        let mut completed = 0;
        let mut time = 0.0;

        while completed < jobs.len() {
            for (i, job) in jobs.iter().enumerate() {
                if remaining[i] <= 0.0 {
                    continue;
                }

                if remaining[i] > quantum {
                    trace!(job_id = job.id, start = time, slice = quantum, "dispatch");
                    execution.push(job.id, time, quantum);
                    time += quantum;
                    remaining[i] -= quantum;
                } else {
                    let slice = remaining[i];
                    trace!(job_id = job.id, start = time, slice, "dispatch (final)");
                    execution.push(job.id, time, slice);
                    time += slice;
                    waiting[i] = time - job.burst;
                    remaining[i] = 0.0;
                    completed += 1;
                    debug!(job_id = job.id, completion = time, waiting = waiting[i], "job completed");
                }

                time += overhead;
            }
        }

        let metrics = jobs
            .iter()
            .zip(&waiting)
            .map(|(job, &w)| JobMetrics::from_waiting(job, w))
            .collect();

        debug!(
            slices = execution.len(),
            clock = time,
            "round robin run finished"
        );
        Ok(ScheduleOutcome::new(
            PolicyKind::RoundRobin,
            metrics,
            execution,
        ))
    }
}
