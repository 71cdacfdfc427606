//! Shortest-Remaining-Time-First (preemptive SJF).
//!
//! # Algorithm
//!
//! Discrete ticks `t = 0, 1, 2, ...`. Each tick:
//! 1. Scan unfinished jobs for the smallest remaining time, replacing the
//!    candidate only on strict improvement (first seen wins ties).
//! 2. Run the winner for `min(1, remaining)` and record the slice.
//! 3. On completion: `turnaround = clock`, `waiting = clock - burst`.
//! 4. Advance `t`; at every positive multiple of the admission interval,
//!    ask the [`AdmissionOracle`] for a new job.
//!
//! The clock advances by each slice's length, so it equals `t` for integer
//! bursts. A fractional final slice ends early and the next job starts
//! right after it.
//!
//! # Selection floor
//!
//! With [`SelectionFloor::Carried`] the minimum search starts from the last
//! winner's remaining time and is reset to unbounded only after a
//! completion. With [`SelectionFloor::Fresh`] it starts unbounded every
//! tick. A job strictly shorter than the incumbent replaces it under both
//! modes, and the incumbent only ties with later (higher-index) jobs, so the
//! two modes select the same job on every tick.
//!
//! # Complexity
//! O(T * n) where T = total burst ticks, n = job count.

use tracing::{debug, trace};

use super::Scheduler;
use crate::admission::{Admission, AdmissionOracle};
use crate::config::{DuplicateIdPolicy, SelectionFloor, SimulationConfig, DEFAULT_ADMISSION_INTERVAL};
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{ExecutionTrace, Job, JobMetrics, PolicyKind, ScheduleOutcome};
use crate::validation::{check_burst, check_bursts};

/// Shortest-Remaining-Time-First engine.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::admission::ScriptedAdmission;
/// use u_cpu_schedule::models::Job;
/// use u_cpu_schedule::scheduler::{Scheduler, Srtf};
///
/// let jobs = vec![Job::new(1, 10.0)];
/// let mut oracle = ScriptedAdmission::once(Job::new(2, 2.0));
/// let outcome = Srtf::new().schedule(&jobs, &mut oracle).unwrap();
///
/// // Job 2 arrives at t=5 and preempts job 1.
/// assert_eq!(outcome.job(2).unwrap().turnaround, 7.0);
/// assert_eq!(outcome.job(1).unwrap().turnaround, 12.0);
/// ```
#[derive(Debug, Clone)]
pub struct Srtf {
    floor: SelectionFloor,
    admission_interval: u64,
    duplicate_ids: DuplicateIdPolicy,
}

/// Engine-local state of one run.
struct Run {
    jobs: Vec<Job>,
    remaining: Vec<f64>,
    admitted_at: Vec<u64>,
    finished: Vec<Option<JobMetrics>>,
    completed: usize,
}

impl Run {
    fn new(jobs: &[Job]) -> Self {
        Self {
            jobs: jobs.to_vec(),
            remaining: jobs.iter().map(|j| j.burst).collect(),
            admitted_at: vec![0; jobs.len()],
            finished: vec![None; jobs.len()],
            completed: 0,
        }
    }

    fn is_done(&self) -> bool {
        self.completed == self.jobs.len()
    }

    fn admit(&mut self, job: Job, tick: u64) {
        self.jobs.push(job);
        self.remaining.push(job.burst);
        self.admitted_at.push(tick);
        self.finished.push(None);
    }

    /// Lowers `floor` to the smallest remaining time strictly below it.
    fn select(&self, floor: &mut f64, current: &mut Option<usize>) {
        for (i, &rem) in self.remaining.iter().enumerate() {
            if self.finished[i].is_none() && rem < *floor {
                *floor = rem;
                *current = Some(i);
            }
        }
    }

    fn into_metrics(self) -> Vec<JobMetrics> {
        self.finished.into_iter().flatten().collect()
    }
}

impl Srtf {
    /// Creates an engine with default settings.
    pub fn new() -> Self {
        Self {
            floor: SelectionFloor::default(),
            admission_interval: DEFAULT_ADMISSION_INTERVAL,
            duplicate_ids: DuplicateIdPolicy::default(),
        }
    }

    /// Creates an engine from a simulation configuration.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            floor: config.selection_floor,
            admission_interval: config.admission_interval,
            duplicate_ids: config.duplicate_ids,
        }
    }

    /// Sets the selection floor mode.
    pub fn with_selection_floor(mut self, floor: SelectionFloor) -> Self {
        self.floor = floor;
        self
    }

    /// Sets the admission checkpoint interval (`0` disables admission).
    pub fn with_admission_interval(mut self, ticks: u64) -> Self {
        self.admission_interval = ticks;
        self
    }

    /// Sets the duplicate id policy applied to admitted jobs.
    pub fn with_duplicate_ids(mut self, policy: DuplicateIdPolicy) -> Self {
        self.duplicate_ids = policy;
        self
    }

    fn checkpoint(
        &self,
        run: &mut Run,
        tick: u64,
        oracle: &mut dyn AdmissionOracle,
    ) -> ScheduleResult<bool> {
        match oracle.offer(tick) {
            Admission::Admit(job) => {
                check_burst(&job)?;
                if self.duplicate_ids == DuplicateIdPolicy::Reject
                    && run.jobs.iter().any(|j| j.id == job.id)
                {
                    return Err(ScheduleError::DuplicateJobId(job.id));
                }
                debug!(tick, job_id = job.id, burst = job.burst, "job admitted");
                run.admit(job, tick);
                Ok(true)
            }
            Admission::Decline => {
                trace!(tick, "no job offered");
                Ok(true)
            }
            Admission::Stop => {
                debug!(tick, "admission closed");
                Ok(false)
            }
        }
    }
}

impl Default for Srtf {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for Srtf {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Srtf
    }

    fn schedule(
        &self,
        jobs: &[Job],
        oracle: &mut dyn AdmissionOracle,
    ) -> ScheduleResult<ScheduleOutcome> {
        check_bursts(jobs)?;

        let mut run = Run::new(jobs);
        let mut execution = ExecutionTrace::new();
        let mut accepting = self.admission_interval > 0;
        let mut floor = f64::INFINITY;
        let mut current: Option<usize> = None;
        let mut t: u64 = 0;
        let mut clock = 0.0_f64;

        while !run.is_done() {
            if self.floor == SelectionFloor::Fresh {
                floor = f64::INFINITY;
                current = None;
            }
            run.select(&mut floor, &mut current);
            let Some(idx) = current else {
                break;
            };

            let job = run.jobs[idx];
            let slice = run.remaining[idx].min(1.0);
            trace!(t, clock, job_id = job.id, remaining = run.remaining[idx], "dispatch");
            execution.push(job.id, clock, slice);
            run.remaining[idx] -= slice;
            clock += slice;

            if run.remaining[idx] <= 0.0 {
                run.remaining[idx] = 0.0;
                let metrics = JobMetrics::from_completion(&job, clock)
                    .with_admitted_at(run.admitted_at[idx]);
                debug!(
                    job_id = job.id,
                    completion = clock,
                    waiting = metrics.waiting,
                    "job completed"
                );
                run.finished[idx] = Some(metrics);
                run.completed += 1;
                floor = f64::INFINITY;
            } else {
                floor = run.remaining[idx];
            }

            t += 1;

            if accepting && t % self.admission_interval == 0 {
                accepting = self.checkpoint(&mut run, t, oracle)?;
            }
        }

        debug!(ticks = t, clock, jobs = run.jobs.len(), "srtf run finished");
        Ok(ScheduleOutcome::new(
            PolicyKind::Srtf,
            run.into_metrics(),
            execution,
        ))
    }
}
