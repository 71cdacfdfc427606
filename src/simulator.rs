//! Run driver: input provider → engine → reporter.
//!
//! # Algorithm
//!
//! 1. Read jobs and policy from the [`InputProvider`].
//! 2. Validate the job set and policy parameters.
//! 3. Build the engine for the policy and run it.
//! 4. Hand the trace and mean waiting time to the [`Reporter`].
//!
//! A bad selector or invalid input stops the run before any engine work;
//! the reporter is only called for successful runs.

use tracing::{debug, info};

use crate::admission::AdmissionOracle;
use crate::config::SimulationConfig;
use crate::error::{ScheduleError, ScheduleResult};
use crate::io::{InputProvider, Reporter};
use crate::models::{Job, Policy, ScheduleOutcome};
use crate::scheduler::scheduler_for;
use crate::validation::{validate_jobs, validate_policy};

/// Validating front end over the scheduling engines.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::admission::NoAdmission;
/// use u_cpu_schedule::io::{TextReporter, Workload};
/// use u_cpu_schedule::models::Job;
/// use u_cpu_schedule::Simulator;
///
/// let mut workload = Workload::new(
///     vec![Job::new(1, 5.0), Job::new(2, 3.0), Job::new(3, 8.0)],
///     "fcfs",
/// );
/// let mut reporter = TextReporter::new();
/// let outcome = Simulator::new()
///     .run(&mut workload, &mut NoAdmission, &mut reporter)
///     .unwrap();
///
/// assert!((outcome.mean_waiting() - 13.0 / 3.0).abs() < 1e-10);
/// assert_eq!(reporter.lines()[0], "Execution order (FCFS): P1 P2 P3");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Validates `jobs` and `policy`, then runs the matching engine.
    pub fn schedule(
        &self,
        jobs: &[Job],
        policy: &Policy,
        oracle: &mut dyn AdmissionOracle,
    ) -> ScheduleResult<ScheduleOutcome> {
        validate_jobs(jobs, self.config.duplicate_ids).map_err(ScheduleError::InvalidInput)?;
        validate_policy(policy).map_err(ScheduleError::InvalidInput)?;

        let engine = scheduler_for(policy, &self.config)?;
        info!(policy = %policy.kind(), jobs = jobs.len(), "schedule run started");

        let outcome = engine.schedule(jobs, oracle)?;
        info!(
            policy = %outcome.policy,
            jobs = outcome.job_count(),
            slices = outcome.trace.len(),
            mean_waiting = outcome.mean_waiting(),
            "schedule run finished"
        );
        Ok(outcome)
    }

    /// Reads input from `provider`, runs it, and reports the result.
    pub fn run(
        &self,
        provider: &mut dyn InputProvider,
        oracle: &mut dyn AdmissionOracle,
        reporter: &mut dyn Reporter,
    ) -> ScheduleResult<ScheduleOutcome> {
        let jobs = provider.jobs()?;
        let policy = provider.policy()?;
        debug!(?policy, jobs = jobs.len(), "input received");

        let outcome = self.schedule(&jobs, &policy, oracle)?;
        reporter.report(outcome.policy, &outcome.trace, outcome.mean_waiting());
        Ok(outcome)
    }

    /// Runs several policies over the same job set.
    ///
    /// Every policy sees the unmodified input. The oracle is shared, so a
    /// scripted oracle is consumed by the first SRTF run.
    pub fn compare(
        &self,
        jobs: &[Job],
        policies: &[Policy],
        oracle: &mut dyn AdmissionOracle,
    ) -> ScheduleResult<Vec<ScheduleOutcome>> {
        policies
            .iter()
            .map(|policy| self.schedule(jobs, policy, oracle))
            .collect()
    }
}
