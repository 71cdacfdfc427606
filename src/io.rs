//! Input and reporting seams.
//!
//! The engines never read or print anything themselves. An
//! [`InputProvider`] hands them jobs and a policy; a [`Reporter`] receives
//! the execution trace and the mean waiting time.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use crate::error::ScheduleResult;
use crate::models::{ExecutionTrace, Job, Policy, PolicyKind};

/// Source of the initial job set and the policy to run.
pub trait InputProvider {
    /// Initial jobs in arrival order.
    fn jobs(&mut self) -> ScheduleResult<Vec<Job>>;

    /// Policy and its parameters.
    ///
    /// Fails with `InvalidPolicySelector` for an unknown selector.
    fn policy(&mut self) -> ScheduleResult<Policy>;
}

/// Sink for run results.
pub trait Reporter {
    /// Receives the dispatch order and mean waiting time of one run.
    fn report(&mut self, policy: PolicyKind, trace: &ExecutionTrace, mean_waiting: f64);
}

/// A job set plus policy selection, as it would be read from a file.
///
/// `policy` accepts the numeric selector (`"1"`..`"4"`) or a name
/// (`"fcfs"`, `"sjf"`, `"srtf"`, `"rr"`).
///
/// # Example
///
/// ```
/// use u_cpu_schedule::io::{InputProvider, Workload};
/// use u_cpu_schedule::models::{Job, Policy};
///
/// let mut workload = Workload::new(vec![Job::new(1, 5.0)], "rr").with_quantum(2);
/// assert_eq!(
///     workload.policy().unwrap(),
///     Policy::RoundRobin { quantum: 2, context_switch: 0 }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workload {
    /// Initial jobs in arrival order.
    pub jobs: Vec<Job>,
    /// Policy selector.
    pub policy: String,
    /// Round Robin quantum.
    #[serde(default)]
    pub quantum: Option<u32>,
    /// Round Robin context-switch time.
    #[serde(default)]
    pub context_switch: Option<u32>,
}

impl Workload {
    /// Creates a workload.
    pub fn new(jobs: Vec<Job>, policy: impl Into<String>) -> Self {
        Self {
            jobs,
            policy: policy.into(),
            quantum: None,
            context_switch: None,
        }
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: u32) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Sets the Round Robin context-switch time.
    pub fn with_context_switch(mut self, ticks: u32) -> Self {
        self.context_switch = Some(ticks);
        self
    }
}

impl InputProvider for Workload {
    fn jobs(&mut self) -> ScheduleResult<Vec<Job>> {
        Ok(self.jobs.clone())
    }

    fn policy(&mut self) -> ScheduleResult<Policy> {
        let kind: PolicyKind = self.policy.parse()?;
        Policy::from_kind(kind, self.quantum, self.context_switch)
    }
}

/// Reporter that formats results as text lines.
///
/// ```text
/// Execution order (FCFS): P1 P2 P3
/// Average waiting time (FCFS): 4.33
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextReporter {
    lines: Vec<String>,
}

impl TextReporter {
    /// Creates an empty reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl Reporter for TextReporter {
    fn report(&mut self, policy: PolicyKind, trace: &ExecutionTrace, mean_waiting: f64) {
        self.lines
            .push(format!("Execution order ({policy}): {trace}"));
        self.lines
            .push(format!("Average waiting time ({policy}): {mean_waiting:.2}"));
    }
}

impl fmt::Display for TextReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Reporter that emits results as `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, policy: PolicyKind, trace: &ExecutionTrace, mean_waiting: f64) {
        info!(
            policy = %policy,
            order = %trace,
            mean_waiting = format_args!("{mean_waiting:.2}"),
            "schedule report"
        );
    }
}
