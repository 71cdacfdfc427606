//! Mid-run job admission for the preemptive engine.
//!
//! At every admission checkpoint the SRTF engine asks an
//! [`AdmissionOracle`] whether a new job arrives. The call is synchronous;
//! the simulation does not advance until the oracle answers.
//!
//! # Usage
//!
//! ```
//! use u_cpu_schedule::admission::{Admission, ScriptedAdmission};
//! use u_cpu_schedule::models::Job;
//!
//! // Admit one job at the first checkpoint, then stop offering.
//! let oracle = ScriptedAdmission::once(Job::new(9, 2.0));
//! assert_eq!(oracle.pending(), 2);
//! ```

use std::collections::VecDeque;

use crate::models::Job;

/// Answer to an admission query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Admission {
    /// A new job joins the run.
    Admit(Job),
    /// Nothing arrives now; ask again at the next checkpoint.
    Decline,
    /// No more jobs will arrive; stop asking.
    Stop,
}

/// Source of jobs admitted while a preemptive run is in progress.
pub trait AdmissionOracle {
    /// Called at checkpoint `tick` (a positive multiple of the interval).
    fn offer(&mut self, tick: u64) -> Admission;
}

impl<F> AdmissionOracle for F
where
    F: FnMut(u64) -> Admission,
{
    fn offer(&mut self, tick: u64) -> Admission {
        self(tick)
    }
}

/// Oracle that never admits anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAdmission;

impl AdmissionOracle for NoAdmission {
    fn offer(&mut self, _tick: u64) -> Admission {
        Admission::Stop
    }
}

/// Oracle answering from a fixed script, then [`Admission::Stop`].
///
/// Records the ticks it was queried at.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAdmission {
    script: VecDeque<Admission>,
    queried_at: Vec<u64>,
}

impl ScriptedAdmission {
    /// Creates an oracle that replays `answers` in order.
    pub fn new(answers: impl IntoIterator<Item = Admission>) -> Self {
        Self {
            script: answers.into_iter().collect(),
            queried_at: Vec::new(),
        }
    }

    /// Admits `job` at the first checkpoint, then stops.
    pub fn once(job: Job) -> Self {
        Self::new([Admission::Admit(job), Admission::Stop])
    }

    /// Admits one job per checkpoint until the list runs out.
    pub fn every_checkpoint(jobs: impl IntoIterator<Item = Job>) -> Self {
        Self::new(jobs.into_iter().map(Admission::Admit))
    }

    /// Ticks at which the oracle was asked.
    pub fn queried_at(&self) -> &[u64] {
        &self.queried_at
    }

    /// Answers not yet given.
    pub fn pending(&self) -> usize {
        self.script.len()
    }
}

impl AdmissionOracle for ScriptedAdmission {
    fn offer(&mut self, tick: u64) -> Admission {
        self.queried_at.push(tick);
        self.script.pop_front().unwrap_or(Admission::Stop)
    }
}
