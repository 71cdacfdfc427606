//! Error types for scheduling runs.
//!
//! Every public operation returns `ScheduleResult<T>`. Allocation failure is
//! not represented here: growing the job set goes through `Vec`, and the
//! global allocator aborts the process on exhaustion.

use thiserror::Error;

use crate::models::JobId;
use crate::validation::ValidationError;

/// Result alias used across the crate.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Errors surfaced to the caller of a scheduling run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// The policy selector did not name a known discipline.
    #[error("invalid policy selector '{0}' (expected 1-4, fcfs, sjf, srtf or rr)")]
    InvalidPolicySelector(String),

    /// A policy parameter is missing or out of range.
    #[error("invalid policy parameter: {0}")]
    InvalidPolicyParameter(String),

    /// A job's burst is not a positive finite number.
    #[error("invalid job parameter: job {id} has burst {burst}, expected a positive finite value")]
    InvalidJobParameter { id: JobId, burst: f64 },

    /// An admitted job reuses an id while duplicates are rejected.
    #[error("duplicate job id {0}")]
    DuplicateJobId(JobId),

    /// Batch validation found one or more problems.
    #[error("invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),
}

impl ScheduleError {
    /// Whether this error was caused by a bad job descriptor.
    pub fn is_job_error(&self) -> bool {
        match self {
            Self::InvalidJobParameter { .. } | Self::DuplicateJobId(_) => true,
            Self::InvalidInput(errors) => errors.iter().any(|e| e.kind.is_job_error()),
            _ => false,
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
