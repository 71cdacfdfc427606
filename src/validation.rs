//! Input validation for scheduling runs.
//!
//! Checks job sets and policy parameters before an engine runs. Detects:
//! - Empty job sets
//! - Bursts that are zero, negative, NaN or infinite
//! - Duplicate job IDs (when the configuration rejects them)
//! - Round Robin quanta of zero

use std::collections::HashSet;

use crate::config::DuplicateIdPolicy;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{Job, Policy};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// There is nothing to schedule.
    EmptyJobSet,
    /// A job's burst is not a positive finite number.
    InvalidJobParameter,
    /// Two jobs share the same ID.
    DuplicateId,
    /// A policy parameter is out of range.
    InvalidPolicyParameter,
}

impl ValidationErrorKind {
    /// Whether the error concerns job descriptors rather than the policy.
    pub fn is_job_error(&self) -> bool {
        matches!(
            self,
            ValidationErrorKind::InvalidJobParameter | ValidationErrorKind::DuplicateId
        )
    }
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a job set.
///
/// Checks:
/// 1. At least one job
/// 2. Every burst is finite and positive
/// 3. No duplicate IDs, unless `duplicates` is [`DuplicateIdPolicy::Allow`]
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_jobs(jobs: &[Job], duplicates: DuplicateIdPolicy) -> ValidationResult {
    let mut errors = Vec::new();

    if jobs.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyJobSet,
            "No jobs to schedule",
        ));
    }

    let mut seen = HashSet::new();
    for job in jobs {
        if !job.has_valid_burst() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidJobParameter,
                format!("Job {} has invalid burst {}", job.id, job.burst),
            ));
        }

        if !seen.insert(job.id) && duplicates == DuplicateIdPolicy::Reject {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates policy parameters.
pub fn validate_policy(policy: &Policy) -> ValidationResult {
    match policy.parameter_problem() {
        Some(problem) => Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidPolicyParameter,
            problem,
        )]),
        None => Ok(()),
    }
}

/// Fails with `InvalidJobParameter` on the first job with a bad burst.
///
/// Engines call this themselves so they never loop on a burst that can
/// not drain to zero.
pub(crate) fn check_bursts(jobs: &[Job]) -> ScheduleResult<()> {
    jobs.iter().try_for_each(check_burst)
}

pub(crate) fn check_burst(job: &Job) -> ScheduleResult<()> {
    if job.has_valid_burst() {
        Ok(())
    } else {
        Err(ScheduleError::InvalidJobParameter {
            id: job.id,
            burst: job.burst,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_jobs() -> Vec<Job> {
        vec![Job::new(1, 5.0), Job::new(2, 3.0), Job::new(3, 8.0)]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_jobs(&sample_jobs(), DuplicateIdPolicy::Reject).is_ok());
    }

    #[test]
    fn test_empty_job_set() {
        let errors = validate_jobs(&[], DuplicateIdPolicy::Allow).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyJobSet));
    }

    #[test]
    fn test_non_positive_burst() {
        let jobs = vec![Job::new(1, 0.0), Job::new(2, -4.0), Job::new(3, f64::NAN)];
        let errors = validate_jobs(&jobs, DuplicateIdPolicy::Allow).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::InvalidJobParameter));
        assert!(errors[1].message.contains("Job 2"));
    }

    #[test]
    fn test_duplicates_allowed_by_default_policy() {
        let jobs = vec![Job::new(1, 1.0), Job::new(1, 2.0)];
        assert!(validate_jobs(&jobs, DuplicateIdPolicy::Allow).is_ok());
    }

    #[test]
    fn test_duplicates_rejected() {
        let jobs = vec![Job::new(1, 1.0), Job::new(1, 2.0), Job::new(1, 3.0)];
        let errors = validate_jobs(&jobs, DuplicateIdPolicy::Reject).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_multiple_errors() {
        let jobs = vec![Job::new(4, -1.0), Job::new(4, 2.0)];
        let errors = validate_jobs(&jobs, DuplicateIdPolicy::Reject).unwrap_err();
        assert!(errors.len() >= 2);
    }

    #[test]
    fn test_zero_quantum() {
        let policy = Policy::RoundRobin {
            quantum: 0,
            context_switch: 1,
        };
        let errors = validate_policy(&policy).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidPolicyParameter);
        assert!(validate_policy(&Policy::Srtf).is_ok());
    }

    #[test]
    fn test_quantum_message_matches_constructors() {
        let policy = Policy::RoundRobin {
            quantum: 0,
            context_switch: 0,
        };
        let errors = validate_policy(&policy).unwrap_err();
        let expected = ScheduleError::InvalidPolicyParameter(errors[0].message.clone());
        assert_eq!(Policy::round_robin(0, 0), Err(expected.clone()));
        assert_eq!(
            crate::scheduler::RoundRobin::new(0, 0).map(|_| ()),
            Err(expected)
        );
    }

    #[test]
    fn test_check_bursts_reports_first_bad_job() {
        let jobs = vec![Job::new(1, 2.0), Job::new(2, 0.0), Job::new(3, -1.0)];
        assert_eq!(
            check_bursts(&jobs),
            Err(ScheduleError::InvalidJobParameter { id: 2, burst: 0.0 })
        );
    }
}
