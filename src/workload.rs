//! Seeded random workloads.
//!
//! Reproducible job sets and admission streams for experiments and
//! benchmarks. The same seed always yields the same jobs.

use std::ops::RangeInclusive;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::admission::{Admission, AdmissionOracle};
use crate::models::{Job, JobId};

/// Generates `count` jobs with ids `1..=count` and integer bursts drawn
/// uniformly from `bursts`.
///
/// A lower bound of 0 is raised to 1 so every burst is valid.
pub fn random_jobs(count: usize, bursts: RangeInclusive<u32>, seed: u64) -> Vec<Job> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let (low, high) = burst_bounds(&bursts);
    (1..=count)
        .map(|id| Job::new(id as JobId, f64::from(rng.random_range(low..=high))))
        .collect()
}

fn burst_bounds(bursts: &RangeInclusive<u32>) -> (u32, u32) {
    let low = (*bursts.start()).max(1);
    let high = (*bursts.end()).max(low);
    (low, high)
}

/// Oracle admitting random jobs until its budget runs out.
///
/// At each checkpoint a job arrives with probability `probability`;
/// otherwise the oracle declines. After `budget` admissions, or once the
/// id space is used up, it answers [`Admission::Stop`].
///
/// # Example
///
/// ```
/// use u_cpu_schedule::workload::{random_jobs, RandomAdmission};
/// use u_cpu_schedule::scheduler::{Scheduler, Srtf};
///
/// let jobs = random_jobs(4, 1..=10, 7);
/// let mut oracle = RandomAdmission::new(7).with_budget(2);
/// let outcome = Srtf::new().schedule(&jobs, &mut oracle).unwrap();
/// assert!(outcome.job_count() >= 4);
/// ```
#[derive(Debug, Clone)]
pub struct RandomAdmission {
    rng: SmallRng,
    probability: f64,
    bursts: RangeInclusive<u32>,
    next_id: JobId,
    budget: usize,
}

impl RandomAdmission {
    /// Creates an oracle: probability 0.5, bursts 1..=10, ids from 1000,
    /// budget 3.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            probability: 0.5,
            bursts: 1..=10,
            next_id: 1000,
            budget: 3,
        }
    }

    /// Sets the per-checkpoint arrival probability (clamped to 0.0..=1.0).
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Sets the burst range of admitted jobs.
    pub fn with_bursts(mut self, bursts: RangeInclusive<u32>) -> Self {
        self.bursts = bursts;
        self
    }

    /// Sets the id of the first admitted job.
    pub fn with_first_id(mut self, id: JobId) -> Self {
        self.next_id = id;
        self
    }

    /// Sets the number of jobs to admit before stopping.
    pub fn with_budget(mut self, budget: usize) -> Self {
        self.budget = budget;
        self
    }

    /// Admissions left.
    pub fn remaining_budget(&self) -> usize {
        self.budget
    }
}

impl AdmissionOracle for RandomAdmission {
    fn offer(&mut self, _tick: u64) -> Admission {
        if self.budget == 0 {
            return Admission::Stop;
        }
        if !self.rng.random_bool(self.probability) {
            return Admission::Decline;
        }

        let (low, high) = burst_bounds(&self.bursts);
        let job = Job::new(self.next_id, f64::from(self.rng.random_range(low..=high)));
        match self.next_id.checked_add(1) {
            Some(next) => {
                self.next_id = next;
                self.budget -= 1;
            }
            None => self.budget = 0,
        }
        Admission::Admit(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{Scheduler, Srtf};

    #[test]
    fn test_random_jobs_reproducible() {
        let a = random_jobs(20, 1..=9, 42);
        let b = random_jobs(20, 1..=9, 42);
        assert_eq!(a, b);
        assert_eq!(a.len(), 20);
        assert_eq!(a[0].id, 1);
        assert_eq!(a[19].id, 20);
        assert!(a.iter().all(|j| (1.0..=9.0).contains(&j.burst)));
    }

    #[test]
    fn test_zero_lower_bound_raised() {
        let jobs = random_jobs(50, 0..=1, 3);
        assert!(jobs.iter().all(|j| j.has_valid_burst()));
        assert!(jobs.iter().all(|j| (j.burst - 1.0).abs() < 1e-10));
    }

    #[test]
    fn test_always_admit_until_budget() {
        let mut oracle = RandomAdmission::new(1)
            .with_probability(1.0)
            .with_bursts(2..=2)
            .with_first_id(50)
            .with_budget(2);
        assert_eq!(oracle.offer(5), Admission::Admit(Job::new(50, 2.0)));
        assert_eq!(oracle.offer(10), Admission::Admit(Job::new(51, 2.0)));
        assert_eq!(oracle.remaining_budget(), 0);
        assert_eq!(oracle.offer(15), Admission::Stop);
    }

    #[test]
    fn test_last_id_stops_admission() {
        let mut oracle = RandomAdmission::new(4)
            .with_probability(1.0)
            .with_bursts(1..=1)
            .with_first_id(JobId::MAX)
            .with_budget(5);
        assert_eq!(oracle.offer(5), Admission::Admit(Job::new(JobId::MAX, 1.0)));
        assert_eq!(oracle.remaining_budget(), 0);
        assert_eq!(oracle.offer(10), Admission::Stop);
    }

    #[test]
    fn test_never_admit_declines() {
        let mut oracle = RandomAdmission::new(1).with_probability(0.0);
        assert_eq!(oracle.offer(5), Admission::Decline);
        assert_eq!(oracle.remaining_budget(), 3);
    }

    #[test]
    fn test_srtf_with_random_admission_is_reproducible() {
        let jobs = random_jobs(6, 1..=12, 9);
        let first = Srtf::new()
            .schedule(&jobs, &mut RandomAdmission::new(9).with_probability(0.7))
            .unwrap();
        let second = Srtf::new()
            .schedule(&jobs, &mut RandomAdmission::new(9).with_probability(0.7))
            .unwrap();
        assert_eq!(first, second);

        let ticks: f64 = first.jobs.iter().map(|j| j.burst).sum();
        assert_eq!(first.trace.len() as f64, ticks);
    }
}
