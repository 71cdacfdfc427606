//! Scheduling engines and KPI evaluation.
//!
//! Each discipline is a [`Scheduler`]: it borrows the job set, keeps its
//! scratch state (remaining times, completion flags) local to the run, and
//! returns a [`ScheduleOutcome`].
//!
//! # Engines
//!
//! | Engine | Preemptive | Uses oracle |
//! |--------|-----------|-------------|
//! | [`Fcfs`] | no | no |
//! | [`SjfNonPreemptive`] | no | no |
//! | [`Srtf`] | yes | yes |
//! | [`RoundRobin`] | yes | no |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod kpi;
mod ordering;
mod round_robin;
mod sequential;
mod srtf;

pub use kpi::ScheduleKpi;
pub use ordering::sort_by_burst;
pub use round_robin::RoundRobin;
pub use sequential::{Fcfs, SjfNonPreemptive};
pub use srtf::Srtf;

use std::fmt::Debug;

use crate::admission::AdmissionOracle;
use crate::config::SimulationConfig;
use crate::error::ScheduleResult;
use crate::models::{Job, Policy, PolicyKind, ScheduleOutcome};

/// A CPU scheduling discipline.
///
/// Implementations are immutable and may be reused across runs; running
/// the same engine twice on the same jobs yields identical outcomes as
/// long as the oracle answers identically.
pub trait Scheduler: Send + Sync + Debug {
    /// Discipline implemented by this engine.
    fn kind(&self) -> PolicyKind;

    /// Runs the discipline over `jobs`.
    ///
    /// Only preemptive engines with admission checkpoints consult `oracle`.
    fn schedule(
        &self,
        jobs: &[Job],
        oracle: &mut dyn AdmissionOracle,
    ) -> ScheduleResult<ScheduleOutcome>;
}

/// Builds the engine for `policy`.
pub fn scheduler_for(
    policy: &Policy,
    config: &SimulationConfig,
) -> ScheduleResult<Box<dyn Scheduler>> {
    Ok(match *policy {
        Policy::Fcfs => Box::new(Fcfs),
        Policy::SjfNonPreemptive => Box::new(SjfNonPreemptive),
        Policy::Srtf => Box::new(Srtf::from_config(config)),
        Policy::RoundRobin {
            quantum,
            context_switch,
        } => Box::new(RoundRobin::new(quantum, context_switch)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admission::{Admission, NoAdmission, ScriptedAdmission};
    use crate::config::SelectionFloor;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn all_policies() -> Vec<Policy> {
        vec![
            Policy::Fcfs,
            Policy::SjfNonPreemptive,
            Policy::Srtf,
            Policy::RoundRobin {
                quantum: 3,
                context_switch: 1,
            },
        ]
    }

    fn run(policy: &Policy, jobs: &[Job]) -> ScheduleOutcome {
        scheduler_for(policy, &SimulationConfig::default())
            .unwrap()
            .schedule(jobs, &mut NoAdmission)
            .unwrap()
    }

    fn job_set() -> impl Strategy<Value = Vec<Job>> {
        prop::collection::vec((1i64..50, 1u32..15), 1..8).prop_map(|specs| {
            specs
                .into_iter()
                .map(|(id, burst)| Job::new(id, f64::from(burst)))
                .collect()
        })
    }

    #[test]
    fn test_scheduler_for_kinds() {
        for policy in all_policies() {
            let engine = scheduler_for(&policy, &SimulationConfig::default()).unwrap();
            assert_eq!(engine.kind(), policy.kind());
        }
    }

    #[test]
    fn test_scheduler_for_zero_quantum() {
        let policy = Policy::RoundRobin {
            quantum: 0,
            context_switch: 0,
        };
        assert!(scheduler_for(&policy, &SimulationConfig::default()).is_err());
    }

    #[test]
    fn test_single_job_every_policy() {
        let jobs = [Job::new(1, 6.0)];
        let policies = [
            Policy::Fcfs,
            Policy::SjfNonPreemptive,
            Policy::Srtf,
            Policy::RoundRobin {
                quantum: 2,
                context_switch: 0,
            },
        ];
        for policy in &policies {
            let outcome = run(policy, &jobs);
            assert!((outcome.jobs[0].waiting - 0.0).abs() < 1e-10, "{policy:?}");
            assert!((outcome.jobs[0].turnaround - 6.0).abs() < 1e-10, "{policy:?}");
        }
    }

    proptest! {
        #[test]
        fn prop_turnaround_is_waiting_plus_burst(jobs in job_set()) {
            for policy in all_policies() {
                let outcome = run(&policy, &jobs);
                prop_assert_eq!(outcome.job_count(), jobs.len());
                for m in &outcome.jobs {
                    prop_assert!(m.is_consistent(EPS));
                    prop_assert!(m.waiting >= -EPS);
                }
            }
        }

        #[test]
        fn prop_every_job_gets_its_burst(jobs in job_set()) {
            for policy in all_policies() {
                let outcome = run(&policy, &jobs);
                let traced: f64 = outcome.trace.dispatches().iter().map(|d| d.duration).sum();
                let total: f64 = jobs.iter().map(|j| j.burst).sum();
                prop_assert!((traced - total).abs() < EPS);
            }
        }

        #[test]
        fn prop_deterministic(jobs in job_set()) {
            for policy in all_policies() {
                prop_assert_eq!(run(&policy, &jobs), run(&policy, &jobs));
            }
        }

        #[test]
        fn prop_srtf_ticks_match_bursts(
            jobs in job_set(),
            admitted in prop::collection::vec(1u32..6, 0..4),
        ) {
            let extra: Vec<Job> = admitted
                .iter()
                .enumerate()
                .map(|(i, &b)| Job::new(100 + i as i64, f64::from(b)))
                .collect();
            let mut oracle = ScriptedAdmission::every_checkpoint(extra);
            let outcome = Srtf::new().schedule(&jobs, &mut oracle).unwrap();

            let ticks: f64 = outcome.jobs.iter().map(|j| j.burst).sum();
            prop_assert_eq!(outcome.trace.len() as f64, ticks);
            for m in &outcome.jobs {
                let ran = outcome.trace.dispatches().iter().filter(|d| d.job_id == m.id).count();
                let same_id_burst: f64 = outcome.jobs.iter().filter(|j| j.id == m.id).map(|j| j.burst).sum();
                prop_assert_eq!(ran as f64, same_id_burst);
            }
        }

        #[test]
        fn prop_srtf_floor_modes_agree(
            jobs in job_set(),
            script in prop::collection::vec(prop::option::of(1u32..6), 0..4),
        ) {
            let answers: Vec<Admission> = script
                .iter()
                .enumerate()
                .map(|(i, b)| match b {
                    Some(b) => Admission::Admit(Job::new(200 + i as i64, f64::from(*b))),
                    None => Admission::Decline,
                })
                .collect();
            let carried = Srtf::new()
                .with_selection_floor(SelectionFloor::Carried)
                .schedule(&jobs, &mut ScriptedAdmission::new(answers.clone()))
                .unwrap();
            let fresh = Srtf::new()
                .with_selection_floor(SelectionFloor::Fresh)
                .schedule(&jobs, &mut ScriptedAdmission::new(answers))
                .unwrap();
            prop_assert_eq!(carried, fresh);
        }

        #[test]
        fn prop_sjf_is_optimal_mean_waiting(jobs in job_set()) {
            let sjf = run(&Policy::SjfNonPreemptive, &jobs).mean_waiting();
            let fcfs = run(&Policy::Fcfs, &jobs).mean_waiting();
            prop_assert!(sjf <= fcfs + EPS);
        }
    }
}
