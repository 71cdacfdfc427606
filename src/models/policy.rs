//! Scheduling policy selection.
//!
//! [`PolicyKind`] names a discipline; [`Policy`] adds the parameters the
//! discipline needs (only Round Robin has any).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ScheduleError, ScheduleResult};

/// The four supported disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    SjfNonPreemptive,
    /// Shortest-Remaining-Time-First (preemptive SJF).
    Srtf,
    /// Round Robin with context-switch overhead.
    RoundRobin,
}

impl PolicyKind {
    /// All disciplines in selector order.
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Fcfs,
        PolicyKind::SjfNonPreemptive,
        PolicyKind::Srtf,
        PolicyKind::RoundRobin,
    ];

    /// Numeric selector (1-4).
    pub fn selector(&self) -> u8 {
        match self {
            PolicyKind::Fcfs => 1,
            PolicyKind::SjfNonPreemptive => 2,
            PolicyKind::Srtf => 3,
            PolicyKind::RoundRobin => 4,
        }
    }

    /// Short display label.
    pub fn label(&self) -> &'static str {
        match self {
            PolicyKind::Fcfs => "FCFS",
            PolicyKind::SjfNonPreemptive => "SJF non-preemptive",
            PolicyKind::Srtf => "SRTF",
            PolicyKind::RoundRobin => "Round Robin",
        }
    }

    /// Whether a running job can lose the CPU before finishing.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, PolicyKind::Srtf | PolicyKind::RoundRobin)
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for PolicyKind {
    type Error = ScheduleError;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        match selector {
            1 => Ok(PolicyKind::Fcfs),
            2 => Ok(PolicyKind::SjfNonPreemptive),
            3 => Ok(PolicyKind::Srtf),
            4 => Ok(PolicyKind::RoundRobin),
            other => Err(ScheduleError::InvalidPolicySelector(other.to_string())),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = ScheduleError;

    /// Accepts the numeric selector or a case-insensitive name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "1" | "fcfs" => Ok(PolicyKind::Fcfs),
            "2" | "sjf" | "sjf-non-preemptive" => Ok(PolicyKind::SjfNonPreemptive),
            "3" | "srtf" | "sjf-preemptive" => Ok(PolicyKind::Srtf),
            "4" | "rr" | "round-robin" => Ok(PolicyKind::RoundRobin),
            _ => Err(ScheduleError::InvalidPolicySelector(s.to_string())),
        }
    }
}

/// A discipline together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    SjfNonPreemptive,
    /// Shortest-Remaining-Time-First.
    Srtf,
    /// Round Robin.
    RoundRobin {
        /// Maximum slice length. Must be positive.
        quantum: u32,
        /// Overhead charged after every slice.
        context_switch: u32,
    },
}

impl Policy {
    /// Round Robin with a validated quantum.
    pub fn round_robin(quantum: u32, context_switch: u32) -> ScheduleResult<Self> {
        let policy = Policy::RoundRobin {
            quantum,
            context_switch,
        };
        match policy.parameter_problem() {
            Some(problem) => Err(ScheduleError::InvalidPolicyParameter(problem.into())),
            None => Ok(policy),
        }
    }

    /// Describes what is wrong with the parameters, if anything.
    pub(crate) fn parameter_problem(&self) -> Option<&'static str> {
        match self {
            Policy::RoundRobin { quantum: 0, .. } => Some("round robin quantum must be positive"),
            _ => None,
        }
    }

    /// Builds a policy from a selector and optional Round Robin parameters.
    ///
    /// The quantum is required for Round Robin; the context-switch time
    /// defaults to 0. Both are ignored by the other disciplines.
    pub fn from_kind(
        kind: PolicyKind,
        quantum: Option<u32>,
        context_switch: Option<u32>,
    ) -> ScheduleResult<Self> {
        match kind {
            PolicyKind::Fcfs => Ok(Policy::Fcfs),
            PolicyKind::SjfNonPreemptive => Ok(Policy::SjfNonPreemptive),
            PolicyKind::Srtf => Ok(Policy::Srtf),
            PolicyKind::RoundRobin => {
                let quantum = quantum.ok_or_else(|| {
                    ScheduleError::InvalidPolicyParameter("round robin requires a quantum".into())
                })?;
                Policy::round_robin(quantum, context_switch.unwrap_or(0))
            }
        }
    }

    /// The discipline of this policy.
    pub fn kind(&self) -> PolicyKind {
        match self {
            Policy::Fcfs => PolicyKind::Fcfs,
            Policy::SjfNonPreemptive => PolicyKind::SjfNonPreemptive,
            Policy::Srtf => PolicyKind::Srtf,
            Policy::RoundRobin { .. } => PolicyKind::RoundRobin,
        }
    }
}
