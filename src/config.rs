//! Simulation configuration.
//!
//! Knobs that change engine behavior without changing the policy itself.
//! Deserializable so callers can keep them next to their workload files.

use serde::{Deserialize, Serialize};

/// Default spacing between SRTF admission checkpoints (ticks).
pub const DEFAULT_ADMISSION_INTERVAL: u64 = 5;

/// How the SRTF engine seeds its per-tick minimum search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionFloor {
    /// Keep the last winner's remaining time as the floor; reset to
    /// unbounded only after a completion.
    #[default]
    Carried,
    /// Reset the floor to unbounded at the start of every tick.
    Fresh,
}

/// Treatment of repeated job ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateIdPolicy {
    /// Accept repeated ids silently.
    #[default]
    Allow,
    /// Report repeated ids as input errors.
    Reject,
}

/// Engine-independent simulation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Ticks between SRTF admission checkpoints. `0` disables admission.
    pub admission_interval: u64,
    /// SRTF minimum-search seeding.
    pub selection_floor: SelectionFloor,
    /// Whether repeated job ids are rejected.
    pub duplicate_ids: DuplicateIdPolicy,
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the admission checkpoint interval.
    pub fn with_admission_interval(mut self, ticks: u64) -> Self {
        self.admission_interval = ticks;
        self
    }

    /// Sets the SRTF selection floor mode.
    pub fn with_selection_floor(mut self, floor: SelectionFloor) -> Self {
        self.selection_floor = floor;
        self
    }

    /// Sets the duplicate id policy.
    pub fn with_duplicate_ids(mut self, policy: DuplicateIdPolicy) -> Self {
        self.duplicate_ids = policy;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            admission_interval: DEFAULT_ADMISSION_INTERVAL,
            selection_floor: SelectionFloor::Carried,
            duplicate_ids: DuplicateIdPolicy::Allow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::new();
        assert_eq!(config.admission_interval, 5);
        assert_eq!(config.selection_floor, SelectionFloor::Carried);
        assert_eq!(config.duplicate_ids, DuplicateIdPolicy::Allow);
    }

    #[test]
    fn test_builder() {
        let config = SimulationConfig::new()
            .with_admission_interval(3)
            .with_selection_floor(SelectionFloor::Fresh)
            .with_duplicate_ids(DuplicateIdPolicy::Reject);
        assert_eq!(config.admission_interval, 3);
        assert_eq!(config.selection_floor, SelectionFloor::Fresh);
        assert_eq!(config.duplicate_ids, DuplicateIdPolicy::Reject);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{ "selection_floor": "fresh" }"#).unwrap();
        assert_eq!(config.admission_interval, DEFAULT_ADMISSION_INTERVAL);
        assert_eq!(config.selection_floor, SelectionFloor::Fresh);
        assert_eq!(config.duplicate_ids, DuplicateIdPolicy::Allow);
    }
}
