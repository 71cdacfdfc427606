//! CPU scheduling domain models.
//!
//! Jobs go into an engine; a [`ScheduleOutcome`] comes out carrying
//! per-job [`JobMetrics`] and the [`ExecutionTrace`] of dispatch slices.
//!
//! # Domain Mappings
//!
//! | u-cpu-schedule | OS textbook | Queueing |
//! |----------------|-------------|----------|
//! | Job | Process | Customer |
//! | burst | CPU burst | Service time |
//! | Dispatch | Time slice | Service period |
//! | ScheduleOutcome | Gantt chart + table | Sample path |

mod job;
mod outcome;
mod policy;
mod trace;

pub use job::{Job, JobId, JobMetrics};
pub use outcome::ScheduleOutcome;
pub use policy::{Policy, PolicyKind};
pub use trace::{Dispatch, ExecutionTrace};
