//! CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Computes waiting time, turnaround time and execution order for CPU-bound
//! jobs under four classical disciplines. The simulation is pure and
//! deterministic: the only outside input during a run is the
//! [`admission::AdmissionOracle`] consulted by the preemptive engine.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `JobMetrics`, `ExecutionTrace`,
//!   `ScheduleOutcome`, `Policy`
//! - **`scheduler`**: Engines (`Fcfs`, `SjfNonPreemptive`, `Srtf`,
//!   `RoundRobin`) and `ScheduleKpi`
//! - **`admission`**: Mid-run job sources for SRTF
//! - **`io`**: `InputProvider` / `Reporter` seams and their stock implementations
//! - **`simulator`**: Validating driver tying input, engine and reporter together
//! - **`validation`**: Input integrity checks (bursts, duplicate IDs, quanta)
//! - **`workload`**: Seeded random job sets and admission streams
//!
//! # Example
//!
//! ```
//! use u_cpu_schedule::admission::NoAdmission;
//! use u_cpu_schedule::models::{Job, Policy};
//! use u_cpu_schedule::Simulator;
//!
//! let jobs = vec![Job::new(1, 5.0), Job::new(2, 3.0)];
//! let policy = Policy::round_robin(2, 0).unwrap();
//! let outcome = Simulator::new().schedule(&jobs, &policy, &mut NoAdmission).unwrap();
//!
//! assert_eq!(outcome.trace.to_string(), "P1 P2 P1 P2 P1");
//! assert!((outcome.mean_waiting() - 3.5).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7

pub mod admission;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod models;
pub mod scheduler;
pub mod simulator;
pub mod validation;
pub mod workload;

pub use config::SimulationConfig;
pub use error::{ScheduleError, ScheduleResult};
pub use simulator::Simulator;
