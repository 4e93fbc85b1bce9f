//! Core simulation logic for conspiracy spread over a social network.
//!
//! A synthetic Erdős–Rényi network of individuals, each in one of four
//! states (citizen, radicalised, banned, immune), evolves tick by tick
//! under peer influence and periodic news-cycle events. The engine is
//! strictly sequential and fully deterministic under a fixed seed; all
//! interactive or visual concerns sit behind the [`RemovalPolicy`] and
//! [`Presenter`] seams.

pub mod config;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod policy;
pub mod presenter;
pub mod state;
pub mod topology;

pub use config::SimulationConfig;
pub use engine::{RunOutcome, RunReport, SimulationEngine};
pub use error::{ConfigError, SelectionError};
pub use metrics::{MetricsCollector, TickSnapshot};
pub use policy::{NoRemoval, RemovalPolicy, ScriptedRemovals};
pub use presenter::Presenter;
pub use state::{Node, NodeId, State, StateCounts};
pub use topology::Topology;
