//! Error types for the simulation core.

use thiserror::Error;

/// Errors raised while validating or loading a simulation configuration.
///
/// All variants are fatal at construction time: no graph or node state is
/// created once validation fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading a config file
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    /// Error parsing TOML config
    #[error("could not parse config file: {0}")]
    Toml(#[from] toml::de::Error),
    /// `num_nodes` must be at least 1
    #[error("num_nodes must be positive, got {0}")]
    EmptyPopulation(usize),
    /// `avg_node_degree` must be finite and non-negative
    #[error("avg_node_degree must be a finite value >= 0, got {0}")]
    InvalidDegree(f64),
    /// A probability parameter fell outside [0, 1]
    #[error("{name} must be a probability in [0, 1], got {value}")]
    InvalidProbability {
        /// Name of the offending parameter
        name: &'static str,
        /// The out-of-range value
        value: f64,
    },
}

/// Errors raised when a [`RemovalPolicy`](crate::RemovalPolicy) returns an
/// unusable node id. The engine rejects the choice rather than silently
/// corrupting state; the tick in question is not executed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The id does not name an existing node
    #[error("node {id} does not exist (population is {population})")]
    OutOfRange {
        /// The offending id
        id: usize,
        /// Number of nodes in the simulation
        population: usize,
    },
    /// The node is already banned
    #[error("node {0} is already banned")]
    AlreadyBanned(usize),
}
