//! Simulation configuration.
//!
//! Loads tuning parameters from a TOML file for easy adjustment without
//! recompiling. All parameters are validated before any simulation state
//! is constructed.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Default config file path
pub const DEFAULT_CONFIG_PATH: &str = "contagion.toml";

/// Parameters governing one simulation run.
///
/// Every node copies the four chance parameters at creation, so changing
/// the config after constructing an engine has no effect on that engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of individuals in the network
    pub num_nodes: usize,
    /// Target average degree of the random graph
    pub avg_node_degree: f64,
    /// Nodes force-set to radicalised at start (clamped to num_nodes)
    pub initial_outbreak_size: usize,
    /// Chance a radicalised node converts each citizen neighbor per tick
    pub conspiracy_spread_chance: f64,
    /// Chance the news cycle is active for a node on a given tick
    pub conspiracy_event_frequency: f64,
    /// Chance an idle news cycle deradicalises a radical
    pub recovery_chance: f64,
    /// Chance a radical becomes an active counter-radical per tick
    pub gain_resistance_chance: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_nodes: 10,
            avg_node_degree: 3.0,
            initial_outbreak_size: 1,
            conspiracy_spread_chance: 0.3,
            conspiracy_event_frequency: 0.6,
            recovery_chance: 0.2,
            gain_resistance_chance: 0.1,
        }
    }
}

impl SimulationConfig {
    /// Loads and validates a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads from the default path, falling back to defaults if absent.
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_CONFIG_PATH).unwrap_or_else(|e| {
            tracing::warn!("could not load {}: {}. Using defaults.", DEFAULT_CONFIG_PATH, e);
            Self::default()
        })
    }

    /// Checks every parameter, failing fast before any graph is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_nodes == 0 {
            return Err(ConfigError::EmptyPopulation(self.num_nodes));
        }
        if !self.avg_node_degree.is_finite() || self.avg_node_degree < 0.0 {
            return Err(ConfigError::InvalidDegree(self.avg_node_degree));
        }
        for (name, value) in [
            ("conspiracy_spread_chance", self.conspiracy_spread_chance),
            ("conspiracy_event_frequency", self.conspiracy_event_frequency),
            ("recovery_chance", self.recovery_chance),
            ("gain_resistance_chance", self.gain_resistance_chance),
        ] {
            if !(0.0..=1.0).contains(&value) || value.is_nan() {
                return Err(ConfigError::InvalidProbability { name, value });
            }
        }
        Ok(())
    }

    /// Outbreak size with the clamp to the population applied.
    pub fn effective_outbreak_size(&self) -> usize {
        self.initial_outbreak_size.min(self.num_nodes)
    }
}
