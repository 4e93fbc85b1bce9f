//! Node states and per-node data.

use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;

/// Dense integer identity of a node, stable for the whole run.
pub type NodeId = usize;

/// The four states an individual can occupy. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    /// Susceptible; neither radicalised nor resistant
    Citizen,
    /// Believes and spreads the conspiracy narrative
    Radicalised,
    /// Removed from active participation but still a graph vertex
    Banned,
    /// Actively resistant; never reverts
    Immune,
}

impl State {
    /// Short display label, as used by the text presenter.
    pub fn label(&self) -> &'static str {
        match self {
            State::Citizen => "citizen",
            State::Radicalised => "radicalised",
            State::Banned => "banned",
            State::Immune => "immune",
        }
    }
}

/// A single population unit.
///
/// The four chance parameters are copied from the global configuration at
/// creation and never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Stable id, equal to this node's index in the engine's node vector
    pub id: NodeId,
    /// Current state
    pub state: State,
    /// Chance to convert each citizen neighbor per tick while radicalised
    pub spread_chance: f64,
    /// Chance the news cycle is active for this node on a given tick
    pub event_frequency: f64,
    /// Chance an idle news cycle deradicalises this node
    pub recovery_chance: f64,
    /// Chance to become immune per tick while radicalised
    pub resistance_chance: f64,
}

impl Node {
    /// Creates a citizen with behavior parameters copied from `config`.
    pub fn from_config(id: NodeId, config: &SimulationConfig) -> Self {
        Self {
            id,
            state: State::Citizen,
            spread_chance: config.conspiracy_spread_chance,
            event_frequency: config.conspiracy_event_frequency,
            recovery_chance: config.recovery_chance,
            resistance_chance: config.gain_resistance_chance,
        }
    }
}

/// Per-state population counts at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCounts {
    pub citizen: usize,
    pub radicalised: usize,
    pub banned: usize,
    pub immune: usize,
}

impl StateCounts {
    /// Tallies the current states of `nodes`.
    pub fn tally(nodes: &[Node]) -> Self {
        let mut counts = Self::default();
        for node in nodes {
            match node.state {
                State::Citizen => counts.citizen += 1,
                State::Radicalised => counts.radicalised += 1,
                State::Banned => counts.banned += 1,
                State::Immune => counts.immune += 1,
            }
        }
        counts
    }

    /// Total population covered by these counts.
    pub fn total(&self) -> usize {
        self.citizen + self.radicalised + self.banned + self.immune
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_copies_config_parameters() {
        let config = SimulationConfig {
            conspiracy_spread_chance: 0.9,
            gain_resistance_chance: 0.05,
            ..Default::default()
        };
        let node = Node::from_config(3, &config);
        assert_eq!(node.id, 3);
        assert_eq!(node.state, State::Citizen);
        assert!((node.spread_chance - 0.9).abs() < f64::EPSILON);
        assert!((node.resistance_chance - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tally_conserves_population() {
        let config = SimulationConfig::default();
        let mut nodes: Vec<Node> = (0..6).map(|i| Node::from_config(i, &config)).collect();
        nodes[0].state = State::Radicalised;
        nodes[1].state = State::Banned;
        nodes[2].state = State::Immune;

        let counts = StateCounts::tally(&nodes);
        assert_eq!(counts.citizen, 3);
        assert_eq!(counts.radicalised, 1);
        assert_eq!(counts.banned, 1);
        assert_eq!(counts.immune, 1);
        assert_eq!(counts.total(), nodes.len());
    }
}
