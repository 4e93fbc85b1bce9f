//! Simulation engine.
//!
//! Owns the topology, the node vector, the RNG, and the aggregate
//! counters; orchestrates one tick across all nodes in ascending-id order.
//! Strictly single-threaded: each node's transition is fully applied
//! before the next node is visited, so a node radicalised early in a pass
//! acts on its new state later in that same pass.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::SimulationConfig;
use crate::error::{ConfigError, SelectionError};
use crate::metrics::MetricsCollector;
use crate::policy::RemovalPolicy;
use crate::state::{Node, NodeId, State, StateCounts};
use crate::topology::Topology;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// The radicalised count reached 0
    RadicalsEliminated,
    /// The citizen count reached 0; everyone is polarised one way or another
    FullPolarisation,
    /// Neither predicate fired within the tick budget (a normal outcome)
    TickBudgetExhausted,
}

/// Final structured result of a run, assertable by non-visual callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Which condition ended the run
    pub outcome: RunOutcome,
    /// Ticks actually executed (0 if a predicate held from the start)
    pub ticks_executed: u64,
    /// Population counts at the end of the run
    pub counts: StateCounts,
    /// Total bans performed over the whole run
    pub bans: u64,
}

/// The authoritative simulation state and tick protocol.
pub struct SimulationEngine {
    config: SimulationConfig,
    topology: Topology,
    nodes: Vec<Node>,
    rng: SmallRng,
    tick: u64,
    bans: u64,
    metrics: MetricsCollector,
}

impl SimulationEngine {
    /// Builds a fresh simulation from a validated configuration.
    ///
    /// One seeded RNG drives everything, consumed in a fixed order: graph
    /// edges first, then the outbreak sample, then per-tick draws. Two
    /// engines with the same config and seed replay identically.
    pub fn new(config: SimulationConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = SmallRng::seed_from_u64(seed);
        let topology = Topology::erdos_renyi(config.num_nodes, config.avg_node_degree, &mut rng);

        let mut nodes: Vec<Node> = (0..config.num_nodes)
            .map(|id| Node::from_config(id, &config))
            .collect();

        // Seed the outbreak: sample without replacement, then force-set.
        let outbreak = rand::seq::index::sample(
            &mut rng,
            config.num_nodes,
            config.effective_outbreak_size(),
        );
        for id in outbreak.iter() {
            nodes[id].state = State::Radicalised;
        }

        tracing::info!(
            num_nodes = config.num_nodes,
            edges = topology.edge_count(),
            outbreak = config.effective_outbreak_size(),
            seed,
            "simulation constructed"
        );

        let mut metrics = MetricsCollector::new();
        metrics.collect(0, StateCounts::tally(&nodes));

        Ok(Self {
            config,
            topology,
            nodes,
            rng,
            tick: 0,
            bans: 0,
            metrics,
        })
    }

    /// Executes one tick: optional ban (with martyrdom effect), the
    /// scheduled node pass in ascending-id order, then a metrics snapshot.
    ///
    /// An invalid policy choice fails the whole tick before any node state
    /// has changed.
    pub fn step(&mut self, policy: &mut dyn RemovalPolicy) -> Result<(), SelectionError> {
        if let Some(id) = policy.choose(&self.nodes) {
            self.ban(id)?;
        }

        for id in 0..self.nodes.len() {
            self.step_node(id);
        }

        self.tick += 1;
        self.metrics.collect(self.tick, StateCounts::tally(&self.nodes));
        Ok(())
    }

    /// Bans `id` and immediately fires its one-time neighbor-influence
    /// effect: a banned influencer radicalises sympathizers on the way out.
    fn ban(&mut self, id: NodeId) -> Result<(), SelectionError> {
        let node = self
            .nodes
            .get(id)
            .ok_or(SelectionError::OutOfRange {
                id,
                population: self.nodes.len(),
            })?;
        if node.state == State::Banned {
            return Err(SelectionError::AlreadyBanned(id));
        }

        self.nodes[id].state = State::Banned;
        self.bans += 1;
        tracing::info!(node = id, tick = self.tick, "node banned");
        self.radicalise_neighbors(id);
        Ok(())
    }

    /// Per-node state machine for one tick.
    ///
    /// Banned nodes are excluded entirely and consume no draws. The
    /// resistance check always follows the spreading check, and the
    /// news-cycle draw happens for every active node regardless of state;
    /// its deradicalisation branch only fires when the node is still
    /// radicalised at that point.
    fn step_node(&mut self, id: NodeId) {
        if self.nodes[id].state == State::Banned {
            return;
        }

        if self.nodes[id].state == State::Radicalised {
            self.radicalise_neighbors(id);
            if self.rng.gen::<f64>() < self.nodes[id].resistance_chance {
                self.nodes[id].state = State::Immune;
            }
        }

        if self.rng.gen::<f64>() < self.nodes[id].event_frequency {
            if self.nodes[id].state == State::Radicalised {
                if self.rng.gen::<f64>() < self.nodes[id].recovery_chance {
                    self.nodes[id].state = State::Citizen;
                } else {
                    // Failed attempt is still a resolved transition check
                    self.nodes[id].state = State::Radicalised;
                }
            }
        }
    }

    /// Attempts to radicalise each citizen neighbor of `id` independently,
    /// one draw per susceptible neighbor, neighbors visited in ascending
    /// id order.
    fn radicalise_neighbors(&mut self, id: NodeId) {
        let spread_chance = self.nodes[id].spread_chance;
        for neighbor in self.topology.neighbors(id) {
            if self.nodes[neighbor].state != State::Citizen {
                continue;
            }
            if self.rng.gen::<f64>() < spread_chance {
                self.nodes[neighbor].state = State::Radicalised;
                tracing::debug!(from = id, to = neighbor, "neighbor radicalised");
            }
        }
    }

    /// Evaluates the termination predicates against the current state.
    ///
    /// Checked before a tick executes, never mid-tick. The no-radicals
    /// check takes precedence when both hold.
    pub fn termination(&self) -> Option<RunOutcome> {
        let counts = self.counts();
        if counts.radicalised == 0 {
            Some(RunOutcome::RadicalsEliminated)
        } else if counts.citizen == 0 {
            Some(RunOutcome::FullPolarisation)
        } else {
            None
        }
    }

    /// Runs up to `max_ticks` ticks, short-circuiting without executing a
    /// tick as soon as a termination predicate holds at the start of an
    /// iteration.
    pub fn run(
        &mut self,
        max_ticks: u64,
        policy: &mut dyn RemovalPolicy,
    ) -> Result<RunReport, SelectionError> {
        for _ in 0..max_ticks {
            if let Some(outcome) = self.termination() {
                tracing::info!(?outcome, ticks = self.tick, "run terminated early");
                return Ok(self.report(outcome));
            }
            self.step(policy)?;
        }
        tracing::info!(ticks = self.tick, "tick budget exhausted");
        Ok(self.report(RunOutcome::TickBudgetExhausted))
    }

    fn report(&self, outcome: RunOutcome) -> RunReport {
        RunReport {
            outcome,
            ticks_executed: self.tick,
            counts: self.counts(),
            bans: self.bans,
        }
    }

    /// Current per-state population counts.
    pub fn counts(&self) -> StateCounts {
        StateCounts::tally(&self.nodes)
    }

    /// The node collection, in id order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The fixed topology.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Completed ticks so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Total bans performed so far.
    pub fn bans(&self) -> u64 {
        self.bans
    }

    /// The snapshot series collected so far.
    pub fn metrics(&self) -> &MetricsCollector {
        &self.metrics
    }

    /// The configuration this engine was built from.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}
