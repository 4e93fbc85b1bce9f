//! Removal policies.
//!
//! The "ask a human which node to ban" behavior is modeled as an injected
//! strategy object so the engine stays free of prompt/IO logic. A test
//! harness supplies a scripted or null policy; the CLI supplies an
//! interactive one.

use std::collections::HashMap;

use crate::state::{Node, NodeId};

/// Decides, once per tick and before the scheduled pass, whether to ban a
/// node this tick.
///
/// Returning the id of a nonexistent or already-banned node is rejected by
/// the engine with a [`SelectionError`](crate::SelectionError).
pub trait RemovalPolicy {
    /// Returns the node to ban this tick, or `None` to skip banning.
    fn choose(&mut self, nodes: &[Node]) -> Option<NodeId>;
}

/// Policy that never bans anyone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRemoval;

impl RemovalPolicy for NoRemoval {
    fn choose(&mut self, _nodes: &[Node]) -> Option<NodeId> {
        None
    }
}

/// Policy that bans predetermined nodes at predetermined ticks.
///
/// Calls to `choose` are counted internally; the ban scheduled for tick t
/// fires on the t-th call (zero-based), matching the engine's tick counter
/// at the moment the policy runs.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRemovals {
    bans_by_tick: HashMap<u64, NodeId>,
    next_call: u64,
}

impl ScriptedRemovals {
    /// Builds a script from `(tick, node_id)` pairs.
    pub fn new(bans: impl IntoIterator<Item = (u64, NodeId)>) -> Self {
        Self {
            bans_by_tick: bans.into_iter().collect(),
            next_call: 0,
        }
    }
}

impl RemovalPolicy for ScriptedRemovals {
    fn choose(&mut self, _nodes: &[Node]) -> Option<NodeId> {
        let tick = self.next_call;
        self.next_call += 1;
        self.bans_by_tick.get(&tick).copied()
    }
}
