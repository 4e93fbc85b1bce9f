//! Presenter seam.
//!
//! Rendering lives entirely outside the engine's mutation path; a
//! presenter only ever sees shared references and may be invoked every
//! tick, only at termination, or never.

use crate::state::Node;
use crate::topology::Topology;

/// Read-only consumer of the current simulation state.
pub trait Presenter {
    /// Renders the current state. Must not mutate anything.
    fn render(&mut self, nodes: &[Node], topology: &Topology);
}
