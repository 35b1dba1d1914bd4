pub mod bridges;
pub mod connectivity;
pub mod degree;
pub mod edge;

use std::{fmt::Debug, hash::Hash};

use itertools::Itertools;

pub use bridges::*;
pub use connectivity::*;
pub use degree::*;
pub use edge::*;

/// Any value usable as a node identifier. Nodes carry no attributes beyond their identity.
pub trait NodeId: Clone + Eq + Hash + Debug {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Debug {}

pub type NumEdges = usize;

/// Provides getters pertaining to the node set spanned by a list of edges
pub trait EdgeListNodes<N: NodeId> {
    /// Returns every node referenced by at least one edge, in order of first appearance
    fn referenced_nodes(&self) -> Vec<N>;

    /// Returns the number of distinct nodes referenced by at least one edge
    fn number_of_referenced_nodes(&self) -> usize {
        self.referenced_nodes().len()
    }
}

impl<N: NodeId> EdgeListNodes<N> for [Edge<N>] {
    fn referenced_nodes(&self) -> Vec<N> {
        self.iter()
            .flat_map(|e| e.endpoints())
            .unique()
            .cloned()
            .collect()
    }
}
