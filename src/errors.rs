use std::{error::Error, fmt::Debug};

use thiserror::Error;

/// Trait for checking invariants in datastructures
pub trait InvariantCheck<E: Error> {
    fn is_correct(&self) -> Result<(), E>;
}

/// Reasons why no Eulerian tour could be produced for a graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError<N: Debug> {
    #[error("graph has no edges to traverse")]
    EmptyGraph,

    #[error("edges do not form a single connected component")]
    Disconnected,

    #[error("graph has {} nodes of odd degree; a tour requires 0 or 2: {odd_nodes:?}", odd_nodes.len())]
    InvalidDegreeParity { odd_nodes: Vec<N> },

    #[error("no unused edge leaves {at:?} while {remaining} edges remain")]
    TraversalDeadEnd { at: N, remaining: usize },
}

/// Ways in which a node sequence fails to be an Eulerian tour of a graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourViolation {
    #[error("tour has {actual} nodes, expected {expected}")]
    WrongLength { expected: usize, actual: usize },

    #[error("step {step} of the tour does not correspond to an unused edge")]
    UnknownStep { step: usize },
}
