//! Eulerian tours of undirected multigraphs given as edge lists.
//!
//! A tour is the sequence of nodes visited while walking along every edge exactly once. It exists
//! iff the edges form a single connected component (isolated nodes are irrelevant as they are not
//! part of the edge list) and either none or exactly two nodes have odd degree. In the first case
//! the tour is a circuit, in the second it is a path between the two odd nodes.
//!
//! [`fleury`] greedily walks along edges and only crosses a bridge if there is no alternative;
//! [`hierholzer`] splices closed walks and avoids all connectivity checks.

pub mod check;
pub mod fleury;
pub mod hierholzer;

use std::str::FromStr;

use log::debug;
use serde::Serialize;

use crate::{errors::TourError, graph::*};

pub use check::*;
pub use fleury::*;
pub use hierholzer::*;

/// Returns an Eulerian tour of `graph` or an empty vector if none exists.
///
/// All reasons for infeasibility collapse into the empty result; use [`try_find_eulerian_tour`]
/// to tell them apart.
///
/// # Example
/// ```
/// use eulerian::tour::find_eulerian_tour;
/// let tour = find_eulerian_tour(&[(1, 2), (2, 3), (3, 1)]);
/// assert_eq!(tour, vec![1, 2, 3, 1]);
///
/// assert!(find_eulerian_tour(&[(1, 2), (3, 4)]).is_empty());
/// ```
pub fn find_eulerian_tour<N: NodeId>(graph: &[(N, N)]) -> Vec<N> {
    let edges: Vec<Edge<N>> = edges_from(graph);
    try_find_eulerian_tour(&edges).unwrap_or_default()
}

/// Computes an Eulerian tour of `graph` with Fleury's algorithm.
///
/// # Example
/// ```
/// use eulerian::{errors::TourError, graph::edges_from, tour::try_find_eulerian_tour};
/// let graph = edges_from([(1, 2), (2, 3), (3, 4)]);
/// assert_eq!(try_find_eulerian_tour(&graph), Ok(vec![1, 2, 3, 4]));
///
/// let star = edges_from([(0, 1), (0, 2), (0, 3)]);
/// assert!(matches!(
///     try_find_eulerian_tour(&star),
///     Err(TourError::InvalidDegreeParity { .. })
/// ));
/// ```
pub fn try_find_eulerian_tour<N: NodeId>(graph: &[Edge<N>]) -> Result<Vec<N>, TourError<N>> {
    Algorithm::Fleury.find_tour(graph).map(EulerianTour::into_nodes)
}

/// Whether the tour returns to its start node
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TourKind {
    Circuit,
    Path,
}

/// A node sequence that traverses each edge of a graph exactly once
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EulerianTour<N> {
    nodes: Vec<N>,
}

impl<N: NodeId> EulerianTour<N> {
    pub(crate) fn new(nodes: Vec<N>) -> Self {
        debug_assert!(nodes.len() >= 2);
        Self { nodes }
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }

    pub fn start(&self) -> &N {
        &self.nodes[0]
    }

    pub fn end(&self) -> &N {
        &self.nodes[self.nodes.len() - 1]
    }

    pub fn number_of_edges(&self) -> NumEdges {
        self.nodes.len() - 1
    }

    pub fn kind(&self) -> TourKind {
        if self.start() == self.end() {
            TourKind::Circuit
        } else {
            TourKind::Path
        }
    }

    /// Returns the traversed edges in order, oriented in walking direction
    pub fn steps(&self) -> impl Iterator<Item = Edge<&N>> + '_ {
        self.nodes.windows(2).map(|w| Edge(&w[0], &w[1]))
    }
}

/// The algorithms available to construct a tour
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Fleury,
    Hierholzer,
}

impl Algorithm {
    /// Checks feasibility and computes a tour starting at the node chosen by [`start_node`]
    pub fn find_tour<N: NodeId>(self, graph: &[Edge<N>]) -> Result<EulerianTour<N>, TourError<N>> {
        let start = start_node(graph)?;
        debug!(
            "Run {self:?} on {} edges starting at {start:?}",
            graph.len()
        );

        let nodes = match self {
            Algorithm::Fleury => fleury_walk(graph, start)?,
            Algorithm::Hierholzer => hierholzer_walk(graph, start)?,
        };

        Ok(EulerianTour::new(nodes))
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fleury" => Ok(Algorithm::Fleury),
            "hierholzer" => Ok(Algorithm::Hierholzer),
            _ => Err(format!("unknown algorithm {s:?}; expected fleury or hierholzer")),
        }
    }
}

/// Rejects graphs without an Eulerian tour and otherwise returns the node to start at: the first
/// odd-degree node if there are two of them, and the first endpoint of the first edge otherwise.
pub fn start_node<N: NodeId>(graph: &[Edge<N>]) -> Result<N, TourError<N>> {
    let Some(first_edge) = graph.first() else {
        return Err(TourError::EmptyGraph);
    };

    if !graph.is_connected() {
        debug!("Reject graph with {} edges: disconnected", graph.len());
        return Err(TourError::Disconnected);
    }

    let mut odd_nodes = graph.odd_degree_nodes();
    match odd_nodes.len() {
        0 => Ok(first_edge.0.clone()),
        2 => Ok(odd_nodes.swap_remove(0)),
        _ => {
            debug!(
                "Reject graph with {} edges: {} odd-degree nodes",
                graph.len(),
                odd_nodes.len()
            );
            Err(TourError::InvalidDegreeParity { odd_nodes })
        }
    }
}
