//! Fleury's algorithm: walk along unused edges and only cross an edge that disconnects the
//! remaining unused edges if the current node offers no other choice.
//!
//! Each step scans all unused edges for candidates and runs a connectivity check per candidate,
//! yielding O(E^3) time overall. This is only meant for small graphs (tens of edges).

use log::trace;
use smallvec::SmallVec;

use crate::{errors::TourError, graph::*};

/// Walks an Eulerian tour starting at `start`, assuming that the edges are connected and `start`
/// has odd degree if any node does (see [`super::start_node`]).
///
/// Among the unused edges incident to the current node, we take the first (in input order) that
/// [keeps the walk connected](keeps_walk_connected); a bridge is only taken if all candidates
/// are bridges.
pub fn fleury_walk<N: NodeId>(graph: &[Edge<N>], start: N) -> Result<Vec<N>, TourError<N>> {
    let mut unused: Vec<Edge<N>> = graph.to_vec();
    let mut tour = Vec::with_capacity(graph.len() + 1);
    let mut current = start;
    tour.push(current.clone());

    while !unused.is_empty() {
        let candidates: SmallVec<[usize; 8]> = unused
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.is_incident_to(&current).then_some(i))
            .collect();

        let Some(&first_candidate) = candidates.first() else {
            return Err(TourError::TraversalDeadEnd {
                at: current,
                remaining: unused.len(),
            });
        };

        let next = candidates
            .iter()
            .copied()
            .find(|&i| keeps_walk_connected(&unused, &current, i))
            .unwrap_or_else(|| {
                trace!("All {} edges at {current:?} are bridges", candidates.len());
                first_candidate
            });

        let edge = unused.remove(next);
        current = edge.other_endpoint(&current).clone();
        trace!("Traverse {edge:?} to {current:?}; {} edges left", unused.len());
        tour.push(current.clone());

        debug_assert_eq!(unused.len() + tour.len(), graph.len() + 1);
    }

    Ok(tour)
}

/// Returns true if traversing `unused[index]` away from `current` leaves the walker attached to a
/// single connected set of unused edges. Besides the remaining edges staying connected, the edge
/// must not lead into a node without further unused edges (unless it is the last edge). The latter
/// is invisible to [`Bridges::would_disconnect`] as the stranded node becomes isolated.
pub fn keeps_walk_connected<N: NodeId>(unused: &[Edge<N>], current: &N, index: usize) -> bool {
    if unused.len() == 1 {
        return true;
    }

    let destination = unused[index].other_endpoint(current);
    let has_exit = unused
        .iter()
        .enumerate()
        .any(|(i, e)| i != index && e.is_incident_to(destination));

    has_exit && !unused.would_disconnect(index)
}
