//! Hierholzer's algorithm: follow unused edges until stuck, then backtrack and splice in detours.
//! Linear in the number of edges and needs no connectivity checks during the walk.

use fxhash::FxHashMap;
use log::trace;

use crate::{errors::TourError, graph::*};

fn build_incidence_lists<N: NodeId>(graph: &[Edge<N>]) -> FxHashMap<&N, Vec<usize>> {
    let mut incidence: FxHashMap<&N, Vec<usize>> = FxHashMap::default();
    for (i, Edge(u, v)) in graph.iter().enumerate() {
        incidence.entry(u).or_default().push(i);
        if u != v {
            incidence.entry(v).or_default().push(i);
        }
    }
    incidence
}

/// Walks an Eulerian tour starting at `start` with the same preconditions as
/// [`super::fleury_walk`]. Visits each node's edges in input order.
pub fn hierholzer_walk<N: NodeId>(graph: &[Edge<N>], start: N) -> Result<Vec<N>, TourError<N>> {
    let mut incidence = build_incidence_lists(graph);
    for edges in incidence.values_mut() {
        edges.reverse(); // pop from the back in input order
    }

    let mut used = vec![false; graph.len()];

    // each entry stores the node and the edge along which we arrived
    let mut stack: Vec<(&N, Option<usize>)> = vec![(&start, None)];
    let mut backtracked = Vec::with_capacity(graph.len() + 1);

    while let Some(&(u, _)) = stack.last() {
        let next_edge = incidence.get_mut(u).and_then(|edges| {
            while let Some(e) = edges.pop() {
                if !used[e] {
                    return Some(e);
                }
            }
            None
        });

        if let Some(e) = next_edge {
            used[e] = true;
            stack.push((graph[e].other_endpoint(u), Some(e)));
        } else if let Some(top) = stack.pop() {
            backtracked.push(top);
        }
    }

    backtracked.reverse();

    // Splicing is only sound if `start` satisfies the parity requirements; otherwise some
    // consecutive pair is not joined by the edge we recorded, which is where a walk from
    // `start` gets stuck.
    for (i, w) in backtracked.windows(2).enumerate() {
        let (prev, (cur, arrived_by)) = (w[0].0, w[1]);
        let joined = arrived_by.is_some_and(|e| {
            let Edge(a, b) = &graph[e];
            (a == prev && b == cur) || (a == cur && b == prev)
        });
        if !joined {
            return Err(TourError::TraversalDeadEnd {
                at: prev.clone(),
                remaining: graph.len() - i,
            });
        }
    }

    let traversed = backtracked.len() - 1;
    if traversed < graph.len() {
        // edges outside the component of `start`
        let (last, _) = backtracked[traversed];
        return Err(TourError::TraversalDeadEnd {
            at: last.clone(),
            remaining: graph.len() - traversed,
        });
    }

    trace!("Spliced {traversed} edges into a tour");

    Ok(backtracked.into_iter().map(|(u, _)| u.clone()).collect())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn triangle() {
        let graph = edges_from([(1, 2), (2, 3), (3, 1)]);
        assert_eq!(hierholzer_walk(&graph, 1).unwrap(), vec![1, 2, 3, 1]);
    }

    #[test]
    fn splices_detour() {
        // the first closed walk 0-1-2-0 misses the triangle at 2
        let graph = edges_from([(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]);
        let tour = hierholzer_walk(&graph, 0).unwrap();
        assert_eq!(tour, vec![0, 1, 2, 3, 4, 2, 0]);
    }

    #[test]
    fn loops_are_traversed_once() {
        let graph = edges_from([(0, 0), (0, 1), (1, 1), (1, 0)]);
        let tour = hierholzer_walk(&graph, 0).unwrap();
        assert_eq!(tour, vec![0, 0, 1, 1, 0]);
    }

    #[test]
    fn path_from_odd_node() {
        let graph = edges_from([(1, 2), (0, 1)]);
        assert_eq!(hierholzer_walk(&graph, 0).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn unreachable_edges() {
        let graph = edges_from([(0, 1), (1, 0), (2, 3), (3, 2)]);
        assert_eq!(
            hierholzer_walk(&graph, 0).unwrap_err(),
            TourError::TraversalDeadEnd { at: 0, remaining: 2 }
        );
    }

    #[test]
    fn dead_end_on_bad_start() {
        let graph = edges_from([(0, 1), (1, 2)]);
        assert_eq!(
            hierholzer_walk(&graph, 1).unwrap_err(),
            TourError::TraversalDeadEnd { at: 2, remaining: 1 }
        );
    }
}
